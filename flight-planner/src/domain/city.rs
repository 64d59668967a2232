//! City identifier type.

use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid city label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city label: {reason}")]
pub struct InvalidCity {
    reason: &'static str,
}

/// An opaque city label.
///
/// Labels are non-empty and contain no whitespace. Ordering is
/// lexicographic on the label, which is what makes route search
/// deterministic when several shortest paths exist.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::City;
///
/// let a = City::parse("A").unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// assert!(City::parse("").is_err());
/// assert!(City::parse("New York").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct City(Arc<str>);

impl City {
    /// Parse a city label.
    pub fn parse(s: &str) -> Result<Self, InvalidCity> {
        if s.is_empty() {
            return Err(InvalidCity {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidCity {
                reason: "must not contain whitespace",
            });
        }

        Ok(City(Arc::from(s)))
    }

    /// Parse a label after trimming surrounding whitespace.
    ///
    /// Used for user input, where stray spaces are common.
    pub fn parse_trimmed(s: &str) -> Result<Self, InvalidCity> {
        Self::parse(s.trim())
    }

    /// Returns the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City({})", self.as_str())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert!(City::parse("A").is_ok());
        assert!(City::parse("LHR").is_ok());
        assert!(City::parse("São-Paulo").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(City::parse("").is_err());
    }

    #[test]
    fn reject_whitespace() {
        assert!(City::parse(" A").is_err());
        assert!(City::parse("A B").is_err());
        assert!(City::parse("A\t").is_err());
    }

    #[test]
    fn trimmed_accepts_padding() {
        let city = City::parse_trimmed("  B \n").unwrap();
        assert_eq!(city.as_str(), "B");
        assert!(City::parse_trimmed("   ").is_err());
    }

    #[test]
    fn display_and_debug() {
        let city = City::parse("C").unwrap();
        assert_eq!(format!("{}", city), "C");
        assert_eq!(format!("{:?}", city), "City(C)");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = City::parse("A").unwrap();
        let b = City::parse("B").unwrap();
        let ab = City::parse("AB").unwrap();
        assert!(a < ab);
        assert!(ab < b);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(City::parse("A").unwrap());
        assert!(set.contains(&City::parse("A").unwrap()));
        assert!(!set.contains(&City::parse("B").unwrap()));
    }
}
