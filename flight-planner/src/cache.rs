//! Caching layer for route queries.
//!
//! A published network never changes, so the answer for a (start, end)
//! pair is stable for as long as the network is served. Results are
//! cached with a TTL anyway to bound memory on long-running servers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::City;
use crate::network::Network;
use crate::planner::{Planner, PlannerConfig, RouteResult};

/// Cache key for route queries: (start, end).
type RouteKey = (City, City);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

/// Planner with a result cache in front of it.
pub struct CachedPlanner {
    network: Arc<Network>,
    config: Arc<PlannerConfig>,
    routes: MokaCache<RouteKey, Arc<RouteResult>>,
}

impl CachedPlanner {
    /// Create a cached planner over a published network.
    pub fn new(network: Arc<Network>, config: Arc<PlannerConfig>, cache: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(cache.ttl)
            .max_capacity(cache.max_capacity)
            .build();

        Self {
            network,
            config,
            routes,
        }
    }

    /// Returns the network being planned over.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Returns the planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a route, using the cache if available.
    pub async fn query(&self, start: &City, end: &City) -> Arc<RouteResult> {
        let key = (start.clone(), end.clone());

        // Try cache first
        if let Some(cached) = self.routes.get(&key).await {
            trace!(%start, %end, "route cache hit");
            return cached;
        }

        let planner = Planner::new(&self.network, &self.config);
        let result = Arc::new(planner.query(start, end));
        self.routes.insert(key, result.clone()).await;
        result
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}
