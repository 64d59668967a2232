//! Flight route planner server.
//!
//! Answers "how do I get from here to there with the fewest flights?" over
//! a network whose timetable repeats every week, listing every way of
//! flying that route.

pub mod cache;
pub mod config;
pub mod domain;
pub mod fixture;
pub mod network;
pub mod planner;
pub mod web;
