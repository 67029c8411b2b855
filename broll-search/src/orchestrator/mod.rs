//! Aggregation pipeline: concurrent provider fan-out, scoring, ranking.

pub mod scoring;
pub mod search;
pub mod similarity;
