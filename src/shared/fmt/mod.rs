//! Human-readable formatting for dashboard values.

pub mod num;
