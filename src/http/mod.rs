//! HTTP client layer — `PredictionsHttp`, one GET per backend endpoint.

pub mod client;

pub use client::PredictionsHttp;
