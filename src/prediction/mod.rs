pub mod client;
pub mod payload;

pub use client::{HttpPredictionClient, PredictionService};
pub use payload::PredictionRequest;
