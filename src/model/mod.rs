pub mod dataset;
pub mod features;
pub mod logistic;
pub mod predictor;

pub use predictor::{ModelError, PredictionReport, Verdict};
