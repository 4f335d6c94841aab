//! Health advisory engine.
//!
//! Scores an environmental reading into a risk tier and composes diet,
//! hydration, activity and precaution advice for it. The engine itself is
//! pure; range checks run on request input before it is called.

mod composer;
mod models;
mod routes;
mod scorer;
mod service;
mod validation;

pub use models::{AirQuality, EnvironmentReading, HealthRecommendation};
pub use routes::router;
pub use service::generate;
pub use validation::ValidationError;
