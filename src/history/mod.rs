//! Measurement history: storage, listing and export endpoints.

mod models;
mod repository;
mod routes;

pub use models::MeasurementRecord;
pub use repository::{
    HistoryError, HistoryRepository, InMemoryHistoryRepository, PgHistoryRepository,
    DEFAULT_HISTORY_LIMIT,
};
pub use routes::router;
