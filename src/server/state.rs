//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the database connection pool
//! and the per-car lock registry used by the booking engine.

use sea_orm::DatabaseConnection;

use crate::server::service::reservation::lock::CarLockManager;

/// Application state containing shared resources.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool and
/// `CarLockManager` shares its lock map through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Registry of per-car locks serializing booking transactions.
    ///
    /// Must be shared by every handler that creates or updates reservations so
    /// that two bookings for the same car never run their checks concurrently.
    pub car_locks: CarLockManager,
}

impl AppState {
    /// Creates a new application state with an empty lock registry.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            car_locks: CarLockManager::new(),
        }
    }
}
