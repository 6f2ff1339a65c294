//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories generate unique values for every column that
//! carries a uniqueness constraint so tests can create as many rows as they need.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let car = factory::car::create_car(&db).await?;
//!     let customer = factory::customer::create_customer(&db).await?;
//!
//!     // Create a reservation together with its car and customer
//!     let (car, customer, reservation) =
//!         factory::helpers::create_reservation_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let car = factory::car::CarFactory::new(&db)
//!     .producer("BMW")
//!     .model("135i")
//!     .registration_number("PO WOLNY")
//!     .build()
//!     .await?;
//! ```

pub mod car;
pub mod customer;
pub mod employee;
pub mod helpers;
pub mod position;
pub mod reservation;

// Re-export commonly used factory functions for concise usage
pub use car::create_car;
pub use customer::create_customer;
pub use employee::create_employee;
pub use position::create_position;
pub use reservation::create_reservation;
