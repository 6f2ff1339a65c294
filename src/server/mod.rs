//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, request validation and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, transactions and the reservation booking engine
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, per-car locks)
//! - **Startup** (`startup`) - Logging, database connection and migrations, shutdown signal
//! - **Router** (`router`) - Axum route configuration and OpenAPI documentation
//! - **Scheduler** (`scheduler/`) - Cron jobs, currently the daily rental reminders
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** validates the payload, converts DTOs to params, calls the service
//! 3. **Service** applies business rules, opening a transaction where it writes
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
