//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and stores
//! - **Data Layer** (`data/`) - Store traits and their SeaORM repositories
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Storage** (`storage/`) - Image upload to S3-compatible object storage
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, image storage)
//! - **Startup** (`startup`) - Tracing, database, and storage initialization
//! - **Router** (`router`) - Axum route configuration and middleware layers
//! - **OpenAPI** (`openapi`) - Generated API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** converts DTOs to params and calls a service
//! 3. **Service** runs the business logic against stores and storage
//! 4. **Data** queries the database and returns entity models
//! 5. **Service** converts them to domain models
//! 6. **Controller** converts domain models to DTOs for the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod openapi;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod storage;
pub mod util;
