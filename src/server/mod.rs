//! HTTP backend for the vehicle ledger.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, input-mode aware responses and pages
//! - **Service Layer** (`service/`) - Business rules, not-found and conflict mapping, auth
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - The access gate and the typed session wrapper
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, page renderer)
//! - **Startup** (`startup`) - Tracing, database, session store and shutdown signal
//! - **Router** (`router`) - Route table, access gate and static files
//! - **Doc** (`doc`) - OpenAPI document served at `/docs`
//! - **View** (`view`) - Page rendering seam
//!
//! # Request Flow
//!
//! 1. **Router** matches the request; unmatched requests go to the 404 fallback
//! 2. **Middleware** classifies the path and resolves the session into an `AuthContext`
//! 3. **Controller** parses the `Payload`, builds params and calls a service
//! 4. **Service** applies business rules and calls repositories
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** renders JSON, a redirect or a page depending on the input mode

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod view;
