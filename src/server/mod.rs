//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and the permission guard
//!
//! Supporting modules provide application infrastructure: `config` (environment
//! configuration), `state` (shared state), `startup` (database and session
//! initialization), `router` (route table and API docs), and `util` (pure
//! helpers for localization, field coercion, and photo paths).
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Controller** resolves the actor through `AuthGuard`, converts raw
//!    request input into parameter models, calls one service
//! 3. **Service** executes the business logic against the repositories
//! 4. **Controller** converts the returned domain model to a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
