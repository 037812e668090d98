//! Server-side API backend.
//!
//! This module contains the backend of the ticket dashboard: API endpoints, business
//! logic and data access over the database shared with the ticket bot. The backend uses
//! Axum as the web framework, SeaORM for database operations and Serenity's REST client
//! for Discord lookups.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Orchestration between controllers, data layer and external clients
//! - **Data Layer** (`data/`) - Database queries and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, archive, Discord context)
//! - **Startup** (`startup`) - Initialization of database, sessions and clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Utilities** (`util/`) - ID parsing and bounded fan-out helpers
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** requires a logged-in user and calls the service
//! 3. **Service** checks guild-level access and runs its lookups concurrently
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

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
