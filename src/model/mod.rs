//! Data transfer objects returned by the HTTP API.

pub mod api;
pub mod export;
pub mod panel;
pub mod ticket;
