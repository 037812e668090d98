//! HTTP request handlers.
//!
//! Controllers authenticate the caller, hand off to a service and convert the result to
//! its DTO.

pub mod export;
pub mod panel;
pub mod ticket;
