//! Background tasks module
//!
//! This module contains background tasks that run alongside the HTTP server.

pub mod auto_advance;

// Re-export main functions
pub use auto_advance::auto_advance_task;
