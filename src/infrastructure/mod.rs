//! Infrastructure layer implementing domain interfaces.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory store and repository implementations

pub mod persistence;
