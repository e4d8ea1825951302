//! Domain layer containing business entities and logic.
//!
//! Defines entities, the click log, and repository interfaces independent of
//! the storage and HTTP layers.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`click_log`] - Append-only per-link click history
//! - [`repositories`] - Data access trait definitions
//!
//! # Redirect Flow
//!
//! 1. HTTP handler receives redirect request and builds a [`entities::NewClick`]
//! 2. [`crate::application::services::LinkService::resolve`] asks the
//!    [`repositories::LinkRepository`] to resolve the shortcode
//! 3. The repository checks expiry, increments the click counter and appends to
//!    the [`click_log::ClickLog`] as one unit

pub mod click_log;
pub mod entities;
pub mod repositories;
