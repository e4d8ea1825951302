//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortcode mapped to an original URL with a validity window
//! - [`Click`] - A recorded redirect of a link
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewLink` and `NewClick` carry only what the caller supplies.

pub mod click;
pub mod link;

pub use click::{Click, GEO_PLACEHOLDER, NewClick, UNKNOWN_REFERRER};
pub use link::{Link, NewLink};
