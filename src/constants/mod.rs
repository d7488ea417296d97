//! Application constants module.
//!
//! Fixed response bodies, content types and parameter names live here so the
//! handler and repository layers agree on them.

pub mod messages;
pub mod params;

pub use messages::*;
pub use params::*;
