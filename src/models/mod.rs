//! Data models organized by type.

pub mod gateway;
pub mod health;
pub mod user;

pub use gateway::*;
pub use health::*;
pub use user::*;
