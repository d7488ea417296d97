//! Request dispatch for the users resource.

pub mod user_handler;

pub use user_handler::UserHandler;
