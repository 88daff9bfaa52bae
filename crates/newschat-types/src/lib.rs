pub mod message;
pub mod session;
pub mod reply;
pub mod api;
pub mod event;
pub mod config;
pub mod error;


pub use error::ChatError;
pub type Result<T> = std::result::Result<T, ChatError>;
