pub mod chat;
pub mod loading;
pub mod toasts;
