//! Conversation core for the news chat widget.
//!
//! Holds the session/message protocol and nothing that touches the
//! browser: HTTP lives behind [`ports::ChatApiPort`], rendering behind
//! [`event_bus::EventBus`].

pub mod ports;
pub mod event_bus;
pub mod format;
pub mod controller;
pub mod driver;
