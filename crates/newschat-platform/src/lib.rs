//! Browser platform adapters for the news chat widget.

pub mod api;
