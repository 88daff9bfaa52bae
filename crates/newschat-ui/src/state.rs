//! UI-level state that is not part of the conversation: notification
//! toasts. Updated each frame by draining the EventBus.

use newschat_types::event::{ChatEvent, Notification};

/// Seconds a toast stays on screen
pub const TOAST_LIFETIME: f64 = 5.0;
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    /// `egui::InputState::time` when the toast was raised
    pub shown_at: f64,
}

#[derive(Default)]
pub struct UiState {
    pub toasts: Vec<Toast>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply drained events. Returns true if anything needs a repaint.
    pub fn process_events(&mut self, events: Vec<ChatEvent>, now: f64) -> bool {
        let repaint = !events.is_empty();
        for event in events {
            match event {
                ChatEvent::StateChanged => {}
                ChatEvent::Notify(notification) => {
                    log::debug!("Notification: {}", notification.title);
                    self.toasts.push(Toast {
                        notification,
                        shown_at: now,
                    });
                }
            }
        }
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        repaint
    }

    /// Drop toasts older than [`TOAST_LIFETIME`].
    pub fn expire(&mut self, now: f64) {
        self.toasts.retain(|t| now - t.shown_at < TOAST_LIFETIME);
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.toasts.len() {
            self.toasts.remove(index);
        }
    }
}
