#[cfg(test)]
mod tests {
    use crate::panels::chat::{can_send, input_hint};
    use crate::state::*;
    use newschat_core::controller::ConversationController;
    use newschat_core::event_bus::EventBus;
    use newschat_types::event::{ChatEvent, Notification, NotificationLevel};
    use newschat_types::session::Session;

    fn ready_controller() -> ConversationController {
        let mut controller = ConversationController::new(EventBus::new());
        controller.complete_initialize(Ok(Session::new("abcdef0123456789", "now")));
        controller
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_ui_state_state_changed_requests_repaint() {
        let mut state = UiState::new();
        assert!(state.process_events(vec![ChatEvent::StateChanged], 0.0));
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_ui_state_no_events_no_repaint() {
        let mut state = UiState::new();
        assert!(!state.process_events(Vec::new(), 0.0));
    }

    #[test]
    fn test_ui_state_notification_becomes_toast() {
        let mut state = UiState::new();
        state.process_events(
            vec![ChatEvent::Notify(Notification::error("Error", "boom"))],
            1.5,
        );
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].notification.level, NotificationLevel::Error);
        assert_eq!(state.toasts[0].shown_at, 1.5);
    }

    #[test]
    fn test_ui_state_toasts_expire() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::Notify(Notification::error("A", "a"))], 0.0);
        state.process_events(vec![ChatEvent::Notify(Notification::error("B", "b"))], 3.0);

        state.expire(TOAST_LIFETIME - 0.1);
        assert_eq!(state.toasts.len(), 2);

        state.expire(TOAST_LIFETIME + 0.1);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].notification.title, "B");
    }

    #[test]
    fn test_ui_state_toast_cap_drops_oldest() {
        let mut state = UiState::new();
        let events = (0..10)
            .map(|i| ChatEvent::Notify(Notification::success(format!("t{}", i), "")))
            .collect();
        state.process_events(events, 0.0);
        assert!(state.toasts.len() < 10);
        assert_eq!(state.toasts.last().unwrap().notification.title, "t9");
    }

    #[test]
    fn test_ui_state_dismiss() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::Notify(Notification::error("A", "a"))], 0.0);
        state.dismiss(5);
        assert_eq!(state.toasts.len(), 1);
        state.dismiss(0);
        assert!(state.toasts.is_empty());
    }

    // ─── Input Gating Tests ──────────────────────────────────

    #[test]
    fn test_can_send_requires_text_and_session() {
        let controller = ready_controller();
        assert!(can_send(controller.state(), "hello"));
        assert!(!can_send(controller.state(), "   "));

        let initializing = ConversationController::new(EventBus::new());
        assert!(!can_send(initializing.state(), "hello"));
    }

    #[test]
    fn test_can_send_false_while_sending() {
        let mut controller = ready_controller();
        let _ticket = controller.begin_submit("first").unwrap();
        assert!(!can_send(controller.state(), "second"));
    }

    #[test]
    fn test_input_hint_tracks_session() {
        let controller = ready_controller();
        assert_eq!(input_hint(controller.state()), "Ask me anything about recent news...");

        let initializing = ConversationController::new(EventBus::new());
        assert_eq!(input_hint(initializing.state()), "Connecting to chat service...");
    }
}
