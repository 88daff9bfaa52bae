//! Chat panel — header, message list, connection banner, and input row.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use newschat_core::controller::ConversationState;
use newschat_core::format::{paragraphs, Segment};
use newschat_types::message::Message;

/// What the user asked for this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    Submit,
    Reset,
    TestConnection,
}

pub fn input_hint(state: &ConversationState) -> &'static str {
    if state.session().is_some() {
        "Ask me anything about recent news..."
    } else {
        "Connecting to chat service..."
    }
}

/// Whether the send button is live for this draft
pub fn can_send(state: &ConversationState, draft: &str) -> bool {
    !draft.trim().is_empty() && state.accepts_input()
}

/// Render the chat panel. Returns the action the user triggered, if any.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &ConversationState,
    draft: &mut String,
) -> Option<ChatAction> {
    let mut action = None;

    ui.vertical(|ui| {
        // Header
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("News Assistant").strong());
                    if ui
                        .small_button("Test")
                        .on_hover_text("Test Backend Connection")
                        .clicked()
                    {
                        action = Some(ChatAction::TestConnection);
                    }
                });
                if let Some(session) = state.session() {
                    ui.weak(RichText::new(format!("Session: {}...", session.short_id())).small());
                }
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let reset = ui.add_enabled(!state.is_resetting(), egui::Button::new("Start New Chat"));
                if reset.on_hover_text("Discard this conversation and open a new session").clicked() {
                    action = Some(ChatAction::Reset);
                }
            });
        });

        ui.separator();

        // Messages
        let banner_height = if state.connection_error().is_some() { 36.0 } else { 0.0 };
        let available_height = ui.available_height() - 52.0 - banner_height;
        ScrollArea::vertical()
            .max_height(available_height)
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for message in state.messages() {
                    render_message(ui, message);
                    ui.add_space(4.0);
                }
            });

        if let Some(error) = state.connection_error() {
            let color = ui.visuals().error_fg_color;
            egui::Frame::default()
                .fill(color.linear_multiply(0.1))
                .inner_margin(6.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.colored_label(color, error);
                    });
                });
        }

        ui.add_space(8.0);

        // Input
        ui.horizontal(|ui| {
            let input = egui::TextEdit::singleline(draft)
                .hint_text(input_hint(state))
                .desired_width(ui.available_width() - 70.0);
            let response = ui.add_enabled(state.accepts_input(), input);

            let send_enabled = can_send(state, draft);
            let label = if state.is_busy() { "..." } else { "Send" };
            let send_btn = ui.add_enabled(
                send_enabled,
                egui::Button::new(label).min_size(Vec2::new(60.0, 0.0)),
            );

            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if (enter && send_enabled) || send_btn.clicked() {
                action = Some(ChatAction::Submit);
                response.request_focus();
            }
        });
    });

    action
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (label, fill) = if message.is_user() {
        ("You", ui.visuals().faint_bg_color)
    } else {
        ("News Assistant", ui.visuals().extreme_bg_color)
    };

    egui::Frame::default()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).strong().small());
            for paragraph in paragraphs(&message.content) {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;
                    for segment in paragraph {
                        match segment {
                            Segment::Text(text) => {
                                ui.label(text);
                            }
                            Segment::Link(url) => {
                                ui.hyperlink(url);
                            }
                        }
                    }
                });
            }
            ui.weak(RichText::new(message.time_label()).small());
        });
}
