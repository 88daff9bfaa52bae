//! One-shot notifications, stacked in the top-right corner.

use egui::{Align2, RichText};
use newschat_types::event::NotificationLevel;
use crate::state::UiState;

pub fn toast_overlay(ctx: &egui::Context, state: &mut UiState) {
    let mut dismissed = None;

    egui::Area::new(egui::Id::new("newschat_toasts"))
        .anchor(Align2::RIGHT_TOP, [-12.0, 12.0])
        .show(ctx, |ui| {
            for (index, toast) in state.toasts.iter().enumerate() {
                let n = &toast.notification;
                let color = match n.level {
                    NotificationLevel::Success => ui.visuals().hyperlink_color,
                    NotificationLevel::Error => ui.visuals().error_fg_color,
                };
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(280.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&n.title).strong().color(color));
                        if ui.small_button("x").clicked() {
                            dismissed = Some(index);
                        }
                    });
                    ui.label(&n.message);
                });
                ui.add_space(6.0);
            }
        });

    if let Some(index) = dismissed {
        state.dismiss(index);
    }
}
