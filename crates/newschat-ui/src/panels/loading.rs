//! Shown until the first session start resolves.

use egui::RichText;

pub fn initializing_panel(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        let top = ui.available_height() * 0.35;
        ui.add_space(top);
        ui.spinner();
        ui.add_space(8.0);
        ui.label(RichText::new("Initializing Chat...").strong().size(18.0));
        ui.weak("Please wait while we set up your chat session");
    });
}
