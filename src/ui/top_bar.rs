//! Top bar UI: app title, loading indicator, and status.

use crate::olympics::OlympicStore;
use crate::state::AppState;
use crate::ui::colors;
use eframe::egui::{self, Color32, RichText};

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState, store: &OlympicStore) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new(format!("{} Olympics Dashboard", egui_phosphor::regular::TROPHY))
                        .strong()
                        .size(16.0)
                        .color(Color32::WHITE),
                );

                ui.separator();

                if store.is_loading() {
                    ui.spinner();
                    ui.label(RichText::new("Loading...").size(13.0).color(Color32::GRAY));
                    ui.separator();
                }

                let error = store.error_message();
                if !error.is_empty() {
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            egui_phosphor::regular::WARNING,
                            error
                        ))
                        .size(13.0)
                        .color(colors::ui::ERROR),
                    );
                    ui.separator();
                }

                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(Color32::GRAY),
                );
            });
        });
}
