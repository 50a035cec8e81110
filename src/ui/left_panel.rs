//! Left panel UI: data source controls.

use crate::olympics::OlympicStore;
use crate::state::AppState;
use crate::ui::colors;
use eframe::egui::{self, RichText};

pub fn render_left_panel(ctx: &egui::Context, state: &mut AppState, store: &OlympicStore) {
    egui::SidePanel::left("left_panel")
        .resizable(true)
        .default_width(250.0)
        .min_width(200.0)
        .max_width(400.0)
        .show(ctx, |ui| {
            ui.heading("Data Source");
            ui.separator();

            ui.label(RichText::new("URL or local path").small().color(colors::ui::LABEL));
            ui.add(
                egui::TextEdit::singleline(&mut state.source)
                    .desired_width(f32::INFINITY)
                    .font(egui::FontId::monospace(12.0)),
            );

            ui.add_space(5.0);

            let is_loading = store.is_loading();
            ui.add_enabled_ui(!is_loading, |ui| {
                if ui
                    .button(format!("{} Reload", egui_phosphor::regular::ARROW_CLOCKWISE))
                    .clicked()
                {
                    state.reload_requested = true;
                }
            });

            if is_loading {
                ui.add_space(5.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Fetching data...");
                });
            }

            ui.add_space(10.0);

            let countries = store.countries();
            if !countries.is_empty() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("\u{2713}").color(colors::ui::SUCCESS));
                        ui.label(RichText::new("Data loaded").small());
                    });
                    ui.label(
                        RichText::new(format!("{} countries", countries.len()))
                            .strong()
                            .monospace(),
                    );
                });
            }
        });
}
