//! Country detail page, reached by clicking a chart segment.

use crate::olympics::StoreError;
use crate::state::{AppState, DetailPresenter};
use crate::ui::colors;
use eframe::egui::{self, RichText};

pub fn render_detail(ctx: &egui::Context, state: &mut AppState, presenter: &DetailPresenter) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if ui
            .button(format!("{} Back", egui_phosphor::regular::ARROW_LEFT))
            .clicked()
        {
            state.router.go_to_dashboard();
        }
        ui.add_space(8.0);

        let detail = presenter.state();
        match detail.as_ref() {
            None => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Waiting for data...");
                });
            }
            Some(Err(StoreError::CountryNotFound(id))) => {
                ui.label(
                    RichText::new(format!("Country {} not found", id)).color(colors::ui::ERROR),
                );
            }
            Some(Ok(country)) => {
                ui.heading(&country.name);
                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    stat_card(ui, "Number of entries", country.participations.len() as u64);
                    stat_card(ui, "Total medals", country.total_medals());
                    stat_card(ui, "Total athletes", country.total_athletes());
                });

                ui.separator();

                egui::Grid::new("participations")
                    .striped(true)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Year").strong());
                        ui.label(RichText::new("City").strong());
                        ui.label(RichText::new("Medals").strong());
                        ui.label(RichText::new("Athletes").strong());
                        ui.end_row();

                        for participation in &country.participations {
                            ui.label(participation.year.to_string());
                            ui.label(&participation.city);
                            ui.label(format!(
                                "{} {}",
                                egui_phosphor::regular::MEDAL,
                                participation.medals_count
                            ));
                            ui.label(participation.athlete_count.to_string());
                            ui.end_row();
                        }
                    });
            }
        }
    });
}

fn stat_card(ui: &mut egui::Ui, title: &str, value: u64) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(title).small().color(colors::ui::LABEL));
            ui.label(
                RichText::new(value.to_string())
                    .strong()
                    .size(20.0)
                    .color(colors::ui::VALUE),
            );
        });
    });
}
