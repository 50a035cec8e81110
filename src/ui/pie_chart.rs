//! Central canvas UI: medal pie chart with tooltip and click navigation.
//!
//! The chart is painter-drawn: one wedge per country, proportional to
//! its aggregate medal total. Hovering a wedge shows a tooltip overlay
//! rebuilt every frame from the hovered segment; clicking navigates to
//! that country's detail route.

use crate::state::dashboard::DashboardModel;
use crate::state::{AppState, DashboardPresenter};
use crate::ui::colors;
use eframe::egui::{self, Color32, FontId, Painter, Pos2, Rect, RichText, Sense, Stroke, Vec2};
use std::f32::consts::TAU;

/// Renders the dashboard view: statistics row plus the pie chart.
pub fn render_dashboard(ctx: &egui::Context, state: &mut AppState, presenter: &DashboardPresenter) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Medals per Country");
        ui.add_space(4.0);

        let model = presenter.model();
        render_statistics(ui, &model);
        ui.separator();

        if model.chart.is_empty() {
            ui.add_space(20.0);
            ui.label(RichText::new("No data to display yet.").color(colors::ui::LABEL));
            return;
        }

        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::click());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, colors::chart::BACKGROUND);

        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.38;

        render_segments(&painter, center, radius, &model.chart.values, &model.chart.labels);

        let hovered = response
            .hover_pos()
            .and_then(|pos| segment_at(pos, center, radius, &model.chart.values));

        if let Some(index) = hovered {
            highlight_segment(&painter, center, radius, &model.chart.values, index);

            if let Some(pointer) = response.hover_pos() {
                render_tooltip(
                    &painter,
                    &rect,
                    pointer,
                    &model.chart.labels[index],
                    model.chart.values[index],
                );
            }

            if response.clicked() {
                let id = model.chart.ids[index];
                drop(model);
                state.router.navigate_by_url(&format!("country/{}", id));
            }
        }
    });
}

/// Statistics row above the chart.
fn render_statistics(ui: &mut egui::Ui, model: &DashboardModel) {
    ui.horizontal(|ui| {
        for stat in &model.statistics {
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(&stat.title).small().color(colors::ui::LABEL));
                    ui.label(
                        RichText::new(stat.value.to_string())
                            .strong()
                            .size(20.0)
                            .color(colors::ui::VALUE),
                    );
                });
            });
        }
    });
}

/// Draws every wedge plus its country-name label.
fn render_segments(painter: &Painter, center: Pos2, radius: f32, values: &[u64], labels: &[String]) {
    let angles = segment_angles(values);

    for (index, &(start, end)) in angles.iter().enumerate() {
        if end <= start {
            continue;
        }

        // Fill in quarter-turn chunks: a wedge sweeping more than PI
        // is not convex, and the painter only fills convex polygons.
        let fill = colors::chart::segment(index);
        let mut chunk_start = start;
        while chunk_start < end {
            let chunk_end = (chunk_start + std::f32::consts::FRAC_PI_2).min(end);
            let points = wedge_points(center, radius, chunk_start, chunk_end);
            painter.add(egui::Shape::convex_polygon(points, fill, Stroke::NONE));
            chunk_start = chunk_end;
        }

        // Country name at the wedge midpoint (skip slivers the text
        // would overflow).
        let sweep = end - start;
        if sweep > 0.12 {
            let mid = (start + end) / 2.0;
            painter.text(
                polar(center, radius * 0.68, mid),
                egui::Align2::CENTER_CENTER,
                &labels[index],
                FontId::proportional(12.0),
                colors::chart::SEGMENT_LABEL,
            );
        }
    }
}

/// Outlines the hovered wedge.
fn highlight_segment(painter: &Painter, center: Pos2, radius: f32, values: &[u64], index: usize) {
    let angles = segment_angles(values);
    let (start, end) = angles[index];

    let mut points = wedge_points(center, radius, start, end);
    points.push(center);
    for pair in points.windows(2) {
        painter.line_segment([pair[0], pair[1]], Stroke::new(2.0, colors::chart::HIGHLIGHT));
    }
}

/// Tooltip overlay for the hovered segment.
///
/// Rebuilt every frame from the hovered segment; not drawn at all
/// when nothing is hovered. Positioned at the pointer with a small
/// offset, clamped to the canvas rect.
fn render_tooltip(painter: &Painter, canvas: &Rect, pointer: Pos2, label: &str, value: u64) {
    const PADDING: f32 = 6.0;

    let title = painter.layout_no_wrap(
        label.to_string(),
        FontId::proportional(14.0),
        Color32::WHITE,
    );
    let body = painter.layout_no_wrap(
        format!("{} {}", egui_phosphor::regular::MEDAL, value),
        FontId::proportional(13.0),
        Color32::WHITE,
    );

    let size = Vec2::new(
        title.size().x.max(body.size().x) + PADDING * 2.0,
        title.size().y + body.size().y + PADDING * 3.0,
    );

    let mut origin = pointer + Vec2::new(12.0, 12.0);
    origin.x = origin.x.min(canvas.right() - size.x);
    origin.y = origin.y.min(canvas.bottom() - size.y);
    let tooltip_rect = Rect::from_min_size(origin, size);

    painter.rect_filled(tooltip_rect, 4.0, colors::chart::tooltip_background());
    painter.galley(
        tooltip_rect.min + Vec2::splat(PADDING),
        title,
        Color32::WHITE,
    );
    let body_pos = tooltip_rect.min + Vec2::new(PADDING, size.y - PADDING - body.size().y);
    painter.galley(body_pos, body, Color32::WHITE);
}

/// Per-segment (start, end) angles in radians, clockwise from 12
/// o'clock, index-aligned with `values`.
fn segment_angles(values: &[u64]) -> Vec<(f32, f32)> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return values.iter().map(|_| (0.0, 0.0)).collect();
    }

    let mut angles = Vec::with_capacity(values.len());
    let mut cumulative = 0u64;
    for &value in values {
        let start = cumulative as f32 / total as f32 * TAU;
        cumulative += value;
        let end = cumulative as f32 / total as f32 * TAU;
        angles.push((start, end));
    }
    angles
}

/// Segment under `pointer`, if any.
fn segment_at(pointer: Pos2, center: Pos2, radius: f32, values: &[u64]) -> Option<usize> {
    let offset = pointer - center;
    if offset.length() > radius {
        return None;
    }

    // Clockwise angle from 12 o'clock, in [0, TAU).
    let mut angle = offset.x.atan2(-offset.y);
    if angle < 0.0 {
        angle += TAU;
    }

    segment_angles(values)
        .iter()
        .position(|&(start, end)| angle >= start && angle < end)
}

/// Fan of points tracing a wedge (center first, then the arc).
fn wedge_points(center: Pos2, radius: f32, start: f32, end: f32) -> Vec<Pos2> {
    let sweep = end - start;
    let steps = ((sweep / 0.05).ceil() as usize).max(2);

    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let angle = start + sweep * (i as f32 / steps as f32);
        points.push(polar(center, radius, angle));
    }
    points
}

/// Screen position at `radius` along the clockwise-from-north `angle`.
fn polar(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + Vec2::new(radius * angle.sin(), -radius * angle.cos())
}
