use eframe::egui::{
    self, Align2, Color32, CornerRadius, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2,
};
use eframe::egui::epaint::TextShape;

use crate::chart::BarFrame;
use crate::data::model::Record;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Bar chart (central panel)
// ---------------------------------------------------------------------------

const AXIS_COLOR: Color32 = Color32::from_gray(140);
const TICK_LEN: f32 = 4.0;
/// Clockwise slant for the state labels under the band axis.
const LABEL_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

/// Paint the bar chart: bars, both axes, axis titles, and the hover
/// tooltip.
pub fn bar_chart(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a data file to view the chart  (File → Open…)");
        });
        return;
    }

    let now = ui.input(|i| i.time);
    let chart = &state.chart;

    egui::ScrollArea::both().show(ui, |ui: &mut Ui| {
        let size = Vec2::new(chart.config.width, chart.config.height);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let origin = response.rect.min
            + Vec2::new(chart.config.margin.left, chart.config.margin.top);
        let inner_w = chart.config.inner_width();
        let inner_h = chart.config.inner_height();
        let text_color = ui.visuals().text_color();

        if chart.is_empty() {
            painter.text(
                origin + Vec2::new(inner_w / 2.0, inner_h / 2.0),
                Align2::CENTER_CENTER,
                "No rows match the current filters",
                FontId::proportional(16.0),
                text_color,
            );
            return;
        }

        let pointer = response.hover_pos();
        let mut hovered: Option<BarFrame<'_>> = None;

        // ---- Bars ----
        for frame in chart.bar_frames(now) {
            let rect = Rect::from_min_size(
                origin + Vec2::new(frame.x, frame.y),
                Vec2::new(frame.width, frame.height),
            );
            painter.rect_filled(
                rect,
                CornerRadius::ZERO,
                frame.color.gamma_multiply(frame.opacity),
            );
            if pointer.is_some_and(|p| rect.contains(p)) {
                hovered = Some(frame);
            }
        }

        // ---- Band axis (bottom) ----
        let baseline_y = origin.y + inner_h;
        painter.line_segment(
            [
                Pos2::new(origin.x, baseline_y),
                Pos2::new(origin.x + inner_w, baseline_y),
            ],
            Stroke::new(1.0, AXIS_COLOR),
        );
        for tick in chart.x_ticks(now) {
            let x = origin.x + tick.x;
            painter.line_segment(
                [Pos2::new(x, baseline_y), Pos2::new(x, baseline_y + TICK_LEN)],
                Stroke::new(1.0, AXIS_COLOR),
            );
            let galley =
                painter.layout_no_wrap(tick.label.to_string(), FontId::proportional(11.0), text_color);
            let pos = Pos2::new(x + 2.0, baseline_y + TICK_LEN + 4.0);
            painter.add(TextShape::new(pos, galley, text_color).with_angle(LABEL_ANGLE));
        }
        painter.text(
            Pos2::new(
                origin.x + inner_w / 2.0,
                baseline_y + chart.config.margin.bottom - 18.0,
            ),
            Align2::CENTER_CENTER,
            "State",
            FontId::proportional(14.0),
            text_color,
        );

        // ---- Percent axis (left) ----
        painter.line_segment(
            [Pos2::new(origin.x, origin.y), Pos2::new(origin.x, baseline_y)],
            Stroke::new(1.0, AXIS_COLOR),
        );
        for tick in chart.y_ticks() {
            let y = origin.y + tick.y;
            painter.line_segment(
                [Pos2::new(origin.x - TICK_LEN, y), Pos2::new(origin.x, y)],
                Stroke::new(1.0, AXIS_COLOR),
            );
            painter.text(
                Pos2::new(origin.x - TICK_LEN - 2.0, y),
                Align2::RIGHT_CENTER,
                format!("{:.1}", tick.value),
                FontId::proportional(11.0),
                text_color,
            );
        }
        let title = painter.layout_no_wrap(
            "Percent Drinking".to_string(),
            FontId::proportional(14.0),
            text_color,
        );
        let title_pos = Pos2::new(
            origin.x - chart.config.margin.left + 6.0,
            origin.y + inner_h / 2.0 + title.size().x / 2.0,
        );
        painter.add(
            TextShape::new(title_pos, title, text_color)
                .with_angle(-std::f32::consts::FRAC_PI_2),
        );

        // ---- Tooltip ----
        if let (Some(frame), Some(p)) = (hovered, pointer) {
            let anchor = p + Vec2::splat(chart.config.tooltip_padding);
            draw_tooltip(&painter, anchor, frame.record);
        }

        if chart.is_animating(now) {
            ui.ctx().request_repaint();
        }
    });
}

/// Floating detail overlay following the pointer. Drawn last so it
/// stays above the bars; it leaves no state behind once the pointer
/// moves off the bar.
fn draw_tooltip(painter: &egui::Painter, anchor: Pos2, record: &Record) {
    let text = format!(
        "State: {}\nGender: {}\nPercent Drinking: {:.1}\nType: {}",
        record.state, record.sex, record.percent, record.beverage
    );
    let galley = painter.layout_no_wrap(text, FontId::proportional(12.0), Color32::WHITE);
    let rect = Rect::from_min_size(anchor, galley.size() + Vec2::splat(12.0));
    painter.rect_filled(rect, CornerRadius::same(4), Color32::from_black_alpha(200));
    painter.galley(rect.min + Vec2::splat(6.0), galley, Color32::WHITE);
}
