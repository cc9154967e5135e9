use std::f64::consts::TAU;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui};
use egui_plot::{uniform_grid_spacer, Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::color::ChartPalette;
use crate::data::chart::{pie_slices, slice_at, ChartKind, ChartSeries};
use crate::data::model::Scalar;
use crate::state::AppState;

/// Arc segments for a full circle; slices get a proportional share.
const CIRCLE_SEGMENTS: f64 = 128.0;

// ---------------------------------------------------------------------------
// Chart dispatch
// ---------------------------------------------------------------------------

/// Render the current chart kind for the current axes.
///
/// `id` keeps plot memory apart when the same chart is shown twice
/// (inline and fullscreen).
pub fn chart(ui: &mut Ui, state: &AppState, palette: &ChartPalette, id: &str, height: f32) {
    let Some(series) = state.chart_series() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Process some data to see a chart");
        });
        return;
    };

    match state.chart_kind {
        ChartKind::Bar => bar_chart(ui, &series, palette.primary(), id, height),
        ChartKind::Line => line_chart(ui, &series, palette.primary(), id, height, false),
        ChartKind::Area => line_chart(ui, &series, palette.primary(), id, height, true),
        ChartKind::Pie => pie_chart(ui, &series, palette, height),
    }
}

/// The chart in a window covering most of the screen.
pub fn fullscreen_window(ctx: &egui::Context, state: &mut AppState, palette: &ChartPalette) {
    let mut open = state.fullscreen;
    let size = ctx.screen_rect().size() * 0.9;

    egui::Window::new("Chart Visualization")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .fixed_size(size)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            chart(ui, state, palette, "fullscreen_chart", size.y - 60.0);
        });

    state.fullscreen = open;
}

// ---------------------------------------------------------------------------
// Cartesian charts
// ---------------------------------------------------------------------------

/// Category plot: one whole-number X position per record, labelled with
/// the X cell.
fn category_plot(series: &ChartSeries, id: &str, height: f32) -> Plot<'static> {
    let labels = series.clone();
    Plot::new(id)
        .height(height)
        .legend(Legend::default())
        .x_axis_label(series.x_label.clone())
        .y_axis_label(series.y_label.clone())
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark, _range| {
            labels.label_at(mark.value).unwrap_or_default().to_string()
        })
        .allow_scroll(false)
}

fn bar_chart(ui: &mut Ui, series: &ChartSeries, color: Color32, id: &str, height: f32) {
    let bars: Vec<Bar> = series
        .plotted()
        .map(|(i, value)| {
            Bar::new(i as f64, value)
                .width(0.7)
                .name(&series.points[i].label)
                .fill(color)
        })
        .collect();
    let chart = BarChart::new(bars).name(&series.y_label).color(color);

    category_plot(series, id, height).show(ui, |plot_ui| {
        plot_ui.bar_chart(chart);
    });
}

fn line_chart(
    ui: &mut Ui,
    series: &ChartSeries,
    color: Color32,
    id: &str,
    height: f32,
    filled: bool,
) {
    let coords: Vec<[f64; 2]> = series.plotted().map(|(i, v)| [i as f64, v]).collect();

    let mut line = Line::new(PlotPoints::from(coords.clone()))
        .name(&series.y_label)
        .color(color)
        .width(2.0);
    if filled {
        line = line.fill(0.0);
    }
    let dots = Points::new(PlotPoints::from(coords)).radius(4.0).color(color);

    category_plot(series, id, height).show(ui, |plot_ui| {
        plot_ui.line(line);
        if !filled {
            plot_ui.points(dots);
        }
    });
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Point at `angle` radians clockwise from 12 o'clock.
fn point_on_circle(center: Pos2, radius: f32, angle: f64) -> Pos2 {
    center + egui::vec2(radius * angle.sin() as f32, -radius * angle.cos() as f32)
}

fn pie_chart(ui: &mut Ui, series: &ChartSeries, palette: &ChartPalette, height: f32) {
    let slices = pie_slices(series);
    if slices.is_empty() {
        ui.label(format!("No positive values in '{}' to show as a pie.", series.y_label));
        return;
    }

    let size = egui::vec2(ui.available_width(), height);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let radius = 0.4 * rect.width().min(rect.height());
    let text_color = ui.visuals().text_color();
    let edge = Stroke::new(1.0, ui.visuals().extreme_bg_color);

    for slice in &slices {
        let color = palette.slot(slice.index);
        let steps = ((slice.sweep / TAU) * CIRCLE_SEGMENTS).ceil().max(1.0) as usize;
        let arc: Vec<Pos2> = (0..=steps)
            .map(|s| {
                let angle = slice.start_angle + slice.sweep * s as f64 / steps as f64;
                point_on_circle(center, radius, angle)
            })
            .collect();

        // Fan of triangles: every piece is convex even when the slice is not.
        for pair in arc.windows(2) {
            painter.add(Shape::convex_polygon(vec![center, pair[0], pair[1]], color, Stroke::NONE));
        }
        painter.line_segment([center, arc[0]], edge);

        let mid = slice.start_angle + slice.sweep / 2.0;
        let anchor = point_on_circle(center, radius * 1.08, mid);
        let align = if anchor.x >= center.x {
            Align2::LEFT_CENTER
        } else {
            Align2::RIGHT_CENTER
        };
        painter.text(anchor, align, slice.caption(), FontId::proportional(12.0), text_color);
    }

    let Some(pos) = response.hover_pos() else {
        return;
    };
    let offset = pos - center;
    if offset.length() > radius {
        return;
    }
    let angle = f64::from(offset.x).atan2(-f64::from(offset.y));
    if let Some(slice) = slice_at(&slices, angle) {
        let text = format!("{}\n{}: {}", slice.label, series.y_label, Scalar::Number(slice.value));
        response.on_hover_text_at_pointer(text);
    }
}
