use eframe::egui::{self, Color32, RichText, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::ChartPalette;
use crate::data::chart::ChartKind;
use crate::data::parser::DataFormat;
use crate::data::schema::column_names;
use crate::state::AppState;
use crate::ui::plot;

const CSV_PLACEHOLDER: &str = "\
Paste your CSV data here (comma-separated values with header row)
Example:
name,value,category
Product A,42,Electronics
Product B,28,Clothing
Product C,15,Food";

const JSON_PLACEHOLDER: &str = r#"Paste your JSON data here (array of objects)
Example:
[
  { "name": "Product A", "value": 42, "category": "Electronics" },
  { "name": "Product B", "value": 28, "category": "Clothing" },
  { "name": "Product C", "value": 15, "category": "Food" }
]"#;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Data", |ui: &mut Ui| {
            if ui.button("Load Demo Data").clicked() {
                state.load_demo();
                ui.close_menu();
            }
            if ui.button("Process Data").clicked() {
                state.submit();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows, {} columns",
                ds.len(),
                column_names(ds).len()
            ));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            egui::widgets::global_theme_preference_switch(ui);
        });
    });
}

// ---------------------------------------------------------------------------
// Input card
// ---------------------------------------------------------------------------

/// Format tabs, the text editor and the submit buttons.
pub fn input_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Input Data");
    ui.label(RichText::new("Paste your data in CSV or JSON format").weak());
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        for format in DataFormat::ALL {
            ui.selectable_value(&mut state.format, format, format.label());
        }
    });

    let placeholder = match state.format {
        DataFormat::Csv => CSV_PLACEHOLDER,
        DataFormat::Json => JSON_PLACEHOLDER,
    };
    ui.add(
        TextEdit::multiline(&mut state.raw_text)
            .hint_text(placeholder)
            .code_editor()
            .desired_rows(10)
            .desired_width(f32::INFINITY),
    );

    if let Some(msg) = &state.error {
        ui.label(RichText::new(msg).color(Color32::RED));
    }

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
        if ui.button("Process Data").clicked() {
            state.submit();
        }
        if ui.button("Load Demo Data").clicked() {
            state.load_demo();
        }
    });
}

// ---------------------------------------------------------------------------
// Chart options
// ---------------------------------------------------------------------------

/// Chart kind and axis selectors.
pub fn chart_options(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Chart Options");
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        for kind in ChartKind::ALL {
            ui.selectable_value(&mut state.chart_kind, kind, kind.label())
                .on_hover_text(kind.description());
        }
    });
    ui.add_space(4.0);

    let schema = state.schema();
    let Some(axes) = state.axes.clone() else {
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.strong("X-Axis / Category");
            egui::ComboBox::from_id_salt("x_axis")
                .selected_text(&axes.x)
                .show_ui(ui, |ui: &mut Ui| {
                    for col in &schema.columns {
                        if ui.selectable_label(axes.x == *col, col).clicked() {
                            state.set_x_axis(col);
                        }
                    }
                });
        });

        ui.vertical(|ui: &mut Ui| {
            ui.strong("Y-Axis / Value");
            if schema.numeric.is_empty() {
                ui.label(RichText::new("No numeric columns").weak());
                return;
            }
            egui::ComboBox::from_id_salt("y_axis")
                .selected_text(&axes.y)
                .show_ui(ui, |ui: &mut Ui| {
                    for col in &schema.numeric {
                        if ui.selectable_label(axes.y == *col, col).clicked() {
                            state.set_y_axis(col);
                        }
                    }
                });
        });
    });
}

// ---------------------------------------------------------------------------
// Visualization
// ---------------------------------------------------------------------------

/// The inline chart plus the button that opens it fullscreen.
pub fn visualization(ui: &mut Ui, state: &mut AppState, palette: &ChartPalette) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Visualization");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            if ui.button("Fullscreen").clicked() {
                state.fullscreen = true;
            }
        });
    });
    ui.add_space(4.0);

    let height = state.config.chart_height;
    plot::chart(ui, state, palette, "inline_chart", height);
}

// ---------------------------------------------------------------------------
// Data preview
// ---------------------------------------------------------------------------

/// The first rows of the dataset as a table.
pub fn preview_table(ui: &mut Ui, state: &AppState) {
    ui.heading("Data Preview");
    let caption = format!("First {} rows of your data", state.config.preview_rows);
    ui.label(RichText::new(caption).weak());
    ui.add_space(4.0);

    let columns = state.column_names();
    let rows = state.preview_rows();

    egui::ScrollArea::horizontal()
        .id_salt("preview_scroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .columns(Column::auto().at_least(80.0).resizable(true), columns.len())
                .header(20.0, |mut header| {
                    for col in &columns {
                        header.col(|ui: &mut Ui| {
                            ui.strong(col);
                        });
                    }
                })
                .body(|mut body| {
                    for record in rows {
                        body.row(18.0, |mut row| {
                            for col in &columns {
                                row.col(|ui: &mut Ui| {
                                    let cell = record.get(col).map(|v| v.to_string());
                                    ui.label(cell.unwrap_or_default());
                                });
                            }
                        });
                    }
                });
        });
}
