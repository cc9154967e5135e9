use eframe::egui::{self, ScrollArea, Ui};

use crate::color::ChartPalette;
use crate::config::ViewerConfig;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DataToChartApp {
    pub state: AppState,
    palette: ChartPalette,
}

impl DataToChartApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            palette: ChartPalette::new(config.chart_colors),
            state: AppState::new(config),
        }
    }
}

impl Default for DataToChartApp {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl eframe::App for DataToChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: input, chart, preview ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    panels::input_panel(ui, &mut self.state);

                    // Chart and preview only exist for a non-empty dataset.
                    if !self.state.has_data() {
                        return;
                    }
                    ui.separator();
                    panels::chart_options(ui, &mut self.state);
                    ui.separator();
                    panels::visualization(ui, &mut self.state, &self.palette);
                    ui.separator();
                    panels::preview_table(ui, &self.state);
                });
        });

        if self.state.fullscreen {
            plot::fullscreen_window(ctx, &mut self.state, &self.palette);
        }
    }
}
