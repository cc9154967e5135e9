// ---------------------------------------------------------------------------
// Viewer defaults
// ---------------------------------------------------------------------------

/// Compile-time settings the viewer runs with. There is no config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Initial window size in points.
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Rows shown in the data preview table.
    pub preview_rows: usize,
    /// Distinct chart colours before the palette repeats.
    pub chart_colors: usize,
    /// Height of the inline chart in points.
    pub chart_height: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_size: [1100.0, 900.0],
            min_window_size: [600.0, 400.0],
            preview_rows: 10,
            chart_colors: 9,
            chart_height: 400.0,
        }
    }
}

impl ViewerConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: eframe::egui::ViewportBuilder::default()
                .with_inner_size(self.window_size)
                .with_min_inner_size(self.min_window_size),
            ..Default::default()
        }
    }
}
