use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart palette
// ---------------------------------------------------------------------------

/// Hue of the first slot; the rest are spaced evenly around the wheel.
const BASE_HUE: f32 = 220.0;

/// `n` visually distinct colours starting from blue.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (BASE_HUE + (i as f32 / n as f32) * 360.0) % 360.0;
            hsl_to_color32(Hsl::new(hue, 0.70, 0.55))
        })
        .collect()
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgb(channel(rgb.red), channel(rgb.green), channel(rgb.blue))
}

/// Fixed set of colour slots; slot `i` wraps around the palette size.
#[derive(Debug, Clone)]
pub struct ChartPalette {
    colors: Vec<Color32>,
}

impl ChartPalette {
    pub fn new(size: usize) -> Self {
        Self {
            colors: generate_palette(size.max(1)),
        }
    }

    /// Colour of the single series in bar / line / area charts.
    pub fn primary(&self) -> Color32 {
        self.slot(0)
    }

    pub fn slot(&self, index: usize) -> Color32 {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
