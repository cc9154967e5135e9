use std::f64::consts::TAU;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Chart kind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
    Area,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Area,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Pie => "Pie Chart",
            ChartKind::Area => "Area Chart",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ChartKind::Bar => "Best for comparing quantities across categories",
            ChartKind::Line => "Ideal for showing trends over time",
            ChartKind::Pie => "Perfect for showing proportions of a whole",
            ChartKind::Area => "Great for showing cumulative values over time",
        }
    }
}

// ---------------------------------------------------------------------------
// Series extraction
// ---------------------------------------------------------------------------

/// One record projected onto the chart axes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Display form of the X cell; empty when the record lacks the column.
    pub label: String,
    /// Y cell as a finite number, `None` when it is not one.
    pub value: Option<f64>,
}

/// The points of a chart, one per record, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn build(dataset: &Dataset, x: &str, y: &str) -> Self {
        let points = dataset
            .iter()
            .map(|record| ChartPoint {
                label: record.get(x).map(|v| v.to_string()).unwrap_or_default(),
                value: record.get(y).and_then(|v| v.as_f64()),
            })
            .collect();

        ChartSeries {
            x_label: x.to_string(),
            y_label: y.to_string(),
            points,
        }
    }

    /// `(index, value)` pairs for the points that have a value.
    pub fn plotted(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.value.map(|v| (i, v)))
    }

    /// Label at an X position, if the position is (close to) a whole index.
    pub fn label_at(&self, position: f64) -> Option<&str> {
        let rounded = position.round();
        if (position - rounded).abs() > 1e-6 || rounded < 0.0 {
            return None;
        }
        self.points.get(rounded as usize).map(|p| p.label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Pie geometry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Share of the total, `0.0..=1.0`.
    pub fraction: f64,
    /// Radians, clockwise from 12 o'clock.
    pub start_angle: f64,
    pub sweep: f64,
    /// Index of the source point; doubles as the colour slot.
    pub index: usize,
}

impl PieSlice {
    /// `"{label}: {percent}%"`, rounded to whole percent.
    pub fn caption(&self) -> String {
        format!("{}: {:.0}%", self.label, self.fraction * 100.0)
    }
}

/// Slices for the positive values of `series`. Empty when nothing is positive.
pub fn pie_slices(series: &ChartSeries) -> Vec<PieSlice> {
    let positive: Vec<(usize, f64)> = series.plotted().filter(|(_, v)| *v > 0.0).collect();
    let total: f64 = positive.iter().map(|(_, v)| v).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    positive
        .into_iter()
        .map(|(index, value)| {
            let fraction = value / total;
            let slice = PieSlice {
                label: series.points[index].label.clone(),
                value,
                fraction,
                start_angle: angle,
                sweep: fraction * TAU,
                index,
            };
            angle += slice.sweep;
            slice
        })
        .collect()
}

/// The slice covering `angle` (radians, clockwise from 12 o'clock, any turn).
pub fn slice_at(slices: &[PieSlice], angle: f64) -> Option<&PieSlice> {
    let angle = angle.rem_euclid(TAU);
    slices
        .iter()
        .find(|s| angle >= s.start_angle && angle < s.start_angle + s.sweep)
}
