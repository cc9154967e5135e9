use crate::config::ViewerConfig;
use crate::data::axes::{default_axes, AxisSelection};
use crate::data::chart::{ChartKind, ChartSeries};
use crate::data::demo::{DEMO_CSV, DEMO_FORMAT};
use crate::data::error::ParseError;
use crate::data::model::{Dataset, Record};
use crate::data::parser::{parse_data, DataFormat};
use crate::data::schema::{classify, column_names, Schema};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    pub config: ViewerConfig,

    /// Text in the input editor.
    pub raw_text: String,

    /// Active input tab.
    pub format: DataFormat,

    /// Last successfully parsed data (None until a submit succeeds).
    pub dataset: Option<Dataset>,

    /// Message from the last failed submit.
    pub error: Option<String>,

    pub chart_kind: ChartKind,

    /// Current X / Y fields; reset whenever `dataset` is replaced.
    pub axes: Option<AxisSelection>,

    /// Whether the fullscreen chart window is open.
    pub fullscreen: bool,
}

impl AppState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Parse the editor text with the active format ("Process Data").
    pub fn submit(&mut self) {
        if self.raw_text.trim().is_empty() {
            self.fail("Please enter some data".to_string());
            return;
        }
        match parse_data(&self.raw_text, self.format) {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => self.fail_parse(e),
        }
    }

    /// Replace the editor text with the demo CSV and parse it.
    pub fn load_demo(&mut self) {
        log::info!("loading demo data");
        self.raw_text = DEMO_CSV.to_string();
        self.format = DEMO_FORMAT;
        self.submit();
    }

    /// Ingest a freshly parsed dataset and derive default axes from it.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        let schema = classify(&dataset);
        log::info!(
            "parsed {} records with columns {:?}",
            dataset.len(),
            schema.columns
        );
        self.axes = default_axes(&schema);
        self.dataset = Some(dataset);
        self.error = None;
    }

    fn fail_parse(&mut self, e: ParseError) {
        let kind = e.kind();
        let message = format!("{:#}", anyhow::Error::new(e).context("Error parsing data"));
        log::warn!("{kind:?}: {message}");
        self.fail(message);
    }

    /// A failed attempt discards whatever was shown before.
    fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.dataset = None;
        self.axes = None;
        self.fullscreen = false;
    }

    /// Column classification of the current dataset, recomputed on every call.
    pub fn schema(&self) -> Schema {
        self.dataset.as_ref().map(classify).unwrap_or_default()
    }

    /// Column names only; skips the per-column numeric scan of [`classify`].
    pub fn column_names(&self) -> Vec<String> {
        self.dataset.as_ref().map(column_names).unwrap_or_default()
    }

    /// Whether there is anything to chart or preview.
    pub fn has_data(&self) -> bool {
        self.dataset.as_ref().is_some_and(|ds| !ds.is_empty())
    }

    pub fn set_x_axis(&mut self, column: &str) {
        if let Some(axes) = &mut self.axes {
            axes.x = column.to_string();
        }
    }

    /// Only numeric columns are accepted as the value axis.
    pub fn set_y_axis(&mut self, column: &str) {
        if !self.schema().numeric.iter().any(|c| c == column) {
            return;
        }
        if let Some(axes) = &mut self.axes {
            axes.y = column.to_string();
        }
    }

    /// Points for the current axes, if there is data to chart.
    pub fn chart_series(&self) -> Option<ChartSeries> {
        let dataset = self.dataset.as_ref()?;
        let axes = self.axes.as_ref()?;
        Some(ChartSeries::build(dataset, &axes.x, &axes.y))
    }

    /// The first `preview_rows` records.
    pub fn preview_rows(&self) -> &[Record] {
        match &self.dataset {
            Some(ds) => {
                let records = ds.records();
                &records[..records.len().min(self.config.preview_rows)]
            }
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_submit_asks_for_data() {
        let mut state = AppState::default();
        state.raw_text = "   \n".into();
        state.submit();

        assert_eq!(state.error.as_deref(), Some("Please enter some data"));
        assert!(state.dataset.is_none());
    }

    #[test]
    fn load_demo_parses_and_picks_axes() {
        let mut state = AppState::default();
        state.format = DataFormat::Json;
        state.load_demo();

        assert_eq!(state.format, DataFormat::Csv);
        assert_eq!(state.raw_text, DEMO_CSV);
        assert!(state.has_data());
        assert_eq!(
            state.axes,
            Some(AxisSelection {
                x: "product".into(),
                y: "sales".into(),
            })
        );
        assert_eq!(state.preview_rows().len(), 10);
        assert_eq!(state.column_names(), state.schema().columns);
        assert_eq!(state.column_names()[0], "product");
    }

    #[test]
    fn failed_submit_discards_previous_dataset() {
        let mut state = AppState::default();
        state.load_demo();
        assert!(state.dataset.is_some());

        state.format = DataFormat::Json;
        state.raw_text = "[{\"a\": 1},".into();
        state.submit();

        assert!(state.dataset.is_none());
        assert!(state.axes.is_none());
        let error = state.error.unwrap();
        assert!(error.starts_with("Error parsing data: invalid JSON"), "{error}");
    }

    #[test]
    fn new_dataset_resets_axes() {
        let mut state = AppState::default();
        state.load_demo();
        state.set_x_axis("month");
        assert_eq!(state.axes.as_ref().unwrap().x, "month");

        state.format = DataFormat::Json;
        state.raw_text = r#"[{"a":1},{"a":2},{"a":3}]"#.into();
        state.submit();

        assert_eq!(state.error, None);
        assert_eq!(
            state.axes,
            Some(AxisSelection {
                x: "a".into(),
                y: "a".into(),
            })
        );
    }

    #[test]
    fn y_axis_rejects_categorical_columns() {
        let mut state = AppState::default();
        state.load_demo();
        state.set_y_axis("month");
        assert_eq!(state.axes.as_ref().unwrap().y, "sales");
    }

    #[test]
    fn empty_json_array_is_not_chartable() {
        let mut state = AppState::default();
        state.format = DataFormat::Json;
        state.raw_text = "[]".into();
        state.submit();

        assert_eq!(state.error, None);
        assert!(!state.has_data());
        assert!(state.chart_series().is_none());
        assert!(state.preview_rows().is_empty());
        assert!(state.column_names().is_empty());
    }
}
