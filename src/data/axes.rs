use super::schema::Schema;

/// The X (category) and Y (value) fields a chart is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisSelection {
    pub x: String,
    pub y: String,
}

/// Pick default axes from a schema.
///
/// * X: first categorical column, else the first column.
/// * Y: first numeric column, else the second column, else the first.
///
/// Returns `None` when the schema has no columns at all.
pub fn default_axes(schema: &Schema) -> Option<AxisSelection> {
    let first = schema.columns.first()?;

    let x = schema.categorical.first().unwrap_or(first);
    let y = schema
        .numeric
        .first()
        .or_else(|| schema.columns.get(1))
        .unwrap_or(first);

    Some(AxisSelection {
        x: x.clone(),
        y: y.clone(),
    })
}
