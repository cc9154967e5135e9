//! Column classification and default axes over parsed input.

use datatochart::data::axes::{default_axes, AxisSelection};
use datatochart::data::demo::demo_dataset;
use datatochart::data::parser::{parse_data, DataFormat};
use datatochart::data::schema::{categorical_columns, classify, column_names, numeric_columns};

fn axes(x: &str, y: &str) -> Option<AxisSelection> {
    Some(AxisSelection {
        x: x.to_string(),
        y: y.to_string(),
    })
}

#[test]
fn sales_csv_scenario() {
    let text = "product,sales,month\nWidget A,145,January\nWidget B,98,January\n";
    let ds = parse_data(text, DataFormat::Csv).unwrap();
    assert_eq!(ds.len(), 2);

    let schema = classify(&ds);
    assert_eq!(schema.columns, vec!["product", "sales", "month"]);
    assert_eq!(schema.numeric, vec!["sales"]);
    assert_eq!(schema.categorical, vec!["product", "month"]);
    assert_eq!(default_axes(&schema), axes("product", "sales"));
}

#[test]
fn single_numeric_json_column_scenario() {
    let ds = parse_data(r#"[{"a":1},{"a":2},{"a":3}]"#, DataFormat::Json).unwrap();
    assert_eq!(ds.len(), 3);

    let schema = classify(&ds);
    assert_eq!(schema.columns, vec!["a"]);
    assert_eq!(schema.numeric, vec!["a"]);
    assert!(schema.categorical.is_empty());
    assert_eq!(default_axes(&schema), axes("a", "a"));
}

#[test]
fn classification_is_idempotent() {
    let ds = demo_dataset().unwrap();
    assert_eq!(classify(&ds), classify(&ds));
    assert_eq!(numeric_columns(&ds), classify(&ds).numeric);
    assert_eq!(categorical_columns(&ds), classify(&ds).categorical);
}

#[test]
fn numeric_looking_strings_in_json() {
    let ds = parse_data(
        r#"[{"v":"42","w":"42"},{"v":"3.5","w":"N/A"}]"#,
        DataFormat::Json,
    )
    .unwrap();

    assert_eq!(numeric_columns(&ds), vec!["v"]);
    assert_eq!(categorical_columns(&ds), vec!["w"]);
}

#[test]
fn boolean_json_column_is_categorical() {
    let ds = parse_data(r#"[{"on":true,"n":1},{"on":false,"n":2}]"#, DataFormat::Json).unwrap();
    let schema = classify(&ds);

    assert_eq!(schema.categorical, vec!["on"]);
    assert_eq!(default_axes(&schema), axes("on", "n"));
}

#[test]
fn heterogeneous_json_keys_are_unified() {
    let ds = parse_data(
        r#"[{"name":"a","v":1},{"name":"b","extra":"x"},{"v":3,"late":2}]"#,
        DataFormat::Json,
    )
    .unwrap();

    assert_eq!(column_names(&ds), vec!["name", "v", "extra", "late"]);
    assert_eq!(numeric_columns(&ds), vec!["v", "late"]);
}

#[test]
fn all_categorical_csv_falls_back_to_second_column() {
    let ds = parse_data("first,second\nx,y\n", DataFormat::Csv).unwrap();
    assert_eq!(default_axes(&classify(&ds)), axes("first", "second"));
}

#[test]
fn empty_dataset_has_no_axes() {
    let ds = parse_data("[]", DataFormat::Json).unwrap();
    let schema = classify(&ds);

    assert!(schema.columns.is_empty());
    assert_eq!(default_axes(&schema), None);
}
