//! Parsing raw text into datasets.

use datatochart::data::error::ParseErrorKind;
use datatochart::data::model::Scalar;
use datatochart::data::parser::{parse_data, DataFormat};

#[test]
fn csv_yields_one_record_per_data_row() {
    for rows in [0usize, 1, 7, 50] {
        let mut text = String::from("id,label,score\n");
        for i in 0..rows {
            text.push_str(&format!("{i},item {i},{}.5\n", i * 2));
        }

        let ds = parse_data(&text, DataFormat::Csv).unwrap();
        assert_eq!(ds.len(), rows);
        for record in &ds {
            assert_eq!(record.keys().collect::<Vec<_>>(), vec!["id", "label", "score"]);
        }
    }
}

#[test]
fn json_length_matches_array_length() {
    let text = r#"[{"x":1,"y":"a"},{"x":2,"y":"b"},{"y":"c"},{}]"#;
    let ds = parse_data(text, DataFormat::Json).unwrap();

    assert_eq!(ds.len(), 4);
    assert!(ds.records()[3].is_empty());
    assert!(!ds.records()[2].contains_key("x"));
}

#[test]
fn whitespace_only_input_is_rejected() {
    let err = parse_data(" \n\t ", DataFormat::Csv).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::EmptyInput);
}

#[test]
fn malformed_json_is_rejected() {
    let err = parse_data("[{\"a\": }]", DataFormat::Json).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::InvalidJson);
}

#[test]
fn json_scalar_top_level_is_unexpected_shape() {
    for text in ["42", "\"text\"", "null", "{\"data\": []}"] {
        let err = parse_data(text, DataFormat::Json).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnexpectedShape, "{text}");
    }
}

#[test]
fn csv_submitted_as_json_is_invalid_json() {
    let err = parse_data("a,b\n1,2", DataFormat::Json).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::InvalidJson);
}

#[test]
fn csv_mismatched_rows_are_tolerated() {
    let ds = parse_data("a,b,c\n1\n1,2,3,4,5\n", DataFormat::Csv).unwrap();

    assert_eq!(ds.len(), 2);
    assert_eq!(ds.records()[0].len(), 1);
    assert_eq!(ds.records()[1].len(), 3);
    assert_eq!(ds.records()[1].get("c"), Some(&Scalar::Number(3.0)));
}

#[test]
fn csv_empty_field_is_empty_string() {
    let ds = parse_data("a,b\n,2", DataFormat::Csv).unwrap();
    assert_eq!(ds.records()[0].get("a"), Some(&Scalar::String(String::new())));
}

#[test]
fn csv_multiline_quoted_field_survives_blank_lines() {
    let text = "\n  \nnote,v\n\"first\n\n  \nlast\",1\n\nplain,2\n";
    let ds = parse_data(text, DataFormat::Csv).unwrap();

    assert_eq!(ds.len(), 2);
    assert_eq!(
        ds.records()[0].get("note"),
        Some(&Scalar::from("first\n\n  \nlast"))
    );
    assert_eq!(ds.records()[1].get("v"), Some(&Scalar::Number(2.0)));
}
