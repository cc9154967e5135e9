//! Serialized form of datasets and schemas handed to a charting surface.

use datatochart::data::parser::{parse_data, DataFormat};
use datatochart::data::schema::classify;

#[test]
fn json_dataset_snapshot() {
    let ds = parse_data(r#"[{"a":1},{"a":2},{"a":3}]"#, DataFormat::Json).unwrap();

    insta::assert_json_snapshot!(ds, @r###"
    [
      {
        "a": 1
      },
      {
        "a": 2
      },
      {
        "a": 3
      }
    ]
    "###);
}

#[test]
fn csv_dataset_snapshot() {
    let raw = "product,sales,note\nWidget A,145,\nWidget B,9.5,ok\n";
    let ds = parse_data(raw, DataFormat::Csv).unwrap();

    insta::assert_json_snapshot!(ds, @r###"
    [
      {
        "product": "Widget A",
        "sales": 145,
        "note": ""
      },
      {
        "product": "Widget B",
        "sales": 9.5,
        "note": "ok"
      }
    ]
    "###);
}

#[test]
fn schema_snapshot() {
    let ds = parse_data("product,sales,month\nWidget A,145,January\n", DataFormat::Csv).unwrap();

    insta::assert_json_snapshot!(classify(&ds), @r###"
    {
      "columns": [
        "product",
        "sales",
        "month"
      ],
      "numeric": [
        "sales"
      ],
      "categorical": [
        "product",
        "month"
      ]
    }
    "###);
}
