use super::error::ParseResult;
use super::model::Dataset;
use super::parser::{parse_data, DataFormat};

/// Sample sales data offered by the "Load Demo Data" action.
pub const DEMO_CSV: &str = "\
product,sales,month,category
Widget A,145,January,Electronics
Widget B,98,January,Home
Widget A,165,February,Electronics
Widget B,112,February,Home
Widget A,157,March,Electronics
Widget B,124,March,Home
Widget A,184,April,Electronics
Widget B,138,April,Home
Widget C,56,January,Office
Widget C,68,February,Office
Widget C,79,March,Office
Widget C,92,April,Office
Widget D,43,January,Garden
Widget D,51,February,Garden
Widget D,64,March,Garden
Widget D,75,April,Garden";

pub const DEMO_FORMAT: DataFormat = DataFormat::Csv;

pub fn demo_dataset() -> ParseResult<Dataset> {
    parse_data(DEMO_CSV, DEMO_FORMAT)
}
