// Primitives for reading ballot sheets stored in Excel workbooks.

use ballot_tally::BallotDocument;
use calamine::{open_workbook, DataType, Range, Reader, Xlsx};
use log::debug;
use snafu::prelude::*;

use crate::conv::*;

/// Reads the ballot sheet from the given worksheet, or from the first one.
/// The layout is the same as for CSV files.
pub fn read_xlsx_ballots(path: &str, worksheet: Option<&str>) -> ConvResult<BallotDocument> {
    let wrange = get_range(path, worksheet)?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, row) in wrange.rows().enumerate() {
        let lineno = (idx + 1) as u64;
        let cells: Vec<String> = row
            .iter()
            .map(|cell| read_cell(cell, lineno))
            .collect::<ConvResult<Vec<String>>>()?;
        debug!("read_xlsx_ballots: lineno: {:?} row: {:?}", lineno, &cells);
        rows.push(cells);
    }

    let (header, ballots) = rows.split_first().context(EmptyInputSnafu { path })?;
    ballot_tally::tabulate(header, ballots).context(InvalidSheetSnafu { path })
}

fn get_range(path: &str, worksheet: Option<&str>) -> ConvResult<Range<DataType>> {
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;
    let wrange = match worksheet {
        Some(name) => workbook
            .worksheet_range(name)
            .context(MissingWorksheetSnafu { name })?,
        None => workbook
            .worksheet_range_at(0)
            .context(EmptyExcelSnafu { path })?,
    }
    .context(OpeningExcelSnafu { path })?;
    Ok(wrange)
}

// Numeric cells go back to text so that they follow the same parsing as CSV cells.
fn read_cell(cell: &DataType, lineno: u64) -> ConvResult<String> {
    match cell {
        DataType::String(s) => Ok(s.trim().to_string()),
        DataType::Float(f) => Ok(f.to_string()),
        DataType::Int(i) => Ok(i.to_string()),
        DataType::Empty => Ok("".to_string()),
        _ => ExcelWrongCellTypeSnafu {
            lineno,
            content: format!("{:?}", cell),
        }
        .fail(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_path(name: &str) -> String {
        format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
    }

    #[test]
    fn read_first_worksheet() {
        let doc = read_xlsx_ballots(&data_path("ballots.xlsx"), None).unwrap();
        assert_eq!(doc.voters, vec!["001".to_string(), "2".to_string()]);
        assert_eq!(doc.policies[0].short, "P-Health");
        assert_eq!(doc.votes["001"]["P-Health"], 4.0);
        assert_eq!(doc.votes["001"]["Econ"], 2.5);
        assert_eq!(doc.votes["2"]["Econ"], 3.0);
    }

    #[test]
    fn read_named_worksheet() {
        let doc = read_xlsx_ballots(&data_path("ballots.xlsx"), Some("Form1")).unwrap();
        assert_eq!(doc.voters.len(), 2);
    }

    #[test]
    fn unknown_worksheet() {
        let res = read_xlsx_ballots(&data_path("ballots.xlsx"), Some("Sheet42"));
        assert!(matches!(res, Err(ConvError::MissingWorksheet { .. })));
    }

    #[test]
    fn missing_workbook() {
        let res = read_xlsx_ballots(&data_path("missing.xlsx"), None);
        assert!(matches!(res, Err(ConvError::OpeningExcel { .. })));
    }

    #[test]
    fn cells_as_text() {
        assert_eq!(read_cell(&DataType::Float(3.5), 1).unwrap(), "3.5");
        assert_eq!(read_cell(&DataType::Float(4.0), 1).unwrap(), "4");
        assert_eq!(read_cell(&DataType::Int(7), 1).unwrap(), "7");
        assert_eq!(
            read_cell(&DataType::String(" P1 ".to_string()), 1).unwrap(),
            "P1"
        );
        assert_eq!(read_cell(&DataType::Empty, 1).unwrap(), "");
        assert!(read_cell(&DataType::Bool(true), 1).is_err());
    }
}
