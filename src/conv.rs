use log::{debug, info, warn};

use ballot_tally::{report, BallotDocument};
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::Path;

use text_diff::print_diff;

use crate::args::{Args, Command, ReportArgs, TabulateArgs};
use crate::conv::config_reader::*;
use crate::conv::io_common::*;

pub mod config_reader;
pub mod io_common;
pub mod io_csv;
pub mod io_results;
pub mod io_xlsx;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConvError {
    #[snafu(display("Error opening file {path}"))]
    OpeningInput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading a line of the CSV file"))]
    CsvLineParse { source: csv::Error },
    #[snafu(display("Error opening Excel file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("Excel file {path} has no worksheet"))]
    EmptyExcel { path: String },
    #[snafu(display("Excel file has no worksheet named {name:?}"))]
    MissingWorksheet { name: String },
    #[snafu(display("Unexpected cell at line {lineno}: {content}"))]
    ExcelWrongCellType { lineno: u64, content: String },
    #[snafu(display("The ballot sheet {path} has no header row"))]
    EmptyInput { path: String },
    #[snafu(display("Invalid ballot at line {lineno}"))]
    InvalidBallot {
        source: ballot_tally::TallyErrors,
        lineno: u64,
    },
    #[snafu(display("Invalid ballot sheet {path}"))]
    InvalidSheet {
        source: ballot_tally::TallyErrors,
        path: String,
    },
    #[snafu(display("Error parsing JSON file {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error serializing the document"))]
    SerializingJson { source: serde_json::Error },
    #[snafu(display("Error writing to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("No {name} given, either on the command line or in the configuration file"))]
    MissingParameter { name: String },
    #[snafu(display("Cannot find the directory of the configuration file {path}"))]
    MissingParentDir { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type ConvResult<T> = Result<T, ConvError>;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum InputType {
    Csv,
    Xlsx,
}

impl InputType {
    fn parse(s: Option<&str>) -> ConvResult<InputType> {
        match s {
            None | Some("csv") => Ok(InputType::Csv),
            Some("xlsx") => Ok(InputType::Xlsx),
            Some(x) => {
                whatever!("Input type not implemented {:?}", x)
            }
        }
    }
}

/// Everything needed to run one tabulation.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct TabulateJob {
    pub input: String,
    pub input_type: InputType,
    pub excel_worksheet_name: Option<String>,
    /// None for the standard output.
    pub out: Option<String>,
    pub reference: Option<String>,
}

/// Everything needed to write one report.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ReportJob {
    pub input: String,
    pub out: String,
    pub reference: Option<String>,
}

fn tabulate_job(args: &TabulateArgs, config: Option<&TabulateConfig>) -> ConvResult<TabulateJob> {
    let config = config.cloned().unwrap_or_default();
    let input_type = args.input_type.clone().or(config.input_type);
    Ok(TabulateJob {
        input: args
            .input
            .clone()
            .or(config.input_path)
            .context(MissingParameterSnafu { name: "input" })?,
        input_type: InputType::parse(input_type.as_deref())?,
        excel_worksheet_name: args
            .excel_worksheet_name
            .clone()
            .or(config.excel_worksheet_name),
        out: args
            .out
            .clone()
            .or(config.output_path)
            .filter(|p| p != STDOUT),
        reference: args.reference.clone().or(config.reference_path),
    })
}

fn report_job(args: &ReportArgs, config: Option<&ReportConfig>) -> ConvResult<ReportJob> {
    let config = config.cloned().unwrap_or_default();
    Ok(ReportJob {
        input: args
            .input
            .clone()
            .or(config.input_path)
            .context(MissingParameterSnafu { name: "input" })?,
        out: args
            .out
            .clone()
            .or(config.output_path)
            .context(MissingParameterSnafu { name: "output" })?,
        reference: args.reference.clone().or(config.reference_path),
    })
}

/// Reads the ballot sheet and writes the ballot document.
pub fn run_tabulate(job: &TabulateJob) -> ConvResult<()> {
    info!("Attempting to read ballot sheet {:?}", job.input);
    let doc = match job.input_type {
        InputType::Csv => io_csv::read_csv_ballots(&job.input)?,
        InputType::Xlsx => {
            io_xlsx::read_xlsx_ballots(&job.input, job.excel_worksheet_name.as_deref())?
        }
    };
    debug!("run_tabulate: document: {:?}", doc);

    // The document is complete before anything gets written.
    let pretty_js = to_pretty_json(&doc)?;
    write_output(job.out.as_deref(), &pretty_js)?;

    if let Some(reference_p) = &job.reference {
        // Going through the document normalizes the layout and the numbers of the reference.
        let reference_doc: BallotDocument =
            serde_json::from_str(&read_text(reference_p)?).context(ParsingJsonSnafu {
                path: reference_p.clone(),
            })?;
        check_reference(&to_pretty_json(&reference_doc)?, &pretty_js)?;
    }
    Ok(())
}

/// Reads the poll results and writes the report.
pub fn run_report(job: &ReportJob) -> ConvResult<()> {
    info!("Attempting to read results {:?}", job.input);
    let results = io_results::read_results(&job.input)?;

    let text = report::render(&report::report_lines(&results.output));
    write_output(Some(&job.out), &text)?;
    info!("Report written to {:?}", job.out);

    if let Some(reference_p) = &job.reference {
        check_reference(&read_text(reference_p)?, &text)?;
    }
    Ok(())
}

fn read_text(path: &str) -> ConvResult<String> {
    fs::read_to_string(path).context(OpeningInputSnafu { path })
}

fn check_reference(reference: &str, computed: &str) -> ConvResult<()> {
    if reference != computed {
        warn!("Found differences with the reference");
        print_diff(reference, computed, "\n");
        whatever!("Difference detected between the output and the reference")
    }
    Ok(())
}

pub fn run(args: &Args) -> ConvResult<()> {
    let config = match &args.config {
        Some(config_path) => {
            let c = read_config(Path::new(config_path))?;
            info!("config: {:?}", c);
            Some(c)
        }
        None => None,
    };

    match &args.command {
        Command::Tabulate(targs) => {
            let job = tabulate_job(targs, config.as_ref().and_then(|c| c.tabulate.as_ref()))?;
            info!("job: {:?}", job);
            run_tabulate(&job)
        }
        Command::Report(rargs) => {
            let job = report_job(rargs, config.as_ref().and_then(|c| c.report.as_ref()))?;
            info!("job: {:?}", job);
            run_report(&job)
        }
    }
}
