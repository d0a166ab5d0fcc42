use clap::{Args as ClapArgs, Parser, Subcommand};

/// Converters for liquid democracy polls: ballot sheets to ballot documents,
/// and poll results to CSV reports.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,

    /// (file path, optional) A JSON file describing the input and output locations of the
    /// conversions. Options given on the command line override its content.
    #[clap(short, long, value_parser, global = true)]
    pub config: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard error.
    #[clap(long, takes_value = false, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Reads a ballot sheet and prints the ballot document in JSON format.
    Tabulate(TabulateArgs),
    /// Reads the result of a poll in JSON format and writes the influence and popularity report.
    Report(ReportArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct TabulateArgs {
    /// (file path) The ballot sheet. The first row contains the tags, the first column the voters.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (file path, 'stdout' or empty) Where to write the ballot document. Defaults to the standard output.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (default csv) The type of the input: csv or xlsx.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// When using an Excel file, indicates the name of the worksheet to use. Defaults to the first one.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (file path) A reference ballot document in JSON format. If provided, liqconv will
    /// check that the tabulated document matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ReportArgs {
    /// (file path) The result of the poll, with the scores under `output.influence` and `output.votes`.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (file path) Where to write the report. An existing file is overwritten.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference report. If provided, liqconv will check that the written report
    /// matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,
}
