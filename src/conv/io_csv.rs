// Primitives for reading CSV ballot sheets.

use ballot_tally::builder::Builder;
use ballot_tally::BallotDocument;
use log::{debug, info};
use snafu::prelude::*;

use crate::conv::*;

pub fn read_csv_ballots(path: &str) -> ConvResult<BallotDocument> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        // Row widths are checked against the header when building the ballots.
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;
    let mut records = rdr.into_records();

    let header = records
        .next()
        .context(EmptyInputSnafu { path })?
        .context(CsvLineParseSnafu {})?;
    let tags: Vec<String> = header.iter().skip(1).map(|s| s.to_string()).collect();
    debug!("read_csv_ballots: tags: {:?}", tags);
    let mut builder = Builder::new(&tags);

    for line_r in records {
        let line = line_r.context(CsvLineParseSnafu {})?;
        let lineno = line.position().map(|p| p.line()).unwrap_or_default();
        let voter = line.get(0).unwrap_or("");
        let cells: Vec<String> = line.iter().skip(1).map(|s| s.to_string()).collect();
        debug!(
            "read_csv_ballots: lineno: {:?} voter: {:?} row: {:?}",
            lineno, voter, &cells
        );
        builder
            .add_ballot(voter, &cells)
            .context(InvalidBallotSnafu { lineno })?;
    }

    let doc = builder.build();
    info!(
        "read_csv_ballots: {} voters, {} tags, {} policies",
        doc.voters.len(),
        tags.len(),
        doc.policies.len()
    );
    Ok(doc)
}
