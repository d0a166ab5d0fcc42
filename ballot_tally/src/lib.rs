mod config;
use log::info;

pub mod builder;
pub mod manual;
pub mod report;

pub use crate::config::*;

use crate::builder::Builder;

/// Tabulates a ballot sheet that has already been split into cells.
///
/// Arguments:
/// * `header` the first row of the sheet. Its first cell is a label and is ignored,
/// the other cells are the tags.
/// * `rows` the remaining rows, each starting with the identifier of the voter.
///
/// The first failing row aborts the tabulation.
pub fn tabulate(header: &[String], rows: &[Vec<String>]) -> Result<BallotDocument, TallyErrors> {
    let tags: &[String] = header.get(1..).unwrap_or(&[]);
    let mut builder = Builder::new(tags);
    for row in rows {
        match row.split_first() {
            Some((voter, cells)) => builder.add_ballot(voter, cells)?,
            None => continue,
        }
    }
    let doc = builder.build();
    info!(
        "tabulate: {} voters, {} tags, {} policies",
        doc.voters.len(),
        tags.len(),
        doc.policies.len()
    );
    Ok(doc)
}
