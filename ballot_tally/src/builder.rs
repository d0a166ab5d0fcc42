use log::{debug, warn};
use std::collections::BTreeMap;

pub use crate::config::*;

/// A builder for assembling a ballot document row by row.
///
/// ```
/// use ballot_tally::builder::Builder;
/// # use ballot_tally::TallyErrors;
///
/// let mut builder = Builder::new(&["P-Health".to_string(), "Econ".to_string()]);
///
/// builder.add_ballot("001", &["4.0".to_string(), "2.5".to_string()])?;
/// // Rows without an identifier are dropped.
/// builder.add_ballot(" ", &["9".to_string(), "9".to_string()])?;
///
/// let doc = builder.build();
/// assert_eq!(doc.voters, vec!["001".to_string()]);
/// assert_eq!(doc.policies.len(), 1);
///
/// # Ok::<(), TallyErrors>(())
/// ```
pub struct Builder {
    pub(crate) _tags: Vec<String>,
    pub(crate) _doc: BallotDocument,
}

impl Builder {
    /// Starts a document for the given header tags (the header row without
    /// its first label column).
    pub fn new(tags: &[String]) -> Builder {
        let tags: Vec<String> = tags.iter().map(|t| t.trim().to_string()).collect();
        let policies = policies_from_tags(&tags);
        Builder {
            _tags: tags,
            _doc: BallotDocument {
                policies,
                voters: Vec::new(),
                votes: BTreeMap::new(),
            },
        }
    }

    /// Adds the row of one voter.
    ///
    /// voter: the content of the first column. Rows for which it is blank are
    /// skipped entirely.
    /// cells: the remaining columns, one per tag, in header order.
    pub fn add_ballot(&mut self, voter: &str, cells: &[String]) -> Result<(), TallyErrors> {
        let voter = voter.trim();
        if voter.is_empty() {
            debug!("add_ballot: skipping row without identifier: {:?}", cells);
            return Ok(());
        }

        if cells.len() != self._tags.len() {
            return Err(TallyErrors::RowLength {
                voter: voter.to_string(),
                expected: self._tags.len(),
                found: cells.len(),
            });
        }

        let mut vote: BTreeMap<String, f64> = BTreeMap::new();
        for (tag, cell) in self._tags.iter().zip(cells.iter()) {
            // NaN and infinities have no JSON representation.
            let value = match cell.trim().parse::<f64>() {
                Ok(x) if x.is_finite() => x,
                _ => {
                    return Err(TallyErrors::InvalidNumber {
                        voter: voter.to_string(),
                        tag: tag.clone(),
                        content: cell.clone(),
                    })
                }
            };
            vote.insert(tag.clone(), value);
        }
        debug!("add_ballot: voter {}: {:?}", voter, vote);

        if self._doc.votes.insert(voter.to_string(), vote).is_some() {
            warn!(
                "add_ballot: voter {} appears more than once, keeping the last row",
                voter
            );
        }
        self._doc.voters.push(voter.to_string());
        Ok(())
    }

    pub fn build(self) -> BallotDocument {
        self._doc
    }
}

/// The tags that name a policy, in header order.
pub fn policies_from_tags(tags: &[String]) -> Vec<Policy> {
    tags.iter()
        .filter(|t| t.starts_with(POLICY_PREFIX))
        .map(|t| Policy { short: t.clone() })
        .collect()
}
