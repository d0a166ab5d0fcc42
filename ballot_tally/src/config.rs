// ********* Ballot data structures ***********

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Header tags starting with this prefix are listed as policies.
pub const POLICY_PREFIX: &str = "P";

/// A policy entry of the ballot document.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    #[serde(rename = "Short")]
    pub short: String,
}

/// The ballot document: who voted, which tags are policies, and the
/// weights each voter gave to every tag of the sheet.
///
/// The fields are declared in alphabetical order so that the serialized
/// object comes out with sorted keys.
#[derive(PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct BallotDocument {
    pub policies: Vec<Policy>,
    /// In sheet order. Duplicated identifiers are kept.
    pub voters: Vec<String>,
    /// voter -> tag -> weight, over all the tags of the header (not only the policies).
    pub votes: BTreeMap<String, BTreeMap<String, f64>>,
}

// ******** Result data structures *********

/// Per-identifier scores. Upstream writes `null` when a score could not be computed.
pub type Scores = BTreeMap<String, Option<Number>>;

/// The scores computed by the liquid democracy tool.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct PollOutput {
    /// voter -> influence
    pub influence: Scores,
    /// policy -> popularity
    pub votes: Scores,
}

/// The result file written by the liquid democracy tool. Any other top-level
/// field (such as the echoed input) is ignored.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ResultDocument {
    pub output: PollOutput,
}

/// Errors that prevent a ballot sheet from being tabulated.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum TallyErrors {
    /// A cell could not be read as a number.
    InvalidNumber {
        voter: String,
        tag: String,
        content: String,
    },
    /// A row does not have one value per tag.
    RowLength {
        voter: String,
        expected: usize,
        found: usize,
    },
}

impl Error for TallyErrors {}

impl Display for TallyErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TallyErrors::InvalidNumber {
                voter,
                tag,
                content,
            } => write!(
                f,
                "voter {}: value {:?} for {} is not a number",
                voter, content, tag
            ),
            TallyErrors::RowLength {
                voter,
                expected,
                found,
            } => write!(
                f,
                "voter {}: expected {} values, found {}",
                voter, expected, found
            ),
        }
    }
}
