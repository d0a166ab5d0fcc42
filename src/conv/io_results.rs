use std::fs;

use ballot_tally::ResultDocument;
use log::{debug, info};
use snafu::prelude::*;

use crate::conv::*;

/// Reads the result file of a poll. Both `output.influence` and `output.votes`
/// must be present.
pub fn read_results(path: &str) -> ConvResult<ResultDocument> {
    let contents = fs::read_to_string(path).context(OpeningInputSnafu { path })?;
    debug!("read_results: read content: {:?}", contents);
    let doc: ResultDocument =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    info!(
        "read_results: {} influence scores, {} popularity scores",
        doc.output.influence.len(),
        doc.output.votes.len()
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn input_echo_is_ignored() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("result.json");
        fs::write(
            &p,
            r#"{"input": {"voters": ["a"], "plans": [], "votes": {}},
                "output": {"influence": {"a": 1.0}, "votes": {"(Blank)": 1.0}}}"#,
        )
        .unwrap();
        let doc = read_results(p.to_str().unwrap()).unwrap();
        assert_eq!(doc.output.influence.len(), 1);
        assert_eq!(doc.output.votes.len(), 1);
    }

    #[test]
    fn malformed_json() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("result.json");
        fs::write(&p, r#"{"output": {"influence": {"a": 1.0},"#).unwrap();
        assert!(matches!(
            read_results(p.to_str().unwrap()),
            Err(ConvError::ParsingJson { .. })
        ));
    }
}
