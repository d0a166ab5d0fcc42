//! Flattening of poll results into the two-section CSV report.

use log::debug;

use crate::config::{PollOutput, Scores};

pub const INFLUENCE_HEADER: &str = "voter, influence";
pub const POPULARITY_HEADER: &str = "policy, popularity";

/// Formats one entry as `key,value`. Numbers keep their natural text:
/// integers have no decimal point, floats use their shortest form.
/// A missing score is written `None`.
pub fn format_score(key: &str, value: &Option<serde_json::Number>) -> String {
    match value {
        Some(n) => format!("{},{}", key, n),
        None => format!("{},None", key),
    }
}

// The lines are sorted as whole strings, so "a10,1" comes before "a2,1" and
// values are never compared numerically.
fn section_lines(scores: &Scores) -> Vec<String> {
    let mut lines: Vec<String> = scores.iter().map(|(k, v)| format_score(k, v)).collect();
    lines.sort();
    lines
}

/// All the lines of the report, without terminators.
pub fn report_lines(output: &PollOutput) -> Vec<String> {
    debug!(
        "report_lines: {} influence entries, {} popularity entries",
        output.influence.len(),
        output.votes.len()
    );
    let mut lines: Vec<String> = vec![INFLUENCE_HEADER.to_string()];
    lines.extend(section_lines(&output.influence));
    lines.push("".to_string());
    lines.push(POPULARITY_HEADER.to_string());
    lines.extend(section_lines(&output.votes));
    lines
}

/// Joins the lines, each one terminated by a newline.
pub fn render(lines: &[String]) -> String {
    let mut res = String::new();
    for l in lines {
        res.push_str(l);
        res.push('\n');
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResultDocument;

    fn output_from(js: &str) -> PollOutput {
        let doc: ResultDocument = serde_json::from_str(js).unwrap();
        doc.output
    }

    #[test]
    fn sections_are_sorted_as_text() {
        let output = output_from(
            r#"{"output": {"influence": {"b": 10, "a": 2}, "votes": {"P2": 0.25, "P1": 0.75}}}"#,
        );
        assert_eq!(
            report_lines(&output),
            vec![
                "voter, influence",
                "a,2",
                "b,10",
                "",
                "policy, popularity",
                "P1,0.75",
                "P2,0.25",
            ]
        );
    }

    #[test]
    fn sort_is_not_numeric_aware() {
        let output = output_from(r#"{"output": {"influence": {"a2": 1, "a10": 1}, "votes": {}}}"#);
        let lines = report_lines(&output);
        assert_eq!(lines[1], "a10,1");
        assert_eq!(lines[2], "a2,1");
    }

    #[test]
    fn numbers_keep_their_natural_form() {
        let output = output_from(
            r#"{"output": {"influence": {"x": 1.0, "y": 3, "z": null}, "votes": {"(Blank)": 0.5}}}"#,
        );
        let lines = report_lines(&output);
        assert_eq!(lines[1..4], ["x,1.0", "y,3", "z,None"]);
        assert_eq!(lines[6], "(Blank),0.5");
    }

    #[test]
    fn large_and_small_floats_use_exponents() {
        let output = output_from(
            r#"{"output": {"influence": {"big": 1e16, "small": 1.5e-7, "plain": 123456.5}, "votes": {}}}"#,
        );
        let lines = report_lines(&output);
        assert_eq!(lines[1..4], ["big,1e16", "plain,123456.5", "small,1.5e-7"]);
    }

    #[test]
    fn render_terminates_every_line() {
        let output = output_from(r#"{"output": {"influence": {"a": 1}, "votes": {"P": 2}}}"#);
        let text = render(&report_lines(&output));
        assert_eq!(text, "voter, influence\na,1\n\npolicy, popularity\nP,2\n");
    }

    #[test]
    fn empty_sections_keep_headers() {
        let output = output_from(r#"{"output": {"influence": {}, "votes": {}}}"#);
        assert_eq!(
            render(&report_lines(&output)),
            "voter, influence\n\npolicy, popularity\n"
        );
    }

    #[test]
    fn missing_section_is_rejected() {
        let res: Result<ResultDocument, _> =
            serde_json::from_str(r#"{"output": {"influence": {"a": 1}}}"#);
        assert!(res.is_err());
        let res: Result<ResultDocument, _> = serde_json::from_str(r#"{"input": {}}"#);
        assert!(res.is_err());
    }

    #[test]
    fn non_numeric_score_is_rejected() {
        let res: Result<ResultDocument, _> =
            serde_json::from_str(r#"{"output": {"influence": {"a": "high"}, "votes": {}}}"#);
        assert!(res.is_err());
    }
}
