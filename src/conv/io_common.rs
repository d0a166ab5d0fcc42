use std::fs;
use std::io::Write;

use serde::Serialize;
use snafu::prelude::*;

use crate::conv::*;

/// Output location that designates the standard output.
pub const STDOUT: &str = "stdout";

/// Pretty prints with 4-space indentation, followed by a newline.
pub fn to_pretty_json<T: Serialize>(value: &T) -> ConvResult<String> {
    let mut buf: Vec<u8> = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).context(SerializingJsonSnafu {})?;
    let mut res = String::from_utf8(buf).whatever_context("serializer produced invalid UTF-8")?;
    res.push('\n');
    Ok(res)
}

/// Writes the whole content at once, to the standard output if no path is given.
/// An existing file is overwritten.
pub fn write_output(out: Option<&str>, contents: &str) -> ConvResult<()> {
    match out {
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(contents.as_bytes())
                .and_then(|_| handle.flush())
                .context(WritingOutputSnafu { path: STDOUT })
        }
        Some(path) => fs::write(path, contents).context(WritingOutputSnafu { path }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn four_space_indent() {
        let mut m: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        m.insert("b".to_string(), vec![3.5]);
        m.insert("a".to_string(), vec![]);
        assert_eq!(
            to_pretty_json(&m).unwrap(),
            "{\n    \"a\": [],\n    \"b\": [\n        3.5\n    ]\n}\n"
        );
    }

    #[test]
    fn output_file_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("out.csv");
        fs::write(&p, "a much longer previous content\n").unwrap();
        write_output(p.to_str(), "new\n").unwrap();
        assert_eq!(fs::read_to_string(&p).unwrap(), "new\n");
    }

    #[test]
    fn unwritable_output() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("missing").join("out.csv");
        let res = write_output(p.to_str(), "new\n");
        assert!(matches!(res, Err(ConvError::WritingOutput { .. })));
    }
}
