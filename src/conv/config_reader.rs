use crate::conv::*;

use serde::{Deserialize, Serialize};
use snafu::prelude::*;
use std::fs;
use std::path::Path;

use crate::conv::io_common::STDOUT;

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabulateConfig {
    #[serde(rename = "inputPath")]
    pub input_path: Option<String>,
    #[serde(rename = "inputType")]
    pub input_type: Option<String>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
    #[serde(rename = "referencePath")]
    pub reference_path: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(rename = "inputPath")]
    pub input_path: Option<String>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
    #[serde(rename = "referencePath")]
    pub reference_path: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobConfig {
    pub tabulate: Option<TabulateConfig>,
    pub report: Option<ReportConfig>,
}

/// Reads the configuration file. The relative paths it contains are resolved
/// against the directory of the file.
pub fn read_config(path: &Path) -> ConvResult<JobConfig> {
    let path_s = path.display().to_string();
    let contents = fs::read_to_string(path).context(OpeningInputSnafu {
        path: path_s.clone(),
    })?;
    let mut config: JobConfig =
        serde_json::from_str(&contents).context(ParsingJsonSnafu {
            path: path_s.clone(),
        })?;

    let root_p = path
        .parent()
        .context(MissingParentDirSnafu { path: path_s })?;
    if let Some(t) = config.tabulate.as_mut() {
        resolve(root_p, &mut t.input_path);
        resolve(root_p, &mut t.output_path);
        resolve(root_p, &mut t.reference_path);
    }
    if let Some(r) = config.report.as_mut() {
        resolve(root_p, &mut r.input_path);
        resolve(root_p, &mut r.output_path);
        resolve(root_p, &mut r.reference_path);
    }
    Ok(config)
}

fn resolve(root_p: &Path, p: &mut Option<String>) {
    if let Some(s) = p.as_mut() {
        if s.as_str() != STDOUT {
            *s = root_p.join(s.as_str()).display().to_string();
        }
    }
}
