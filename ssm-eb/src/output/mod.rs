use std::{
    fmt,
    fs::File,
    io::{self, Write},
    path::Path,
    str::FromStr,
};

use tracing::info;

use crate::domain::OutputDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Invalid output format: {other}")),
        }
    }
}

#[derive(Debug)]
pub enum RenderError {
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml(err) => write!(f, "Failed to render YAML: {}", err),
            Self::Json(err) => write!(f, "Failed to render JSON: {}", err),
        }
    }
}

impl std::error::Error for RenderError {}

pub fn render(document: &OutputDocument, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(document).map_err(RenderError::Yaml),
        OutputFormat::Json => serde_json::to_string_pretty(document)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(RenderError::Json),
    }
}

/// Writes `rendered` to `destination`, or to `stdout` when there is none.
///
/// The destination file is truncated or created in place; a failure halfway
/// through can leave it partially written. Returns the number of bytes
/// written to the file.
pub fn emit<W: Write>(
    rendered: &str,
    destination: Option<&Path>,
    stdout: &mut W,
) -> io::Result<Option<usize>> {
    match destination {
        None => {
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
            Ok(None)
        }
        Some(path) => {
            let written = write_to_file(path, rendered.as_bytes())?;
            info!(
                "{} bytes written successfully to `{}`",
                written,
                path.display()
            );
            Ok(Some(written))
        }
    }
}

fn write_to_file(path: &Path, data: &[u8]) -> io::Result<usize> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.flush()?;
    file.sync_all()?;
    Ok(data.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OptionName, OutputOption};
    use std::fs;
    use tempfile::TempDir;

    fn document() -> OutputDocument {
        let mut document = OutputDocument::new();
        document.push(OutputOption::new(OptionName::new("DB_HOST"), "localhost"));
        document.push(OutputOption::new(OptionName::new("DB_PORT"), "5432"));
        document
    }

    #[test]
    fn test_render_yaml() {
        let yaml = render(&document(), OutputFormat::Yaml).unwrap();
        assert!(yaml.starts_with("option_settings:\n- option_name: DB_HOST\n  value: localhost\n"));
        assert!(yaml.contains("option_name: DB_PORT"));
    }

    #[test]
    fn test_render_empty_yaml() {
        let yaml = render(&OutputDocument::new(), OutputFormat::Yaml).unwrap();
        assert_eq!(yaml, "option_settings: []\n");
    }

    #[test]
    fn test_yaml_parses_back_in_order() {
        let yaml = render(&document(), OutputFormat::Yaml).unwrap();
        let parsed: OutputDocument = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, document());
    }

    #[test]
    fn test_ambiguous_scalars_stay_strings() {
        let values = [
            "true", "no", "5432", "1e3", "", "~", "null", "a: b", "- item", "#hash", " padded ",
            "line\nbreak",
        ];
        let mut original = OutputDocument::new();
        for (i, value) in values.iter().enumerate() {
            original.push(OutputOption::new(OptionName::new(format!("OPT_{i}")), *value));
        }

        for format in [OutputFormat::Yaml, OutputFormat::Json] {
            let rendered = render(&original, format).unwrap();
            let parsed: OutputDocument = match format {
                OutputFormat::Yaml => serde_yaml::from_str(&rendered).unwrap(),
                OutputFormat::Json => serde_json::from_str(&rendered).unwrap(),
            };
            assert_eq!(parsed, original, "{rendered}");
        }
    }

    #[test]
    fn test_render_json() {
        let json = render(&document(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["option_settings"][0]["option_name"], "DB_HOST");
        assert_eq!(value["option_settings"][1]["value"], "5432");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("yml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("toml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_emit_to_stdout() {
        let mut stdout = Vec::new();

        let written = emit("option_settings: []\n", None, &mut stdout).unwrap();

        assert_eq!(written, None);
        assert_eq!(stdout, b"option_settings: []\n");
    }

    #[test]
    fn test_emit_to_file_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("options.config");
        fs::write(&path, "stale content that is longer than the new one").unwrap();
        let mut stdout = Vec::new();

        let written = emit("short\n", Some(&path), &mut stdout).unwrap();

        assert_eq!(written, Some(6));
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
        assert!(stdout.is_empty());
    }

    #[test]
    fn test_emit_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("options.config");

        assert!(emit("x", Some(&path), &mut Vec::new()).is_err());
    }
}
