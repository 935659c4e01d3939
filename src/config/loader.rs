//! Loading answers from files, inline JSON and stdin

use crate::constants::{ANSWERS_EXTENSIONS, STDIN_INDICATOR};
use crate::error::{Error, Result};
use crate::ioutils::read_from;
use serde_json::{Map, Value};
use std::path::Path;

/// Parse a string into a JSON object of answers.
///
/// Shell over-escaping (`{\"key\":\"value\"}`) is undone before giving up.
/// A JSON value that is not an object yields an empty map.
pub fn parse_answers(buf: &str) -> Result<Map<String, Value>> {
    let value = match serde_json::from_str::<Value>(buf) {
        Ok(value) => value,
        Err(initial_err) if buf.contains("\\\"") => {
            let cleaned = buf.replace("\\\"", "\"");
            serde_json::from_str::<Value>(&cleaned)
                .map_err(|_| Error::JSONParseError(initial_err))?
        }
        Err(err) => return Err(err.into()),
    };

    match value {
        Value::Object(map) => Ok(map),
        other => {
            log::warn!("Ignoring answers that are not a JSON object: {other}");
            Ok(Map::new())
        }
    }
}

/// Resolves the `--answers` argument: inline JSON or `-` for stdin.
pub fn read_answers_arg(arg: &str) -> Result<Map<String, Value>> {
    if arg == STDIN_INDICATOR {
        let buf = read_from(std::io::stdin())?;
        parse_answers(&buf)
    } else {
        parse_answers(arg)
    }
}

/// Loads answers from a `.json`, `.yaml` or `.yml` file.
pub fn load_answers_file<P: AsRef<Path>>(path: P) -> Result<Map<String, Value>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if !ANSWERS_EXTENSIONS.contains(&extension.as_str()) {
        return Err(Error::UnsupportedAnswersFile {
            path: path.display().to_string(),
            extensions: ANSWERS_EXTENSIONS.join(", "),
        });
    }

    let content = std::fs::read_to_string(path)?;
    log::debug!("Loading answers from {}", path.display());

    let value: Value = if extension == "json" {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => Err(Error::ValidationError(format!(
            "answers file '{}' must contain a mapping",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn parses_inline_object() {
        let map = parse_answers(r#"{"businessName": "Acme"}"#).unwrap();
        assert_eq!(map.get("businessName"), Some(&json!("Acme")));
    }

    #[test]
    fn handles_escaped_quotes() {
        let map = parse_answers("{\\\"email\\\":\\\"a@acme.test\\\"}").unwrap();
        assert_eq!(map.get("email"), Some(&json!("a@acme.test")));
    }

    #[test]
    fn non_object_json_is_empty() {
        assert!(parse_answers("[1, 2]").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(parse_answers("{nope"), Err(Error::JSONParseError(_))));
    }

    #[test]
    fn loads_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "businessName: Acme\ntargetRegions:\n  - eu\n  - us").unwrap();
        let map = load_answers_file(file.path()).unwrap();
        assert_eq!(map.get("businessName"), Some(&json!("Acme")));
        assert_eq!(map.get("targetRegions"), Some(&json!(["eu", "us"])));
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"refundWindow": 14}}"#).unwrap();
        let map = load_answers_file(file.path()).unwrap();
        assert_eq!(map.get("refundWindow"), Some(&json!(14)));
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let err = load_answers_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedAnswersFile { .. }));
    }

    #[test]
    fn missing_file_with_unknown_extension_reports_extension() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_answers_file(dir.path().join("answers.txt")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedAnswersFile { .. }));
    }
}
