//! JSON input loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

use playbill_billing::{Invoice, PlayCatalog};

/// Failure to load an input file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn parse_plays(json: &str) -> Result<PlayCatalog, serde_json::Error> {
    serde_json::from_str(json)
}

/// Invoice files hold either a list of invoices or a single one.
///
/// The shape is picked from the first token so that parse errors keep their
/// field name, line and column.
pub fn parse_invoices(json: &str) -> Result<Vec<Invoice>, serde_json::Error> {
    if json.trim_start().starts_with('[') {
        serde_json::from_str(json)
    } else {
        serde_json::from_str::<Invoice>(json).map(|invoice| vec![invoice])
    }
}

fn read(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_plays(path: &Path) -> Result<PlayCatalog, InputError> {
    parse_plays(&read(path)?).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_invoices(path: &Path) -> Result<Vec<Invoice>, InputError> {
    parse_invoices(&read(path)?).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoices_accept_list_or_single_object() {
        let list = r#"[
            {"customer": "BigCo", "performances": []},
            {"customer": "SmallCo"}
        ]"#;
        let invoices = parse_invoices(list).unwrap();
        assert_eq!(invoices.len(), 2);
        assert!(invoices[1].performances.is_empty());

        let single = r#"
            {"customer": "BigCo", "performances": [{"playID": "hamlet", "audience": 55}]}
        "#;
        let invoices = parse_invoices(single).unwrap();
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].performances[0].audience, 55);
    }

    #[test]
    fn invoice_errors_name_the_bad_value_and_location() {
        let list = r#"[{"customer": "Co", "performances": [{"playID": "x", "audience": -1}]}]"#;
        let msg = parse_invoices(list).unwrap_err().to_string();
        assert!(msg.contains("expected u32"), "{msg}");
        assert!(msg.contains("line 1 column"), "{msg}");

        let single = "{\n  \"performances\": []\n}";
        let err = parse_invoices(single).unwrap_err();
        assert!(err.to_string().contains("missing field `customer`"), "{err}");
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn blank_play_ids_fail_to_parse() {
        let json = r#"{"": {"name": "Nameless", "type": "comedy"}}"#;
        assert!(parse_plays(json).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_plays(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
        assert_eq!(err.to_string(), "failed to read does/not/exist.json");
    }
}
