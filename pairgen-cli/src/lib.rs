//! Library half of the `pairgen` binary: file loading and the command bodies.
//!
//! Commands return their stdout text so they can be tested without a process.

pub mod cli;

use std::fmt::Debug;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use pairgen::{FieldSpec, GeneratorConfig, PairGenerator, Record};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

pub use cli::{Cli, Commands};

/// Display wrapper that logs a value as YAML on its own lines.
///
/// ```ignore
/// debug!("fields: {}", Pretty(&specs));
/// ```
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

/// Read a JSON or YAML document, choosing the format by extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&text).map_err(anyhow::Error::from),
        Some("yaml") | Some("yml") => serde_yaml_ng::from_str(&text).map_err(anyhow::Error::from),
        _ => bail!(
            "unsupported file type for {} (expected .json, .yaml or .yml)",
            path.display()
        ),
    };
    parsed.with_context(|| format!("failed to parse {}", path.display()))
}

pub fn load_object(path: &Path) -> Result<Record> {
    let object: Record = load_document(path)?;
    debug!(attributes = object.len(), "loaded object");
    Ok(object)
}

pub fn load_fields(path: &Path) -> Result<Vec<FieldSpec>> {
    let fields: Vec<FieldSpec> = load_document(path)?;
    debug!("loaded field specs: {}", Pretty(&fields));
    Ok(fields)
}

/// Give every input spec without a prefix the default one.
pub fn apply_default_prefix(fields: &mut [FieldSpec], prefix: &str) {
    for field in fields {
        if let Some(input) = field.input_mut() {
            if input.prefix.is_none() {
                input.prefix = Some(prefix.to_string());
            }
        }
    }
}

/// Render each spec against the object, one pair per line.
pub fn run_render(
    object: &Path,
    fields: &Path,
    config: Option<&Path>,
    prefix: Option<&str>,
) -> Result<String> {
    let config = GeneratorConfig::load(config)?;
    let record = load_object(object)?;
    let mut specs = load_fields(fields)?;
    if let Some(prefix) = prefix {
        apply_default_prefix(&mut specs, prefix);
    }

    let generator = PairGenerator::new(&record).with_config(config);
    let mut out = String::new();
    for spec in &specs {
        out.push_str(generator.render(spec).to_string().as_str());
        out.push('\n');
    }
    info!(count = specs.len(), "rendered field pairs");
    Ok(out)
}

pub fn run_check(fields: &Path) -> Result<String> {
    let specs = load_fields(fields)?;
    Ok(format!("{} field specs OK\n", specs.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairgen::InputOptions;
    use tempfile::TempDir;

    #[test]
    fn default_prefix_skips_explicit_prefix_and_info_fields() {
        let mut fields = vec![
            FieldSpec::TextField(InputOptions::new("title")),
            FieldSpec::TextField(InputOptions::new("body").prefix("draft")),
            FieldSpec::PlainText(pairgen::PlainTextOptions::attr("id")),
        ];
        apply_default_prefix(&mut fields, "post");

        assert_eq!(fields[0].input_mut().unwrap().prefix.as_deref(), Some("post"));
        assert_eq!(fields[1].input_mut().unwrap().prefix.as_deref(), Some("draft"));
        assert!(fields[2].input_mut().is_none());
    }

    #[test]
    fn load_document_rejects_unknown_extension() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("object.txt");
        fs::write(&path, "id: 1").unwrap();
        let err = load_object(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported file type"));
    }

    #[test]
    fn check_counts_specs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("fields.json");
        fs::write(
            &path,
            r#"[{"kind": "plain_text", "attr": "id"}, {"kind": "text_field", "attr": "title"}]"#,
        )
        .unwrap();
        assert_eq!(run_check(&path).unwrap(), "2 field specs OK\n");
    }

    #[test]
    fn pretty_renders_yaml() {
        let rendered = Pretty(vec!["a", "b"]).to_string();
        assert_eq!(rendered, "\n- a\n- b\n");
    }
}
