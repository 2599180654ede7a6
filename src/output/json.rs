//! JSON and YAML output formatters

use super::common::as_records;
use super::Formatter;
use crate::error::{CosmicError, Result};
use crate::pipeline::Projection;

/// Formatter for JSON output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn render(&self, _label: &str, projection: &Projection) -> Result<String> {
        Ok(serde_json::to_string_pretty(&as_records(projection))?)
    }
}

/// Formatter for YAML output
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn render(&self, _label: &str, projection: &Projection) -> Result<String> {
        serde_yml::to_string(&as_records(projection))
            .map_err(|e| CosmicError::Json(format!("Failed to serialize YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection() -> Projection {
        Projection {
            headers: vec!["name".to_string(), "profile".to_string()],
            rows: vec![vec!["prod".to_string(), "alpha".to_string()]],
        }
    }

    #[test]
    fn test_json_array_of_objects() {
        let out = JsonFormatter.render("VPC", &projection()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["name"], "prod");
        assert_eq!(parsed[0]["profile"], "alpha");
    }

    #[test]
    fn test_json_empty_is_empty_array() {
        let out = JsonFormatter.render("VPC", &Projection::default()).unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_yaml_output() {
        let out = YamlFormatter.render("VPC", &projection()).unwrap();
        assert!(out.contains("name: prod"));
        assert!(out.contains("profile: alpha"));
    }
}
