//! Draft export functionality
//!
//! Writes the durable draft record to JSON or YAML, e.g. to move a draft
//! between machines.

use std::io::Write;

use crate::error::MotorlotResult;
use crate::models::DraftRecord;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    /// Parse an export format from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Export a draft record to the given writer
pub fn export_draft<W: Write>(
    record: &DraftRecord,
    writer: &mut W,
    format: ExportFormat,
) -> MotorlotResult<()> {
    match format {
        ExportFormat::Json => serde_json::to_writer_pretty(&mut *writer, record)
            .map_err(|e| crate::error::MotorlotError::Export(e.to_string()))?,
        ExportFormat::Yaml => serde_yaml::to_writer(&mut *writer, record)
            .map_err(|e| crate::error::MotorlotError::Export(e.to_string()))?,
    }
    writeln!(writer).map_err(|e| crate::error::MotorlotError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    #[test]
    fn test_format_parse() {
        assert_eq!(ExportFormat::parse("JSON"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::parse("yml"), Some(ExportFormat::Yaml));
        assert_eq!(ExportFormat::parse("toml"), None);
    }

    #[test]
    fn test_export_json() {
        let record = DraftRecord {
            location: Some(Location::new("Dubai", "Marina")),
            ..Default::default()
        };

        let mut buffer = Vec::new();
        export_draft(&record, &mut buffer, ExportFormat::Json).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("\"city\": \"Dubai\""));

        let back: DraftRecord = serde_json::from_str(&output).unwrap();
        assert_eq!(back.location, record.location);
    }

    #[test]
    fn test_export_yaml() {
        let record = DraftRecord {
            location: Some(Location::new("Dubai", "")),
            ..Default::default()
        };

        let mut buffer = Vec::new();
        export_draft(&record, &mut buffer, ExportFormat::Yaml).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("city: Dubai"));
    }
}
