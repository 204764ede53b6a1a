//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for diagnosis reports
///
/// This is a domain concept representing how the report should be formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Patient summary, prediction, enrichment and hospitals (default)
    #[default]
    Full,
    /// Prediction and enrichment only
    Summary,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full() {
        assert_eq!(OutputFormat::default(), OutputFormat::Full);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Summary).unwrap();
        assert_eq!(json, "\"summary\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
