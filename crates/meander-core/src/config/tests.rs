//! Tests for configuration loading and validation

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::errors::MeanderError;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = MeanderConfig::default();
        assert_eq!(config.pattern.max_order, 12);
        assert_eq!(config.pattern.glyphs.on, '*');
        assert_eq!(config.pattern.glyphs.off, ' ');
        assert_eq!(config.pattern.glyphs.border, '-');
        assert_eq!(config.flow.frequency, 60);
        assert_eq!(config.flow.marker, '*');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ConfigLoader::from_str("   \n").unwrap();
        assert_eq!(config, MeanderConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = r##"
flow:
  frequency: 120
pattern:
  glyphs:
    on: "#"
"##;
        let config = ConfigLoader::from_str(yaml).unwrap();
        assert_eq!(config.flow.frequency, 120);
        assert_eq!(config.flow.marker, '*');
        assert_eq!(config.pattern.glyphs.on, '#');
        assert_eq!(config.pattern.glyphs.off, ' ');
        assert_eq!(config.pattern.max_order, 12);
    }

    #[test]
    fn test_invalid_frequency_rejected() {
        let err = ConfigLoader::from_str("flow:\n  frequency: 0\n").unwrap_err();
        assert!(matches!(err, MeanderError::Config(_)));
        assert!(err.to_string().contains("flow.frequency"));
    }

    #[test]
    fn test_max_order_ceiling_rejected() {
        let err = ConfigLoader::from_str("pattern:\n  max_order: 40\n").unwrap_err();
        assert!(err.to_string().contains("max_order"));

        // one past the ceiling would need gigabytes for the grid alone
        assert!(ConfigLoader::from_str("pattern:\n  max_order: 13\n").is_err());
        let config = ConfigLoader::from_str("pattern:\n  max_order: 12\n").unwrap();
        assert_eq!(config.pattern.max_order, crate::pattern::ORDER_CEILING);
    }

    #[test]
    fn test_identical_glyphs_rejected() {
        let yaml = "pattern:\n  glyphs:\n    on: 'x'\n    off: 'x'\n";
        assert!(ConfigLoader::from_str(yaml).is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = ConfigLoader::from_str("flow: [unclosed").unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML config"));
    }

    #[test]
    fn test_interval_from_frequency() {
        assert_eq!(FlowConfig::default().interval().unwrap(), Duration::from_secs(1));
        assert_eq!(
            FlowConfig::default().with_frequency(120).interval().unwrap(),
            Duration::from_millis(500)
        );
        assert!(matches!(
            frequency_to_interval(-5),
            Err(MeanderError::InvalidFrequency(-5))
        ));
    }

    #[test]
    fn test_builder_setters() {
        let flow = FlowConfig::default().with_frequency(30).with_marker('o');
        assert_eq!(flow.frequency, 30);
        assert_eq!(flow.marker, 'o');

        let pattern = PatternConfig::default().with_max_order(4).with_glyphs(GlyphSet {
            on: '#',
            off: '.',
            border: '=',
        });
        assert_eq!(pattern.max_order, 4);
        assert_eq!(pattern.glyphs.border, '=');
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "flow:\n  frequency: 600\n  marker: '@'").unwrap();

        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.flow.frequency, 600);
        assert_eq!(config.flow.marker, '@');
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = ConfigLoader::from_file("/nonexistent/meander.yaml")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
