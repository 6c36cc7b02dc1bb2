//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_webhook_section() {
        let toml = r#"
            [webhook]
            url = "https://hooks.slack.com/services/T0/B0/x"
            timeout_secs = 10
            drain_limit = 4096
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(
            config.webhook.url.as_deref(),
            Some("https://hooks.slack.com/services/T0/B0/x")
        );
        assert_eq!(config.webhook.timeout_secs, Some(10));
        assert_eq!(config.webhook.drain_limit, Some(4096));
    }

    #[test]
    fn parse_message_section() {
        let config = TomlConfig::parse("[message]\ncolor = \"warning\"\n").unwrap();

        assert_eq!(config.message.color.as_deref(), Some("warning"));
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.webhook.url.is_none());
        assert!(config.webhook.timeout_secs.is_none());
        assert!(config.message.color.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = TomlConfig::parse("[webhook]\nmethod = \"PUT\"\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn bare_timeout_key_is_rejected() {
        let result = TomlConfig::parse("[webhook]\ntimeout = 10\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = TomlConfig::parse("[webhook]\ntimeout_secs = \"soon\"\n");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert!(config.webhook.url.is_none());
    }

    #[test]
    fn default_template_keys_parse_when_uncommented() {
        let uncommented: String = default_config_template()
            .lines()
            .map(|line| {
                let setting = line.trim_start_matches("# ");
                if setting.contains(" = ") { setting } else { line }
            })
            .collect::<Vec<_>>()
            .join("\n");

        let config = TomlConfig::parse(&uncommented).unwrap();

        assert_eq!(config.webhook.timeout_secs, Some(30));
        assert_eq!(config.webhook.drain_limit, Some(655_360));
        assert_eq!(config.message.color.as_deref(), Some("good"));
    }

    #[test]
    fn default_template_documents_mock_sentinel() {
        assert!(default_config_template().contains("slack://mock"));
    }
}
