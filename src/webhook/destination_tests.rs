//! Tests for destination parsing.

use super::{Destination, MOCK_SENTINEL};
use crate::config::ConfigError;

mod parsing {
    use super::*;

    #[test]
    fn empty_string_is_disabled() {
        assert_eq!("".parse::<Destination>().unwrap(), Destination::Disabled);
        assert_eq!("   ".parse::<Destination>().unwrap(), Destination::Disabled);
    }

    #[test]
    fn sentinel_is_mock() {
        let dest: Destination = MOCK_SENTINEL.parse().unwrap();

        assert_eq!(dest, Destination::Mock);
        assert!(dest.is_mock());
        assert!(dest.is_enabled());
        assert!(dest.url().is_none());
    }

    #[test]
    fn https_url_is_webhook() {
        let dest: Destination = "https://hooks.slack.com/services/T0/B0/abc".parse().unwrap();

        assert_eq!(
            dest.url().map(url::Url::as_str),
            Some("https://hooks.slack.com/services/T0/B0/abc")
        );
        assert!(!dest.is_mock());
    }

    #[test]
    fn plain_http_is_accepted() {
        let dest: Destination = "http://127.0.0.1:8080/hook".parse().unwrap();

        assert!(matches!(dest, Destination::Webhook(_)));
    }

    #[test]
    fn malformed_url_is_rejected() {
        let err = "not a url".parse::<Destination>().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn other_slack_urls_are_not_the_sentinel() {
        let err = "slack://other".parse::<Destination>().unwrap_err();

        assert!(matches!(
            err,
            ConfigError::UnsupportedScheme { ref scheme, .. } if scheme == "slack"
        ));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let err = "ftp://example.com/hook".parse::<Destination>().unwrap_err();

        assert!(matches!(err, ConfigError::UnsupportedScheme { .. }));
    }
}

mod display {
    use super::*;

    #[test]
    fn display_round_trips_string_form() {
        for input in ["", MOCK_SENTINEL, "https://example.com/hook"] {
            let dest: Destination = input.parse().unwrap();
            assert_eq!(dest.to_string(), input);
        }
    }

    #[test]
    fn display_shows_normalized_url() {
        let dest: Destination = "  HTTPS://X.com".parse().unwrap();

        assert_eq!(dest.to_string(), "https://x.com/");
        assert_eq!(dest.to_string().parse::<Destination>().unwrap(), dest);
    }

    #[test]
    fn default_is_disabled() {
        assert_eq!(Destination::default(), Destination::Disabled);
        assert!(!Destination::default().is_enabled());
    }
}
