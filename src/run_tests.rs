//! Tests for the run module.

use super::*;
use slackhook::config::Cli;
use slackhook::webhook::Destination;

fn config(args: &[&str]) -> ValidatedConfig {
    let mut full_args = vec!["slackhook"];
    full_args.extend(args);
    ValidatedConfig::from_raw(&Cli::parse_from_iter(full_args), None).unwrap()
}

mod build {
    use super::*;

    #[test]
    fn client_carries_destination_and_drain_limit() {
        let config = config(&["--url", "slack://mock", "--drain-limit", "64", "hi"]);

        let client = build_client(&config).unwrap();

        assert_eq!(*client.destination(), Destination::Mock);
        assert_eq!(client.drain_limit(), 64);
    }
}

mod execution {
    use super::*;

    #[tokio::test]
    async fn mock_destination_succeeds() {
        let config = config(&["--url", "slack://mock", "hello", "--title", "T"]);

        execute(config).await.unwrap();
    }

    #[tokio::test]
    async fn disabled_destination_succeeds() {
        let mut config = config(&["hello"]);
        config.destination = Destination::Disabled;

        execute(config).await.unwrap();
    }
}

mod run_error {
    use super::*;
    use slackhook::webhook::HttpError;

    #[test]
    fn post_error_is_transparent() {
        let error = RunError::from(PostError::from(HttpError::Timeout));

        assert_eq!(
            error.to_string(),
            "problem sending message to Slack: Request timed out"
        );
    }
}
