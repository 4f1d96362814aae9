// Unit tests for CLI argument parsing.

use crate::cli::{Cli, Commands};

use clap::Parser;

#[test]
fn given_ask_invocation_when_parsed_then_id_and_question_captured() {
    // GIVEN/WHEN: A typical ask invocation
    let cli = Cli::try_parse_from(["papermind", "ask", "42", "What is the conclusion?"])
        .expect("should parse");

    // THEN: Both positional arguments land in the right fields
    match cli.command {
        Commands::Ask { id, question } => {
            assert_eq!(id, 42);
            assert_eq!(question, "What is the conclusion?");
        }
        other => panic!("expected Ask, got {other:?}"),
    }
}

#[test]
fn given_status_with_watch_flag_when_parsed_then_watch_enabled() {
    let cli = Cli::try_parse_from(["papermind", "status", "--watch"]).expect("should parse");

    match cli.command {
        Commands::Status { watch } => assert!(watch),
        other => panic!("expected Status, got {other:?}"),
    }
}

#[test]
fn given_global_base_url_when_parsed_then_override_captured() {
    let cli = Cli::try_parse_from(["papermind", "--base-url", "http://10.0.0.5:8000", "list"])
        .expect("should parse");

    assert_eq!(cli.base_url.as_deref(), Some("http://10.0.0.5:8000"));
    assert!(matches!(cli.command, Commands::List));
}

#[test]
fn given_upload_without_path_when_parsed_then_rejected() {
    // GIVEN/WHEN: Upload missing its required path
    let result = Cli::try_parse_from(["papermind", "upload"]);

    // THEN: Parsing fails instead of defaulting to something
    assert!(result.is_err());
}
