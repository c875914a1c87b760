//! Tests for session, category, classify and completions commands.

use super::parse;
use crate::cli::{CategoryCommand, CliCommand};

#[test]
fn cli_parse_login_logout_whoami() {
    match parse(&["snaplinq", "login", "alice@example.com"]) {
        CliCommand::Login { identity } => assert_eq!(identity, "alice@example.com"),
        _ => panic!("expected Login"),
    }
    assert!(matches!(parse(&["snaplinq", "logout"]), CliCommand::Logout));
    assert!(matches!(parse(&["snaplinq", "whoami"]), CliCommand::Whoami));
}

#[test]
fn cli_parse_category_subcommands() {
    match parse(&["snaplinq", "category", "list"]) {
        CliCommand::Category(CategoryCommand::List) => {}
        _ => panic!("expected Category List"),
    }
    match parse(&["snaplinq", "category", "add", "Work"]) {
        CliCommand::Category(CategoryCommand::Add { name }) => assert_eq!(name, "Work"),
        _ => panic!("expected Category Add"),
    }
    match parse(&["snaplinq", "category", "rename", "Work", "Job"]) {
        CliCommand::Category(CategoryCommand::Rename { old, new }) => {
            assert_eq!(old, "Work");
            assert_eq!(new, "Job");
        }
        _ => panic!("expected Category Rename"),
    }
    match parse(&["snaplinq", "category", "delete", "AI Tools"]) {
        CliCommand::Category(CategoryCommand::Delete { name }) => assert_eq!(name, "AI Tools"),
        _ => panic!("expected Category Delete"),
    }
}

#[test]
fn cli_parse_classify() {
    match parse(&["snaplinq", "classify", "https://ainews.example.com"]) {
        CliCommand::Classify { url } => assert_eq!(url, "https://ainews.example.com"),
        _ => panic!("expected Classify"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["snaplinq", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    crate::cli::Cli::command().debug_assert();
}
