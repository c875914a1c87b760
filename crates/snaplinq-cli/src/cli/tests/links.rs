//! Tests for add, list, edit, remove.

use super::parse;
use clap::Parser;
use crate::cli::CliCommand;

#[test]
fn cli_parse_add_minimal() {
    match parse(&["snaplinq", "add", "https://github.com/rust-lang/rust"]) {
        CliCommand::Add(args) => {
            assert_eq!(args.url, "https://github.com/rust-lang/rust");
            assert!(args.title.is_none());
            assert!(args.icon.is_none());
            assert!(args.category.is_none());
            assert!(!args.no_auto_fill);
        }
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_parse_add_with_fields() {
    match parse(&[
        "snaplinq",
        "add",
        "https://example.org",
        "--title",
        "Example Site",
        "-c",
        "Reading",
        "--no-auto-fill",
    ]) {
        CliCommand::Add(args) => {
            assert_eq!(args.title.as_deref(), Some("Example Site"));
            assert_eq!(args.category.as_deref(), Some("Reading"));
            assert!(args.no_auto_fill);
        }
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_parse_add_requires_url() {
    assert!(crate::cli::Cli::try_parse_from(["snaplinq", "add"]).is_err());
}

#[test]
fn cli_parse_list() {
    match parse(&["snaplinq", "list"]) {
        CliCommand::List { query } => assert!(query.is_none()),
        _ => panic!("expected List"),
    }
    match parse(&["snaplinq", "list", "--query", "git"]) {
        CliCommand::List { query } => assert_eq!(query.as_deref(), Some("git")),
        _ => panic!("expected List with query"),
    }
}

#[test]
fn cli_parse_edit() {
    match parse(&["snaplinq", "edit", "7", "--title", "New", "--icon", ""]) {
        CliCommand::Edit(args) => {
            assert_eq!(args.id, 7);
            assert_eq!(args.title.as_deref(), Some("New"));
            assert_eq!(args.icon.as_deref(), Some(""));
            assert!(args.url.is_none());
            assert!(args.category.is_none());
        }
        _ => panic!("expected Edit"),
    }
}

#[test]
fn cli_parse_remove() {
    match parse(&["snaplinq", "remove", "99"]) {
        CliCommand::Remove { id } => assert_eq!(id, 99),
        _ => panic!("expected Remove"),
    }
}

#[test]
fn cli_parse_remove_rejects_non_numeric_id() {
    assert!(crate::cli::Cli::try_parse_from(["snaplinq", "remove", "abc"]).is_err());
}
