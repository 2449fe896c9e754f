// quotesh/tests/quote_styles_integration_tests.rs
//! End-to-end checks that each quoting style behaves correctly through the
//! full binary: stdin in, quoted lines out.

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;

fn quote_stdin(style: &str, input: &str) -> Assert {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("quotesh"));
    cmd.args(["--quoting-style", style]);
    cmd.write_stdin(input).assert()
}

#[test]
fn literal_is_the_identity() -> Result<(), Box<dyn std::error::Error>> {
    quote_stdin("literal", "a b c\nit's\n")
        .success()
        .stdout(predicate::str::diff("a b c\nit's\n"));
    Ok(())
}

#[test]
fn shell_always_quotes_every_line() -> Result<(), Box<dyn std::error::Error>> {
    quote_stdin("shell-always", "it's\nplain\n\n")
        .success()
        .stdout(predicate::str::diff("'it'\\''s'\n'plain'\n''\n"));
    Ok(())
}

#[test]
fn shell_quotes_only_lines_with_special_characters() -> Result<(), Box<dyn std::error::Error>> {
    quote_stdin("shell", "plain_word\nhas space\na$b\n")
        .success()
        .stdout(predicate::str::diff("plain_word\n'has space'\n'a$b'\n"));
    Ok(())
}

#[test]
fn escape_style_escapes_spaces_and_backslashes() -> Result<(), Box<dyn std::error::Error>> {
    quote_stdin("escape", "a b\\c\n")
        .success()
        .stdout(predicate::str::diff("a\\ b\\\\c\n"));
    Ok(())
}

#[test]
fn c_style_wraps_and_escapes() -> Result<(), Box<dyn std::error::Error>> {
    quote_stdin("c", "a\"b\\c\nplain\n")
        .success()
        .stdout(predicate::str::diff("\"a\\\"b\\\\c\"\n\"plain\"\n"));
    Ok(())
}

#[test]
fn c_style_guards_against_trigraphs() -> Result<(), Box<dyn std::error::Error>> {
    quote_stdin("c", "??!\n")
        .success()
        .stdout(predicate::str::diff("\"?\\?!\"\n"));
    Ok(())
}

#[test]
fn c_maybe_leaves_clean_lines_bare() -> Result<(), Box<dyn std::error::Error>> {
    quote_stdin("c-maybe", "plain\na\"b\n")
        .success()
        .stdout(predicate::str::diff("plain\n\"a\\\"b\"\n"));
    Ok(())
}

#[test]
fn pcre_escapes_metacharacters() -> Result<(), Box<dyn std::error::Error>> {
    quote_stdin("pcre", "word_123\na.b*c\n")
        .success()
        .stdout(predicate::str::diff("word_123\na\\.b\\*c\n"));
    Ok(())
}

#[test]
fn csv_quotes_separators_and_doubles_quotes() -> Result<(), Box<dyn std::error::Error>> {
    quote_stdin("csv", "plain\na,b\nhe said \"hi\"\n padded\n")
        .success()
        .stdout(predicate::str::diff(
            "plain\n\"a,b\"\n\"he said \"\"hi\"\"\"\n\" padded\"\n",
        ));
    Ok(())
}

#[test]
fn non_ascii_lines_survive_the_shell_styles() -> Result<(), Box<dyn std::error::Error>> {
    quote_stdin("shell", "caf\u{E9}\n")
        .success()
        .stdout(predicate::str::diff("caf\u{E9}\n"));
    Ok(())
}

#[test]
fn escape_style_renders_non_ascii_in_octal() -> Result<(), Box<dyn std::error::Error>> {
    quote_stdin("escape", "caf\u{E9}\n")
        .success()
        .stdout(predicate::str::diff("caf\\351\n"));
    Ok(())
}
