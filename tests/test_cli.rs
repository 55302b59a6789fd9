use anyhow::Result;
use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use predicates::str::contains;

mod common;

// Keeps REPL history out of the user's cache directory.
fn ksm(cache: &TempDir) -> Result<Command> {
    let mut command = Command::cargo_bin("ksm")?;
    command.env("XDG_CACHE_HOME", cache.path()).arg("--no-color");

    Ok(command)
}

#[test]
fn test_run_file() -> Result<()> {
    let cache = TempDir::new()?;

    ksm(&cache)?
        .arg(common::get_script_path("conditionals.ksm"))
        .assert()
        .success()
        .stdout("a is bigger\notherwise ran\nnested\n");

    Ok(())
}

#[test]
fn test_run_temporary_file() -> Result<()> {
    let cache = TempDir::new()?;
    let script = cache.child("script.ksm");
    script.write_str("declare x = 5\ndisplayln(x)\n")?;

    ksm(&cache)?.arg(script.path()).assert().success().stdout("5\n");

    Ok(())
}

#[test]
fn test_echo() -> Result<()> {
    let cache = TempDir::new()?;
    let script = cache.child("echo.ksm");
    script.write_str("declare x = 5\nif x > 9 { } otherwise { displayln(x) }")?;

    ksm(&cache)?
        .arg("--echo")
        .arg(script.path())
        .assert()
        .success()
        .stdout(
            contains("Variable Declaration: x = 5")
                .and(contains("If Statement (False): x > 9"))
                .and(contains("Otherwise Statement"))
                .and(contains("5\n")),
        );

    Ok(())
}

#[test]
fn test_missing_file() -> Result<()> {
    let cache = TempDir::new()?;

    ksm(&cache)?
        .arg(cache.child("missing.ksm").path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Could not read file:"));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let cache = TempDir::new()?;

    ksm(&cache)?
        .arg(common::get_script_path("invalid_character.ksm"))
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains(r#"Parsing error: Invalid character "+" at 3:15"#));

    Ok(())
}

#[test]
fn test_interpretation_error() -> Result<()> {
    let cache = TempDir::new()?;

    ksm(&cache)?
        .arg(common::get_script_path("bad_declaration.ksm"))
        .assert()
        .code(1)
        .stdout("1\n")
        .stderr(contains(
            r#"Interpretation error: Invalid variable declaration at 3:1: "y""#,
        ));

    Ok(())
}

#[test]
fn test_tokens() -> Result<()> {
    let cache = TempDir::new()?;

    ksm(&cache)?
        .arg("--tokens")
        .arg(common::get_script_path("tokens.ksm"))
        .assert()
        .success()
        .stdout(
            contains(r#"1:1 Keyword "declare""#)
                .and(contains(r#"2:23 String "five""#))
                .and(contains(r#"3:1 EndOfInput """#)),
        );

    Ok(())
}

#[test]
fn test_ast() -> Result<()> {
    let cache = TempDir::new()?;

    ksm(&cache)?
        .arg("--ast")
        .arg(common::get_script_path("tokens.ksm"))
        .assert()
        .success()
        .stdout(
            contains("Declaration (1:1): x = 5")
                .and(contains("If (2:1): Comparison x == 5"))
                .and(contains(r#"Print (2:13): Operand "five""#)),
        );

    Ok(())
}

#[test]
fn test_verbosity_out_of_range() -> Result<()> {
    let cache = TempDir::new()?;

    ksm(&cache)?
        .arg("-vvvvvv")
        .arg(common::get_script_path("tokens.ksm"))
        .assert()
        .failure()
        .stderr(contains("Verbosity must be between 0 and 5"));

    Ok(())
}

#[test]
fn test_repl() -> Result<()> {
    let cache = TempDir::new()?;

    ksm(&cache)?
        .write_stdin("declare x = 5\ndisplayln(x)\nexit\ndisplayln(after)\n")
        .assert()
        .success()
        .stdout(
            contains("Welcome to the KSM REPL!")
                .and(contains("Type 'exit' to quit."))
                .and(contains("5\n"))
                .and(contains("after").not()),
        );

    Ok(())
}

#[test]
fn test_repl_recovers_from_errors() -> Result<()> {
    let cache = TempDir::new()?;

    ksm(&cache)?
        .write_stdin("declare x = 1\ndeclare y\ndisplayln(x -)\ndisplayln(x)\n")
        .assert()
        .success()
        .stdout(contains("1\n"))
        .stderr(
            contains("Interpretation error: Invalid variable declaration")
                .and(contains("Parsing error: Invalid character")),
        );

    Ok(())
}

#[test]
fn test_repl_continues_open_blocks() -> Result<()> {
    let cache = TempDir::new()?;

    ksm(&cache)?
        .write_stdin("if 1 < 2 {\n  displayln(yes)\n}\ndisplayln(done)\n")
        .assert()
        .success()
        .stdout(contains("yes\n").and(contains("done\n")))
        .stderr("");

    Ok(())
}

#[test]
fn test_repl_unclosed_parenthesis_ends_with_its_line() -> Result<()> {
    let cache = TempDir::new()?;

    ksm(&cache)?
        .write_stdin("displayln(x\ndisplayln(y)\ndisplayln(z)\n")
        .assert()
        .success()
        .stdout(contains("y\n").and(contains("z\n")))
        .stderr(contains("Parsing error: Unexpected end of input at 1:12"));

    Ok(())
}

#[test]
fn test_repl_unterminated_string_ends_with_its_line() -> Result<()> {
    let cache = TempDir::new()?;

    ksm(&cache)?
        .write_stdin("displayln(\"abc\ndeclare x = 5\ndisplayln(x)\n")
        .assert()
        .success()
        .stdout(contains("5\n"))
        .stderr(contains("Parsing error: Unexpected end of input at 1:15"));

    Ok(())
}

#[test]
fn test_repl_open_string_stops_block_continuation() -> Result<()> {
    let cache = TempDir::new()?;

    ksm(&cache)?
        .write_stdin("if 1 < 2 {\n  declare s = \"abc\n}\ndisplayln(after)\n")
        .assert()
        .success()
        .stdout(contains("after\n"))
        .stderr(contains("Parsing error:"));

    Ok(())
}

#[test]
fn test_repl_reports_unfinished_input() -> Result<()> {
    let cache = TempDir::new()?;

    ksm(&cache)?
        .write_stdin("if 1 < 2 {\n")
        .assert()
        .success()
        .stderr(contains("Parsing error: Unexpected end of input"));

    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_repl_saves_history() -> Result<()> {
    let cache = TempDir::new()?;

    ksm(&cache)?.write_stdin("displayln(x)\n").assert().success();

    cache.child("ksm_history").assert(predicate::path::exists());

    Ok(())
}
