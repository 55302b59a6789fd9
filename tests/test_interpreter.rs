use anyhow::Result;
use ksm::{Interpreter, InterpreterError, ParserError};

mod common;

fn file_test(filename: &str, reference: &[&str]) -> Result<()> {
    common::init_logger();

    let input = common::get_script(filename)?;

    let mut interpreter = Interpreter::new(Vec::<String>::new());
    interpreter.run(&input)?;

    assert_eq!(interpreter.into_output(), reference);

    Ok(())
}

#[test]
fn test_declare_and_print() -> Result<()> {
    file_test(
        "declare_and_print.ksm",
        &["5", "7", "hello world", "undeclared", "good morning"],
    )
}

#[test]
fn test_conditionals() -> Result<()> {
    file_test("conditionals.ksm", &["a is bigger", "otherwise ran", "nested"])
}

#[test]
fn test_bad_declaration() -> Result<()> {
    let input = common::get_script("bad_declaration.ksm")?;

    let mut interpreter = Interpreter::new(Vec::<String>::new());

    assert_eq!(
        interpreter.run(&input),
        Err(InterpreterError::DeclarationFormat {
            clause: "y".to_string(),
            line: 3,
            column: 1,
        })
    );
    assert_eq!(interpreter.output(), &["1"]);
    assert_eq!(interpreter.environment().get("x"), Some("1"));
    assert_eq!(interpreter.environment().get("y"), None);

    Ok(())
}

#[test]
fn test_parse_error_runs_nothing() -> Result<()> {
    let input = common::get_script("invalid_character.ksm")?;

    let mut interpreter = Interpreter::new(Vec::<String>::new());

    assert!(matches!(
        interpreter.run(&input),
        Err(InterpreterError::Parser(ParserError::InvalidCharacter { .. }))
    ));
    assert!(interpreter.output().is_empty());
    assert!(interpreter.environment().is_empty());

    Ok(())
}

#[test]
fn test_session_persists_between_runs() -> Result<()> {
    let mut interpreter = Interpreter::new(Vec::<String>::new());

    interpreter.run("declare x = 1")?;
    assert!(interpreter.run("declare x").is_err());
    interpreter.run("declare y = 2")?;
    interpreter.run("if x < y { displayln(x) } otherwise { displayln(y) }")?;

    assert_eq!(interpreter.output(), &["1"]);
    assert_eq!(
        interpreter.environment().variables(),
        vec![("x", "1"), ("y", "2")]
    );

    Ok(())
}
