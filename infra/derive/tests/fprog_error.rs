use fprog_derive::fprog_error;
use std::borrow::Cow;

#[fprog_error]
pub enum SampleError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Internal sample error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i64, SampleError> {
    raw.parse::<i64>().context("Parsing sample value")
}

#[test]
fn fprog_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/fprog_error_pass.rs");
    t.pass("tests/ui/fprog_error_cfg_variant.rs");
}

#[test]
fn source_results_gain_context() {
    let err = parse("not-a-number").unwrap_err();
    assert!(matches!(&err, SampleError::Parse { context: Some(c), .. } if c == "Parsing sample value"));
    assert!(err.to_string().starts_with("Parse error (Parsing sample value): "));
}

#[test]
fn question_mark_converts_without_context() {
    fn run() -> Result<i64, SampleError> {
        Ok("12x".parse::<i64>()?)
    }

    let err = run().unwrap_err();
    assert!(matches!(err, SampleError::Parse { context: None, .. }));
}

#[test]
fn strings_become_internal_errors() {
    let from_static: SampleError = "boom".into();
    let from_owned: SampleError = String::from("bang").into();

    assert_eq!(from_static.to_string(), "Internal sample error: boom");
    assert_eq!(from_owned.to_string(), "Internal sample error: bang");
}

#[test]
fn context_overrides_existing_error() {
    let result: Result<(), SampleError> = Err("boom".into());
    let err = result.context("Outer step").unwrap_err();
    assert_eq!(err.to_string(), "Internal sample error (Outer step): boom");
}
