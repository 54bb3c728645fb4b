use fprog_derive::fprog_error;
use std::borrow::Cow;

#[fprog_error]
#[derive(Debug)]
pub(crate) enum GatedError {
    #[cfg(not(any()))]
    #[error("Format error{}: {source}", format_context(.context))]
    Format { source: std::fmt::Error, context: Option<Cow<'static, str>> },

    #[cfg(any())]
    #[error("Never compiled{}: {message}", format_context(.context))]
    Never { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unit-like variant without context")]
    Empty {},
}

fn main() {
    let err: GatedError = std::fmt::Error.into();
    assert!(matches!(err, GatedError::Format { context: None, .. }));
}
