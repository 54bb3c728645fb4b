use std::borrow::Cow;

/// Errors raised while building progress bars.
#[fprog_derive::fprog_error]
pub enum ProgressError {
    /// Bar settings that cannot produce a sequence of messages (zero length or step).
    #[error("Invalid progress bar configuration{}: {message}", format_context(.context))]
    InvalidConfig { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid colour{}: {message}", format_context(.context))]
    InvalidColor { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Blueprint error{}: {source}", format_context(.context))]
    Blueprint { source: fprog_blueprint::BlueprintError, context: Option<Cow<'static, str>> },

    #[error("Internal progress error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
