use std::borrow::Cow;

/// Errors produced while encoding or decoding blueprint strings.
#[fprog_derive::fprog_error]
pub enum BlueprintError {
    #[error("Blueprint string is empty{}", format_context(.context))]
    Empty { context: Option<Cow<'static, str>> },

    /// Only version `0` strings exist today.
    #[error("Unsupported blueprint string version '{version}'{}", format_context(.context))]
    UnsupportedVersion { version: char, context: Option<Cow<'static, str>> },

    #[error("Base64 decode error{}: {source}", format_context(.context))]
    Base64 { source: base64::DecodeError, context: Option<Cow<'static, str>> },

    /// Zlib stream could not be produced or inflated.
    #[error("Compression error{}: {source}", format_context(.context))]
    Compression { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Serde serialization error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal blueprint error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
