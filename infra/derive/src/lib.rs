#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the workspace. Currently a single attribute macro,
//! [`fprog_error`], which turns a plain enum into a context-aware error type.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! fprog-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)`, implemented for
///   `Result<T, ErrorName>` and for `Result<T, SourceError>` of every variant
///   that wraps a source.
/// * `From<SourceError>` for variants with a `source` field (or a field marked
///   `#[source]` / `#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A module-private `format_context` helper for use inside `#[error(...)]`.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant must use named fields.
/// 3. Variants with a source must also declare `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use fprog_derive::fprog_error;
/// use std::borrow::Cow;
///
/// #[fprog_error]
/// pub enum CodecError {
///     #[error("Compression failed{}: {source}", format_context(.context))]
///     Compression { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal codec error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn inflate(bytes: &[u8]) -> Result<Vec<u8>, CodecError> {
///     read_all(bytes).context("Inflating blueprint payload")
/// }
/// ```
#[proc_macro_attribute]
pub fn fprog_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
