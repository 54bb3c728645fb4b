//! Blueprint string codec: `'0'` + base64(zlib(json)).

use crate::error::{BlueprintError, BlueprintErrorExt};
use crate::model::{Blueprint, BlueprintDocument};
use base64::{Engine as _, engine::general_purpose};
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use serde::Serialize;
use std::io::{Read, Write};
use tracing::{debug, instrument};

/// Version byte prefixed to every blueprint string.
pub const VERSION_PREFIX: char = '0';

/// Encodes raw blueprint JSON into an importable blueprint string.
///
/// # Errors
/// Returns [`BlueprintError::Compression`] if the zlib stream cannot be written.
pub fn encode(json: &str) -> Result<String, BlueprintError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(json.as_bytes()).context("Failed to deflate blueprint")?;
    let compressed = encoder.finish().context("Failed to finish zlib stream")?;

    let mut out = String::with_capacity(1 + compressed.len().div_ceil(3) * 4);
    out.push(VERSION_PREFIX);
    general_purpose::STANDARD.encode_string(&compressed, &mut out);

    debug!(json_bytes = json.len(), encoded_bytes = out.len(), "Blueprint encoded");
    Ok(out)
}

/// Serializes a blueprint (wrapped in its `{"blueprint": ..}` document) and encodes it.
///
/// # Errors
/// Returns [`BlueprintError::Serialize`] or [`BlueprintError::Compression`].
#[instrument(level = "debug", skip_all, fields(entities = blueprint.entities.len()))]
pub fn encode_blueprint(blueprint: &Blueprint) -> Result<String, BlueprintError> {
    #[derive(Serialize)]
    struct DocumentRef<'a> {
        blueprint: &'a Blueprint,
    }

    let json = serde_json::to_string(&DocumentRef { blueprint })
        .context("Failed to serialize blueprint")?;
    encode(&json)
}

/// Decodes a blueprint string back into its JSON text.
///
/// Surrounding whitespace is ignored (strings pasted from the game often end with a newline).
///
/// # Errors
/// * [`BlueprintError::Empty`] for blank input.
/// * [`BlueprintError::UnsupportedVersion`] if the first character is not `'0'`.
/// * [`BlueprintError::Base64`] / [`BlueprintError::Compression`] for corrupted payloads.
/// * [`BlueprintError::Internal`] if the inflated payload is not UTF-8.
pub fn decode(input: &str) -> Result<String, BlueprintError> {
    let input = input.trim();
    let mut chars = input.chars();
    let version = chars.next().ok_or(BlueprintError::Empty { context: None })?;
    if version != VERSION_PREFIX {
        return Err(BlueprintError::UnsupportedVersion { version, context: None });
    }

    let compressed =
        general_purpose::STANDARD.decode(chars.as_str()).context("Invalid blueprint payload")?;

    let mut bytes = Vec::with_capacity(compressed.len() * 4);
    ZlibDecoder::new(compressed.as_slice())
        .read_to_end(&mut bytes)
        .context("Failed to inflate blueprint")?;

    String::from_utf8(bytes).map_err(|e| BlueprintError::Internal {
        message: e.to_string().into(),
        context: Some("Blueprint payload is not UTF-8".into()),
    })
}

/// Decodes a blueprint string into the typed display-panel model.
///
/// # Errors
/// See [`decode`]; additionally [`BlueprintError::Serialize`] if the JSON is not a
/// single blueprint made of display panels.
pub fn decode_blueprint(input: &str) -> Result<Blueprint, BlueprintError> {
    let json = decode(input)?;
    let document: BlueprintDocument =
        serde_json::from_str(&json).context("Not a display-panel blueprint")?;
    Ok(document.blueprint)
}

/// Decodes any blueprint string (books, planners, arbitrary entities) into untyped JSON.
///
/// # Errors
/// See [`decode`]; additionally [`BlueprintError::Serialize`] for malformed JSON.
pub fn decode_value(input: &str) -> Result<serde_json::Value, BlueprintError> {
    let json = decode(input)?;
    serde_json::from_str(&json).context("Blueprint payload is not valid JSON")
}
