//! # Blueprints
//!
//! Serde model of display-panel blueprints and the blueprint-string codec
//! (`'0'` + base64 of the zlib-compressed JSON) the game uses for import and export.
//!
//! ```rust
//! use fprog_blueprint::{Blueprint, decode_blueprint, encode_blueprint};
//!
//! let encoded = encode_blueprint(&Blueprint::new()).unwrap();
//! assert!(encoded.starts_with('0'));
//! assert_eq!(decode_blueprint(&encoded).unwrap(), Blueprint::new());
//! ```

pub mod codec;
mod error;
pub mod model;

pub use crate::codec::{decode, decode_blueprint, decode_value, encode, encode_blueprint};
pub use crate::error::{BlueprintError, BlueprintErrorExt};
pub use crate::model::*;
