//! # Domain Models
//!
//! Pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O or heavy logic, just data and simple helpers.

pub mod charset;
pub mod config;
pub mod constants;
