//! Resistor color-code codec.
//!
//! Bidirectional translation between colored band sequences and resistance
//! values, plus snapping onto the IEC 60063 preferred-value series.
//!
//! - [`colors`] — the digit/multiplier/tolerance band tables
//! - [`codec`] — decode, encode, and standard-value search (compute layer)
//! - [`render`] — Markdown reports over codec results

pub mod codec;
pub mod colors;
pub mod render;

pub use codec::{decode, encode, find_standard, Decoded, Encoded, StandardMatch};
