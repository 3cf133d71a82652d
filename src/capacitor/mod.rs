//! Capacitor calculation kernel.
//!
//! Four pure formulas over strictly positive scalars: capacitive reactance,
//! RC time constant, LC resonance, and RC filter capacitor selection with
//! E12 snapping.
//!
//! - [`formulas`] — the compute layer
//! - [`render`] — Markdown reports over formula results

pub mod formulas;
pub mod render;

pub use formulas::{
    reactance, resonant_frequency, suggest_filter_capacitor, time_constant, FilterSuggestion,
    FilterType, FrequencyBand, Reactance, Resonance, TimeConstant,
};
