//! Capacitor formula kernel.
//!
//! Pure IEEE-754 double-precision functions over strictly positive scalars:
//! capacitive reactance, RC time constant, LC resonance, and RC filter
//! capacitor selection with E12 snapping. All validation failures are
//! [`ToolError`] values; nothing here panics.

use std::f64::consts::PI;
use std::fmt;

use crate::error::ToolError;
use crate::series::{self, ESeries};

/// Smallest standard capacitor on the E12 grid (1 pF).
pub const E12_CAP_MIN: f64 = 1e-12;

/// Largest standard capacitor on the E12 grid (1000 µF).
pub const E12_CAP_MAX: f64 = 1e-3;

/// Result of a capacitive-reactance calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reactance {
    /// Capacitance in farads.
    pub capacitance: f64,
    /// Frequency in hertz.
    pub frequency: f64,
    /// The AC voltage used for the current figure (1 V reference when the
    /// caller supplies none).
    pub voltage: f64,
    /// Xc = 1/(2πfC), in ohms.
    pub reactance: f64,
    /// I = V/Xc, in amperes.
    pub current: f64,
}

/// Computes capacitive reactance at a frequency.
///
/// # Errors
///
/// `NonPositiveInput` when any input is not strictly positive.
pub fn reactance(
    capacitance: f64,
    frequency: f64,
    voltage: Option<f64>,
) -> Result<Reactance, ToolError> {
    require_positive("capacitance", capacitance)?;
    require_positive("frequency", frequency)?;
    let voltage = voltage.unwrap_or(1.0);
    require_positive("voltage", voltage)?;

    let xc = 1.0 / (2.0 * PI * frequency * capacitance);
    Ok(Reactance {
        capacitance,
        frequency,
        voltage,
        reactance: xc,
        current: voltage / xc,
    })
}

/// Result of an RC time-constant calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeConstant {
    /// Resistance in ohms.
    pub resistance: f64,
    /// Capacitance in farads.
    pub capacitance: f64,
    /// τ = R·C, in seconds.
    pub tau: f64,
    /// The −3 dB cutoff of the same RC pair, 1/(2πτ), in hertz.
    pub cutoff: f64,
    /// Charge milestones (n, percent charged after n·τ) for n = 1..=5.
    pub milestones: Vec<(u32, f64)>,
}

/// Computes the RC time constant and its charging timeline.
///
/// The percentages follow pct(n) = 1 − e⁻ⁿ: 63.2% at 1τ up to 99.3% at 5τ.
///
/// # Errors
///
/// `NonPositiveInput` when any input is not strictly positive.
pub fn time_constant(resistance: f64, capacitance: f64) -> Result<TimeConstant, ToolError> {
    require_positive("resistance", resistance)?;
    require_positive("capacitance", capacitance)?;

    let tau = resistance * capacitance;
    let milestones = (1..=5)
        .map(|n| (n, (1.0 - (-f64::from(n)).exp()) * 100.0))
        .collect();

    Ok(TimeConstant {
        resistance,
        capacitance,
        tau,
        cutoff: 1.0 / (2.0 * PI * tau),
        milestones,
    })
}

/// Frequency band of a resonant circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyBand {
    /// Below 20 kHz.
    Audio,
    /// 20 kHz up to 30 MHz.
    RfLow,
    /// 30 MHz and above.
    RfHigh,
}

impl FrequencyBand {
    /// Classifies a frequency in hertz.
    #[must_use]
    pub fn of(hz: f64) -> Self {
        if hz < 20e3 {
            Self::Audio
        } else if hz < 30e6 {
            Self::RfLow
        } else {
            Self::RfHigh
        }
    }
}

impl fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio => write!(f, "audio"),
            Self::RfLow => write!(f, "RF (below 30MHz)"),
            Self::RfHigh => write!(f, "RF (30MHz and up)"),
        }
    }
}

/// Result of an LC resonance calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resonance {
    /// Inductance in henries.
    pub inductance: f64,
    /// Capacitance in farads.
    pub capacitance: f64,
    /// f₀ = 1/(2π√(LC)), in hertz.
    pub frequency: f64,
    /// X_L = X_C at resonance, in ohms.
    pub reactance: f64,
    /// Characteristic impedance Z₀ = √(L/C), in ohms.
    pub characteristic_impedance: f64,
    /// Which band f₀ falls in.
    pub band: FrequencyBand,
}

/// Computes the LC resonant frequency.
///
/// # Errors
///
/// `NonPositiveInput` when any input is not strictly positive.
pub fn resonant_frequency(inductance: f64, capacitance: f64) -> Result<Resonance, ToolError> {
    require_positive("inductance", inductance)?;
    require_positive("capacitance", capacitance)?;

    let frequency = 1.0 / (2.0 * PI * (inductance * capacitance).sqrt());
    Ok(Resonance {
        inductance,
        capacitance,
        frequency,
        reactance: 2.0 * PI * frequency * inductance,
        characteristic_impedance: (inductance / capacitance).sqrt(),
        band: FrequencyBand::of(frequency),
    })
}

/// RC filter topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterType {
    /// Series R, shunt C.
    #[default]
    LowPass,
    /// Series C, shunt R.
    HighPass,
}

impl FilterType {
    /// Parses "low-pass" / "high-pass" (case-insensitive, separators loose).
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "lowpass" => Some(Self::LowPass),
            "highpass" => Some(Self::HighPass),
            _ => None,
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowPass => write!(f, "Low Pass"),
            Self::HighPass => write!(f, "High Pass"),
        }
    }
}

/// An E12 capacitor candidate for a filter design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOption {
    /// Standard capacitance in farads.
    pub capacitance: f64,
    /// Cutoff this capacitor actually gives, 1/(2πRC), in hertz.
    pub actual_cutoff: f64,
    /// Signed percent deviation of `actual_cutoff` from the requested one.
    pub error_percent: f64,
    /// Whether this is the closest candidate.
    pub best: bool,
}

/// Result of a filter capacitor suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSuggestion {
    /// Filter resistance in ohms.
    pub resistance: f64,
    /// Requested cutoff frequency in hertz.
    pub cutoff: f64,
    /// Ideal capacitance C = 1/(2πR·fc), in farads.
    pub ideal: f64,
    /// Filter topology the caller asked about.
    pub filter: FilterType,
    /// E12 candidates around the snap, ascending; empty when the ideal
    /// value is unsnappable (more than a decade outside the 1pF-1000µF
    /// grid).
    pub options: Vec<FilterOption>,
}

impl FilterSuggestion {
    /// The best snapped candidate, if the ideal value was snappable.
    #[must_use]
    pub fn best(&self) -> Option<&FilterOption> {
        self.options.iter().find(|o| o.best)
    }
}

/// Suggests a standard E12 capacitor for an RC filter cutoff.
///
/// The ideal value is always computed; when it lies within a decade of the
/// 1pF-1000µF grid, the nearest standard value plus up to two neighbours on
/// each side are reported with their actual cutoffs.
///
/// # Errors
///
/// `NonPositiveInput` when any input is not strictly positive.
pub fn suggest_filter_capacitor(
    resistance: f64,
    cutoff: f64,
    filter: FilterType,
) -> Result<FilterSuggestion, ToolError> {
    require_positive("resistance", resistance)?;
    require_positive("cutoff frequency", cutoff)?;

    let ideal = 1.0 / (2.0 * PI * resistance * cutoff);
    let options = match snap_e12_capacitor(ideal) {
        Ok(best) => series::neighbours(best, ESeries::E12, 2, 2)
            .into_iter()
            .filter(|&c| (E12_CAP_MIN..=E12_CAP_MAX * (1.0 + 1e-9)).contains(&c))
            .map(|c| {
                let actual = 1.0 / (2.0 * PI * resistance * c);
                FilterOption {
                    capacitance: c,
                    actual_cutoff: actual,
                    error_percent: (actual - cutoff) / cutoff * 100.0,
                    best: (c - best).abs() < 1e-12 * best,
                }
            })
            .collect(),
        Err(ToolError::SnapOutOfRange { .. }) => Vec::new(),
        Err(other) => return Err(other),
    };

    Ok(FilterSuggestion {
        resistance,
        cutoff,
        ideal,
        filter,
        options,
    })
}

/// Snaps an ideal capacitance onto the physical E12 grid (1pF-1000µF).
///
/// Values beyond the grid but within one decade of it clamp to the nearest
/// end of the grid.
///
/// # Errors
///
/// `SnapOutOfRange` when the ideal value is more than a decade outside the
/// grid.
pub fn snap_e12_capacitor(ideal: f64) -> Result<f64, ToolError> {
    if !(E12_CAP_MIN / 10.0..=E12_CAP_MAX * 10.0).contains(&ideal) {
        return Err(ToolError::SnapOutOfRange { value: ideal });
    }
    Ok(series::snap(ideal, ESeries::E12)
        .value
        .clamp(E12_CAP_MIN, E12_CAP_MAX))
}

/// Validates that a physical quantity is strictly positive and finite.
fn require_positive(quantity: &'static str, value: f64) -> Result<(), ToolError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ToolError::NonPositiveInput { quantity, value })
    }
}
