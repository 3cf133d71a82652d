//! Resistor value ⇄ color band codec.
//!
//! Decoding consumes a 3, 4, or 5 band sequence; encoding normalises a
//! resistance onto the two-digit (4-band) or three-digit (5-band) grid,
//! snapping to the nearest representable point and reporting the snap error.
//! Standard-value search snaps onto an E-series grid instead.

use crate::error::ToolError;
use crate::resistor::colors;
use crate::series::{self, ESeries};

/// Result of decoding a band sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// Canonical (title-case) color names in band order.
    pub bands: Vec<String>,
    /// The concatenated significant digits (10..=99 or 100..=999, or 0..).
    pub significant: u32,
    /// The decade multiplier applied to the significant digits.
    pub multiplier: f64,
    /// Resistance in ohms.
    pub resistance: f64,
    /// Tolerance in percent (±20 when no tolerance band is present).
    pub tolerance_percent: f64,
}

/// One band of an encoded color code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBand {
    /// Band role: "Digit", "Multiplier", or "Tolerance".
    pub role: &'static str,
    /// Title-case color name.
    pub color: String,
    /// What the band contributes, e.g. "7", "×100", "±5%".
    pub detail: String,
}

/// Result of encoding a resistance into bands.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoded {
    /// The bands in body order.
    pub bands: Vec<EncodedBand>,
    /// The resistance the caller asked for.
    pub target: f64,
    /// The resistance the bands actually encode.
    pub encoded: f64,
    /// Signed percent deviation of `encoded` from `target`.
    pub error_percent: f64,
    /// Tolerance in percent.
    pub tolerance_percent: f64,
}

/// Result of snapping a target onto an E-series.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardMatch {
    /// The series searched.
    pub series: ESeries,
    /// The target resistance.
    pub target: f64,
    /// The best grid value.
    pub best: f64,
    /// Signed percent deviation of `best` from `target`.
    pub error_percent: f64,
    /// Nearby grid values (ascending, includes `best`) with their errors.
    pub nearby: Vec<(f64, f64)>,
    /// Color code for the best value, at the series' tolerance.
    pub color_code: Encoded,
}

/// Decodes a color-band sequence into a resistance and tolerance.
///
/// Band layouts: 3 = digit, digit, multiplier (no tolerance band, ±20%);
/// 4 = digit, digit, multiplier, tolerance; 5 = digit, digit, digit,
/// multiplier, tolerance. Colors are case-insensitive.
///
/// # Errors
///
/// `InvalidBandCount` for any other length, `InvalidColor` when a color
/// does not belong at its position.
pub fn decode<S: AsRef<str>>(bands: &[S]) -> Result<Decoded, ToolError> {
    let digit_count = match bands.len() {
        3 | 4 => 2,
        5 => 3,
        count => return Err(ToolError::InvalidBandCount { count }),
    };

    let mut significant = 0u32;
    for band in &bands[..digit_count] {
        significant = significant * 10 + colors::digit(band.as_ref())?;
    }

    let multiplier = colors::multiplier(bands[digit_count].as_ref())?;
    let tolerance_percent = match bands.get(digit_count + 1) {
        Some(band) => colors::tolerance(band.as_ref())?,
        None => 20.0,
    };

    Ok(Decoded {
        bands: bands
            .iter()
            .map(|b| colors::display_name(&colors::normalise(b.as_ref())))
            .collect(),
        significant,
        multiplier,
        resistance: f64::from(significant) * multiplier,
        tolerance_percent,
    })
}

/// Encodes a resistance into 4-band (two digits) or 5-band (three digits)
/// colors.
///
/// The value is normalised so the significant digits land in [10, 100) or
/// [100, 1000); off-grid values snap to the nearest grid point (equidistant
/// ties go to the smaller mantissa) and the deviation is reported in
/// `error_percent`. The multiplier exponent is clamped to the color table's
/// range (silver ×0.01 through white ×10⁹), so extreme values snap to the
/// nearest representable code.
///
/// # Errors
///
/// `NonPositiveInput` for a non-positive resistance, `InvalidTolerance`
/// when no band encodes the requested tolerance.
pub fn encode(ohms: f64, tolerance_percent: f64, five_band: bool) -> Result<Encoded, ToolError> {
    if ohms <= 0.0 || !ohms.is_finite() {
        return Err(ToolError::NonPositiveInput {
            quantity: "resistance",
            value: ohms,
        });
    }
    let tolerance_color = colors::tolerance_color(tolerance_percent)?;

    let digit_count: u32 = if five_band { 3 } else { 2 };
    let lo = 10u32.pow(digit_count - 1);
    let hi = 10u32.pow(digit_count);

    let mut exp = (ohms.log10().floor() as i32) - (digit_count as i32 - 1);
    exp = exp.clamp(colors::MIN_MULTIPLIER_EXP, colors::MAX_MULTIPLIER_EXP);

    let mut significant = round_half_down(ohms / 10f64.powi(exp));
    if significant >= hi {
        if exp < colors::MAX_MULTIPLIER_EXP {
            exp += 1;
            significant = round_half_down(ohms / 10f64.powi(exp)).clamp(lo, hi - 1);
        } else {
            significant = hi - 1;
        }
    }
    significant = significant.clamp(lo, hi - 1);

    let multiplier = 10f64.powi(exp);
    let encoded = f64::from(significant) * multiplier;
    let error_percent = (encoded - ohms) / ohms * 100.0;

    let mut bands = Vec::with_capacity(digit_count as usize + 2);
    let mut divisor = lo;
    for _ in 0..digit_count {
        let digit = (significant / divisor) % 10;
        bands.push(EncodedBand {
            role: "Digit",
            color: colors::display_name(colors::DIGITS[digit as usize]),
            detail: digit.to_string(),
        });
        divisor /= 10;
    }
    bands.push(EncodedBand {
        role: "Multiplier",
        color: colors::display_name(colors::multiplier_color(exp)),
        detail: format!("×{multiplier}"),
    });
    bands.push(EncodedBand {
        role: "Tolerance",
        color: colors::display_name(tolerance_color),
        detail: format!("±{tolerance_percent}%"),
    });

    Ok(Encoded {
        bands,
        target: ohms,
        encoded,
        error_percent,
        tolerance_percent,
    })
}

/// Snaps a target resistance to the nearest value of an E-series.
///
/// The match includes up to two standard values either side for context
/// and the best value's color code (5-band for E96, which needs three
/// significant figures; 4-band otherwise).
///
/// # Errors
///
/// `NonPositiveInput` for a non-positive target.
pub fn find_standard(target: f64, series: ESeries) -> Result<StandardMatch, ToolError> {
    if target <= 0.0 || !target.is_finite() {
        return Err(ToolError::NonPositiveInput {
            quantity: "target resistance",
            value: target,
        });
    }

    let snapped = series::snap(target, series);
    let nearby = series::neighbours(snapped.value, series, 2, 2)
        .into_iter()
        .map(|v| (v, (v - target) / target * 100.0))
        .collect();

    let color_code = encode(
        snapped.value,
        series.tolerance_percent(),
        series == ESeries::E96,
    )?;

    Ok(StandardMatch {
        series,
        target,
        best: snapped.value,
        error_percent: snapped.error_percent,
        nearby,
        color_code,
    })
}

/// Rounds to the nearest integer; exact .5 ties round down so equidistant
/// grid points resolve to the smaller mantissa.
fn round_half_down(value: f64) -> u32 {
    let floor = value.floor();
    let result = if value - floor > 0.5 { floor + 1.0 } else { floor };
    result as u32
}
