//! Resistor color-band lookup tables.
//!
//! Three tables share color names by design: brown is digit 1, multiplier
//! ×10 and tolerance ±1%. Position decides which table applies, so lookups
//! are always position-specific. Tables are process-lifetime constants.

use crate::error::ToolError;

/// Digit colors in value order: `DIGITS[n]` encodes the digit `n`.
pub const DIGITS: [&str; 10] = [
    "black", "brown", "red", "orange", "yellow", "green", "blue", "violet", "grey", "white",
];

/// Tolerance bands as (color, percent) pairs. "none" covers the bare
/// 3-band body, which implies ±20%.
pub const TOLERANCES: [(&str, f64); 9] = [
    ("brown", 1.0),
    ("red", 2.0),
    ("green", 0.5),
    ("blue", 0.25),
    ("violet", 0.1),
    ("grey", 0.05),
    ("gold", 5.0),
    ("silver", 10.0),
    ("none", 20.0),
];

/// Smallest multiplier exponent a band can encode (silver, ×0.01).
pub const MIN_MULTIPLIER_EXP: i32 = -2;

/// Largest multiplier exponent a band can encode (white, ×10⁹).
pub const MAX_MULTIPLIER_EXP: i32 = 9;

/// Normalises a color name: trims, lowercases, drops separators, and folds
/// the "gray" spelling onto "grey".
#[must_use]
pub fn normalise(color: &str) -> String {
    let folded: String = color
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect();
    if folded == "gray" {
        "grey".to_string()
    } else {
        folded
    }
}

/// Title-cases a color name for display ("brown" → "Brown").
#[must_use]
pub fn display_name(color: &str) -> String {
    let mut chars = color.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Looks up the digit a color encodes.
///
/// # Errors
///
/// `InvalidColor` when the color is not one of the ten digit colors; gold
/// and silver get a targeted hint since they are valid elsewhere.
pub fn digit(color: &str) -> Result<u32, ToolError> {
    let key = normalise(color);
    DIGITS
        .iter()
        .position(|&c| c == key)
        .map(|p| p as u32)
        .ok_or_else(|| {
            let hint = if key == "gold" || key == "silver" {
                "Gold and silver are only valid as multiplier or tolerance bands, not digit bands"
            } else {
                "Digit colors are black, brown, red, orange, yellow, green, blue, violet, grey, white"
            };
            ToolError::InvalidColor {
                color: color.trim().to_string(),
                position: "digit",
                hint,
            }
        })
}

/// Looks up the decade exponent a multiplier color encodes.
///
/// Digit colors map to ×10⁰..×10⁹; gold and silver are the fractional
/// multipliers ×0.1 and ×0.01.
///
/// # Errors
///
/// `InvalidColor` when the color has no multiplier meaning.
pub fn multiplier_exponent(color: &str) -> Result<i32, ToolError> {
    let key = normalise(color);
    match key.as_str() {
        "gold" => Ok(-1),
        "silver" => Ok(-2),
        _ => DIGITS
            .iter()
            .position(|&c| c == key)
            .map(|p| p as i32)
            .ok_or(ToolError::InvalidColor {
                color: color.trim().to_string(),
                position: "multiplier",
                hint: "Multiplier colors are the ten digit colors plus gold (×0.1) and silver (×0.01)",
            }),
    }
}

/// The multiplier value a color encodes.
///
/// # Errors
///
/// `InvalidColor` when the color has no multiplier meaning.
pub fn multiplier(color: &str) -> Result<f64, ToolError> {
    multiplier_exponent(color).map(|e| 10f64.powi(e))
}

/// The color encoding a decade exponent in
/// [`MIN_MULTIPLIER_EXP`, `MAX_MULTIPLIER_EXP`].
#[must_use]
pub fn multiplier_color(exponent: i32) -> &'static str {
    match exponent {
        -2 => "silver",
        -1 => "gold",
        _ => DIGITS[exponent as usize],
    }
}

/// Looks up the tolerance percentage a color encodes.
///
/// # Errors
///
/// `InvalidColor` when the color is not a tolerance color.
pub fn tolerance(color: &str) -> Result<f64, ToolError> {
    let key = normalise(color);
    TOLERANCES
        .iter()
        .find(|(c, _)| *c == key)
        .map(|&(_, pct)| pct)
        .ok_or(ToolError::InvalidColor {
            color: color.trim().to_string(),
            position: "tolerance",
            hint: "Tolerance colors are brown, red, green, blue, violet, grey, gold, silver",
        })
}

/// Reverse lookup: the color band for a tolerance percentage.
///
/// # Errors
///
/// `InvalidTolerance` when no band encodes the percentage.
pub fn tolerance_color(percent: f64) -> Result<&'static str, ToolError> {
    TOLERANCES
        .iter()
        .find(|(_, pct)| (*pct - percent).abs() < 1e-9)
        .map(|&(c, _)| c)
        .ok_or(ToolError::InvalidTolerance { tolerance: percent })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_round_trip() {
        for (value, color) in DIGITS.iter().enumerate() {
            assert_eq!(digit(color).unwrap(), value as u32);
        }
    }

    #[test]
    fn normalise_variants() {
        assert_eq!(normalise("Brown"), "brown");
        assert_eq!(normalise("  GOLD  "), "gold");
        assert_eq!(normalise("gray"), "grey");
        assert_eq!(normalise("dark-red"), "darkred");
    }

    #[test]
    fn digit_rejects_gold_with_hint() {
        let err = digit("gold").unwrap_err();
        assert!(err.to_string().contains("multiplier or tolerance"));
    }

    #[test]
    fn multiplier_values() {
        assert!((multiplier("black").unwrap() - 1.0).abs() < f64::EPSILON);
        assert!((multiplier("orange").unwrap() - 1_000.0).abs() < f64::EPSILON);
        assert!((multiplier("white").unwrap() - 1e9).abs() < 1.0);
        assert!((multiplier("gold").unwrap() - 0.1).abs() < f64::EPSILON);
        assert!((multiplier("silver").unwrap() - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn multiplier_color_round_trip() {
        for exp in MIN_MULTIPLIER_EXP..=MAX_MULTIPLIER_EXP {
            let color = multiplier_color(exp);
            assert_eq!(multiplier_exponent(color).unwrap(), exp);
        }
    }

    #[test]
    fn tolerance_round_trip() {
        for (color, pct) in TOLERANCES {
            if color == "none" {
                continue;
            }
            assert!((tolerance(color).unwrap() - pct).abs() < f64::EPSILON);
            assert_eq!(tolerance_color(pct).unwrap(), color);
        }
    }

    #[test]
    fn unknown_tolerance_is_rejected() {
        assert_eq!(
            tolerance_color(3.0),
            Err(ToolError::InvalidTolerance { tolerance: 3.0 })
        );
    }

    #[test]
    fn display_name_title_cases() {
        assert_eq!(display_name("violet"), "Violet");
        assert_eq!(display_name(""), "");
    }
}
