//! SI-prefixed quantity formatting.
//!
//! This is the render layer for every numeric quantity the tools report.
//! A value is shown with the prefix that puts its mantissa in [1, 1000)
//! (`4.70kΩ`, `150µs`, `22nF`), always with three significant figures.
//! Values outside the pico..mega prefix range fall back to scientific
//! notation (`1.59×10^9 Hz`).
//!
//! Formatting lives here so the compute layers stay free of presentation
//! concerns and tests can assert on raw numbers.

/// Supported prefixes, smallest to largest. Index 4 is the bare unit.
const PREFIXES: [&str; 7] = ["p", "n", "µ", "m", "", "k", "M"];

/// Exponent of ten for the first prefix in [`PREFIXES`].
const FIRST_EXP: i32 = -12;

/// Formats a strictly positive quantity with an SI prefix and unit symbol.
///
/// The mantissa is rounded half-to-even to three significant figures.
/// Values below 1p or at/above 1000M use scientific notation instead.
#[must_use]
pub fn format_si(value: f64, unit: &str) -> String {
    if value <= 0.0 || !value.is_finite() {
        // Quantities are validated positive before formatting; zero can
        // still reach us through subtraction in range displays.
        return format!("0{unit}");
    }

    // Pick the prefix whose mantissa lands in [1, 1000).
    let exp = value.log10().floor() as i32;
    let slot = (exp - FIRST_EXP).div_euclid(3);

    let Ok(idx) = usize::try_from(slot) else {
        return format_scientific(value, unit);
    };
    if idx >= PREFIXES.len() {
        return format_scientific(value, unit);
    }

    let scale = 10f64.powi(FIRST_EXP + 3 * idx as i32);
    let (mantissa, idx) = match round_sig3(value / scale) {
        m if m >= 1000.0 && idx + 1 < PREFIXES.len() => (m / 1000.0, idx + 1),
        m if m >= 1000.0 => return format_scientific(value, unit),
        m => (m, idx),
    };

    format!("{}{}{unit}", format_mantissa(mantissa), PREFIXES[idx])
}

/// Rounds a mantissa in [1, 1000) to three significant figures, half-to-even.
fn round_sig3(mantissa: f64) -> f64 {
    let magnitude = mantissa.log10().floor() as i32;
    let scale = 10f64.powi(2 - magnitude);
    (mantissa * scale).round_ties_even() / scale
}

/// Renders a rounded mantissa in [1, 1000) with exactly three significant figures.
fn format_mantissa(mantissa: f64) -> String {
    if mantissa < 10.0 {
        format!("{mantissa:.2}")
    } else if mantissa < 100.0 {
        format!("{mantissa:.1}")
    } else {
        format!("{mantissa:.0}")
    }
}

/// Scientific-notation fallback for values no prefix can represent.
fn format_scientific(value: f64, unit: &str) -> String {
    let exp = value.log10().floor() as i32;
    let mantissa = round_sig3(value / 10f64.powi(exp));
    format!("{}×10^{exp} {unit}", format_mantissa(mantissa))
}

/// Formats a resistance in ohms.
#[must_use]
pub fn format_resistance(ohms: f64) -> String {
    format_si(ohms, "Ω")
}

/// Formats a capacitance in farads.
#[must_use]
pub fn format_capacitance(farads: f64) -> String {
    format_si(farads, "F")
}

/// Formats a frequency in hertz.
#[must_use]
pub fn format_frequency(hz: f64) -> String {
    format_si(hz, "Hz")
}

/// Formats a duration in seconds.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    format_si(seconds, "s")
}

/// Formats an inductance in henries.
#[must_use]
pub fn format_inductance(henries: f64) -> String {
    format_si(henries, "H")
}

/// Formats a current in amperes.
#[must_use]
pub fn format_current(amps: f64) -> String {
    format_si(amps, "A")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resistor_values() {
        assert_eq!(format_resistance(1000.0), "1.00kΩ");
        assert_eq!(format_resistance(4700.0), "4.70kΩ");
        assert_eq!(format_resistance(470.0), "470Ω");
        assert_eq!(format_resistance(2_200_000.0), "2.20MΩ");
        assert_eq!(format_resistance(0.47), "470mΩ");
    }

    #[test]
    fn capacitor_values() {
        assert_eq!(format_capacitance(22e-9), "22.0nF");
        assert_eq!(format_capacitance(4.7e-6), "4.70µF");
        assert_eq!(format_capacitance(100e-12), "100pF");
    }

    #[test]
    fn time_values() {
        assert_eq!(format_time(1.0), "1.00s");
        assert_eq!(format_time(150e-6), "150µs");
        assert_eq!(format_time(2.5e-3), "2.50ms");
    }

    #[test]
    fn mantissa_carry_into_next_prefix() {
        // 999.96 rounds to 1000 at three significant figures.
        assert_eq!(format_resistance(999.96), "1.00kΩ");
    }

    #[test]
    fn scientific_fallback_above_mega() {
        assert_eq!(format_frequency(2.4e9), "2.40×10^9 Hz");
    }

    #[test]
    fn scientific_fallback_below_pico() {
        assert_eq!(format_capacitance(5e-14), "5.00×10^-14 F");
    }

    #[test]
    fn zero_is_rendered_without_prefix() {
        assert_eq!(format_si(0.0, "Ω"), "0Ω");
    }

    #[test]
    fn half_to_even_rounding() {
        // .5 ties on exactly representable mantissas round to the even digit.
        assert_eq!(format_mantissa(round_sig3(102.5)), "102");
        assert_eq!(format_mantissa(round_sig3(103.5)), "104");
    }
}
