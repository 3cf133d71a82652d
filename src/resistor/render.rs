//! Markdown rendering for resistor codec results.
//!
//! Presentation only. The emoji headlines are decorative and carry no
//! semantics; all values come pre-computed from [`crate::resistor::codec`].

use crate::resistor::codec::{Decoded, Encoded, StandardMatch};
use crate::units::format_resistance;

/// Renders a decoded band sequence.
#[must_use]
pub fn render_decoded(decoded: &Decoded) -> String {
    let low = decoded.resistance * (1.0 - decoded.tolerance_percent / 100.0);
    let high = decoded.resistance * (1.0 + decoded.tolerance_percent / 100.0);

    format!(
        "🔴 Resistor Decoded\n\n\
         **Color Bands:** {bands}\n\
         **Resistance:** {value} ±{tol}%\n\
         **Range:** {low} to {high}\n\
         **Formula:** {digits} × {multiplier} = {value}",
        bands = decoded.bands.join(", "),
        value = format_resistance(decoded.resistance),
        tol = decoded.tolerance_percent,
        low = format_resistance(low),
        high = format_resistance(high),
        digits = decoded.significant,
        multiplier = format_resistance(decoded.multiplier),
    )
}

/// Renders an encoded color code.
#[must_use]
pub fn render_encoded(encoded: &Encoded) -> String {
    let style = if encoded.bands.len() == 5 {
        "5-band"
    } else {
        "4-band"
    };

    let mut out = format!(
        "🎨 Resistor Color Code ({style})\n\n\
         **Target:** {target} ±{tol}%\n\
         **Encoded:** {value} (error {error:+.2}%)\n\n\
         **Color Bands:**\n",
        target = format_resistance(encoded.target),
        tol = encoded.tolerance_percent,
        value = format_resistance(encoded.encoded),
        error = encoded.error_percent,
    );
    for (index, band) in encoded.bands.iter().enumerate() {
        out.push_str(&format!(
            "  Band {n} ({role}): **{color}** ({detail})\n",
            n = index + 1,
            role = band.role,
            color = band.color,
            detail = band.detail,
        ));
    }
    out
}

/// Renders a standard-value search result.
#[must_use]
pub fn render_standard(found: &StandardMatch) -> String {
    let mut out = format!(
        "📊 Standard Resistor Finder ({series})\n\n\
         **Target:** {target}\n\
         **Best Match:** {best} (±{tol}% tolerance)\n\
         **Difference:** {error:+.2}%\n\n\
         **Nearby Standard Values:**\n",
        series = found.series,
        target = format_resistance(found.target),
        best = format_resistance(found.best),
        tol = found.series.tolerance_percent(),
        error = found.error_percent,
    );

    for &(value, error) in &found.nearby {
        let marker = if (value - found.best).abs() < 1e-12 * found.best.abs() {
            " ← Best"
        } else {
            ""
        };
        out.push_str(&format!(
            "  • {value:>8} ({error:+.2}%){marker}\n",
            value = format_resistance(value),
        ));
    }

    let code: Vec<&str> = found
        .color_code
        .bands
        .iter()
        .map(|b| b.color.as_str())
        .collect();
    out.push_str(&format!(
        "\n**Color Code for {best}:**\n  {code}",
        best = format_resistance(found.best),
        code = code.join(", "),
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resistor::codec;
    use crate::series::ESeries;

    #[test]
    fn decoded_report_contains_value_and_formula() {
        let d = codec::decode(&["brown", "black", "red", "gold"]).unwrap();
        let text = render_decoded(&d);
        assert!(text.contains("1.00kΩ"));
        assert!(text.contains("±5%"));
        assert!(text.contains("10 × 100Ω"));
    }

    #[test]
    fn encoded_report_lists_bands_in_order() {
        let e = codec::encode(4700.0, 5.0, false).unwrap();
        let text = render_encoded(&e);
        let yellow = text.find("Yellow").unwrap();
        let violet = text.find("Violet").unwrap();
        let red = text.find("Red").unwrap();
        let gold = text.find("Gold").unwrap();
        assert!(yellow < violet && violet < red && red < gold);
    }

    #[test]
    fn standard_report_marks_best() {
        let m = codec::find_standard(3300.0, ESeries::E12).unwrap();
        let text = render_standard(&m);
        assert!(text.contains("← Best"));
        assert!(text.contains("+0.00%"));
    }
}
