//! Markdown rendering for capacitor kernel results.

use crate::capacitor::formulas::{
    FilterSuggestion, FilterType, Reactance, Resonance, TimeConstant,
};
use crate::error::ToolError;
use crate::units::{
    format_capacitance, format_current, format_frequency, format_inductance, format_resistance,
    format_si, format_time,
};

/// Renders a capacitive-reactance report.
#[must_use]
pub fn render_reactance(result: &Reactance) -> String {
    let xc = format_resistance(result.reactance);
    let mut out = String::from("⚡ Capacitive Reactance\n\n**Input:**\n");
    out.push_str(&format!(
        "  • Capacitance: {}\n",
        format_capacitance(result.capacitance)
    ));
    out.push_str(&format!(
        "  • Frequency: {}\n\n",
        format_frequency(result.frequency)
    ));
    out.push_str("**Result:**\n");
    out.push_str(&format!("  • Reactance (Xc) = **{xc}**\n"));
    out.push_str(&format!(
        "  • Current at {}ac = {}\n\n",
        format_si(result.voltage, "V"),
        format_current(result.current)
    ));
    out.push_str("**Formula:** Xc = 1 / (2π × f × C)\n\n");
    out.push_str(&format!(
        "**Insight:** At this frequency the capacitor behaves like a {xc} resistor for AC signals."
    ));
    out
}

/// Renders an RC time-constant report with the charging timeline.
#[must_use]
pub fn render_time_constant(result: &TimeConstant) -> String {
    let mut out = String::from("⏱️ RC Time Constant\n\n**Input:**\n");
    out.push_str(&format!(
        "  • Resistance: {}\n",
        format_resistance(result.resistance)
    ));
    out.push_str(&format!(
        "  • Capacitance: {}\n\n",
        format_capacitance(result.capacitance)
    ));
    out.push_str(&format!(
        "**Time Constant:**\n  • τ (tau) = **{}**\n\n",
        format_time(result.tau)
    ));
    out.push_str("**Charging Timeline:**\n");
    for &(n, pct) in &result.milestones {
        out.push_str(&format!(
            "  • {n}τ ({}): {pct:.1}% charged\n",
            format_time(f64::from(n) * result.tau)
        ));
    }
    out.push_str(&format!(
        "\n**As Low-Pass Filter:**\n  • Cutoff frequency (-3dB): {}\n\n",
        format_frequency(result.cutoff)
    ));
    out.push_str("**Formula:** τ = R × C");
    out
}

/// Renders an LC resonance report.
#[must_use]
pub fn render_resonance(result: &Resonance) -> String {
    let mut out = String::from("🔊 LC Resonant Frequency\n\n**Input:**\n");
    out.push_str(&format!(
        "  • Inductance: {}\n",
        format_inductance(result.inductance)
    ));
    out.push_str(&format!(
        "  • Capacitance: {}\n\n",
        format_capacitance(result.capacitance)
    ));
    out.push_str(&format!(
        "**Resonant Frequency:**\n  • f₀ = **{}** ({} band)\n\n",
        format_frequency(result.frequency),
        result.band
    ));
    out.push_str("**At Resonance:**\n");
    out.push_str(&format!(
        "  • XL = Xc = {}\n",
        format_resistance(result.reactance)
    ));
    out.push_str(&format!(
        "  • Characteristic Impedance (Z₀) = {}\n\n",
        format_resistance(result.characteristic_impedance)
    ));
    out.push_str("**Formula:** f₀ = 1 / (2π√(LC))");
    out
}

/// Renders a filter capacitor suggestion, including the circuit sketch.
#[must_use]
pub fn render_filter(result: &FilterSuggestion) -> String {
    let mut out = String::from("🎛️ RC Filter Capacitor Selector\n\n**Design Requirements:**\n");
    out.push_str(&format!("  • Filter Type: {}\n", result.filter));
    out.push_str(&format!(
        "  • Cutoff Frequency: {}\n",
        format_frequency(result.cutoff)
    ));
    out.push_str(&format!(
        "  • Resistance: {}\n\n",
        format_resistance(result.resistance)
    ));
    out.push_str("**Calculated Capacitance:**\n");
    out.push_str(&format!(
        "  • Ideal: {} ({:.3e}F)\n",
        format_capacitance(result.ideal),
        result.ideal
    ));
    out.push_str(&format!(
        "  • Reactance at fc: {}\n",
        format_resistance(result.resistance)
    ));
    out.push_str(&format!(
        "  • Time Constant: {}\n",
        format_time(result.resistance * result.ideal)
    ));

    if result.options.is_empty() {
        let reason = ToolError::SnapOutOfRange {
            value: result.ideal,
        };
        out.push_str(&format!(
            "\n✗ No standard value: {reason}. The ideal value above is still valid for a custom part.\n"
        ));
    } else {
        out.push_str("\n**Recommended Standard Values (E12):**\n");
        for option in &result.options {
            let marker = if option.best { " ← Closest" } else { "" };
            out.push_str(&format!(
                "  • {c:>8} → fc = {fc} ({err:+.1}%){marker}\n",
                c = format_capacitance(option.capacitance),
                fc = format_frequency(option.actual_cutoff),
                err = option.error_percent,
            ));
        }
    }

    out.push_str(circuit_sketch(result.filter));
    out.push_str("\n\n**Formula:** C = 1 / (2π × R × fc)");
    out
}

/// ASCII sketch of the filter topology.
const fn circuit_sketch(filter: FilterType) -> &'static str {
    match filter {
        FilterType::LowPass => {
            r"
**Circuit (Low-Pass):**
```
    R
Vin ───/\/\/──┬─── Vout
              │
              ┴ C
              │
             GND
```
Passes: frequencies below fc
Attenuates: frequencies above fc"
        }
        FilterType::HighPass => {
            r"
**Circuit (High-Pass):**
```
    C
Vin ───||────┬─── Vout
             │
             R
             │
            GND
```
Passes: frequencies above fc
Attenuates: frequencies below fc"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capacitor::formulas;

    #[test]
    fn reactance_report_has_headline_and_units() {
        let r = formulas::reactance(1e-6, 1000.0, None).unwrap();
        let text = render_reactance(&r);
        assert!(text.starts_with("⚡"));
        assert!(text.contains("159Ω"));
        assert!(text.contains("1.00V"));
    }

    #[test]
    fn time_constant_report_lists_five_milestones() {
        let t = formulas::time_constant(10_000.0, 1e-4).unwrap();
        let text = render_time_constant(&t);
        assert!(text.contains("1.00s"));
        assert!(text.contains("63.2% charged"));
        assert!(text.contains("99.3% charged"));
    }

    #[test]
    fn filter_report_marks_closest() {
        let s =
            formulas::suggest_filter_capacitor(10_000.0, 1000.0, FilterType::LowPass).unwrap();
        let text = render_filter(&s);
        assert!(text.contains("← Closest"));
        assert!(text.contains("15.0nF"));
        assert!(text.contains("Low Pass"));
    }

    #[test]
    fn filter_report_flags_unsnappable() {
        let s = formulas::suggest_filter_capacitor(1.0, 1e-6, FilterType::LowPass).unwrap();
        let text = render_filter(&s);
        assert!(text.contains("✗ No standard value"));
    }
}
