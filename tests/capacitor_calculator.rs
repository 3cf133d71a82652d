//! Integration tests for the capacitor calculation kernel.

use std::f64::consts::PI;

use electronics_mcp::capacitor::{self, render, FilterType, FrequencyBand};
use electronics_mcp::error::ToolError;
use electronics_mcp::units;

// =============================================================================
// Capacitive reactance
// =============================================================================

#[test]
fn reactance_reference_points() {
    // 1µF at 1kHz and 100nF at 10kHz both land near 159Ω.
    let a = capacitor::reactance(1e-6, 1e3, None).unwrap();
    let b = capacitor::reactance(100e-9, 10e3, None).unwrap();
    assert!((a.reactance - 159.15).abs() < 0.01);
    assert!((b.reactance - 159.15).abs() < 0.01);
}

#[test]
fn reactance_formula_symmetry() {
    // Xc × 2πfC ≈ 1 within 1e-9 relative error, across magnitudes.
    for (c, f) in [
        (1e-12, 1e9),
        (47e-9, 440.0),
        (1e-6, 50.0),
        (2200e-6, 0.5),
    ] {
        let result = capacitor::reactance(c, f, None).unwrap();
        let product = result.reactance * 2.0 * PI * f * c;
        assert!(
            (product - 1.0).abs() < 1e-9,
            "symmetry broken for C={c}, f={f}"
        );
    }
}

#[test]
fn reactance_current_uses_supplied_voltage() {
    let result = capacitor::reactance(1e-6, 1e3, Some(3.3)).unwrap();
    assert!((result.current * result.reactance - 3.3).abs() < 1e-9);

    let text = render::render_reactance(&result);
    assert!(text.contains("3.30V"));
}

#[test]
fn reactance_validates_all_inputs() {
    for (c, f, v) in [(0.0, 1e3, None), (1e-6, 0.0, None), (1e-6, 1e3, Some(-1.0))] {
        assert!(matches!(
            capacitor::reactance(c, f, v).unwrap_err(),
            ToolError::NonPositiveInput { .. }
        ));
    }
}

// =============================================================================
// RC time constant
// =============================================================================

#[test]
fn rc_scenario_10k_100uf() {
    let result = capacitor::time_constant(10_000.0, 1e-4).unwrap();
    assert!((result.tau - 1.0).abs() < 1e-12);

    let text = render::render_time_constant(&result);
    assert!(text.contains("1.00s"));
    assert!(text.contains("63.2% charged"));
}

#[test]
fn rc_milestones_follow_exponential_charge() {
    let result = capacitor::time_constant(1_000.0, 1e-6).unwrap();
    for &(n, pct) in &result.milestones {
        let expected = (1.0 - (-f64::from(n)).exp()) * 100.0;
        assert!((pct - expected).abs() < 1e-9);
    }
    assert_eq!(result.milestones.first().map(|m| m.0), Some(1));
    assert_eq!(result.milestones.last().map(|m| m.0), Some(5));
}

#[test]
fn rc_cutoff_matches_tau() {
    let result = capacitor::time_constant(4_700.0, 22e-9).unwrap();
    assert!((result.cutoff - 1.0 / (2.0 * PI * result.tau)).abs() < 1e-9);
}

// =============================================================================
// LC resonance
// =============================================================================

#[test]
fn resonance_reference_points() {
    // 1mH + 1nF ≈ 159kHz; 100µH + 100pF ≈ 1.59MHz.
    let a = capacitor::resonant_frequency(1e-3, 1e-9).unwrap();
    assert!((a.frequency - 159_155.0).abs() < 10.0);
    assert_eq!(a.band, FrequencyBand::RfLow);

    let b = capacitor::resonant_frequency(100e-6, 100e-12).unwrap();
    assert!((b.frequency - 1.5915e6).abs() < 1e3);
}

#[test]
fn resonance_band_categorisation() {
    // 1H + 100µF → ~16Hz: audio.
    let low = capacitor::resonant_frequency(1.0, 1e-4).unwrap();
    assert_eq!(low.band, FrequencyBand::Audio);

    // 100nH + 1pF → ~503MHz: upper RF.
    let high = capacitor::resonant_frequency(100e-9, 1e-12).unwrap();
    assert_eq!(high.band, FrequencyBand::RfHigh);
}

#[test]
fn resonance_reactances_cancel() {
    let result = capacitor::resonant_frequency(10e-3, 47e-9).unwrap();
    let xl = 2.0 * PI * result.frequency * 10e-3;
    let xc = 1.0 / (2.0 * PI * result.frequency * 47e-9);
    assert!((xl - xc).abs() / xc < 1e-9);
    assert!((result.reactance - xl).abs() / xl < 1e-9);
}

// =============================================================================
// Filter capacitor suggestion
// =============================================================================

#[test]
fn filter_scenario_10k_1khz() {
    let result =
        capacitor::suggest_filter_capacitor(10_000.0, 1_000.0, FilterType::LowPass).unwrap();

    // Ideal 15.9nF snaps to 15nF; actual cutoff ≈ 1061Hz, error < 10%.
    let best = result.best().unwrap();
    assert!((best.capacitance - 15e-9).abs() < 1e-12);
    assert!((best.actual_cutoff - 1061.0).abs() < 1.0);
    assert!(best.error_percent.abs() < 10.0);
}

#[test]
fn filter_snap_is_always_e12_times_decade() {
    let e12 = [1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];
    for (r, fc) in [(1_000.0, 100.0), (22_000.0, 2_500.0), (470.0, 48_000.0)] {
        let result = capacitor::suggest_filter_capacitor(r, fc, FilterType::LowPass).unwrap();
        for option in &result.options {
            let mantissa = option.capacitance / 10f64.powf(option.capacitance.log10().floor());
            assert!(
                e12.iter().any(|&m| (m - mantissa).abs() < 1e-6),
                "{} is not on the E12 grid",
                option.capacitance
            );
            // The reported cutoff is exactly 1/(2πRC).
            let expected = 1.0 / (2.0 * PI * r * option.capacitance);
            assert!((option.actual_cutoff - expected).abs() < 1e-9 * expected);
        }
    }
}

#[test]
fn filter_unsnappable_still_reports_ideal() {
    let result = capacitor::suggest_filter_capacitor(1.0, 1e-6, FilterType::LowPass).unwrap();
    assert!(result.options.is_empty());
    assert!(result.ideal > 0.0);

    let text = render::render_filter(&result);
    assert!(text.contains("✗ No standard value"));
}

#[test]
fn filter_high_pass_renders_series_capacitor() {
    let result =
        capacitor::suggest_filter_capacitor(10_000.0, 1_000.0, FilterType::HighPass).unwrap();
    let text = render::render_filter(&result);
    assert!(text.contains("High Pass"));
    assert!(text.contains("Circuit (High-Pass)"));
}

// =============================================================================
// SI formatting semantics
// =============================================================================

#[test]
fn formatting_examples_from_reports() {
    assert_eq!(units::format_resistance(4700.0), "4.70kΩ");
    assert_eq!(units::format_time(150e-6), "150µs");
    assert_eq!(units::format_capacitance(22e-9), "22.0nF");
    assert_eq!(units::format_frequency(1061.0), "1.06kHz");
}

#[test]
fn formatting_mantissa_always_in_range() {
    // Spot-check across 18 decades that the rendered mantissa is in [1, 1000).
    for exp in -12..6 {
        let value = 3.9 * 10f64.powi(exp);
        let text = units::format_si(value, "F");
        let digits: String = text
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let mantissa: f64 = digits.parse().unwrap();
        assert!((1.0..1000.0).contains(&mantissa), "{text} out of range");
    }
}
