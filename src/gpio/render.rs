//! Markdown rendering for GPIO engine results.

use crate::gpio::board::{Board, Pin, SpiRole};
use crate::gpio::conflict::{ConflictReport, Severity};
use crate::gpio::discover::{AdcPin, I2cBus, PwmPin, SpiBus};

/// Renders the full record of one pin.
#[must_use]
pub fn render_pin_info(board: Board, pin: &Pin) -> String {
    let mut out = format!("📌 {board} Pin {}\n\n", pin.number);
    out.push_str(&format!("**Name:** {}\n\n", pin.label));
    out.push_str(&format!(
        "**Capabilities:** {}\n\n",
        pin.capability_names().join(", ")
    ));
    out.push_str("**Alternative Functions:**\n");
    for function in pin.functions {
        out.push_str(&format!("  • {function}\n"));
    }

    let peripherals = peripheral_summary(pin);
    if !peripherals.is_empty() {
        out.push_str(&format!("\n**Peripherals:** {}\n", peripherals.join(", ")));
    }

    if !pin.flags.is_empty() {
        out.push_str("\n⚠️ **Warnings:**\n");
        for flag in pin.flags {
            out.push_str(&format!("  • {}\n", flag.describe()));
        }
    }

    out.push_str(&format!("\n**Notes:** {}", pin.notes));
    out
}

/// Bus/peripheral memberships of a pin, for the one-line summary.
fn peripheral_summary(pin: &Pin) -> Vec<String> {
    let mut list = Vec::new();
    if let Some((port, role)) = pin.uart {
        list.push(format!("{port} {}", role.label()));
    }
    if let Some((bus, role)) = pin.spi {
        list.push(format!("{bus} {}", role.label()));
    }
    if let Some((bus, role)) = pin.i2c {
        list.push(format!("{bus} {}", role.label()));
    }
    if let Some(channel) = pin.adc_function() {
        list.push(channel.to_string());
    }
    list
}

/// Terse flag markers appended to list rows, e.g. " ⚠strap ⚠uart0".
fn flag_markers(pin: &Pin) -> String {
    pin.flags
        .iter()
        .map(|f| format!(" {}", f.terse()))
        .collect()
}

/// Renders the PWM discovery list.
#[must_use]
pub fn render_pwm_pins(board: Board, pins: &[PwmPin]) -> String {
    let mut out = format!("⚡ PWM-Capable Pins for {board}\n\n");
    out.push_str(&format!(
        "Found **{} pins** with PWM support:\n\n",
        pins.len()
    ));
    for entry in pins {
        let timer = entry.timer.map(|t| format!(" ({t})")).unwrap_or_default();
        out.push_str(&format!(
            "  • Pin {:>2} ({:<8}){timer}{}\n",
            entry.pin.number,
            entry.pin.label,
            flag_markers(entry.pin),
        ));
    }
    out.push_str("\n💡 **Tip:** PWM frequency and resolution depend on the timer configuration.");
    out
}

/// Renders the ADC discovery list.
///
/// On the ESP32 the list splits by ADC unit, since ADC2 is unusable while
/// WiFi is active.
#[must_use]
pub fn render_adc_pins(board: Board, pins: &[AdcPin]) -> String {
    let mut out = format!("📊 ADC-Capable Pins for {board}\n\n");
    out.push_str(&format!("Found **{} pins** with ADC support:\n\n", pins.len()));

    if board == Board::Esp32 {
        out.push_str("**ADC1 (WiFi-safe):**\n");
        for entry in pins.iter().filter(|p| p.in_unit("ADC1")) {
            out.push_str(&adc_row(entry));
        }
        out.push_str("\n**ADC2 (not usable while WiFi is active):**\n");
        for entry in pins.iter().filter(|p| p.in_unit("ADC2")) {
            out.push_str(&adc_row(entry));
        }
        out.push_str("\n⚠️ **ESP32 notes:**\n");
        out.push_str("  • ADC1 channels keep working with WiFi enabled\n");
        out.push_str("  • ADC2 channels cannot be read while WiFi is active\n");
        out.push_str("  • GPIO34-39 are input-only (no internal pull resistors)");
    } else {
        for entry in pins {
            out.push_str(&adc_row(entry));
        }
        if board == Board::ArduinoUno {
            out.push_str("\n💡 **Tip:** Analog pins A0-A5 can also be used as digital GPIO (D14-D19).");
        }
    }
    out
}

fn adc_row(entry: &AdcPin) -> String {
    let channel = entry.channel.map(|c| format!(" - {c}")).unwrap_or_default();
    format!(
        "  • Pin {:>2} ({:<8}){channel}{}\n",
        entry.pin.number,
        entry.pin.label,
        flag_markers(entry.pin),
    )
}

/// Renders the I²C discovery list, grouped by bus.
#[must_use]
pub fn render_i2c_pins(board: Board, buses: &[I2cBus]) -> String {
    let mut out = format!("🔗 I2C-Capable Pins for {board}\n\n");
    for bus in buses {
        out.push_str(&format!("**{}:**\n", bus.bus));
        out.push_str("  SDA (data):\n");
        for pin in &bus.sda {
            out.push_str(&format!(
                "    • Pin {:>2} ({}){}\n",
                pin.number,
                pin.label,
                flag_markers(pin)
            ));
        }
        out.push_str("  SCL (clock):\n");
        for pin in &bus.scl {
            out.push_str(&format!(
                "    • Pin {:>2} ({}){}\n",
                pin.number,
                pin.label,
                flag_markers(pin)
            ));
        }
        out.push('\n');
    }
    out.push_str("💡 **Default I2C Configuration:**\n");
    out.push_str(default_i2c_note(board));
    out
}

const fn default_i2c_note(board: Board) -> &'static str {
    match board {
        Board::Esp32 => "  • SDA: GPIO21, SCL: GPIO22 (remappable to most pins)",
        Board::ArduinoUno => "  • SDA: A4 (pin 18), SCL: A5 (pin 19)",
        Board::Stm32BluePill => "  • I2C1: SDA PB7, SCL PB6\n  • I2C2: SDA PB11, SCL PB10",
    }
}

/// Renders the SPI discovery list, grouped by bus.
#[must_use]
pub fn render_spi_pins(board: Board, buses: &[SpiBus]) -> String {
    let mut out = format!("⚡ SPI-Capable Pins for {board}\n\n");
    for bus in buses {
        out.push_str(&format!("**{}:**\n", bus.bus));
        for role in [SpiRole::Mosi, SpiRole::Miso, SpiRole::Sck, SpiRole::Cs] {
            for pin in bus.role(role) {
                out.push_str(&format!(
                    "  • {:<4} Pin {:>2} ({}){}\n",
                    role.label(),
                    pin.number,
                    pin.label,
                    flag_markers(pin)
                ));
            }
        }
        out.push('\n');
    }
    out.push_str("💡 **Default SPI Configuration:**\n");
    out.push_str(default_spi_note(board));
    out
}

const fn default_spi_note(board: Board) -> &'static str {
    match board {
        Board::Esp32 => {
            "  • VSPI: MOSI 23, MISO 19, SCK 18, SS 5\n  • HSPI: MOSI 13, MISO 12, SCK 14, SS 15"
        }
        Board::ArduinoUno => "  • MOSI D11, MISO D12, SCK D13, SS D10",
        Board::Stm32BluePill => {
            "  • SPI1: MOSI PA7, MISO PA6, SCK PA5, NSS PA4\n  • SPI2: MOSI PB15, MISO PB14, SCK PB13, NSS PB12"
        }
    }
}

/// Renders a conflict analysis report.
#[must_use]
pub fn render_conflict(report: &ConflictReport) -> String {
    let mut out = format!("🔍 Pin Conflict Analysis for {}\n\n", report.board);
    let requested: Vec<String> = report.pins.iter().map(|p| p.number.to_string()).collect();
    out.push_str(&format!("**Checking pins:** {}\n\n", requested.join(", ")));

    for (severity, heading) in [
        (Severity::Error, "✗ **ERRORS (Must Fix):**"),
        (Severity::Warning, "⚠️ **WARNINGS (Review Carefully):**"),
        (Severity::Info, "ℹ️ **INFORMATION:**"),
    ] {
        let mut lines = Vec::new();
        for pin in &report.pins {
            for advisory in &pin.advisories {
                if advisory.severity == severity {
                    let label = pin.label.map_or_else(
                        || format!("pin {}", pin.number),
                        ToString::to_string,
                    );
                    lines.push(format!("  • {label}: {}", advisory.message));
                }
            }
        }
        for advisory in &report.global {
            if advisory.severity == severity {
                lines.push(format!("  • {}", advisory.message));
            }
        }
        if !lines.is_empty() {
            out.push_str(heading);
            out.push('\n');
            for line in lines {
                out.push_str(&line);
                out.push('\n');
            }
            out.push('\n');
        }
    }

    if !report.has_errors() && !report.has_warnings() {
        out.push_str("✅ **No conflicts detected!** Pin selection looks good.\n\n");
    }

    if !report.alternatives.is_empty() {
        let labels: Vec<&str> = report.alternatives.iter().map(|p| p.label).collect();
        out.push_str(&format!("**Safe alternatives:** {}", labels.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::{conflict, database, discover};

    #[test]
    fn pin_info_mentions_swd_for_pa13() {
        let pin = database::find_pin(Board::Stm32BluePill, 13).unwrap();
        let text = render_pin_info(Board::Stm32BluePill, pin);
        assert!(text.contains("SWDIO"));
        assert!(text.contains("disables debugging"));
        assert!(text.contains("PA13"));
    }

    #[test]
    fn adc_report_sections_esp32() {
        let pins = discover::adc_pins(Board::Esp32);
        let text = render_adc_pins(Board::Esp32, &pins);
        let adc1 = text.find("ADC1 (WiFi-safe)").unwrap();
        let adc2 = text.find("ADC2 (not usable while WiFi is active)").unwrap();
        assert!(adc1 < adc2);
        assert!(text.contains("GPIO32"));
        assert!(text.contains("GPIO39"));
    }

    #[test]
    fn spi_report_distinguishes_buses() {
        let buses = discover::spi_buses(Board::Esp32);
        let text = render_spi_pins(Board::Esp32, &buses);
        assert!(text.contains("**VSPI:**"));
        assert!(text.contains("**HSPI:**"));
    }

    #[test]
    fn conflict_report_sections() {
        let report = conflict::check(Board::Esp32, &[0, 2, 6, 12]);
        let text = render_conflict(&report);
        assert!(text.contains("✗ **ERRORS"));
        assert!(text.contains("⚠️ **WARNINGS"));
        assert!(text.contains("**Safe alternatives:**"));
    }

    #[test]
    fn clean_report_says_so() {
        let report = conflict::check(Board::Esp32, &[16, 17]);
        let text = render_conflict(&report);
        assert!(text.contains("No conflicts detected"));
    }
}
