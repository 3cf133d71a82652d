//! ASCII pinout diagrams.
//!
//! Each board has a fixed physical row order (a constant, since header
//! placement is a property of the PCB, not of the pin database), but every
//! row's label, function annotation and flag markers are derived from the
//! pin records. The renderer is deterministic and pure.

use std::fmt::Write;

use crate::gpio::board::{Board, ConflictFlag, Pin};
use crate::gpio::database;

/// One physical header position: a database pin or a fixed rail.
#[derive(Debug, Clone, Copy)]
enum Slot {
    /// A pin looked up in the database by number.
    Pin(u32),
    /// A power/reset/boot position with no pin record.
    Rail(&'static str),
}

use Slot::{Pin as P, Rail as R};

/// ESP32 DevKitC left header, top to bottom.
const ESP32_LEFT: &[Slot] = &[
    R("EN (RESET)"),
    P(36),
    P(39),
    P(34),
    P(35),
    P(32),
    P(33),
    P(25),
    P(26),
    P(27),
    P(14),
    P(12),
    R("GND"),
    P(13),
    P(9),
    P(10),
    P(11),
    R("VIN"),
];

/// ESP32 DevKitC right header, top to bottom.
const ESP32_RIGHT: &[Slot] = &[
    R("GND"),
    P(23),
    P(22),
    P(1),
    P(3),
    P(21),
    R("GND"),
    P(19),
    P(18),
    P(5),
    P(17),
    P(16),
    P(4),
    P(0),
    P(2),
    P(15),
    R("3V3"),
];

/// Blue Pill left header, top to bottom.
const STM32_LEFT: &[Slot] = &[
    R("VBAT"),
    P(32),
    P(33),
    P(34),
    P(0),
    P(1),
    P(2),
    P(3),
    P(4),
    P(5),
    P(6),
    P(7),
    P(16),
    P(17),
    P(26),
    P(27),
    R("NRST"),
    R("3V3"),
    R("GND"),
    R("GND"),
];

/// Blue Pill right header, top to bottom.
const STM32_RIGHT: &[Slot] = &[
    R("3V3"),
    R("GND"),
    R("5V"),
    P(25),
    P(24),
    P(23),
    P(22),
    P(21),
    P(20),
    P(19),
    P(15),
    P(12),
    P(11),
    P(10),
    P(9),
    P(8),
    P(31),
    P(30),
    P(29),
    P(28),
];

/// Renders the pinout diagram for a board.
#[must_use]
pub fn render(board: Board) -> String {
    match board {
        Board::Esp32 => two_column(board, "ESP32 DevKitC Pinout", ESP32_LEFT, ESP32_RIGHT),
        Board::ArduinoUno => uno(),
        Board::Stm32BluePill => two_column(
            board,
            "STM32F103C8T6 Blue Pill Pinout",
            STM32_LEFT,
            STM32_RIGHT,
        ),
    }
}

/// Title banner in double-line box drawing.
fn banner(title: &str) -> String {
    let width = 70;
    format!(
        "╔{line}╗\n║{title:^width$}║\n╚{line}╝\n",
        line = "═".repeat(width),
    )
}

/// Label text for a slot ("GPIO12", "GND", ...).
fn slot_label(board: Board, slot: Slot) -> String {
    match slot {
        Slot::Pin(number) => database::find_pin(board, number)
            .map_or_else(|| format!("pin {number}?"), |p| p.label.to_string()),
        Slot::Rail(name) => name.to_string(),
    }
}

/// Annotation text for a slot: leading function plus terse flag markers.
fn slot_annotation(board: Board, slot: Slot) -> String {
    let Slot::Pin(number) = slot else {
        return String::new();
    };
    let Some(pin) = database::find_pin(board, number) else {
        return String::new();
    };
    let mut annotation = format!("──{}", pin.functions[0]);
    for flag in pin.flags {
        let _ = write!(annotation, " {}", flag.terse());
    }
    annotation
}

/// Generic two-column layout: two boxed headers side by side, annotations
/// trailing each box, flag legend underneath.
fn two_column(board: Board, title: &str, left: &[Slot], right: &[Slot]) -> String {
    let mut out = banner(title);
    out.push_str("\n       Left Side                              Right Side\n");
    out.push_str("    ┌──────────────┐                      ┌──────────────┐\n");

    let rows = left.len().max(right.len());
    for i in 0..rows {
        let (left_label, left_annot) = cell(board, left.get(i));
        let (right_label, right_annot) = cell(board, right.get(i));
        let _ = writeln!(
            out,
            "    │ {left_label:<12} │{left_annot:<22}│ {right_label:<12} │{right_annot}",
        );
    }
    out.push_str("    └──────────────┘                      └──────────────┘\n");
    out.push_str(&legend(board));
    out
}

fn cell(board: Board, slot: Option<&Slot>) -> (String, String) {
    slot.map_or_else(
        || (String::new(), String::new()),
        |&s| (slot_label(board, s), slot_annotation(board, s)),
    )
}

/// The UNO's classic layout: digital header above, analog header beside
/// the power rail.
fn uno() -> String {
    let board = Board::ArduinoUno;
    let mut out = banner("Arduino UNO R3 Pinout");

    out.push_str("\n        Digital Pins (D0-D13)\n");
    out.push_str("    ┌──────────────────────────────────────────────┐\n");
    for pin in database::pins(board).iter().filter(|p| p.number <= 13) {
        let marker = if pin.pwm { "[~]" } else { "[ ]" };
        let mut annotation = format!("──{}", pin.functions[0]);
        for flag in pin.flags {
            let _ = write!(annotation, " {}", flag.terse());
        }
        let _ = writeln!(out, "    │ {marker} {:<9}{annotation:<31}│", pin.label);
    }
    out.push_str("    └──────────────────────────────────────────────┘\n");

    out.push_str("\n        Analog Pins                 Power\n");
    out.push_str("    ┌─────────────────────┐     ┌───────────┐\n");
    let rails = ["AREF", "GND", "RESET", "3.3V", "5V", "VIN"];
    let analog: Vec<&Pin> = database::pins(board)
        .iter()
        .filter(|p| p.number >= 14)
        .collect();
    for i in 0..analog.len().max(rails.len()) {
        let analog_cell = analog.get(i).map_or_else(String::new, |p| {
            format!("{:<4}──{}", p.label, p.functions[0])
        });
        let rail = rails.get(i).copied().unwrap_or("");
        let _ = writeln!(out, "    │ {analog_cell:<20}│     │ {rail:<10}│");
    }
    out.push_str("    └─────────────────────┘     └───────────┘\n");
    out.push_str("\n[~] = PWM capable\n");
    out.push_str(&legend(board));
    out
}

/// Flag legend derived from whatever flags the board's pins carry.
fn legend(board: Board) -> String {
    let mut out = String::new();
    let flags = [
        ConflictFlag::Strapping,
        ConflictFlag::FlashReserved,
        ConflictFlag::InputOnly,
        ConflictFlag::Swd,
        ConflictFlag::Usb,
        ConflictFlag::Uart0,
        ConflictFlag::Adc2Wifi,
    ];
    for flag in flags {
        let labels: Vec<&str> = database::pins(board)
            .iter()
            .filter(|p| p.has_flag(flag))
            .map(|p| p.label)
            .collect();
        if !labels.is_empty() {
            let _ = writeln!(out, "⚠️  {}: {}", flag.terse(), labels.join(", "));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_board_renders() {
        for board in Board::ALL {
            let text = render(board);
            assert!(text.contains('╔'));
            assert!(text.lines().count() > 15, "{board}: diagram too small");
        }
    }

    #[test]
    fn esp32_diagram_marks_strapping_and_flash() {
        let text = render(Board::Esp32);
        assert!(text.contains("⚠strap"));
        assert!(text.contains("⚠flash"));
        assert!(text.contains("GPIO36"));
        assert!(text.contains("GPIO23"));
    }

    #[test]
    fn uno_diagram_marks_pwm() {
        let text = render(Board::ArduinoUno);
        assert!(text.contains("[~] D3"));
        assert!(text.contains("[ ] D4"));
        assert!(text.contains("A5"));
    }

    #[test]
    fn stm32_diagram_marks_swd() {
        let text = render(Board::Stm32BluePill);
        assert!(text.contains("PA13"));
        assert!(text.contains("⚠swd"));
        assert!(text.contains("VBAT"));
    }

    #[test]
    fn diagram_slots_reference_real_pins() {
        for (board, columns) in [
            (Board::Esp32, [ESP32_LEFT, ESP32_RIGHT]),
            (Board::Stm32BluePill, [STM32_LEFT, STM32_RIGHT]),
        ] {
            for slot in columns.into_iter().flatten() {
                if let Slot::Pin(number) = slot {
                    assert!(
                        database::find_pin(board, *number).is_some(),
                        "{board}: diagram references unknown pin {number}"
                    );
                }
            }
        }
    }
}
