//! Pin conflict detection.
//!
//! Given the set of pins a user intends to drive simultaneously, produce a
//! structured report at three severities:
//!
//! - **ERROR**: the selection cannot work - flash-reserved pins, unknown
//!   pin numbers, or two pins claiming the same exclusive peripheral
//!   function (e.g. `USART1_TX` on both PA9 and PB6).
//! - **WARNING**: the selection works but carries a trap - strapping pins,
//!   SWD/USB pins, UART0 pins, or the board-global ESP32 ADC2⇄WiFi
//!   exclusion.
//! - **INFO**: worth knowing - input-only pins, partially selected buses.
//!
//! The report also offers up to ten unused, unflagged pins as safe
//! alternatives.

use std::collections::BTreeMap;

use crate::error::ToolError;
use crate::gpio::board::{Board, ConflictFlag, Pin};
use crate::gpio::database;

/// Advisory severity, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// The selection cannot work as intended.
    Error,
    /// The selection carries a risk the user must review.
    Warning,
    /// Context that may matter.
    Info,
}

/// One finding of the conflict engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// How severe the finding is.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl Advisory {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }
}

/// Findings for one requested pin.
#[derive(Debug, Clone)]
pub struct PinReport {
    /// The requested pin number.
    pub number: u32,
    /// The pin's label, when the pin exists.
    pub label: Option<&'static str>,
    /// Findings attached to this pin.
    pub advisories: Vec<Advisory>,
}

/// The full conflict analysis for a pin set.
#[derive(Debug, Clone)]
pub struct ConflictReport {
    /// The board analysed.
    pub board: Board,
    /// Per-pin findings, ascending by pin number, duplicates collapsed.
    pub pins: Vec<PinReport>,
    /// Cross-pin findings (shared functions, bus advice, ADC2⇄WiFi).
    pub global: Vec<Advisory>,
    /// Unused pins with no conflict flags, ascending, at most ten.
    pub alternatives: Vec<&'static Pin>,
}

impl ConflictReport {
    /// Whether any finding is ERROR severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.all_advisories().any(|a| a.severity == Severity::Error)
    }

    /// Whether any finding is WARNING severity.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.all_advisories()
            .any(|a| a.severity == Severity::Warning)
    }

    fn all_advisories(&self) -> impl Iterator<Item = &Advisory> {
        self.pins
            .iter()
            .flat_map(|p| p.advisories.iter())
            .chain(self.global.iter())
    }
}

/// Maximum number of safe alternatives offered.
const MAX_ALTERNATIVES: usize = 10;

/// Analyses a pin set for conflicts.
///
/// Never fails: unknown pin numbers become ERROR findings inside the
/// report rather than tool errors, so one bad entry does not mask the
/// analysis of the rest.
#[must_use]
pub fn check(board: Board, pin_numbers: &[u32]) -> ConflictReport {
    let mut requested: Vec<u32> = pin_numbers.to_vec();
    requested.sort_unstable();
    requested.dedup();

    let mut pins = Vec::with_capacity(requested.len());
    let mut known: Vec<&'static Pin> = Vec::new();

    for &number in &requested {
        match database::find_pin(board, number) {
            Some(pin) => {
                known.push(pin);
                pins.push(PinReport {
                    number,
                    label: Some(pin.label),
                    advisories: pin_advisories(pin),
                });
            }
            None => pins.push(PinReport {
                number,
                label: None,
                advisories: vec![Advisory::error(
                    ToolError::UnknownPin {
                        board: board.name(),
                        pin: number,
                    }
                    .to_string(),
                )],
            }),
        }
    }

    let mut global = Vec::new();
    global.extend(exclusive_function_conflicts(&known));
    global.extend(board_rules(board, &known));
    global.extend(bus_completeness(&known));

    ConflictReport {
        board,
        pins,
        global,
        alternatives: safe_alternatives(board, &requested),
    }
}

/// Ensures a pin is electrically usable at all.
///
/// # Errors
///
/// `FlashReserved` for pins wired to the on-module SPI flash.
pub fn check_usable(pin: &'static Pin) -> Result<(), ToolError> {
    if pin.has_flag(ConflictFlag::FlashReserved) {
        return Err(ToolError::FlashReserved {
            label: pin.label,
            pin: pin.number,
        });
    }
    Ok(())
}

/// Flag-driven findings local to one pin.
fn pin_advisories(pin: &'static Pin) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if let Err(reason) = check_usable(pin) {
        advisories.push(Advisory::error(reason.to_string()));
    }

    for &flag in pin.flags {
        let advisory = match flag {
            // Reported through check_usable above.
            ConflictFlag::FlashReserved => continue,
            // Board-global rule, reported once in the global section.
            ConflictFlag::Adc2Wifi => continue,
            ConflictFlag::Strapping | ConflictFlag::Swd | ConflictFlag::Usb
            | ConflictFlag::Uart0 => Advisory::warning(flag.describe()),
            ConflictFlag::InputOnly => Advisory::info(flag.describe()),
        };
        advisories.push(advisory);
    }

    advisories
}

/// Two selected pins claiming the same exclusive alternate function.
fn exclusive_function_conflicts(known: &[&'static Pin]) -> Vec<Advisory> {
    let mut owners: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
    for pin in known {
        for &function in pin.functions {
            owners.entry(function).or_default().push(pin.label);
        }
    }
    owners
        .into_iter()
        .filter(|(_, labels)| labels.len() > 1)
        .map(|(function, labels)| {
            Advisory::error(format!(
                "{} both provide {function} - only one pin can own that function at a time",
                labels.join(" and "),
            ))
        })
        .collect()
}

/// Board-specific cross-pin rules.
fn board_rules(board: Board, known: &[&'static Pin]) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    match board {
        Board::Esp32 => {
            // ADC2 shares hardware with the WiFi radio; the rule is about
            // the whole selection, not a single pin.
            let adc2: Vec<&str> = known
                .iter()
                .filter(|p| p.has_flag(ConflictFlag::Adc2Wifi))
                .map(|p| p.label)
                .collect();
            if !adc2.is_empty() {
                advisories.push(Advisory::warning(format!(
                    "{} use ADC2, which is unreadable while WiFi is active - move analog inputs to ADC1 (GPIO32-39) if WiFi is needed",
                    adc2.join(", "),
                )));
            }
        }
        Board::ArduinoUno => {
            let spi_selected: Vec<&str> = known
                .iter()
                .filter(|p| p.spi.is_some())
                .map(|p| p.label)
                .collect();
            if !spi_selected.is_empty() && spi_selected.len() < 4 {
                advisories.push(Advisory::info(format!(
                    "partial SPI selection ({}) - the SPI library claims D10-D13 together",
                    spi_selected.join(", "),
                )));
            }
        }
        Board::Stm32BluePill => {}
    }

    advisories
}

/// Generic bus-completeness hints.
fn bus_completeness(known: &[&'static Pin]) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    let i2c: Vec<&str> = known
        .iter()
        .filter(|p| p.i2c.is_some())
        .map(|p| p.label)
        .collect();
    if i2c.len() >= 2 {
        advisories.push(Advisory::info(format!(
            "I2C pins selected ({}) - both SDA and SCL must stay free for the bus",
            i2c.join(", "),
        )));
    }

    let spi: Vec<&str> = known
        .iter()
        .filter(|p| p.spi.is_some())
        .map(|p| p.label)
        .collect();
    if spi.len() >= 3 {
        advisories.push(Advisory::info(format!(
            "SPI pins selected ({}) - MOSI, MISO and SCK must all stay free for the bus",
            spi.join(", "),
        )));
    }

    advisories
}

/// Unused pins with an empty conflict-flag set, ascending, capped.
fn safe_alternatives(board: Board, requested: &[u32]) -> Vec<&'static Pin> {
    database::pins(board)
        .iter()
        .filter(|p| p.flags.is_empty() && !requested.contains(&p.number))
        .take(MAX_ALTERNATIVES)
        .collect()
}
