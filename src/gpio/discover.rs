//! Peripheral discovery over the pin database.
//!
//! Each query walks a board's pin list (already sorted by pin number, so
//! results come back in ascending order), selects pins by capability or
//! alternate-function role, and groups bus peripherals by bus name so
//! callers can tell ESP32 VSPI from HSPI or STM32 I2C1 from I2C2.

use crate::gpio::board::{Board, I2cRole, Pin, SpiRole};
use crate::gpio::database;

/// A PWM-capable pin with its timer alternate, when the datasheet names one.
#[derive(Debug, Clone, Copy)]
pub struct PwmPin {
    /// The pin record.
    pub pin: &'static Pin,
    /// Timer/output-compare function, e.g. "TIM2_CH1" or "OC0A".
    pub timer: Option<&'static str>,
}

/// All PWM-capable pins of a board, ascending by pin number.
#[must_use]
pub fn pwm_pins(board: Board) -> Vec<PwmPin> {
    database::pins(board)
        .iter()
        .filter(|p| p.pwm)
        .map(|pin| PwmPin {
            pin,
            timer: pin.timer_function(),
        })
        .collect()
}

/// An ADC-capable pin with its channel alternate.
#[derive(Debug, Clone, Copy)]
pub struct AdcPin {
    /// The pin record.
    pub pin: &'static Pin,
    /// ADC channel function, e.g. "ADC1_CH4" or "ADC0".
    pub channel: Option<&'static str>,
}

impl AdcPin {
    /// Whether the channel belongs to the given ADC unit ("ADC1", "ADC2").
    #[must_use]
    pub fn in_unit(&self, unit: &str) -> bool {
        self.channel.is_some_and(|c| c.starts_with(unit))
    }
}

/// All ADC-capable pins of a board, ascending by pin number.
#[must_use]
pub fn adc_pins(board: Board) -> Vec<AdcPin> {
    database::pins(board)
        .iter()
        .filter(|p| p.adc)
        .map(|pin| AdcPin {
            pin,
            channel: pin.adc_function(),
        })
        .collect()
}

/// An I²C bus with its data and clock pins.
#[derive(Debug, Clone)]
pub struct I2cBus {
    /// Bus name, e.g. "I2C0", "I2C1".
    pub bus: &'static str,
    /// SDA-capable pins, ascending.
    pub sda: Vec<&'static Pin>,
    /// SCL-capable pins, ascending.
    pub scl: Vec<&'static Pin>,
}

/// I²C buses of a board, sorted by bus name.
#[must_use]
pub fn i2c_buses(board: Board) -> Vec<I2cBus> {
    let mut buses: Vec<I2cBus> = Vec::new();
    for pin in database::pins(board) {
        let Some((bus, role)) = pin.i2c else { continue };
        let index = match buses.iter().position(|b| b.bus == bus) {
            Some(index) => index,
            None => {
                buses.push(I2cBus {
                    bus,
                    sda: Vec::new(),
                    scl: Vec::new(),
                });
                buses.len() - 1
            }
        };
        match role {
            I2cRole::Sda => buses[index].sda.push(pin),
            I2cRole::Scl => buses[index].scl.push(pin),
        }
    }
    buses.sort_by_key(|b| b.bus);
    buses
}

/// An SPI bus with its four line roles.
#[derive(Debug, Clone)]
pub struct SpiBus {
    /// Bus name, e.g. "VSPI", "SPI1".
    pub bus: &'static str,
    /// (role, pin) pairs, ascending by pin number.
    pub lines: Vec<(SpiRole, &'static Pin)>,
}

impl SpiBus {
    /// Pins filling a given role on this bus.
    #[must_use]
    pub fn role(&self, role: SpiRole) -> Vec<&'static Pin> {
        self.lines
            .iter()
            .filter(|(r, _)| *r == role)
            .map(|&(_, p)| p)
            .collect()
    }
}

/// SPI buses of a board, sorted by bus name.
#[must_use]
pub fn spi_buses(board: Board) -> Vec<SpiBus> {
    let mut buses: Vec<SpiBus> = Vec::new();
    for pin in database::pins(board) {
        let Some((bus, role)) = pin.spi else { continue };
        match buses.iter_mut().find(|b| b.bus == bus) {
            Some(entry) => entry.lines.push((role, pin)),
            None => buses.push(SpiBus {
                bus,
                lines: vec![(role, pin)],
            }),
        }
    }
    buses.sort_by_key(|b| b.bus);
    buses
}
