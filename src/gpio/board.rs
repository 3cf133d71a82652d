//! Board and pin types for the GPIO reference database.
//!
//! Everything here is designed for `const` tables: pin records are plain
//! data with `&'static` slices, built once at compile time and never
//! mutated. Board identifiers accept the aliases users actually type.

use std::fmt;

/// A supported development board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Board {
    /// ESP32 DevKitC (ESP32-WROOM-32 module).
    Esp32,
    /// Arduino UNO R3 (ATmega328P).
    ArduinoUno,
    /// STM32F103C8T6 "Blue Pill".
    Stm32BluePill,
}

impl Board {
    /// Parses a board identifier, case-insensitively, accepting the common
    /// aliases: "ESP32"; "Arduino UNO" / "ArduinoUNO" / "UNO"; "STM32" /
    /// "Blue Pill" / "BluePill".
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "esp32" | "esp32devkitc" => Some(Self::Esp32),
            "arduinouno" | "uno" | "arduinounor3" => Some(Self::ArduinoUno),
            "stm32" | "bluepill" | "stm32bluepill" | "stm32f103" | "stm32f103c8t6" => {
                Some(Self::Stm32BluePill)
            }
            _ => None,
        }
    }

    /// Human-readable board name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Esp32 => "ESP32",
            Self::ArduinoUno => "Arduino UNO",
            Self::Stm32BluePill => "STM32 Blue Pill",
        }
    }

    /// All supported boards.
    pub const ALL: [Self; 3] = [Self::Esp32, Self::ArduinoUno, Self::Stm32BluePill];
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A board-level caution attached to a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictFlag {
    /// Level at reset selects boot behaviour (ESP32).
    Strapping,
    /// Wired to the on-module SPI flash; unusable (ESP32 GPIO6-11).
    FlashReserved,
    /// No output driver, no internal pull resistors (ESP32 GPIO34-39).
    InputOnly,
    /// Serial Wire Debug pin (STM32 PA13/PA14).
    Swd,
    /// USB data line (STM32 PA11/PA12).
    Usb,
    /// UART0 / USB-serial pin; clashes with flashing and serial debug.
    Uart0,
    /// ADC2 channel; unreadable while the WiFi radio is active (ESP32).
    Adc2Wifi,
}

impl ConflictFlag {
    /// A short marker for diagram rows, e.g. "⚠strap".
    #[must_use]
    pub const fn terse(self) -> &'static str {
        match self {
            Self::Strapping => "⚠strap",
            Self::FlashReserved => "⚠flash",
            Self::InputOnly => "(IN)",
            Self::Swd => "⚠swd",
            Self::Usb => "⚠usb",
            Self::Uart0 => "⚠uart0",
            Self::Adc2Wifi => "adc2",
        }
    }

    /// A one-line explanation for reports.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Strapping => {
                "strapping pin: its level at reset selects boot behaviour, avoid external pulls during boot"
            }
            Self::FlashReserved => "reserved for the on-module SPI flash, not usable as GPIO",
            Self::InputOnly => "input only: no output driver and no internal pull-up/down",
            Self::Swd => "SWD programming pin: repurposing it disables debugging and reflashing",
            Self::Usb => "USB data line: repurposing it breaks the USB interface",
            Self::Uart0 => "serial/UART0 pin: conflicts with USB-serial and firmware upload",
            Self::Adc2Wifi => "ADC2 channel: analog reads fail while WiFi is active",
        }
    }
}

/// Role of a pin on an I²C bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I2cRole {
    /// Data line.
    Sda,
    /// Clock line.
    Scl,
}

impl I2cRole {
    /// Conventional line name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sda => "SDA",
            Self::Scl => "SCL",
        }
    }
}

/// Role of a pin on an SPI bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiRole {
    /// Controller-out line.
    Mosi,
    /// Controller-in line.
    Miso,
    /// Clock line.
    Sck,
    /// Chip select (SS/NSS).
    Cs,
}

impl SpiRole {
    /// Conventional line name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mosi => "MOSI",
            Self::Miso => "MISO",
            Self::Sck => "SCK",
            Self::Cs => "CS",
        }
    }
}

/// Role of a pin on a UART/USART.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartRole {
    /// Receive line.
    Rx,
    /// Transmit line.
    Tx,
}

impl UartRole {
    /// Conventional line name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rx => "RX",
            Self::Tx => "TX",
        }
    }
}

/// One electrical pin on a board.
///
/// `number` is the board's own addressing scheme: GPIO number on ESP32,
/// Arduino digital pin number on the UNO (A0-A5 are 14-19), and a port
/// ordinal on the Blue Pill (PA0-PA15 = 0-15, PB0-PB15 = 16-31,
/// PC13-PC15 = 32-34).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pin {
    /// Pin number in the board's addressing scheme.
    pub number: u32,
    /// Silk-screen label, e.g. "GPIO5", "D13", "PA4".
    pub label: &'static str,
    /// Alternate functions from the datasheet, most relevant first.
    pub functions: &'static [&'static str],
    /// Usage notes.
    pub notes: &'static str,
    /// Digital input capability.
    pub input: bool,
    /// Digital output capability.
    pub output: bool,
    /// PWM output capability.
    pub pwm: bool,
    /// Analog input capability.
    pub adc: bool,
    /// Analog output capability.
    pub dac: bool,
    /// Capacitive touch sensing capability.
    pub touch: bool,
    /// Dedicated external interrupt line.
    pub interrupt: bool,
    /// Board-level cautions.
    pub flags: &'static [ConflictFlag],
    /// I²C bus membership (bus name, role).
    pub i2c: Option<(&'static str, I2cRole)>,
    /// SPI bus membership (bus name, role).
    pub spi: Option<(&'static str, SpiRole)>,
    /// UART membership (port name, role).
    pub uart: Option<(&'static str, UartRole)>,
}

impl Pin {
    /// A bidirectional GPIO with no extra capabilities; the starting point
    /// for the const tables.
    pub(crate) const fn gpio(
        number: u32,
        label: &'static str,
        functions: &'static [&'static str],
        notes: &'static str,
    ) -> Self {
        Self {
            number,
            label,
            functions,
            notes,
            input: true,
            output: true,
            pwm: false,
            adc: false,
            dac: false,
            touch: false,
            interrupt: false,
            flags: &[],
            i2c: None,
            spi: None,
            uart: None,
        }
    }

    pub(crate) const fn pwm(mut self) -> Self {
        self.pwm = true;
        self
    }

    pub(crate) const fn adc(mut self) -> Self {
        self.adc = true;
        self
    }

    pub(crate) const fn dac(mut self) -> Self {
        self.dac = true;
        self
    }

    pub(crate) const fn touch(mut self) -> Self {
        self.touch = true;
        self
    }

    pub(crate) const fn interrupt(mut self) -> Self {
        self.interrupt = true;
        self
    }

    /// Marks the pin input-only (clears the output capability). The
    /// matching [`ConflictFlag::InputOnly`] still has to be listed in
    /// `flags`.
    pub(crate) const fn input_only(mut self) -> Self {
        self.output = false;
        self
    }

    pub(crate) const fn flags(mut self, flags: &'static [ConflictFlag]) -> Self {
        self.flags = flags;
        self
    }

    pub(crate) const fn i2c(mut self, bus: &'static str, role: I2cRole) -> Self {
        self.i2c = Some((bus, role));
        self
    }

    pub(crate) const fn spi(mut self, bus: &'static str, role: SpiRole) -> Self {
        self.spi = Some((bus, role));
        self
    }

    pub(crate) const fn uart(mut self, port: &'static str, role: UartRole) -> Self {
        self.uart = Some((port, role));
        self
    }

    /// Whether the pin carries a given conflict flag.
    #[must_use]
    pub fn has_flag(&self, flag: ConflictFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// The pin's ADC alternate function ("ADC1_CH4", "ADC0", ...), if any.
    #[must_use]
    pub fn adc_function(&self) -> Option<&'static str> {
        self.functions.iter().copied().find(|f| f.contains("ADC"))
    }

    /// The pin's timer/PWM alternate function, if any.
    #[must_use]
    pub fn timer_function(&self) -> Option<&'static str> {
        self.functions
            .iter()
            .copied()
            .find(|f| f.contains("TIM") || f.contains("OC") || f.contains("PWM"))
    }

    /// Capability names in display order.
    #[must_use]
    pub fn capability_names(&self) -> Vec<&'static str> {
        let mut caps = Vec::new();
        if self.input {
            caps.push("Input");
        }
        if self.output {
            caps.push("Output");
        }
        if self.pwm {
            caps.push("PWM");
        }
        if self.adc {
            caps.push("ADC");
        }
        if self.dac {
            caps.push("DAC");
        }
        if self.touch {
            caps.push("Touch");
        }
        if self.interrupt {
            caps.push("Interrupt");
        }
        caps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_aliases() {
        assert_eq!(Board::from_str_loose("ESP32"), Some(Board::Esp32));
        assert_eq!(Board::from_str_loose("esp32"), Some(Board::Esp32));
        assert_eq!(Board::from_str_loose("Arduino UNO"), Some(Board::ArduinoUno));
        assert_eq!(Board::from_str_loose("ArduinoUNO"), Some(Board::ArduinoUno));
        assert_eq!(Board::from_str_loose("uno"), Some(Board::ArduinoUno));
        assert_eq!(Board::from_str_loose("STM32"), Some(Board::Stm32BluePill));
        assert_eq!(Board::from_str_loose("Blue Pill"), Some(Board::Stm32BluePill));
        assert_eq!(Board::from_str_loose("BluePill"), Some(Board::Stm32BluePill));
        assert_eq!(Board::from_str_loose("RP2040"), None);
    }

    #[test]
    fn pin_builder_composes() {
        const PIN: Pin = Pin::gpio(4, "GPIO4", &["ADC2_CH0", "TOUCH0"], "test pin")
            .pwm()
            .adc()
            .touch()
            .flags(&[ConflictFlag::Adc2Wifi]);
        assert!(PIN.pwm && PIN.adc && PIN.touch);
        assert!(!PIN.dac);
        assert!(PIN.has_flag(ConflictFlag::Adc2Wifi));
        assert_eq!(PIN.adc_function(), Some("ADC2_CH0"));
    }

    #[test]
    fn capability_names_ordering() {
        const PIN: Pin = Pin::gpio(34, "GPIO34", &["ADC1_CH6"], "input only")
            .adc()
            .input_only()
            .flags(&[ConflictFlag::InputOnly]);
        assert_eq!(PIN.capability_names(), ["Input", "ADC"]);
    }
}
