//! The embedded pin capability database.
//!
//! Derived from the vendor documentation for each board:
//!
//! - ESP32: ESP32 Technical Reference Manual v4.8 (DevKitC header pins,
//!   including the flash-reserved GPIO6-11 so misuse can be diagnosed)
//! - Arduino UNO: ATmega328P datasheet
//! - STM32: STM32F103x8 datasheet / RM0008 ("Blue Pill" breakout)
//!
//! Tables are compile-time constants; each board's slice is sorted by pin
//! number and pin numbers are unique (checked by tests).

use crate::gpio::board::{Board, ConflictFlag, I2cRole, Pin, SpiRole, UartRole};

use ConflictFlag::{Adc2Wifi, FlashReserved, InputOnly, Strapping, Swd, Uart0, Usb};

/// ESP32 DevKitC pins, GPIO-numbered.
pub const ESP32_PINS: &[Pin] = &[
    Pin::gpio(
        0,
        "GPIO0",
        &["ADC2_CH1", "TOUCH1", "RTC_GPIO11", "CLK_OUT1", "EMAC_TX_CLK"],
        "Bootstrap pin - must be HIGH during boot. Connected to BOOT button on most dev boards.",
    )
    .pwm()
    .adc()
    .touch()
    .flags(&[Strapping, Adc2Wifi]),
    Pin::gpio(
        1,
        "GPIO1",
        &["U0TXD", "CLK_OUT3", "EMAC_RXD2"],
        "UART0 TX - serial debug output. Avoid using for GPIO during development.",
    )
    .pwm()
    .uart("UART0", UartRole::Tx)
    .flags(&[Uart0]),
    Pin::gpio(
        2,
        "GPIO2",
        &["ADC2_CH2", "TOUCH2", "RTC_GPIO12", "HSPIWP", "SD_DATA0"],
        "Bootstrap pin - must be LOW during boot. Connected to onboard LED on many boards.",
    )
    .pwm()
    .adc()
    .touch()
    .flags(&[Strapping, Adc2Wifi]),
    Pin::gpio(
        3,
        "GPIO3",
        &["U0RXD", "CLK_OUT2"],
        "UART0 RX - serial debug input. Avoid using for GPIO during development.",
    )
    .pwm()
    .uart("UART0", UartRole::Rx)
    .flags(&[Uart0]),
    Pin::gpio(
        4,
        "GPIO4",
        &["ADC2_CH0", "TOUCH0", "RTC_GPIO10", "HSPIHD", "SD_DATA1", "EMAC_TX_ER"],
        "Safe to use for most applications.",
    )
    .pwm()
    .adc()
    .touch()
    .flags(&[Adc2Wifi]),
    Pin::gpio(
        5,
        "GPIO5",
        &["VSPICS0", "EMAC_RX_CLK"],
        "Bootstrap pin - affects boot messages. Safe to use after boot. VSPI chip select.",
    )
    .pwm()
    .spi("VSPI", SpiRole::Cs)
    .flags(&[Strapping]),
    Pin::gpio(
        6,
        "GPIO6",
        &["SD_CLK", "SPICLK", "U1CTS"],
        "Wired to the on-module SPI flash clock. Never use as GPIO.",
    )
    .flags(&[FlashReserved]),
    Pin::gpio(
        7,
        "GPIO7",
        &["SD_DATA0", "SPIQ", "U2RTS"],
        "Wired to the on-module SPI flash data. Never use as GPIO.",
    )
    .flags(&[FlashReserved]),
    Pin::gpio(
        8,
        "GPIO8",
        &["SD_DATA1", "SPID", "U2CTS"],
        "Wired to the on-module SPI flash data. Never use as GPIO.",
    )
    .flags(&[FlashReserved]),
    Pin::gpio(
        9,
        "GPIO9",
        &["SD_DATA2", "SPIHD", "U1RXD"],
        "Wired to the on-module SPI flash data. Never use as GPIO.",
    )
    .flags(&[FlashReserved]),
    Pin::gpio(
        10,
        "GPIO10",
        &["SD_DATA3", "SPIWP", "U1TXD"],
        "Wired to the on-module SPI flash data. Never use as GPIO.",
    )
    .flags(&[FlashReserved]),
    Pin::gpio(
        11,
        "GPIO11",
        &["SD_CMD", "SPICS0", "U1RTS"],
        "Wired to the on-module SPI flash command line. Never use as GPIO.",
    )
    .flags(&[FlashReserved]),
    Pin::gpio(
        12,
        "GPIO12",
        &["ADC2_CH5", "TOUCH5", "RTC_GPIO15", "MTDI", "HSPIQ", "SD_DATA2", "EMAC_TXD3"],
        "Bootstrap pin - sets flash voltage. Must be LOW during boot for 3.3V flash.",
    )
    .pwm()
    .adc()
    .touch()
    .spi("HSPI", SpiRole::Miso)
    .flags(&[Strapping, Adc2Wifi]),
    Pin::gpio(
        13,
        "GPIO13",
        &["ADC2_CH4", "TOUCH4", "RTC_GPIO14", "MTCK", "HSPID", "SD_DATA3", "EMAC_RX_ER"],
        "Safe to use for most applications. HSPI MOSI.",
    )
    .pwm()
    .adc()
    .touch()
    .spi("HSPI", SpiRole::Mosi)
    .flags(&[Adc2Wifi]),
    Pin::gpio(
        14,
        "GPIO14",
        &["ADC2_CH6", "TOUCH6", "RTC_GPIO16", "MTMS", "HSPICLK", "SD_CLK", "EMAC_TXD2"],
        "Safe to use for most applications. HSPI clock.",
    )
    .pwm()
    .adc()
    .touch()
    .spi("HSPI", SpiRole::Sck)
    .flags(&[Adc2Wifi]),
    Pin::gpio(
        15,
        "GPIO15",
        &["ADC2_CH3", "TOUCH3", "RTC_GPIO13", "MTDO", "HSPICS0", "SD_CMD", "EMAC_RXD3"],
        "Bootstrap pin - must be HIGH during boot for normal operation. HSPI chip select.",
    )
    .pwm()
    .adc()
    .touch()
    .spi("HSPI", SpiRole::Cs)
    .flags(&[Strapping, Adc2Wifi]),
    Pin::gpio(
        16,
        "GPIO16",
        &["U2RXD", "EMAC_CLK_OUT"],
        "UART2 RX. Not available on WROVER modules (used by PSRAM).",
    )
    .pwm()
    .uart("UART2", UartRole::Rx),
    Pin::gpio(
        17,
        "GPIO17",
        &["U2TXD", "EMAC_CLK_OUT_180"],
        "UART2 TX. Not available on WROVER modules (used by PSRAM).",
    )
    .pwm()
    .uart("UART2", UartRole::Tx),
    Pin::gpio(18, "GPIO18", &["VSPICLK"], "VSPI clock. Safe to use.")
        .pwm()
        .spi("VSPI", SpiRole::Sck),
    Pin::gpio(
        19,
        "GPIO19",
        &["VSPIQ", "U0CTS", "EMAC_TXD0"],
        "VSPI MISO. Safe to use.",
    )
    .pwm()
    .spi("VSPI", SpiRole::Miso),
    Pin::gpio(
        21,
        "GPIO21",
        &["VSPIHD", "EMAC_TX_EN"],
        "I2C SDA by default in Arduino. Safe to use.",
    )
    .pwm()
    .i2c("I2C0", I2cRole::Sda),
    Pin::gpio(
        22,
        "GPIO22",
        &["VSPIWP", "U0RTS", "EMAC_TXD1"],
        "I2C SCL by default in Arduino. Safe to use.",
    )
    .pwm()
    .i2c("I2C0", I2cRole::Scl),
    Pin::gpio(23, "GPIO23", &["VSPID"], "VSPI MOSI. Safe to use.")
        .pwm()
        .spi("VSPI", SpiRole::Mosi),
    Pin::gpio(
        25,
        "GPIO25",
        &["ADC2_CH8", "DAC_1", "RTC_GPIO6", "EMAC_RXD0"],
        "ADC2 and DAC1 output. Safe to use.",
    )
    .pwm()
    .adc()
    .dac()
    .flags(&[Adc2Wifi]),
    Pin::gpio(
        26,
        "GPIO26",
        &["ADC2_CH9", "DAC_2", "RTC_GPIO7", "EMAC_RXD1"],
        "ADC2 and DAC2 output. Safe to use.",
    )
    .pwm()
    .adc()
    .dac()
    .flags(&[Adc2Wifi]),
    Pin::gpio(
        27,
        "GPIO27",
        &["ADC2_CH7", "TOUCH7", "RTC_GPIO17", "EMAC_RX_DV"],
        "Safe to use for most applications.",
    )
    .pwm()
    .adc()
    .touch()
    .flags(&[Adc2Wifi]),
    Pin::gpio(
        32,
        "GPIO32",
        &["ADC1_CH4", "TOUCH9", "RTC_GPIO9", "XTAL_32K_P"],
        "ADC1 - works with WiFi. Safe to use.",
    )
    .pwm()
    .adc()
    .touch(),
    Pin::gpio(
        33,
        "GPIO33",
        &["ADC1_CH5", "TOUCH8", "RTC_GPIO8", "XTAL_32K_N"],
        "ADC1 - works with WiFi. Safe to use.",
    )
    .pwm()
    .adc()
    .touch(),
    Pin::gpio(
        34,
        "GPIO34",
        &["ADC1_CH6", "RTC_GPIO4"],
        "Input only - no internal pull-up/down. ADC1 - works with WiFi.",
    )
    .adc()
    .input_only()
    .flags(&[InputOnly]),
    Pin::gpio(
        35,
        "GPIO35",
        &["ADC1_CH7", "RTC_GPIO5"],
        "Input only - no internal pull-up/down. ADC1 - works with WiFi.",
    )
    .adc()
    .input_only()
    .flags(&[InputOnly]),
    Pin::gpio(
        36,
        "GPIO36",
        &["ADC1_CH0", "RTC_GPIO0", "SENSOR_VP"],
        "Input only - no internal pull-up/down. ADC1 - works with WiFi.",
    )
    .adc()
    .input_only()
    .flags(&[InputOnly]),
    Pin::gpio(
        39,
        "GPIO39",
        &["ADC1_CH3", "RTC_GPIO3", "SENSOR_VN"],
        "Input only - no internal pull-up/down. ADC1 - works with WiFi.",
    )
    .adc()
    .input_only()
    .flags(&[InputOnly]),
];

/// Arduino UNO R3 pins; 0-13 are D0-D13, 14-19 are A0-A5.
pub const UNO_PINS: &[Pin] = &[
    Pin::gpio(
        0,
        "D0",
        &["RXD", "PCINT16"],
        "UART RX - serial communication. Avoid using for GPIO when using Serial.",
    )
    .uart("UART0", UartRole::Rx)
    .flags(&[Uart0]),
    Pin::gpio(
        1,
        "D1",
        &["TXD", "PCINT17"],
        "UART TX - serial communication. Avoid using for GPIO when using Serial.",
    )
    .uart("UART0", UartRole::Tx)
    .flags(&[Uart0]),
    Pin::gpio(2, "D2", &["INT0", "PCINT18"], "External interrupt 0. Safe to use.").interrupt(),
    Pin::gpio(
        3,
        "D3",
        &["INT1", "OC2B", "PCINT19"],
        "PWM via Timer2. External interrupt 1.",
    )
    .pwm()
    .interrupt(),
    Pin::gpio(4, "D4", &["T0", "XCK", "PCINT20"], "Safe to use for general GPIO."),
    Pin::gpio(5, "D5", &["OC0B", "T1", "PCINT21"], "PWM via Timer0.").pwm(),
    Pin::gpio(6, "D6", &["OC0A", "AIN0", "PCINT22"], "PWM via Timer0.").pwm(),
    Pin::gpio(7, "D7", &["AIN1", "PCINT23"], "Safe to use for general GPIO."),
    Pin::gpio(8, "D8", &["ICP1", "CLK0", "PCINT0"], "Safe to use for general GPIO."),
    Pin::gpio(9, "D9", &["OC1A", "PCINT1"], "PWM via Timer1 (16-bit).").pwm(),
    Pin::gpio(
        10,
        "D10",
        &["OC1B", "SS", "PCINT2"],
        "PWM via Timer1. SPI slave select.",
    )
    .pwm()
    .spi("SPI", SpiRole::Cs),
    Pin::gpio(
        11,
        "D11",
        &["OC2A", "MOSI", "PCINT3"],
        "PWM via Timer2. SPI MOSI.",
    )
    .pwm()
    .spi("SPI", SpiRole::Mosi),
    Pin::gpio(
        12,
        "D12",
        &["MISO", "PCINT4"],
        "SPI MISO. Safe to use if not using SPI.",
    )
    .spi("SPI", SpiRole::Miso),
    Pin::gpio(
        13,
        "D13",
        &["SCK", "PCINT5"],
        "SPI clock. Connected to onboard LED.",
    )
    .spi("SPI", SpiRole::Sck),
    Pin::gpio(
        14,
        "A0",
        &["ADC0", "PCINT8"],
        "Analog input channel 0. Can be used as digital GPIO.",
    )
    .adc(),
    Pin::gpio(
        15,
        "A1",
        &["ADC1", "PCINT9"],
        "Analog input channel 1. Can be used as digital GPIO.",
    )
    .adc(),
    Pin::gpio(
        16,
        "A2",
        &["ADC2", "PCINT10"],
        "Analog input channel 2. Can be used as digital GPIO.",
    )
    .adc(),
    Pin::gpio(
        17,
        "A3",
        &["ADC3", "PCINT11"],
        "Analog input channel 3. Can be used as digital GPIO.",
    )
    .adc(),
    Pin::gpio(
        18,
        "A4",
        &["ADC4", "SDA", "PCINT12"],
        "I2C SDA. Analog input channel 4.",
    )
    .adc()
    .i2c("I2C", I2cRole::Sda),
    Pin::gpio(
        19,
        "A5",
        &["ADC5", "SCL", "PCINT13"],
        "I2C SCL. Analog input channel 5.",
    )
    .adc()
    .i2c("I2C", I2cRole::Scl),
];

/// STM32F103C8 "Blue Pill" pins: PA0-PA15 (0-15), PB0-PB15 (16-31),
/// PC13-PC15 (32-34). Power, reset, and BOOT0 appear only on the diagram.
pub const STM32_PINS: &[Pin] = &[
    Pin::gpio(
        0,
        "PA0",
        &["ADC1_IN0", "TIM2_CH1", "USART2_CTS", "WKUP"],
        "ADC channel 0. Timer 2 PWM. Wakeup pin.",
    )
    .pwm()
    .adc(),
    Pin::gpio(1, "PA1", &["ADC1_IN1", "TIM2_CH2", "USART2_RTS"], "ADC channel 1. Timer 2 PWM.")
        .pwm()
        .adc(),
    Pin::gpio(2, "PA2", &["ADC1_IN2", "TIM2_CH3", "USART2_TX"], "USART2 TX. ADC channel 2.")
        .pwm()
        .adc()
        .uart("USART2", UartRole::Tx),
    Pin::gpio(3, "PA3", &["ADC1_IN3", "TIM2_CH4", "USART2_RX"], "USART2 RX. ADC channel 3.")
        .pwm()
        .adc()
        .uart("USART2", UartRole::Rx),
    Pin::gpio(4, "PA4", &["ADC1_IN4", "SPI1_NSS", "DAC_OUT1"], "SPI1 NSS. DAC output 1.")
        .adc()
        .dac()
        .spi("SPI1", SpiRole::Cs),
    Pin::gpio(
        5,
        "PA5",
        &["ADC1_IN5", "SPI1_SCK", "DAC_OUT2"],
        "SPI1 SCK. DAC output 2. Onboard LED on some boards.",
    )
    .adc()
    .dac()
    .spi("SPI1", SpiRole::Sck),
    Pin::gpio(6, "PA6", &["ADC1_IN6", "SPI1_MISO", "TIM3_CH1"], "SPI1 MISO. Timer 3 PWM.")
        .pwm()
        .adc()
        .spi("SPI1", SpiRole::Miso),
    Pin::gpio(7, "PA7", &["ADC1_IN7", "SPI1_MOSI", "TIM3_CH2"], "SPI1 MOSI. Timer 3 PWM.")
        .pwm()
        .adc()
        .spi("SPI1", SpiRole::Mosi),
    Pin::gpio(8, "PA8", &["TIM1_CH1", "USART1_CK", "MCO"], "Timer 1 PWM. Master clock output.")
        .pwm(),
    Pin::gpio(9, "PA9", &["TIM1_CH2", "USART1_TX"], "USART1 TX. Timer 1 PWM.")
        .pwm()
        .uart("USART1", UartRole::Tx),
    Pin::gpio(10, "PA10", &["TIM1_CH3", "USART1_RX"], "USART1 RX. Timer 1 PWM.")
        .pwm()
        .uart("USART1", UartRole::Rx),
    Pin::gpio(
        11,
        "PA11",
        &["TIM1_CH4", "USART1_CTS", "USB_DM"],
        "USB D-. Timer 1 PWM. Avoid if USB is needed.",
    )
    .pwm()
    .flags(&[Usb]),
    Pin::gpio(
        12,
        "PA12",
        &["TIM1_ETR", "USART1_RTS", "USB_DP"],
        "USB D+. External trigger. Avoid if USB is needed.",
    )
    .flags(&[Usb]),
    Pin::gpio(
        13,
        "PA13",
        &["JTMS", "SWDIO"],
        "SWD programming data (SWDIO). Keep free for debugging.",
    )
    .flags(&[Swd]),
    Pin::gpio(
        14,
        "PA14",
        &["JTCK", "SWCLK"],
        "SWD programming clock (SWCLK). Keep free for debugging.",
    )
    .flags(&[Swd]),
    Pin::gpio(
        15,
        "PA15",
        &["JTDI", "TIM2_CH1", "SPI1_NSS"],
        "SPI1 NSS alternate. Timer 2 PWM.",
    )
    .pwm(),
    Pin::gpio(16, "PB0", &["ADC1_IN8", "TIM3_CH3"], "ADC channel 8. Timer 3 PWM.")
        .pwm()
        .adc(),
    Pin::gpio(17, "PB1", &["ADC1_IN9", "TIM3_CH4"], "ADC channel 9. Timer 3 PWM.")
        .pwm()
        .adc(),
    Pin::gpio(18, "PB2", &["BOOT1"], "Boot mode selection pin (BOOT1)."),
    Pin::gpio(19, "PB3", &["JTDO", "TIM2_CH2", "SPI1_SCK"], "SPI1 SCK alternate. Timer 2 PWM.")
        .pwm(),
    Pin::gpio(
        20,
        "PB4",
        &["JNTRST", "TIM3_CH1", "SPI1_MISO"],
        "SPI1 MISO alternate. Timer 3 PWM.",
    )
    .pwm(),
    Pin::gpio(
        21,
        "PB5",
        &["TIM3_CH2", "SPI1_MOSI", "I2C1_SMBA"],
        "SPI1 MOSI alternate. Timer 3 PWM.",
    )
    .pwm(),
    Pin::gpio(22, "PB6", &["TIM4_CH1", "I2C1_SCL", "USART1_TX"], "I2C1 SCL. Timer 4 PWM.")
        .pwm()
        .i2c("I2C1", I2cRole::Scl),
    Pin::gpio(23, "PB7", &["TIM4_CH2", "I2C1_SDA", "USART1_RX"], "I2C1 SDA. Timer 4 PWM.")
        .pwm()
        .i2c("I2C1", I2cRole::Sda),
    Pin::gpio(24, "PB8", &["TIM4_CH3", "I2C1_SCL"], "I2C1 SCL alternate. Timer 4 PWM.")
        .pwm()
        .i2c("I2C1", I2cRole::Scl),
    Pin::gpio(25, "PB9", &["TIM4_CH4", "I2C1_SDA"], "I2C1 SDA alternate. Timer 4 PWM.")
        .pwm()
        .i2c("I2C1", I2cRole::Sda),
    Pin::gpio(26, "PB10", &["TIM2_CH3", "I2C2_SCL", "USART3_TX"], "I2C2 SCL. Timer 2 PWM.")
        .pwm()
        .i2c("I2C2", I2cRole::Scl),
    Pin::gpio(27, "PB11", &["TIM2_CH4", "I2C2_SDA", "USART3_RX"], "I2C2 SDA. Timer 2 PWM.")
        .pwm()
        .i2c("I2C2", I2cRole::Sda),
    Pin::gpio(28, "PB12", &["SPI2_NSS", "I2C2_SMBA", "TIM1_BKIN"], "SPI2 NSS. I2C2 SMBA.")
        .spi("SPI2", SpiRole::Cs),
    Pin::gpio(
        29,
        "PB13",
        &["SPI2_SCK", "TIM1_CH1N", "USART3_CTS"],
        "SPI2 SCK. Timer 1 complementary output.",
    )
    .pwm()
    .spi("SPI2", SpiRole::Sck),
    Pin::gpio(
        30,
        "PB14",
        &["SPI2_MISO", "TIM1_CH2N", "USART3_RTS"],
        "SPI2 MISO. Timer 1 complementary output.",
    )
    .pwm()
    .spi("SPI2", SpiRole::Miso),
    Pin::gpio(31, "PB15", &["SPI2_MOSI", "TIM1_CH3N"], "SPI2 MOSI. Timer 1 complementary output.")
        .pwm()
        .spi("SPI2", SpiRole::Mosi),
    Pin::gpio(
        32,
        "PC13",
        &["TAMPER-RTC"],
        "Onboard LED on the Blue Pill (active LOW). RTC tamper detection. Weak drive - LED loads only.",
    ),
    Pin::gpio(33, "PC14", &["OSC32_IN"], "32.768 kHz crystal oscillator input."),
    Pin::gpio(34, "PC15", &["OSC32_OUT"], "32.768 kHz crystal oscillator output."),
];

/// The pin list for a board, sorted by pin number.
#[must_use]
pub const fn pins(board: Board) -> &'static [Pin] {
    match board {
        Board::Esp32 => ESP32_PINS,
        Board::ArduinoUno => UNO_PINS,
        Board::Stm32BluePill => STM32_PINS,
    }
}

/// Looks up a pin by number.
#[must_use]
pub fn find_pin(board: Board, number: u32) -> Option<&'static Pin> {
    pins(board).iter().find(|p| p.number == number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pin_numbers_unique_and_sorted() {
        for board in Board::ALL {
            let mut seen = HashSet::new();
            for pin in pins(board) {
                assert!(seen.insert(pin.number), "{board}: duplicate pin {}", pin.number);
            }
            for pair in pins(board).windows(2) {
                assert!(pair[0].number < pair[1].number, "{board}: unsorted pins");
            }
        }
    }

    #[test]
    fn every_pin_has_a_capability_and_a_function() {
        for board in Board::ALL {
            for pin in pins(board) {
                assert!(
                    !pin.capability_names().is_empty(),
                    "{board} pin {} has no capabilities",
                    pin.number
                );
                assert!(
                    !pin.functions.is_empty(),
                    "{board} pin {} has no functions",
                    pin.number
                );
                assert!(!pin.notes.is_empty());
            }
        }
    }

    #[test]
    fn board_pin_counts() {
        assert_eq!(ESP32_PINS.len(), 32);
        assert_eq!(UNO_PINS.len(), 20);
        assert_eq!(STM32_PINS.len(), 35);
    }

    #[test]
    fn esp32_flash_pins_flagged() {
        for number in 6..=11 {
            let pin = find_pin(Board::Esp32, number).unwrap();
            assert!(pin.has_flag(ConflictFlag::FlashReserved));
        }
    }

    #[test]
    fn esp32_strapping_pins() {
        let strapping: Vec<u32> = ESP32_PINS
            .iter()
            .filter(|p| p.has_flag(ConflictFlag::Strapping))
            .map(|p| p.number)
            .collect();
        assert_eq!(strapping, [0, 2, 5, 12, 15]);
    }

    #[test]
    fn esp32_input_only_pins() {
        let input_only: Vec<u32> = ESP32_PINS
            .iter()
            .filter(|p| p.has_flag(ConflictFlag::InputOnly))
            .map(|p| p.number)
            .collect();
        assert_eq!(input_only, [34, 35, 36, 39]);
        for number in input_only {
            assert!(!find_pin(Board::Esp32, number).unwrap().output);
        }
    }

    #[test]
    fn esp32_adc2_flags_match_functions() {
        for pin in ESP32_PINS {
            let is_adc2 = pin.functions.iter().any(|f| f.starts_with("ADC2"));
            assert_eq!(
                pin.has_flag(ConflictFlag::Adc2Wifi),
                is_adc2,
                "ADC2 flag mismatch on GPIO{}",
                pin.number
            );
        }
    }

    #[test]
    fn stm32_swd_and_usb_pins() {
        assert!(find_pin(Board::Stm32BluePill, 13).unwrap().has_flag(ConflictFlag::Swd));
        assert!(find_pin(Board::Stm32BluePill, 14).unwrap().has_flag(ConflictFlag::Swd));
        assert!(find_pin(Board::Stm32BluePill, 11).unwrap().has_flag(ConflictFlag::Usb));
        assert!(find_pin(Board::Stm32BluePill, 12).unwrap().has_flag(ConflictFlag::Usb));
    }

    #[test]
    fn every_conflict_flag_is_used_somewhere() {
        let all_flags = [
            ConflictFlag::Strapping,
            ConflictFlag::FlashReserved,
            ConflictFlag::InputOnly,
            ConflictFlag::Swd,
            ConflictFlag::Usb,
            ConflictFlag::Uart0,
            ConflictFlag::Adc2Wifi,
        ];
        for flag in all_flags {
            let used = Board::ALL
                .iter()
                .flat_map(|&b| pins(b))
                .any(|p| p.has_flag(flag));
            assert!(used, "{flag:?} not attached to any pin");
        }
    }

    #[test]
    fn uno_pwm_pins() {
        let pwm: Vec<u32> = UNO_PINS.iter().filter(|p| p.pwm).map(|p| p.number).collect();
        assert_eq!(pwm, [3, 5, 6, 9, 10, 11]);
    }
}
