//! This Rust `embedded-hal`-based library controls a 16x2 [HD44780](https://en.wikipedia.org/wiki/Hitachi_HD44780_LCD_controller)
//! compatible character display ("LCD1602") through a PCF8574 or PCF8574A based "I2C backpack" in an embedded, `no_std` environment.
//!
//! These backpacks are ubiquitous on eBay and AliExpress and have no clear branding. They wire the display's 4-bit data pins to P4-P7
//! of the expander, RS to P0, RW to P1, enable to P2 and the backlight transistor to P3. Only that wiring is supported.
//!
//! Key features include:
//! - Automatic discovery of the backpack's I2C address in the PCF8574 (`0x20`-`0x27`) and PCF8574A (`0x38`-`0x3F`) ranges
//! - Convenient high-level API for placing text, numbers and custom glyphs on the display
//! - Custom glyphs from any 5x8 pixel source through the [`GlyphSource`] trait, with a heart and a cross
//!   preloaded into CG-RAM slots 0 and 1
//! - Backlight control
//! - `core::fmt::Write` implementation for easy use with the `write!` macro
//! - Compatible with the `embedded-hal` traits v1.0 and later
//! - Optional support for the `defmt` and `ufmt` logging frameworks
//!
//! ## Usage
//! Add this to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! i2c-lcd1602 = { version = "0.1", features = ["defmt"] }
//! ```
//! The `features = ["defmt"]` line is optional and enables the `defmt` feature, which makes the library's errors and types
//! printable with `defmt` and logs address discovery and initialization. Another optional feature is `features = ["ufmt"]`,
//! which enables the `uwriteln!` and `uwrite!` macros to be used.
//!
//! Create the display object:
//! ```rust
//! use i2c_lcd1602::CharacterDisplay1602;
//!
//! // board setup
//! let i2c = ...; // I2C peripheral
//! let delay = ...; // DelayNs implementation
//!
//! // find the backpack on the bus during `init`
//! let mut lcd = CharacterDisplay1602::new(i2c, delay);
//! // or use a known address, 0x27 for a PCF8574 and 0x3F for a PCF8574A with all address jumpers open
//! let mut lcd = CharacterDisplay1602::new_with_address(i2c, 0x27, delay);
//! ```
//! Initialize the display:
//! ```rust
//! if let Err(e) = lcd.init() {
//!    panic!("Error initializing LCD: {}", e);
//! }
//! ```
//! Use the display:
//! ```rust
//! use i2c_lcd1602::HEART_SLOT;
//!
//! lcd.show_string("Hello, world!", 0, 0)?
//!     .show_number(42, 0, 1)?
//!     .show_glyph(HEART_SLOT, 15, 1)?;
//! // can also use the `core::fmt::write!` macro at the current cursor position
//! use core::fmt::Write;
//!
//! write!(lcd, "{}C", 21)?;
//! ```
//! Each method returns a `Result` that wraps the display object in `Ok()`, allowing for easy chaining of commands.
//!
//! ### Concurrency
//! A display object owns its I2C bus handle and every operation takes `&mut self`, so the multi-write sequences that
//! clock data into the HD44780 cannot interleave. To share one bus with other devices, wrap it in one of the
//! `embedded-hal-bus` I2C device types.
//!
#![no_std]
#![allow(non_upper_case_globals)]
use core::fmt::Display;

use embedded_hal::{delay::DelayNs, i2c};

mod adapter;
mod discovery;
mod driver;
mod glyph;

pub use discovery::{discover_address, PCF8574A_ADDRESS_RANGE, PCF8574_ADDRESS_RANGE};
pub use driver::DisplayState;
pub use glyph::{Glyph, GlyphSource, CROSS_SLOT, GLYPH_HEIGHT, GLYPH_WIDTH, HEART_SLOT};

/// Passing this as the address selects automatic address discovery during `init`.
pub const AUTO_DETECT_ADDRESS: u8 = 0;

#[derive(Debug, PartialEq, Copy, Clone)]
/// Errors that can occur when using the LCD backpack
pub enum CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    /// I2C error returned from the underlying I2C implementation
    I2cError(I2C::Error),
    /// No PCF8574 or PCF8574A backpack answered the address discovery probe
    AddressNotFound,
    /// The display was used before `init` completed successfully
    NotInitialized,
    /// Formatting error
    FormattingError(core::fmt::Error),
}

impl<I2C> From<core::fmt::Error> for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn from(err: core::fmt::Error) -> Self {
        CharacterDisplayError::FormattingError(err)
    }
}

impl<I2C> From<&CharacterDisplayError<I2C>> for &'static str
where
    I2C: i2c::I2c,
{
    fn from(err: &CharacterDisplayError<I2C>) -> Self {
        match err {
            CharacterDisplayError::I2cError(_) => "I2C error",
            CharacterDisplayError::AddressNotFound => "LCD backpack address not found",
            CharacterDisplayError::NotInitialized => "Display not initialized",
            CharacterDisplayError::FormattingError(_) => "Formatting error",
        }
    }
}

#[cfg(feature = "defmt")]
impl<I2C> defmt::Format for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn format(&self, fmt: defmt::Formatter) {
        let msg: &'static str = From::from(self);
        defmt::write!(fmt, "{}", msg);
    }
}

#[cfg(feature = "ufmt")]
impl<I2C> ufmt::uDisplay for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn fmt<W>(&self, w: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        let msg: &'static str = From::from(self);
        ufmt::uwrite!(w, "{}", msg)
    }
}

impl<I2C> Display for CharacterDisplayError<I2C>
where
    I2C: i2c::I2c,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = From::from(self);
        write!(f, "{}", msg)
    }
}

/// The bus, address and delay provider a display talks through. An `address` of
/// [`AUTO_DETECT_ADDRESS`] is replaced by the discovered address during `init`.
pub struct DeviceSetupConfig<I2C, DELAY>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    i2c: I2C,
    address: u8,
    delay: DELAY,
}

/// HD44780 based 16x2 character display using a PCF8574 or PCF8574A I2C adapter.
pub struct CharacterDisplay1602<I2C, DELAY>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    config: DeviceSetupConfig<I2C, DELAY>,
    device: driver::HD44780<I2C, DELAY>,
}

impl<I2C, DELAY> CharacterDisplay1602<I2C, DELAY>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    /// Create a new character display object that discovers the adapter's I2C address during `init`.
    pub fn new(i2c: I2C, delay: DELAY) -> Self {
        Self::new_with_address(i2c, AUTO_DETECT_ADDRESS, delay)
    }

    /// Create a new character display object with a specific I2C address for the adapter. An address of
    /// [`AUTO_DETECT_ADDRESS`] behaves like `new`.
    pub fn new_with_address(i2c: I2C, address: u8, delay: DELAY) -> Self {
        Self {
            config: DeviceSetupConfig {
                i2c,
                address,
                delay,
            },
            device: driver::HD44780::default(),
        }
    }

    /// Initialize the display. This must be called before using the display. Turns the backlight on,
    /// clears the display and loads the heart and cross glyphs into CG-RAM slots 0 and 1.
    /// Calling it again replays the whole sequence on the already resolved address.
    pub fn init(&mut self) -> Result<(), CharacterDisplayError<I2C>> {
        self.device.init(&mut self.config)
    }

    /// returns a reference to the I2C peripheral. mostly needed for testing
    #[cfg(test)]
    fn i2c(&mut self) -> &mut I2C {
        &mut self.config.i2c
    }

    /// The adapter's I2C address. Returns [`AUTO_DETECT_ADDRESS`] until discovery has resolved it.
    pub fn i2c_address(&self) -> u8 {
        self.config.address
    }

    pub fn display_state(&self) -> DisplayState {
        self.device.state()
    }

    /// `true` once `init` has completed successfully
    pub fn is_ready(&self) -> bool {
        self.device.state() == DisplayState::Ready
    }

    /// Whether the backlight bit is set on the adapter.
    pub fn backlight_enabled(&self) -> bool {
        self.device.backlight_enabled()
    }

    //--------------------------------------------------------------------------------------------------
    // high level commands, for the user!
    //--------------------------------------------------------------------------------------------------

    /// Send a raw HD44780 command byte.
    pub fn command(&mut self, command: u8) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.device.command(&mut self.config, command)?;
        Ok(self)
    }

    /// Write a raw character code at the current cursor position. Codes 0-7 show the CG-RAM glyphs.
    pub fn write_char(&mut self, code: u8) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.device.write_char(&mut self.config, code)?;
        Ok(self)
    }

    /// Clear the display and return the cursor home
    pub fn clear(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.device.clear(&mut self.config)?;
        Ok(self)
    }

    /// Set the cursor position at specified column (0-15) and row (0-1). Values are not range checked.
    pub fn set_cursor(
        &mut self,
        col: u8,
        row: u8,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.device.set_cursor(&mut self.config, col, row)?;
        Ok(self)
    }

    /// Prints a string to the LCD at the current cursor position.
    pub fn print(&mut self, text: &str) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.device.print(&mut self.config, text)?;
        Ok(self)
    }

    /// Prints a string starting at the given column and row. Text past column 15 is not wrapped
    /// onto the next row.
    pub fn show_string(
        &mut self,
        text: &str,
        col: u8,
        row: u8,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.device.show_string(&mut self.config, text, col, row)?;
        Ok(self)
    }

    /// Prints the decimal representation of a number starting at the given column and row.
    pub fn show_number(
        &mut self,
        number: i32,
        col: u8,
        row: u8,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.device.show_number(&mut self.config, number, col, row)?;
        Ok(self)
    }

    /// Program a custom glyph into CG-RAM `slot` (0-7). Passing `None` does nothing.
    pub fn define_glyph<G>(
        &mut self,
        glyph: Option<&G>,
        slot: u8,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>>
    where
        G: GlyphSource + ?Sized,
    {
        self.device.define_glyph(&mut self.config, glyph, slot)?;
        Ok(self)
    }

    /// Show the custom glyph in CG-RAM `slot` (0-7) at the given column and row.
    pub fn show_glyph(
        &mut self,
        slot: u8,
        col: u8,
        row: u8,
    ) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.device.show_glyph(&mut self.config, slot, col, row)?;
        Ok(self)
    }

    /// Turn the display on, with the cursor hidden and not blinking.
    pub fn turn_on(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.device.turn_on(&mut self.config)?;
        Ok(self)
    }

    /// Turn the display off. Display memory is kept and the backlight is not affected.
    pub fn turn_off(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.device.turn_off(&mut self.config)?;
        Ok(self)
    }

    pub fn backlight_on(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.device.backlight(&mut self.config, true)?;
        Ok(self)
    }

    pub fn backlight_off(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.device.backlight(&mut self.config, false)?;
        Ok(self)
    }

    /// Shift the display content to the left.
    pub fn shift_left(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.device.shift_left(&mut self.config)?;
        Ok(self)
    }

    /// Shift the display content to the right.
    pub fn shift_right(&mut self) -> Result<&mut Self, CharacterDisplayError<I2C>> {
        self.device.shift_right(&mut self.config)?;
        Ok(self)
    }
}

/// Implement the `core::fmt::Write` trait for the LCD backpack, allowing it to be used with the `write!` macro.
/// This is a convenience method for printing to the display at the current cursor position.
impl<I2C, DELAY> core::fmt::Write for CharacterDisplay1602<I2C, DELAY>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    fn write_str(&mut self, s: &str) -> Result<(), core::fmt::Error> {
        if let Err(_e) = self.print(s) {
            return Err(core::fmt::Error);
        }
        Ok(())
    }
}

#[cfg(feature = "ufmt")]
/// Implement the `ufmt::uWrite` trait for the LCD backpack, allowing it to be used with the `uwriteln!` and `uwrite!` macros.
/// This is a convenience method for printing to the display at the current cursor position.
impl<I2C, DELAY> ufmt::uWrite for CharacterDisplay1602<I2C, DELAY>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    fn write_str(&mut self, s: &str) -> Result<(), CharacterDisplayError<I2C>> {
        self.print(s)?;
        Ok(())
    }

    type Error = CharacterDisplayError<I2C>;
}


#[cfg(test)]
mod lib_tests {
    extern crate std;
    use super::*;
    use crate::test_utils::{command_bytes, data_bytes, glyph_bytes, init_sequence};
    use core::fmt::Write;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        i2c::{Mock as I2cMock, Transaction as I2cTransaction},
    };
    use std::vec::Vec;

    #[test]
    fn test_character_display_init_auto_address() {
        let mut expected_i2c_transactions = Vec::new();
        // nothing answers below 0x27
        for address in 0x20..=0x26 {
            expected_i2c_transactions.push(
                I2cTransaction::write(address, std::vec![0xFF, 0xFF, 0xFF, 0xFF])
                    .with_error(ErrorKind::Other),
            );
        }
        // the backpack at 0x27 answers the probe
        expected_i2c_transactions.extend([
            I2cTransaction::write(0x27, std::vec![0xFF, 0xFF, 0xFF, 0xFF]),
            I2cTransaction::read(0x27, std::vec![0x07]),
            I2cTransaction::write(0x27, std::vec![0x00, 0x00]),
            I2cTransaction::read(0x27, std::vec![0x00]),
        ]);
        expected_i2c_transactions.extend(init_sequence(0x27));

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = CharacterDisplay1602::new(i2c, NoopDelay::new());
        assert_eq!(lcd.i2c_address(), AUTO_DETECT_ADDRESS);
        assert!(!lcd.is_ready());

        let result = lcd.init();
        assert!(result.is_ok());
        assert_eq!(lcd.i2c_address(), 0x27);
        assert!(lcd.is_ready());
        assert!(lcd.backlight_enabled());

        // finish the i2c mock
        lcd.i2c().done();
    }

    #[test]
    fn test_character_display_init_address_not_found() {
        let mut expected_i2c_transactions = Vec::new();
        for address in PCF8574_ADDRESS_RANGE.chain(PCF8574A_ADDRESS_RANGE) {
            expected_i2c_transactions.push(
                I2cTransaction::write(address, std::vec![0xFF, 0xFF, 0xFF, 0xFF])
                    .with_error(ErrorKind::Other),
            );
        }

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = CharacterDisplay1602::new(i2c, NoopDelay::new());
        assert!(matches!(
            lcd.init(),
            Err(CharacterDisplayError::AddressNotFound)
        ));
        assert_eq!(lcd.i2c_address(), AUTO_DETECT_ADDRESS);
        assert_eq!(lcd.display_state(), DisplayState::Uninitialized);
        assert!(matches!(
            lcd.show_string("x", 0, 0),
            Err(CharacterDisplayError::NotInitialized)
        ));

        lcd.i2c().done();
    }

    #[test]
    fn test_character_display_show_string() {
        let i2c_address = 0x3F_u8;
        let mut expected_i2c_transactions = init_sequence(i2c_address);
        expected_i2c_transactions.extend(std::vec![
            // set cursor to column 0, row 1: LCD_CMD_SETDDRAMADDR | 0x40 = 0xC0
            I2cTransaction::write(i2c_address, std::vec![0b1100_1000]), // high nibble 0xC, rs=0, enable=0
            I2cTransaction::write(i2c_address, std::vec![0b1100_1100]), // high nibble 0xC, rs=0, enable=1
            I2cTransaction::write(i2c_address, std::vec![0b1100_1000]), // high nibble 0xC, rs=0, enable=0
            I2cTransaction::write(i2c_address, std::vec![0b0000_1000]), // low nibble 0x0, rs=0, enable=0
            I2cTransaction::write(i2c_address, std::vec![0b0000_1100]), // low nibble 0x0, rs=0, enable=1
            I2cTransaction::write(i2c_address, std::vec![0b0000_1000]), // low nibble 0x0, rs=0, enable=0
            // 'H' 0x48
            I2cTransaction::write(i2c_address, std::vec![0b0100_1001]), // high nibble 0x4, rs=1, enable=0
            I2cTransaction::write(i2c_address, std::vec![0b0100_1101]), // high nibble 0x4, rs=1, enable=1
            I2cTransaction::write(i2c_address, std::vec![0b0100_1001]), // high nibble 0x4, rs=1, enable=0
            I2cTransaction::write(i2c_address, std::vec![0b1000_1001]), // low nibble 0x8, rs=1, enable=0
            I2cTransaction::write(i2c_address, std::vec![0b1000_1101]), // low nibble 0x8, rs=1, enable=1
            I2cTransaction::write(i2c_address, std::vec![0b1000_1001]), // low nibble 0x8, rs=1, enable=0
            // 'i' 0x69
            I2cTransaction::write(i2c_address, std::vec![0b0110_1001]), // high nibble 0x6, rs=1, enable=0
            I2cTransaction::write(i2c_address, std::vec![0b0110_1101]), // high nibble 0x6, rs=1, enable=1
            I2cTransaction::write(i2c_address, std::vec![0b0110_1001]), // high nibble 0x6, rs=1, enable=0
            I2cTransaction::write(i2c_address, std::vec![0b1001_1001]), // low nibble 0x9, rs=1, enable=0
            I2cTransaction::write(i2c_address, std::vec![0b1001_1101]), // low nibble 0x9, rs=1, enable=1
            I2cTransaction::write(i2c_address, std::vec![0b1001_1001]), // low nibble 0x9, rs=1, enable=0
        ]);

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = CharacterDisplay1602::new_with_address(i2c, i2c_address, NoopDelay::new());
        assert!(lcd.init().is_ok());
        assert!(lcd.show_string("Hi", 0, 1).is_ok());

        lcd.i2c().done();
    }

    #[test]
    fn test_character_display_define_and_show_glyph() {
        let i2c_address = 0x27_u8;
        const X: bool = true;
        const O: bool = false;
        let smiley = [
            [O, O, O, O, O],
            [O, X, O, X, O],
            [O, X, O, X, O],
            [O, O, O, O, O],
            [X, O, O, O, X],
            [O, X, X, X, O],
            [O, O, O, O, O],
            [O, O, O, O, O],
        ];
        let mut expected_i2c_transactions = init_sequence(i2c_address);
        // LCD_CMD_SETCGRAMADDR + 5 * 8 = 0x68, then the 8 rows
        expected_i2c_transactions.extend(glyph_bytes(
            i2c_address,
            5,
            [0b00000, 0b01010, 0b01010, 0b00000, 0b10001, 0b01110, 0b00000, 0b00000],
        ));
        // cursor to column 7, row 1 and character code 5
        expected_i2c_transactions.extend(command_bytes(i2c_address, true, 0xC7));
        expected_i2c_transactions.extend(data_bytes(i2c_address, true, 5));
        // the preloaded heart at column 0, row 0
        expected_i2c_transactions.extend(command_bytes(i2c_address, true, 0x80));
        expected_i2c_transactions.extend(data_bytes(i2c_address, true, 0));

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = CharacterDisplay1602::new_with_address(i2c, i2c_address, NoopDelay::new());
        assert!(lcd.init().is_ok());
        assert!(lcd
            .define_glyph(Some(&smiley), 5)
            .and_then(|lcd| lcd.show_glyph(5, 7, 1))
            .and_then(|lcd| lcd.show_glyph(HEART_SLOT, 0, 0))
            .is_ok());

        lcd.i2c().done();
    }

    #[test]
    fn test_character_display_clear_twice() {
        let i2c_address = 0x27_u8;
        let mut expected_i2c_transactions = init_sequence(i2c_address);
        expected_i2c_transactions.extend(command_bytes(i2c_address, true, 0x01));
        expected_i2c_transactions.extend(command_bytes(i2c_address, true, 0x01));

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = CharacterDisplay1602::new_with_address(i2c, i2c_address, NoopDelay::new());
        assert!(lcd.init().is_ok());
        assert!(lcd.clear().and_then(|lcd| lcd.clear()).is_ok());

        lcd.i2c().done();
    }

    #[test]
    fn test_character_display_backlight_persists() {
        let i2c_address = 0x27_u8;
        let mut expected_i2c_transactions = init_sequence(i2c_address);
        // backlight off, then a number and a shift without backlight
        expected_i2c_transactions.extend(command_bytes(i2c_address, false, 0x00));
        expected_i2c_transactions.extend(command_bytes(i2c_address, false, 0x8A));
        expected_i2c_transactions.extend(data_bytes(i2c_address, false, b'9'));
        expected_i2c_transactions.extend(command_bytes(i2c_address, false, 0x18));
        // backlight on again applies to everything after it
        expected_i2c_transactions.extend(command_bytes(i2c_address, true, 0x00));
        expected_i2c_transactions.extend(command_bytes(i2c_address, true, 0x1C));
        expected_i2c_transactions.extend(data_bytes(i2c_address, true, b'!'));

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = CharacterDisplay1602::new_with_address(i2c, i2c_address, NoopDelay::new());
        assert!(lcd.init().is_ok());
        assert!(lcd.backlight_off().is_ok());
        assert!(!lcd.backlight_enabled());
        assert!(lcd.show_number(9, 10, 0).is_ok());
        assert!(lcd.shift_left().is_ok());
        assert!(lcd.backlight_on().is_ok());
        assert!(lcd.backlight_enabled());
        assert!(lcd.shift_right().is_ok());
        assert!(write!(lcd, "!").is_ok());

        lcd.i2c().done();
    }

    #[test]
    fn test_character_display_reinit_keeps_address() {
        let i2c_address = 0x38_u8;
        let mut expected_i2c_transactions = init_sequence(i2c_address);
        expected_i2c_transactions.extend(command_bytes(i2c_address, true, 0x00));
        expected_i2c_transactions.extend(init_sequence(i2c_address));

        let i2c = I2cMock::new(&expected_i2c_transactions);
        let mut lcd = CharacterDisplay1602::new_with_address(i2c, i2c_address, NoopDelay::new());
        assert!(lcd.init().is_ok());
        assert!(lcd.backlight_on().is_ok());
        assert!(lcd.init().is_ok());
        assert_eq!(lcd.i2c_address(), i2c_address);

        lcd.i2c().done();
    }

    #[test]
    fn test_character_display_error_messages() {
        let err: CharacterDisplayError<I2cMock> = CharacterDisplayError::AddressNotFound;
        let msg: &'static str = From::from(&err);
        assert_eq!(msg, "LCD backpack address not found");

        let err: CharacterDisplayError<I2cMock> = core::fmt::Error.into();
        assert!(matches!(err, CharacterDisplayError::FormattingError(_)));
    }
}
