// HD44780 Support
// The HD44780 struct holds the session state of one display (ready or not) and the PCF8574 adapter
// with its persisted backlight bit. Every action takes the `DeviceSetupConfig` holding the I2C bus,
// address and delay provider, and is expressed as commands and data bytes sent through the adapter.
//

use core::marker::PhantomData;
use embedded_hal::{delay::DelayNs, i2c};

use crate::{
    adapter::GenericPCF8574TAdapter,
    discovery::discover_address,
    glyph::{Glyph, GlyphSource, CROSS_SLOT, HEART_SLOT},
    CharacterDisplayError, DeviceSetupConfig, AUTO_DETECT_ADDRESS,
};

// commands
const LCD_CMD_NOOP: u8 = 0x00; //  Not a command; only used to push the expander latch out
const LCD_CMD_CLEARDISPLAY: u8 = 0x01; //  Clear display, set cursor position to zero
const LCD_CMD_ENTRYMODESET: u8 = 0x04; //  Sets the entry mode
const LCD_CMD_DISPLAYCONTROL: u8 = 0x08; //  Controls the display; does stuff like turning it off and on
const LCD_CMD_CURSORSHIFT: u8 = 0x10; //  Lets you move the cursor or the display
const LCD_CMD_FUNCTIONSET: u8 = 0x20; //  Used to send the function to set to the display
const LCD_CMD_SETCGRAMADDR: u8 = 0x40; //  Used to set the CGRAM (character generator RAM) with characters
const LCD_CMD_SETDDRAMADDR: u8 = 0x80; //  Used to set the DDRAM (Display Data RAM)

// flags for display entry mode
const LCD_FLAG_ENTRYLEFT: u8 = 0x02; //  Uset to set text to flow from left to right
const LCD_FLAG_ENTRYSHIFTDECREMENT: u8 = 0x00; //  Used to 'left justify' text from the cursor

// flags for display on/off control
const LCD_FLAG_DISPLAYON: u8 = 0x04; //  Turns the display on
const LCD_FLAG_DISPLAYOFF: u8 = 0x00; //  Turns the display off
const LCD_FLAG_CURSOROFF: u8 = 0x00; //  Turns the cursor off
const LCD_FLAG_BLINKOFF: u8 = 0x00; //  Turns off the blinking cursor

// flags for display/cursor shift
const LCD_FLAG_DISPLAYMOVE: u8 = 0x08; //  Flag for moving the display
const LCD_FLAG_MOVERIGHT: u8 = 0x04; //  Flag for moving right
const LCD_FLAG_MOVELEFT: u8 = 0x00; //  Flag for moving left

// flags for function set
const LCD_FLAG_4BITMODE: u8 = 0x00; //  LCD 4 bit mode
const LCD_FLAG_2LINE: u8 = 0x08; //  LCD 2 line mode
const LCD_FLAG_5x8_DOTS: u8 = 0x00; //  8 pixel high font mode

// nibbles of the 4-bit mode forcing sequence
const LCD_INIT_NIBBLE_8BIT: u8 = 0x03;
const LCD_INIT_NIBBLE_4BIT: u8 = 0x02;

// DDRAM offsets of the two rows of a 16x2 display
const LCD_ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// Wait after power up before the controller accepts the forcing sequence.
pub const POWER_UP_DELAY_MS: u32 = 50;
/// Wait after each nibble of the forcing sequence.
pub const FORCE_4BIT_DELAY_MS: u32 = 5;
/// Wait after a clear display command.
pub const CLEAR_DELAY_MS: u32 = 2;
/// Wait before moving the address counter into CG-RAM.
pub const CGRAM_SETUP_DELAY_MS: u32 = 5;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Lifecycle of a display session
pub enum DisplayState {
    /// `init` has not completed successfully. Display operations are refused.
    Uninitialized,
    /// The controller is in 4-bit mode and configured.
    Ready,
}

pub struct HD44780<I2C, DELAY>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    adapter: GenericPCF8574TAdapter<I2C>,
    state: DisplayState,
    _delay: PhantomData<DELAY>,
}

impl<I2C, DELAY> Default for HD44780<I2C, DELAY>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self {
            adapter: GenericPCF8574TAdapter::default(),
            state: DisplayState::Uninitialized,
            _delay: PhantomData,
        }
    }
}

impl<I2C, DELAY> HD44780<I2C, DELAY>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn backlight_enabled(&self) -> bool {
        self.adapter.backlight()
    }

    /// Runs the power-on sequence. Resolves the I2C address first when the configured address is 0.
    /// A failure at any step leaves the display `Uninitialized`; the whole sequence may be retried.
    pub fn init(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.state = DisplayState::Uninitialized;
        if config.address == AUTO_DETECT_ADDRESS {
            config.address = discover_address(&mut config.i2c)?;
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("initializing LCD at {=u8:#x}", config.address);

        self.adapter.set_backlight(true);
        config.delay.delay_ms(POWER_UP_DELAY_MS);

        // force the controller into 8-bit mode from whatever state it is in, then switch to 4-bit mode
        for _ in 0..3 {
            self.adapter
                .write_nibble_to_controller(config, false, LCD_INIT_NIBBLE_8BIT)?;
            config.delay.delay_ms(FORCE_4BIT_DELAY_MS);
        }
        self.adapter
            .write_nibble_to_controller(config, false, LCD_INIT_NIBBLE_4BIT)?;
        config.delay.delay_ms(FORCE_4BIT_DELAY_MS);

        self.send_command(
            config,
            LCD_CMD_FUNCTIONSET | LCD_FLAG_4BITMODE | LCD_FLAG_2LINE | LCD_FLAG_5x8_DOTS,
        )?;
        self.send_command(
            config,
            LCD_CMD_DISPLAYCONTROL | LCD_FLAG_DISPLAYON | LCD_FLAG_CURSOROFF | LCD_FLAG_BLINKOFF,
        )?;
        self.send_command(
            config,
            LCD_CMD_ENTRYMODESET | LCD_FLAG_ENTRYLEFT | LCD_FLAG_ENTRYSHIFTDECREMENT,
        )?;
        self.send_command(config, LCD_CMD_CLEARDISPLAY)?;
        config.delay.delay_ms(CLEAR_DELAY_MS);

        self.program_cgram(config, HEART_SLOT, Glyph::HEART.rows())?;
        self.program_cgram(config, CROSS_SLOT, Glyph::CROSS.rows())?;

        self.state = DisplayState::Ready;
        #[cfg(feature = "defmt")]
        defmt::debug!("LCD at {=u8:#x} ready", config.address);
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), CharacterDisplayError<I2C>> {
        match self.state {
            DisplayState::Ready => Ok(()),
            DisplayState::Uninitialized => Err(CharacterDisplayError::NotInitialized),
        }
    }

    fn send_command(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
        command: u8,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.adapter.write_byte_to_controller(config, false, command)
    }

    fn send_data(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
        data: u8,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.adapter.write_byte_to_controller(config, true, data)
    }

    /// Points the address counter at a CG-RAM slot and writes the 8 rows. The controller
    /// auto-increments the address after each row.
    fn program_cgram(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
        slot: u8,
        rows: [u8; 8],
    ) -> Result<(), CharacterDisplayError<I2C>> {
        config.delay.delay_ms(CGRAM_SETUP_DELAY_MS);
        self.send_command(config, LCD_CMD_SETCGRAMADDR | ((slot & 0x7) << 3))?;
        for row in rows {
            self.send_data(config, row)?;
        }
        Ok(())
    }

    /// Sends a raw command byte
    pub fn command(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
        command: u8,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.ensure_ready()?;
        self.send_command(config, command)
    }

    /// Sends a raw character code to the current DDRAM or CG-RAM address
    pub fn write_char(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
        data: u8,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.ensure_ready()?;
        self.send_data(config, data)
    }

    pub fn clear(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.command(config, LCD_CMD_CLEARDISPLAY)?;
        config.delay.delay_ms(CLEAR_DELAY_MS);
        Ok(())
    }

    /// Set the cursor position. Any row above 0 selects the second row. Neither value is range
    /// checked: a column past 15 addresses DDRAM that a 16 column display does not show.
    pub fn set_cursor(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
        col: u8,
        row: u8,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        let row_offset = LCD_ROW_OFFSETS[(row > 0) as usize];
        self.command(
            config,
            (LCD_CMD_SETDDRAMADDR | row_offset).wrapping_add(col),
        )
    }

    /// Prints a string at the current cursor position. Characters are sent as their code point
    /// truncated to a byte. There is no line wrapping.
    pub fn print(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
        text: &str,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.ensure_ready()?;
        for c in text.chars() {
            self.send_data(config, c as u8)?;
        }
        Ok(())
    }

    pub fn show_string(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
        text: &str,
        col: u8,
        row: u8,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.set_cursor(config, col, row)?;
        self.print(config, text)
    }

    pub fn show_number(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
        number: i32,
        col: u8,
        row: u8,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.set_cursor(config, col, row)?;
        let mut writer = DataWriter {
            driver: self,
            config,
            error: None,
        };
        if core::fmt::write(&mut writer, format_args!("{}", number)).is_err() {
            return Err(writer
                .error
                .unwrap_or(CharacterDisplayError::FormattingError(core::fmt::Error)));
        }
        Ok(())
    }

    /// Programs a glyph into a CG-RAM slot (0-7). A `None` glyph is ignored so callers holding an
    /// optional bitmap can pass it straight through.
    pub fn define_glyph<G>(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
        glyph: Option<&G>,
        slot: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        G: GlyphSource + ?Sized,
    {
        self.ensure_ready()?;
        let Some(glyph) = glyph else {
            return Ok(());
        };
        self.program_cgram(config, slot, Glyph::from_source(glyph).rows())
    }

    /// Shows the glyph in CG-RAM `slot` at the given position. Character codes 0-7 map to the slots.
    pub fn show_glyph(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
        slot: u8,
        col: u8,
        row: u8,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.set_cursor(config, col, row)?;
        self.write_char(config, slot)
    }

    pub fn turn_on(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.command(
            config,
            LCD_CMD_DISPLAYCONTROL | LCD_FLAG_DISPLAYON | LCD_FLAG_CURSOROFF | LCD_FLAG_BLINKOFF,
        )
    }

    pub fn turn_off(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.command(
            config,
            LCD_CMD_DISPLAYCONTROL | LCD_FLAG_DISPLAYOFF | LCD_FLAG_CURSOROFF | LCD_FLAG_BLINKOFF,
        )
    }

    /// Sets the backlight on or off. The backlight line only changes when the expander latch is
    /// written, so a no-op command is sent to apply it right away.
    pub fn backlight(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
        on: bool,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.ensure_ready()?;
        self.adapter.set_backlight(on);
        self.send_command(config, LCD_CMD_NOOP)
    }

    /// Shift the whole display content one position left. The cursor does not move.
    pub fn shift_left(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.command(
            config,
            LCD_CMD_CURSORSHIFT | LCD_FLAG_DISPLAYMOVE | LCD_FLAG_MOVELEFT,
        )
    }

    /// Shift the whole display content one position right. The cursor does not move.
    pub fn shift_right(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>> {
        self.command(
            config,
            LCD_CMD_CURSORSHIFT | LCD_FLAG_DISPLAYMOVE | LCD_FLAG_MOVERIGHT,
        )
    }
}

/// Adapts the data channel to `core::fmt::Write`, keeping the I2C error that `fmt` would otherwise
/// flatten into `core::fmt::Error`.
struct DataWriter<'a, I2C, DELAY>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    driver: &'a mut HD44780<I2C, DELAY>,
    config: &'a mut DeviceSetupConfig<I2C, DELAY>,
    error: Option<CharacterDisplayError<I2C>>,
}

impl<I2C, DELAY> core::fmt::Write for DataWriter<'_, I2C, DELAY>
where
    I2C: i2c::I2c,
    DELAY: DelayNs,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.driver.print(self.config, s).map_err(|e| {
            self.error = Some(e);
            core::fmt::Error
        })
    }
}
