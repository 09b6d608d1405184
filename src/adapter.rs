use bitfield::bitfield;
use core::marker::PhantomData;
use embedded_hal::{delay::DelayNs, i2c};

use crate::{CharacterDisplayError, DeviceSetupConfig};

/// Time to wait after each write to the PCF8574 output latch. Keeps the enable pulse wider than
/// the HD44780 minimum even on fast I2C buses.
pub const PULSE_SETTLE_US: u32 = 50;

// Pin mapping of the PCF8574 / PCF8574A based 4-bit LCD backpacks
bitfield! {
    pub struct PCF8574BitField(u8);
    impl Debug;
    impl BitAnd;
    pub rs, set_rs: 0, 0;
    pub rw, set_rw: 1, 1;
    pub enable, set_enable: 2, 2;
    pub backlight, set_backlight: 3, 3;
    pub data, set_data: 7, 4;
}

impl Clone for PCF8574BitField {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

/// Adapter based on the PCF8574 I2C GPIO expander interfacing with the HD44780 LCD controller
/// via a 4-bit interface. Holds the expander output latch image; the backlight bit in it persists
/// across transmissions until explicitly changed.
pub struct GenericPCF8574TAdapter<I2C> {
    bits: PCF8574BitField,
    _marker: PhantomData<I2C>,
}

impl<I2C> Default for GenericPCF8574TAdapter<I2C>
where
    I2C: i2c::I2c,
{
    fn default() -> Self {
        Self {
            bits: PCF8574BitField(0),
            _marker: PhantomData,
        }
    }
}

impl<I2C> GenericPCF8574TAdapter<I2C>
where
    I2C: i2c::I2c,
{
    pub fn backlight(&self) -> bool {
        self.bits.backlight() != 0
    }

    /// Sets the backlight bit. Nothing is written to the bus; the new value goes out with the
    /// next transmission.
    pub fn set_backlight(&mut self, value: bool) {
        self.bits.set_backlight(value as u8);
    }

    fn write_bits_to_gpio<DELAY>(
        &self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DELAY: DelayNs,
    {
        config
            .i2c
            .write(config.address, &[self.bits.0])
            .map_err(CharacterDisplayError::I2cError)?;
        config.delay.delay_us(PULSE_SETTLE_US);
        Ok(())
    }

    /// writes a full byte to the controller, high nibble first. If `rs_setting` is `true`, the data is
    /// written to the data register, either the CGRAM or DDRAM, depending on prior command sent. If
    /// `rs_setting` is `false`, the data is written to command register.
    pub fn write_byte_to_controller<DELAY>(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
        rs_setting: bool,
        value: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DELAY: DelayNs,
    {
        self.write_nibble_to_controller(config, rs_setting, value >> 4)?;
        self.write_nibble_to_controller(config, rs_setting, value & 0x0F)
    }

    /// writes the lower nibble of `value` to the controller as one enable pulse: the byte is latched
    /// with enable low, then enable is raised, then dropped again. Used directly only for the 4-bit
    /// mode forcing sequence during initialization.
    pub fn write_nibble_to_controller<DELAY>(
        &mut self,
        config: &mut DeviceSetupConfig<I2C, DELAY>,
        rs_setting: bool,
        value: u8,
    ) -> Result<(), CharacterDisplayError<I2C>>
    where
        DELAY: DelayNs,
    {
        self.bits.set_rs(rs_setting as u8);
        self.bits.set_rw(0);
        self.bits.set_data(value & 0x0F);

        self.bits.set_enable(0);
        self.write_bits_to_gpio(config)?;
        self.bits.set_enable(1);
        self.write_bits_to_gpio(config)?;
        self.bits.set_enable(0);
        self.write_bits_to_gpio(config)?;

        Ok(())
    }
}
