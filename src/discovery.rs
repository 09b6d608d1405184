//! I2C address auto-detection for PCF8574 / PCF8574A backpacks.
//!
//! The expander has no identification register, so presence is inferred from how its quasi-bidirectional
//! port reads back after being driven high and then low. This is a best-effort heuristic: the sentinel
//! writes and expected read-back values below must be kept as they are, since boards in the field are
//! known to answer them this way.

use core::ops::RangeInclusive;
use embedded_hal::i2c;

use crate::CharacterDisplayError;

/// Address range of the PCF8574, scanned first.
pub const PCF8574_ADDRESS_RANGE: RangeInclusive<u8> = 0x20..=0x27;
/// Address range of the PCF8574A, scanned when nothing answers in the PCF8574 range.
pub const PCF8574A_ADDRESS_RANGE: RangeInclusive<u8> = 0x38..=0x3F;

// the 32 bit value -1
const PROBE_HIGH_PATTERN: [u8; 4] = [0xFF; 4];
// the 16 bit value 0
const PROBE_LOW_PATTERN: [u8; 2] = [0x00; 2];

const EXPECTED_HIGH_READBACK: i8 = 7;
const EXPECTED_LOW_READBACK: u8 = 0;

/// Scans the PCF8574 and then the PCF8574A address range in ascending order and returns the first
/// address whose read-back matches a PCF8574 driving an HD44780 backpack. A bus error on a candidate,
/// such as no acknowledge, rules that candidate out and the scan moves on.
pub fn discover_address<I2C>(i2c: &mut I2C) -> Result<u8, CharacterDisplayError<I2C>>
where
    I2C: i2c::I2c,
{
    for address in PCF8574_ADDRESS_RANGE.chain(PCF8574A_ADDRESS_RANGE) {
        match probe(i2c, address) {
            Ok(true) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("LCD backpack found at {=u8:#x}", address);
                return Ok(address);
            }
            Ok(false) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("no LCD backpack at {=u8:#x}", address);
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::trace!(
                    "probe of {=u8:#x} failed: {}",
                    address,
                    i2c::Error::kind(&_e)
                );
            }
        }
    }
    #[cfg(feature = "defmt")]
    defmt::warn!("no LCD backpack found on the bus");
    Err(CharacterDisplayError::AddressNotFound)
}

/// Runs the two-step probe on one address. `Ok(true)` if both read-backs match.
fn probe<I2C>(i2c: &mut I2C, address: u8) -> Result<bool, I2C::Error>
where
    I2C: i2c::I2c,
{
    let mut buffer = [0u8; 1];

    i2c.write(address, &PROBE_HIGH_PATTERN)?;
    i2c.read(address, &mut buffer)?;
    // read back is a signed byte and the remainder is truncating, so 0xF7 does not count as 7
    let high_readback = (buffer[0] as i8) % 16;

    i2c.write(address, &PROBE_LOW_PATTERN)?;
    i2c.read(address, &mut buffer)?;
    let low_readback = buffer[0];

    Ok(high_readback == EXPECTED_HIGH_READBACK && low_readback == EXPECTED_LOW_READBACK)
}
