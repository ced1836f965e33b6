use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::regs;

/// Register access shared by both sub-devices. Each call addresses its
/// peripheral explicitly, the bus keeps no notion of a selected device.
pub(crate) struct Bus<I> {
    i2c: I,
}

impl<I, E> Bus<I>
where
    I: I2c<SevenBitAddress, Error = E>,
{
    pub(crate) fn new(i2c: I) -> Self {
        Bus { i2c }
    }

    pub(crate) fn release(self) -> I {
        self.i2c
    }

    pub(crate) fn read_u8(&mut self, addr: u8, reg: u8) -> Result<u8, E> {
        let mut byte: [u8; 1] = [0; 1];

        self.i2c.write_read(addr, &[reg], &mut byte)?;

        Ok(byte[0])
    }

    pub(crate) fn write_u8(&mut self, addr: u8, reg: u8, value: u8) -> Result<(), E> {
        self.i2c.write(addr, &[reg, value])
    }

    /// Multi-byte read starting at `reg`, with address auto-increment.
    pub(crate) fn read_bytes(&mut self, addr: u8, reg: u8, buf: &mut [u8]) -> Result<(), E> {
        self.i2c
            .write_read(addr, &[regs::AUTO_INCREMENT | reg], buf)
    }

    /// Replaces the bits under `mask` with `bits`, leaving the rest of the register intact.
    pub(crate) fn update_bits(&mut self, addr: u8, reg: u8, mask: u8, bits: u8) -> Result<u8, E> {
        let prev = self.read_u8(addr, reg)?;
        let value = (prev & !mask) | (bits & mask);

        self.write_u8(addr, reg, value)?;

        Ok(value)
    }
}
