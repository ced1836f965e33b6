#![doc(html_root_url = "https://docs.rs/lsm9ds0/0.1.0")]
#![cfg_attr(not(feature = "std"), no_std)]

//! ST LSM9DS0 9-axis IMU driver.
//! The package holds two I2C devices: an accelerometer/magnetometer ("XM", also carrying the
//! temperature sensor) and a gyroscope ("G").
//! Datasheet: https://www.st.com/resource/en/datasheet/lsm9ds0.pdf
use embedded_hal::i2c::{I2c, SevenBitAddress};

pub use mint;

mod bus;
pub mod data;
mod range;
mod regs;
#[cfg(feature = "std")]
mod std;

use bus::Bus;
use range::FullScale;

pub use range::{AccelRange, GyroRange, MagRange, ParseRangeError, RangeConfig};
pub use regs::{
    AccelMagRegisters, CtrlReg1G, CtrlReg1Xm, CtrlReg5Xm, CtrlReg7Xm, GyroRegisters, GYRO,
    GYRO_ALT, G_ID, XM, XM_ALT, XM_ID,
};

/// All possible errors in this crate
#[derive(Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<E> {
    /// I2C bus error
    I2c(E),

    /// Range name or register encoding that matches no full-scale selection.
    InvalidRange,
}

impl<E> From<ParseRangeError> for Error<E> {
    fn from(_: ParseRangeError) -> Self {
        Error::InvalidRange
    }
}

/// Outcome of a `WHO_AM_I` comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct IdentityCheck {
    pub expected: u8,
    pub found: u8,
}

impl IdentityCheck {
    pub fn is_ok(&self) -> bool {
        self.expected == self.found
    }
}

/// Identity of both sub-devices, as reported by [`Lsm9ds0::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct IdentityStatus {
    pub gyro: IdentityCheck,
    pub accel_mag: IdentityCheck,
}

impl IdentityStatus {
    /// Both sub-devices answered with their expected identity.
    pub fn is_ok(&self) -> bool {
        self.gyro.is_ok() && self.accel_mag.is_ok()
    }
}

pub struct Lsm9ds0<I> {
    bus: Bus<I>,
    xm: &'static AccelMagRegisters,
    g: &'static GyroRegisters,
    ranges: RangeConfig,
}

impl<I, E> Lsm9ds0<I>
where
    I: I2c<SevenBitAddress, Error = E>,
{
    /// Side-effect-free constructor.
    /// Nothing will be read or written before the first operation.
    pub fn new(i2c: I) -> Self {
        Self::with_register_maps(i2c, &XM, &GYRO)
    }

    /// Constructor for boards with non-standard register maps.
    pub fn with_register_maps(
        i2c: I,
        xm: &'static AccelMagRegisters,
        g: &'static GyroRegisters,
    ) -> Self {
        Lsm9ds0 {
            bus: Bus::new(i2c),
            xm,
            g,
            ranges: RangeConfig::default(),
        }
    }

    /// Uses the alternative addresses of both sub-devices (`SDO_XM` and `SDO_G` low).
    pub fn with_alternative_address(mut self) -> Self {
        self.xm = &XM_ALT;
        self.g = &GYRO_ALT;

        self
    }

    /// Destroy driver instance, return I2C bus instance.
    pub fn destroy(self) -> I {
        self.bus.release()
    }

    /// Checks `WHO_AM_I` of the gyroscope, then of the accelerometer/magnetometer.
    ///
    /// A mismatch is reported in the returned status and is not an error: the driver stays
    /// usable either way. Both sub-devices are always queried, even when the first read fails.
    ///
    /// # Usage Example
    ///
    /// ```rust
    /// // use your_chip_hal::I2c; // <- import your chip's I2c
    /// use lsm9ds0::Lsm9ds0;
    /// #
    /// # use lsm9ds0::{G_ID, XM_ID, GYRO};
    /// # use embedded_hal::i2c::{I2c as I2cTrait, Operation, Error, ErrorType, ErrorKind};
    /// # struct I2c {}
    /// # impl I2c { pub fn new() -> Self { I2c { } }}
    /// # #[derive(Debug)]
    /// # struct DummyError {}
    /// # impl Error for DummyError { fn kind(&self) -> ErrorKind { ErrorKind::Other } }
    /// # impl ErrorType for I2c { type Error = DummyError; }
    /// # // Each identity check is one Write/Read; answer with the ID of the addressed device.
    /// # impl I2cTrait for I2c { fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> { match operations.get_mut(1) { Some(Operation::Read(read)) => { read[0] = if address == GYRO.address { G_ID } else { XM_ID }; }, _ => {} }; Ok(()) } }
    /// #
    /// # // Actual example:
    /// let mut i2c = I2c::new(/* ... */);
    /// let mut imu = Lsm9ds0::new(i2c);
    /// let status = imu.initialize()?;
    /// assert!(status.is_ok());
    /// # Result::<(), lsm9ds0::Error<DummyError>>::Ok(())
    /// ```
    pub fn initialize(&mut self) -> Result<IdentityStatus, Error<E>> {
        let gyro = self.bus.read_u8(self.g.address, self.g.who_am_i);
        let accel_mag = self.bus.read_u8(self.xm.address, self.xm.who_am_i);

        let status = IdentityStatus {
            gyro: IdentityCheck {
                expected: self.g.who_am_i_ok,
                found: gyro.map_err(Error::I2c)?,
            },
            accel_mag: IdentityCheck {
                expected: self.xm.who_am_i_ok,
                found: accel_mag.map_err(Error::I2c)?,
            },
        };

        #[cfg(feature = "defmt-03")]
        {
            if status.gyro.is_ok() {
                defmt::info!("Gyro init success");
            } else {
                defmt::warn!("Gyro init failed: WHO_AM_I = {=u8:#x}", status.gyro.found);
            }
            if status.accel_mag.is_ok() {
                defmt::info!("Accel/Mag init success");
            } else {
                defmt::warn!(
                    "Accel/Mag init failed: WHO_AM_I = {=u8:#x}",
                    status.accel_mag.found
                );
            }
        }

        Ok(status)
    }

    /// Enables the accelerometer: 100 Hz on X, Y and Z, plus high-resolution magnetometer
    /// output. Both control registers are overwritten.
    pub fn enable_accel(&mut self) -> Result<(), Error<E>> {
        self.bus
            .write_u8(self.xm.address, self.xm.ctrl_reg1, regs::ACCEL_ENABLE.bits())
            .map_err(Error::I2c)?;
        self.bus
            .write_u8(self.xm.address, self.xm.ctrl_reg5, regs::ACCEL_HIGH_RES.bits())
            .map_err(Error::I2c)?;

        #[cfg(feature = "defmt-03")]
        defmt::trace!("Accelerometer enabled");

        Ok(())
    }

    /// Enables the gyroscope in normal mode on all axes.
    pub fn enable_gyro(&mut self) -> Result<(), Error<E>> {
        self.bus
            .write_u8(self.g.address, self.g.ctrl_reg1, regs::GYRO_ENABLE.bits())
            .map_err(Error::I2c)?;

        #[cfg(feature = "defmt-03")]
        defmt::trace!("Gyroscope enabled");

        Ok(())
    }

    /// Puts the magnetometer in continuous-conversion mode.
    pub fn enable_mag(&mut self) -> Result<(), Error<E>> {
        self.bus
            .write_u8(self.xm.address, self.xm.ctrl_reg7, regs::MAG_CONTINUOUS.bits())
            .map_err(Error::I2c)?;

        #[cfg(feature = "defmt-03")]
        defmt::trace!("Magnetometer enabled");

        Ok(())
    }

    /// Enables the temperature sensor. CTRL_REG5_XM also holds the magnetometer resolution
    /// and data rate, so only `TEMP_EN` is touched.
    pub fn enable_temp(&mut self) -> Result<(), Error<E>> {
        let temp_en = CtrlReg5Xm::TEMP_EN.bits();

        let _value = self
            .bus
            .update_bits(self.xm.address, self.xm.ctrl_reg5, temp_en, temp_en)
            .map_err(Error::I2c)?;

        #[cfg(feature = "defmt-03")]
        defmt::trace!("Temperature enabled, CTRL_REG5_XM = {=u8:#x}", _value);

        Ok(())
    }

    /// Sets the accelerometer full scale.
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), Error<E>> {
        self.write_range(self.xm.address, self.xm.ctrl_reg2, range)?;
        self.ranges.accel = range;

        #[cfg(feature = "defmt-03")]
        defmt::trace!("Accelerometer range set to {}", range);

        Ok(())
    }

    /// Sets the magnetometer full scale.
    pub fn set_mag_range(&mut self, range: MagRange) -> Result<(), Error<E>> {
        self.write_range(self.xm.address, self.xm.ctrl_reg6, range)?;
        self.ranges.mag = range;

        #[cfg(feature = "defmt-03")]
        defmt::trace!("Magnetometer range set to {}", range);

        Ok(())
    }

    /// Sets the gyroscope full scale.
    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), Error<E>> {
        self.write_range(self.g.address, self.g.ctrl_reg4, range)?;
        self.ranges.gyro = range;

        #[cfg(feature = "defmt-03")]
        defmt::trace!("Gyroscope range set to {}", range);

        Ok(())
    }

    /// Sets the accelerometer full scale by name: `"2G"`, `"4G"`, `"6G"`, `"8G"` or `"16G"`.
    pub fn set_accel_range_named(&mut self, name: &str) -> Result<(), Error<E>> {
        let range: AccelRange = name.parse()?;
        self.set_accel_range(range)
    }

    /// Sets the magnetometer full scale by name: `"2GAUSS"`, `"4GAUSS"`, `"8GAUSS"` or
    /// `"12GAUSS"`.
    pub fn set_mag_range_named(&mut self, name: &str) -> Result<(), Error<E>> {
        let range: MagRange = name.parse()?;
        self.set_mag_range(range)
    }

    /// Sets the gyroscope full scale by name: `"245DPS"`, `"500DPS"` or `"2000DPS"`.
    pub fn set_gyro_range_named(&mut self, name: &str) -> Result<(), Error<E>> {
        let range: GyroRange = name.parse()?;
        self.set_gyro_range(range)
    }

    pub fn accel_range(&self) -> AccelRange {
        self.ranges.accel
    }

    pub fn mag_range(&self) -> MagRange {
        self.ranges.mag
    }

    pub fn gyro_range(&self) -> GyroRange {
        self.ranges.gyro
    }

    /// Ranges currently used to scale readings.
    pub fn range_config(&self) -> RangeConfig {
        self.ranges
    }

    /// Reads the accelerometer full scale back from CTRL_REG2_XM.
    pub fn device_accel_range(&mut self) -> Result<AccelRange, Error<E>> {
        self.read_range(self.xm.address, self.xm.ctrl_reg2)
    }

    /// Reads the magnetometer full scale back from CTRL_REG6_XM.
    pub fn device_mag_range(&mut self) -> Result<MagRange, Error<E>> {
        self.read_range(self.xm.address, self.xm.ctrl_reg6)
    }

    /// Reads the gyroscope full scale back from CTRL_REG4_G.
    pub fn device_gyro_range(&mut self) -> Result<GyroRange, Error<E>> {
        self.read_range(self.g.address, self.g.ctrl_reg4)
    }

    /// Returns current accelerometer data in raw counts.
    pub fn read_accel_fixed(&mut self) -> Result<mint::Vector3<i16>, Error<E>> {
        self.read_vec_raw(self.xm.address, self.xm.out_x_l_a)
    }

    /// Returns current accelerometer data in g.
    pub fn read_accel(&mut self) -> Result<mint::Vector3<f32>, Error<E>> {
        let a = self.read_accel_fixed()?;
        Ok(data::scale_triple(a, self.ranges.accel.scale()))
    }

    /// Returns current magnetometer data in raw counts.
    pub fn read_mag_fixed(&mut self) -> Result<mint::Vector3<i16>, Error<E>> {
        self.read_vec_raw(self.xm.address, self.xm.out_x_l_m)
    }

    /// Returns current magnetometer data in gauss.
    pub fn read_mag(&mut self) -> Result<mint::Vector3<f32>, Error<E>> {
        let m = self.read_mag_fixed()?;
        Ok(data::scale_triple(m, self.ranges.mag.scale()))
    }

    /// Returns current gyroscope data in raw counts.
    pub fn read_gyro_fixed(&mut self) -> Result<mint::Vector3<i16>, Error<E>> {
        self.read_vec_raw(self.g.address, self.g.out_x_l)
    }

    /// Returns current gyroscope data in deg/s.
    pub fn read_gyro(&mut self) -> Result<mint::Vector3<f32>, Error<E>> {
        let g = self.read_gyro_fixed()?;
        Ok(data::scale_triple(g, self.ranges.gyro.scale()))
    }

    /// Returns the 12-bit temperature reading in 1/8 degree Celsius units.
    pub fn read_temperature_fixed(&mut self) -> Result<i16, Error<E>> {
        let mut buf = [0u8; data::TEMP_SIZE];

        self.bus
            .read_bytes(self.xm.address, self.xm.out_temp_l, &mut buf)
            .map_err(Error::I2c)?;

        Ok(data::decode_temperature_raw(&buf))
    }

    /// Returns current temperature of the chip (in degrees Celsius).
    /// The sensor is uncalibrated at the factory, so expect an offset.
    pub fn read_temperature(&mut self) -> Result<f32, Error<E>> {
        let t = self.read_temperature_fixed()?;
        Ok(t as f32 * regs::CAL_TEMP)
    }

    fn read_vec_raw(&mut self, addr: u8, reg: u8) -> Result<mint::Vector3<i16>, Error<E>> {
        let mut buf = [0u8; data::TRIPLE_SIZE];

        self.bus
            .read_bytes(addr, reg, &mut buf)
            .map_err(Error::I2c)?;

        Ok(data::decode_raw_triple(&buf))
    }

    fn write_range<R: FullScale>(&mut self, addr: u8, reg: u8, range: R) -> Result<(), Error<E>> {
        self.bus
            .update_bits(addr, reg, R::MASK, range.bits())
            .map_err(Error::I2c)?;

        Ok(())
    }

    fn read_range<R: FullScale>(&mut self, addr: u8, reg: u8) -> Result<R, Error<E>> {
        let bits = self.bus.read_u8(addr, reg).map_err(Error::I2c)?;

        R::from_bits(bits).ok_or(Error::InvalidRange)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
    use std::vec::Vec;

    #[derive(Debug, PartialEq)]
    struct BusFault;

    impl embedded_hal::i2c::Error for BusFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address)
        }
    }

    /// Register file of both sub-devices. Register pointer auto-increments only when the
    /// command byte has bit 7 set, as on the real part.
    struct MockI2c {
        xm: [u8; 128],
        g: [u8; 128],
        /// (device address, command byte) of each transaction
        commands: Vec<(u8, u8)>,
        /// (device address, register, value) of each register write
        writes: Vec<(u8, u8, u8)>,
        absent: Vec<u8>,
    }

    impl MockI2c {
        fn new() -> Self {
            let mut xm = [0; 128];
            let mut g = [0; 128];
            xm[regs::WHO_AM_I as usize] = XM_ID;
            g[regs::WHO_AM_I as usize] = G_ID;

            MockI2c {
                xm,
                g,
                commands: Vec::new(),
                writes: Vec::new(),
                absent: Vec::new(),
            }
        }

        fn device(&mut self, address: u8) -> &mut [u8; 128] {
            if address == XM.address || address == XM_ALT.address {
                &mut self.xm
            } else {
                &mut self.g
            }
        }
    }

    impl ErrorType for MockI2c {
        type Error = BusFault;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.absent.contains(&address) {
                return Err(BusFault);
            }

            let mut pointer = 0usize;
            let mut increment = false;

            for op in operations.iter_mut() {
                match op {
                    Operation::Write(bytes) => {
                        let command = bytes[0];
                        self.commands.push((address, command));
                        pointer = (command & 0x7F) as usize;
                        increment = command & 0x80 != 0;

                        for &value in &bytes[1..] {
                            self.writes.push((address, pointer as u8, value));
                            self.device(address)[pointer] = value;
                            pointer += 1;
                        }
                    }
                    Operation::Read(buf) => {
                        let file = *self.device(address);
                        for byte in buf.iter_mut() {
                            *byte = file[pointer];
                            if increment {
                                pointer += 1;
                            }
                        }
                    }
                }
            }

            Ok(())
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-6 * b.abs().max(1.0)
    }

    #[test]
    fn initialize_reports_both_identities() {
        let mut i2c = MockI2c::new();
        let status = Lsm9ds0::new(&mut i2c).initialize().unwrap();

        assert!(status.is_ok());
        assert_eq!(
            i2c.commands,
            [(GYRO.address, regs::WHO_AM_I), (XM.address, regs::WHO_AM_I)]
        );
    }

    #[test]
    fn identity_mismatch_is_not_an_error() {
        let mut i2c = MockI2c::new();
        i2c.g[regs::WHO_AM_I as usize] = 0xFF;

        let mut imu = Lsm9ds0::new(&mut i2c);
        let status = imu.initialize().unwrap();

        assert!(!status.gyro.is_ok());
        assert_eq!(status.gyro.found, 0xFF);
        assert!(status.accel_mag.is_ok());

        // the driver remains usable
        imu.enable_gyro().unwrap();
    }

    #[test]
    fn initialize_queries_second_device_after_bus_error() {
        let mut i2c = MockI2c::new();
        i2c.absent.push(GYRO.address);

        let result = Lsm9ds0::new(&mut i2c).initialize();

        assert!(matches!(result, Err(Error::I2c(BusFault))));
        assert_eq!(i2c.commands, [(XM.address, regs::WHO_AM_I)]);
    }

    #[test]
    fn alternative_address_is_used() {
        let mut i2c = MockI2c::new();
        i2c.absent.push(XM.address);
        i2c.absent.push(GYRO.address);

        let mut imu = Lsm9ds0::new(&mut i2c).with_alternative_address();
        imu.initialize().unwrap();
        imu.enable_gyro().unwrap();
        drop(imu);

        assert_eq!(i2c.writes, [(0x6A, regs::CTRL_REG1_G, 0x0F)]);
    }

    #[test]
    fn enables_overwrite_control_registers() {
        let mut i2c = MockI2c::new();
        i2c.xm[regs::CTRL_REG1_XM as usize] = 0xFF;
        i2c.xm[regs::CTRL_REG7_XM as usize] = 0xFF;

        let mut imu = Lsm9ds0::new(&mut i2c);
        imu.enable_accel().unwrap();
        imu.enable_gyro().unwrap();
        imu.enable_mag().unwrap();
        drop(imu);

        assert_eq!(
            i2c.writes,
            [
                (XM.address, regs::CTRL_REG1_XM, 0x67),
                (XM.address, regs::CTRL_REG5_XM, 0xF0),
                (GYRO.address, regs::CTRL_REG1_G, 0x0F),
                (XM.address, regs::CTRL_REG7_XM, 0x00),
            ]
        );
        // plain writes, nothing read first
        assert_eq!(i2c.commands.len(), 4);
    }

    #[test]
    fn enable_temp_sets_only_bit_7() {
        for &base in [0b0101_0000u8, 0x00, 0x7F, 0xFF].iter() {
            let mut i2c = MockI2c::new();
            i2c.xm[regs::CTRL_REG5_XM as usize] = base;

            Lsm9ds0::new(&mut i2c).enable_temp().unwrap();

            assert_eq!(i2c.xm[regs::CTRL_REG5_XM as usize], base | 0x80);
            assert_eq!(i2c.writes, [(XM.address, regs::CTRL_REG5_XM, base | 0x80)]);
        }

        let mut i2c = MockI2c::new();
        i2c.xm[regs::CTRL_REG5_XM as usize] = 0b0101_0000;
        Lsm9ds0::new(&mut i2c).enable_temp().unwrap();
        assert_eq!(i2c.xm[regs::CTRL_REG5_XM as usize], 0b1101_0000);
    }

    #[test]
    fn range_selection_replaces_only_its_field() {
        let mut i2c = MockI2c::new();
        i2c.xm[regs::CTRL_REG2_XM as usize] = 0b1100_0111 | AccelRange::G16.bits();
        i2c.xm[regs::CTRL_REG6_XM as usize] = 0b1001_1111;
        i2c.g[regs::CTRL_REG4_G as usize] = 0b1100_1111 | GyroRange::Dps2000.bits();

        let mut imu = Lsm9ds0::new(&mut i2c);
        imu.set_accel_range(AccelRange::G4).unwrap();
        imu.set_mag_range(MagRange::Gauss12).unwrap();
        imu.set_gyro_range(GyroRange::Dps500).unwrap();

        assert_eq!(imu.device_accel_range().unwrap(), AccelRange::G4);
        assert_eq!(imu.device_mag_range().unwrap(), MagRange::Gauss12);
        assert_eq!(imu.device_gyro_range().unwrap(), GyroRange::Dps500);
        drop(imu);

        assert_eq!(i2c.xm[regs::CTRL_REG2_XM as usize], 0b1100_1111);
        assert_eq!(i2c.xm[regs::CTRL_REG6_XM as usize], 0b1111_1111);
        assert_eq!(i2c.g[regs::CTRL_REG4_G as usize], 0b1101_1111);
    }

    #[test]
    fn unknown_range_name_keeps_current_range() {
        let mut i2c = MockI2c::new();

        let mut imu = Lsm9ds0::new(&mut i2c);
        imu.set_accel_range_named("4G").unwrap();

        assert!(matches!(
            imu.set_accel_range_named("3G"),
            Err(Error::InvalidRange)
        ));
        assert!(matches!(
            imu.set_mag_range_named("16GAUSS"),
            Err(Error::InvalidRange)
        ));
        assert!(matches!(
            imu.set_gyro_range_named("250DPS"),
            Err(Error::InvalidRange)
        ));

        assert_eq!(imu.accel_range(), AccelRange::G4);
        assert_eq!(imu.mag_range(), MagRange::Gauss2);
        assert_eq!(imu.gyro_range(), GyroRange::Dps245);
        drop(imu);

        // only the "4G" read-modify-write reached the bus
        assert_eq!(i2c.commands.len(), 2);
    }

    #[test]
    fn failed_range_write_keeps_current_range() {
        let mut i2c = MockI2c::new();
        i2c.absent.push(GYRO.address);

        let mut imu = Lsm9ds0::new(&mut i2c);

        assert!(imu.set_gyro_range(GyroRange::Dps2000).is_err());
        assert_eq!(imu.gyro_range(), GyroRange::Dps245);
    }

    #[test]
    fn reserved_accel_encoding_is_invalid() {
        let mut i2c = MockI2c::new();
        i2c.xm[regs::CTRL_REG2_XM as usize] = 0b0011_1000;

        let mut imu = Lsm9ds0::new(&mut i2c);

        assert!(matches!(imu.device_accel_range(), Err(Error::InvalidRange)));
    }

    #[test]
    fn accel_reading_is_scaled_by_current_range() {
        let mut i2c = MockI2c::new();
        i2c.xm[regs::OUT_X_L_A as usize..][..6].copy_from_slice(&[0xFF, 0xFF, 0x00, 0x00, 0x01, 0x00]);

        let mut imu = Lsm9ds0::new(&mut i2c);
        let a = imu.read_accel().unwrap();

        assert!(approx(a.x, -0.000061));
        assert!(approx(a.y, 0.0));
        assert!(approx(a.z, 0.000061));

        imu.set_accel_range(AccelRange::G16).unwrap();
        let a = imu.read_accel().unwrap();

        assert!(approx(a.x, -0.000732));
        assert!(approx(a.z, 0.000732));
        drop(imu);

        assert!(i2c.commands.contains(&(XM.address, 0x80 | regs::OUT_X_L_A)));
    }

    #[test]
    fn mag_and_gyro_readings_use_their_own_blocks() {
        let mut i2c = MockI2c::new();
        i2c.xm[regs::OUT_X_L_M as usize..][..6].copy_from_slice(&[0x10, 0x27, 0xF0, 0xD8, 0x00, 0x00]);
        i2c.g[regs::OUT_X_L_G as usize..][..6].copy_from_slice(&[0x64, 0x00, 0x9C, 0xFF, 0xE8, 0x03]);

        let mut imu = Lsm9ds0::new(&mut i2c);
        imu.set_gyro_range_named("2000DPS").unwrap();

        assert_eq!(
            imu.read_mag_fixed().unwrap(),
            mint::Vector3::from([10000, -10000, 0])
        );

        let m = imu.read_mag().unwrap();
        assert!(approx(m.x, 0.8));
        assert!(approx(m.y, -0.8));

        let g = imu.read_gyro().unwrap();
        assert!(approx(g.x, 7.0));
        assert!(approx(g.y, -7.0));
        assert!(approx(g.z, 70.0));
        drop(imu);

        assert!(i2c.commands.contains(&(XM.address, 0x80 | regs::OUT_X_L_M)));
        assert!(i2c.commands.contains(&(GYRO.address, 0x80 | regs::OUT_X_L_G)));
    }

    #[test]
    fn temperature_reading() {
        let mut i2c = MockI2c::new();
        i2c.xm[regs::OUT_TEMP_L_XM as usize] = 0x00;
        i2c.xm[regs::OUT_TEMP_H_XM as usize] = 0x10;

        let mut imu = Lsm9ds0::new(&mut i2c);

        assert_eq!(imu.read_temperature_fixed().unwrap(), 256);
        assert!(approx(imu.read_temperature().unwrap(), 32.0));
        drop(imu);

        assert_eq!(i2c.commands[0], (XM.address, 0x80 | regs::OUT_TEMP_L_XM));
    }

    #[test]
    fn bus_errors_propagate_without_retry() {
        let mut i2c = MockI2c::new();
        i2c.absent.push(XM.address);

        let mut imu = Lsm9ds0::new(&mut i2c);

        assert!(matches!(imu.read_accel(), Err(Error::I2c(BusFault))));
        assert!(matches!(imu.read_temperature(), Err(Error::I2c(BusFault))));
        assert!(matches!(imu.enable_temp(), Err(Error::I2c(BusFault))));
        drop(imu);

        assert!(i2c.commands.is_empty());
    }

    #[test]
    fn destroy_returns_bus() {
        let imu = Lsm9ds0::new(MockI2c::new());
        let i2c = imu.destroy();

        assert!(i2c.commands.is_empty());
    }
}
