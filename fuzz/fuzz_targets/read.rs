#![no_main]
/// Full bring-up and one poll of every sensor, driven by arbitrary bus responses.
use libfuzzer_sys::fuzz_target;

use embedded_hal::i2c::SevenBitAddress;
use embedded_hal_fuzz::i2c::ArbitraryI2c;
use lsm9ds0::{AccelRange, GyroRange, Lsm9ds0, MagRange};

fuzz_target!(|i2c: ArbitraryI2c<SevenBitAddress>| {
    let mut imu = Lsm9ds0::new(i2c).with_alternative_address();

    let _ = imu.initialize();

    let _ = imu.enable_accel();
    let _ = imu.enable_mag();
    let _ = imu.enable_gyro();
    let _ = imu.enable_temp();

    let _ = imu.set_accel_range(AccelRange::G16);
    let _ = imu.set_mag_range(MagRange::Gauss12);
    let _ = imu.set_gyro_range(GyroRange::Dps2000);

    let _ = imu.device_accel_range();
    let _ = imu.device_mag_range();
    let _ = imu.device_gyro_range();

    let _accel = imu.read_accel();
    let _mag = imu.read_mag();
    let _gyro = imu.read_gyro();
    let _temp = imu.read_temperature();
});
