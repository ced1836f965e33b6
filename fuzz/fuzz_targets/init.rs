#![no_main]
use libfuzzer_sys::fuzz_target;

use embedded_hal::i2c::SevenBitAddress;
use embedded_hal_fuzz::i2c::ArbitraryI2c;

fuzz_target!(|i2c: ArbitraryI2c<SevenBitAddress>| {
    let mut imu = lsm9ds0::Lsm9ds0::new(i2c);

    // Discard the result as we only care about whether it crashes, not whether there
    // is an error.
    let _ = imu.initialize();
});
