use linux_embedded_hal::I2cdev;
use lsm9ds0::Lsm9ds0;

fn main() {
    let dev = I2cdev::new("/dev/i2c-1").unwrap();
    let mut imu = Lsm9ds0::new(dev);

    let status = imu
        .initialize()
        .expect("An error occurred while reading the IMU identity");

    if status.gyro.is_ok() {
        println!("Gyro init success!");
    } else {
        println!("Gyro init failed (WHO_AM_I = {:#04x})", status.gyro.found);
    }
    if status.accel_mag.is_ok() {
        println!("Accel/Mag init success!");
    } else {
        println!(
            "Accel/Mag init failed (WHO_AM_I = {:#04x})",
            status.accel_mag.found
        );
    }

    imu.enable_accel().unwrap();
    imu.enable_mag().unwrap();
    imu.enable_gyro().unwrap();
    imu.enable_temp().unwrap();

    // Options: "2G", "4G", "6G", "8G", "16G"
    imu.set_accel_range_named("2G").unwrap();
    // Options: "2GAUSS", "4GAUSS", "8GAUSS", "12GAUSS"
    imu.set_mag_range_named("2GAUSS").unwrap();
    // Options: "245DPS", "500DPS", "2000DPS"
    imu.set_gyro_range_named("245DPS").unwrap();

    loop {
        match imu.read_accel() {
            Ok(a) => println!("Accel: {}, {}, {}", a.x, a.y, a.z),
            Err(e) => eprintln!("{:?}", e),
        }
        match imu.read_mag() {
            Ok(m) => println!("Mag: {}, {}, {}", m.x, m.y, m.z),
            Err(e) => eprintln!("{:?}", e),
        }
        match imu.read_gyro() {
            Ok(g) => println!("Gyro: {}, {}, {}", g.x, g.y, g.z),
            Err(e) => eprintln!("{:?}", e),
        }
        match imu.read_temperature() {
            Ok(t) => println!("Temperature: {}", t),
            Err(e) => eprintln!("{:?}", e),
        }

        std::thread::sleep(std::time::Duration::from_millis(100));
    }
}
