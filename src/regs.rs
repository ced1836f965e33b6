#![allow(dead_code)]

#[cfg(not(feature = "defmt-03"))]
use bitflags::bitflags;
#[cfg(feature = "defmt-03")]
use defmt::bitflags;

/// Auto-increment flag for multi-byte reads.
pub(crate) const AUTO_INCREMENT: u8 = 0x80;

pub(crate) const XM_DEFAULT_ADDR: u8 = 0x1D;
pub(crate) const XM_ALTERNATE_ADDR: u8 = 0x1E;
pub(crate) const G_DEFAULT_ADDR: u8 = 0x6B;
pub(crate) const G_ALTERNATE_ADDR: u8 = 0x6A;

pub const XM_ID: u8 = 0x49;
pub const G_ID: u8 = 0xD4;

pub(crate) const WHO_AM_I: u8 = 0x0F;

/// Accelerometer/magnetometer registers
pub(crate) const OUT_TEMP_L_XM: u8 = 0x05;
pub(crate) const OUT_TEMP_H_XM: u8 = 0x06;
pub(crate) const STATUS_REG_M: u8 = 0x07;
pub(crate) const OUT_X_L_M: u8 = 0x08;
pub(crate) const CTRL_REG0_XM: u8 = 0x1F;
pub(crate) const CTRL_REG1_XM: u8 = 0x20;
pub(crate) const CTRL_REG2_XM: u8 = 0x21;
pub(crate) const CTRL_REG3_XM: u8 = 0x22;
pub(crate) const CTRL_REG4_XM: u8 = 0x23;
pub(crate) const CTRL_REG5_XM: u8 = 0x24;
pub(crate) const CTRL_REG6_XM: u8 = 0x25;
pub(crate) const CTRL_REG7_XM: u8 = 0x26;
pub(crate) const STATUS_REG_A: u8 = 0x27;
pub(crate) const OUT_X_L_A: u8 = 0x28;

/// Gyroscope registers
pub(crate) const CTRL_REG1_G: u8 = 0x20;
pub(crate) const CTRL_REG2_G: u8 = 0x21;
pub(crate) const CTRL_REG3_G: u8 = 0x22;
pub(crate) const CTRL_REG4_G: u8 = 0x23;
pub(crate) const CTRL_REG5_G: u8 = 0x24;
pub(crate) const STATUS_REG_G: u8 = 0x27;
pub(crate) const OUT_X_L_G: u8 = 0x28;

/// Register layout of the accelerometer/magnetometer sub-device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct AccelMagRegisters {
    pub address: u8,
    pub who_am_i: u8,
    pub who_am_i_ok: u8,
    pub ctrl_reg1: u8,
    pub ctrl_reg2: u8,
    pub ctrl_reg5: u8,
    pub ctrl_reg6: u8,
    pub ctrl_reg7: u8,
    pub out_temp_l: u8,
    pub out_x_l_m: u8,
    pub out_x_l_a: u8,
}

/// Register layout of the gyroscope sub-device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct GyroRegisters {
    pub address: u8,
    pub who_am_i: u8,
    pub who_am_i_ok: u8,
    pub ctrl_reg1: u8,
    pub ctrl_reg4: u8,
    pub out_x_l: u8,
}

impl AccelMagRegisters {
    const fn at(address: u8) -> Self {
        AccelMagRegisters {
            address,
            who_am_i: WHO_AM_I,
            who_am_i_ok: XM_ID,
            ctrl_reg1: CTRL_REG1_XM,
            ctrl_reg2: CTRL_REG2_XM,
            ctrl_reg5: CTRL_REG5_XM,
            ctrl_reg6: CTRL_REG6_XM,
            ctrl_reg7: CTRL_REG7_XM,
            out_temp_l: OUT_TEMP_L_XM,
            out_x_l_m: OUT_X_L_M,
            out_x_l_a: OUT_X_L_A,
        }
    }
}

impl GyroRegisters {
    const fn at(address: u8) -> Self {
        GyroRegisters {
            address,
            who_am_i: WHO_AM_I,
            who_am_i_ok: G_ID,
            ctrl_reg1: CTRL_REG1_G,
            ctrl_reg4: CTRL_REG4_G,
            out_x_l: OUT_X_L_G,
        }
    }
}

/// Accelerometer/magnetometer at `SDO_XM` high (SparkFun 9DOF default).
pub const XM: AccelMagRegisters = AccelMagRegisters::at(XM_DEFAULT_ADDR);
/// Accelerometer/magnetometer at `SDO_XM` low.
pub const XM_ALT: AccelMagRegisters = AccelMagRegisters::at(XM_ALTERNATE_ADDR);
/// Gyroscope at `SDO_G` high (SparkFun 9DOF default).
pub const GYRO: GyroRegisters = GyroRegisters::at(G_DEFAULT_ADDR);
/// Gyroscope at `SDO_G` low.
pub const GYRO_ALT: GyroRegisters = GyroRegisters::at(G_ALTERNATE_ADDR);

/// Temperature sensitivity, 8 LSB per degree Celsius.
pub(crate) const CAL_TEMP: f32 = 1.0 / 8.0;

bitflags! {
    /// CTRL_REG1_XM: acceleration data rate and axis enables.
    #[cfg_attr(not(feature = "defmt-03"), derive(Debug, Clone, Copy, PartialEq, Eq))]
    pub struct CtrlReg1Xm: u8 {
        const AODR_3 = 0b1000_0000;
        const AODR_2 = 0b0100_0000;
        const AODR_1 = 0b0010_0000;
        const AODR_0 = 0b0001_0000;
        const BDU = 0b0000_1000;
        const AZEN = 0b0000_0100;
        const AYEN = 0b0000_0010;
        const AXEN = 0b0000_0001;

        const AODR_100HZ = Self::AODR_2.bits() | Self::AODR_1.bits();
    }
}

bitflags! {
    /// CTRL_REG5_XM: temperature enable, magnetic resolution and data rate.
    #[cfg_attr(not(feature = "defmt-03"), derive(Debug, Clone, Copy, PartialEq, Eq))]
    pub struct CtrlReg5Xm: u8 {
        const TEMP_EN = 0b1000_0000;
        const M_RES_1 = 0b0100_0000;
        const M_RES_0 = 0b0010_0000;
        const M_ODR_2 = 0b0001_0000;
        const M_ODR_1 = 0b0000_1000;
        const M_ODR_0 = 0b0000_0100;
        const LIR2 = 0b0000_0010;
        const LIR1 = 0b0000_0001;

        const M_RES_HIGH = Self::M_RES_1.bits() | Self::M_RES_0.bits();
        const M_ODR_50HZ = Self::M_ODR_2.bits();
    }
}

bitflags! {
    /// CTRL_REG7_XM: magnetic sensor mode.
    #[cfg_attr(not(feature = "defmt-03"), derive(Debug, Clone, Copy, PartialEq, Eq))]
    pub struct CtrlReg7Xm: u8 {
        const AHPM_1 = 0b1000_0000;
        const AHPM_0 = 0b0100_0000;
        const AFDS = 0b0010_0000;
        const MLP = 0b0000_0100;
        const MD_1 = 0b0000_0010;
        const MD_0 = 0b0000_0001;

        const MD_CONTINUOUS = 0;
    }
}

bitflags! {
    /// CTRL_REG1_G: gyroscope data rate, power and axis enables.
    #[cfg_attr(not(feature = "defmt-03"), derive(Debug, Clone, Copy, PartialEq, Eq))]
    pub struct CtrlReg1G: u8 {
        const DR_1 = 0b1000_0000;
        const DR_0 = 0b0100_0000;
        const BW_1 = 0b0010_0000;
        const BW_0 = 0b0001_0000;
        const PD = 0b0000_1000;
        const ZEN = 0b0000_0100;
        const XEN = 0b0000_0010;
        const YEN = 0b0000_0001;
    }
}

/// 100 Hz, X/Y/Z enabled.
pub(crate) const ACCEL_ENABLE: CtrlReg1Xm = CtrlReg1Xm::AODR_100HZ
    .union(CtrlReg1Xm::AZEN)
    .union(CtrlReg1Xm::AYEN)
    .union(CtrlReg1Xm::AXEN);

/// Temperature on, high magnetic resolution, 50 Hz magnetic data rate.
pub(crate) const ACCEL_HIGH_RES: CtrlReg5Xm = CtrlReg5Xm::TEMP_EN
    .union(CtrlReg5Xm::M_RES_HIGH)
    .union(CtrlReg5Xm::M_ODR_50HZ);

/// Normal power mode, all axes.
pub(crate) const GYRO_ENABLE: CtrlReg1G = CtrlReg1G::PD
    .union(CtrlReg1G::ZEN)
    .union(CtrlReg1G::XEN)
    .union(CtrlReg1G::YEN);

pub(crate) const MAG_CONTINUOUS: CtrlReg7Xm = CtrlReg7Xm::MD_CONTINUOUS;
