use core::str::FromStr;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const ACCEL_RANGE_MASK: u8 = 0b0011_1000;
const MAG_RANGE_MASK: u8 = 0b0110_0000;
const GYRO_RANGE_MASK: u8 = 0b0011_0000;

/// Range name that matches none of the supported full-scale selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct ParseRangeError;

/// A full-scale selection: a register bit-field plus the sensitivity it implies.
pub(crate) trait FullScale: Copy {
    /// Bits of the control register owned by this selection.
    const MASK: u8;

    fn bits(self) -> u8;

    /// Physical units per LSB.
    fn scale(self) -> f32;

    fn from_bits(bits: u8) -> Option<Self>;
}

/// Accelerometer full scale, CTRL_REG2_XM `AFS[2:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
#[allow(clippy::unusual_byte_groupings)]
pub enum AccelRange {
    G2 = 0b00_000_000,
    G4 = 0b00_001_000,
    G6 = 0b00_010_000,
    G8 = 0b00_011_000,
    G16 = 0b00_100_000,
}

/// Magnetometer full scale, CTRL_REG6_XM `MFS[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
#[allow(clippy::unusual_byte_groupings)]
pub enum MagRange {
    Gauss2 = 0b0_00_00000,
    Gauss4 = 0b0_01_00000,
    Gauss8 = 0b0_10_00000,
    Gauss12 = 0b0_11_00000,
}

/// Gyroscope full scale, CTRL_REG4_G `FS[1:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
#[allow(clippy::unusual_byte_groupings)]
pub enum GyroRange {
    Dps245 = 0b00_00_0000,
    Dps500 = 0b00_01_0000,
    Dps2000 = 0b00_10_0000,
}

impl Default for AccelRange {
    fn default() -> Self {
        AccelRange::G2
    }
}

impl Default for MagRange {
    fn default() -> Self {
        MagRange::Gauss2
    }
}

impl Default for GyroRange {
    fn default() -> Self {
        GyroRange::Dps245
    }
}

impl AccelRange {
    /// Sensitivity in g/LSB.
    pub fn scale(self) -> f32 {
        match self {
            AccelRange::G2 => 0.000061,
            AccelRange::G4 => 0.000122,
            AccelRange::G6 => 0.000183,
            AccelRange::G8 => 0.000244,
            AccelRange::G16 => 0.000732,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AccelRange::G2 => "2G",
            AccelRange::G4 => "4G",
            AccelRange::G6 => "6G",
            AccelRange::G8 => "8G",
            AccelRange::G16 => "16G",
        }
    }
}

impl MagRange {
    /// Sensitivity in gauss/LSB.
    pub fn scale(self) -> f32 {
        match self {
            MagRange::Gauss2 => 0.00008,
            MagRange::Gauss4 => 0.00016,
            MagRange::Gauss8 => 0.00032,
            MagRange::Gauss12 => 0.00048,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MagRange::Gauss2 => "2GAUSS",
            MagRange::Gauss4 => "4GAUSS",
            MagRange::Gauss8 => "8GAUSS",
            MagRange::Gauss12 => "12GAUSS",
        }
    }
}

impl GyroRange {
    /// Sensitivity in dps/LSB.
    pub fn scale(self) -> f32 {
        match self {
            GyroRange::Dps245 => 0.00875,
            GyroRange::Dps500 => 0.0175,
            GyroRange::Dps2000 => 0.07,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GyroRange::Dps245 => "245DPS",
            GyroRange::Dps500 => "500DPS",
            GyroRange::Dps2000 => "2000DPS",
        }
    }
}

impl FullScale for AccelRange {
    const MASK: u8 = ACCEL_RANGE_MASK;

    fn bits(self) -> u8 {
        self as u8
    }

    fn scale(self) -> f32 {
        AccelRange::scale(self)
    }

    fn from_bits(bits: u8) -> Option<Self> {
        AccelRange::from_u8(bits & Self::MASK)
    }
}

impl FullScale for MagRange {
    const MASK: u8 = MAG_RANGE_MASK;

    fn bits(self) -> u8 {
        self as u8
    }

    fn scale(self) -> f32 {
        MagRange::scale(self)
    }

    fn from_bits(bits: u8) -> Option<Self> {
        MagRange::from_u8(bits & Self::MASK)
    }
}

impl FullScale for GyroRange {
    const MASK: u8 = GYRO_RANGE_MASK;

    fn bits(self) -> u8 {
        self as u8
    }

    fn scale(self) -> f32 {
        GyroRange::scale(self)
    }

    fn from_bits(bits: u8) -> Option<Self> {
        match bits & Self::MASK {
            // FS = 11 selects 2000 dps as well
            GYRO_RANGE_MASK => Some(GyroRange::Dps2000),
            field => GyroRange::from_u8(field),
        }
    }
}

impl FromStr for AccelRange {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2G" => Ok(AccelRange::G2),
            "4G" => Ok(AccelRange::G4),
            "6G" => Ok(AccelRange::G6),
            "8G" => Ok(AccelRange::G8),
            "16G" => Ok(AccelRange::G16),
            _ => Err(ParseRangeError),
        }
    }
}

impl FromStr for MagRange {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2GAUSS" => Ok(MagRange::Gauss2),
            "4GAUSS" => Ok(MagRange::Gauss4),
            "8GAUSS" => Ok(MagRange::Gauss8),
            "12GAUSS" => Ok(MagRange::Gauss12),
            _ => Err(ParseRangeError),
        }
    }
}

impl FromStr for GyroRange {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "245DPS" => Ok(GyroRange::Dps245),
            "500DPS" => Ok(GyroRange::Dps500),
            "2000DPS" => Ok(GyroRange::Dps2000),
            _ => Err(ParseRangeError),
        }
    }
}

/// Full-scale selection of all three sensors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct RangeConfig {
    pub accel: AccelRange,
    pub mag: MagRange,
    pub gyro: GyroRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for r in [
            AccelRange::G2,
            AccelRange::G4,
            AccelRange::G6,
            AccelRange::G8,
            AccelRange::G16,
        ] {
            assert_eq!(r.name().parse::<AccelRange>(), Ok(r));
        }
        for r in [
            MagRange::Gauss2,
            MagRange::Gauss4,
            MagRange::Gauss8,
            MagRange::Gauss12,
        ] {
            assert_eq!(r.name().parse::<MagRange>(), Ok(r));
        }
        for r in [GyroRange::Dps245, GyroRange::Dps500, GyroRange::Dps2000] {
            assert_eq!(r.name().parse::<GyroRange>(), Ok(r));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!("3G".parse::<AccelRange>(), Err(ParseRangeError));
        assert_eq!("2g".parse::<AccelRange>(), Err(ParseRangeError));
        assert_eq!("16GAUSS".parse::<MagRange>(), Err(ParseRangeError));
        assert_eq!("250DPS".parse::<GyroRange>(), Err(ParseRangeError));
        assert_eq!("".parse::<GyroRange>(), Err(ParseRangeError));
    }

    #[test]
    fn encodings_stay_inside_their_field() {
        assert_eq!(AccelRange::G16.bits(), 0b0010_0000);
        assert_eq!(AccelRange::G16.bits() & !AccelRange::MASK, 0);
        assert_eq!(MagRange::Gauss12.bits(), 0b0110_0000);
        assert_eq!(GyroRange::Dps2000.bits(), 0b0010_0000);
        assert_eq!(GyroRange::Dps2000.bits() & !GyroRange::MASK, 0);
    }

    #[test]
    fn decode_from_register() {
        assert_eq!(AccelRange::from_bits(0b1101_1111), Some(AccelRange::G8));
        assert_eq!(AccelRange::from_bits(0b0010_1000), None);
        assert_eq!(MagRange::from_bits(0b1001_1111), Some(MagRange::Gauss2));
        assert_eq!(GyroRange::from_bits(0b0011_0000), Some(GyroRange::Dps2000));
        assert_eq!(GyroRange::from_bits(0b1101_0000), Some(GyroRange::Dps500));
    }

    #[test]
    fn defaults_are_narrowest_ranges() {
        let config = RangeConfig::default();
        assert_eq!(config.accel, AccelRange::G2);
        assert_eq!(config.mag, MagRange::Gauss2);
        assert_eq!(config.gyro, GyroRange::Dps245);
    }
}
