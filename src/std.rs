use crate::{Error, ParseRangeError};
use std::{error, fmt};

impl<E: core::fmt::Debug> error::Error for Error<E> {}

impl<E: core::fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C bus error: {:?}", e),
            Error::InvalidRange => write!(f, "invalid measurement range"),
        }
    }
}

impl error::Error for ParseRangeError {}

impl fmt::Display for ParseRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown range name")
    }
}
