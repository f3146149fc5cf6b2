//! Conversions between `U128` and byte representations.

use crate::error::UintResult;
use crate::primitives::U128;
use crate::primitives::source::{self, Endian};

impl U128 {
    /// Width in bytes.
    pub const BYTES: usize = 16;

    pub fn from_le_bytes(bytes: [u8; 16]) -> Self {
        Self::from_limbs(source::read_limbs(&bytes, Endian::Little))
    }

    pub fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self::from_limbs(source::read_limbs(&bytes, Endian::Big))
    }

    /// Reads a value from the first 16 bytes of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`UintError::InvalidLength`](crate::UintError::InvalidLength)
    /// unless the length is a non-zero multiple of 16.
    pub fn from_slice(bytes: &[u8], endian: Endian) -> UintResult<Self> {
        source::check_length(bytes.len(), Self::BYTES)?;
        Ok(Self::from_limbs(source::read_limbs(bytes, endian)))
    }

    pub fn to_bytes(&self, endian: Endian) -> [u8; 16] {
        let mut out = [0u8; 16];
        source::write_limbs(&self.limbs(), endian, &mut out);
        out
    }

    pub fn to_le_bytes(&self) -> [u8; 16] {
        self.to_bytes(Endian::Little)
    }

    pub fn to_be_bytes(&self) -> [u8; 16] {
        self.to_bytes(Endian::Big)
    }

    /// Serializes into a freshly allocated buffer.
    pub fn to_vec(&self, endian: Endian) -> Vec<u8> {
        self.to_bytes(endian).to_vec()
    }
}

impl From<U128> for [u8; 16] {
    /// Little-endian serialization.
    fn from(value: U128) -> Self {
        value.to_le_bytes()
    }
}

impl From<[u8; 16]> for U128 {
    /// Little-endian deserialization.
    fn from(value: [u8; 16]) -> Self {
        U128::from_le_bytes(value)
    }
}
