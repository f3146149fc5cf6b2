//! Conversions between `U256` and byte representations
//!
//! The default byte order is little-endian, matching the limb order.
//! Big-endian input and output are available through [`Endian::Big`].

use crate::error::UintResult;
use crate::primitives::U256;
use crate::primitives::source::{self, Endian};

impl U256 {
    /// Width in bytes.
    pub const BYTES: usize = 32;

    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        Self::from_limbs(source::read_limbs(&bytes, Endian::Little))
    }

    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self::from_limbs(source::read_limbs(&bytes, Endian::Big))
    }

    /// Reads a value from the first 32 bytes of `bytes`.
    ///
    /// Longer buffers are accepted as long as their length is a multiple of
    /// 32; the trailing bytes are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`UintError::InvalidLength`](crate::UintError::InvalidLength)
    /// unless the length is a non-zero multiple of 32.
    pub fn from_slice(bytes: &[u8], endian: Endian) -> UintResult<Self> {
        source::check_length(bytes.len(), Self::BYTES)?;
        Ok(Self::from_limbs(source::read_limbs(bytes, endian)))
    }

    pub fn to_bytes(&self, endian: Endian) -> [u8; 32] {
        let mut out = [0u8; 32];
        source::write_limbs(&self.limbs(), endian, &mut out);
        out
    }

    pub fn to_le_bytes(&self) -> [u8; 32] {
        self.to_bytes(Endian::Little)
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.to_bytes(Endian::Big)
    }

    pub fn to_vec(&self, endian: Endian) -> Vec<u8> {
        self.to_bytes(endian).to_vec()
    }
}

impl From<U256> for [u8; 32] {
    /// Little-endian serialization.
    fn from(value: U256) -> Self {
        value.to_le_bytes()
    }
}

impl From<[u8; 32]> for U256 {
    /// Little-endian deserialization.
    fn from(value: [u8; 32]) -> Self {
        U256::from_le_bytes(value)
    }
}
