use crc::{Algorithm, Crc};

use crate::Error;

/// CRC algorithm the SHT31-D appends to every 16-bit data word
/// (CRC-8/NRSC-5).
/// Polynomial: 0x31 (x^8 + x^5 + x^4 + 1)
/// Initial value: 0xFF
/// Input reflected: false
/// Output reflected: false
/// Final XOR: 0x00
/// Check value: 0xF7 (for "123456789")
pub const SHT31_CRC: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0xFF,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xF7,
    residue: 0x00,
};

const CRC_COMPUTER: Crc<u8> = Crc::<u8>::new(&SHT31_CRC);

/// Calculates the checksum of a data word as the sensor would.
#[inline]
pub fn calculate_crc8(data: &[u8]) -> u8 {
    CRC_COMPUTER.checksum(data)
}

/// Validates a 16-bit big-endian word against its transmitted checksum and
/// returns the decoded word.
pub fn checked_word<E>(bytes: [u8; 2], checksum: u8) -> Result<u16, Error<E>>
where
    E: core::fmt::Debug,
{
    let calculated = calculate_crc8(&bytes);
    if calculated != checksum {
        return Err(Error::Crc {
            expected: checksum,
            calculated,
        });
    }
    Ok(u16::from_be_bytes(bytes))
}
