/// Errors reported by the driver.
///
/// Generic over the bus error type `E` of the underlying `embedded-hal`
/// implementation. Nothing is retried internally; every failure is surfaced
/// to the caller on the transaction that produced it.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error<E>
where
    E: core::fmt::Debug,
{
    /// The bus transaction itself failed (NACK, timeout, arbitration loss).
    #[error("I2C bus error: {0:?}")]
    I2c(E),

    /// Bytes were received but failed CRC validation, so the word is
    /// untrustworthy. Distinct from a bus failure; the caller may retry.
    #[error("CRC mismatch: expected {expected:#04x}, calculated {calculated:#04x}")]
    Crc {
        /// The checksum byte the sensor transmitted.
        expected: u8,
        /// The checksum computed over the received word.
        calculated: u8,
    },

    /// The acquisition frequency cannot be changed while accelerated
    /// response time is enabled.
    #[error("frequency is locked to 4 Hz while ART is enabled")]
    FrequencyLocked,
}
