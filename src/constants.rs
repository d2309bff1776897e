use crate::{Frequency, Repeatability};

// Length of a temperature + humidity frame: two 16-bit words, each followed
// by its CRC byte.
pub const MEASUREMENT_FRAME_LEN: usize = 6;

// Length of a status read: one 16-bit word followed by its CRC byte.
pub const STATUS_FRAME_LEN: usize = 3;

// Delay between issuing a command and the sensor accepting the next
// transaction, in microseconds. Applies to every command that is not a
// non-stretching single-shot measurement.
pub const COMMAND_DELAY_US: u32 = 1_000;

// Time the sensor needs to come back up after a soft reset, in microseconds.
pub const SOFT_RESET_DELAY_US: u32 = 1_500;

// Conversion times for non-stretching single-shot measurements, per
// repeatability, in microseconds.
pub const MEASUREMENT_DELAY_LOW_US: u32 = 4_500;
pub const MEASUREMENT_DELAY_MEDIUM_US: u32 = 6_500;
pub const MEASUREMENT_DELAY_HIGH_US: u32 = 15_500;

// Values reported for slots of the sensor's eight-deep periodic cache that
// have not yet been filled with a real conversion. The humidity value keeps the
// rounding of the legacy reference conversion (divisor 65523), which is why
// it lands slightly above 100 %.
pub const TEMPERATURE_BACKFILL: f32 = 130.0;
pub const HUMIDITY_BACKFILL: f32 = 100.0 * 65535.0 / 65523.0;

// Heater bit of the status register.
pub const STATUS_HEATER_BIT: u16 = 0x2000;

/// Opcodes understood by the SHT31-D, sent big-endian as two raw bytes with
/// no register address. Measurement commands are resolved from the session
/// configuration via [`Command::single_shot`] and [`Command::periodic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Command {
    /// Single-shot measurement, high repeatability, no clock stretching.
    MeasureHigh = 0x2400,
    /// Single-shot measurement, medium repeatability, no clock stretching.
    MeasureMedium = 0x240B,
    /// Single-shot measurement, low repeatability, no clock stretching.
    MeasureLow = 0x2416,
    /// Single-shot measurement, high repeatability, clock stretching enabled.
    MeasureHighStretch = 0x2C06,
    /// Single-shot measurement, medium repeatability, clock stretching enabled.
    MeasureMediumStretch = 0x2C0D,
    /// Single-shot measurement, low repeatability, clock stretching enabled.
    MeasureLowStretch = 0x2C10,
    /// Start periodic acquisition, 0.5 Hz, high repeatability.
    PeriodicHalfHzHigh = 0x2032,
    /// Start periodic acquisition, 0.5 Hz, medium repeatability.
    PeriodicHalfHzMedium = 0x2024,
    /// Start periodic acquisition, 0.5 Hz, low repeatability.
    PeriodicHalfHzLow = 0x202F,
    /// Start periodic acquisition, 1 Hz, high repeatability.
    Periodic1HzHigh = 0x2130,
    /// Start periodic acquisition, 1 Hz, medium repeatability.
    Periodic1HzMedium = 0x2126,
    /// Start periodic acquisition, 1 Hz, low repeatability.
    Periodic1HzLow = 0x212D,
    /// Start periodic acquisition, 2 Hz, high repeatability.
    Periodic2HzHigh = 0x2236,
    /// Start periodic acquisition, 2 Hz, medium repeatability.
    Periodic2HzMedium = 0x2220,
    /// Start periodic acquisition, 2 Hz, low repeatability.
    Periodic2HzLow = 0x222B,
    /// Start periodic acquisition, 4 Hz, high repeatability.
    Periodic4HzHigh = 0x2334,
    /// Start periodic acquisition, 4 Hz, medium repeatability.
    Periodic4HzMedium = 0x2322,
    /// Start periodic acquisition, 4 Hz, low repeatability.
    Periodic4HzLow = 0x2329,
    /// Start periodic acquisition, 10 Hz, high repeatability.
    Periodic10HzHigh = 0x2737,
    /// Start periodic acquisition, 10 Hz, medium repeatability.
    Periodic10HzMedium = 0x2721,
    /// Start periodic acquisition, 10 Hz, low repeatability.
    Periodic10HzLow = 0x272A,
    /// Start periodic acquisition with accelerated response time (4 Hz).
    PeriodicArt = 0x2B32,
    /// Read the oldest unread frame from the periodic cache.
    FetchData = 0xE000,
    /// Stop periodic acquisition and return to idle.
    Break = 0x3093,
    /// Soft reset. Ignored by the sensor while acquiring periodically.
    SoftReset = 0x30A2,
    /// Switch the internal heater on.
    HeaterEnable = 0x306D,
    /// Switch the internal heater off.
    HeaterDisable = 0x3066,
    /// Read the 16-bit status register.
    ReadStatus = 0xF32D,
    /// Clear the alert flags of the status register.
    ClearStatus = 0x3041,
    /// Read the 32-bit serial number.
    ReadSerialNumber = 0x3780,
}

impl Command {
    /// The two command bytes as written on the bus.
    pub fn bytes(self) -> [u8; 2] {
        (self as u16).to_be_bytes()
    }

    /// Resolves the single-shot measurement command for a repeatability and
    /// clock stretching setting.
    pub fn single_shot(repeatability: Repeatability, clock_stretching: bool) -> Self {
        match (repeatability, clock_stretching) {
            (Repeatability::High, false) => Command::MeasureHigh,
            (Repeatability::Medium, false) => Command::MeasureMedium,
            (Repeatability::Low, false) => Command::MeasureLow,
            (Repeatability::High, true) => Command::MeasureHighStretch,
            (Repeatability::Medium, true) => Command::MeasureMediumStretch,
            (Repeatability::Low, true) => Command::MeasureLowStretch,
        }
    }

    /// Resolves the periodic-start command for a repeatability and
    /// acquisition frequency.
    pub fn periodic(repeatability: Repeatability, frequency: Frequency) -> Self {
        match (frequency, repeatability) {
            (Frequency::Hz0_5, Repeatability::High) => Command::PeriodicHalfHzHigh,
            (Frequency::Hz0_5, Repeatability::Medium) => Command::PeriodicHalfHzMedium,
            (Frequency::Hz0_5, Repeatability::Low) => Command::PeriodicHalfHzLow,
            (Frequency::Hz1, Repeatability::High) => Command::Periodic1HzHigh,
            (Frequency::Hz1, Repeatability::Medium) => Command::Periodic1HzMedium,
            (Frequency::Hz1, Repeatability::Low) => Command::Periodic1HzLow,
            (Frequency::Hz2, Repeatability::High) => Command::Periodic2HzHigh,
            (Frequency::Hz2, Repeatability::Medium) => Command::Periodic2HzMedium,
            (Frequency::Hz2, Repeatability::Low) => Command::Periodic2HzLow,
            (Frequency::Hz4, Repeatability::High) => Command::Periodic4HzHigh,
            (Frequency::Hz4, Repeatability::Medium) => Command::Periodic4HzMedium,
            (Frequency::Hz4, Repeatability::Low) => Command::Periodic4HzLow,
            (Frequency::Hz10, Repeatability::High) => Command::Periodic10HzHigh,
            (Frequency::Hz10, Repeatability::Medium) => Command::Periodic10HzMedium,
            (Frequency::Hz10, Repeatability::Low) => Command::Periodic10HzLow,
        }
    }
}
