/// Represents the acquisition mode of the SHT31-D sensor.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Mode {
    /// Each read triggers one conversion on demand.
    SingleShot,
    /// The sensor converts autonomously at a fixed rate and buffers up to
    /// eight frames in its internal cache.
    Periodic,
}

/// Acquisition frequency in periodic mode.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Frequency {
    /// One measurement every two seconds.
    Hz0_5,
    /// One measurement per second.
    Hz1,
    /// Two measurements per second.
    Hz2,
    /// Four measurements per second.
    Hz4,
    /// Ten measurements per second.
    Hz10,
}

impl Frequency {
    /// The acquisition rate in Hertz.
    pub fn hertz(self) -> f32 {
        match self {
            Frequency::Hz0_5 => 0.5,
            Frequency::Hz1 => 1.0,
            Frequency::Hz2 => 2.0,
            Frequency::Hz4 => 4.0,
            Frequency::Hz10 => 10.0,
        }
    }
}

/// Measurement repeatability.
///
/// Higher repeatability narrows the spread of consecutive conversions at the
/// cost of a longer conversion time and higher power draw.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Repeatability {
    /// Conversion time up to 15.5 ms.
    High,
    /// Conversion time up to 6.5 ms.
    Medium,
    /// Conversion time up to 4.5 ms.
    Low,
}

/// The two 7-bit bus addresses the SHT31-D decodes, selected by the ADDR pin.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Address {
    /// ADDR pin tied low (the factory default wiring).
    Primary = 0x44,
    /// ADDR pin tied high.
    Secondary = 0x45,
}

impl Default for Address {
    fn default() -> Address {
        Address::Primary
    }
}

/// Session configuration held by the driver instance.
///
/// Mode, frequency and repeatability persist for the lifetime of the driver
/// until changed through the corresponding setters, which issue the matching
/// sensor commands.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
    /// The acquisition mode.
    pub mode: Mode,
    /// The periodic acquisition frequency.
    pub frequency: Frequency,
    /// The measurement repeatability.
    pub repeatability: Repeatability,
    /// Whether single-shot measurements hold SCL until the conversion
    /// completes instead of relying on a fixed delay.
    pub clock_stretching: bool,
    /// Whether periodic acquisition runs with accelerated response time,
    /// which locks the frequency to 4 Hz.
    pub art: bool,
}

impl Config {
    /// Sets the acquisition mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the periodic acquisition frequency.
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the measurement repeatability.
    pub fn repeatability(mut self, repeatability: Repeatability) -> Self {
        self.repeatability = repeatability;
        self
    }

    /// Enables or disables clock stretching for single-shot measurements.
    pub fn clock_stretching(mut self, clock_stretching: bool) -> Self {
        self.clock_stretching = clock_stretching;
        self
    }
}

impl Default for Config {
    /// Returns the power-on configuration: single-shot acquisition at high
    /// repeatability, 4 Hz periodic frequency, no clock stretching, ART off.
    fn default() -> Config {
        Config {
            mode: Mode::SingleShot,
            frequency: Frequency::Hz4,
            repeatability: Repeatability::High,
            clock_stretching: false,
            art: false,
        }
    }
}
