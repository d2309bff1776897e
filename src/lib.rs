#![cfg_attr(not(test), no_std)]

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::debug;

mod constants;
pub use constants::*;

mod error;
pub use error::*;

mod config;
pub use config::*;

mod crc;
pub use crc::*;

/// Represents an SHT31-D temperature and humidity sensor.
///
/// This struct provides methods to interact with the sensor, such as taking
/// measurements in single-shot or periodic mode, resetting it, and driving
/// its internal heater.
///
/// Every operation is synchronous and blocking: a command write, a fixed
/// conversion delay, then the data read. The driver assumes exclusive
/// ownership of the bus handle for the duration of each call; sharing the
/// bus across callers needs external serialization.
///
/// # Type Parameters
///
/// * `I2C`: The I2C bus the sensor is attached to. Must implement
///   `embedded_hal::i2c::I2c`.
/// * `D`: The delay provider. Must implement `embedded_hal::delay::DelayNs`.
pub struct Sht31d<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    config: Config,
}

/// Represents a single measurement read from the SHT31-D sensor.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
}

fn convert_temperature(raw: u16) -> f32 {
    -45.0 + 175.0 * (raw as f32) / 65535.0
}

fn convert_humidity(raw: u16) -> f32 {
    100.0 * (raw as f32) / 65535.0
}

impl<I2C, D, E> Sht31d<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
    E: core::fmt::Debug,
{
    /// Creates a new `Sht31d` instance at the default bus address (0x44).
    ///
    /// Performs no I/O; the sensor is not touched until the first command.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_address(i2c, delay, Address::default())
    }

    /// Creates a new `Sht31d` instance at the given bus address.
    ///
    /// Performs no I/O; the sensor is not touched until the first command.
    pub fn with_address(i2c: I2C, delay: D, address: Address) -> Self {
        Self {
            i2c,
            delay,
            address: address as u8,
            config: Config::default(),
        }
    }

    /// Releases the bus handle and delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// The current session configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Reads one temperature and humidity measurement.
    ///
    /// In `SingleShot` mode this triggers a conversion and blocks for the
    /// conversion time of the configured repeatability. In `Periodic` mode it
    /// fetches the oldest unread frame from the sensor's eight-deep cache;
    /// when the cache is exhausted the sensor returns filler bytes and the
    /// documented backfill values (130.0 °C, ≈100.018 %RH) are reported
    /// instead of an error.
    ///
    /// Fails with [`Error::Crc`] when a received word fails checksum
    /// validation and with [`Error::I2c`] when the bus transaction fails.
    pub fn read(&mut self) -> Result<Measurement, Error<E>> {
        match self.config.mode {
            Mode::SingleShot => {
                let command =
                    Command::single_shot(self.config.repeatability, self.config.clock_stretching);
                self.command(command)?;
                self.delay.delay_us(self.conversion_delay_us());
            }
            Mode::Periodic => {
                self.command(Command::FetchData)?;
                self.delay.delay_us(COMMAND_DELAY_US);
            }
        }

        let mut frame = [0u8; MEASUREMENT_FRAME_LEN];
        self.i2c.read(self.address, &mut frame).map_err(|e| {
            log::error!("Failed to read measurement frame: {:?}", e);
            Error::I2c(e)
        })?;

        // An exhausted periodic cache answers the fetch with bus filler
        // instead of a frame.
        if self.config.mode == Mode::Periodic && frame.iter().all(|&b| b == 0xFF) {
            debug!("Periodic cache empty, reporting backfill values");
            return Ok(Measurement {
                temperature: TEMPERATURE_BACKFILL,
                humidity: HUMIDITY_BACKFILL,
            });
        }

        let raw_temperature = checked_word([frame[0], frame[1]], frame[2])?;
        let raw_humidity = checked_word([frame[3], frame[4]], frame[5])?;

        let measurement = Measurement {
            temperature: convert_temperature(raw_temperature),
            humidity: convert_humidity(raw_humidity),
        };
        debug!(
            "Measured {:.2} C / {:.2} %RH (raw {:#06x} / {:#06x})",
            measurement.temperature, measurement.humidity, raw_temperature, raw_humidity
        );
        Ok(measurement)
    }

    /// Reads the temperature in degrees Celsius.
    ///
    /// Performs a full measurement cycle; see [`Sht31d::read`].
    pub fn read_temperature(&mut self) -> Result<f32, Error<E>> {
        Ok(self.read()?.temperature)
    }

    /// Reads the relative humidity in percent.
    ///
    /// Performs a full measurement cycle; see [`Sht31d::read`].
    pub fn read_relative_humidity(&mut self) -> Result<f32, Error<E>> {
        Ok(self.read()?.humidity)
    }

    /// The current acquisition mode.
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Sets the acquisition mode.
    ///
    /// Switching to `Periodic` issues the periodic-start command for the
    /// configured repeatability and frequency (or the ART command when ART is
    /// enabled); switching to `SingleShot` issues the break command so the
    /// sensor stops sampling autonomously. Re-setting the current mode is a
    /// no-op that touches the bus not at all.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error<E>> {
        if mode == self.config.mode {
            return Ok(());
        }
        debug!("Switching acquisition mode to {:?}", mode);
        match mode {
            Mode::Periodic => self.start_periodic()?,
            Mode::SingleShot => {
                self.command(Command::Break)?;
                self.delay.delay_us(COMMAND_DELAY_US);
            }
        }
        self.config.mode = mode;
        Ok(())
    }

    /// The current periodic acquisition frequency.
    pub fn frequency(&self) -> Frequency {
        self.config.frequency
    }

    /// Sets the periodic acquisition frequency.
    ///
    /// While in `Periodic` mode a changed value re-issues the periodic-start
    /// command at the new rate; in `SingleShot` mode only the stored value is
    /// updated and takes effect on the next transition to `Periodic`.
    ///
    /// Fails with [`Error::FrequencyLocked`] while ART is enabled, which
    /// pins the sensor to 4 Hz.
    pub fn set_frequency(&mut self, frequency: Frequency) -> Result<(), Error<E>> {
        if self.config.art {
            log::warn!(
                "Rejected frequency change to {:?}: ART is enabled",
                frequency
            );
            return Err(Error::FrequencyLocked);
        }
        let changed = self.config.frequency != frequency;
        self.config.frequency = frequency;
        if self.config.mode == Mode::Periodic && changed {
            self.start_periodic()?;
        }
        Ok(())
    }

    /// The current measurement repeatability.
    pub fn repeatability(&self) -> Repeatability {
        self.config.repeatability
    }

    /// Sets the measurement repeatability.
    ///
    /// While in `Periodic` mode a changed value re-issues the periodic-start
    /// command; in `SingleShot` mode it takes effect on the next measurement.
    pub fn set_repeatability(&mut self, repeatability: Repeatability) -> Result<(), Error<E>> {
        let changed = self.config.repeatability != repeatability;
        self.config.repeatability = repeatability;
        if self.config.mode == Mode::Periodic && changed {
            self.start_periodic()?;
        }
        Ok(())
    }

    /// Whether accelerated response time is enabled.
    pub fn art(&self) -> bool {
        self.config.art
    }

    /// Enables or disables accelerated response time.
    ///
    /// Enabling ART forces the acquisition frequency to 4 Hz. While in
    /// `Periodic` mode a change re-issues the matching periodic-start
    /// command.
    pub fn set_art(&mut self, art: bool) -> Result<(), Error<E>> {
        if art {
            self.config.frequency = Frequency::Hz4;
        }
        let changed = self.config.art != art;
        self.config.art = art;
        if self.config.mode == Mode::Periodic && changed {
            self.start_periodic()?;
        }
        Ok(())
    }

    /// Whether single-shot measurements use clock stretching.
    pub fn clock_stretching(&self) -> bool {
        self.config.clock_stretching
    }

    /// Enables or disables clock stretching for single-shot measurements.
    /// Takes effect on the next measurement; no command is issued.
    pub fn set_clock_stretching(&mut self, clock_stretching: bool) {
        self.config.clock_stretching = clock_stretching;
    }

    /// Soft resets the sensor.
    ///
    /// The reset command is preceded by a break command, as the sensor does
    /// not respond to a soft reset while acquiring periodically. The reset
    /// recovery delay is enforced internally, so the sensor accepts commands
    /// as soon as this returns.
    pub fn reset(&mut self) -> Result<(), Error<E>> {
        debug!("Soft resetting sensor");
        self.command(Command::Break)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        self.command(Command::SoftReset)?;
        self.delay.delay_us(SOFT_RESET_DELAY_US);
        self.config.mode = Mode::SingleShot;
        Ok(())
    }

    /// Switches the internal heater on or off.
    ///
    /// The protocol offers no readback beyond the command ack; use
    /// [`Sht31d::is_heater_on`] to confirm via the status register.
    pub fn set_heater(&mut self, on: bool) -> Result<(), Error<E>> {
        debug!("Turning heater {}", if on { "on" } else { "off" });
        self.command(if on {
            Command::HeaterEnable
        } else {
            Command::HeaterDisable
        })?;
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }

    /// Whether the internal heater is on, per the status register.
    pub fn is_heater_on(&mut self) -> Result<bool, Error<E>> {
        Ok(self.status()? & STATUS_HEATER_BIT != 0)
    }

    /// Reads the raw 16-bit status register.
    ///
    /// Bit meanings are defined by the datasheet; the value is returned
    /// uninterpreted after checksum validation.
    pub fn status(&mut self) -> Result<u16, Error<E>> {
        self.command(Command::ReadStatus)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        let mut frame = [0u8; STATUS_FRAME_LEN];
        self.i2c.read(self.address, &mut frame).map_err(|e| {
            log::error!("Failed to read status register: {:?}", e);
            Error::I2c(e)
        })?;
        let status = checked_word([frame[0], frame[1]], frame[2])?;
        debug!("Status register: {:#06x}", status);
        Ok(status)
    }

    /// Clears the alert flags of the status register.
    pub fn clear_status(&mut self) -> Result<(), Error<E>> {
        self.command(Command::ClearStatus)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }

    /// Reads the sensor's unique 32-bit serial number.
    pub fn serial_number(&mut self) -> Result<u32, Error<E>> {
        self.command(Command::ReadSerialNumber)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        let mut frame = [0u8; MEASUREMENT_FRAME_LEN];
        self.i2c.read(self.address, &mut frame).map_err(|e| {
            log::error!("Failed to read serial number: {:?}", e);
            Error::I2c(e)
        })?;
        let high = checked_word([frame[0], frame[1]], frame[2])?;
        let low = checked_word([frame[3], frame[4]], frame[5])?;
        Ok(u32::from(high) << 16 | u32::from(low))
    }

    // Starts (or restarts) periodic acquisition with the configured
    // repeatability and frequency.
    fn start_periodic(&mut self) -> Result<(), Error<E>> {
        let command = if self.config.art {
            Command::PeriodicArt
        } else {
            Command::periodic(self.config.repeatability, self.config.frequency)
        };
        self.command(command)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }

    // Writes a two-byte opcode. Commands are opcodes, not registers: no
    // register address byte precedes them.
    fn command(&mut self, command: Command) -> Result<(), Error<E>> {
        debug!("Executing command {:?}: {:02X?}", command, command.bytes());
        self.i2c.write(self.address, &command.bytes()).map_err(|e| {
            log::error!("Failed to write command {:?}: {:?}", command, e);
            Error::I2c(e)
        })
    }

    // Worst-case single-shot conversion time, which the driver waits out
    // unconditionally rather than polling for completion.
    fn conversion_delay_us(&self) -> u32 {
        if self.config.clock_stretching {
            return COMMAND_DELAY_US;
        }
        match self.config.repeatability {
            Repeatability::High => MEASUREMENT_DELAY_HIGH_US,
            Repeatability::Medium => MEASUREMENT_DELAY_MEDIUM_US,
            Repeatability::Low => MEASUREMENT_DELAY_LOW_US,
        }
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};
    use float_cmp::approx_eq;

    use super::*;

    const ADDR: u8 = 0x44;

    // raw 0x6666 in both words: 25.0 C and 40.0 %RH by the linear formulas.
    const KNOWN_FRAME: [u8; 6] = [0x66, 0x66, 0x93, 0x66, 0x66, 0x93];

    fn driver(expectations: &[Transaction]) -> Sht31d<I2cMock, NoopDelay> {
        Sht31d::new(I2cMock::new(expectations), NoopDelay::new())
    }

    #[test]
    fn single_shot_read_converts_known_frame() {
        let expectations = [
            Transaction::write(ADDR, vec![0x24, 0x00]),
            Transaction::read(ADDR, KNOWN_FRAME.to_vec()),
        ];
        let mut sht = driver(&expectations);

        let measurement = sht.read().unwrap();
        assert!(approx_eq!(
            f32,
            measurement.temperature,
            25.0,
            epsilon = 0.01
        ));
        assert!(approx_eq!(f32, measurement.humidity, 40.0, epsilon = 0.01));

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn read_temperature_and_humidity_each_run_a_full_cycle() {
        let expectations = [
            Transaction::write(ADDR, vec![0x24, 0x00]),
            Transaction::read(ADDR, KNOWN_FRAME.to_vec()),
            Transaction::write(ADDR, vec![0x24, 0x00]),
            Transaction::read(ADDR, KNOWN_FRAME.to_vec()),
        ];
        let mut sht = driver(&expectations);

        let temperature = sht.read_temperature().unwrap();
        let humidity = sht.read_relative_humidity().unwrap();
        assert!(approx_eq!(f32, temperature, 25.0, epsilon = 0.01));
        assert!(approx_eq!(f32, humidity, 40.0, epsilon = 0.01));

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn repeatability_selects_measurement_command() {
        let expectations = [
            Transaction::write(ADDR, vec![0x24, 0x16]),
            Transaction::read(ADDR, KNOWN_FRAME.to_vec()),
        ];
        let mut sht = driver(&expectations);

        sht.set_repeatability(Repeatability::Low).unwrap();
        sht.read().unwrap();

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn clock_stretching_selects_stretching_command() {
        let expectations = [
            Transaction::write(ADDR, vec![0x2C, 0x06]),
            Transaction::read(ADDR, KNOWN_FRAME.to_vec()),
        ];
        let mut sht = driver(&expectations);

        sht.set_clock_stretching(true);
        sht.read().unwrap();

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn corrupted_checksum_is_rejected() {
        let expectations = [
            Transaction::write(ADDR, vec![0x24, 0x00]),
            Transaction::read(ADDR, vec![0x66, 0x66, 0x92, 0x66, 0x66, 0x93]),
        ];
        let mut sht = driver(&expectations);

        assert_eq!(
            sht.read_temperature(),
            Err(Error::Crc {
                expected: 0x92,
                calculated: 0x93,
            })
        );

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn bus_failure_is_surfaced_verbatim() {
        let expectations =
            [Transaction::write(ADDR, vec![0x24, 0x00]).with_error(ErrorKind::Other)];
        let mut sht = driver(&expectations);

        assert_eq!(sht.read_temperature(), Err(Error::I2c(ErrorKind::Other)));

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn periodic_mode_fetches_from_cache() {
        let expectations = [
            Transaction::write(ADDR, vec![0x23, 0x34]),
            Transaction::write(ADDR, vec![0xE0, 0x00]),
            Transaction::read(ADDR, KNOWN_FRAME.to_vec()),
        ];
        let mut sht = driver(&expectations);

        sht.set_mode(Mode::Periodic).unwrap();
        let measurement = sht.read().unwrap();
        assert!(approx_eq!(
            f32,
            measurement.temperature,
            25.0,
            epsilon = 0.01
        ));

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn exhausted_cache_backfills_all_eight_slots() {
        let mut expectations = vec![Transaction::write(ADDR, vec![0x23, 0x34])];
        for _ in 0..8 {
            expectations.push(Transaction::write(ADDR, vec![0xE0, 0x00]));
            expectations.push(Transaction::read(ADDR, vec![0xFF; 6]));
        }
        let mut sht = driver(&expectations);

        sht.set_mode(Mode::Periodic).unwrap();
        for _ in 0..4 {
            assert_eq!(sht.read_temperature().unwrap(), TEMPERATURE_BACKFILL);
        }
        for _ in 0..4 {
            let humidity = sht.read_relative_humidity().unwrap();
            assert_eq!(humidity, HUMIDITY_BACKFILL);
            assert!(approx_eq!(f32, humidity, 100.018_31, epsilon = 0.0001));
        }

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn mode_transitions_issue_start_and_break() {
        let expectations = [
            Transaction::write(ADDR, vec![0x23, 0x34]),
            Transaction::write(ADDR, vec![0x30, 0x93]),
        ];
        let mut sht = driver(&expectations);

        sht.set_mode(Mode::Periodic).unwrap();
        assert_eq!(sht.mode(), Mode::Periodic);
        sht.set_mode(Mode::SingleShot).unwrap();
        assert_eq!(sht.mode(), Mode::SingleShot);

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn setting_current_mode_is_a_no_op() {
        let mut sht = driver(&[]);

        sht.set_mode(Mode::SingleShot).unwrap();

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn frequency_change_restarts_periodic_acquisition() {
        let expectations = [
            Transaction::write(ADDR, vec![0x23, 0x34]),
            Transaction::write(ADDR, vec![0x21, 0x30]),
        ];
        let mut sht = driver(&expectations);

        sht.set_mode(Mode::Periodic).unwrap();
        sht.set_frequency(Frequency::Hz1).unwrap();
        // Same value again: stored state only, no bus traffic.
        sht.set_frequency(Frequency::Hz1).unwrap();

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn frequency_change_in_single_shot_is_deferred() {
        let expectations = [Transaction::write(ADDR, vec![0x27, 0x37])];
        let mut sht = driver(&expectations);

        sht.set_frequency(Frequency::Hz10).unwrap();
        sht.set_mode(Mode::Periodic).unwrap();

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn art_locks_frequency_to_4hz() {
        let mut sht = driver(&[]);

        sht.set_frequency(Frequency::Hz1).unwrap();
        sht.set_art(true).unwrap();
        assert_eq!(sht.frequency(), Frequency::Hz4);
        assert_eq!(
            sht.set_frequency(Frequency::Hz10),
            Err(Error::FrequencyLocked)
        );

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn art_periodic_start_uses_art_command() {
        let expectations = [Transaction::write(ADDR, vec![0x2B, 0x32])];
        let mut sht = driver(&expectations);

        sht.set_art(true).unwrap();
        sht.set_mode(Mode::Periodic).unwrap();

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn reset_breaks_periodic_acquisition_first() {
        let expectations = [
            Transaction::write(ADDR, vec![0x23, 0x34]),
            Transaction::write(ADDR, vec![0x30, 0x93]),
            Transaction::write(ADDR, vec![0x30, 0xA2]),
        ];
        let mut sht = driver(&expectations);

        sht.set_mode(Mode::Periodic).unwrap();
        sht.reset().unwrap();
        assert_eq!(sht.mode(), Mode::SingleShot);

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn heater_commands() {
        let expectations = [
            Transaction::write(ADDR, vec![0x30, 0x6D]),
            Transaction::write(ADDR, vec![0x30, 0x66]),
        ];
        let mut sht = driver(&expectations);

        sht.set_heater(true).unwrap();
        sht.set_heater(false).unwrap();

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn status_is_validated_and_returned_raw() {
        let expectations = [
            Transaction::write(ADDR, vec![0xF3, 0x2D]),
            Transaction::read(ADDR, vec![0x80, 0x10, 0xE1]),
        ];
        let mut sht = driver(&expectations);

        assert_eq!(sht.status().unwrap(), 0x8010);

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn heater_bit_of_status_register() {
        let expectations = [
            Transaction::write(ADDR, vec![0xF3, 0x2D]),
            Transaction::read(ADDR, vec![0x20, 0x00, 0x5D]),
            Transaction::write(ADDR, vec![0xF3, 0x2D]),
            Transaction::read(ADDR, vec![0x00, 0x00, 0x81]),
        ];
        let mut sht = driver(&expectations);

        assert!(sht.is_heater_on().unwrap());
        assert!(!sht.is_heater_on().unwrap());

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn clear_status_command() {
        let expectations = [Transaction::write(ADDR, vec![0x30, 0x41])];
        let mut sht = driver(&expectations);

        sht.clear_status().unwrap();

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn serial_number_combines_both_words() {
        let expectations = [
            Transaction::write(ADDR, vec![0x37, 0x80]),
            Transaction::read(ADDR, vec![0xBE, 0xEF, 0x92, 0x66, 0x66, 0x93]),
        ];
        let mut sht = driver(&expectations);

        assert_eq!(sht.serial_number().unwrap(), 0xBEEF_6666);

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn secondary_address_is_used_on_the_bus() {
        let expectations = [Transaction::write(0x45, vec![0x30, 0x41])];
        let mut sht = Sht31d::with_address(
            I2cMock::new(&expectations),
            NoopDelay::new(),
            Address::Secondary,
        );

        sht.clear_status().unwrap();

        let (mut i2c, _) = sht.release();
        i2c.done();
    }

    #[test]
    fn temperature_conversion_is_bounded_and_monotonic() {
        assert_eq!(convert_temperature(0), -45.0);
        assert_eq!(convert_temperature(u16::MAX), 130.0);

        let mut previous = convert_temperature(0);
        for raw in (0..=u16::MAX).step_by(257) {
            let t = convert_temperature(raw);
            assert!((-45.0..=130.0).contains(&t));
            assert!(t >= previous);
            previous = t;
        }
    }

    #[test]
    fn humidity_conversion_is_bounded_and_monotonic() {
        assert_eq!(convert_humidity(0), 0.0);
        assert_eq!(convert_humidity(u16::MAX), 100.0);

        let mut previous = convert_humidity(0);
        for raw in (0..=u16::MAX).step_by(257) {
            let h = convert_humidity(raw);
            assert!((0.0..=100.0).contains(&h));
            assert!(h >= previous);
            previous = h;
        }
    }
}
