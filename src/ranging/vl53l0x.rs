//! Driver for the ST VL53L0X time-of-flight ranging sensor.
//!
//! Bring-up follows the register sequence of ST's reference API (data init,
//! static init, reference calibration). Only single-shot ranging is
//! supported.

use crate::ranging::{RangeStatus, RangingDevice, RawMeasurement};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Factory default I2C address.
pub const DEFAULT_ADDRESS: u8 = 0x29;

/// Expected contents of the model id register.
const MODEL_ID: u8 = 0xEE;
/// Number of times a register is polled before giving up.
const POLL_LIMIT: u16 = 500;
/// Wait between polls, in milliseconds.
const POLL_INTERVAL_MS: u32 = 1;
/// Final range signal rate limit of 0.25 MCPS, in Q9.7 fixed point.
const SIGNAL_RATE_LIMIT: u16 = 32;
/// Number of reference SPADs in the SPAD map.
const REF_SPADS: usize = 48;

mod reg {
    pub const SYSRANGE_START: u8 = 0x00;
    pub const SYSTEM_SEQUENCE_CONFIG: u8 = 0x01;
    pub const SYSTEM_INTERRUPT_CONFIG_GPIO: u8 = 0x0A;
    pub const SYSTEM_INTERRUPT_CLEAR: u8 = 0x0B;
    pub const RESULT_INTERRUPT_STATUS: u8 = 0x13;
    pub const RESULT_RANGE_STATUS: u8 = 0x14;
    pub const FINAL_RANGE_CONFIG_MIN_COUNT_RATE_RTN_LIMIT: u8 = 0x44;
    pub const MSRC_CONFIG_CONTROL: u8 = 0x60;
    pub const GPIO_HV_MUX_ACTIVE_HIGH: u8 = 0x84;
    pub const I2C_MODE: u8 = 0x88;
    pub const VHV_CONFIG_PAD_SCL_SDA_EXTSUP_HV: u8 = 0x89;
    pub const STOP_VARIABLE: u8 = 0x91;
    pub const SPAD_INFO: u8 = 0x92;
    pub const GLOBAL_CONFIG_SPAD_ENABLES_REF_0: u8 = 0xB0;
    pub const GLOBAL_CONFIG_REF_EN_START_SELECT: u8 = 0xB6;
    pub const DYNAMIC_SPAD_NUM_REQUESTED_REF_SPAD: u8 = 0x4E;
    pub const DYNAMIC_SPAD_REF_EN_START_OFFSET: u8 = 0x4F;
    pub const IDENTIFICATION_MODEL_ID: u8 = 0xC0;
    pub const PAGE: u8 = 0xFF;
    pub const POWER_MANAGEMENT: u8 = 0x80;
    pub const SPAD_INFO_CONTROL: u8 = 0x83;
}

/// Selects the default register page and leaves standby.
const DEFAULT_PAGE: [(u8, u8); 2] =
    [(reg::PAGE, 0x00), (reg::POWER_MANAGEMENT, 0x00)];
/// Opens the private register page that holds the stop variable.
const ENTER_PRIVATE: [(u8, u8); 3] = [(0x80, 0x01), (0xFF, 0x01), (0x00, 0x00)];
/// Closes the private register page.
const LEAVE_PRIVATE: [(u8, u8); 3] = [(0x00, 0x01), (0xFF, 0x00), (0x80, 0x00)];

/// Default tuning settings from ST's reference API.
#[rustfmt::skip]
const DEFAULT_TUNING: [(u8, u8); 80] = [
    (0xFF, 0x01), (0x00, 0x00),
    (0xFF, 0x00), (0x09, 0x00), (0x10, 0x00), (0x11, 0x00),
    (0x24, 0x01), (0x25, 0xFF), (0x75, 0x00),
    (0xFF, 0x01), (0x4E, 0x2C), (0x48, 0x00), (0x30, 0x20),
    (0xFF, 0x00), (0x30, 0x09), (0x54, 0x00), (0x31, 0x04),
    (0x32, 0x03), (0x40, 0x83), (0x46, 0x25), (0x60, 0x00),
    (0x27, 0x00), (0x50, 0x06), (0x51, 0x00), (0x52, 0x96),
    (0x56, 0x08), (0x57, 0x30), (0x61, 0x00), (0x62, 0x00),
    (0x64, 0x00), (0x65, 0x00), (0x66, 0xA0),
    (0xFF, 0x01), (0x22, 0x32), (0x47, 0x14), (0x49, 0xFF), (0x4A, 0x00),
    (0xFF, 0x00), (0x7A, 0x0A), (0x7B, 0x00), (0x78, 0x21),
    (0xFF, 0x01), (0x23, 0x34), (0x42, 0x00), (0x44, 0xFF), (0x45, 0x26),
    (0x46, 0x05), (0x40, 0x40), (0x0E, 0x06), (0x20, 0x1A), (0x43, 0x40),
    (0xFF, 0x00), (0x34, 0x03), (0x35, 0x44),
    (0xFF, 0x01), (0x31, 0x04), (0x4B, 0x09), (0x4C, 0x05), (0x4D, 0x04),
    (0xFF, 0x00), (0x44, 0x00), (0x45, 0x20), (0x47, 0x08), (0x48, 0x28),
    (0x67, 0x00), (0x70, 0x04), (0x71, 0x01), (0x72, 0xFE),
    (0x76, 0x00), (0x77, 0x00),
    (0xFF, 0x01), (0x0D, 0x01),
    (0xFF, 0x00), (0x80, 0x01), (0x01, 0xF8),
    (0xFF, 0x01), (0x8E, 0x01), (0x00, 0x01), (0xFF, 0x00), (0x80, 0x00),
];

/// Errors that might occur when talking to the sensor.
#[derive(Debug, PartialEq)]
pub enum Error<E> {
    /// The I2C bus reported an error.
    Bus(E),
    /// The device did not identify as a VL53L0X; holds the model id read.
    InvalidDevice(u8),
    /// The device did not become ready in time.
    Timeout,
}

/// VL53L0X on an I2C bus.
///
/// # Type Parameters
///
/// - `I2C`: I2C bus
/// - `D`: delay used while polling the device
pub struct Vl53l0x<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    /// Value read during bring-up which must be restored before each
    /// measurement.
    stop_variable: u8,
}

impl<I2C: I2c, D: DelayNs> Vl53l0x<I2C, D> {
    /// Creates a new `Vl53l0x` at the default address.
    ///
    /// This does not talk to the device; see [RangingDevice::begin].
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            address: DEFAULT_ADDRESS,
            stop_variable: 0,
        }
    }

    /// Releases the bus and the delay.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn init(&mut self) -> Result<(), Error<I2C::Error>> {
        // An earlier attempt may have stopped inside the private page.
        self.write_sequence(&DEFAULT_PAGE)?;

        let model_id = self.read_reg(reg::IDENTIFICATION_MODEL_ID)?;
        if model_id != MODEL_ID {
            return Err(Error::InvalidDevice(model_id));
        }

        // Switch I/O to 2V8 and set I2C standard mode.
        let pad = self.read_reg(reg::VHV_CONFIG_PAD_SCL_SDA_EXTSUP_HV)?;
        self.write_reg(reg::VHV_CONFIG_PAD_SCL_SDA_EXTSUP_HV, pad | 0x01)?;
        self.write_reg(reg::I2C_MODE, 0x00)?;

        self.write_sequence(&ENTER_PRIVATE)?;
        self.stop_variable = self.read_reg(reg::STOP_VARIABLE)?;
        self.write_sequence(&LEAVE_PRIVATE)?;

        // Disable the MSRC and pre-range signal rate limit checks.
        let msrc = self.read_reg(reg::MSRC_CONFIG_CONTROL)?;
        self.write_reg(reg::MSRC_CONFIG_CONTROL, msrc | 0x12)?;
        self.write_reg16(
            reg::FINAL_RANGE_CONFIG_MIN_COUNT_RATE_RTN_LIMIT,
            SIGNAL_RATE_LIMIT,
        )?;
        self.write_reg(reg::SYSTEM_SEQUENCE_CONFIG, 0xFF)?;

        self.configure_reference_spads()?;
        self.write_sequence(&DEFAULT_TUNING)?;

        // Interrupt on new sample ready, active low.
        self.write_reg(reg::SYSTEM_INTERRUPT_CONFIG_GPIO, 0x04)?;
        let mux = self.read_reg(reg::GPIO_HV_MUX_ACTIVE_HIGH)?;
        self.write_reg(reg::GPIO_HV_MUX_ACTIVE_HIGH, mux & !0x10)?;
        self.write_reg(reg::SYSTEM_INTERRUPT_CLEAR, 0x01)?;

        self.write_reg(reg::SYSTEM_SEQUENCE_CONFIG, 0xE8)?;

        // VHV calibration, then phase calibration.
        self.write_reg(reg::SYSTEM_SEQUENCE_CONFIG, 0x01)?;
        self.single_ref_calibration(0x40)?;
        self.write_reg(reg::SYSTEM_SEQUENCE_CONFIG, 0x02)?;
        self.single_ref_calibration(0x00)?;
        self.write_reg(reg::SYSTEM_SEQUENCE_CONFIG, 0xE8)?;

        Ok(())
    }

    fn configure_reference_spads(&mut self) -> Result<(), Error<I2C::Error>> {
        let (count, is_aperture) = self.spad_info()?;

        let mut map = [0u8; REF_SPADS / 8];
        self.read_multi(reg::GLOBAL_CONFIG_SPAD_ENABLES_REF_0, &mut map)?;

        self.write_reg(reg::PAGE, 0x01)?;
        self.write_reg(reg::DYNAMIC_SPAD_REF_EN_START_OFFSET, 0x00)?;
        self.write_reg(reg::DYNAMIC_SPAD_NUM_REQUESTED_REF_SPAD, 0x2C)?;
        self.write_reg(reg::PAGE, 0x00)?;
        self.write_reg(reg::GLOBAL_CONFIG_REF_EN_START_SELECT, 0xB4)?;

        select_reference_spads(&mut map, count, is_aperture);
        self.write_multi(reg::GLOBAL_CONFIG_SPAD_ENABLES_REF_0, &map)
    }

    /// Reads the reference SPAD count and type from the device.
    fn spad_info(&mut self) -> Result<(u8, bool), Error<I2C::Error>> {
        self.write_sequence(&ENTER_PRIVATE)?;
        self.write_reg(reg::PAGE, 0x06)?;
        let control = self.read_reg(reg::SPAD_INFO_CONTROL)?;
        self.write_reg(reg::SPAD_INFO_CONTROL, control | 0x04)?;
        self.write_sequence(&[
            (reg::PAGE, 0x07),
            (0x81, 0x01),
            (reg::POWER_MANAGEMENT, 0x01),
            (0x94, 0x6B),
            (reg::SPAD_INFO_CONTROL, 0x00),
        ])?;
        self.poll_until(reg::SPAD_INFO_CONTROL, |v| v != 0x00)?;
        self.write_reg(reg::SPAD_INFO_CONTROL, 0x01)?;

        let info = self.read_reg(reg::SPAD_INFO)?;

        self.write_reg(0x81, 0x00)?;
        self.write_reg(reg::PAGE, 0x06)?;
        let control = self.read_reg(reg::SPAD_INFO_CONTROL)?;
        self.write_reg(reg::SPAD_INFO_CONTROL, control & !0x04)?;
        self.write_reg(reg::PAGE, 0x01)?;
        self.write_sequence(&LEAVE_PRIVATE)?;

        Ok((info & 0x7F, info & 0x80 != 0))
    }

    fn single_ref_calibration(
        &mut self,
        vhv_init_byte: u8,
    ) -> Result<(), Error<I2C::Error>> {
        self.write_reg(reg::SYSRANGE_START, 0x01 | vhv_init_byte)?;
        self.poll_until(reg::RESULT_INTERRUPT_STATUS, |v| v & 0x07 != 0)?;
        self.write_reg(reg::SYSTEM_INTERRUPT_CLEAR, 0x01)?;
        self.write_reg(reg::SYSRANGE_START, 0x00)
    }

    fn measure(&mut self) -> Result<RawMeasurement, Error<I2C::Error>> {
        self.write_sequence(&ENTER_PRIVATE)?;
        self.write_reg(reg::STOP_VARIABLE, self.stop_variable)?;
        self.write_sequence(&LEAVE_PRIVATE)?;

        self.write_reg(reg::SYSRANGE_START, 0x01)?;
        self.poll_until(reg::SYSRANGE_START, |v| v & 0x01 == 0)?;
        self.poll_until(reg::RESULT_INTERRUPT_STATUS, |v| v & 0x07 != 0)?;

        let mut result = [0u8; 12];
        self.read_multi(reg::RESULT_RANGE_STATUS, &mut result)?;
        self.write_reg(reg::SYSTEM_INTERRUPT_CLEAR, 0x01)?;

        Ok(RawMeasurement {
            range_status: range_status_from_device(result[0]),
            range_millimeters: u16::from_be_bytes([result[10], result[11]]),
        })
    }

    /// Polls a register until `ready` accepts its value.
    fn poll_until(
        &mut self,
        register: u8,
        ready: impl Fn(u8) -> bool,
    ) -> Result<u8, Error<I2C::Error>> {
        for _ in 0..POLL_LIMIT {
            let value = self.read_reg(register)?;
            if ready(value) {
                return Ok(value);
            }
            self.delay.delay_ms(POLL_INTERVAL_MS);
        }
        Err(Error::Timeout)
    }

    fn write_sequence(
        &mut self,
        writes: &[(u8, u8)],
    ) -> Result<(), Error<I2C::Error>> {
        for &(register, value) in writes {
            self.write_reg(register, value)?;
        }
        Ok(())
    }

    fn write_reg(
        &mut self,
        register: u8,
        value: u8,
    ) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[register, value])
            .map_err(Error::Bus)
    }

    fn write_reg16(
        &mut self,
        register: u8,
        value: u16,
    ) -> Result<(), Error<I2C::Error>> {
        let [hi, lo] = value.to_be_bytes();
        self.i2c
            .write(self.address, &[register, hi, lo])
            .map_err(Error::Bus)
    }

    fn write_multi(
        &mut self,
        register: u8,
        values: &[u8; REF_SPADS / 8],
    ) -> Result<(), Error<I2C::Error>> {
        let mut buffer = [0u8; REF_SPADS / 8 + 1];
        buffer[0] = register;
        buffer[1..].copy_from_slice(values);
        self.i2c.write(self.address, &buffer).map_err(Error::Bus)
    }

    fn read_reg(&mut self, register: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buffer = [0u8; 1];
        self.read_multi(register, &mut buffer)?;
        Ok(buffer[0])
    }

    fn read_multi(
        &mut self,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write_read(self.address, &[register], buffer)
            .map_err(Error::Bus)
    }
}

impl<I2C: I2c, D: DelayNs> RangingDevice for Vl53l0x<I2C, D> {
    type Error = Error<I2C::Error>;

    fn begin(&mut self) -> Result<(), Self::Error> {
        self.init()
    }

    fn ranging_test(&mut self) -> Result<RawMeasurement, Self::Error> {
        self.measure()
    }
}

/// Keeps only the reference SPADs that should be enabled.
///
/// SPADs are enabled in order starting from the first of the right type
/// (aperture SPADs start at 12), until `count` are enabled. Every other SPAD
/// in the map is cleared.
fn select_reference_spads(
    map: &mut [u8; REF_SPADS / 8],
    count: u8,
    is_aperture: bool,
) {
    let first = if is_aperture { 12 } else { 0 };
    let mut enabled = 0;
    for i in 0..REF_SPADS {
        let bit = 1u8 << (i % 8);
        if i < first || enabled == count {
            map[i / 8] &= !bit;
        } else if map[i / 8] & bit != 0 {
            enabled += 1;
        }
    }
}

/// Converts the device status bits of the range status register into the
/// range status reported by ST's API.
fn range_status_from_device(register: u8) -> RangeStatus {
    match (register & 0x78) >> 3 {
        11 => RangeStatus::VALID,
        1 | 2 | 3 => RangeStatus::HARDWARE_FAIL,
        6 | 9 => RangeStatus::OUT_OF_RANGE,
        8 | 10 => RangeStatus::MIN_RANGE_FAIL,
        4 => RangeStatus::SIGNAL_FAIL,
        _ => RangeStatus::NONE,
    }
}
