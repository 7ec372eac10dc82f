use crate::{adjust, Correction};
use embedded_hal::adc::{Channel, OneShot};

/// How raw ADC readings translate to battery voltage.
///
/// - `max_voltage`: The battery voltage corresponding to the largest value possible for the ADC (mV).
///   Include any resistor divider between the battery and the ADC pin.
/// - `precision`: The precision of the ADC in bits (eg. for 12-bit precision, use `12`)
///
/// # Examples
///
/// ```
/// use ltc3335_correction::AdcConfig;
///
/// let config = AdcConfig {
///     max_voltage: 6600, // 3.3 V reference behind a 1:2 divider
///     precision: 12,     // 12 bits of precision
/// };
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AdcConfig {
    pub max_voltage: u32,
    pub precision: u32,
}

impl AdcConfig {
    fn millivolts(&self, adc_value: u32) -> u32 {
        let millivolts = u64::from(adc_value) * u64::from(self.max_voltage) >> self.precision;

        u32::try_from(millivolts).unwrap_or(u32::MAX)
    }
}

/// Samples the battery voltage with an ADC and looks up the matching
/// correction factor.
#[derive(Debug)]
pub struct BatteryMonitor<Pin> {
    pin: Pin,
    adc_config: AdcConfig,
    correction: Correction,
}

type Error<Adc, ADC, Word, Pin> = nb::Error<<Adc as OneShot<ADC, Word, Pin>>::Error>;

impl<Pin> BatteryMonitor<Pin> {
    /// Returns a monitor reading the battery voltage from `pin`.
    ///
    /// `adc_config.precision` must be smaller than 32 or this function
    /// will panic when running in debug mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use ltc3335_correction::{AdcConfig, BatteryMonitor, Config, Correction, OutputVoltage, PeakCurrent};
    /// # use embedded_hal_mock::adc::MockChan0;
    /// #
    /// # let pin = MockChan0 {};
    ///
    /// let monitor = BatteryMonitor::new(
    ///     pin,
    ///     AdcConfig {
    ///         max_voltage: 6600,
    ///         precision: 12,
    ///     },
    ///     Correction::new(Config::new(PeakCurrent::Ma10, OutputVoltage::V3_3)),
    /// );
    /// ```
    pub fn new<ADC>(pin: Pin, adc_config: AdcConfig, correction: Correction) -> Self
    where
        Pin: Channel<ADC>,
    {
        debug_assert!(
            adc_config.precision < 32,
            "The ADC precision must be smaller than 32 bits"
        );

        log::debug!(
            "monitoring battery: {} mV full scale, {} bits",
            adc_config.max_voltage,
            adc_config.precision
        );

        Self {
            pin,
            adc_config,
            correction,
        }
    }

    /// Destroys the monitor and returns the `Pin`.
    pub fn free(self) -> Pin {
        self.pin
    }

    pub fn correction(&self) -> &Correction {
        &self.correction
    }

    /// Returns the battery voltage in mV.
    pub fn read_millivolts<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<u32, Error<Adc, ADC, Word, Pin>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let adc_value: u32 = adc.read(&mut self.pin)?.into();
        let millivolts = self.adc_config.millivolts(adc_value);

        log::trace!("battery: adc {} -> {} mV", adc_value, millivolts);

        Ok(millivolts)
    }

    /// Returns the correction factor for the current battery voltage.
    ///
    /// # Examples
    ///
    /// ```
    /// use ltc3335_correction::{AdcConfig, BatteryMonitor, Config, Correction, OutputVoltage, PeakCurrent};
    /// # use embedded_hal_mock::adc::{Mock, MockChan0, Transaction};
    /// #
    /// # let expectations: [Transaction<u16>; 1] = [Transaction::read(0, 2824)];
    /// # let mut adc = Mock::new(&expectations);
    /// # let pin = MockChan0 {};
    ///
    /// let mut monitor = BatteryMonitor::new(
    ///     pin,
    ///     AdcConfig {
    ///         max_voltage: 6600,
    ///         precision: 12,
    ///     },
    ///     Correction::new(Config::new(PeakCurrent::Ma10, OutputVoltage::V3_3)),
    /// );
    ///
    /// // 2824 / 4096 * 6600 mV = 4550 mV
    /// assert_eq!(monitor.read_factor(&mut adc), Ok(8950));
    /// ```
    pub fn read_factor<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<i16, Error<Adc, ADC, Word, Pin>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let millivolts = self.read_millivolts(adc)?;
        let vbat_mv = i32::try_from(millivolts).unwrap_or(i32::MAX);
        let factor = self.correction.factor(vbat_mv);

        log::trace!("correction factor at {} mV: {}", vbat_mv, factor);

        Ok(factor)
    }

    /// Corrects `value`, an unadjusted coulomb count or battery current,
    /// for the current battery voltage.
    pub fn adjust<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
        value: u32,
    ) -> Result<u32, Error<Adc, ADC, Word, Pin>>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        Ok(adjust(value, self.read_factor(adc)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, OutputVoltage, PeakCurrent};
    use embedded_hal_mock::{
        adc::{Mock, MockChan0, Transaction},
        common::Generic,
        MockError,
    };
    use std::io::ErrorKind;

    fn adc_config() -> AdcConfig {
        AdcConfig {
            max_voltage: 6600,
            precision: 12,
        }
    }

    fn monitor() -> BatteryMonitor<MockChan0> {
        let pin = MockChan0 {};
        BatteryMonitor::new(
            pin,
            adc_config(),
            Correction::new(Config::new(PeakCurrent::Ma10, OutputVoltage::V3_3)),
        )
    }

    fn adc(expectations: &[Transaction<u16>]) -> Generic<Transaction<u16>> {
        Mock::new(expectations)
    }

    fn assert_factor_ok(value: u16, expected: i16) {
        let mut monitor = monitor();
        let expectations = [Transaction::read(0, value)];
        let mut adc = adc(&expectations);

        assert_eq!(monitor.read_factor(&mut adc), Ok(expected))
    }

    #[test]
    #[should_panic]
    fn panics_if_precision_too_large() {
        BatteryMonitor::new(
            MockChan0 {},
            AdcConfig {
                max_voltage: 6600,
                precision: 32,
            },
            Correction::new(Config::new(PeakCurrent::Ma10, OutputVoltage::V3_3)),
        );
    }

    #[test]
    fn converts_to_millivolts() {
        assert_eq!(adc_config().millivolts(0), 0);
        assert_eq!(adc_config().millivolts(1117), 1799);
        assert_eq!(adc_config().millivolts(2793), 4500);
        assert_eq!(adc_config().millivolts(4095), 6598);
    }

    #[test]
    fn reads_millivolts() {
        let mut monitor = monitor();
        let expectations = [Transaction::read(0, 2793)];
        let mut adc = adc(&expectations);

        assert_eq!(monitor.read_millivolts(&mut adc), Ok(4500));
    }

    #[test]
    fn matching_exact_values() {
        assert_factor_ok(2793, 8826);
    }

    #[test]
    fn interpolates() {
        assert_factor_ok(2824, 8950);
    }

    #[test]
    fn outside_range() {
        assert_factor_ok(0, 3312);
        assert_factor_ok(1117, 3312);
        assert_factor_ok(4095, 11519);
    }

    #[test]
    fn adjusts() {
        let mut monitor = monitor();
        let expectations = [Transaction::read(0, 2793)];
        let mut adc = adc(&expectations);

        assert_eq!(monitor.adjust(&mut adc, 31638), Ok(35898));
    }

    #[test]
    fn error() {
        let mut adc =
            adc(&[Transaction::read(0, 0).with_error(MockError::Io(ErrorKind::InvalidData))]);
        assert!(monitor().read_factor(&mut adc).is_err());
    }

    #[test]
    fn free_returns_pin() {
        let monitor = monitor();
        assert_eq!(monitor.correction().factor(4500), 8826);
        let _pin: MockChan0 = monitor.free();
    }
}
