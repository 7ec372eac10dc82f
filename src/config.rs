//! Peak current and output voltage settings
//!
//! The LTC3335 selects both settings with pins. Together they decide which
//! correction table applies to the coulomb counter.

use core::fmt;

use crate::tables::{self, CorrectionTable};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Peak input current of the buck-boost converter
pub enum PeakCurrent {
    /// 5 mA
    Ma5,
    /// 10 mA
    Ma10,
    /// 15 mA
    Ma15,
    /// 25 mA
    Ma25,
    /// 50 mA
    Ma50,
    /// 100 mA
    Ma100,
    /// 150 mA
    Ma150,
    /// 250 mA
    Ma250,
}

impl PeakCurrent {
    /// Every selectable peak current, lowest first.
    pub const ALL: [PeakCurrent; 8] = [
        PeakCurrent::Ma5,
        PeakCurrent::Ma10,
        PeakCurrent::Ma15,
        PeakCurrent::Ma25,
        PeakCurrent::Ma50,
        PeakCurrent::Ma100,
        PeakCurrent::Ma150,
        PeakCurrent::Ma250,
    ];

    /// Returns the peak current in mA.
    pub const fn milliamps(self) -> u32 {
        match self {
            PeakCurrent::Ma5 => 5,
            PeakCurrent::Ma10 => 10,
            PeakCurrent::Ma15 => 15,
            PeakCurrent::Ma25 => 25,
            PeakCurrent::Ma50 => 50,
            PeakCurrent::Ma100 => 100,
            PeakCurrent::Ma150 => 150,
            PeakCurrent::Ma250 => 250,
        }
    }
}

impl TryFrom<u32> for PeakCurrent {
    type Error = Error;

    /// Converts a peak current in mA.
    fn try_from(milliamps: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|peak_current| peak_current.milliamps() == milliamps)
            .ok_or(Error::UnsupportedPeakCurrent(milliamps))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Regulated output voltage
pub enum OutputVoltage {
    /// 1.8 V
    V1_8,
    /// 2.5 V
    V2_5,
    /// 2.8 V
    V2_8,
    /// 3.0 V
    V3_0,
    /// 3.3 V
    V3_3,
    /// 3.6 V
    V3_6,
    /// 4.5 V
    V4_5,
    /// 5.0 V
    V5_0,
}

impl OutputVoltage {
    /// Every selectable output voltage, lowest first.
    pub const ALL: [OutputVoltage; 8] = [
        OutputVoltage::V1_8,
        OutputVoltage::V2_5,
        OutputVoltage::V2_8,
        OutputVoltage::V3_0,
        OutputVoltage::V3_3,
        OutputVoltage::V3_6,
        OutputVoltage::V4_5,
        OutputVoltage::V5_0,
    ];

    /// Returns the output voltage in mV.
    pub const fn millivolts(self) -> u32 {
        match self {
            OutputVoltage::V1_8 => 1800,
            OutputVoltage::V2_5 => 2500,
            OutputVoltage::V2_8 => 2800,
            OutputVoltage::V3_0 => 3000,
            OutputVoltage::V3_3 => 3300,
            OutputVoltage::V3_6 => 3600,
            OutputVoltage::V4_5 => 4500,
            OutputVoltage::V5_0 => 5000,
        }
    }
}

impl TryFrom<u32> for OutputVoltage {
    type Error = Error;

    /// Converts an output voltage in mV.
    fn try_from(millivolts: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|output_voltage| output_voltage.millivolts() == millivolts)
            .ok_or(Error::UnsupportedOutputVoltage(millivolts))
    }
}

/// Configuration of the LTC3335 that the correction is valid for.
///
/// # Examples
///
/// ```
/// use ltc3335_correction::{Config, OutputVoltage, PeakCurrent};
///
/// const CONFIG: Config = Config::new(PeakCurrent::Ma10, OutputVoltage::V3_3);
///
/// assert_eq!(CONFIG.table()[0], 3312);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub peak_current: PeakCurrent,
    pub output_voltage: OutputVoltage,
}

impl Config {
    pub const fn new(peak_current: PeakCurrent, output_voltage: OutputVoltage) -> Self {
        Self {
            peak_current,
            output_voltage,
        }
    }

    /// Builds a configuration from a peak current in mA and an output
    /// voltage in mV, eg. as read back from a settings store.
    ///
    /// ```
    /// use ltc3335_correction::{config::Error, Config, OutputVoltage, PeakCurrent};
    ///
    /// assert_eq!(
    ///     Config::from_settings(10, 3300),
    ///     Ok(Config::new(PeakCurrent::Ma10, OutputVoltage::V3_3)),
    /// );
    /// assert_eq!(
    ///     Config::from_settings(20, 3300),
    ///     Err(Error::UnsupportedPeakCurrent(20)),
    /// );
    /// ```
    pub fn from_settings(milliamps: u32, millivolts: u32) -> Result<Self, Error> {
        let config = PeakCurrent::try_from(milliamps).and_then(|peak_current| {
            Ok(Self::new(peak_current, OutputVoltage::try_from(millivolts)?))
        });

        if let Err(error) = &config {
            log::warn!("rejected LTC3335 settings: {}", error);
        }

        config
    }

    /// Returns the correction table for this configuration.
    pub const fn table(&self) -> &'static CorrectionTable {
        tables::select(self.peak_current, self.output_voltage)
    }
}

/// Rejected configuration value
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Peak current (mA) the LTC3335 can't be configured for
    UnsupportedPeakCurrent(u32),

    /// Output voltage (mV) the LTC3335 can't be configured for
    UnsupportedOutputVoltage(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnsupportedPeakCurrent(milliamps) => {
                write!(f, "unsupported peak current: {} mA", milliamps)
            }
            Error::UnsupportedOutputVoltage(millivolts) => {
                write!(f, "unsupported output voltage: {} mV", millivolts)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_current_from_milliamps() {
        for peak_current in PeakCurrent::ALL {
            assert_eq!(
                PeakCurrent::try_from(peak_current.milliamps()),
                Ok(peak_current)
            );
        }

        assert_eq!(
            PeakCurrent::try_from(0),
            Err(Error::UnsupportedPeakCurrent(0))
        );
        assert_eq!(
            PeakCurrent::try_from(200),
            Err(Error::UnsupportedPeakCurrent(200))
        );
    }

    #[test]
    fn output_voltage_from_millivolts() {
        assert_eq!(OutputVoltage::try_from(1800), Ok(OutputVoltage::V1_8));
        assert_eq!(OutputVoltage::try_from(5000), Ok(OutputVoltage::V5_0));
        assert_eq!(
            OutputVoltage::try_from(3),
            Err(Error::UnsupportedOutputVoltage(3))
        );
    }

    #[test]
    fn from_settings_reports_first_bad_value() {
        assert_eq!(
            Config::from_settings(7, 1234),
            Err(Error::UnsupportedPeakCurrent(7))
        );
        assert_eq!(
            Config::from_settings(250, 1234),
            Err(Error::UnsupportedOutputVoltage(1234))
        );
    }

    #[test]
    fn table_matches_selection() {
        let config = Config::new(PeakCurrent::Ma150, OutputVoltage::V4_5);

        assert_eq!(
            config.table(),
            tables::select(PeakCurrent::Ma150, OutputVoltage::V4_5)
        );
        assert_eq!(config.table()[0], -1501);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::UnsupportedPeakCurrent(20).to_string(),
            "unsupported peak current: 20 mA"
        );
        assert_eq!(
            Error::UnsupportedOutputVoltage(1234).to_string(),
            "unsupported output voltage: 1234 mV"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_from_settings_file() {
        let config: Config =
            serde_json::from_str(r#"{"peak_current":"Ma25","output_voltage":"V2_8"}"#).unwrap();

        assert_eq!(config, Config::new(PeakCurrent::Ma25, OutputVoltage::V2_8));
    }
}
