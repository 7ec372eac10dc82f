//! Software correction for the LTC3335 coulomb counter
//!
//! The LTC3335 coulomb counter is very accurate at high peak currents, but
//! can be off by up to 40% at low ones. The typical error depends on the
//! configured peak current, the output voltage, and the battery voltage.
//! This crate carries the datasheet error tables and interpolates them for
//! a measured battery voltage.
//!
//! The returned factor is a fraction of 65536. Use [`adjust`] to apply it
//! to an unadjusted coulomb count or battery current measurement.
//!
//! The corrections are only valid at room temperature with the recommended
//! Coilcraft LPS5030-xxxMRB inductor.

#![cfg_attr(not(test), no_std)]

mod adjust;
mod battery_monitor;
pub mod config;
mod interpolate;
pub mod tables;

pub use adjust::adjust;
pub use battery_monitor::{AdcConfig, BatteryMonitor};
pub use config::{Config, OutputVoltage, PeakCurrent};
pub use tables::CorrectionTable;

use interpolate::interpolate;

/// Battery voltage (mV) of the first table entry.
pub const VBAT_MIN: i32 = 1800;

/// Battery voltage (mV) between two table entries.
pub const VBAT_STEP: i32 = 100;

/// Number of entries in each table.
pub const VBAT_NUM: usize = 38;

/// Battery voltage (mV) of the last table entry.
pub const VBAT_MAX: i32 = VBAT_MIN + VBAT_STEP * (VBAT_NUM as i32 - 1);

const _: () = assert!(VBAT_MAX - VBAT_MIN == VBAT_STEP * (VBAT_NUM as i32 - 1));
const _: () = assert!(VBAT_MAX == 5500);

/// Returns the correction factor for `vbat_mv` from `table`, using linear
/// interpolation between the entries.
///
/// Battery voltages outside of the table clamp to its first or last entry.
///
/// # Examples
///
/// ```
/// use ltc3335_correction::{get_software_correction_factor, tables, OutputVoltage, PeakCurrent};
///
/// let table = tables::select(PeakCurrent::Ma10, OutputVoltage::V3_3);
///
/// // 8826 / 65536 = 13.4%, as in graph G43 of the datasheet
/// assert_eq!(get_software_correction_factor(table, 4500), 8826);
/// assert_eq!(get_software_correction_factor(table, 4550), 8950);
/// ```
pub fn get_software_correction_factor(table: &CorrectionTable, vbat_mv: i32) -> i16 {
    if vbat_mv <= VBAT_MIN {
        return table[0];
    }

    if vbat_mv >= VBAT_MAX {
        return table[VBAT_NUM - 1];
    }

    let index = table_index(vbat_mv);

    interpolate(
        VBAT_MIN + index as i32 * VBAT_STEP,
        VBAT_STEP,
        table[index],
        table[index + 1],
        vbat_mv,
    )
}

// Only valid for VBAT_MIN < vbat_mv < VBAT_MAX
fn table_index(vbat_mv: i32) -> usize {
    ((vbat_mv - VBAT_MIN) / VBAT_STEP) as usize
}

/// Correction for one LTC3335 configuration.
///
/// # Examples
///
/// ```
/// use ltc3335_correction::{Config, Correction, OutputVoltage, PeakCurrent};
///
/// let correction = Correction::new(Config::new(PeakCurrent::Ma10, OutputVoltage::V3_3));
///
/// assert_eq!(correction.factor(4500), 8826);
/// assert_eq!(correction.adjust(31638, 4500), 35898);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Correction {
    table: &'static CorrectionTable,
}

impl Correction {
    /// Returns the correction for the table selected by `config`.
    pub const fn new(config: Config) -> Self {
        Self::from_table(config.table())
    }

    /// Returns a correction using `table` directly.
    pub const fn from_table(table: &'static CorrectionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'static CorrectionTable {
        self.table
    }

    /// Returns the correction factor at `vbat_mv`. See
    /// [`get_software_correction_factor`].
    pub fn factor(&self, vbat_mv: i32) -> i16 {
        get_software_correction_factor(self.table, vbat_mv)
    }

    /// Corrects `value` for a battery at `vbat_mv`.
    pub fn adjust(&self, value: u32, vbat_mv: i32) -> u32 {
        adjust(value, self.factor(vbat_mv))
    }

    /// Returns the smallest factor that can be returned by
    /// [`factor`](Correction::factor).
    pub fn min_factor(&self) -> i16 {
        self.table.iter().copied().min().unwrap_or_default()
    }

    /// Returns the largest factor that can be returned by
    /// [`factor`](Correction::factor).
    pub fn max_factor(&self) -> i16 {
        self.table.iter().copied().max().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correction() -> Correction {
        Correction::new(Config::new(PeakCurrent::Ma10, OutputVoltage::V3_3))
    }

    fn falling() -> Correction {
        Correction::new(Config::new(PeakCurrent::Ma50, OutputVoltage::V1_8))
    }

    #[test]
    fn matching_exact_values() {
        assert_eq!(correction().factor(1800), 3312);
        assert_eq!(correction().factor(4500), 8826);
        assert_eq!(correction().factor(4600), 9074);
        assert_eq!(correction().factor(5500), 11519);
    }

    #[test]
    fn interpolates() {
        assert_eq!(correction().factor(4550), 8950);
        assert_eq!(correction().factor(1801), 3314);
        assert_eq!(correction().factor(1850), 3423);
        assert_eq!(correction().factor(3333), 6197);
        assert_eq!(correction().factor(5499), 11516);
    }

    #[test]
    fn interpolates_falling_segments() {
        assert_eq!(falling().factor(1801), 252);
        assert_eq!(falling().factor(1850), 211);
        assert_eq!(falling().factor(1899), 170);
    }

    #[test]
    fn outside_range() {
        assert_eq!(correction().factor(1700), 3312);
        assert_eq!(correction().factor(0), 3312);
        assert_eq!(correction().factor(-5), 3312);
        assert_eq!(correction().factor(i32::MIN), 3312);
        assert_eq!(correction().factor(6000), 11519);
        assert_eq!(correction().factor(i32::MAX), 11519);
    }

    #[test]
    fn identity_at_table_entries() {
        for peak_current in PeakCurrent::ALL {
            for output_voltage in OutputVoltage::ALL {
                let table = tables::select(peak_current, output_voltage);

                for (k, &entry) in table.iter().enumerate() {
                    let vbat_mv = VBAT_MIN + k as i32 * VBAT_STEP;
                    assert_eq!(get_software_correction_factor(table, vbat_mv), entry);
                }
            }
        }
    }

    #[test]
    fn index_stays_inside_table() {
        for vbat_mv in (VBAT_MIN + 1)..VBAT_MAX {
            assert!(table_index(vbat_mv) <= VBAT_NUM - 2, "{}", vbat_mv);
        }
    }

    #[test]
    fn stays_between_neighbouring_entries() {
        for peak_current in PeakCurrent::ALL {
            for output_voltage in OutputVoltage::ALL {
                let table = tables::select(peak_current, output_voltage);

                for vbat_mv in VBAT_MIN..=VBAT_MAX {
                    let index = table_index(vbat_mv).min(VBAT_NUM - 2);
                    let lo = table[index].min(table[index + 1]);
                    let hi = table[index].max(table[index + 1]);
                    let factor = get_software_correction_factor(table, vbat_mv);

                    assert!(lo <= factor && factor <= hi, "{}", vbat_mv);
                }
            }
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let correction = correction();

        for vbat_mv in (1500..6000).step_by(7) {
            assert_eq!(correction.factor(vbat_mv), correction.factor(vbat_mv));
        }
    }

    #[test]
    fn shared_between_threads() {
        static CORRECTION: Correction =
            Correction::new(Config::new(PeakCurrent::Ma10, OutputVoltage::V3_3));

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| CORRECTION.factor(4550)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 8950);
        }
    }

    #[test]
    fn adjusts() {
        assert_eq!(correction().adjust(31638, 4500), 35898);
        assert_eq!(correction().adjust(0, 4500), 0);
    }

    #[test]
    fn min_factor() {
        assert_eq!(correction().min_factor(), 3312);
        assert_eq!(falling().min_factor(), *falling().table().iter().min().unwrap());
    }

    #[test]
    fn max_factor() {
        assert_eq!(correction().max_factor(), 11519);
        assert_eq!(falling().max_factor(), *falling().table().iter().max().unwrap());
    }
}
