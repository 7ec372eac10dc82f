/// Applies a correction factor to an unadjusted coulomb count or battery
/// current measurement.
///
/// Returns `value + (value * factor) >> 16`, shifting arithmetically.
/// Results above `u32::MAX` saturate.
///
/// # Examples
///
/// ```
/// use ltc3335_correction::adjust;
///
/// // One accumulator count at prescaler 5 is 31638 mAs. With the
/// // 10 mA / 3.3 V table at 4.5 V the factor is 8826 (13.4%).
/// assert_eq!(adjust(31638, 8826), 35898);
/// ```
pub fn adjust(value: u32, factor: i16) -> u32 {
    let value = i64::from(value);
    let adjusted = value + ((value * i64::from(factor)) >> 16);

    // never negative, factor >= -32768 takes off at most half of `value`
    u32::try_from(adjusted).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::adjust;

    #[test]
    fn zero_factor_is_identity() {
        assert_eq!(adjust(0, 0), 0);
        assert_eq!(adjust(12345, 0), 12345);
        assert_eq!(adjust(u32::MAX, 0), u32::MAX);
    }

    #[test]
    fn positive_factor() {
        assert_eq!(adjust(31638, 8826), 35898);
        // 65536 * 16384 >> 16 = 16384
        assert_eq!(adjust(65536, 16384), 81920);
        // 100 * 100 >> 16 = 0
        assert_eq!(adjust(100, 100), 100);
    }

    #[test]
    fn negative_factor_shifts_arithmetically() {
        // -65536 * 16384 >> 16 = -16384
        assert_eq!(adjust(65536, -16384), 49152);
        // 100 * -100 = -10000, >> 16 rounds down to -1
        assert_eq!(adjust(100, -100), 99);
        assert_eq!(adjust(2, i16::MIN), 1);
    }

    #[test]
    fn saturates() {
        assert_eq!(adjust(u32::MAX, i16::MAX), u32::MAX);
        assert_eq!(adjust(u32::MAX, i16::MIN), u32::MAX / 2);
    }
}
