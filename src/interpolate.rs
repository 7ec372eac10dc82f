/// Interpolates between `y0` at `x0` and `y1` at `x0 + step`.
///
/// The fraction is rounded by adding half a step before the division.
/// Division truncates toward zero, so ties on a falling segment round up
/// rather than away from zero.
pub fn interpolate(x0: i32, step: i32, y0: i16, y1: i16, x: i32) -> i16 {
    let y0 = i32::from(y0);
    let y1 = i32::from(y1);

    // |y1 - y0| * (x - x0) stays well inside i32 for any i16 pair
    let result = y0 + ((y1 - y0) * (x - x0) + step / 2) / step;

    result as i16
}

#[cfg(test)]
mod tests {
    #[test]
    fn interpolate() {
        assert_eq!(super::interpolate(0, 10, 0, 100, 0), 0);
        assert_eq!(super::interpolate(0, 10, 0, 100, 2), 20);
        assert_eq!(super::interpolate(0, 10, 0, 100, 5), 50);
        assert_eq!(super::interpolate(0, 10, 0, 100, 8), 80);
        assert_eq!(super::interpolate(0, 10, 0, 100, 10), 100);
    }

    #[test]
    fn interpolate_flipped_y() {
        // the half step bias pulls every falling sample up by one here
        assert_eq!(super::interpolate(0, 10, 100, 0, 0), 100);
        assert_eq!(super::interpolate(0, 10, 100, 0, 2), 81);
        assert_eq!(super::interpolate(0, 10, 100, 0, 5), 51);
        assert_eq!(super::interpolate(0, 10, 100, 0, 8), 21);
        assert_eq!(super::interpolate(0, 10, 100, 0, 9), 11);
    }

    #[test]
    fn rounds_half_up_when_rising() {
        // 248 * 50 / 100 = 124 exactly, 3 * 50 / 100 = 1.5
        assert_eq!(super::interpolate(4500, 100, 8826, 9074, 4550), 8950);
        assert_eq!(super::interpolate(0, 100, 0, 3, 50), 2);
        assert_eq!(super::interpolate(0, 100, 0, 3, 49), 1);
    }

    #[test]
    fn rounds_toward_zero_when_falling() {
        // -3 * 50 / 100 = -1.5, rounds to -1
        assert_eq!(super::interpolate(0, 100, 0, -3, 50), -1);
        // -84 * 50 / 100 = -42 exactly, but the bias lands on -41
        assert_eq!(super::interpolate(1800, 100, 252, 168, 1850), 211);
        assert_eq!(super::interpolate(1800, 100, 252, 168, 1801), 252);
    }

    #[test]
    fn negative_values() {
        assert_eq!(super::interpolate(1800, 100, -1163, -1170, 1850), -1166);
        assert_eq!(super::interpolate(0, 100, -100, 100, 50), 0);
    }
}
