/// Check for equality between two components allowing for 16-bit rounding
/// errors.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!(
            $actual,
            $expected,
            epsilon = 1.0 / i16::MAX as $crate::Component
        );
    }};
}

/// Check that two colors differ by at most `tolerance` on every channel.
#[macro_export]
macro_rules! assert_color_near {
    ($actual:expr,$expected:expr,$tolerance:expr) => {{
        let actual: $crate::Color = $actual;
        let expected: $crate::Color = $expected;
        let tolerance: u8 = $tolerance;
        assert!(
            actual.red.abs_diff(expected.red) <= tolerance
                && actual.green.abs_diff(expected.green) <= tolerance
                && actual.blue.abs_diff(expected.blue) <= tolerance,
            "{:?} is not within {} of {:?}",
            actual,
            tolerance,
            expected
        );
    }};
}
