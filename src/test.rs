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

/// Check that two colours differ by at most one step in each channel.
#[macro_export]
macro_rules! assert_channels_near {
    ($actual:expr,$expected:expr) => {{
        let actual: $crate::Colour = $actual;
        let expected: $crate::Colour = $expected;
        for (a, e) in [
            (actual.red(), expected.red()),
            (actual.green(), expected.green()),
            (actual.blue(), expected.blue()),
            (actual.alpha(), expected.alpha()),
        ] {
            assert!(
                a.abs_diff(e) <= 1,
                "{} is not within one step of {}",
                actual,
                expected
            );
        }
    }};
}
