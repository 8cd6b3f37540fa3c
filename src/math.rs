//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// Clamp a value to the range 0.0 to 1.0. NaN is treated as 0.0.
pub fn normalize<T: Float>(value: T) -> T {
    if value.is_nan() {
        T::zero()
    } else {
        value.max(T::zero()).min(T::one())
    }
}

/// Wrap a value into the half open range [0.0, 1.0). Used for hues, which are
/// a fraction of a full turn. NaN is treated as 0.0.
pub fn normalize_hue<T: Float>(value: T) -> T {
    if !value.is_finite() {
        return T::zero();
    }

    let wrapped = value - value.floor();
    // Tiny negative values can round up to exactly one.
    if wrapped >= T::one() {
        T::zero()
    } else {
        wrapped
    }
}

/// Linearly interpolate between `a` and `b`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Returns true if the value is close enough to zero to be considered zero.
pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon()
}

/// Scale a value in the range 0.0 to 1.0 to a byte, rounding to the nearest
/// value. Values outside the range are clamped first.
pub fn to_byte(value: Component) -> u8 {
    (normalize(value) * 255.0).round() as u8
}

/// Scale a byte to the range 0.0 to 1.0.
pub fn from_byte(value: u8) -> Component {
    value as Component / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps() {
        assert_eq!(normalize(-0.5), 0.0);
        assert_eq!(normalize(0.25), 0.25);
        assert_eq!(normalize(1.5), 1.0);
        assert_eq!(normalize(Component::NAN), 0.0);
    }

    #[test]
    fn normalize_hue_wraps() {
        assert_eq!(normalize_hue(0.25), 0.25);
        assert_eq!(normalize_hue(1.0), 0.0);
        assert_eq!(normalize_hue(1.25), 0.25);
        assert_eq!(normalize_hue(-0.25), 0.75);
        assert_eq!(normalize_hue(Component::INFINITY), 0.0);
    }

    #[test]
    fn byte_scaling_rounds() {
        assert_eq!(to_byte(0.0), 0);
        assert_eq!(to_byte(1.0), 255);
        assert_eq!(to_byte(0.5), 128);
        assert_eq!(to_byte(-3.0), 0);
        assert_eq!(to_byte(3.0), 255);
        assert_eq!(from_byte(255), 1.0);
        assert_eq!(from_byte(0), 0.0);
    }

    #[test]
    fn lerp_between() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert!(almost_zero(lerp(1.0, 1.0, 0.3) - 1.0));
    }
}
