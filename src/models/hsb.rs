//! Model a colour with the HSB (hue, saturation, brightness) notation.

use crate::color::Component;

pigment_macros::gen_model! {
    /// A colour specified with the HSB notation.
    pub struct Hsb {
        /// The hue as a fraction of a full turn, in the range [0.0, 1.0).
        hue: Component,
        /// The saturation component of the colour, 0.0 to 1.0.
        saturation: Component,
        /// The brightness component of the colour, 0.0 to 1.0.
        brightness: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Components;

    #[test]
    fn fields_are_public() {
        let hsb = Hsb::new(0.5, 0.25, 0.75);
        assert_eq!(hsb.hue, 0.5);
        assert_eq!(hsb.saturation, 0.25);
        assert_eq!(hsb.brightness, 0.75);
        assert_eq!(Components::from(hsb), Components(0.5, 0.25, 0.75));
    }
}
