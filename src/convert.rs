//! Conversions between the 8-bit [`Colour`] and its floating point models.
//!
//! Conversions only operate on the 3 colour components; alpha is carried
//! alongside by the callers.

use crate::{
    color::{Colour, Component},
    math::from_byte,
    models::{Hsb, Rgb},
};

impl Colour {
    /// Return the colour channels as normalized floating point values.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(
            from_byte(self.red()),
            from_byte(self.green()),
            from_byte(self.blue()),
        )
    }

    /// Return the hue, saturation and brightness of this colour all at once.
    /// Prefer this over calling [`Colour::hue`], [`Colour::saturation`] and
    /// [`Colour::brightness`] separately, each of which does the full
    /// conversion.
    pub fn hsb(&self) -> Hsb {
        self.to_rgb().to_hsb()
    }

    /// Return the hue of this colour in the range [0.0, 1.0).
    pub fn hue(&self) -> Component {
        self.hsb().hue
    }

    /// Return the saturation of this colour in the range 0.0 to 1.0.
    pub fn saturation(&self) -> Component {
        self.hsb().saturation
    }

    /// Return the brightness of this colour in the range 0.0 to 1.0.
    pub fn brightness(&self) -> Component {
        self.hsb().brightness
    }

    /// Build a colour from HSB components, keeping this colour's alpha.
    pub(crate) fn with_hsb(&self, hsb: Hsb) -> Colour {
        Colour::from_model(hsb.to_rgb(), self.alpha())
    }
}

impl Rgb {
    /// Convert a colour from RGB components to the HSB notation.
    pub fn to_hsb(&self) -> Hsb {
        util::rgb_to_hsb(&self.to_components()).into()
    }
}

impl Hsb {
    /// Convert this colour from the HSB notation to RGB components.
    pub fn to_rgb(&self) -> Rgb {
        util::hsb_to_rgb(&self.to_components()).into()
    }
}

mod util {
    use crate::{
        color::Components,
        math::{almost_zero, normalize, normalize_hue},
    };

    /// Convert from RGB notation to HSB notation.
    pub fn rgb_to_hsb(from: &Components) -> Components {
        let Components(red, green, blue) = from.map(normalize);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let brightness = max;

        // Black has no meaningful saturation or hue; report both as 0.
        let saturation = if max > 0.0 { delta / max } else { 0.0 };

        let hue = if almost_zero(delta) {
            0.0
        } else {
            let sector = if max == red {
                (green - blue) / delta
            } else if max == green {
                2.0 + (blue - red) / delta
            } else {
                4.0 + (red - green) / delta
            };
            normalize_hue(sector / 6.0)
        };

        Components(hue, saturation, brightness)
    }

    /// Convert from HSB notation to RGB notation.
    pub fn hsb_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, brightness) = from.map(normalize);

        if saturation <= 0.0 {
            return Components(brightness, brightness, brightness);
        }

        let h = normalize_hue(hue) * 6.0;
        let sector = h.floor();
        let f = h - sector;

        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));

        match sector as u32 % 6 {
            0 => Components(brightness, t, p),
            1 => Components(q, brightness, p),
            2 => Components(p, brightness, t),
            3 => Components(p, q, brightness),
            4 => Components(t, p, brightness),
            _ => Components(brightness, p, q),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_channels_near, assert_component_eq};

    #[test]
    fn primary_colours() {
        #[rustfmt::skip]
        #[allow(clippy::type_complexity)]
        const TESTS: &[(u32, Component, Component, Component)] = &[
            (0xffff0000, 0.0,       1.0, 1.0),
            (0xff00ff00, 1.0 / 3.0, 1.0, 1.0),
            (0xff0000ff, 2.0 / 3.0, 1.0, 1.0),
            (0xffffff00, 1.0 / 6.0, 1.0, 1.0),
            (0xff00ffff, 0.5,       1.0, 1.0),
            (0xffff00ff, 5.0 / 6.0, 1.0, 1.0),
            (0xff800000, 0.0,       1.0, 128.0 / 255.0),
        ];

        for &(argb, hue, saturation, brightness) in TESTS {
            let hsb = Colour::from_argb(argb).hsb();
            assert_component_eq!(hsb.hue, hue);
            assert_component_eq!(hsb.saturation, saturation);
            assert_component_eq!(hsb.brightness, brightness);
        }
    }

    #[test]
    fn pure_red() {
        let red = Colour::from_argb(0xffff0000);
        assert_component_eq!(red.hue(), 0.0);
        assert_component_eq!(red.saturation(), 1.0);
        assert_component_eq!(red.brightness(), 1.0);
    }

    #[test]
    fn hue_and_saturation_are_zero_without_chroma() {
        for grey in [0u8, 1, 127, 128, 254, 255] {
            let hsb = Colour::from_rgb(grey, grey, grey).hsb();
            assert_eq!(hsb.hue, 0.0);
            assert_eq!(hsb.saturation, 0.0);
            assert_component_eq!(hsb.brightness, grey as Component / 255.0);
        }
    }

    #[test]
    fn hue_wraps_below_zero() {
        // Red is the maximum and blue is larger than green, so the raw sector
        // is negative.
        let hue = Colour::from_rgb(255, 0, 51).hue();
        assert!((0.0..1.0).contains(&hue));
        assert_component_eq!(hue, 1.0 - 0.2 / 6.0);
    }

    #[test]
    fn hsb_to_rgb_sectors() {
        #[rustfmt::skip]
        const TESTS: &[(Component, (u8, u8, u8))] = &[
            (0.0,   (255, 0,   0)),
            (0.125, (255, 191, 0)),
            (0.25,  (128, 255, 0)),
            (0.375, (0,   255, 64)),
            (0.625, (0,   64,  255)),
            (0.75,  (128, 0,   255)),
            (0.875, (255, 0,   191)),
            (1.0,   (255, 0,   0)),
        ];

        for &(hue, (red, green, blue)) in TESTS {
            assert_eq!(
                Colour::from_hsb(hue, 1.0, 1.0, 255),
                Colour::from_rgb(red, green, blue),
                "hue {}",
                hue
            );
        }
    }

    #[test]
    fn achromatic_hsb_ignores_hue() {
        assert_eq!(
            Colour::from_hsb(0.3, 0.0, 0.2, 255),
            Colour::from_rgb(51, 51, 51)
        );
    }

    #[test]
    fn hsb_round_trip_is_within_one_step() {
        for red in (0..=255u8).step_by(15) {
            for green in (0..=255u8).step_by(17) {
                for blue in (0..=255u8).step_by(51) {
                    let colour = Colour::from_rgba(red, green, blue, 0x7f);
                    let hsb = colour.hsb();
                    let back =
                        Colour::from_hsb(hsb.hue, hsb.saturation, hsb.brightness, colour.alpha());
                    assert_channels_near!(back, colour);
                }
            }
        }
    }

    #[test]
    fn models_convert_both_ways() {
        let rgb = Rgb::new(0.2, 0.4, 0.8);
        let hsb = rgb.to_hsb();
        assert_component_eq!(hsb.hue, 11.0 / 18.0);
        assert_component_eq!(hsb.saturation, 0.75);
        assert_component_eq!(hsb.brightness, 0.8);

        let back = hsb.to_rgb();
        assert_component_eq!(back.red, 0.2);
        assert_component_eq!(back.green, 0.4);
        assert_component_eq!(back.blue, 0.8);
    }
}
