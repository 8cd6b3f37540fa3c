//! Colours chosen to stand out against other colours.

use crate::{
    color::{Colour, Component},
    math::{lerp, normalize, to_byte},
    models::Hsb,
};

/// The amount used by [`Colour::contrasting_default`]; full contrast.
pub const DEFAULT_CONTRAST: Component = 1.0;

/// The smallest brightness distance between a colour and its complement that
/// [`Colour::contrasting`] accepts. Closer than this and the colour is pushed
/// towards black or white instead.
pub const MIN_CONTRAST: Component = 0.25;

/// Perceived brightness difference under which [`Colour::contrasting_pair`]
/// treats two colours as equally bright.
pub const NEAR_EQUAL_BRIGHTNESS: Component = 0.02;

/// The grey levels [`Colour::contrasting_pair`] chooses from are 0.02 apart.
const GREY_STEPS: u32 = 50;

impl Colour {
    /// Return an opaque shade of grey, where 0.0 is black and 1.0 is white.
    pub fn grey_level(brightness: Component) -> Colour {
        let level = to_byte(brightness);
        Colour::from_rgb(level, level, level)
    }

    /// Return the brightness as perceived by the eye, weighting green more
    /// heavily than red and blue. The result is in the range 0.0 to 1.0 and
    /// equals the level of a grey.
    pub fn perceived_brightness(&self) -> Component {
        let rgb = self.to_rgb();
        (0.241 * rgb.red * rgb.red + 0.691 * rgb.green * rgb.green + 0.068 * rgb.blue * rgb.blue)
            .sqrt()
            .min(1.0)
    }

    /// Return a colour that will be clearly visible against this colour.
    ///
    /// `amount` (clipped to 0.0 to 1.0) is how far the brightness moves
    /// towards its complement, `1.0 - brightness`. Black contrasted by 1.0
    /// gives white, white gives black, and black contrasted by 0.1 gives a
    /// very dark grey. Colours near mid brightness, whose complement would be
    /// indistinguishable from themselves, are pushed towards black or white
    /// and lose saturation in proportion to `amount`. Hue and alpha are kept.
    pub fn contrasting(&self, amount: Component) -> Colour {
        let amount = normalize(amount);
        let hsb = self.hsb();

        let mut target = 1.0 - hsb.brightness;
        let mut saturation = hsb.saturation;

        if (target - hsb.brightness).abs() < MIN_CONTRAST {
            target = if hsb.brightness >= 0.5 { 0.0 } else { 1.0 };
            saturation *= 1.0 - amount;
        }

        self.with_hsb(Hsb {
            saturation,
            brightness: lerp(hsb.brightness, target, amount),
            ..hsb
        })
    }

    /// [`Colour::contrasting`] by [`DEFAULT_CONTRAST`].
    pub fn contrasting_default(&self) -> Colour {
        self.contrasting(DEFAULT_CONTRAST)
    }

    /// Return an opaque colour that contrasts with both `colour1` and
    /// `colour2`, e.g. a highlight that must show against both a background
    /// and a text colour. Distances are measured in
    /// [perceived brightness](Colour::perceived_brightness).
    ///
    /// When the two colours are about equally bright the result is pure black
    /// or pure white, whichever is farther from them. Otherwise the target is
    /// the grey level, in steps of 0.02, farthest from both colours (the
    /// first such level wins). The result is a 50/50 blend of the two colours
    /// scaled to that perceived brightness, or the grey itself when the blend
    /// can not get bright enough.
    pub fn contrasting_pair(colour1: Colour, colour2: Colour) -> Colour {
        let b1 = colour1.perceived_brightness();
        let b2 = colour2.perceived_brightness();
        let distance = |level: Component| (level - b1).abs().min((level - b2).abs());

        if (b1 - b2).abs() < NEAR_EQUAL_BRIGHTNESS {
            return if distance(0.0) > distance(1.0) {
                Colour::BLACK
            } else {
                Colour::WHITE
            };
        }

        let mut best = 0.0;
        let mut best_distance = distance(best);
        for step in 1..=GREY_STEPS {
            let level = step as Component / GREY_STEPS as Component;
            let d = distance(level);
            if d > best_distance {
                best = level;
                best_distance = d;
            }
        }

        let blend = colour1
            .overlaid_with(colour2.with_multiplied_alpha(0.5))
            .with_alpha(0xff);

        // Perceived brightness grows linearly with brightness for a fixed hue
        // and saturation.
        let full = blend.with_brightness(1.0).perceived_brightness();
        if full <= best {
            return Colour::grey_level(best);
        }

        blend.with_brightness(best / full)
    }
}
