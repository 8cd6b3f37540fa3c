//! Derived colours with a changed alpha or HSB component.
//!
//! Every HSB adjustment converts to [`Hsb`], replaces one component and
//! converts back, so hue and saturation of the result may be off by a rounding
//! step from the source.

use crate::{
    color::{Colour, Component},
    math::{lerp, normalize, normalize_hue, to_byte},
    models::Hsb,
};

/// How much [`Colour::brighter_default`] and [`Colour::darker_default`] move
/// the brightness.
pub const DEFAULT_BRIGHTNESS_STEP: Component = 0.4;

impl Colour {
    /// Return the same colour with a new 8-bit alpha.
    pub fn with_alpha(&self, alpha: u8) -> Colour {
        let mut pixel = self.pixel();
        pixel.set_alpha(alpha);
        Colour::from_pixel(pixel)
    }

    /// Return the same colour with a new alpha in the range 0.0 to 1.0.
    pub fn with_float_alpha(&self, alpha: Component) -> Colour {
        self.with_alpha(to_byte(alpha))
    }

    /// Return the same colour with its alpha multiplied by `multiplier`. The
    /// result is rounded and clipped to legal limits.
    pub fn with_multiplied_alpha(&self, multiplier: Component) -> Colour {
        let alpha = (self.alpha() as Component * multiplier)
            .round()
            .max(0.0)
            .min(255.0);
        self.with_alpha(alpha as u8)
    }

    /// Return a copy of this colour with a different hue.
    pub fn with_hue(&self, hue: Component) -> Colour {
        self.with_hsb(Hsb {
            hue: normalize(hue),
            ..self.hsb()
        })
    }

    /// Return a copy of this colour with a different saturation.
    pub fn with_saturation(&self, saturation: Component) -> Colour {
        self.with_hsb(Hsb {
            saturation: normalize(saturation),
            ..self.hsb()
        })
    }

    /// Return a copy of this colour with a different brightness.
    pub fn with_brightness(&self, brightness: Component) -> Colour {
        self.with_hsb(Hsb {
            brightness: normalize(brightness),
            ..self.hsb()
        })
    }

    /// Return a copy of this colour with its hue rotated. The new hue is
    /// `(self.hue() + amount) % 1.0`, wrapped into [0.0, 1.0).
    pub fn with_rotated_hue(&self, amount: Component) -> Colour {
        let hsb = self.hsb();
        self.with_hsb(Hsb {
            hue: normalize_hue(hsb.hue + amount),
            ..hsb
        })
    }

    /// Return a copy of this colour with its saturation multiplied by the
    /// given value, clipped to legal limits.
    pub fn with_multiplied_saturation(&self, multiplier: Component) -> Colour {
        let hsb = self.hsb();
        self.with_hsb(Hsb {
            saturation: normalize(hsb.saturation * multiplier),
            ..hsb
        })
    }

    /// Return a copy of this colour with its brightness multiplied by the
    /// given value, clipped to legal limits.
    pub fn with_multiplied_brightness(&self, multiplier: Component) -> Colour {
        let hsb = self.hsb();
        self.with_hsb(Hsb {
            brightness: normalize(hsb.brightness * multiplier),
            ..hsb
        })
    }

    /// Return a brighter version of this colour. `amount` is clipped to 0.0
    /// to 1.0, where 0.0 leaves the colour unchanged and 1.0 gives full
    /// brightness. The brightness moves towards 1.0 but never overshoots.
    pub fn brighter(&self, amount: Component) -> Colour {
        let hsb = self.hsb();
        self.with_hsb(Hsb {
            brightness: lerp(hsb.brightness, 1.0, normalize(amount)),
            ..hsb
        })
    }

    /// [`Colour::brighter`] by [`DEFAULT_BRIGHTNESS_STEP`].
    pub fn brighter_default(&self) -> Colour {
        self.brighter(DEFAULT_BRIGHTNESS_STEP)
    }

    /// Return a darker version of this colour. `amount` is clipped to 0.0 to
    /// 1.0, where 0.0 leaves the colour unchanged and 1.0 gives black.
    pub fn darker(&self, amount: Component) -> Colour {
        let hsb = self.hsb();
        self.with_hsb(Hsb {
            brightness: lerp(hsb.brightness, 0.0, normalize(amount)),
            ..hsb
        })
    }

    /// [`Colour::darker`] by [`DEFAULT_BRIGHTNESS_STEP`].
    pub fn darker_default(&self) -> Colour {
        self.darker(DEFAULT_BRIGHTNESS_STEP)
    }
}
