//! Alpha compositing and blending of two colours.

use tracing::trace;

use crate::{
    color::{Colour, Component},
    math::{lerp, normalize, to_byte},
};

impl Colour {
    /// Return the result of alpha-compositing `foreground` over this colour.
    ///
    /// An opaque foreground replaces this colour entirely and a fully
    /// transparent foreground leaves it unchanged.
    pub fn overlaid_with(&self, foreground: Colour) -> Colour {
        if foreground.is_transparent() {
            return *self;
        }

        let foreground_alpha = foreground.float_alpha();
        let background_weight = self.float_alpha() * (1.0 - foreground_alpha);
        let result_alpha = foreground_alpha + background_weight;

        if result_alpha <= 0.0 {
            trace!("compositing produced no coverage");
            return Colour::TRANSPARENT_BLACK;
        }

        let blend = |fg: u8, bg: u8| -> u8 {
            let value = (fg as Component * foreground_alpha + bg as Component * background_weight)
                / result_alpha;
            value.round().max(0.0).min(255.0) as u8
        };

        Colour::from_rgba(
            blend(foreground.red(), self.red()),
            blend(foreground.green(), self.green()),
            blend(foreground.blue(), self.blue()),
            to_byte(result_alpha),
        )
    }

    /// Return a colour part way between this colour and `other`, interpolating
    /// each of the four channels. `proportion` is clipped to 0.0 to 1.0, where
    /// 0.0 gives this colour and 1.0 gives `other`.
    pub fn interpolated_with(&self, other: Colour, proportion: Component) -> Colour {
        let t = normalize(proportion);

        let channel = |from: u8, to: u8| -> u8 {
            lerp(from as Component, to as Component, t)
                .round()
                .max(0.0)
                .min(255.0) as u8
        };

        Colour::from_rgba(
            channel(self.red(), other.red()),
            channel(self.green(), other.green()),
            channel(self.blue(), other.blue()),
            channel(self.alpha(), other.alpha()),
        )
    }
}
