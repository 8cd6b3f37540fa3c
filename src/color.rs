//! A [`Colour`] is an immutable 8-bit ARGB colour value.

use crate::{
    math::{from_byte, to_byte},
    models::{Hsb, Rgb},
    pixel::PixelArgb,
};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all floating point components are
/// expressed as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all floating point components are
/// expressed as.
pub type Component = f64;

/// Represent the three floating point components of a colour model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// A colour with transparency, stored as four 8-bit channels.
///
/// Colours are plain values. Every operation that "changes" a colour returns
/// a new one and leaves the receiver untouched. Floating point inputs are
/// clamped to the range 0.0 to 1.0 and never rejected.
///
/// ```rust
/// use pigment::Colour;
/// let red = Colour::from_rgb(255, 0, 0);
/// assert_eq!(red.argb(), 0xffff0000);
/// assert_eq!(red.with_alpha(0x80).argb(), 0x80ff0000);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Colour {
    pixel: PixelArgb,
}

impl Colour {
    /// Fully transparent black, also the [`Default`] colour.
    pub const TRANSPARENT_BLACK: Colour = Colour::from_rgba(0, 0, 0, 0);
    /// Fully transparent white.
    pub const TRANSPARENT_WHITE: Colour = Colour::from_rgba(255, 255, 255, 0);
    /// Opaque black.
    pub const BLACK: Colour = Colour::from_rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Colour = Colour::from_rgb(255, 255, 255);

    /// Create a colour from a packed 32-bit value with the layout
    /// `(alpha << 24) | (red << 16) | (green << 8) | blue`.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            pixel: PixelArgb::from_argb(argb),
        }
    }

    /// Create an opaque colour from 8-bit red, green and blue values.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba(red, green, blue, 0xff)
    }

    /// Create a colour from 8-bit red, green, blue and alpha values.
    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            pixel: PixelArgb::new(red, green, blue, alpha),
        }
    }

    /// Create a colour from 8-bit red, green and blue values and a floating
    /// point alpha, where 0.0 is transparent and 1.0 is opaque.
    pub fn from_rgb_float_alpha(red: u8, green: u8, blue: u8, alpha: Component) -> Self {
        Self::from_rgba(red, green, blue, to_byte(alpha))
    }

    /// Create a colour from floating point hue, saturation and brightness
    /// values and an 8-bit alpha.
    pub fn from_hsb(
        hue: Component,
        saturation: Component,
        brightness: Component,
        alpha: u8,
    ) -> Self {
        Self::from_model(Hsb::new(hue, saturation, brightness).to_rgb(), alpha)
    }

    /// Create a colour from floating point hue, saturation, brightness and
    /// alpha values.
    pub fn from_hsba(
        hue: Component,
        saturation: Component,
        brightness: Component,
        alpha: Component,
    ) -> Self {
        Self::from_hsb(hue, saturation, brightness, to_byte(alpha))
    }

    /// Wrap a pixel that is not premultiplied.
    pub const fn from_pixel(pixel: PixelArgb) -> Self {
        Self { pixel }
    }

    pub(crate) fn from_model(rgb: Rgb, alpha: u8) -> Self {
        Self::from_rgba(
            to_byte(rgb.red),
            to_byte(rgb.green),
            to_byte(rgb.blue),
            alpha,
        )
    }

    /// Return the red channel.
    pub const fn red(&self) -> u8 {
        self.pixel.red()
    }

    /// Return the green channel.
    pub const fn green(&self) -> u8 {
        self.pixel.green()
    }

    /// Return the blue channel.
    pub const fn blue(&self) -> u8 {
        self.pixel.blue()
    }

    /// Return the alpha channel. 0x00 is transparent, 0xff is opaque.
    pub const fn alpha(&self) -> u8 {
        self.pixel.alpha()
    }

    /// Return the red channel in the range 0.0 to 1.0.
    pub fn float_red(&self) -> Component {
        from_byte(self.red())
    }

    /// Return the green channel in the range 0.0 to 1.0.
    pub fn float_green(&self) -> Component {
        from_byte(self.green())
    }

    /// Return the blue channel in the range 0.0 to 1.0.
    pub fn float_blue(&self) -> Component {
        from_byte(self.blue())
    }

    /// Return the alpha channel in the range 0.0 to 1.0.
    pub fn float_alpha(&self) -> Component {
        from_byte(self.alpha())
    }

    /// Return the packed 32-bit ARGB value of this colour.
    pub const fn argb(&self) -> u32 {
        self.pixel.argb()
    }

    /// Return the pixel backing this colour. It is not premultiplied.
    pub const fn pixel(&self) -> PixelArgb {
        self.pixel
    }

    /// Return a premultiplied pixel that represents this colour, ready for
    /// blending.
    pub fn pixel_argb(&self) -> PixelArgb {
        self.pixel.premultiplied()
    }

    /// Returns true if the colour is completely opaque.
    pub const fn is_opaque(&self) -> bool {
        self.alpha() == 0xff
    }

    /// Returns true if the colour is completely transparent.
    pub const fn is_transparent(&self) -> bool {
        self.alpha() == 0
    }
}

impl From<u32> for Colour {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Colour> for u32 {
    fn from(colour: Colour) -> Self {
        colour.argb()
    }
}

impl From<PixelArgb> for Colour {
    fn from(pixel: PixelArgb) -> Self {
        Self::from_pixel(pixel)
    }
}
