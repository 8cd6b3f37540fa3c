//! A [`PixelArgb`] is the packed storage behind every [`Colour`].
//!
//! [`Colour`]: crate::Colour

/// Four 8-bit channels packed into a single `u32` as
/// `(alpha << 24) | (red << 16) | (green << 8) | blue`.
///
/// A pixel does not know whether its colour channels are premultiplied by
/// alpha or not. Use [`PixelArgb::premultiplied`] and
/// [`PixelArgb::unpremultiplied`] to move between the two forms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelArgb(u32);

impl PixelArgb {
    /// Create a pixel from its four 8-bit channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Create a pixel from an already packed ARGB value.
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Return the packed ARGB value.
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// Return the red channel.
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Return the green channel.
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Return the blue channel.
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Return the alpha channel.
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Replace the red channel.
    pub fn set_red(&mut self, red: u8) {
        self.0 = (self.0 & !0x00ff_0000) | (red as u32) << 16;
    }

    /// Replace the green channel.
    pub fn set_green(&mut self, green: u8) {
        self.0 = (self.0 & !0x0000_ff00) | (green as u32) << 8;
    }

    /// Replace the blue channel.
    pub fn set_blue(&mut self, blue: u8) {
        self.0 = (self.0 & !0x0000_00ff) | blue as u32;
    }

    /// Replace the alpha channel.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.0 = (self.0 & !0xff00_0000) | (alpha as u32) << 24;
    }

    /// Replace all four channels with a packed ARGB value.
    pub fn set_argb(&mut self, argb: u32) {
        self.0 = argb;
    }

    /// Return a copy of this pixel with the colour channels scaled by alpha.
    pub fn premultiplied(self) -> Self {
        let alpha = self.alpha() as u32;
        // Adding 127 before the division rounds to nearest; 255 is odd so
        // there are no halfway cases.
        let scale = |c: u8| ((c as u32 * alpha + 127) / 255) as u8;

        Self::new(
            scale(self.red()),
            scale(self.green()),
            scale(self.blue()),
            self.alpha(),
        )
    }

    /// Reverse [`PixelArgb::premultiplied`]. Precision lost during
    /// premultiplication is not recovered, and a pixel with zero alpha
    /// becomes transparent black.
    pub fn unpremultiplied(self) -> Self {
        let alpha = self.alpha() as u32;
        if alpha == 0 {
            return Self::default();
        }

        let scale = |c: u8| ((c as u32 * 255 + alpha / 2) / alpha).min(255) as u8;

        Self::new(
            scale(self.red()),
            scale(self.green()),
            scale(self.blue()),
            self.alpha(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_packed_alpha_first() {
        let pixel = PixelArgb::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(pixel.argb(), 0x7812_3456);
        assert_eq!(pixel.red(), 0x12);
        assert_eq!(pixel.green(), 0x34);
        assert_eq!(pixel.blue(), 0x56);
        assert_eq!(pixel.alpha(), 0x78);
        assert_eq!(PixelArgb::from_argb(0x7812_3456), pixel);
    }

    #[test]
    fn setters_only_touch_their_channel() {
        let mut pixel = PixelArgb::from_argb(0xffff_ffff);
        pixel.set_red(0x01);
        assert_eq!(pixel.argb(), 0xff01_ffff);
        pixel.set_green(0x02);
        assert_eq!(pixel.argb(), 0xff01_02ff);
        pixel.set_blue(0x03);
        assert_eq!(pixel.argb(), 0xff01_0203);
        pixel.set_alpha(0x04);
        assert_eq!(pixel.argb(), 0x0401_0203);
        pixel.set_argb(0xdead_beef);
        assert_eq!(pixel.argb(), 0xdead_beef);
    }

    #[test]
    fn premultiply() {
        let opaque = PixelArgb::new(200, 100, 50, 255);
        assert_eq!(opaque.premultiplied(), opaque);

        let clear = PixelArgb::new(200, 100, 50, 0);
        assert_eq!(clear.premultiplied(), PixelArgb::new(0, 0, 0, 0));

        // 200 * 128 / 255 = 100.39, 100 * 128 / 255 = 50.19, 255 * 128 / 255 = 128
        let half = PixelArgb::new(200, 100, 255, 128);
        assert_eq!(half.premultiplied(), PixelArgb::new(100, 50, 128, 128));
    }

    #[test]
    fn unpremultiply() {
        assert_eq!(
            PixelArgb::new(100, 50, 128, 128).unpremultiplied(),
            PixelArgb::new(199, 100, 255, 128)
        );
        assert_eq!(
            PixelArgb::new(10, 20, 30, 0).unpremultiplied(),
            PixelArgb::default()
        );
        // Channels larger than alpha are not valid premultiplied values.
        assert_eq!(
            PixelArgb::new(255, 0, 0, 1).unpremultiplied(),
            PixelArgb::new(255, 0, 0, 1)
        );
    }
}
