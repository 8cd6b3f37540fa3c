//! pigment provides an immutable 8-bit ARGB colour value, conversions to and
//! from the HSB notation, and the derived colours a user interface needs:
//! brighter and darker shades, alpha compositing and contrasting colours.
//!
//! ```rust
//! use pigment::Colour;
//! let background = Colour::from_rgb(30, 30, 60);
//! let text = background.contrasting(1.0);
//! let highlight = background.overlaid_with(text.with_float_alpha(0.25));
//! assert!(highlight.brightness() > background.brightness());
//! assert_eq!(highlight.to_string().parse::<Colour>(), Ok(highlight));
//! ```

#![deny(missing_docs)]

mod adjust;
mod color;
mod composite;
mod contrast;
mod convert;
mod math;
pub mod models;
mod pixel;
#[cfg(test)]
mod test;
mod text;

pub use adjust::DEFAULT_BRIGHTNESS_STEP;
pub use color::{Colour, Component, Components};
pub use contrast::{DEFAULT_CONTRAST, MIN_CONTRAST, NEAR_EQUAL_BRIGHTNESS};
pub use pixel::PixelArgb;
pub use text::ParseError;
