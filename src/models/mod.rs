//! Models are floating point views of a [`Colour`] in a particular notation.
//! They are computed on demand and never stored.
//!
//! ```rust
//! use pigment::{models::Hsb, Colour};
//! let hsb = Colour::from_rgb(255, 0, 0).hsb();
//! assert_eq!(hsb, Hsb::new(0.0, 1.0, 1.0));
//! ```
//!
//! [`Colour`]: crate::Colour

mod hsb;
mod rgb;

pub use hsb::Hsb;
pub use rgb::Rgb;
