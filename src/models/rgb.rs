//! Model a colour with normalized red, green and blue components.

use crate::color::Component;

pigment_macros::gen_model! {
    /// A colour specified with red, green and blue components, each in the
    /// range 0.0 to 1.0.
    pub struct Rgb {
        /// The red component of the colour.
        red: Component,
        /// The green component of the colour.
        green: Component,
        /// The blue component of the colour.
        blue: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Components;

    #[test]
    fn components_keep_field_order() {
        let rgb = Rgb::new(0.1, 0.2, 0.3);
        assert_eq!(rgb.to_components(), Components(0.1, 0.2, 0.3));
        assert_eq!(Rgb::from(Components(0.1, 0.2, 0.3)), rgb);
    }
}
