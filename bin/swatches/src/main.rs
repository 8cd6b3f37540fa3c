//! Renders a sheet of derived colours for each base colour given on the
//! command line, e.g. `pigment-swatches ff3366cc ff204060`.

use std::error::Error;

use image::{Rgba, RgbaImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use pigment::Colour;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const SWATCH_SIZE: u32 = 64;
const OUTPUT: &str = "swatches.png";

const DEFAULT_BASES: [Colour; 4] = [
    Colour::from_rgb(0xe0, 0x40, 0x40),
    Colour::from_rgb(0x30, 0x30, 0x60),
    Colour::from_rgb(0x80, 0x80, 0x00),
    Colour::from_rgba(0x20, 0xa0, 0xe0, 0x80),
];

/// The colours shown in one row, left to right.
fn derived(base: Colour) -> Vec<Colour> {
    vec![
        base,
        base.brighter_default(),
        base.darker_default(),
        base.contrasting_default(),
        base.with_rotated_hue(1.0 / 3.0),
        base.with_rotated_hue(2.0 / 3.0),
        base.with_multiplied_saturation(0.5),
        base.overlaid_with(base.contrasting_default().with_float_alpha(0.25)),
        Colour::contrasting_pair(base, base.contrasting_default()),
    ]
}

fn to_rgba(colour: Colour) -> Rgba<u8> {
    Rgba([colour.red(), colour.green(), colour.blue(), colour.alpha()])
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut bases = std::env::args()
        .skip(1)
        .map(|arg| {
            Colour::from_string(&arg).inspect_err(|err| error!(%arg, %err, "invalid colour"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if bases.is_empty() {
        bases.extend(DEFAULT_BASES);
    }

    let rows: Vec<Vec<Colour>> = bases.into_iter().map(derived).collect();
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0) as u32;

    let mut img = RgbaImage::new(columns * SWATCH_SIZE, rows.len() as u32 * SWATCH_SIZE);

    for (y, row) in rows.iter().enumerate() {
        info!(base = %row[0], "rendering row");
        for (x, colour) in row.iter().enumerate() {
            let rect = Rect::at(x as i32 * SWATCH_SIZE as i32, y as i32 * SWATCH_SIZE as i32)
                .of_size(SWATCH_SIZE, SWATCH_SIZE);
            draw_filled_rect_mut(&mut img, rect, to_rgba(*colour));
        }
    }

    img.save(OUTPUT)?;
    info!(path = OUTPUT, rows = rows.len(), "wrote swatches");

    Ok(())
}
