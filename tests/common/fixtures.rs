//! Test palettes with known derived attributes.

use swatchbook::{PaletteIndex, Swatch};

/// Swatch ids with their hue in degrees (rounded).
pub mod hues {
    pub const RED: (&str, f64) = ("red", 0.0);
    pub const ROSE: (&str, f64) = ("rose", 355.06);
    pub const ORANGE: (&str, f64) = ("orange", 30.12);
    pub const YELLOW: (&str, f64) = ("yellow", 60.0);
    pub const GREEN: (&str, f64) = ("green", 120.0);
    pub const TEAL: (&str, f64) = ("teal", 180.0);
    pub const BLUE: (&str, f64) = ("blue", 240.0);
    pub const MAGENTA: (&str, f64) = ("magenta", 300.0);
}

/// Ten swatches spread around the hue wheel, plus two achromatic ones.
pub fn wheel() -> Vec<Swatch> {
    vec![
        Swatch::new("red", "#ff0000").with_field("title", "Red"),
        Swatch::new("rose", "#ff0015").with_field("title", "Rose"),
        Swatch::new("orange", "#ff8000").with_field("title", "Orange"),
        Swatch::new("yellow", "#ffff00").with_field("title", "Yellow"),
        Swatch::new("green", "#00ff00").with_field("title", "Green"),
        Swatch::new("teal", "#008080").with_field("title", "Teal"),
        Swatch::new("blue", "#0000ff").with_field("title", "Blue"),
        Swatch::new("magenta", "#ff00ff").with_field("title", "Magenta"),
        Swatch::new("grey", "#808080")
            .with_field("title", "Grey")
            .with_field("contrast", true),
        Swatch::new("black", "#000000")
            .with_field("title", "Black")
            .with_field("contrast", true),
    ]
}

/// Wheel swatches whose relative luminance stays below 0.8.
pub fn muted() -> Vec<Swatch> {
    wheel()
        .into_iter()
        .filter(|swatch| swatch.id != "yellow")
        .collect()
}

pub fn index() -> PaletteIndex {
    PaletteIndex::new(wheel(), true)
}

pub fn quiet_index() -> PaletteIndex {
    PaletteIndex::new(wheel(), false)
}
