use std::io::{Result, Write};

use crate::{ALPHA, BIOME_COUNT};

fn write_header<W: Write>(w: &mut W, generator: &str) -> Result<()> {
    writeln!(w, "// Code generated by {}. DO NOT EDIT.", generator)?;
    writeln!(w, "// Regenerate with `cargo run --bin {}`.", generator)?;
    writeln!(w)
}

fn write_colors<W: Write>(w: &mut W, colors: &[[u8; 3]; BIOME_COUNT]) -> Result<()> {
    writeln!(w, "pub static BIOME_COLORS: [[u8; 4]; {}] = [", BIOME_COUNT)?;
    for (id, c) in colors.iter().enumerate() {
        writeln!(w, "    [{}, {}, {}, {}], // {}", c[0], c[1], c[2], ALPHA, id)?;
    }
    writeln!(w, "];")
}

fn write_names<W: Write>(w: &mut W, names: &[(&str, u8)]) -> Result<()> {
    writeln!(w, "pub static BIOME_ID: &[(&str, u8)] = &[")?;
    for (name, id) in names {
        writeln!(w, "    ({:?}, {}),", name, id)?;
    }
    writeln!(w, "];")
}

/// Template of the colors-only generator.
pub fn write_color_table<W: Write>(w: &mut W, colors: &[[u8; 3]; BIOME_COUNT]) -> Result<()> {
    write_header(w, "biome_colors")?;
    write_colors(w, colors)
}

/// Template of the colors + name map generator.
pub fn write_tables<W: Write>(
    w: &mut W,
    colors: &[[u8; 3]; BIOME_COUNT],
    names: &[(&str, u8)]
) -> Result<()> {
    write_header(w, "biome_tables")?;
    write_colors(w, colors)?;
    writeln!(w)?;
    write_names(w, names)
}
