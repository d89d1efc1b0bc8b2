use std::error::Error;
use std::io::{self, Write};

use log::info;

use biomegen::BIOME_COUNT;
use biomegen::emit;
use biomegen::source::{BiomeSource, DefaultSource};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut colors = [[0u8; 3]; BIOME_COUNT];
    DefaultSource.biome_colors(&mut colors);
    info!("Collected {} biome colors", BIOME_COUNT);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    emit::write_color_table(&mut out, &colors)?;
    out.flush()?;

    Ok(())
}
