use std::collections::HashMap;
use std::error::Error;
use std::io::{self, Write};

use log::{info, warn};

use biomegen::BIOME_COUNT;
use biomegen::biome::McVersion;
use biomegen::emit;
use biomegen::source::{BiomeSource, DefaultSource};

/// Version the name map is generated for
const VERSION: McVersion = McVersion::NEWEST;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut colors = [[0u8; 3]; BIOME_COUNT];
    DefaultSource.biome_colors(&mut colors);

    let mut names = Vec::new();
    let mut seen = HashMap::new();
    for id in 0..BIOME_COUNT {
        let id = id as u8;
        if let Some(name) = DefaultSource.biome_name(VERSION, id) {
            if let Some(other) = seen.insert(name, id) {
                warn!("Name {} maps to both id {} and id {}", name, other, id);
            }
            names.push((name, id));
        }
    }
    info!("{} of {} biome ids have a name for {:?}", names.len(), BIOME_COUNT, VERSION);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    emit::write_tables(&mut out, &colors, &names)?;
    out.flush()?;

    Ok(())
}
