use num_traits::FromPrimitive;

use crate::BIOME_COUNT;
use crate::biome::{Biome, McVersion};

/// The two queries the generators need from the simulation data.
pub trait BiomeSource {
    /// Fills `colors` with the display color of every defined biome id.
    /// Ids without a biome are left black.
    fn biome_colors(&self, colors: &mut [[u8; 3]; BIOME_COUNT]);

    /// Resource name of biome `id` under `version`, if it has one.
    fn biome_name(&self, version: McVersion, id: u8) -> Option<&'static str>;
}

/// Source backed by the built-in biome tables.
pub struct DefaultSource;

impl BiomeSource for DefaultSource {
    fn biome_colors(&self, colors: &mut [[u8; 3]; BIOME_COUNT]) {
        *colors = [[0; 3]; BIOME_COUNT];
        for (id, color) in colors.iter_mut().enumerate() {
            if let Some(biome) = Biome::from_u8(id as u8) {
                *color = biome.color();
            }
        }
    }

    fn biome_name(&self, version: McVersion, id: u8) -> Option<&'static str> {
        Biome::from_u8(id)?.name(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_defined_ids() {
        let mut colors = [[0xffu8; 3]; BIOME_COUNT];
        DefaultSource.biome_colors(&mut colors);
        assert_eq!(colors[0], [0, 0, 112]);
        assert_eq!(colors[1], [141, 179, 96]);
        assert_eq!(colors[185], [255, 145, 176]);
    }

    #[test]
    fn zeroes_undefined_ids() {
        let mut colors = [[0xffu8; 3]; BIOME_COUNT];
        DefaultSource.biome_colors(&mut colors);
        assert_eq!(colors[128], [0, 0, 0]);
        assert_eq!(colors[255], [0, 0, 0]);
    }

    #[test]
    fn names_for_newest() {
        assert_eq!(DefaultSource.biome_name(McVersion::NEWEST, 1), Some("plains"));
        assert_eq!(DefaultSource.biome_name(McVersion::NEWEST, 17), None);
        assert_eq!(DefaultSource.biome_name(McVersion::V1_17, 17), Some("desert_hills"));
        assert_eq!(DefaultSource.biome_name(McVersion::NEWEST, 200), None);
    }
}
