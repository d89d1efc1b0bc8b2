use std::collections::HashMap;

use lazy_static::lazy_static;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// Game versions the name tables distinguish.
///
/// Ordered so that version gates can be written as comparisons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum McVersion {
    V1_13,
    V1_14,
    V1_15,
    V1_16,
    V1_17,
    V1_18,
    V1_19,
    V1_20,
}

impl McVersion {
    /// Version the generated tables target
    pub const NEWEST: McVersion = McVersion::V1_20;
}

/// Biome ids as the simulation data defines them.
///
/// Ids above `CherryGrove` and the gaps in between carry no biome.
#[repr(u8)]
#[derive(Copy, Clone, Debug, FromPrimitive, PartialEq)]
pub enum Biome {
    Ocean = 0,
    Plains = 1,
    Desert = 2,
    WindsweptHills = 3,
    Forest = 4,
    Taiga = 5,
    Swamp = 6,
    River = 7,
    NetherWastes = 8,
    TheEnd = 9,
    FrozenOcean = 10,
    FrozenRiver = 11,
    SnowyPlains = 12,
    SnowyMountains = 13,
    MushroomFields = 14,
    MushroomFieldShore = 15,
    Beach = 16,
    DesertHills = 17,
    WoodedHills = 18,
    TaigaHills = 19,
    MountainEdge = 20,
    Jungle = 21,
    JungleHills = 22,
    SparseJungle = 23,
    DeepOcean = 24,
    StonyShore = 25,
    SnowyBeach = 26,
    BirchForest = 27,
    BirchForestHills = 28,
    DarkForest = 29,
    SnowyTaiga = 30,
    SnowyTaigaHills = 31,
    OldGrowthPineTaiga = 32,
    GiantTreeTaigaHills = 33,
    WindsweptForest = 34,
    Savanna = 35,
    SavannaPlateau = 36,
    Badlands = 37,
    WoodedBadlands = 38,
    BadlandsPlateau = 39,
    SmallEndIslands = 40,
    EndMidlands = 41,
    EndHighlands = 42,
    EndBarrens = 43,
    WarmOcean = 44,
    LukewarmOcean = 45,
    ColdOcean = 46,
    DeepWarmOcean = 47,
    DeepLukewarmOcean = 48,
    DeepColdOcean = 49,
    DeepFrozenOcean = 50,
    TheVoid = 127,
    SunflowerPlains = 129,
    DesertLakes = 130,
    WindsweptGravellyHills = 131,
    FlowerForest = 132,
    TaigaMountains = 133,
    SwampHills = 134,
    IceSpikes = 140,
    ModifiedJungle = 149,
    ModifiedJungleEdge = 151,
    OldGrowthBirchForest = 155,
    TallBirchHills = 156,
    DarkForestHills = 157,
    SnowyTaigaMountains = 158,
    OldGrowthSpruceTaiga = 160,
    GiantSpruceTaigaHills = 161,
    ModifiedGravellyMountains = 162,
    WindsweptSavanna = 163,
    ShatteredSavannaPlateau = 164,
    ErodedBadlands = 165,
    ModifiedWoodedBadlandsPlateau = 166,
    ModifiedBadlandsPlateau = 167,
    BambooJungle = 168,
    BambooJungleHills = 169,
    SoulSandValley = 170,
    CrimsonForest = 171,
    WarpedForest = 172,
    BasaltDeltas = 173,
    DripstoneCaves = 174,
    LushCaves = 175,
    Meadow = 177,
    Grove = 178,
    SnowySlopes = 179,
    JaggedPeaks = 180,
    FrozenPeaks = 181,
    StonyPeaks = 182,
    DeepDark = 183,
    MangroveSwamp = 184,
    CherryGrove = 185,
}

impl Biome {
    /// Display color used on biome maps
    pub fn color(self) -> [u8; 3] {
        match self {
            Biome::Ocean => [0, 0, 112],
            Biome::Plains => [141, 179, 96],
            Biome::Desert => [250, 148, 24],
            Biome::WindsweptHills => [96, 96, 96],
            Biome::Forest => [5, 102, 33],
            Biome::Taiga => [11, 102, 89],
            Biome::Swamp => [7, 249, 178],
            Biome::River => [0, 0, 255],
            Biome::NetherWastes => [87, 37, 38],
            Biome::TheEnd => [128, 128, 255],
            Biome::FrozenOcean => [112, 112, 214],
            Biome::FrozenRiver => [160, 160, 255],
            Biome::SnowyPlains => [255, 255, 255],
            Biome::SnowyMountains => [160, 160, 160],
            Biome::MushroomFields => [255, 0, 255],
            Biome::MushroomFieldShore => [160, 0, 255],
            Biome::Beach => [250, 222, 85],
            Biome::DesertHills => [210, 95, 18],
            Biome::WoodedHills => [34, 85, 28],
            Biome::TaigaHills => [22, 57, 51],
            Biome::MountainEdge => [114, 120, 154],
            Biome::Jungle => [83, 123, 9],
            Biome::JungleHills => [44, 66, 5],
            Biome::SparseJungle => [98, 139, 23],
            Biome::DeepOcean => [0, 0, 48],
            Biome::StonyShore => [162, 162, 132],
            Biome::SnowyBeach => [250, 240, 192],
            Biome::BirchForest => [48, 116, 68],
            Biome::BirchForestHills => [31, 95, 50],
            Biome::DarkForest => [64, 81, 26],
            Biome::SnowyTaiga => [49, 85, 74],
            Biome::SnowyTaigaHills => [36, 63, 54],
            Biome::OldGrowthPineTaiga => [89, 102, 81],
            Biome::GiantTreeTaigaHills => [69, 79, 62],
            Biome::WindsweptForest => [80, 112, 80],
            Biome::Savanna => [189, 178, 95],
            Biome::SavannaPlateau => [167, 157, 100],
            Biome::Badlands => [217, 69, 21],
            Biome::WoodedBadlands => [176, 151, 101],
            Biome::BadlandsPlateau => [202, 140, 101],
            Biome::SmallEndIslands => [75, 75, 171],
            Biome::EndMidlands => [194, 194, 225],
            Biome::EndHighlands => [181, 181, 195],
            Biome::EndBarrens => [112, 112, 158],
            Biome::WarmOcean => [0, 0, 172],
            Biome::LukewarmOcean => [0, 0, 144],
            Biome::ColdOcean => [32, 32, 112],
            Biome::DeepWarmOcean => [0, 0, 80],
            Biome::DeepLukewarmOcean => [0, 0, 64],
            Biome::DeepColdOcean => [32, 32, 56],
            Biome::DeepFrozenOcean => [64, 64, 144],
            Biome::TheVoid => [0, 0, 0],
            Biome::SunflowerPlains => [181, 219, 136],
            Biome::DesertLakes => [255, 188, 64],
            Biome::WindsweptGravellyHills => [136, 136, 136],
            Biome::FlowerForest => [45, 142, 73],
            Biome::TaigaMountains => [51, 142, 129],
            Biome::SwampHills => [47, 255, 218],
            Biome::IceSpikes => [180, 220, 220],
            Biome::ModifiedJungle => [123, 163, 49],
            Biome::ModifiedJungleEdge => [138, 179, 63],
            Biome::OldGrowthBirchForest => [88, 156, 108],
            Biome::TallBirchHills => [71, 135, 90],
            Biome::DarkForestHills => [104, 121, 66],
            Biome::SnowyTaigaMountains => [89, 125, 114],
            Biome::OldGrowthSpruceTaiga => [129, 142, 121],
            Biome::GiantSpruceTaigaHills => [109, 119, 102],
            Biome::ModifiedGravellyMountains => [120, 152, 120],
            Biome::WindsweptSavanna => [229, 218, 135],
            Biome::ShatteredSavannaPlateau => [207, 197, 140],
            Biome::ErodedBadlands => [255, 109, 61],
            Biome::ModifiedWoodedBadlandsPlateau => [216, 191, 141],
            Biome::ModifiedBadlandsPlateau => [242, 180, 141],
            Biome::BambooJungle => [118, 142, 20],
            Biome::BambooJungleHills => [59, 71, 10],
            Biome::SoulSandValley => [77, 58, 46],
            Biome::CrimsonForest => [221, 8, 8],
            Biome::WarpedForest => [73, 144, 123],
            Biome::BasaltDeltas => [64, 54, 54],
            Biome::DripstoneCaves => [134, 96, 67],
            Biome::LushCaves => [40, 116, 48],
            Biome::Meadow => [96, 161, 83],
            Biome::Grove => [71, 114, 108],
            Biome::SnowySlopes => [196, 196, 196],
            Biome::JaggedPeaks => [220, 220, 200],
            Biome::FrozenPeaks => [176, 216, 216],
            Biome::StonyPeaks => [123, 143, 114],
            Biome::DeepDark => [3, 31, 49],
            Biome::MangroveSwamp => [44, 204, 147],
            Biome::CherryGrove => [255, 145, 176],
        }
    }

    /// Resource name of the biome under `version`.
    ///
    /// `None` if the biome did not exist yet, or if the 1.18 world update
    /// removed it.
    pub fn name(self, version: McVersion) -> Option<&'static str> {
        if version < self.introduced() {
            return None;
        }
        if version < McVersion::V1_18 {
            return Some(self.legacy_name(version));
        }
        if self.removed_by_world_update() {
            return None;
        }
        Some(self.resource_name())
    }

    /// Version the biome first generated in
    fn introduced(self) -> McVersion {
        match self {
            Biome::BambooJungle
            | Biome::BambooJungleHills => McVersion::V1_14,
            Biome::SoulSandValley
            | Biome::CrimsonForest
            | Biome::WarpedForest
            | Biome::BasaltDeltas => McVersion::V1_16,
            Biome::DripstoneCaves
            | Biome::LushCaves => McVersion::V1_17,
            Biome::Meadow
            | Biome::Grove
            | Biome::SnowySlopes
            | Biome::JaggedPeaks
            | Biome::FrozenPeaks
            | Biome::StonyPeaks => McVersion::V1_18,
            Biome::DeepDark
            | Biome::MangroveSwamp => McVersion::V1_19,
            Biome::CherryGrove => McVersion::V1_20,
            _ => McVersion::V1_13,
        }
    }

    /// Variant biomes dropped when 1.18 reworked world generation
    fn removed_by_world_update(self) -> bool {
        matches!(
            self,
            Biome::SnowyMountains
                | Biome::MushroomFieldShore
                | Biome::DesertHills
                | Biome::WoodedHills
                | Biome::TaigaHills
                | Biome::MountainEdge
                | Biome::JungleHills
                | Biome::BirchForestHills
                | Biome::SnowyTaigaHills
                | Biome::GiantTreeTaigaHills
                | Biome::BadlandsPlateau
                | Biome::DeepWarmOcean
                | Biome::DesertLakes
                | Biome::TaigaMountains
                | Biome::SwampHills
                | Biome::ModifiedJungle
                | Biome::ModifiedJungleEdge
                | Biome::TallBirchHills
                | Biome::DarkForestHills
                | Biome::SnowyTaigaMountains
                | Biome::GiantSpruceTaigaHills
                | Biome::ModifiedGravellyMountains
                | Biome::ShatteredSavannaPlateau
                | Biome::ModifiedWoodedBadlandsPlateau
                | Biome::ModifiedBadlandsPlateau
                | Biome::BambooJungleHills
        )
    }

    /// Pre-1.18 spelling; 1.18 renamed a number of biomes
    fn legacy_name(self, version: McVersion) -> &'static str {
        match self {
            Biome::WindsweptHills => "mountains",
            Biome::NetherWastes if version < McVersion::V1_16 => "nether",
            Biome::SnowyPlains => "snowy_tundra",
            Biome::SparseJungle => "jungle_edge",
            Biome::StonyShore => "stone_shore",
            Biome::OldGrowthPineTaiga => "giant_tree_taiga",
            Biome::WindsweptForest => "wooded_mountains",
            Biome::WoodedBadlands => "wooded_badlands_plateau",
            Biome::WindsweptGravellyHills => "gravelly_mountains",
            Biome::OldGrowthBirchForest => "tall_birch_forest",
            Biome::OldGrowthSpruceTaiga => "giant_spruce_taiga",
            Biome::WindsweptSavanna => "shattered_savanna",
            _ => self.resource_name(),
        }
    }

    fn resource_name(self) -> &'static str {
        match self {
            Biome::Ocean => "ocean",
            Biome::Plains => "plains",
            Biome::Desert => "desert",
            Biome::WindsweptHills => "windswept_hills",
            Biome::Forest => "forest",
            Biome::Taiga => "taiga",
            Biome::Swamp => "swamp",
            Biome::River => "river",
            Biome::NetherWastes => "nether_wastes",
            Biome::TheEnd => "the_end",
            Biome::FrozenOcean => "frozen_ocean",
            Biome::FrozenRiver => "frozen_river",
            Biome::SnowyPlains => "snowy_plains",
            Biome::SnowyMountains => "snowy_mountains",
            Biome::MushroomFields => "mushroom_fields",
            Biome::MushroomFieldShore => "mushroom_field_shore",
            Biome::Beach => "beach",
            Biome::DesertHills => "desert_hills",
            Biome::WoodedHills => "wooded_hills",
            Biome::TaigaHills => "taiga_hills",
            Biome::MountainEdge => "mountain_edge",
            Biome::Jungle => "jungle",
            Biome::JungleHills => "jungle_hills",
            Biome::SparseJungle => "sparse_jungle",
            Biome::DeepOcean => "deep_ocean",
            Biome::StonyShore => "stony_shore",
            Biome::SnowyBeach => "snowy_beach",
            Biome::BirchForest => "birch_forest",
            Biome::BirchForestHills => "birch_forest_hills",
            Biome::DarkForest => "dark_forest",
            Biome::SnowyTaiga => "snowy_taiga",
            Biome::SnowyTaigaHills => "snowy_taiga_hills",
            Biome::OldGrowthPineTaiga => "old_growth_pine_taiga",
            Biome::GiantTreeTaigaHills => "giant_tree_taiga_hills",
            Biome::WindsweptForest => "windswept_forest",
            Biome::Savanna => "savanna",
            Biome::SavannaPlateau => "savanna_plateau",
            Biome::Badlands => "badlands",
            Biome::WoodedBadlands => "wooded_badlands",
            Biome::BadlandsPlateau => "badlands_plateau",
            Biome::SmallEndIslands => "small_end_islands",
            Biome::EndMidlands => "end_midlands",
            Biome::EndHighlands => "end_highlands",
            Biome::EndBarrens => "end_barrens",
            Biome::WarmOcean => "warm_ocean",
            Biome::LukewarmOcean => "lukewarm_ocean",
            Biome::ColdOcean => "cold_ocean",
            Biome::DeepWarmOcean => "deep_warm_ocean",
            Biome::DeepLukewarmOcean => "deep_lukewarm_ocean",
            Biome::DeepColdOcean => "deep_cold_ocean",
            Biome::DeepFrozenOcean => "deep_frozen_ocean",
            Biome::TheVoid => "the_void",
            Biome::SunflowerPlains => "sunflower_plains",
            Biome::DesertLakes => "desert_lakes",
            Biome::WindsweptGravellyHills => "windswept_gravelly_hills",
            Biome::FlowerForest => "flower_forest",
            Biome::TaigaMountains => "taiga_mountains",
            Biome::SwampHills => "swamp_hills",
            Biome::IceSpikes => "ice_spikes",
            Biome::ModifiedJungle => "modified_jungle",
            Biome::ModifiedJungleEdge => "modified_jungle_edge",
            Biome::OldGrowthBirchForest => "old_growth_birch_forest",
            Biome::TallBirchHills => "tall_birch_hills",
            Biome::DarkForestHills => "dark_forest_hills",
            Biome::SnowyTaigaMountains => "snowy_taiga_mountains",
            Biome::OldGrowthSpruceTaiga => "old_growth_spruce_taiga",
            Biome::GiantSpruceTaigaHills => "giant_spruce_taiga_hills",
            Biome::ModifiedGravellyMountains => "modified_gravelly_mountains",
            Biome::WindsweptSavanna => "windswept_savanna",
            Biome::ShatteredSavannaPlateau => "shattered_savanna_plateau",
            Biome::ErodedBadlands => "eroded_badlands",
            Biome::ModifiedWoodedBadlandsPlateau => "modified_wooded_badlands_plateau",
            Biome::ModifiedBadlandsPlateau => "modified_badlands_plateau",
            Biome::BambooJungle => "bamboo_jungle",
            Biome::BambooJungleHills => "bamboo_jungle_hills",
            Biome::SoulSandValley => "soul_sand_valley",
            Biome::CrimsonForest => "crimson_forest",
            Biome::WarpedForest => "warped_forest",
            Biome::BasaltDeltas => "basalt_deltas",
            Biome::DripstoneCaves => "dripstone_caves",
            Biome::LushCaves => "lush_caves",
            Biome::Meadow => "meadow",
            Biome::Grove => "grove",
            Biome::SnowySlopes => "snowy_slopes",
            Biome::JaggedPeaks => "jagged_peaks",
            Biome::FrozenPeaks => "frozen_peaks",
            Biome::StonyPeaks => "stony_peaks",
            Biome::DeepDark => "deep_dark",
            Biome::MangroveSwamp => "mangrove_swamp",
            Biome::CherryGrove => "cherry_grove",
        }
    }
}

lazy_static! {
    static ref BIOME_BY_NAME: HashMap<&'static str, Biome> = {
        let mut map = HashMap::new();
        for id in 0..=u8::MAX {
            if let Some(biome) = Biome::from_u8(id) {
                if let Some(name) = biome.name(McVersion::NEWEST) {
                    map.insert(name, biome);
                }
            }
        }
        map
    };
}

/// Looks a biome up by its resource name under the newest version.
pub fn from_name(name: &str) -> Option<Biome> {
    BIOME_BY_NAME.get(name).copied()
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn ids_map_to_biomes() {
        assert_eq!(Biome::from_u8(1), Some(Biome::Plains));
        assert_eq!(Biome::from_u8(127), Some(Biome::TheVoid));
        assert_eq!(Biome::from_u8(185), Some(Biome::CherryGrove));
        assert_eq!(Biome::from_u8(128), None);
        assert_eq!(Biome::from_u8(255), None);
    }

    #[test]
    fn newest_names() {
        assert_eq!(Biome::Plains.name(McVersion::NEWEST), Some("plains"));
        assert_eq!(Biome::WindsweptHills.name(McVersion::NEWEST), Some("windswept_hills"));
        assert_eq!(Biome::CherryGrove.name(McVersion::NEWEST), Some("cherry_grove"));
    }

    #[test]
    fn world_update_renames() {
        assert_eq!(Biome::WindsweptHills.name(McVersion::V1_17), Some("mountains"));
        assert_eq!(Biome::SnowyPlains.name(McVersion::V1_17), Some("snowy_tundra"));
        assert_eq!(Biome::WindsweptSavanna.name(McVersion::V1_17), Some("shattered_savanna"));
        assert_eq!(Biome::WindsweptSavanna.name(McVersion::V1_18), Some("windswept_savanna"));
    }

    #[test]
    fn world_update_removals() {
        assert_eq!(Biome::DesertHills.name(McVersion::V1_17), Some("desert_hills"));
        assert_eq!(Biome::DesertHills.name(McVersion::V1_18), None);
        assert_eq!(Biome::ModifiedJungle.name(McVersion::NEWEST), None);
    }

    #[test]
    fn introduction_gates() {
        assert_eq!(Biome::NetherWastes.name(McVersion::V1_15), Some("nether"));
        assert_eq!(Biome::NetherWastes.name(McVersion::V1_16), Some("nether_wastes"));
        assert_eq!(Biome::CherryGrove.name(McVersion::V1_19), None);
        assert_eq!(Biome::DeepDark.name(McVersion::V1_18), None);
        assert_eq!(Biome::DeepDark.name(McVersion::V1_19), Some("deep_dark"));
        assert_eq!(Biome::BambooJungle.name(McVersion::V1_13), None);
        assert_eq!(Biome::BambooJungle.name(McVersion::V1_14), Some("bamboo_jungle"));
    }

    #[test]
    fn known_colors() {
        assert_eq!(Biome::Ocean.color(), [0, 0, 112]);
        assert_eq!(Biome::Plains.color(), [141, 179, 96]);
        assert_eq!(Biome::Badlands.color(), [217, 69, 21]);
        assert_eq!(Biome::TheVoid.color(), [0, 0, 0]);
    }

    #[test]
    fn from_name_round_trips() {
        for id in 0..=u8::MAX {
            let biome = match Biome::from_u8(id) {
                Some(v) => v,
                None => continue
            };
            if let Some(name) = biome.name(McVersion::NEWEST) {
                assert_eq!(from_name(name), Some(biome), "{}", name);
            }
        }
    }

    #[test]
    fn from_name_rejects_removed() {
        assert_eq!(from_name("plains"), Some(Biome::Plains));
        assert_eq!(from_name("desert_hills"), None);
        assert_eq!(from_name("mountains"), None);
        assert_eq!(from_name(""), None);
    }

    #[quickcheck]
    fn names_are_resource_locations(id: u8, newest: bool) -> bool {
        let version = if newest { McVersion::NEWEST } else { McVersion::V1_17 };
        match Biome::from_u8(id).and_then(|b| b.name(version)) {
            Some(name) => {
                !name.is_empty()
                    && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
            }
            None => true
        }
    }
}
