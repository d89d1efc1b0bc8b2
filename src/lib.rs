pub mod biome;
pub mod emit;
pub mod source;

/// Number of biome ids in the fixed color table
pub const BIOME_COUNT: usize = 256;

/// Alpha component of every emitted color
pub const ALPHA: u8 = 255;
