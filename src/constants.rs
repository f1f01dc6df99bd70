/// Shared configuration for heightmap conversion

/// Magic tag identifying the binary heightmap format
pub const BHM_MAGIC: &[u8; 3] = b"BHM";

/// Fixed header length: magic tag, grid size (u16), max height (f32)
pub const BHM_HEADER_LEN: usize = 9;

/// Suffix appended to the input path to name the output artifact
pub const OUTPUT_SUFFIX: &str = ".bhm";

/// Bytes per tightly packed vertex position (three little-endian f32)
pub const VERTEX_STRIDE: usize = 12;

/// Maximum intensity value a heightmap cell can hold
pub const MAX_INTENSITY: f32 = 255.0;
