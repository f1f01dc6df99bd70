/// Binary heightmap (BHM) encoding and file output
use crate::constants::{BHM_HEADER_LEN, BHM_MAGIC};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Assemble the BHM byte layout: magic tag, big-endian grid size,
/// big-endian max height, then one intensity byte per cell.
pub fn encode_bhm(grid_size: u16, max_height: f32, grid: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(BHM_HEADER_LEN + grid.len());
    bytes.extend_from_slice(BHM_MAGIC);
    bytes.extend_from_slice(&grid_size.to_be_bytes());
    bytes.extend_from_slice(&max_height.to_be_bytes());
    bytes.extend_from_slice(grid);
    bytes
}

/// Write the encoded heightmap to disk and return the total bytes written.
pub fn write_bhm(
    path: &Path,
    grid_size: u16,
    max_height: f32,
    grid: &[u8],
) -> Result<usize, Box<dyn std::error::Error>> {
    let bytes = encode_bhm(grid_size, max_height, grid);
    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    Ok(bytes.len())
}
