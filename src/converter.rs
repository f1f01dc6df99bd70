/// Mesh to heightmap converter orchestrating extraction, rasterisation and encoding.
use crate::bhm_writer::write_bhm;
use crate::bounds::MeshBounds;
use crate::constants::OUTPUT_SUFFIX;
use crate::heightmap::HeightmapGenerator;
use crate::mesh::{self, MeshPositions};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Scene mesh to heightmap converter.
/// Projects vertex heights onto a fixed-size grid and encodes it as BHM.
pub struct MeshConverter {
    /// Input scene container file path.
    input_path: PathBuf,
    /// Output artifact path, input path with the BHM suffix appended.
    output_path: PathBuf,
    /// Square grid resolution for the output raster.
    grid_size: u16,
}

impl MeshConverter {
    /// Create new converter instance for a scene file and grid resolution.
    pub fn new(input_path: &str, grid_size: u16) -> Result<Self, Box<dyn std::error::Error>> {
        if grid_size == 0 {
            return Err("grid size must be a positive integer".into());
        }

        Ok(Self {
            input_path: PathBuf::from(input_path),
            output_path: PathBuf::from(format!("{}{}", input_path, OUTPUT_SUFFIX)),
            grid_size,
        })
    }

    /// Execute the conversion pipeline: load, measure, rasterise, encode.
    pub fn convert(&self) -> Result<(), Box<dyn std::error::Error>> {
        println!(
            "Converting {} to {}x{} heightmap...",
            self.input_path.display(),
            self.grid_size,
            self.grid_size
        );

        let mesh = mesh::load_positions(&self.input_path)?;
        self.print_mesh_info(&mesh);

        let bounds = self.calculate_bounds(&mesh.positions);
        self.print_bounds(&bounds);

        if bounds.max_y <= 0.0 {
            return Err("no positive-height vertices found in mesh".into());
        }

        let generator = self.rasterise(&mesh.positions, bounds.max_y);

        let byte_count = write_bhm(
            &self.output_path,
            self.grid_size,
            bounds.max_y,
            generator.grid(),
        )?;
        println!(
            "Saved {} ({} bytes)",
            self.output_path.display(),
            byte_count
        );

        self.print_processing_stats(&mesh, &generator);

        println!("Conversion complete!");
        Ok(())
    }

    /// Calculate coordinate bounds across all decoded vertices.
    fn calculate_bounds(&self, positions: &[[f32; 3]]) -> MeshBounds {
        let pb = ProgressBar::new(positions.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {pos}/{len} vertices ({percent}%) {msg}")
                .unwrap()
                .progress_chars("▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Calculating bounds");

        let mut bounds = MeshBounds::new();
        for (idx, &[x, y, z]) in positions.iter().enumerate() {
            bounds.update(x, y, z);

            if idx % 10_000 == 0 {
                pb.set_position(idx as u64);
            }
        }
        pb.finish_with_message("Bounds calculated");

        bounds
    }

    /// Rasterise vertex heights onto the intensity grid.
    fn rasterise(&self, positions: &[[f32; 3]], max_height: f32) -> HeightmapGenerator {
        let pb = ProgressBar::new(positions.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.green/blue}] {pos}/{len} vertices ({percent}%) {msg}")
                .unwrap()
                .progress_chars("▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Rasterising vertices");

        let mut generator = HeightmapGenerator::new(self.grid_size as usize);
        for (idx, &[x, y, z]) in positions.iter().enumerate() {
            generator.plot(x, y, z, max_height);

            if idx % 10_000 == 0 {
                pb.set_position(idx as u64);
            }
        }
        pb.finish_with_message("Vertices rasterised");

        generator
    }

    /// Print scene mesh information for verification.
    fn print_mesh_info(&self, mesh: &MeshPositions) {
        println!("Scene mesh information:");
        println!("  File: {}", self.input_path.display());
        match &mesh.mesh_name {
            Some(name) => println!("  Mesh: {} (index {})", name, mesh.mesh_index),
            None => println!("  Mesh: index {}", mesh.mesh_index),
        }
        println!("  Primitives: {}", mesh.primitive_count);
        println!("  Vertices: {}", mesh.positions.len());
        println!();
    }

    /// Print coordinate bounds information for validation.
    fn print_bounds(&self, bounds: &MeshBounds) {
        println!("Mesh bounds:");
        println!("  X: {:.2} to {:.2}", bounds.min_x, bounds.max_x);
        println!(
            "  Y: {:.2} to {:.2} (elevation)",
            bounds.min_y, bounds.max_y
        );
        println!("  Z: {:.2} to {:.2} (depth)", bounds.min_z, bounds.max_z);
    }

    /// Print processing statistics for verification and debugging.
    fn print_processing_stats(&self, mesh: &MeshPositions, generator: &HeightmapGenerator) {
        let total_cells = self.grid_size as usize * self.grid_size as usize;

        println!("Processing complete:");
        println!(
            "  Plotted: {} of {} vertices ({:.1}% grid utilisation)",
            generator.plotted(),
            mesh.positions.len(),
            (generator.occupied_cells() as f32 / total_cells as f32) * 100.0
        );

        if generator.skipped() > 0 {
            println!(
                "  Skipped: {} vertices at or below ground level",
                generator.skipped()
            );
        }

        if generator.clamped() > 0 {
            println!(
                "  Clamped: {} vertices outside the unit grid range",
                generator.clamped()
            );
        }
    }
}
