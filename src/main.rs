/// Scene mesh to heightmap converter main entry point
mod bhm_writer;
mod bounds;
mod constants;
mod converter;
mod heightmap;
mod mesh;
#[cfg(test)]
mod test_data;

use converter::MeshConverter;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <input.glb> <grid-size>", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let grid_size: u16 = args[2].parse()?;

    let converter = MeshConverter::new(input_path, grid_size)?;
    converter.convert()?;

    Ok(())
}
