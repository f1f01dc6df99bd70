/// Vertex position extraction from glTF scene containers
use crate::constants::VERTEX_STRIDE;
use gltf::Semantic;
use gltf::accessor::{DataType, Dimensions};
use std::path::Path;

/// Packed vertex positions decoded from the first scene node's mesh.
pub struct MeshPositions {
    pub positions: Vec<[f32; 3]>,
    pub mesh_index: usize,
    pub mesh_name: Option<String>,
    pub primitive_count: usize,
}

/// Resolve the default scene's first node's mesh and decode every
/// primitive's POSITION attribute from its backing buffer.
pub fn load_positions(path: &Path) -> Result<MeshPositions, Box<dyn std::error::Error>> {
    let (document, buffers, _images) = gltf::import(path)?;

    let scene = document
        .default_scene()
        .ok_or("scene container has no default scene")?;
    let node = scene.nodes().next().ok_or("default scene has no nodes")?;
    let mesh = node.mesh().ok_or("first scene node has no mesh attached")?;

    let mut positions = Vec::new();
    let mut primitive_count = 0;

    for primitive in mesh.primitives() {
        let accessor = primitive
            .get(&Semantic::Positions)
            .ok_or("mesh primitive has no POSITION attribute")?;

        if accessor.data_type() != DataType::F32 || accessor.dimensions() != Dimensions::Vec3 {
            return Err("POSITION accessor must hold Vec3 f32 components".into());
        }

        let view = accessor
            .view()
            .ok_or("POSITION accessor has no buffer view")?;
        if let Some(stride) = view.stride() {
            if stride != VERTEX_STRIDE {
                return Err(format!(
                    "interleaved vertex data (byte stride {}) is not supported",
                    stride
                )
                .into());
            }
        }

        let buffer = buffers
            .get(view.buffer().index())
            .ok_or("buffer view references an unresolved buffer")?;
        let base = view.offset() + accessor.offset();

        for i in 0..accessor.count() {
            let index = base + i * VERTEX_STRIDE;
            let data = buffer
                .0
                .get(index..index + VERTEX_STRIDE)
                .ok_or("vertex data extends past the end of its buffer")?;
            positions.push(decode_vertex(data));
        }

        primitive_count += 1;
    }

    Ok(MeshPositions {
        positions,
        mesh_index: mesh.index(),
        mesh_name: mesh.name().map(str::to_string),
        primitive_count,
    })
}

/// Decode one tightly packed little-endian vertex position.
fn decode_vertex(d: &[u8]) -> [f32; 3] {
    [
        f32::from_le_bytes([d[0], d[1], d[2], d[3]]),
        f32::from_le_bytes([d[4], d[5], d[6], d[7]]),
        f32::from_le_bytes([d[8], d[9], d[10], d[11]]),
    ]
}
