/// GLB fixture construction for converter tests
use serde_json::json;
use std::fs;
use std::path::PathBuf;

/// Build a minimal binary glTF container holding a single mesh primitive
/// whose POSITION accessor covers the given vertices.
pub fn glb_from_positions(positions: &[[f32; 3]]) -> Vec<u8> {
    let mut bin = Vec::with_capacity(positions.len() * 12);
    for position in positions {
        for component in position {
            bin.extend_from_slice(&component.to_le_bytes());
        }
    }

    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];
    for position in positions {
        for (axis, &component) in position.iter().enumerate() {
            min[axis] = min[axis].min(component);
            max[axis] = max[axis].max(component);
        }
    }

    let document = json!({
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "nodes": [0] }],
        "nodes": [{ "mesh": 0 }],
        "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 } }] }],
        "accessors": [{
            "bufferView": 0,
            "byteOffset": 0,
            "componentType": 5126,
            "count": positions.len(),
            "type": "VEC3",
            "min": min.to_vec(),
            "max": max.to_vec()
        }],
        "bufferViews": [{ "buffer": 0, "byteOffset": 0, "byteLength": bin.len() }],
        "buffers": [{ "byteLength": bin.len() }]
    });

    build_glb(&document.to_string(), &bin)
}

/// Frame JSON and binary chunks into a GLB byte stream.
fn build_glb(document: &str, bin: &[u8]) -> Vec<u8> {
    let mut json_chunk = document.as_bytes().to_vec();
    while json_chunk.len() % 4 != 0 {
        json_chunk.push(b' ');
    }
    let mut bin_chunk = bin.to_vec();
    while bin_chunk.len() % 4 != 0 {
        bin_chunk.push(0);
    }

    let total = 12 + 8 + json_chunk.len() + 8 + bin_chunk.len();
    let mut glb = Vec::with_capacity(total);
    glb.extend_from_slice(b"glTF");
    glb.extend_from_slice(&2u32.to_le_bytes());
    glb.extend_from_slice(&(total as u32).to_le_bytes());
    glb.extend_from_slice(&(json_chunk.len() as u32).to_le_bytes());
    glb.extend_from_slice(b"JSON");
    glb.extend_from_slice(&json_chunk);
    glb.extend_from_slice(&(bin_chunk.len() as u32).to_le_bytes());
    glb.extend_from_slice(b"BIN\0");
    glb.extend_from_slice(&bin_chunk);
    glb
}

/// Write fixture bytes to a per-process temp file and return its path.
pub fn write_temp_glb(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "mesh-heightmap-{}-{}",
        std::process::id(),
        name
    ));
    fs::write(&path, bytes).unwrap();
    path
}
