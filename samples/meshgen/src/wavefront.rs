//! Minimal Wavefront OBJ output.

use std::io::{self, Write};

use tessel::{Geometry, Topology};

/// Faces of `topology` over `count` vertex references, as 0-based positions into that list.
pub fn faces(topology: Topology, count: usize) -> Vec<Vec<usize>> {
    match topology {
        Topology::Triangles => (0..count / 3).map(|f| (3 * f..3 * f + 3).collect()).collect(),
        Topology::Quads => (0..count / 4).map(|f| (4 * f..4 * f + 4).collect()).collect(),
        Topology::TriangleFan => (1..count.saturating_sub(1))
            .map(|i| vec![0, i, i + 1])
            .collect(),
        // flip every other triangle to keep the winding consistent
        Topology::TriangleStrip => (0..count.saturating_sub(2))
            .map(|i| {
                if i % 2 == 0 {
                    vec![i, i + 1, i + 2]
                } else {
                    vec![i + 1, i, i + 2]
                }
            })
            .collect(),
    }
}

/// Write positions, texture coordinates (set 0), normals, and faces of `geom`.
pub fn write_obj(out: &mut impl Write, geom: &Geometry, name: &str) -> io::Result<()> {
    writeln!(out, "# generated by meshgen")?;
    writeln!(out, "o {name}")?;

    let positions = geom.positions().unwrap_or_default();
    for p in positions {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    let texcoords = geom.texcoords(0).ok();
    for t in texcoords.unwrap_or_default() {
        writeln!(out, "vt {} {}", t.x, t.y)?;
    }
    let normals = geom.normals().ok();
    for n in normals.unwrap_or_default() {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    let reference = |i: usize| -> usize {
        match geom.indices() {
            Some(indices) => indices[i] as usize,
            None => i,
        }
    };
    let count = geom.indices().map_or(geom.vertex_count(), <[u32]>::len);
    for face in faces(geom.topology(), count) {
        write!(out, "f")?;
        for i in face {
            // OBJ indices are 1-based
            let v = reference(i) + 1;
            match (texcoords.is_some(), normals.is_some()) {
                (true, true) => write!(out, " {v}/{v}/{v}")?,
                (true, false) => write!(out, " {v}/{v}")?,
                (false, true) => write!(out, " {v}//{v}")?,
                (false, false) => write!(out, " {v}")?,
            }
        }
        writeln!(out)?;
    }
    tracing::debug!(
        texcoords = texcoords.is_some(),
        normals = normals.is_some(),
        "wrote OBJ"
    );
    Ok(())
}
