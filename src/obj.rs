//! Wavefront OBJ import.
//!
//! Every model in a file is merged into one indexed triangle list. Materials are ignored.

use std::{io::BufRead, path::Path};

use nalgebra::{Vector2, Vector3};

use crate::{AttributeError, BoundingBox, Geometry, Slot, Topology, DEFAULT_COLOUR};

#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    #[error(transparent)]
    Load(#[from] tobj::LoadError),
    #[error("model file contains no vertices")]
    Empty,
    #[error(transparent)]
    Attribute(#[from] AttributeError),
}

/// Load every model in an OBJ file into a single [Geometry].
///
/// # Errors
/// * the file can't be read or parsed
/// * the file has no vertices
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_obj(path: impl AsRef<Path>) -> Result<Geometry, ObjError> {
    let (models, _) = tobj::load_obj(path.as_ref(), &tobj::GPU_LOAD_OPTIONS)?;
    merge_models(&models)
}

/// As [load_obj], but reading from a buffer. `mtllib` statements are ignored.
pub fn load_obj_buf(reader: &mut impl BufRead) -> Result<Geometry, ObjError> {
    let (models, _) =
        tobj::load_obj_buf(reader, &tobj::GPU_LOAD_OPTIONS, |_| Ok(Default::default()))?;
    merge_models(&models)
}

fn vec3s(data: &[f32]) -> impl Iterator<Item = Vector3<f32>> + '_ {
    data.chunks_exact(3).map(Vector3::from_column_slice)
}

fn merge_models(models: &[tobj::Model]) -> Result<Geometry, ObjError> {
    let mut positions = Vec::new();
    let mut colours = Vec::new();
    let mut normals = Vec::new();
    let mut texcoords = Vec::new();
    let mut indices = Vec::new();
    // normals & texcoords are only kept if every model has them
    let mut all_normals = true;
    let mut all_texcoords = true;

    for model in models {
        let mesh = &model.mesh;
        let base = positions.len() as u32;
        let count = mesh.positions.len() / 3;
        tracing::trace!(name = %model.name, vertices = count, indices = mesh.indices.len(), "merging model");

        positions.extend(vec3s(&mesh.positions));
        if mesh.vertex_color.len() == count * 3 {
            colours.extend(vec3s(&mesh.vertex_color).map(|c| c.push(1.0)));
        } else {
            colours.extend(std::iter::repeat(DEFAULT_COLOUR).take(count));
        }
        if mesh.normals.len() == count * 3 {
            normals.extend(vec3s(&mesh.normals));
        } else {
            all_normals = false;
        }
        if mesh.texcoords.len() == count * 2 {
            texcoords.extend(mesh.texcoords.chunks_exact(2).map(Vector2::from_column_slice));
        } else {
            all_texcoords = false;
        }
        indices.extend(mesh.indices.iter().map(|i| base + i));
    }

    if positions.is_empty() {
        return Err(ObjError::Empty);
    }
    tracing::debug!(
        models = models.len(),
        vertices = positions.len(),
        indices = indices.len(),
        normals = all_normals,
        texcoords = all_texcoords,
        "loaded model file"
    );

    let mut geom = Geometry::new();
    geom.set_topology(Topology::Triangles);
    geom.set_bounds(BoundingBox::from_points(positions.iter().copied()));
    geom.add_attribute(Slot::POSITION, positions)?;
    geom.add_attribute(Slot::COLOUR, colours)?;
    if all_normals {
        geom.add_attribute(Slot::NORMAL, normals)?;
    }
    if all_texcoords {
        geom.add_attribute(Slot::TEXCOORD_0, texcoords)?;
    }
    if !indices.is_empty() {
        geom.add_index_array(indices)?;
    }
    Ok(geom)
}
