//! Grid meshes from height fields.
//!
//! A terrain has one vertex per heightmap texel. Besides the usual position, normal, and
//! texcoord 0, each vertex gets 4 texture blend weights in texcoord 1, one per height layer.

use nalgebra::{vector, Vector2, Vector3, Vector4};

use crate::{AttributeError, BoundingBox, Geometry, Slot, Topology};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainError {
    #[error("heightmap must be at least 2×2; got {width}×{height}")]
    TooSmall { width: u32, height: u32 },
    #[error("heightmap needs {expected} texels; got {found}")]
    TexelCount { expected: usize, found: usize },
    #[error("layer heights must be ascending: {0:?}")]
    UnorderedLayers([f32; 4]),
    #[error(transparent)]
    Attribute(#[from] AttributeError),
}

/// The colour channel of each texel to read heights from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    #[default]
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    #[inline]
    pub fn of(self, texel: &Vector4<f32>) -> f32 {
        match self {
            Channel::Red => texel.x,
            Channel::Green => texel.y,
            Channel::Blue => texel.z,
            Channel::Alpha => texel.w,
        }
    }
}

/// A row-major grid of RGBA texels, each channel nominally in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    width: u32,
    height: u32,
    texels: Vec<Vector4<f32>>,
}

impl Heightmap {
    /// # Errors
    /// * `width` < 2 or `height` < 2
    /// * `texels.len() != width * height`
    pub fn new(width: u32, height: u32, texels: Vec<Vector4<f32>>) -> Result<Self, TerrainError> {
        if width < 2 || height < 2 {
            return Err(TerrainError::TooSmall { width, height });
        }
        let expected = width as usize * height as usize;
        if texels.len() != expected {
            return Err(TerrainError::TexelCount {
                expected,
                found: texels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// Construct a heightmap by sampling `f(x, z)` for every texel.
    ///
    /// # Errors
    /// * `width` < 2 or `height` < 2
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> Vector4<f32>,
    ) -> Result<Self, TerrainError> {
        let mut texels = Vec::with_capacity(width as usize * height as usize);
        for z in 0..height {
            for x in 0..width {
                texels.push(f(x, z));
            }
        }
        Self::new(width, height, texels)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// # Panics
    /// * `x` >= `self.width()` or `z` >= `self.height()`
    #[inline]
    pub fn texel(&self, x: u32, z: u32) -> &Vector4<f32> {
        assert!(x < self.width && z < self.height);
        &self.texels[z as usize * self.width as usize + x as usize]
    }

    #[inline]
    pub fn texels(&self) -> &[Vector4<f32>] {
        &self.texels
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainOptions {
    pub channel: Channel,
    /// World-space height of a sample value of 1.0.
    pub height_scale: f32,
    /// Sample values at which each of the 4 texture layers is fully weighted. Must be ascending.
    pub layer_heights: [f32; 4],
    /// Distance from a layer's height at which its weight falls to 0.
    pub band_half_width: f32,
    /// Average the normals of every triangle touching a vertex, weighted by area, instead of
    /// using the normal of whichever triangle was visited last.
    pub smooth_normals: bool,
}

impl Default for TerrainOptions {
    fn default() -> Self {
        Self {
            channel: Channel::Red,
            height_scale: 10.0,
            layer_heights: [0.0, 0.15, 0.5, 0.9],
            band_half_width: 0.25,
            smooth_normals: false,
        }
    }
}

/// Blend weights for a sample value `h`; always sums to 1.
///
/// Each layer's weight falls off linearly with distance from its height. If `h` is outside every
/// band, the nearest layer gets all the weight.
pub fn layer_weights(h: f32, layer_heights: &[f32; 4], band_half_width: f32) -> Vector4<f32> {
    let w = Vector4::from_fn(|i, _| {
        (1.0 - (h - layer_heights[i]).abs() / band_half_width).clamp(0.0, 1.0)
    });
    let total = w.sum();
    if total > 0.0 {
        return w / total;
    }
    let nearest = (0..4)
        .min_by(|&a, &b| {
            (h - layer_heights[a])
                .abs()
                .total_cmp(&(h - layer_heights[b]).abs())
        })
        .unwrap_or(0);
    let mut res = Vector4::zeros();
    res[nearest] = 1.0;
    res
}

/// Build a triangle mesh with one vertex per texel of `map`.
///
/// The mesh is centred on the origin in XZ, with unit spacing between vertices. Vertex `(x, z)`
/// is stored at index `x * height + z`.
///
/// # Errors
/// * `options.layer_heights` isn't ascending
#[tracing::instrument(level = "debug", skip(map), fields(width = map.width(), height = map.height()))]
pub fn build_terrain(map: &Heightmap, options: &TerrainOptions) -> Result<Geometry, TerrainError> {
    if options.layer_heights.windows(2).any(|w| w[0] > w[1]) {
        return Err(TerrainError::UnorderedLayers(options.layer_heights));
    }

    let (w, h) = (map.width(), map.height());
    let vertex = |x: u32, z: u32| x * h + z;
    let vertex_count = w as usize * h as usize;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut texcoords = Vec::with_capacity(vertex_count);
    let mut weights = Vec::with_capacity(vertex_count);
    for x in 0..w {
        for z in 0..h {
            let sample = options.channel.of(map.texel(x, z));
            positions.push(vector![
                -(w as f32 / 2.0) + x as f32,
                sample * options.height_scale,
                -(h as f32 / 2.0) + z as f32
            ]);
            texcoords.push(Vector2::new(x as f32, z as f32));
            weights.push(layer_weights(
                sample,
                &options.layer_heights,
                options.band_half_width,
            ));
        }
    }

    let mut indices = Vec::with_capacity((w as usize - 1) * (h as usize - 1) * 6);
    for x in 0..w - 1 {
        for z in 0..h - 1 {
            let top_left = vertex(x, z);
            let top_right = vertex(x, z + 1);
            let bottom_left = vertex(x + 1, z);
            let bottom_right = vertex(x + 1, z + 1);
            indices.extend_from_slice(&[
                top_left,
                bottom_right,
                bottom_left,
                top_left,
                top_right,
                bottom_right,
            ]);
        }
    }

    let normals = if options.smooth_normals {
        smooth_normals(&positions, &indices)
    } else {
        flat_normals(&positions, &indices)
    };

    let bounds = BoundingBox::from_points(positions.iter().copied());
    tracing::debug!(
        vertices = vertex_count,
        indices = indices.len(),
        "assembling terrain"
    );

    let mut geom = Geometry::new();
    geom.set_topology(Topology::Triangles);
    geom.add_attribute(Slot::POSITION, positions)?;
    geom.add_attribute(Slot::NORMAL, normals)?;
    geom.add_attribute(Slot::TEXCOORD_0, texcoords)?;
    geom.add_attribute(Slot::TEXCOORD_1, weights)?;
    geom.add_index_array(indices)?;
    geom.set_bounds(bounds);
    Ok(geom)
}

/// `(p1 - p2) × (p1 - p3)`, unnormalized; its length is twice the triangle's area.
#[inline]
fn triangle_normal(positions: &[Vector3<f32>], tri: &[u32]) -> Vector3<f32> {
    let (p1, p2, p3) = (
        positions[tri[0] as usize],
        positions[tri[1] as usize],
        positions[tri[2] as usize],
    );
    (p1 - p2).cross(&(p1 - p3))
}

/// Each vertex takes the normal of the last triangle that references it.
fn flat_normals(positions: &[Vector3<f32>], indices: &[u32]) -> Vec<Vector3<f32>> {
    let mut normals = vec![Vector3::zeros(); positions.len()];
    for tri in indices.chunks_exact(3) {
        let n = triangle_normal(positions, tri).normalize();
        for &i in tri {
            normals[i as usize] = n;
        }
    }
    normals
}

fn smooth_normals(positions: &[Vector3<f32>], indices: &[u32]) -> Vec<Vector3<f32>> {
    let mut normals = vec![Vector3::zeros(); positions.len()];
    for tri in indices.chunks_exact(3) {
        let n = triangle_normal(positions, tri);
        for &i in tri {
            normals[i as usize] += n;
        }
    }
    for n in normals.iter_mut() {
        n.normalize_mut();
    }
    normals
}
