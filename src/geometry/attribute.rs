use nalgebra::{Vector2, Vector3, Vector4};

/// The number of attribute slots available to a [Geometry](super::Geometry).
pub const MAX_SLOTS: usize = 16;

/// Location of a vertex attribute array within a [Geometry](super::Geometry).
///
/// Slot numbers are shared with shaders, so the well-known slots have fixed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(pub u32);

impl Slot {
    pub const POSITION: Self = Self(0);
    pub const COLOUR: Self = Self(1);
    pub const NORMAL: Self = Self(2);
    pub const BINORMAL: Self = Self(3);
    pub const TANGENT: Self = Self(4);
    pub const TEXCOORD_0: Self = Self(10);
    pub const TEXCOORD_1: Self = Self(11);
    pub const TEXCOORD_2: Self = Self(12);
    pub const TEXCOORD_3: Self = Self(13);
    pub const TEXCOORD_4: Self = Self(14);
    pub const TEXCOORD_5: Self = Self(15);

    /// The `n`th texture coordinate slot.
    ///
    /// Only `n` ∈ 0..6 name real slots; anything above that is out of range and will be rejected
    /// by [Geometry::add_attribute](super::Geometry::add_attribute). Saturates at `u32::MAX`.
    #[inline]
    pub const fn texcoord(n: u32) -> Self {
        Self(Self::TEXCOORD_0.0.saturating_add(n))
    }

    /// Whether this slot is < [MAX_SLOTS].
    #[inline]
    pub const fn in_range(self) -> bool {
        (self.0 as usize) < MAX_SLOTS
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for Slot {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Slot::POSITION => f.write_str("0 (position)"),
            Slot::COLOUR => f.write_str("1 (colour)"),
            Slot::NORMAL => f.write_str("2 (normal)"),
            Slot::BINORMAL => f.write_str("3 (binormal)"),
            Slot::TANGENT => f.write_str("4 (tangent)"),
            Slot(s @ 10..=15) => write!(f, "{s} (texcoord {})", s - 10),
            Slot(s) => write!(f, "{s}"),
        }
    }
}

/// The number of `f32` components in each element of an attribute array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeWidth {
    Vec2,
    Vec3,
    Vec4,
}

impl AttributeWidth {
    #[inline]
    pub const fn components(self) -> usize {
        match self {
            AttributeWidth::Vec2 => 2,
            AttributeWidth::Vec3 => 3,
            AttributeWidth::Vec4 => 4,
        }
    }

    #[inline]
    pub const fn size_bytes(self) -> usize {
        self.components() * std::mem::size_of::<f32>()
    }
}

impl std::fmt::Display for AttributeWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeWidth::Vec2 => f.write_str("vec2"),
            AttributeWidth::Vec3 => f.write_str("vec3"),
            AttributeWidth::Vec4 => f.write_str("vec4"),
        }
    }
}

/// A typed array of per-vertex values.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeData {
    Vec2(Vec<Vector2<f32>>),
    Vec3(Vec<Vector3<f32>>),
    Vec4(Vec<Vector4<f32>>),
}

impl AttributeData {
    /// The number of vertices described by this array.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            AttributeData::Vec2(v) => v.len(),
            AttributeData::Vec3(v) => v.len(),
            AttributeData::Vec4(v) => v.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn width(&self) -> AttributeWidth {
        match self {
            AttributeData::Vec2(_) => AttributeWidth::Vec2,
            AttributeData::Vec3(_) => AttributeWidth::Vec3,
            AttributeData::Vec4(_) => AttributeWidth::Vec4,
        }
    }

    pub fn as_vec2(&self) -> Option<&[Vector2<f32>]> {
        match self {
            AttributeData::Vec2(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec3(&self) -> Option<&[Vector3<f32>]> {
        match self {
            AttributeData::Vec3(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec4(&self) -> Option<&[Vector4<f32>]> {
        match self {
            AttributeData::Vec4(v) => Some(v),
            _ => None,
        }
    }

    /// View this array as tightly-packed `f32`s, `width().components()` per vertex.
    pub fn as_floats(&self) -> &[f32] {
        match self {
            AttributeData::Vec2(v) => bytemuck::cast_slice(v),
            AttributeData::Vec3(v) => bytemuck::cast_slice(v),
            AttributeData::Vec4(v) => bytemuck::cast_slice(v),
        }
    }
}

impl From<Vec<Vector2<f32>>> for AttributeData {
    fn from(value: Vec<Vector2<f32>>) -> Self {
        Self::Vec2(value)
    }
}

impl From<Vec<Vector3<f32>>> for AttributeData {
    fn from(value: Vec<Vector3<f32>>) -> Self {
        Self::Vec3(value)
    }
}

impl From<Vec<Vector4<f32>>> for AttributeData {
    fn from(value: Vec<Vector4<f32>>) -> Self {
        Self::Vec4(value)
    }
}
