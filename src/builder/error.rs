use crate::AttributeError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Attribute(#[from] AttributeError),
    #[error("{what} must be at least 1")]
    ZeroSubdivision { what: &'static str },
    #[error("plane extents must be nonzero; got {width}×{depth}")]
    EmptyPlane { width: u32, depth: u32 },
}

/// Ensure a subdivision count is nonzero.
#[inline]
pub(crate) fn subdivisions(what: &'static str, count: u32) -> Result<u32, BuildError> {
    if count == 0 {
        return Err(BuildError::ZeroSubdivision { what });
    }
    Ok(count)
}
