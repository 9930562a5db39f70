use crate::{builder::BuildError, terrain::TerrainError, AttributeError};

/// Any error produced by this crate, aside from [UploadError](crate::UploadError), which is
/// generic over the device in use.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Attribute(#[from] AttributeError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Terrain(#[from] TerrainError),
    #[cfg(feature = "obj")]
    #[error(transparent)]
    Obj(#[from] crate::obj::ObjError),
}
