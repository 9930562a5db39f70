use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use tessel::{
    terrain::{build_terrain, Heightmap, TerrainOptions},
    Geometry,
};

mod cli;
use cli::*;

mod wavefront;

#[derive(Debug, thiserror::Error)]
enum MeshgenError {
    #[error(transparent)]
    Tessel(#[from] tessel::Error),
    #[error("failed to read heightmap {path:?}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn load_heightmap(path: &Path) -> Result<Heightmap, MeshgenError> {
    let img = image::open(path)
        .map_err(|source| MeshgenError::Image {
            path: path.to_owned(),
            source,
        })?
        .into_rgba32f();
    tracing::debug!(width = img.width(), height = img.height(), "read heightmap");
    let map = Heightmap::from_fn(img.width(), img.height(), |x, z| {
        nalgebra::Vector4::from(img.get_pixel(x, z).0)
    })
    .map_err(tessel::Error::from)?;
    Ok(map)
}

fn generate(command: &Command) -> Result<(String, Geometry), MeshgenError> {
    match command {
        Command::Primitive(primitive) => {
            let shape = primitive.shape();
            tracing::info!(%shape, vertices = shape.vertex_count(), "generating primitive");
            let geom = shape.build().map_err(tessel::Error::from)?;
            Ok((shape.name().to_owned(), geom))
        }
        Command::Terrain {
            heightmap,
            channel,
            height_scale,
            smooth,
        } => {
            let map = load_heightmap(heightmap)?;
            let options = TerrainOptions {
                channel: (*channel).into(),
                height_scale: *height_scale,
                smooth_normals: *smooth,
                ..Default::default()
            };
            tracing::info!(path = %heightmap.display(), ?options, "generating terrain");
            let geom = build_terrain(&map, &options).map_err(tessel::Error::from)?;
            Ok(("terrain".to_owned(), geom))
        }
        Command::Merge { file } => {
            tracing::info!(path = %file.display(), "merging model file");
            let geom = tessel::obj::load_obj(file).map_err(tessel::Error::from)?;
            let name = file
                .file_stem()
                .map_or_else(|| "model".to_owned(), |s| s.to_string_lossy().into_owned());
            Ok((name, geom))
        }
    }
}

fn run(cli: &Cli) -> Result<(), MeshgenError> {
    let (name, geom) = generate(&cli.command)?;
    let bounds = geom.bounds();
    tracing::info!(
        topology = %geom.topology(),
        vertices = geom.vertex_count(),
        indices = geom.index_count(),
        faces = geom.topology().face_count(geom.indices().map_or(geom.vertex_count(), <[u32]>::len)),
        attributes = geom.attribute_count(),
        min = ?bounds.min,
        max = ?bounds.max,
        "generated mesh"
    );

    match &cli.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            wavefront::write_obj(&mut out, &geom, &name)?;
            out.flush()?;
            tracing::info!(path = %path.display(), "wrote mesh");
        }
        None => {
            let mut out = io::stdout().lock();
            wavefront::write_obj(&mut out, &geom, &name)?;
            out.flush()?;
        }
    }
    Ok(())
}

pub fn main() {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_filter, cli.log_format);
    tracing::debug!(?cli, "parsed arguments");

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "meshgen failed");
        std::process::exit(1);
    }
}
