use std::path::PathBuf;

use clap::ValueHint;
use nalgebra::{Vector2, Vector3};
use tessel::{builder::Shape, terrain::Channel};

use std::str::FromStr;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,tessel=info,meshgen=info",
        env = "MESHGEN_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Where to write the generated mesh, as Wavefront OBJ; stdout if absent
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    #[command(flatten)]
    Primitive(Primitive),
    /// A terrain mesh from a heightmap image
    Terrain {
        #[arg(value_hint = ValueHint::FilePath)]
        heightmap: PathBuf,
        /// Colour channel to read heights from
        #[arg(short, long, default_value_t = ChannelArg::Red)]
        channel: ChannelArg,
        /// World-space height of a full-intensity texel
        #[arg(long, default_value_t = 10.0)]
        height_scale: f32,
        /// Average normals across neighbouring triangles
        #[arg(long)]
        smooth: bool,
    },
    /// Load an existing model & write it back out merged into a single object
    Merge {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, clap::Subcommand)]
pub enum Primitive {
    /// An axis-aligned box
    Box {
        #[arg(short, long, default_value = "1,1,1", value_parser = parse_vec3::<f32>, value_name = "X,Y,Z")]
        dims: Vector3<f32>,
    },
    /// A tetrahedron with its apex at the top
    Tetrahedron {
        #[arg(short, long, default_value = "1,1,1", value_parser = parse_vec3::<f32>, value_name = "X,Y,Z")]
        dims: Vector3<f32>,
    },
    /// A square-based pyramid
    Pyramid {
        #[arg(short, long, default_value = "1,1,1", value_parser = parse_vec3::<f32>, value_name = "X,Y,Z")]
        dims: Vector3<f32>,
    },
    /// A flat disk in XZ, facing +Y
    Disk {
        #[arg(long, default_value_t = 10)]
        slices: u32,
        #[arg(short, long, default_value = "1,1", value_parser = parse_vec2::<f32>, value_name = "X,Y")]
        dims: Vector2<f32>,
    },
    /// A capped cylinder along Y
    Cylinder {
        #[arg(long, default_value_t = 10)]
        stacks: u32,
        #[arg(long, default_value_t = 10)]
        slices: u32,
        #[arg(short, long, default_value = "1,1,1", value_parser = parse_vec3::<f32>, value_name = "X,Y,Z")]
        dims: Vector3<f32>,
    },
    /// A UV sphere
    Sphere {
        #[arg(long, default_value_t = 10)]
        stacks: u32,
        #[arg(long, default_value_t = 10)]
        slices: u32,
        #[arg(short, long, default_value = "1,1,1", value_parser = parse_vec3::<f32>, value_name = "X,Y,Z")]
        dims: Vector3<f32>,
    },
    /// A torus around Y
    Torus {
        #[arg(long, default_value_t = 10)]
        stacks: u32,
        #[arg(long, default_value_t = 10)]
        slices: u32,
        /// Radius of the tube
        #[arg(long, default_value_t = 1.0)]
        ring_radius: f32,
        /// Distance from the centre to the middle of the tube
        #[arg(long, default_value_t = 3.0)]
        outer_radius: f32,
    },
    /// A grid of unit quads in XZ
    Plane {
        #[arg(long, default_value_t = 100)]
        width: u32,
        #[arg(long, default_value_t = 100)]
        depth: u32,
    },
}

impl Primitive {
    pub fn shape(self) -> Shape {
        match self {
            Primitive::Box { dims } => Shape::Box { dims },
            Primitive::Tetrahedron { dims } => Shape::Tetrahedron { dims },
            Primitive::Pyramid { dims } => Shape::Pyramid { dims },
            Primitive::Disk { slices, dims } => Shape::Disk { slices, dims },
            Primitive::Cylinder {
                stacks,
                slices,
                dims,
            } => Shape::Cylinder {
                stacks,
                slices,
                dims,
            },
            Primitive::Sphere {
                stacks,
                slices,
                dims,
            } => Shape::Sphere {
                stacks,
                slices,
                dims,
            },
            Primitive::Torus {
                stacks,
                slices,
                ring_radius,
                outer_radius,
            } => Shape::Torus {
                stacks,
                slices,
                ring_radius,
                outer_radius,
            },
            Primitive::Plane { width, depth } => Shape::Plane { width, depth },
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum ChannelArg {
    Red,
    Green,
    Blue,
    Alpha,
}

impl std::fmt::Display for ChannelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelArg::Red => f.write_str("red"),
            ChannelArg::Green => f.write_str("green"),
            ChannelArg::Blue => f.write_str("blue"),
            ChannelArg::Alpha => f.write_str("alpha"),
        }
    }
}

impl From<ChannelArg> for Channel {
    fn from(value: ChannelArg) -> Self {
        match value {
            ChannelArg::Red => Channel::Red,
            ChannelArg::Green => Channel::Green,
            ChannelArg::Blue => Channel::Blue,
            ChannelArg::Alpha => Channel::Alpha,
        }
    }
}

type ParseError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn parse_components<R: FromStr, const N: usize>(s: &str) -> Result<[R; N], ParseError>
where
    <R as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let parts = s
        .trim()
        .split(',')
        .map(|p| R::from_str(p.trim()))
        .collect::<Result<Vec<_>, _>>()?;
    let found = parts.len();
    parts
        .try_into()
        .map_err(|_| format!("expected {N} comma-separated components; got {found}").into())
}

fn parse_vec2<R: FromStr + nalgebra::Scalar>(s: &str) -> Result<Vector2<R>, ParseError>
where
    <R as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    parse_components::<R, 2>(s).map(Vector2::from)
}

fn parse_vec3<R: FromStr + nalgebra::Scalar>(s: &str) -> Result<Vector3<R>, ParseError>
where
    <R as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    parse_components::<R, 3>(s).map(Vector3::from)
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
