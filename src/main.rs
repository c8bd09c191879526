//! Planetgen CLI - procedural cube-sphere planet mesh generator.
//!
//! Builds the six face meshes of a noise-displaced cube-sphere and reports
//! their statistics.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use planetgen::config::PlanetConfig;
use planetgen::geometry::CubeFaceId;
use planetgen::mesh::{index_count, validate_resolution, vertex_count};
use planetgen::noise::{NoiseLayer, NoiseStack};
use planetgen::planet::{MeshSlots, PlanetGenerator};

/// Procedural cube-sphere planet mesh generator.
#[derive(Parser)]
#[command(name = "planetgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a planet mesh and print per-face statistics.
    Generate {
        /// JSON configuration file (resolution, seed, layers).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Grid cells along each face edge.
        #[arg(short, long)]
        resolution: Option<u32>,

        /// Noise seed.
        #[arg(short, long)]
        seed: Option<i32>,

        /// Use the Earth-like preset (continents + ridges).
        #[arg(long, conflicts_with_all = ["config", "sphere"])]
        earth_like: bool,

        /// Generate a perfect sphere with no noise layers.
        #[arg(
            long,
            conflicts_with_all = [
                "config",
                "octaves",
                "roughness",
                "strength",
                "lacunarity",
                "persistence",
                "sea_level"
            ]
        )]
        sphere: bool,

        /// Number of noise octaves. Setting any layer option replaces the
        /// configured layers with a single layer.
        #[arg(long)]
        octaves: Option<u32>,

        /// Base sampling frequency (roughness).
        #[arg(long)]
        roughness: Option<f32>,

        /// Strength of the first octave.
        #[arg(long)]
        strength: Option<f32>,

        /// Frequency multiplier per octave (lacunarity).
        #[arg(long)]
        lacunarity: Option<f32>,

        /// Strength decay per octave (persistence).
        #[arg(long)]
        persistence: Option<f32>,

        /// Elevation floor subtracted after summing octaves.
        #[arg(long)]
        sea_level: Option<f32>,
    },

    /// Display buffer sizes for a resolution.
    Info {
        /// Grid cells along each face edge.
        #[arg(short, long, default_value = "64")]
        resolution: u32,
    },

    /// Print a configuration as JSON, suitable for `generate --config`.
    Config {
        /// Print the Earth-like preset instead of the default.
        #[arg(long)]
        earth_like: bool,

        /// Seed for the Earth-like preset.
        #[arg(short, long, default_value = "42")]
        seed: i32,
    },
}

/// Layer parameters given on the command line.
struct LayerArgs {
    octaves: Option<u32>,
    roughness: Option<f32>,
    strength: Option<f32>,
    lacunarity: Option<f32>,
    persistence: Option<f32>,
    sea_level: Option<f32>,
}

impl LayerArgs {
    fn any(&self) -> bool {
        self.octaves.is_some()
            || self.roughness.is_some()
            || self.strength.is_some()
            || self.lacunarity.is_some()
            || self.persistence.is_some()
            || self.sea_level.is_some()
    }

    fn to_layer(&self) -> NoiseLayer {
        let base = NoiseLayer::default();
        NoiseLayer {
            enabled: true,
            octave_count: self.octaves.unwrap_or(base.octave_count),
            roughness: self.roughness.unwrap_or(base.roughness),
            strength: self.strength.unwrap_or(base.strength),
            lacunarity: self.lacunarity.unwrap_or(base.lacunarity),
            persistence: self.persistence.unwrap_or(base.persistence),
            sea_level: self.sea_level.unwrap_or(base.sea_level),
            offset: base.offset,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            resolution,
            seed,
            earth_like,
            sphere,
            octaves,
            roughness,
            strength,
            lacunarity,
            persistence,
            sea_level,
        } => {
            let layer_args = LayerArgs {
                octaves,
                roughness,
                strength,
                lacunarity,
                persistence,
                sea_level,
            };
            run_generate(config, resolution, seed, earth_like, sphere, layer_args);
        }
        Commands::Info { resolution } => {
            run_info(resolution);
        }
        Commands::Config { earth_like, seed } => {
            run_config(earth_like, seed);
        }
    }
}

fn run_generate(
    config_path: Option<PathBuf>,
    resolution: Option<u32>,
    seed: Option<i32>,
    earth_like: bool,
    sphere: bool,
    layer_args: LayerArgs,
) {
    let mut config = match &config_path {
        Some(path) => PlanetConfig::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading config {}: {}", path.display(), e);
            std::process::exit(1);
        }),
        None if earth_like => PlanetConfig::earth_like(seed.unwrap_or(42)),
        None => PlanetConfig::default(),
    };

    if let Some(resolution) = resolution {
        config.resolution = resolution;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if sphere {
        config.layers = NoiseStack::new();
    }
    if layer_args.any() {
        config.layers = vec![layer_args.to_layer()].into();
    }

    println!("Planetgen - Procedural Planet Mesh Generator");
    println!("============================================");
    println!("Resolution: {}x{} cells per face", config.resolution, config.resolution);
    println!("Seed: {}", config.seed);
    println!(
        "Layers: {} ({} enabled)",
        config.layers.len(),
        config.layers.enabled_count()
    );

    let start = Instant::now();
    let generator = PlanetGenerator::from_config(config);
    let mut slots = MeshSlots::new();

    generator.regenerate(&mut slots).unwrap_or_else(|e| {
        eprintln!("Error during generation: {}", e);
        std::process::exit(1);
    });

    let gen_time = start.elapsed();
    println!("Generation completed in {:.2?}", gen_time);

    println!("\nFaces:");
    let mut min_elevation = f32::MAX;
    let mut max_elevation = f32::MIN;
    let mut total_vertices = 0;
    let mut total_triangles = 0;

    for hosted in slots.iter() {
        let mesh = &hosted.mesh;
        let (lo, hi) = mesh.elevation_range();
        let (bmin, bmax) = hosted.bounds;
        min_elevation = min_elevation.min(lo);
        max_elevation = max_elevation.max(hi);
        total_vertices += mesh.vertex_count();
        total_triangles += mesh.triangle_count();

        println!(
            "  [{}] {}: {} vertices, {} triangles, elevation [{:.4}, {:.4}], bounds [{:.3}, {:.3}, {:.3}]..[{:.3}, {:.3}, {:.3}]",
            mesh.face.index(),
            mesh.face,
            mesh.vertex_count(),
            mesh.triangle_count(),
            lo,
            hi,
            bmin.x,
            bmin.y,
            bmin.z,
            bmax.x,
            bmax.y,
            bmax.z
        );
    }

    println!("\nTotal: {} vertices, {} triangles", total_vertices, total_triangles);
    println!("Elevation range: [{:.4}, {:.4}]", min_elevation, max_elevation);
}

fn run_info(resolution: u32) {
    if let Err(e) = validate_resolution(resolution) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let vertices = vertex_count(resolution);
    let indices = index_count(resolution);
    let vertex_bytes = vertices * std::mem::size_of::<[f32; 3]>();
    let index_bytes = indices * std::mem::size_of::<u32>();

    println!("Planet Configuration");
    println!("====================");
    println!("Resolution: {}x{} cells per face", resolution, resolution);
    println!("Vertices per face: {}", vertices);
    println!("Indices per face: {} ({} triangles)", indices, indices / 3);
    println!();
    for face in CubeFaceId::all() {
        println!("  slot {} = {} ({:?})", face.index(), face, face.direction().to_array());
    }
    println!();
    println!("Total vertices: {}", vertices * 6);
    println!("Total triangles: {}", indices * 2);
    println!(
        "Buffer size: {:.2} MB vertices + {:.2} MB indices",
        (vertex_bytes * 6) as f64 / (1024.0 * 1024.0),
        (index_bytes * 6) as f64 / (1024.0 * 1024.0)
    );
}

fn run_config(earth_like: bool, seed: i32) {
    let config = if earth_like {
        PlanetConfig::earth_like(seed)
    } else {
        PlanetConfig::default()
    };

    match config.to_json_string() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing config: {}", e);
            std::process::exit(1);
        }
    }
}
