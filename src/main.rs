//! Parkway - footpath tile painter
//!
//! Loads an object manifest, paints a single footpath tile and prints the
//! resulting draw list, support requests, tunnels and lights as JSON.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use parkway::core::error::{ParkError, Result};
use parkway::core::{Direction, PaintConfig, Rotation, TileCoord};
use parkway::map::{EdgeMask, PathElement, SurfaceElement, TILE_ELEMENT_SIZE};
use parkway::objects::{load_manifest, ObjectManifest, ObjectRegistry};
use parkway::paint::{
    paint_footpath, FrameContext, LightSource, PaintCommand, PaintEnv, PaintSession, PaintWorld,
    PlainText, RideSummary, SupportCall, SupportHeight, Tunnel,
};

/// Paint one footpath tile and dump the result
#[derive(Parser, Debug)]
#[command(name = "parkway")]
#[command(about = "Paint a footpath tile and print the draw list as JSON")]
struct Args {
    /// Object manifest (TOML)
    #[arg(long, default_value = "data/objects.toml")]
    manifest: PathBuf,

    /// Paint configuration (TOML); defaults are used when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Camera rotation in quarter turns
    #[arg(long, default_value_t = 0)]
    rotation: u8,

    /// Path base height in 8-unit steps
    #[arg(long, default_value_t = 2)]
    base_height: u8,

    /// Footpath object slot
    #[arg(long, default_value_t = 0)]
    entry: u8,

    /// Edge and corner byte (low nibble edges, high nibble corners)
    #[arg(long, default_value_t = 0x0F)]
    edges: u8,

    /// Slope direction (0 west, 1 north, 2 east, 3 south)
    #[arg(long)]
    slope: Option<u8>,

    /// Paint the path as a queue
    #[arg(long)]
    queue: bool,

    /// Path addition object slot
    #[arg(long)]
    addition: Option<u8>,

    /// Raw 8-byte tile element as 16 hex digits; overrides the path flags above
    #[arg(long)]
    raw: Option<String>,

    /// Surface height in 8-unit steps; no surface when absent
    #[arg(long)]
    surface: Option<u8>,

    /// Surface slope bits
    #[arg(long, default_value_t = 0)]
    surface_slope: u8,

    /// Viewport zoom level
    #[arg(long, default_value_t = 0)]
    zoom: u8,

    /// Frame tick counter
    #[arg(long, default_value_t = 0)]
    ticks: u32,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

/// A map holding one surface tile and no rides
struct SingleTileWorld {
    surface: Option<SurfaceElement>,
}

impl PaintWorld for SingleTileWorld {
    fn surface_at(&self, _tile: TileCoord) -> Option<SurfaceElement> {
        self.surface
    }

    fn ride_at(&self, _index: u8) -> Option<RideSummary> {
        None
    }
}

#[derive(Serialize)]
struct TileReport<'a> {
    element: &'a PathElement,
    commands: &'a [PaintCommand],
    supports: &'a [SupportCall],
    left_tunnels: &'a [Tunnel],
    right_tunnels: &'a [Tunnel],
    lights: &'a [LightSource],
    general_support: SupportHeight,
}

fn parse_raw_element(hex: &str) -> Result<PathElement> {
    let hex = hex.trim_start_matches("0x");
    if hex.len() != TILE_ELEMENT_SIZE * 2 {
        return Err(ParkError::InvalidConfig(format!(
            "raw element must be {} hex digits, got {}",
            TILE_ELEMENT_SIZE * 2,
            hex.len()
        )));
    }
    let mut bytes = [0u8; TILE_ELEMENT_SIZE];
    for (i, byte) in bytes.iter_mut().enumerate() {
        let pair = hex.get(i * 2..i * 2 + 2).unwrap_or_default();
        *byte = u8::from_str_radix(pair, 16)
            .map_err(|e| ParkError::InvalidConfig(format!("raw element: {}", e)))?;
    }
    PathElement::from_bytes(&bytes)
        .ok_or_else(|| ParkError::InvalidConfig("raw element is not a footpath".to_string()))
}

fn build_element(args: &Args) -> Result<PathElement> {
    if let Some(raw) = &args.raw {
        return parse_raw_element(raw);
    }

    let mut element = PathElement::new(args.base_height, args.entry)
        .with_edges(EdgeMask::from_bits(args.edges));
    if let Some(slope) = args.slope {
        element = element.with_slope(Direction::from_index(slope));
    }
    if let Some(slot) = args.addition {
        element = element.with_addition(slot);
    }
    if args.queue {
        element = element.as_queue(None);
    }
    Ok(element)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("parkway=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PaintConfig::load(path)?,
        None => PaintConfig::default(),
    };

    let manifest = ObjectManifest::load(&args.manifest)?;
    let mut registry = ObjectRegistry::new();
    load_manifest(&mut registry, &manifest)?;

    let element = build_element(&args)?;
    let world = SingleTileWorld {
        surface: args
            .surface
            .map(|height| SurfaceElement::new(height, args.surface_slope)),
    };
    let text = PlainText::default();
    let env = PaintEnv::new(&registry, &world, &text, &config);

    let frame = FrameContext {
        zoom_level: args.zoom,
        ticks: args.ticks,
        ..FrameContext::default()
    };
    let mut session = PaintSession::new(frame);
    session.begin_tile(TileCoord::default());
    session.did_pass_surface = world.surface.is_some();

    let height = u16::from(element.base_height) * 8;
    paint_footpath(&mut session, &env, Rotation::new(args.rotation), height, &element);

    tracing::info!(
        "Painted {} sprites and {} supports",
        session.commands().len(),
        session.support_calls().len()
    );

    let report = TileReport {
        element: &element,
        commands: session.commands(),
        supports: session.support_calls(),
        left_tunnels: session.left_tunnels(),
        right_tunnels: session.right_tunnels(),
        lights: session.lights(),
        general_support: session.general_support(),
    };
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(())
}
