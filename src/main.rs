mod bbox;
mod error;
mod render_list;
mod xyz;

use anyhow::Result;
use bbox::BBox;
use clap::Parser;
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use log::info;
use render_list::{render_tiles, RenderOptions, MAP_DEFAULT_NAME, NUM_THREADS};

const DEFAULT_BBOX: BBox = BBox::new(44.895, -74.872, 47.220, -70.356);

const DEFAULT_MIN_ZOOM: u8 = 0;

const DEFAULT_MAX_ZOOM: u8 = 8;

/// Prints the render_list commands that pre-render a region into the mod_tile cache
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Region as min_lat,min_lon,max_lat,max_lon in degrees
    #[arg(short, long, allow_hyphen_values = true)]
    bbox: Option<BBox>,

    /// Lowest zoom level
    #[arg(short = 'z', long, default_value_t = DEFAULT_MIN_ZOOM)]
    min_zoom: u8,

    /// Highest zoom level, inclusive
    #[arg(short = 'Z', long, default_value_t = DEFAULT_MAX_ZOOM)]
    max_zoom: u8,

    /// Rendering threads passed on to render_list
    #[arg(short = 'n', long, default_value_t = NUM_THREADS)]
    threads: u32,

    /// Map style passed as `-m`. Omitted by default, so render_list uses its own
    #[arg(short, long)]
    map: Option<String>,

    /// Number tile rows bottom-up (TMS)
    #[arg(long)]
    tms: bool,

    /// Emit sorted bounds (min <= max) instead of bounds in latitude order
    #[arg(long)]
    normalize_bounds: bool,

    #[command(flatten)]
    verbose: Verbosity<ErrorLevel>,
}

impl Args {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            num_threads: self.threads,
            map_name: self.map.clone(),
            tms_scheme: self.tms,
            normalize_bounds: self.normalize_bounds,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    for command in run(&args)? {
        println!("{command}");
    }

    Ok(())
}

fn run(args: &Args) -> Result<Vec<String>> {
    let bbox = args.bbox.unwrap_or(DEFAULT_BBOX);

    let map = args.map.as_deref().unwrap_or(MAP_DEFAULT_NAME);

    info!("region {bbox}, map {map}, zoom {}..={}", args.min_zoom, args.max_zoom);

    Ok(render_tiles(&bbox, args.min_zoom, args.max_zoom, &args.render_options())?)
}
