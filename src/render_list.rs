use crate::{
    bbox::BBox,
    error::Error,
    xyz::{flip_y, try_deg2num},
};
use itertools::Itertools;
use log::debug;

/// Rendering threads requested from `render_list`, roughly one per CPU core.
pub const NUM_THREADS: u32 = 1;

/// Map style `render_list` falls back to when no `-m` is given.
pub const MAP_DEFAULT_NAME: &str = "region";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub num_threads: u32,
    /// Appended as `-m <map_name>` when set.
    pub map_name: Option<String>,
    pub tms_scheme: bool,
    /// Swap bounds so that min <= max on both axes.
    pub normalize_bounds: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            num_threads: NUM_THREADS,
            map_name: None,
            tms_scheme: false,
            normalize_bounds: false,
        }
    }
}

/// Tile rectangle of a single zoom level, as passed to `render_list`.
///
/// `min_y` is derived from `min_lat`, so without normalization it is usually the larger row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRange {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
    pub zoom: u8,
}

impl TileRange {
    pub fn from_bbox(bbox: &BBox, zoom: u8, options: &RenderOptions) -> Result<Self, Error> {
        let min = try_deg2num(bbox.min_lat, bbox.min_lon, zoom)?;
        let max = try_deg2num(bbox.max_lat, bbox.max_lon, zoom)?;

        let (min_y, max_y) = if options.tms_scheme {
            (flip_y(min.y, zoom), flip_y(max.y, zoom))
        } else {
            (min.y, max.y)
        };

        let range = Self {
            min_x: min.x,
            min_y,
            max_x: max.x,
            max_y,
            zoom,
        };

        Ok(if options.normalize_bounds {
            range.normalized()
        } else {
            range
        })
    }

    pub fn normalized(self) -> Self {
        Self {
            min_x: self.min_x.min(self.max_x),
            min_y: self.min_y.min(self.max_y),
            max_x: self.min_x.max(self.max_x),
            max_y: self.min_y.max(self.max_y),
            zoom: self.zoom,
        }
    }

    /// Number of tiles covered, regardless of bound ordering. Saturates at `u64::MAX`.
    pub fn tile_count(&self) -> u64 {
        let Self {
            min_x,
            min_y,
            max_x,
            max_y,
            ..
        } = self.normalized();

        let columns = max_x.abs_diff(min_x).saturating_add(1);
        let rows = max_y.abs_diff(min_y).saturating_add(1);

        columns.saturating_mul(rows)
    }

    pub fn to_command(&self, options: &RenderOptions) -> String {
        let mut args = vec![
            "render_list".to_owned(),
            "-a".to_owned(),
            format!("-x {}", self.min_x),
            format!("-y {}", self.min_y),
            format!("-X {}", self.max_x),
            format!("-Y {}", self.max_y),
            format!("-z {}", self.zoom),
            format!("-Z {}", self.zoom),
            format!("-n {}", options.num_threads),
        ];

        if let Some(map_name) = &options.map_name {
            args.push(format!("-m {map_name}"));
        }

        args.iter().join(" ")
    }
}

pub fn render_tiles_per_zoom(
    bbox: &BBox,
    zoom: u8,
    options: &RenderOptions,
) -> Result<String, Error> {
    let range = TileRange::from_bbox(bbox, zoom, options)?;

    debug!(
        "zoom {zoom}: x {}..{}, y {}..{} ({} tiles)",
        range.min_x,
        range.max_x,
        range.min_y,
        range.max_y,
        range.tile_count()
    );

    Ok(range.to_command(options))
}

/// One `render_list` command per zoom in `min_zoom..=max_zoom`, ascending.
pub fn render_tiles(
    bbox: &BBox,
    min_zoom: u8,
    max_zoom: u8,
    options: &RenderOptions,
) -> Result<Vec<String>, Error> {
    (min_zoom..=max_zoom)
        .map(|zoom| render_tiles_per_zoom(bbox, zoom, options))
        .collect()
}
