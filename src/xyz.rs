use crate::error::Error;
use std::f64::consts::PI;

/// Slippy-map tile column and row, meaningful only for the zoom it was computed at.
/// Signed, as longitudes outside [-180, 180] map outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileIndex {
    pub x: i64,
    pub y: i64,
}

/// Tiles per axis at `zoom`.
pub fn tiles_per_axis(zoom: u8) -> f64 {
    2f64.powi(i32::from(zoom))
}

/// Projects a WGS 84 position onto the Web Mercator tile grid, truncating toward zero.
pub fn deg2num(lat_deg: f64, lon_deg: f64, zoom: u8) -> TileIndex {
    let lat_rad = lat_deg.to_radians();
    let n = tiles_per_axis(zoom);

    let x = (lon_deg + 180.0) / 360.0 * n;
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n;

    TileIndex {
        x: x as i64,
        y: y as i64,
    }
}

/// Like [`deg2num`] but fails where the projection is undefined (|lat| >= 90, NaN or infinite input).
pub fn try_deg2num(lat_deg: f64, lon_deg: f64, zoom: u8) -> Result<TileIndex, Error> {
    if lat_deg.abs() < 90.0 && lon_deg.is_finite() {
        Ok(deg2num(lat_deg, lon_deg, zoom))
    } else {
        Err(Error::Projection {
            lat: lat_deg,
            lon: lon_deg,
            zoom,
        })
    }
}

/// Converts between XYZ and TMS row numbering (the mapping is its own inverse).
pub fn flip_y(y: i64, zoom: u8) -> i64 {
    (tiles_per_axis(zoom) as i64).saturating_sub(1).saturating_sub(y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0, 1, 1, 1)]
    #[case(85.0511, -180.0, 1, 0, 0)]
    #[case(50.7929, 6.0402, 18, 135470, 87999)]
    #[case(44.895, -74.872, 8, 74, 92)]
    #[case(47.22, -70.356, 8, 77, 89)]
    fn known_tiles(
        #[case] lat: f64,
        #[case] lon: f64,
        #[case] zoom: u8,
        #[case] x: i64,
        #[case] y: i64,
    ) {
        assert_eq!(deg2num(lat, lon, zoom), TileIndex { x, y });
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(-85.0, 179.9)]
    #[case(85.0, -180.0)]
    #[case(12.3, -45.6)]
    fn zoom_zero_is_single_tile(#[case] lat: f64, #[case] lon: f64) {
        assert_eq!(deg2num(lat, lon, 0), TileIndex { x: 0, y: 0 });
    }

    #[test]
    fn east_edge_is_past_the_grid() {
        assert_eq!(deg2num(0.0, 180.0, 0), TileIndex { x: 1, y: 0 });
    }

    #[test]
    fn indices_stay_on_grid() {
        for zoom in 0..=18 {
            let n = tiles_per_axis(zoom) as i64;

            for lat in (-85..=85).step_by(5) {
                // lon = 180 is the east edge and lands on column n
                for lon in (-180..180).step_by(15) {
                    let TileIndex { x, y } = deg2num(f64::from(lat), f64::from(lon), zoom);

                    assert!((0..n).contains(&x), "x={x} zoom={zoom}");
                    assert!((0..n).contains(&y), "y={y} zoom={zoom}");
                }
            }
        }
    }

    #[test]
    fn x_is_monotonic_in_longitude() {
        let mut last = i64::MIN;

        for step in 0..=720 {
            let lon = -180.0 + f64::from(step) * 0.5;
            let TileIndex { x, .. } = deg2num(45.0, lon, 10);

            assert!(x >= last);

            last = x;
        }
    }

    #[test]
    fn pure() {
        assert_eq!(deg2num(46.1, -72.5, 12), deg2num(46.1, -72.5, 12));
    }

    #[test]
    fn longitude_out_of_range_is_not_clamped() {
        assert_eq!(deg2num(0.0, 190.0, 2), TileIndex { x: 4, y: 2 });
        // truncation toward zero, not floor
        assert_eq!(deg2num(0.0, -190.0, 2), TileIndex { x: 0, y: 2 });
        assert_eq!(deg2num(0.0, -370.0, 2), TileIndex { x: -2, y: 2 });
    }

    #[rstest]
    #[case(90.0)]
    #[case(-90.0)]
    #[case(100.0)]
    #[case(f64::NAN)]
    fn try_deg2num_rejects_poles(#[case] lat: f64) {
        assert!(matches!(
            try_deg2num(lat, 0.0, 3),
            Err(Error::Projection { zoom: 3, .. })
        ));
    }

    #[test]
    fn try_deg2num_rejects_infinite_longitude() {
        assert!(try_deg2num(0.0, f64::INFINITY, 3).is_err());
    }

    #[test]
    fn try_deg2num_matches_deg2num() {
        assert_eq!(try_deg2num(47.22, -70.356, 8), Ok(deg2num(47.22, -70.356, 8)));
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(92, 8, 163)]
    #[case(0, 3, 7)]
    fn tms_rows(#[case] y: i64, #[case] zoom: u8, #[case] expected: i64) {
        assert_eq!(flip_y(y, zoom), expected);
        assert_eq!(flip_y(expected, zoom), y);
    }
}
