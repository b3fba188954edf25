use crate::error::Error;
use std::{fmt, str::FromStr};

/// Geographic rectangle in degrees. Ordering of the bounds is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BBox {
    pub const fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }
}

impl FromStr for BBox {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<_> = s
            .split(',')
            .map(|a| a.trim().parse::<f64>().ok())
            .collect();

        match parts[..] {
            [Some(min_lat), Some(min_lon), Some(max_lat), Some(max_lon)] => {
                Ok(Self::new(min_lat, min_lon, max_lat, max_lon))
            }
            _ => Err(Error::InvalidBBox(s.to_owned())),
        }
    }
}

impl fmt::Display for BBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_lat, self.min_lon, self.max_lat, self.max_lon
        )
    }
}
