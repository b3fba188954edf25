use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid bounding box {0:?}, expected min_lat,min_lon,max_lat,max_lon")]
    InvalidBBox(String),
    #[error("no mercator projection for lat {lat}, lon {lon} at zoom {zoom}")]
    Projection { lat: f64, lon: f64, zoom: u8 },
}
