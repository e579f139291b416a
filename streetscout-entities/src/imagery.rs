use thiserror::Error;

use crate::geo::{LatCoord, LngCoord, MapPoint};

pub const MIN_IMAGE_SIZE: u32 = 1;
pub const MAX_IMAGE_SIZE: u32 = 2048;

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 400;
pub const DEFAULT_HEADING: f64 = 0.0;
pub const DEFAULT_PITCH: f64 = 0.0;
pub const DEFAULT_FOV: f64 = 90.0;

/// Viewpoint and frame of a static street-level image.
///
/// All angles are given in degrees. The parameters are not
/// checked on construction, call [`ImageryParams::validate`]
/// before using them.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageryParams {
    pub lat     : f64,
    pub lng     : f64,
    pub width   : u32,
    pub height  : u32,
    pub heading : f64,
    pub pitch   : f64,
    pub fov     : f64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ImageryParamsInvalidation {
    #[error("Invalid coordinates")]
    Coordinates,
    #[error("Invalid image dimensions")]
    Dimensions,
    #[error("Invalid heading")]
    Heading,
    #[error("Invalid pitch")]
    Pitch,
    #[error("Invalid field of view")]
    FieldOfView,
}

impl ImageryParams {
    /// Default framing for the given position.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            heading: DEFAULT_HEADING,
            pitch: DEFAULT_PITCH,
            fov: DEFAULT_FOV,
        }
    }

    pub fn with_size(self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }

    pub fn with_camera(self, heading: f64, pitch: f64, fov: f64) -> Self {
        Self {
            heading,
            pitch,
            fov,
            ..self
        }
    }

    /// Checks the parameters in a fixed order and reports
    /// the first one that is out of range.
    pub fn validate(&self) -> Result<(), ImageryParamsInvalidation> {
        if !LatCoord::is_valid_deg(self.lat) || !LngCoord::is_valid_deg(self.lng) {
            return Err(ImageryParamsInvalidation::Coordinates);
        }
        let sizes = MIN_IMAGE_SIZE..=MAX_IMAGE_SIZE;
        if !sizes.contains(&self.width) || !sizes.contains(&self.height) {
            return Err(ImageryParamsInvalidation::Dimensions);
        }
        if !(0.0..=360.0).contains(&self.heading) {
            return Err(ImageryParamsInvalidation::Heading);
        }
        if !(-90.0..=90.0).contains(&self.pitch) {
            return Err(ImageryParamsInvalidation::Pitch);
        }
        if !(0.0..=120.0).contains(&self.fov) {
            return Err(ImageryParamsInvalidation::FieldOfView);
        }
        Ok(())
    }
}

/// Framing of street-level images that is shared by
/// all positions of a batch.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageryFrame {
    pub width   : u32,
    pub height  : u32,
    pub heading : f64,
    pub pitch   : f64,
    pub fov     : f64,
}

impl Default for ImageryFrame {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            heading: DEFAULT_HEADING,
            pitch: DEFAULT_PITCH,
            fov: DEFAULT_FOV,
        }
    }
}

impl ImageryFrame {
    pub fn at(&self, pos: MapPoint) -> ImageryParams {
        let (lat, lng) = pos.to_lat_lng_deg();
        let Self {
            width,
            height,
            heading,
            pitch,
            fov,
        } = *self;
        ImageryParams {
            lat,
            lng,
            width,
            height,
            heading,
            pitch,
            fov,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = ImageryParams::new(0.0, 0.0);
        assert_eq!(600, params.width);
        assert_eq!(400, params.height);
        assert_eq!(90.0, params.fov);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn coordinate_boundaries() {
        for (lat, lng) in [(90.0, 0.0), (-90.0, 0.0), (0.0, 180.0), (0.0, -180.0)] {
            assert!(ImageryParams::new(lat, lng).validate().is_ok());
        }
        assert_eq!(
            Err(ImageryParamsInvalidation::Coordinates),
            ImageryParams::new(90.0001, 0.0).validate()
        );
        assert_eq!(
            Err(ImageryParamsInvalidation::Coordinates),
            ImageryParams::new(0.0, -180.5).validate()
        );
    }

    #[test]
    fn size_boundaries() {
        let params = ImageryParams::new(0.0, 0.0);
        assert!(params.with_size(1, 2048).validate().is_ok());
        assert_eq!(
            Err(ImageryParamsInvalidation::Dimensions),
            params.with_size(0, 400).validate()
        );
        assert_eq!(
            Err(ImageryParamsInvalidation::Dimensions),
            params.with_size(600, 2049).validate()
        );
    }

    #[test]
    fn camera_boundaries() {
        let params = ImageryParams::new(0.0, 0.0);
        assert!(params.with_camera(360.0, -90.0, 0.0).validate().is_ok());
        assert!(params.with_camera(0.0, 90.0, 120.0).validate().is_ok());
        assert_eq!(
            Err(ImageryParamsInvalidation::Heading),
            params.with_camera(361.0, 0.0, 90.0).validate()
        );
        assert_eq!(
            Err(ImageryParamsInvalidation::Pitch),
            params.with_camera(0.0, -91.0, 90.0).validate()
        );
        assert_eq!(
            Err(ImageryParamsInvalidation::FieldOfView),
            params.with_camera(0.0, 0.0, 121.0).validate()
        );
    }

    #[test]
    fn frame_at_position() {
        let pos = MapPoint::try_from_lat_lng_deg(52.5, 13.4).unwrap();
        let frame = ImageryFrame {
            width: 800,
            ..Default::default()
        };
        let params = frame.at(pos);
        assert_eq!(ImageryParams::new(52.5, 13.4).with_size(800, 400), params);
    }

    #[test]
    fn coordinates_are_checked_first() {
        let params = ImageryParams::new(100.0, 0.0)
            .with_size(0, 0)
            .with_camera(-1.0, 0.0, 90.0);
        assert_eq!(
            Err(ImageryParamsInvalidation::Coordinates),
            params.validate()
        );
    }
}
