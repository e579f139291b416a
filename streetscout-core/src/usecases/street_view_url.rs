use std::fmt::Write as _;

use super::prelude::*;

pub const DEFAULT_STREET_VIEW_API_URL: &str = "https://maps.googleapis.com/maps/api/streetview";

/// Endpoint and credential of the static street-level image service.
#[derive(Debug, Clone)]
pub struct StreetViewApi {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for StreetViewApi {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STREET_VIEW_API_URL.to_string(),
            api_key: None,
        }
    }
}

/// Builds the URL of a static street-level image.
///
/// Returns `None` if any of the parameters is out of range.
/// The values are concatenated as they are: all of them are
/// numeric and never need to be escaped.
pub fn street_view_url(api: &StreetViewApi, params: &ImageryParams) -> Option<String> {
    if let Err(err) = params.validate() {
        log::warn!("Cannot create street view URL for {params:?}: {err}");
        return None;
    }
    let ImageryParams {
        lat,
        lng,
        width,
        height,
        heading,
        pitch,
        fov,
    } = params;
    let mut url = format!(
        "{}?size={width}x{height}&location={lat},{lng}&heading={heading}&pitch={pitch}&fov={fov}",
        api.base_url
    );
    if let Some(key) = &api.api_key {
        // Writing into a String never fails
        let _ = write!(url, "&key={key}");
    }
    Some(url)
}

/// Attaches a street view URL framed by `frame` to each property.
pub fn attach_street_view_urls(
    api: &StreetViewApi,
    frame: &ImageryFrame,
    properties: &mut [ResolvedProperty],
) {
    for p in properties {
        p.street_view_url = street_view_url(api, &frame.at(p.pos));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> StreetViewApi {
        StreetViewApi {
            base_url: "https://example.com/streetview".into(),
            api_key: Some("secret".into()),
        }
    }

    #[test]
    fn url_with_default_frame() {
        let url = street_view_url(&api(), &ImageryParams::new(37.4224, -122.0841)).unwrap();
        assert_eq!(
            "https://example.com/streetview?size=600x400&location=37.4224,-122.0841&heading=0&pitch=0&fov=90&key=secret",
            url
        );
    }

    #[test]
    fn url_is_deterministic() {
        let params = ImageryParams::new(48.137, 11.575)
            .with_size(800, 400)
            .with_camera(45.0, 10.0, 60.0);
        assert_eq!(
            street_view_url(&api(), &params),
            street_view_url(&api(), &params)
        );
    }

    #[test]
    fn omit_missing_key() {
        let api = StreetViewApi::default();
        let url = street_view_url(&api, &ImageryParams::new(1.5, 2.5)).unwrap();
        assert!(url.starts_with(DEFAULT_STREET_VIEW_API_URL));
        assert!(url.ends_with("&fov=90"));
        assert!(!url.contains("key="));
    }

    #[test]
    fn boundaries() {
        let api = api();
        for (lat, lng) in [(90.0, 0.0), (-90.0, 0.0), (0.0, 180.0), (0.0, -180.0)] {
            assert!(street_view_url(&api, &ImageryParams::new(lat, lng)).is_some());
        }
        assert!(street_view_url(&api, &ImageryParams::new(90.0001, 0.0)).is_none());

        let params = ImageryParams::new(0.0, 0.0);
        assert!(street_view_url(&api, &params.with_camera(0.0, 0.0, 0.0)).is_some());
        assert!(street_view_url(&api, &params.with_camera(0.0, 0.0, 120.0)).is_some());
        assert!(street_view_url(&api, &params.with_camera(0.0, 0.0, 121.0)).is_none());
        assert!(street_view_url(&api, &params.with_size(2049, 400)).is_none());
    }

    #[test]
    fn attach_urls() {
        let pos = MapPoint::try_from_lat_lng_deg(37.4224, -122.0841).unwrap();
        let mut properties = vec![ResolvedProperty::new("Main Street 1".into(), pos)];
        let frame = ImageryFrame {
            width: 800,
            ..Default::default()
        };
        attach_street_view_urls(&api(), &frame, &mut properties);
        let url = properties[0].street_view_url.as_deref().unwrap();
        assert!(url.contains("size=800x400"));
        assert!(url.contains("location=37.4224,-122.0841"));
    }

    #[test]
    fn invalid_frame_leaves_url_empty() {
        let pos = MapPoint::try_from_lat_lng_deg(1.0, 1.0).unwrap();
        let mut properties = vec![ResolvedProperty::new("x".into(), pos)];
        let frame = ImageryFrame {
            fov: 150.0,
            ..Default::default()
        };
        attach_street_view_urls(&api(), &frame, &mut properties);
        assert!(properties[0].street_view_url.is_none());
        assert_eq!(1.0, properties[0].lat());
    }
}
