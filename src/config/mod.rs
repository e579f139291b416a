use anyhow::{anyhow, Context, Result};
use std::{
    env, fs,
    io::ErrorKind,
    net::IpAddr,
    path::Path,
    time::Duration,
};
use streetscout_entities::imagery::{ImageryFrame, ImageryParams};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "streetscout.toml";

const ENV_NAME_GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
const ENV_NAME_PORT: &str = "PORT";

const MIB: u64 = 1024 * 1024;

pub struct Config {
    pub webserver: WebServer,
    pub geocoding: Geocoding,
    pub street_view: StreetView,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.apply_env_overrides(|name| env::var(name).ok())?;
        Ok(cfg)
    }

    fn apply_env_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = var(ENV_NAME_GOOGLE_API_KEY).and_then(non_empty) {
            let GeocodingGateway::Google { api_key: key, .. } = &mut self.geocoding.gateway;
            *key = Some(api_key);
        }
        if let Some(port) = var(ENV_NAME_PORT) {
            self.webserver.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid {ENV_NAME_PORT} '{port}'"))?;
        }
        Ok(())
    }

    /// The key is shared by geocoding and street view requests.
    pub fn google_api_key(&self) -> Option<&str> {
        match &self.geocoding.gateway {
            GeocodingGateway::Google { api_key, .. } => api_key.as_deref(),
        }
    }
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    /// Maximum size of an uploaded file in bytes.
    pub upload_limit: u64,
    pub enable_cors: bool,
}

pub struct Geocoding {
    pub gateway: GeocodingGateway,
    pub min_request_interval: Duration,
    pub request_timeout: Duration,
}

pub enum GeocodingGateway {
    Google {
        api_url: String,
        api_key: Option<String>,
    },
}

pub struct StreetView {
    pub api_url: String,
    pub frame: ImageryFrame,
}

fn non_empty(s: String) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            webserver,
            geocoding,
            street_view,
            gateway,
        } = from;

        let raw::WebServer {
            address,
            port,
            upload_limit,
            cors,
        } = webserver.unwrap_or_default();
        if upload_limit == 0 {
            return Err(anyhow!("The upload limit must not be zero"));
        }
        let webserver = WebServer {
            address,
            port,
            upload_limit: upload_limit
                .checked_mul(MIB)
                .ok_or_else(|| anyhow!("Upload limit of {upload_limit} MiB is too large"))?,
            enable_cors: cors,
        };

        let raw::Geocoding {
            gateway: gw_name,
            api_url,
            min_request_interval,
            request_timeout,
        } = geocoding.unwrap_or_default();
        let gw_name = gw_name.ok_or_else(|| anyhow!("No geocoding gateway configured"))?;
        let gateway = match gw_name {
            raw::GeocodingGateway::Google => {
                let raw::Google { api_key } = gateway
                    .unwrap_or_default()
                    .google
                    .unwrap_or_default();
                log::info!("Use Google geocoding gateway");
                GeocodingGateway::Google {
                    api_url,
                    api_key: api_key.and_then(non_empty),
                }
            }
        };
        if request_timeout.is_zero() {
            return Err(anyhow!("The geocoding request timeout must not be zero"));
        }
        let geocoding = Geocoding {
            gateway,
            min_request_interval,
            request_timeout,
        };

        let raw::StreetView {
            api_url,
            width,
            height,
            heading,
            pitch,
            fov,
        } = street_view.unwrap_or_default();
        ImageryParams::new(0.0, 0.0)
            .with_size(width, height)
            .with_camera(heading, pitch, fov)
            .validate()
            .map_err(|err| anyhow!("Invalid street view configuration: {err}"))?;
        let frame = ImageryFrame {
            width,
            height,
            heading,
            pitch,
            fov,
        };
        let street_view = StreetView { api_url, frame };

        Ok(Self {
            webserver,
            geocoding,
            street_view,
        })
    }
}
