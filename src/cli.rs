use std::{fs::File, io, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::{Parser, Subcommand};
use rand::RngCore;
use streetscout_application::prelude as flows;
use streetscout_core::gateways::geocode::GeoCodingGateway;
use streetscout_gateways::google::GoogleGeocoding;
use streetscout_webserver::{Cfg, ServerCfg};

use crate::{config::Config, gateways};

const SECRET_KEY_LEN: usize = 32;

#[derive(Parser, Debug)]
#[command(author, version, about = "Geocode address lists and show street-level images", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, short, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Geocode the addresses of a CSV file and print the result as JSON
    Geocode {
        /// CSV file with an `address` column
        #[arg(value_name = "CSV_FILE")]
        file: PathBuf,
    },
    /// Print a random secret key for signing cookies
    GenerateSecret,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(load_config(cli.config)?),
        Command::Geocode { file } => geocode_file(load_config(cli.config)?, file),
        Command::GenerateSecret => {
            println!("ROCKET_SECRET_KEY={}", generate_secret());
            Ok(())
        }
    }
}

fn load_config(file: Option<PathBuf>) -> Result<Config> {
    Config::try_load_from_file_or_default(file)
}

fn settings(cfg: &Config) -> flows::GeocodingSettings {
    flows::GeocodingSettings {
        street_view: gateways::street_view_api(cfg),
        frame: cfg.street_view.frame,
    }
}

fn serve(cfg: Config) -> Result<()> {
    let geocoding = Arc::new(gateways::geocoding_gateway(&cfg)?);
    let throttle = Arc::new(gateways::request_throttle(&cfg));

    let web_cfg = Cfg {
        geocoding: settings(&cfg),
        upload_limit: cfg.webserver.upload_limit,
    };
    let server_cfg = ServerCfg {
        address: cfg.webserver.address,
        port: cfg.webserver.port,
        enable_cors: cfg.webserver.enable_cors,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    // The blocking HTTP client must be dropped outside of the runtime.
    runtime.block_on(streetscout_webserver::run(
        web_cfg,
        server_cfg,
        shared_geocoding(&geocoding),
        throttle,
    ));
    drop(runtime);
    drop(geocoding);
    Ok(())
}

fn shared_geocoding(gw: &Arc<GoogleGeocoding>) -> Arc<dyn GeoCodingGateway + Send + Sync> {
    gw.clone()
}

fn geocode_file(cfg: Config, path: PathBuf) -> Result<()> {
    let geocoding = gateways::geocoding_gateway(&cfg)?;
    let throttle = gateways::request_throttle(&cfg);
    let file = File::open(&path).with_context(|| format!("Unable to open {}", path.display()))?;
    let resolution = flows::geocode_csv(&geocoding, &throttle, &settings(&cfg), file)?;
    let result = streetscout_boundary::GeocodingResult {
        count: resolution.properties.len(),
        skipped: resolution.skipped,
        failed: resolution.failed,
        properties: resolution.properties.into_iter().map(Into::into).collect(),
    };
    serde_json::to_writer_pretty(io::stdout().lock(), &result)?;
    println!();
    Ok(())
}

fn generate_secret() -> String {
    let mut key = [0u8; SECRET_KEY_LEN];
    rand::thread_rng().fill_bytes(&mut key);
    STANDARD.encode(key)
}
