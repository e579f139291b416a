use maud::Markup;
use rocket::{
    self,
    form::Form,
    fs::TempFile,
    get,
    post,
    request::FlashMessage,
    response::{content::RawCss, Flash, Redirect},
    routes,
    tokio::io::AsyncReadExt,
    uri, FromForm, Route, State,
};

use super::{api::geocoding_result, geocode_upload, guards::*, Cfg};

mod view;

#[cfg(test)]
mod tests;

const MAIN_CSS: &str = include_str!("main.css");

const CSV_EXTENSION: &str = ".csv";

#[derive(FromForm)]
pub struct Upload<'r> {
    file: Option<TempFile<'r>>,
}

#[get("/")]
pub fn get_index(cfg: &State<Cfg>, flash: Option<FlashMessage>) -> Markup {
    view::index(flash, cfg.api_key_configured())
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[post("/", data = "<upload>")]
pub async fn post_index(
    cfg: &State<Cfg>,
    geocoding: &State<GeoCoding>,
    throttle: &State<Throttle>,
    upload: Form<Upload<'_>>,
) -> std::result::Result<Markup, Flash<Redirect>> {
    let Some(file) = upload.into_inner().file else {
        return Err(redirect_with_error("No file selected"));
    };
    let Some(file_name) = raw_file_name(&file).filter(|name| !name.is_empty()) else {
        return Err(redirect_with_error("No file selected"));
    };
    if !is_csv_file_name(file_name) {
        debug!("Rejected upload of '{file_name}'");
        return Err(redirect_with_error(
            "Invalid file type. Please upload a CSV file",
        ));
    }
    info!("Processing uploaded file '{file_name}'");

    let data = match read_file(&file).await {
        Ok(data) => data,
        Err(err) => {
            warn!("Unable to read uploaded file: {err}");
            return Err(redirect_with_error("Unable to read the uploaded file"));
        }
    };

    let key_configured = cfg.api_key_configured();
    let notice = match geocode_upload(cfg, geocoding, throttle, data).await {
        Ok(resolution) => {
            let result = geocoding_result(resolution);
            let notice = if result.properties.is_empty() {
                view::Notice::warning("No valid addresses found in the file")
            } else {
                view::Notice::success(format!(
                    "Successfully processed {} addresses",
                    result.count
                ))
            };
            return Ok(view::results(notice, key_configured, &result.properties));
        }
        Err(err) if err.is_bad_input() => {
            info!("Rejected uploaded file: {err}");
            view::Notice::error(err.to_string())
        }
        Err(err) => {
            error!("Unable to process uploaded file: {err}");
            view::Notice::error("Unable to process the file")
        }
    };
    Ok(view::results(notice, key_configured, &[]))
}

fn redirect_with_error(msg: &str) -> Flash<Redirect> {
    Flash::error(Redirect::to(uri!(get_index)), msg)
}

fn raw_file_name<'a>(file: &'a TempFile<'_>) -> Option<&'a str> {
    file.raw_name()
        .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str())
}

fn is_csv_file_name(name: &str) -> bool {
    name.len() >= CSV_EXTENSION.len()
        && name
            .get(name.len() - CSV_EXTENSION.len()..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION))
}

async fn read_file(file: &TempFile<'_>) -> std::io::Result<Vec<u8>> {
    let reader = file.open().await?;
    rocket::tokio::pin!(reader);
    let mut data = Vec::with_capacity(file.len() as usize);
    reader.read_to_end(&mut data).await?;
    Ok(data)
}

pub fn routes() -> Vec<Route> {
    routes![get_index, post_index, get_main_css]
}
