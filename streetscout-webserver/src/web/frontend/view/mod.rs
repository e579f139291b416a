use maud::{html, Markup};
use rocket::request::FlashMessage;
use streetscout_boundary::ResolvedProperty;

mod page;

pub use page::Notice;
use page::*;

const TITLE: &str = "Street Scout";

pub fn index(flash: Option<FlashMessage>, key_configured: bool) -> Markup {
    page(TITLE, flash, None, upload_page(key_configured, &[]))
}

pub fn results(notice: Notice, key_configured: bool, properties: &[ResolvedProperty]) -> Markup {
    page(
        TITLE,
        None,
        Some(notice),
        upload_page(key_configured, properties),
    )
}

fn upload_page(key_configured: bool, properties: &[ResolvedProperty]) -> Markup {
    html! {
        @if !key_configured {
            div class="api-key-missing" {
                "The Google API key is not configured. "
                "Geocoding requests will be rejected until "
                code { "GOOGLE_API_KEY" }
                " is set."
            }
        }
        (upload_form())
        @if !properties.is_empty() {
            (property_list(properties))
        }
    }
}

fn upload_form() -> Markup {
    html! {
        form class="upload" action="/" method="POST" enctype="multipart/form-data" {
            fieldset {
                label {
                    "CSV file with an "
                    code { "address" }
                    " column:"
                    br;
                    input type="file" name="file" accept=".csv";
                }
                br;
                input class="btn" type="submit" value="upload";
            }
        }
    }
}

fn property_list(properties: &[ResolvedProperty]) -> Markup {
    html! {
        ul class="properties" {
            @for p in properties {
                li class="property" {
                    h3 { (p.address) }
                    div class="coordinates" {
                        span class="lat" { (p.lat) }
                        ", "
                        span class="lng" { (p.lng) }
                    }
                    @if let Some(url) = &p.street_view_url {
                        img class="street-view" src=(url) alt=(p.address);
                    } @else {
                        div class="no-street-view" { "No street view image available" }
                    }
                }
            }
        }
    }
}
