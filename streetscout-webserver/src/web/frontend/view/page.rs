use maud::{html, Markup, DOCTYPE};
use rocket::request::FlashMessage;

const MAIN_CSS_URL: &str = "/main.css";

pub fn page(title: &str, flash: Option<FlashMessage>, notice: Option<Notice>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head{
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
            title {(title)}
            link rel="stylesheet" href=(MAIN_CSS_URL);
        }
        body{
            (flash_msg(flash))
            @if let Some(notice) = notice {
                div class=(format!("flash {}", notice.kind)) {
                    (notice.message)
                }
            }
            header {
                h1 { a href="/" { (title) } }
            }
            (content)
        }
    }
}

/// A message that belongs to the rendered page
/// instead of being carried by a cookie.
#[derive(Debug)]
pub struct Notice {
    pub kind: &'static str,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success",
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: "warning",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: "error",
            message: message.into(),
        }
    }
}

fn flash_msg(flash: Option<FlashMessage>) -> Markup {
    html! {
        @if let Some(msg) = flash {
            div class=(format!("flash {}", msg.kind())) {
                (msg.message())
            }
        }
    }
}
