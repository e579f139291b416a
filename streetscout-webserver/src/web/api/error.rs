use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use std::io;
use streetscout_application::error::AppError;
use thiserror::Error;

use super::json_error_response;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::App(err.into())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if err.is_bad_input() {
                    return json_error_response(req, &err, Status::UnprocessableEntity);
                }
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                json_error_response(req, &err, Status::InternalServerError)
            }
        }
    }
}
