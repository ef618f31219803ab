use crate::service::validation::StudentField;
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use snafu::Snafu;
use std::num::ParseIntError;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse env var `{}` as a number", name))]
    ParseEnvNumber {
        source: ParseIntError,
        name: &'static str,
    },
    #[snafu(display("invalid {}", field))]
    InvalidField { field: StudentField },
    #[snafu(display("student already exists"))]
    DuplicateStudent,
    #[snafu(display("invalid query params"))]
    InvalidQueryParams,
    #[snafu(display("no rows present in database with this query params"))]
    NoMatchingRows,
    #[snafu(display("no student present in database with id {}", id))]
    MissingStudent { id: i64 },
    #[snafu(display("Unable to parse student id {:?}", original))]
    ParseId {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Unable to decode request body: {}", source))]
    DecodeBody { source: serde_json::Error },
    #[snafu(display("Unable to encode response body"))]
    EncodeBody { source: serde_json::Error },
}

impl RosterError {
    pub fn status_code(&self) -> StatusCode {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        match self {
            Self::OpenDatabase { .. } | Self::MakeQuery { .. } => ISE,
            Self::BadEnvVar { .. } | Self::ParseEnvNumber { .. } => ISE,
            Self::InvalidField { .. } | Self::DuplicateStudent => BI,
            Self::InvalidQueryParams | Self::NoMatchingRows => BI,
            Self::MissingStudent { .. } => BI,
            Self::ParseId { .. } | Self::DecodeBody { .. } => BI,
            Self::EncodeBody { .. } => ISE,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            error!(?self, "Error!");
        } else {
            warn!(?self, "Rejected request");
        }

        (
            status_code,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
