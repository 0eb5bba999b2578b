use crate::data::{mark::MarkId, student::StudentId};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::num::ParseIntError;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse API base URL {:?}", original))]
    ParseApiUrl {
        source: url::ParseError,
        original: String,
    },
    #[snafu(display("Unable to parse API timeout {:?}", original))]
    ParseTimeout {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Error building HTTP client"))]
    BuildClient { source: reqwest::Error },
    #[snafu(display("Error sending {} request to {}", method, path))]
    SendRequest {
        source: reqwest::Error,
        method: &'static str,
        path: String,
    },
    #[snafu(display("API rejected request with {}", status))]
    Rejected {
        status: reqwest::StatusCode,
        message: Option<String>,
    },
    #[snafu(display("Error decoding API response from {}", path))]
    DecodeResponse { source: reqwest::Error, path: String },
    #[snafu(display("Unable to find student with ID {} on the current page", id))]
    MissingStudent { id: StudentId },
    #[snafu(display("Unable to find mark with ID {} on the current page", id))]
    MissingMark { id: MarkId },
    #[snafu(display("Tried to answer a confirmation, but none was pending"))]
    NoPendingConfirmation,
}

impl RosterError {
    /// The human-readable `error` field the API sent back, if there was one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl IntoResponse for RosterError {
    #[allow(clippy::match_same_arms)]
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BG: StatusCode = StatusCode::BAD_GATEWAY; //upstream api broke
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Roster Error"}
                    span {(desc)}
                }
                a href="/" class="underline" {"Back"}
            }
        };

        let status_code = match &self {
            Self::BadEnvVar { .. } | Self::ParseApiUrl { .. } | Self::ParseTimeout { .. } => ISE,
            Self::BuildClient { .. } => ISE,
            Self::SendRequest { .. } | Self::Rejected { .. } | Self::DecodeResponse { .. } => BG,
            Self::MissingStudent { .. } | Self::MissingMark { .. } => NF,
            Self::NoPendingConfirmation => BI,
        };

        error!(?self, "Error!");
        (status_code, basic_error(self.to_string())).into_response()
    }
}
