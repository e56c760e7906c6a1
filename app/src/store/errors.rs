#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not query `{url}': {error}")]
    Http {
        error: reqwest::Error,
        url: String,
    },

    #[error("Query to `{url}' failed with status {status}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Could not decode document `{id}': {error}")]
    Decode { error: String, id: String },

    #[error("Could not find project `{id}'")]
    NotFound { id: String },
}

pub type Result<T> = std::result::Result<T, Error>;
