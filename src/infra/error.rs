use thiserror::Error;

/// Failures talking to the catalog provider or the suggestion service.
///
/// These are always recovered locally: logged, with dependent state left as
/// it was.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response contained no content")]
    EmptyResponse,
    #[error("suggestion service is not configured (set GEMINI_API_KEY)")]
    NotConfigured,
}

pub type FetchResult<T> = Result<T, FetchError>;
