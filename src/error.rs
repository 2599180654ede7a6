use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Custom error type for Cosmic operations
#[derive(Debug)]
pub enum CosmicError {
    /// HTTP request failed before a response was received
    Http(String),
    /// API returned an error response
    Api {
        status: u16,
        code: u32,
        cs_code: u32,
        message: String,
    },
    /// Error raised while querying a single profile
    Profile {
        profile: String,
        source: Box<CosmicError>,
    },
    /// Failed to read or parse the configuration, or bad profile selection
    Config(String),
    /// Invalid user input (flags, arguments, filters)
    Validation(String),
    /// Lookup matched nothing
    NotFound(String),
    /// Lookup matched more than one entity
    Ambiguous(String),
    /// JSON parsing error
    Json(String),
    /// Operation did not finish in time
    Timeout(String),
    /// Async job finished with a failure status
    AsyncJob(String),
}

impl fmt::Display for CosmicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CosmicError::Http(msg) => write!(f, "{}", msg),
            CosmicError::Api {
                code,
                cs_code,
                message,
                ..
            } => write!(
                f,
                "CloudStack API error {} (CSExceptionErrorCode: {}): {}",
                code, cs_code, message
            ),
            CosmicError::Profile { profile, source } => {
                write!(f, "Error returned using profile \"{}\": {}", profile, source)
            }
            CosmicError::Config(msg) => write!(f, "{}", msg),
            CosmicError::Validation(msg) => write!(f, "{}", msg),
            CosmicError::NotFound(msg) => write!(f, "{}", msg),
            CosmicError::Ambiguous(msg) => write!(f, "{}", msg),
            CosmicError::Json(msg) => write!(f, "JSON error: {}", msg),
            CosmicError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            CosmicError::AsyncJob(msg) => write!(f, "Async job failed: {}", msg),
        }
    }
}

impl std::error::Error for CosmicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CosmicError::Profile { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl CosmicError {
    /// Wrap an error with the name of the profile that produced it
    pub fn for_profile(profile: &str, err: CosmicError) -> Self {
        CosmicError::Profile {
            profile: profile.to_string(),
            source: Box::new(err),
        }
    }

    /// Check whether the error message contains one of the given benign substrings
    pub fn is_benign(&self, benign: &[&str]) -> bool {
        let msg = self.to_string();
        benign.iter().any(|b| msg.contains(b))
    }
}

impl From<serde_json::Error> for CosmicError {
    fn from(err: serde_json::Error) -> Self {
        CosmicError::Json(err.to_string())
    }
}

impl From<std::io::Error> for CosmicError {
    fn from(err: std::io::Error) -> Self {
        CosmicError::Config(err.to_string())
    }
}

impl From<toml::de::Error> for CosmicError {
    fn from(err: toml::de::Error) -> Self {
        CosmicError::Config(err.to_string())
    }
}

impl From<dialoguer::Error> for CosmicError {
    fn from(err: dialoguer::Error) -> Self {
        CosmicError::Validation(format!("Failed to read confirmation: {}", err))
    }
}

impl From<regex::Error> for CosmicError {
    fn from(err: regex::Error) -> Self {
        CosmicError::Validation(format!("Invalid regular expression: {}", err))
    }
}

/// Result type alias for Cosmic operations
pub type Result<T> = std::result::Result<T, CosmicError>;

/// Redact API keys and request signatures echoed back in error messages
///
/// The failing request URL is often part of the message, which would leak
/// credentials into terminal history.
pub fn redact(message: &str) -> String {
    let s = API_KEY.replace_all(message, "apiKey=**redacted**");
    SIGNATURE
        .replace_all(&s, "signature=**redacted**:")
        .into_owned()
}

static API_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"apiKey=([aA0-zZ9%-]+)").expect("valid apiKey pattern"));

static SIGNATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"signature=([aA0-zZ9%-]+):").expect("valid signature pattern"));
