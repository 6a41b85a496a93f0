use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The backend answered, just not with a 2xx.
    Rejected { url: String, status: u16, body: String },
    /// No answer at all: refused, timed out, DNS.
    Unreachable(Box<ureq::Transport>),
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Rejected { url, status, body } => {
                write!(f, "backend rejected {url} with {status}: {body}")
            }
            Error::Unreachable(transport) => write!(f, "backend unreachable: {transport}"),
            Error::Json(error) => write!(f, "unexpected JSON from backend: {error}"),
            Error::Io(error) => write!(f, "reading backend response: {error}"),
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(value: ureq::Error) -> Self {
        match value {
            ureq::Error::Status(status, response) => Error::Rejected {
                url: response.get_url().to_owned(),
                status,
                body: response.into_string().unwrap_or_default(),
            },
            ureq::Error::Transport(transport) => Error::Unreachable(Box::new(transport)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Json(value)
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Rejected { .. } => None,
            Error::Unreachable(transport) => Some(transport.as_ref()),
            Error::Json(error) => Some(error),
            Error::Io(error) => Some(error),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_names_the_endpoint() {
        let err = Error::Rejected {
            url: "http://127.0.0.1:5000/monitor?email=ana%40example.com".to_owned(),
            status: 404,
            body: r#"{"message": "not found"}"#.to_owned(),
        };

        let message = err.to_string();
        assert!(message.contains("/monitor?email=ana%40example.com"));
        assert!(message.contains("404"));
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn json_error_keeps_its_source() {
        let err = Error::from(serde_json::from_str::<u32>("nope").unwrap_err());
        assert!(err.to_string().starts_with("unexpected JSON from backend"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
