use std::error::Error as StdError;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Xml(roxmltree::Error),
    MissingName(usize),
    InvalidPlacemark(String),
    NotFound(String),
    AlreadyRendered(String),
    MalformedResponse(String),
    OverpassApi(String),
    Reqwest(reqwest::Error),
    SerdeJson(serde_json::Error),
    IO(std::io::Error),
    Url(url::ParseError),
    CLI(String),
    Generic(String),
}

impl Error {
    /// Error text with every underlying cause appended, this is what users get to see.
    pub fn describe(&self) -> String {
        let mut res = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            let cause_str = cause.to_string();
            if !res.contains(&cause_str) {
                res.push_str(": ");
                res.push_str(&cause_str);
            }
            source = cause.source();
        }
        res
    }

    pub fn is_query_failure(&self) -> bool {
        matches!(
            self,
            Error::Reqwest(_) | Error::OverpassApi(_) | Error::SerdeJson(_)
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Xml(err) => write!(f, "Malformed boundary document: {}", err),
            Error::MissingName(index) => write!(f, "Placemark #{} has no name", index + 1),
            Error::InvalidPlacemark(err) => write!(f, "{}", err),
            Error::NotFound(name) => write!(f, "Area not found: {}", name),
            Error::AlreadyRendered(name) => write!(f, "Area is already rendered: {}", name),
            Error::MalformedResponse(err) => write!(f, "Malformed Overpass response: {}", err),
            Error::OverpassApi(err) => write!(f, "{}", err),
            Error::Reqwest(err) => err.fmt(f),
            Error::SerdeJson(err) => err.fmt(f),
            Error::IO(err) => err.fmt(f),
            Error::Url(err) => err.fmt(f),
            Error::CLI(err) => write!(f, "{}", err),
            Error::Generic(err) => write!(f, "{}", err),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Xml(err) => err.source(),
            Error::Reqwest(err) => err.source(),
            Error::SerdeJson(err) => err.source(),
            Error::IO(err) => err.source(),
            _ => None,
        }
    }
}

impl From<&str> for Error {
    fn from(str: &str) -> Self {
        Error::Generic(str.to_owned())
    }
}

impl From<String> for Error {
    fn from(str: String) -> Self {
        Error::Generic(str)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IO(error)
    }
}

impl From<roxmltree::Error> for Error {
    fn from(error: roxmltree::Error) -> Self {
        Error::Xml(error)
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Reqwest(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::SerdeJson(error)
    }
}

impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Self {
        Error::Url(error)
    }
}

#[cfg(test)]
impl From<http::Error> for Error {
    fn from(error: http::Error) -> Self {
        Error::Generic(error.to_string())
    }
}
