use crate::runtime::EnvError;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt;

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(tag = "type")]
pub enum CtxError {
    Auth(AuthError),
    Http(HttpError),
    Format(FormatError),
    Env(EnvError),
}

impl CtxError {
    pub fn message(&self) -> String {
        match &self {
            CtxError::Auth(error) => error.message(),
            CtxError::Http(error) => error.message(),
            CtxError::Format(error) => error.message(),
            CtxError::Env(error) => error.message(),
        }
    }
}

impl fmt::Display for CtxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<AuthError> for CtxError {
    fn from(error: AuthError) -> Self {
        CtxError::Auth(error)
    }
}

impl From<HttpError> for CtxError {
    fn from(error: HttpError) -> Self {
        CtxError::Http(error)
    }
}

impl From<FormatError> for CtxError {
    fn from(error: FormatError) -> Self {
        CtxError::Format(error)
    }
}

impl From<EnvError> for CtxError {
    fn from(error: EnvError) -> Self {
        match error {
            EnvError::HttpStatus(status, body) => CtxError::Http(HttpError { status, body }),
            error => CtxError::Env(error),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AuthError {
    UserNotAuthenticated,
    MissingAccessToken,
}

impl AuthError {
    pub fn message(&self) -> String {
        match &self {
            AuthError::UserNotAuthenticated => "User is not authenticated".to_owned(),
            AuthError::MissingAccessToken => "No access token available".to_owned(),
        }
    }
    pub fn code(&self) -> u64 {
        match &self {
            AuthError::UserNotAuthenticated => 1,
            AuthError::MissingAccessToken => 2,
        }
    }
}

impl Serialize for AuthError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("AuthError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// The API answered with a non-2xx status.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HttpError {
    pub status: u16,
    pub body: String,
}

impl HttpError {
    pub fn message(&self) -> String {
        if self.body.is_empty() {
            format!("Request failed with status {}", self.status)
        } else {
            format!("Request failed with status {}: {}", self.status, self.body)
        }
    }
}

impl Serialize for HttpError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("HttpError", 3)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("body", &self.body)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// The API answered 2xx but the payload cannot be used.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FormatError {
    /// The `success` flag is missing or falsy. Carries the server's error, if any.
    Unsuccessful(Option<String>),
    MalformedData(String),
}

impl FormatError {
    pub fn message(&self) -> String {
        match &self {
            FormatError::Unsuccessful(Some(error)) => error.to_owned(),
            FormatError::Unsuccessful(None) => "Request was not successful".to_owned(),
            FormatError::MalformedData(message) => format!("Malformed response data: {message}"),
        }
    }
    pub fn code(&self) -> u64 {
        match &self {
            FormatError::Unsuccessful(_) => 1,
            FormatError::MalformedData(_) => 2,
        }
    }
}

impl Serialize for FormatError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("FormatError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}
