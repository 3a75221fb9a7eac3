/// Everything that can go wrong between receiving a job and having a
/// response body ready. Each variant ends up as the plain text body of a
/// `400 Bad Request`.
#[derive(Debug)]
pub enum Error {
    EmptyJob,
    ControlBlock(serde_json::Error),
    Payload(prost::DecodeError),
    UnknownCardinalDirection(i32),
    Serialize(serde_json::Error),
}

impl std::fmt::Display for self::Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyJob => write!(f, "job contained no message parts"),
            Error::ControlBlock(e) => write!(f, "failed to parse request: {e}"),
            Error::Payload(e) => write!(f, "failed to parse trip directions: {e}"),
            Error::UnknownCardinalDirection(value) => {
                write!(f, "unknown cardinal direction: {value}")
            }
            Error::Serialize(e) => write!(f, "failed to serialize directions: {e}"),
        }
    }
}

impl std::error::Error for self::Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ControlBlock(e) | Error::Serialize(e) => Some(e),
            Error::Payload(e) => Some(e),
            Error::EmptyJob | Error::UnknownCardinalDirection(_) => None,
        }
    }
}

impl From<prost::DecodeError> for Error {
    fn from(value: prost::DecodeError) -> Self {
        Error::Payload(value)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
