#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: cursor line {line} is outside a buffer of {len} line(s)")]
    InvalidArgument { line: usize, len: usize },

    #[error("Unterminated statement: no `;` from line {line} to the end of the buffer")]
    UnterminatedStatement { line: usize },

    #[error("Malformed hint spec: entry {index} has no `{key}` field")]
    MalformedHintSpec { index: usize, key: String },

    #[error("Observer already registered: {0}")]
    ObserverAlreadyRegistered(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl From<confique::Error> for Error {
    fn from(value: confique::Error) -> Self {
        Error::Config(value.to_string())
    }
}
