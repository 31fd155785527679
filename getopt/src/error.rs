#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid option -- '{0}'")]
    InvalidOption(char),

    #[error("unrecognized option '--{0}'")]
    UnrecognizedOption(String),

    #[error("option '--{name}' is ambiguous; possibilities:{}", possibilities_list(.possibilities))]
    AmbiguousOption {
        name: String,
        possibilities: Vec<String>,
    },

    #[error("option requires an argument -- '{0}'")]
    MissingShortArgument(char),

    #[error("option '--{0}' requires an argument")]
    MissingLongArgument(String),

    #[error(transparent)]
    Handler(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownOption,
    AmbiguousOption,
    MissingArgument,
    Handler,
}

impl Error {
    /// Wrap a failure raised inside an option handler.
    pub fn handler<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Handler(err.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidOption(_) | Error::UnrecognizedOption(_) => ErrorKind::UnknownOption,
            Error::AmbiguousOption { .. } => ErrorKind::AmbiguousOption,
            Error::MissingShortArgument(_) | Error::MissingLongArgument(_) => {
                ErrorKind::MissingArgument
            }
            Error::Handler(_) => ErrorKind::Handler,
        }
    }
}

fn possibilities_list(names: &[String]) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(" '--");
        out.push_str(name);
        out.push('\'');
    }
    out
}
