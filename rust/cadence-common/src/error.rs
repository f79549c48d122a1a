use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn empty_container(operation: impl Into<String>) -> Error {
        ErrorKind::EmptyContainer {
            operation: operation.into(),
        }
        .into()
    }

    pub fn null_key(operation: impl Into<String>) -> Error {
        ErrorKind::NullKey {
            operation: operation.into(),
        }
        .into()
    }

    pub fn out_of_bounds(operation: impl Into<String>, index: usize, len: usize) -> Error {
        ErrorKind::OutOfBounds {
            operation: operation.into(),
            index,
            len,
        }
        .into()
    }

    pub fn invalid_precondition(name: impl Into<String>, message: impl Into<String>) -> Error {
        ErrorKind::InvalidPrecondition {
            name: name.into(),
            message: message.into(),
        }
        .into()
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        ErrorKind::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
        .into()
    }

    pub fn invalid_format(element: impl Into<String>, message: impl Into<String>) -> Error {
        ErrorKind::InvalidFormat {
            element: element.into(),
            message: message.into(),
        }
        .into()
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Error {
        ErrorKind::Io {
            context: context.into(),
            source,
        }
        .into()
    }

    /// Returns `true` for errors raised by reading from or removing out of an empty
    /// container.
    pub fn is_empty_container(&self) -> bool {
        matches!(self.kind(), ErrorKind::EmptyContainer { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("{operation}: container is empty")]
    EmptyContainer { operation: String },

    #[error("{operation}: key is absent")]
    NullKey { operation: String },

    #[error("{operation}: index {index} is out of bounds (len {len})")]
    OutOfBounds {
        operation: String,
        index: usize,
        len: usize,
    },

    #[error("precondition violated for {name}: {message}")]
    InvalidPrecondition { name: String, message: String },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid format for '{element}': {message}")]
    InvalidFormat { element: String, message: String },

    #[error("IO error for '{context}': {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io("", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::empty_container("find_min");
        assert!(err.is_empty_container());
        assert_eq!(err.to_string(), "find_min: container is empty");

        let err = Error::out_of_bounds("count_bucket", 7, 4);
        assert_eq!(
            err.to_string(),
            "count_bucket: index 7 is out of bounds (len 4)"
        );
        assert!(!err.is_empty_container());

        let err = Error::null_key("add");
        assert!(matches!(err.into_kind(), ErrorKind::NullKey { .. }));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err.kind(), ErrorKind::Io { .. }));
    }
}
