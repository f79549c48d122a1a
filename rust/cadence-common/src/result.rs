pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns an invalid-argument error from the enclosing function unless `$cond`
/// holds. The error names `$name` and quotes the condition source.
#[macro_export]
macro_rules! verify_arg {
    ($name:ident, $cond:expr) => {
        if !$cond {
            return Err($crate::error::Error::invalid_arg(
                stringify!($name),
                stringify!($cond),
            )
            .into());
        }
    };
}

/// Like [`verify_arg!`], but for malformed input data: the error is an
/// invalid-format error for element `$name`.
#[macro_export]
macro_rules! verify_data {
    ($name:ident, $cond:expr) => {
        if !$cond {
            return Err($crate::error::Error::invalid_format(
                stringify!($name),
                stringify!($cond),
            )
            .into());
        }
    };
}
