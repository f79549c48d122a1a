/// Unwraps a `Result` inside a function returning `Option<Result<_, _>>`.
///
/// `Ok(value)` evaluates to `value`; `Err(err)` returns `Some(Err(err))` from the
/// enclosing function. Meant for `Iterator::next` of iterators yielding results,
/// where `?` cannot be used directly.
#[macro_export]
macro_rules! try_or_ret_some_err {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(err) => return Some(Err(err)),
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{Result, error::Error};

    fn first_even(values: &[Result<u32>]) -> Option<Result<u32>> {
        for value in values {
            let value = try_or_ret_some_err!(value.as_ref().map(|v| *v).map_err(|e| {
                Error::invalid_format("value", e.to_string())
            }));
            if value % 2 == 0 {
                return Some(Ok(value));
            }
        }
        None
    }

    #[test]
    fn test_try_or_ret_some_err() {
        assert_eq!(first_even(&[Ok(1), Ok(4)]).unwrap().unwrap(), 4);
        assert!(first_even(&[Ok(1), Err(Error::empty_container("x"))]).unwrap().is_err());
        assert!(first_even(&[Ok(1), Ok(3)]).is_none());
    }
}
