/// Asserts that an expression is `Err` and evaluates to the error.
///
/// An optional second argument names a `bool` method on the error that must
/// return `true`, e.g. `assert_err!(table.is_valid(), is_no_fields)`.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            actual => panic!("expected `Err`; actual={:?}", actual),
        }
    };
    ($e:expr, $kind:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$kind(),
            "expected error matching `{}`; actual={:?}",
            stringify!($kind),
            err
        );
        err
    }};
}

/// Asserts that an expression is `Ok` and evaluates to the value.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; error={}", e),
        }
    };
}
