/// Logs a failed operation together with the call site.
///
/// Usage: `log_err!(err, "Failed to fetch blogs");`
#[macro_export]
macro_rules! log_err {
    ($err:expr, $what:expr) => {{
        ::tracing::error!(
            location = concat!(file!(), ":", line!()),
            error = %$err,
            "{}",
            $what
        );
    }};
}
