//! Operation boundary macros
//!
//! Every operation boundary logs through these so that `component`, `op` and
//! `event` are always present. Extra `key = value` fields may follow, using
//! the usual `tracing` field syntax (`%` for Display, `?` for Debug).

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use eventwatch_core::log_op_start;
/// log_op_start!("extract_events");
/// log_op_start!("extract_events", line_count = 120);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($($field)+)?
        );
    };
}

/// Log the successful end of an operation; `duration_ms` is mandatory
///
/// # Example
///
/// ```
/// # use eventwatch_core::log_op_end;
/// log_op_end!("compute_diff", duration_ms = 3);
/// log_op_end!("compute_diff", duration_ms = 3, new_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)+)?
        );
    };
}

/// Log the failed end of an operation
///
/// The error expression must convert into [`ExError`](crate::errors::ExError);
/// its kind and stable code are logged as `err.kind` / `err.code`.
///
/// # Example
///
/// ```
/// # use eventwatch_core::log_op_error;
/// # use eventwatch_core::errors::{ExError, ExErrorKind};
/// let err = ExError::new(ExErrorKind::Fetch).with_message("503");
/// log_op_error!("run_check", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            $($($field)+)?
        );
    }};
}
