//! Operation boundary macros.
//!
//! All three expand to [`__op_event!`](crate::__op_event), which stamps the
//! calling module as `component` plus the `op` and `event` keys from
//! [`schema`](crate::core_types::schema). Extra `key = value` fields are
//! passed through to `tracing` unchanged.

#[doc(hidden)]
#[macro_export]
macro_rules! __op_event {
    ($level:expr, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::event!(
            $level,
            component = module_path!(),
            op = $op,
            event = $event
            $(, $($field)*)?
        )
    };
}

/// Mark the start of an operation.
///
/// ```
/// # use stylecheck_core::log_op_start;
/// log_op_start!("check_document");
/// log_op_start!("check_document", style_count = 3, paragraph_count = 12);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(
            tracing::Level::INFO,
            $op,
            $crate::core_types::schema::EVENT_START
            $(, $($field)*)?
        )
    };
}

/// Mark the successful end of an operation; `duration_ms` is mandatory.
///
/// ```
/// # use stylecheck_core::log_op_end;
/// log_op_end!("load_spec_file", duration_ms = 3);
/// log_op_end!("check_document", duration_ms = 42, clean = true);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(
            tracing::Level::INFO,
            $op,
            $crate::core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Mark a failed operation at `ERROR` level with the error's kind and code.
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError).
///
/// ```
/// # use stylecheck_core::{log_op_error, errors::CheckError};
/// let err = CheckError::DuplicateStyleName { name: "HEADER".to_string() };
/// log_op_error!("build_style_index", err, duration_ms = 1, run_id = "r-7");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = ::core::convert::Into::into($err);
        $crate::__op_event!(
            tracing::Level::ERROR,
            $op,
            $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
