// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logging shim: forwards to `tracing` when the `tracing` feature is on.
//!
//! Without the feature the macros type-check their format arguments and
//! compile to nothing. Call sites use plain format strings only, no
//! structured fields.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug as log_debug, trace as log_trace, warn as log_warn};

#[cfg(not(feature = "tracing"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if false {
            let _ = format_args!($($arg)*);
        }
    };
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {log_debug, log_trace, log_warn};
