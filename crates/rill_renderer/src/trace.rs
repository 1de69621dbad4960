//! Per-pixel debug trace.
//!
//! A [`Trace`] is handed down through every cast and shade call. When it is
//! off, [`pixel_print!`](crate::pixel_print) does not even format its
//! arguments; when on, each message becomes an indented `log::debug!` line
//! under the `rill::trace` target, one indent level per nested call.

use std::fmt;

/// Log target used for all trace output.
pub const TRACE_TARGET: &str = "rill::trace";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trace {
    enabled: bool,
    level: usize,
}

impl Trace {
    /// A trace that reports nothing.
    pub const fn off() -> Self {
        Self {
            enabled: false,
            level: 0,
        }
    }

    /// A trace that reports everything, starting at indent level 0.
    pub const fn on() -> Self {
        Self {
            enabled: true,
            level: 0,
        }
    }

    /// An enabled trace for pixel `(x, y)`, announcing the pixel first.
    pub fn pixel(x: u32, y: u32) -> Self {
        let trace = Self::on();
        trace.emit(format_args!("debug pixel ({}, {})", x, y));
        trace
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// The handle for a call made from within this one.
    #[inline]
    pub fn nested(self) -> Self {
        Self {
            level: self.level + 1,
            ..self
        }
    }

    #[doc(hidden)]
    pub fn emit(&self, args: fmt::Arguments<'_>) {
        log::debug!(target: TRACE_TARGET, "{:indent$}{}", "", args, indent = self.level * 2);
    }
}

/// Report an intermediate quantity to a [`Trace`], if it is enabled.
#[macro_export]
macro_rules! pixel_print {
    ($trace:expr, $($arg:tt)+) => {{
        let trace: &$crate::Trace = &$trace;
        if trace.is_enabled() {
            trace.emit(format_args!($($arg)+));
        }
    }};
}
