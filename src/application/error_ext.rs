//! Error conversion helpers for I/O results
//!
//! Provides an extension trait for attaching context to `io::Result`.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// writeln!(out, "{line}").context("write tree")?;
    /// ```
    fn context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::io(action, e))
    }
}
