// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Error types

use crate::WidgetId;
use thiserror::Error;

/// Possible failures from toolkit backends and the application driver
///
/// Widget wrappers do not return this type: missing handlers and unknown menu
/// indices are silent, while numeric inputs report the standard parse errors.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// Failure from the graphics sub-system
    #[error("error from graphics sub-system")]
    Graphics(Box<dyn std::error::Error + 'static>),

    /// The toolkit could not be initialised
    #[error("toolkit initialisation failed: {0}")]
    Init(String),

    /// The toolkit does not support the requested operation
    #[error("operation not supported by this toolkit: {0}")]
    Unsupported(&'static str),

    /// An event was addressed to a window the application does not own
    #[error("no window with id {0}")]
    NoWindow(WidgetId),

    /// The event loop terminated abnormally
    #[error("event loop error: {0}")]
    EventLoop(String),
}

/// A `Result` type with [`Error`] as the error variant
pub type Result<T> = std::result::Result<T, Error>;
