// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Tabby core library
//!
//! This crate contains the parts of Tabby which are shared between the widget
//! library and toolkit backends:
//!
//! -   [`toolkit`]: the narrow interface through which native controls are
//!     created and driven
//! -   [`event`]: native event codes, the [`event::EventCx`] context and the
//!     [`event::Callback`] handler slot
//! -   [`Widget`]: the trait implemented by every wrapper
//! -   [`config`]: theme and application configuration
//!
//! The [easy-cast](https://docs.rs/easy-cast/0.5/easy_cast) library is re-exported as `tabby::cast`.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub extern crate easy_cast as cast;

pub mod class;
pub mod config;
pub mod draw;
mod error;
pub mod event;
pub mod geom;
pub mod prelude;
pub mod toolkit;
mod widget;

pub use error::{Error, Result};
pub use toolkit::WidgetId;
pub use widget::{Widget, WidgetExt};
