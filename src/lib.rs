// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Tabby: callback-style widgets over a native GUI toolkit
//!
//! This, the main Tabby crate, is merely a wrapper over other crates:
//!
//! -   [`tabby_core`] is the core of the library: geometry, events, handler
//!     slots, configuration and the [`Toolkit`](toolkit::Toolkit) interface
//! -   [`tabby_widgets`] provides the widgets and the [`Application`] root
//! -   [`tabby_headless`] is an in-memory toolkit, used for testing
//!
//! All items from [`tabby_core`] are directly re-exported from this crate
//! (e.g. [`tabby::geom::Rect`](crate::geom::Rect)); other crates are
//! re-exported as a sub-module (e.g. [`tabby::widgets::Button`](widgets::Button)).
//!
//! The [easy-cast](https://docs.rs/easy-cast/0.5/easy_cast) library is
//! re-exported as `tabby::cast`.
//!
//! ```
//! use tabby::prelude::*;
//! use tabby::config::Config;
//! use tabby::headless::Headless;
//! use tabby::widgets::Button;
//!
//! let tk = Headless::new();
//! let mut app = Application::new(tk.clone(), Config::default());
//! let mut window = app.window(Rect::xywh(0, 0, 320, 240), "Hello");
//! let mut button = Button::new(&tk, Rect::xywh(10, 10, 80, 25), "Quit");
//! button.on_click(|b| b.set_label("Bye"));
//! window.add(button);
//! window.show();
//! app.add(window);
//! app.run().unwrap();
//! ```
//!
//! [`Application`]: widgets::Application

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod prelude;

pub use tabby_core::*;

pub extern crate tabby_widgets as widgets;

/// The in-memory toolkit
#[cfg(feature = "headless")]
#[cfg_attr(docsrs, doc(cfg(feature = "headless")))]
pub extern crate tabby_headless as headless;
