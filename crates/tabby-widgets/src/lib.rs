// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Tabby widget library
//!
//! Each widget wraps a native control created by a
//! [`Toolkit`](tabby::toolkit::Toolkit), keeping a copy of its caption and a
//! set of named event handlers. Handlers are set with `on_click`,
//! `on_change` and similar methods; setting a handler replaces the previous
//! one.
//!
//! ## Application
//!
//! -   [`Application`]: owns the toolkit, configuration and windows; runs the
//!     event loop
//! -   [`Window`]: a top-level window
//!
//! ## Containers
//!
//! -   [`Group`]: groups widgets within a window
//! -   [`Canvas`]: an OpenGL surface reporting normalized pointer positions
//! -   [`Children`]: the child list and dispatch rules shared by containers
//!
//! ## Controls
//!
//! -   [`Button`], [`ReturnButton`], [`HexagonButton`]: push buttons
//! -   [`CheckBox`]: a checkable box
//! -   [`Dropdown`]: a drop-down choice
//! -   [`Input`], [`Memo`]: text entry
//! -   [`FloatInput`], [`IntInput`]: numeric entry
//! -   [`ListBox`]: a list with one selection
//! -   [`Menu`], [`MenuItem`]: a menu bar and its items
//!
//! ## Displays
//!
//! -   [`TextBox`]: static text
//! -   [`Image`]: a PNG image scaled to fit

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[macro_use]
mod macros;

mod app;
mod button;
mod canvas;
mod check_box;
mod children;
mod dropdown;
mod group;
mod hexagon_button;
mod image;
mod input;
mod list_box;
mod menu;
mod text_box;
mod window;

pub use app::{Application, WindowList};
pub use button::{Button, ReturnButton};
pub use canvas::{Canvas, Render, normalize};
pub use check_box::CheckBox;
pub use children::Children;
pub use dropdown::Dropdown;
pub use group::Group;
pub use hexagon_button::HexagonButton;
pub use image::Image;
pub use input::{FloatInput, Input, IntInput, Memo};
pub use list_box::ListBox;
pub use menu::{Menu, MenuItem, add_padding};
pub use text_box::TextBox;
pub use window::Window;
