// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! In-memory toolkit for Tabby
//!
//! [`Headless`] implements [`Toolkit`] and every `Native…` trait without a
//! display. Controls behave like their native counterparts as far as event
//! responses, callback activation, focus and redraw requests are concerned;
//! nothing is rendered. GL calls and 2D paint operations are recorded.
//!
//! User interaction is scripted:
//!
//! -   [`Headless::push_event`] and [`Headless::push_draw`] queue work for
//!     [`Toolkit::run`], which returns once the queue is empty
//! -   [`Headless::push_popup`] decides the pick of the next popup opened by a
//!     drop-down or menu bar
//! -   [`Headless::add_image`] registers an image without touching the file
//!     system
//!
//! Inspection methods report what the toolkit saw, keyed by [`WidgetId`].

#[macro_use]
mod control;
mod button;
mod choice;
mod gl;
mod image;
mod input;
mod menu;
mod state;
mod window;

pub use gl::{GlCommand, PaintOp, RecordingGl, RecordingPainter};
pub use image::Image;

use state::{Scripted, Shared};
use std::path::{Path, PathBuf};
use tabby::WidgetId;
use tabby::config::Config;
use tabby::event::{Event, EventCx};
use tabby::geom::{Rect, Size};
use tabby::toolkit::*;

/// The in-memory toolkit
///
/// Cloning yields another handle to the same toolkit.
#[derive(Clone, Debug, Default)]
pub struct Headless {
    state: Shared,
}

impl Headless {
    /// Construct a new instance
    pub fn new() -> Self {
        Headless::default()
    }

    /// Queue delivery of `event` to `window`
    ///
    /// If `cx` carries no focus, the toolkit's current focus is used.
    pub fn push_event(&self, window: WidgetId, cx: EventCx, event: Event) {
        let item = Scripted::Event { window, cx, event };
        self.state.borrow_mut().queue.push_back(item);
    }

    /// Queue a redraw of `window`
    pub fn push_draw(&self, window: WidgetId) {
        self.state.borrow_mut().queue.push_back(Scripted::Draw(window));
    }

    /// Script the pick of the next popup (`None`: dismissed)
    pub fn push_popup(&self, pick: Option<usize>) {
        self.state.borrow_mut().popups.push_back(pick);
    }

    /// Register an image of the given size at `path`
    pub fn add_image(&self, path: impl Into<PathBuf>, size: Size) {
        self.state.borrow_mut().images.insert(path.into(), size);
    }

    /// The configuration last applied
    pub fn config(&self) -> Option<Config> {
        self.state.borrow().config.clone()
    }

    /// Keyboard focus as left by the last event of [`Toolkit::run`]
    pub fn focus(&self) -> Option<WidgetId> {
        self.state.borrow().focus
    }

    /// The label stored by control `id`
    pub fn label(&self, id: WidgetId) -> Option<String> {
        self.state.borrow().record(id).map(|r| r.label.clone())
    }

    /// The container of `id`
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.state.borrow().parent(id)
    }

    /// Number of redraw requests for `id`
    pub fn redraws(&self, id: WidgetId) -> u32 {
        self.state.borrow().record(id).map(|r| r.redraws).unwrap_or(0)
    }

    /// Number of label redraw requests for `id`
    pub fn label_redraws(&self, id: WidgetId) -> u32 {
        self.state.borrow().record(id).map(|r| r.label_redraws).unwrap_or(0)
    }

    /// Whether window `id` has waited for expose
    pub fn exposed(&self, id: WidgetId) -> bool {
        self.state.borrow().record(id).is_some_and(|r| r.exposed)
    }

    /// Number of flushes of window or group `id`
    pub fn flushes(&self, id: WidgetId) -> u32 {
        self.state.borrow().record(id).map(|r| r.flushes).unwrap_or(0)
    }

    /// Size of the icon of window `id`
    pub fn icon(&self, id: WidgetId) -> Option<Size> {
        self.state.borrow().record(id).and_then(|r| r.icon)
    }

    /// GL frames presented by surface `id`
    pub fn frames(&self, id: WidgetId) -> Vec<Vec<GlCommand>> {
        let state = self.state.borrow();
        state.record(id).map(|r| r.frames.clone()).unwrap_or_default()
    }

    /// Paint operations recorded by draws of [`Toolkit::run`]
    pub fn paint_ops(&self) -> Vec<PaintOp> {
        self.state.borrow().paint.clone()
    }
}

impl Toolkit for Headless {
    fn apply_config(&self, config: &Config) {
        log::debug!("apply_config: theme {:?}, scheme {:?}", config.theme, config.scheme);
        self.state.borrow_mut().config = Some(config.clone());
    }

    fn button(&self, kind: ButtonKind, rect: Rect, label: &str) -> Box<dyn NativeButton> {
        Box::new(button::Button::new(&self.state, kind, rect, label))
    }

    fn input(&self, kind: InputKind, rect: Rect, label: &str) -> Box<dyn NativeInput> {
        Box::new(input::Input::new(&self.state, kind, rect, label))
    }

    fn choice(&self, rect: Rect, label: &str) -> Box<dyn NativeChoice> {
        Box::new(choice::Choice::new(&self.state, rect, label))
    }

    fn browser(&self, rect: Rect, label: &str) -> Box<dyn NativeBrowser> {
        Box::new(choice::Browser::new(&self.state, rect, label))
    }

    fn label_box(&self, rect: Rect, label: &str) -> Box<dyn NativeControl> {
        Box::new(button::LabelBox::new(&self.state, rect, label))
    }

    fn menu_bar(&self, rect: Rect) -> Box<dyn NativeMenu> {
        Box::new(menu::MenuBar::new(&self.state, rect))
    }

    fn group(&self, rect: Rect, label: &str) -> Box<dyn NativeGroup> {
        Box::new(window::Group::new(&self.state, rect, label))
    }

    fn window(&self, rect: Rect, label: &str) -> Box<dyn NativeWindow> {
        Box::new(window::Window::new(&self.state, rect, label))
    }

    fn gl_surface(&self, rect: Rect, label: &str) -> Box<dyn NativeSurface> {
        Box::new(window::Window::with_gl(&self.state, rect, label))
    }

    fn load_png(&self, path: &Path) -> Box<dyn NativeImage> {
        let registered = self.state.borrow().images.get(path).copied();
        match registered.or_else(|| image::png_size(path)) {
            Some(size) => Box::new(Image::new(size)),
            None => {
                log::debug!("load_png: failed to load {}", path.display());
                Box::new(Image::invalid())
            }
        }
    }

    fn run(&self, sink: &mut dyn EventSink) -> tabby::Result<()> {
        loop {
            let item = self.state.borrow_mut().queue.pop_front();
            let Some(item) = item else {
                break;
            };

            match item {
                Scripted::Event {
                    window,
                    mut cx,
                    event,
                } => {
                    if cx.focus().is_none() {
                        cx = cx.with_focus(self.state.borrow().focus);
                    }
                    let response = sink.handle(window, &mut cx, event)?;
                    log::trace!("run: {event:?} to {window}: {response:?}");
                    self.state.borrow_mut().focus = cx.focus();
                }
                Scripted::Draw(window) => {
                    let mut painter = RecordingPainter::default();
                    sink.draw(window, &mut painter)?;
                    self.state.borrow_mut().paint.extend(painter.take());
                }
            }
        }
        Ok(())
    }
}
