// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Top-level window

use crate::Children;
use log::warn;
use tabby::config::Config;
use tabby::draw::Painter;
use tabby::event::{Callback, Event, EventCx, Response, When};
use tabby::geom::Rect;
use tabby::toolkit::{NativeControl, NativeGroup, NativeImage, NativeWindow, Toolkit};
use tabby::{Widget, WidgetId};

/// A top-level, double-buffered window
///
/// The window owns its icon, loaded from [`Config::icon_path`] at
/// construction. Windows start hidden; see [`Window::show`].
///
/// A close request hides the window unless a [`Window::will_hide`] handler
/// is set, in which case the handler decides.
pub struct Window {
    native: Box<dyn NativeWindow>,
    caption: String,
    icon: Box<dyn NativeImage>,
    children: Children,
    armed: bool,
    on_click: Callback<Window>,
    on_show: Callback<Window>,
    on_hide: Callback<Window>,
    will_hide: Callback<Window>,
}

impl Window {
    /// Construct a hidden window
    pub fn new(tk: &dyn Toolkit, config: &Config, rect: Rect, title: &str) -> Self {
        let mut native = tk.window(rect, title);
        let icon = tk.load_png(&config.icon_path);
        if icon.is_valid() {
            native.set_icon(&*icon);
        } else {
            warn!("Window: failed to load icon {}", config.icon_path.display());
        }
        Window {
            native,
            caption: title.to_string(),
            icon,
            children: Children::new(),
            armed: false,
            on_click: Callback::new(),
            on_show: Callback::new(),
            on_hide: Callback::new(),
            will_hide: Callback::new(),
        }
    }

    /// The window icon
    #[inline]
    pub fn icon(&self) -> &dyn NativeImage {
        &*self.icon
    }

    /// Set the handler called on a press outside any child
    pub fn on_click(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.on_click.set(move |w, ()| f(w));
    }

    /// Set the handler called when the window is shown
    pub fn on_show(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.on_show.set(move |w, ()| f(w));
    }

    /// Set the handler called when the window is hidden
    pub fn on_hide(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.on_hide.set(move |w, ()| f(w));
    }

    /// Set the handler called when the user asks to close the window
    ///
    /// The window stays open unless the handler calls [`Window::hide`].
    pub fn will_hide(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.will_hide.set(move |w, ()| f(w));
        if !self.armed {
            self.native.arm_callback(When::Release);
            self.armed = true;
        }
    }

    /// Whether the window is visible
    #[inline]
    pub fn visible(&self) -> bool {
        self.native.visible()
    }

    /// Show, blocking until the window is mapped and drawn
    pub fn show(&mut self) {
        self.native.show();
        let _ = self.handle_event(&mut EventCx::new(), Event::Show);
        self.native.wait_for_expose();
        self.native.flush();
    }

    /// Hide
    pub fn hide(&mut self) {
        self.native.hide();
        let _ = self.handle_event(&mut EventCx::new(), Event::Hide);
    }

    fn handle_event(&mut self, cx: &mut EventCx, event: Event) -> Response {
        let mut response = self.native.handle(cx, event);
        if event != Event::Close {
            response |= self.children.handle(cx, event);
        }
        if self.native.take_activation() {
            fire!(self.will_hide);
        }
        match event {
            Event::Push if !self.children.occludes(cx.coord()) => fire!(self.on_click),
            Event::Show => fire!(self.on_show),
            Event::Hide => fire!(self.on_hide),
            _ => (),
        }
        response
    }
}

impl_native!(Window: dyn NativeWindow);
impl_label!(Window);
impl_label_style!(Window);
impl_children!(Window);

impl Widget for Window {
    #[inline]
    fn id(&self) -> WidgetId {
        self.native.id()
    }

    #[inline]
    fn rect(&self) -> Rect {
        self.native.rect()
    }

    fn handle(&mut self, cx: &mut EventCx, event: Event) -> Response {
        self.handle_event(cx, event)
    }

    fn draw(&mut self, painter: &mut dyn Painter) {
        self.children.draw(painter);
    }
}
