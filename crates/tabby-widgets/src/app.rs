// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Application root

use crate::Window;
use log::info;
use tabby::config::{Config, Options};
use tabby::draw::Painter;
use tabby::event::{Event, EventCx, Response};
use tabby::geom::Rect;
use tabby::toolkit::{EventSink, Toolkit};
use tabby::{Error, Result, Widget, WidgetId};

/// The windows of an application
///
/// Routes events from the toolkit's event loop to windows by identifier.
#[derive(Default)]
pub struct WindowList {
    windows: Vec<Window>,
}

impl WindowList {
    /// Number of windows
    #[inline]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// True when there are no windows
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Find window `id`
    pub fn get(&self, id: WidgetId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id() == id)
    }

    /// Find window `id`, mutably
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id() == id)
    }

    /// Iterate over windows
    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }
}

impl EventSink for WindowList {
    fn handle(&mut self, window: WidgetId, cx: &mut EventCx, event: Event) -> Result<Response> {
        let window = self.get_mut(window).ok_or(Error::NoWindow(window))?;
        Ok(window.handle(cx, event))
    }

    fn draw(&mut self, window: WidgetId, painter: &mut dyn Painter) -> Result<()> {
        let window = self.get_mut(window).ok_or(Error::NoWindow(window))?;
        window.draw(painter);
        Ok(())
    }
}

/// The application root
///
/// Owns the toolkit, the configuration and the application's windows. The
/// configuration is applied to the toolkit once, at construction, and passed
/// to every window created through [`Application::window`].
pub struct Application<T: Toolkit> {
    toolkit: T,
    config: Config,
    windows: WindowList,
}

impl<T: Toolkit> Application<T> {
    /// Construct with the given configuration
    pub fn new(toolkit: T, config: Config) -> Self {
        toolkit.apply_config(&config);
        Application {
            toolkit,
            config,
            windows: WindowList::default(),
        }
    }

    /// Construct with the default configuration, as overridden by the
    /// environment
    ///
    /// See [`Options::from_env`].
    pub fn from_env(toolkit: T) -> Self {
        let config = Options::from_env().config();
        Self::new(toolkit, config)
    }

    /// Access the toolkit
    #[inline]
    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    /// Access the configuration
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Construct a hidden window using this application's configuration
    ///
    /// The window must be [added](Self::add) to receive events.
    pub fn window(&self, rect: Rect, title: &str) -> Window {
        Window::new(&self.toolkit, &self.config, rect, title)
    }

    /// Add a window, returning its identifier
    pub fn add(&mut self, window: Window) -> WidgetId {
        let id = window.id();
        log::debug!("Application::add: window {id}");
        self.windows.windows.push(window);
        id
    }

    /// Access the windows
    #[inline]
    pub fn windows(&self) -> &WindowList {
        &self.windows
    }

    /// Access the windows mutably
    #[inline]
    pub fn windows_mut(&mut self) -> &mut WindowList {
        &mut self.windows
    }

    /// Run the toolkit's event loop
    ///
    /// Returns when the toolkit's loop ends, usually once the last window is
    /// hidden.
    pub fn run(&mut self) -> Result<()> {
        info!("Application::run: running with {} window(s)", self.windows.len());
        self.toolkit.run(&mut self.windows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Button, HexagonButton};
    use std::cell::Cell;
    use std::rc::Rc;
    use tabby::class::HasLabel;
    use tabby::config::Theme;
    use tabby_headless::{Headless, PaintOp};

    #[test]
    fn config_is_applied_once() {
        let tk = Headless::new();
        let config = Config::default().with_theme(Theme::Dark);
        let app = Application::new(tk.clone(), config.clone());
        assert_eq!(tk.config(), Some(config));
        assert!(app.windows().is_empty());
    }

    #[test]
    fn run_routes_events() {
        let tk = Headless::new();
        let mut app = Application::new(tk.clone(), Config::default());
        let mut window = app.window(Rect::xywh(0, 0, 300, 200), "Main");
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        let mut button = Button::new(&tk, Rect::xywh(10, 10, 80, 25), "Go");
        button.on_click(move |b| {
            c.set(c.get() + 1);
            b.set_label("Gone");
        });
        let index = window.add(button);
        window.show();
        let id = app.add(window);

        tk.push_event(id, EventCx::at((20, 20)), Event::Push);
        tk.push_event(id, EventCx::at((20, 20)), Event::Release);
        tk.push_event(id, EventCx::new(), Event::Close);
        assert!(app.run().is_ok());

        assert_eq!(clicks.get(), 1);
        let window = app.windows().get(id);
        assert!(window.is_some_and(|w| !w.visible()));
        let label = window.and_then(|w| w.child::<Button>(index)).map(|b| b.label().to_string());
        assert_eq!(label.as_deref(), Some("Gone"));
    }

    #[test]
    fn run_draws_custom_widgets() {
        let tk = Headless::new();
        let mut app = Application::new(tk.clone(), Config::default());
        let mut window = app.window(Rect::xywh(0, 0, 300, 200), "Main");
        window.add(HexagonButton::new(&tk, Rect::xywh(10, 10, 60, 60), "H"));
        let id = app.add(window);

        tk.push_draw(id);
        assert!(app.run().is_ok());
        let ops = tk.paint_ops();
        assert_eq!(ops.len(), 5);
        assert!(matches!(&ops[4], PaintOp::Text { text, .. } if text == "H"));
    }

    #[test]
    fn unknown_window() {
        let tk = Headless::new();
        let mut app = Application::new(tk.clone(), Config::default());
        tk.push_event(WidgetId::new(1234), EventCx::new(), Event::Show);
        assert!(matches!(app.run(), Err(Error::NoWindow(id)) if id == WidgetId::new(1234)));
    }
}
