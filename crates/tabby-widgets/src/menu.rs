// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Menu bar

use linear_map::LinearMap;
use tabby::class::HasLabel;
use tabby::event::{Callback, Event, EventCx, Response, When};
use tabby::geom::Rect;
use tabby::toolkit::{MenuFlags, NativeControl, NativeMenu, Toolkit};
use tabby::{Widget, WidgetId};

/// Appended to every path segment after the first
const PADDING: &str = "            ";

/// Height of the menu bar
const BAR_HEIGHT: i32 = 25;

/// Pad a `/`-separated menu path for display
///
/// The first segment is followed by `/`; each later segment is followed by
/// [`PADDING`], with `/` between later segments:
///
/// ```
/// # use tabby_widgets::add_padding;
/// assert_eq!(add_padding("File/Open"), "File/Open            ");
/// assert_eq!(add_padding("A/B/C"), "A/B            /C            ");
/// ```
pub fn add_padding(path: &str) -> String {
    let mut tokens = path.split('/');
    let mut result = tokens.next().unwrap_or_default().to_string();
    result.push('/');
    for (i, token) in tokens.enumerate() {
        if i > 0 {
            result.push('/');
        }
        result.push_str(token);
        result.push_str(PADDING);
    }
    result
}

/// A logical menu entry
///
/// The caption is a `/`-separated path: all but the last segment name
/// submenus. Items do not render themselves; a [`Menu`] registers them with
/// the native menu bar.
#[derive(Debug, Default)]
pub struct MenuItem {
    caption: String,
    on_click: Callback<MenuItem>,
}

impl MenuItem {
    /// Construct with the given path
    pub fn new(caption: &str) -> Self {
        MenuItem {
            caption: caption.to_string(),
            on_click: Callback::new(),
        }
    }

    /// Set the handler called when the item is picked
    pub fn on_click(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.on_click.set(move |w, ()| f(w));
    }

    fn click(&mut self) {
        fire!(self.on_click);
    }
}

impl HasLabel for MenuItem {
    #[inline]
    fn label(&self) -> &str {
        &self.caption
    }

    /// Set the caption
    ///
    /// This does not affect an item already added to a menu.
    fn set_label(&mut self, text: &str) {
        self.caption = text.to_string();
    }
}

#[derive(Debug)]
struct Entry {
    path: String,
    item: MenuItem,
}

/// A menu bar spanning the top of a window
///
/// All items share the native control's single callback. On activation, the
/// index of the picked entry is looked up to find the item whose handler is
/// called; indices not belonging to an item (e.g. submenu headers) are
/// ignored.
///
/// The native menu may shift indices of existing entries when an item is
/// inserted into an earlier submenu, so the lookup table is rebuilt after
/// every registration. Registering the same path twice leaves clicks with the
/// first item.
pub struct Menu {
    native: Box<dyn NativeMenu>,
    entries: Vec<Entry>,
    index: LinearMap<usize, usize>,
}

impl Menu {
    /// Construct for a window of the given width
    ///
    /// The bar extends two pixels beyond each side of the window, hiding its
    /// border.
    pub fn new(tk: &dyn Toolkit, width: i32) -> Self {
        let mut native = tk.menu_bar(Rect::xywh(-2, 0, width + 4, BAR_HEIGHT));
        native.arm_callback(When::Release);
        Menu {
            native,
            entries: vec![],
            index: LinearMap::new(),
        }
    }

    fn register(&mut self, item: MenuItem, flags: MenuFlags) -> usize {
        let path = add_padding(&item.caption);
        let index = self.native.add(&path, flags);
        log::debug!("Menu::register: {:?} at {index}", item.caption);
        self.entries.push(Entry { path, item });
        self.reindex();
        index
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (pos, entry) in self.entries.iter().enumerate() {
            if let Some(index) = self.native.find_index(&entry.path) {
                self.index.entry(index).or_insert(pos);
            }
        }
    }

    /// Add an item, returning its native index
    pub fn add_item(&mut self, item: MenuItem) -> usize {
        self.register(item, MenuFlags::empty())
    }

    /// Add an item followed by a divider, returning its native index
    pub fn add_item_with_divider(&mut self, item: MenuItem) -> usize {
        self.register(item, MenuFlags::DIVIDER)
    }

    /// Number of items added
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no items have been added
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The item at native index `index`
    pub fn item(&self, index: usize) -> Option<&MenuItem> {
        let pos = *self.index.get(&index)?;
        Some(&self.entries[pos].item)
    }

    /// The item at native index `index`, mutably
    pub fn item_mut(&mut self, index: usize) -> Option<&mut MenuItem> {
        let pos = *self.index.get(&index)?;
        Some(&mut self.entries[pos].item)
    }

    /// Access the native control
    #[inline]
    pub fn native(&self) -> &dyn NativeMenu {
        &*self.native
    }

    /// Access the native control mutably
    ///
    /// Entries added through this are not known to the wrapper.
    #[inline]
    pub fn native_mut(&mut self) -> &mut dyn NativeMenu {
        &mut *self.native
    }

    fn activate(&mut self) {
        let Some(index) = self.native.value() else {
            return;
        };
        match self.item_mut(index) {
            Some(item) => item.click(),
            None => log::trace!("Menu::activate: no item at {index}"),
        }
    }
}

impl Widget for Menu {
    #[inline]
    fn id(&self) -> WidgetId {
        self.native.id()
    }

    #[inline]
    fn rect(&self) -> Rect {
        self.native.rect()
    }

    fn handle(&mut self, cx: &mut EventCx, event: Event) -> Response {
        let response = self.native.handle(cx, event);
        if self.native.take_activation() {
            self.activate();
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tabby_headless::Headless;

    fn counted(caption: &str, count: &Rc<Cell<u32>>) -> MenuItem {
        let mut item = MenuItem::new(caption);
        let c = count.clone();
        item.on_click(move |_| c.set(c.get() + 1));
        item
    }

    fn pick(tk: &Headless, menu: &mut Menu, index: usize) {
        tk.push_popup(Some(index));
        let mut cx = EventCx::at((10, 10));
        assert_eq!(menu.handle(&mut cx, Event::Push), Response::Used);
    }

    #[test]
    fn padding() {
        assert_eq!(add_padding("File/Open"), "File/Open            ");
        assert_eq!(add_padding("A/B/C"), "A/B            /C            ");
        assert_eq!(add_padding("Quit"), "Quit/");
        assert_eq!(add_padding(""), "/");
    }

    #[test]
    fn bar_geometry() {
        let tk = Headless::new();
        let menu = Menu::new(&tk, 400);
        assert_eq!(menu.rect(), Rect::xywh(-2, 0, 404, 25));
        assert!(menu.is_empty());
    }

    #[test]
    fn dispatch_to_second_item() {
        let tk = Headless::new();
        let mut menu = Menu::new(&tk, 400);
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        menu.add_item(counted("File/Open", &first));
        let index = menu.add_item_with_divider(counted("File/Save", &second));

        pick(&tk, &mut menu, index);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert_eq!(menu.item(index).map(|item| item.label()), Some("File/Save"));
    }

    #[test]
    fn indices_follow_shifts() {
        let tk = Headless::new();
        let mut menu = Menu::new(&tk, 400);
        let undo = Rc::new(Cell::new(0));
        let quit = Rc::new(Cell::new(0));
        menu.add_item(MenuItem::new("File/Open"));
        let stale = menu.add_item(counted("Edit/Undo", &undo));
        // Inserting into File shifts Undo
        let quit_index = menu.add_item(counted("File/Quit", &quit));
        assert_eq!(quit_index, 2);
        let current = menu.native().find_index(&add_padding("Edit/Undo"));
        assert_eq!(current, Some(stale + 1));

        pick(&tk, &mut menu, stale + 1);
        assert_eq!(undo.get(), 1);
        assert_eq!(quit.get(), 0);
        pick(&tk, &mut menu, quit_index);
        assert_eq!(quit.get(), 1);
    }

    #[test]
    fn duplicate_path_keeps_first_item() {
        let tk = Headless::new();
        let mut menu = Menu::new(&tk, 400);
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let a = menu.add_item(counted("File/Open", &first));
        let b = menu.add_item(counted("File/Open", &second));
        assert_eq!(a, b);
        assert_eq!(menu.len(), 2);

        pick(&tk, &mut menu, a);
        assert_eq!((first.get(), second.get()), (1, 0));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let tk = Headless::new();
        let mut menu = Menu::new(&tk, 400);
        let count = Rc::new(Cell::new(0));
        menu.add_item(counted("File/Open", &count));
        let foreign = menu.native_mut().add("Help/About", MenuFlags::empty());

        pick(&tk, &mut menu, foreign);
        assert_eq!(menu.native().value(), Some(foreign));
        assert_eq!(count.get(), 0);
        assert!(menu.item(foreign).is_none());
    }
}
