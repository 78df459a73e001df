// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Grouping container

use crate::Children;
use tabby::draw::Painter;
use tabby::event::{Callback, Event, EventCx, Response};
use tabby::geom::Rect;
use tabby::toolkit::{NativeControl, NativeGroup, Toolkit};
use tabby::{Widget, WidgetId};

/// A container grouping widgets within a window
///
/// Events are dispatched to children (see [`Children`]) before the group's
/// own handlers run. A press is a click on the group only when it does not
/// land on a child.
pub struct Group {
    native: Box<dyn NativeGroup>,
    caption: String,
    children: Children,
    on_click: Callback<Group>,
    on_enter: Callback<Group>,
    on_leave: Callback<Group>,
    on_show: Callback<Group>,
    on_hide: Callback<Group>,
}

impl Group {
    /// Construct, with no children
    pub fn new(tk: &dyn Toolkit, rect: Rect, label: &str) -> Self {
        Group {
            native: tk.group(rect, label),
            caption: label.to_string(),
            children: Children::new(),
            on_click: Callback::new(),
            on_enter: Callback::new(),
            on_leave: Callback::new(),
            on_show: Callback::new(),
            on_hide: Callback::new(),
        }
    }

    /// Set the handler called on a press outside any child
    pub fn on_click(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.on_click.set(move |w, ()| f(w));
    }

    /// Set the handler called when the group is shown
    pub fn on_show(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.on_show.set(move |w, ()| f(w));
    }

    /// Set the handler called when the group is hidden
    pub fn on_hide(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.on_hide.set(move |w, ()| f(w));
    }

    /// Show the group and its children, flushing pending drawing
    pub fn show(&mut self) {
        self.native.show();
        let _ = self.handle_event(&mut EventCx::new(), Event::Show);
        self.native.flush();
    }

    /// Hide the group and its children
    pub fn hide(&mut self) {
        self.native.hide();
        let _ = self.handle_event(&mut EventCx::new(), Event::Hide);
    }

    fn handle_event(&mut self, cx: &mut EventCx, event: Event) -> Response {
        let response = self.native.handle(cx, event) | self.children.handle(cx, event);
        match event {
            Event::Push if !self.children.occludes(cx.coord()) => fire!(self.on_click),
            Event::Enter => fire!(self.on_enter),
            Event::Leave => fire!(self.on_leave),
            Event::Show => fire!(self.on_show),
            Event::Hide => fire!(self.on_hide),
            _ => (),
        }
        response
    }
}

impl_native!(Group: dyn NativeGroup);
impl_label!(Group);
impl_label_style!(Group);
impl_hover!(Group);
impl_children!(Group);

impl Widget for Group {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Button, CheckBox};
    use std::cell::Cell;
    use std::rc::Rc;
    use tabby_headless::Headless;

    #[test]
    fn click_is_occluded_by_children() {
        let tk = Headless::new();
        let mut group = Group::new(&tk, Rect::xywh(0, 0, 300, 200), "");
        group.add(Button::new(&tk, Rect::xywh(10, 10, 80, 25), "A"));
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        group.on_click(move |_| c.set(c.get() + 1));

        let mut cx = EventCx::at((20, 20));
        assert_eq!(group.handle(&mut cx, Event::Push), Response::Used);
        let _ = group.handle(&mut cx, Event::Release);
        assert_eq!(clicks.get(), 0);

        cx.set_coord((200, 150));
        let _ = group.handle(&mut cx, Event::Push);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn children_share_the_group() {
        let tk = Headless::new();
        let mut group = Group::new(&tk, Rect::xywh(0, 0, 300, 200), "");
        let button = group.add(Button::new(&tk, Rect::xywh(10, 10, 80, 25), "A"));
        let check = group.add(CheckBox::new(&tk, Rect::xywh(10, 40, 80, 25), "B"));
        assert_eq!(group.children().len(), 2);

        let id = group.child::<Button>(button).map(|b| b.id());
        assert_eq!(id.and_then(|id| tk.parent(id)), Some(group.id()));
        assert!(group.child::<Button>(check).is_none());
        if let Some(check) = group.child_mut::<CheckBox>(check) {
            check.check();
        }
        assert_eq!(group.child::<CheckBox>(check).map(|c| c.checked()), Some(true));
    }

    #[test]
    fn show_and_hide_reach_children() {
        let tk = Headless::new();
        let mut outer = Group::new(&tk, Rect::xywh(0, 0, 300, 200), "");
        let mut inner = Group::new(&tk, Rect::xywh(0, 0, 100, 100), "");
        let log = Rc::new(Cell::new(0));
        let l = log.clone();
        inner.on_show(move |_| l.set(l.get() + 1));
        let l = log.clone();
        inner.on_hide(move |_| l.set(l.get() + 10));
        outer.add(inner);

        outer.hide();
        assert!(!outer.native().visible());
        outer.show();
        assert_eq!(log.get(), 11);
    }

    #[test]
    fn show_is_synchronous() {
        let tk = Headless::new();
        let mut group = Group::new(&tk, Rect::xywh(0, 0, 300, 200), "");
        let shown = Rc::new(Cell::new(false));
        let s = shown.clone();
        group.on_show(move |_| s.set(true));
        group.hide();
        assert_eq!(tk.flushes(group.id()), 0);

        group.show();
        assert!(shown.get());
        assert!(group.native().visible());
        assert_eq!(tk.flushes(group.id()), 1);
    }
}
