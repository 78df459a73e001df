// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Menu bar

use crate::control::Control;
use crate::state::Shared;
use smallvec::SmallVec;
use tabby::event::{Event, EventCx, Response};
use tabby::geom::Rect;
use tabby::toolkit::{MenuFlags, NativeMenu};

/// Split `path` into submenu names and the item label
fn split_path(path: &str) -> (SmallVec<[&str; 4]>, &str) {
    match path.rsplit_once('/') {
        Some((prefix, last)) => (prefix.split('/').collect(), last),
        None => (SmallVec::new(), path),
    }
}

/// An entry of the flat item table
///
/// A submenu header is followed by its items, then a terminator. The table
/// itself ends with a terminator.
#[derive(Clone, Debug, PartialEq)]
struct Entry {
    label: Option<String>,
    flags: MenuFlags,
}

impl Entry {
    fn item(label: &str, flags: MenuFlags) -> Self {
        Entry {
            label: Some(label.to_string()),
            flags,
        }
    }

    fn terminator() -> Self {
        Entry {
            label: None,
            flags: MenuFlags::empty(),
        }
    }

    fn is_submenu(&self) -> bool {
        self.flags.contains(MenuFlags::SUBMENU)
    }

    fn is(&self, label: &str) -> bool {
        self.label.as_deref() == Some(label)
    }
}

/// A menu bar over a flat item table
///
/// Paths are split on `/`; every segment but the last names a submenu, created
/// on demand. Inserting into a submenu shifts the indices of all later
/// entries, so indices returned by [`NativeMenu::add`] may go stale.
///
/// A press takes the pick from the scripted popup queue; picking an active
/// item activates the callback.
#[derive(Debug)]
pub(crate) struct MenuBar {
    control: Control,
    entries: Vec<Entry>,
    value: Option<usize>,
}

impl MenuBar {
    pub fn new(state: &Shared, rect: Rect) -> Self {
        MenuBar {
            control: Control::new(state, "MenuBar", rect, ""),
            entries: vec![Entry::terminator()],
            value: None,
        }
    }

    /// Index of the terminator of the level starting at `start`
    fn level_end(&self, start: usize) -> usize {
        let mut i = start;
        while self.entries[i].label.is_some() {
            if self.entries[i].is_submenu() {
                i = self.level_end(i + 1);
            }
            i += 1;
        }
        i
    }

    /// Find the entry labelled `label` on the level starting at `start`
    fn find_at_level(&self, start: usize, label: &str, submenu: Option<bool>) -> Option<usize> {
        let mut i = start;
        while self.entries[i].label.is_some() {
            let entry = &self.entries[i];
            if entry.is(label) && submenu.is_none_or(|s| s == entry.is_submenu()) {
                return Some(i);
            }
            if entry.is_submenu() {
                i = self.level_end(i + 1);
            }
            i += 1;
        }
        None
    }

    fn handle_event(&mut self, cx: &mut EventCx, event: Event) -> Response {
        match event {
            Event::Push if self.control.inside(cx) => {
                let pick = self.control.state.borrow_mut().popups.pop_front();
                log::trace!("MenuBar::handle_event: popup pick {pick:?}");
                if let Some(Some(index)) = pick {
                    self.pick(index);
                }
                Response::Used
            }
            _ => Response::Unused,
        }
    }

    fn pick(&mut self, index: usize) {
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        if entry.label.is_none()
            || entry.is_submenu()
            || entry.flags.intersects(MenuFlags::INACTIVE | MenuFlags::INVISIBLE)
        {
            return;
        }
        if entry.flags.contains(MenuFlags::TOGGLE) {
            entry.flags.toggle(MenuFlags::VALUE);
        }
        self.value = Some(index);
        self.control.activate_if(|_| true);
    }
}

impl_native_control!(MenuBar);

impl NativeMenu for MenuBar {
    fn add(&mut self, path: &str, flags: MenuFlags) -> usize {
        let (submenus, last) = split_path(path);

        let mut start = 0;
        for name in submenus {
            start = match self.find_at_level(start, name, Some(true)) {
                Some(header) => header + 1,
                None => {
                    let end = self.level_end(start);
                    self.entries.insert(end, Entry::item(name, MenuFlags::SUBMENU));
                    self.entries.insert(end + 1, Entry::terminator());
                    end + 1
                }
            };
        }

        let index = match self.find_at_level(start, last, Some(false)) {
            Some(index) => {
                self.entries[index].flags = flags;
                index
            }
            None => {
                let end = self.level_end(start);
                self.entries.insert(end, Entry::item(last, flags));
                end
            }
        };
        log::debug!("MenuBar::add: {path:?} at {index}");
        self.control.redraw();
        index
    }

    fn value(&self) -> Option<usize> {
        self.value
    }

    fn find_index(&self, path: &str) -> Option<usize> {
        let (submenus, last) = split_path(path);
        let mut start = 0;
        for name in submenus {
            start = self.find_at_level(start, name, Some(true))? + 1;
        }
        self.find_at_level(start, last, None)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabby::event::When;
    use tabby::toolkit::NativeControl;

    fn menu() -> MenuBar {
        MenuBar::new(&Shared::default(), Rect::xywh(0, 0, 200, 25))
    }

    #[test]
    fn flat_table_layout() {
        let mut menu = menu();
        // [File, Open, term, term]
        assert_eq!(menu.add("File/Open", MenuFlags::empty()), 1);
        // [File, Open, Save, term, term]
        assert_eq!(menu.add("File/Save", MenuFlags::empty()), 2);
        // [File, Open, Save, term, Edit, Undo, term, term]
        assert_eq!(menu.add("Edit/Undo", MenuFlags::empty()), 5);
        assert_eq!(menu.len(), 8);

        // Inserting into File shifts Edit's entries
        assert_eq!(menu.add("File/Quit", MenuFlags::empty()), 3);
        assert_eq!(menu.find_index("Edit/Undo"), Some(6));
        assert_eq!(menu.find_index("Edit"), Some(5));
        assert_eq!(menu.find_index("Edit/Redo"), None);

        // Re-adding an existing path keeps its index
        assert_eq!(menu.add("File/Save", MenuFlags::DIVIDER), 2);
        assert_eq!(menu.entries[2].flags, MenuFlags::DIVIDER);
    }

    #[test]
    fn nested_submenus() {
        let mut menu = menu();
        assert_eq!(menu.add("A/B/C", MenuFlags::empty()), 2);
        assert_eq!(menu.add("A/D", MenuFlags::empty()), 4);
        assert_eq!(menu.find_index("A/B/C"), Some(2));
        // [A, B, C, term, D, term, term]
        assert_eq!(menu.len(), 7);
    }

    #[test]
    fn pick_activates() {
        let state = Shared::default();
        let mut menu = MenuBar::new(&state, Rect::xywh(0, 0, 200, 25));
        menu.add("File/Open", MenuFlags::empty());
        menu.add("File/Gone", MenuFlags::INACTIVE);
        menu.arm_callback(When::Release);

        let mut cx = EventCx::at((10, 10));
        state.borrow_mut().popups.extend([Some(0), Some(2), Some(1)]);
        let _ = menu.handle(&mut cx, Event::Push);
        assert!(!menu.take_activation());
        let _ = menu.handle(&mut cx, Event::Push);
        assert!(!menu.take_activation());
        let _ = menu.handle(&mut cx, Event::Push);
        assert!(menu.take_activation());
        assert_eq!(menu.value(), Some(1));
    }
}
