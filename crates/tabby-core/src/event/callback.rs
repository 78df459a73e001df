// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Handler slots

use std::fmt;
use std::rc::Rc;

/// A slot holding at most one event handler
///
/// `W` is the widget type passed to the handler as the sender and `A` the
/// payload (e.g. normalized coordinates for pointer events on a canvas).
///
/// Setting a handler replaces any previous one; handlers are never chained.
/// Handlers are reference-counted so that a handler may safely re-subscribe
/// (or clear) its own slot while running: the running closure stays alive
/// until it returns.
///
/// Invocation is a two-step affair since the slot is usually owned by the
/// widget passed to the handler:
///
/// ```ignore
/// if let Some(f) = self.on_click.get() {
///     f(self, ());
/// }
/// ```
pub struct Callback<W: ?Sized, A = ()> {
    f: Option<Rc<dyn Fn(&mut W, A)>>,
}

impl<W: ?Sized, A> Default for Callback<W, A> {
    #[inline]
    fn default() -> Self {
        Callback { f: None }
    }
}

impl<W: ?Sized, A> Clone for Callback<W, A> {
    #[inline]
    fn clone(&self) -> Self {
        Callback { f: self.f.clone() }
    }
}

impl<W: ?Sized, A> fmt::Debug for Callback<W, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.f {
            Some(_) => f.write_str("Callback(Some)"),
            None => f.write_str("Callback(None)"),
        }
    }
}

impl<W: ?Sized, A> Callback<W, A> {
    /// Construct an empty slot
    #[inline]
    pub const fn new() -> Self {
        Callback { f: None }
    }

    /// Set the handler, replacing any previous one
    #[inline]
    pub fn set<F>(&mut self, f: F)
    where
        F: Fn(&mut W, A) + 'static,
    {
        self.f = Some(Rc::new(f));
    }

    /// Remove the handler
    #[inline]
    pub fn clear(&mut self) {
        self.f = None;
    }

    /// True if a handler is set
    #[inline]
    pub fn is_set(&self) -> bool {
        self.f.is_some()
    }

    /// Get a reference-counted copy of the handler, if set
    #[inline]
    pub fn get(&self) -> Option<Rc<dyn Fn(&mut W, A)>> {
        self.f.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Sender {
        slot: Callback<Sender>,
        hits: Rc<Cell<u32>>,
    }

    #[test]
    fn last_write_wins() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut slot: Callback<(), ()> = Callback::new();
        let f1 = first.clone();
        slot.set(move |_, _| f1.set(f1.get() + 1));
        let f2 = second.clone();
        slot.set(move |_, _| f2.set(f2.get() + 1));

        if let Some(f) = slot.get() {
            f(&mut (), ());
        }
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn handler_may_replace_itself() {
        let hits = Rc::new(Cell::new(0));
        let mut sender = Sender {
            slot: Callback::new(),
            hits: hits.clone(),
        };
        sender.slot.set(|s: &mut Sender, _| {
            s.hits.set(s.hits.get() + 1);
            s.slot.clear();
        });

        for _ in 0..3 {
            if let Some(f) = sender.slot.get() {
                f(&mut sender, ());
            }
        }
        assert_eq!(hits.get(), 1);
        assert!(!sender.slot.is_set());
    }
}
