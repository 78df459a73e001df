// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Widget macros
//!
//! Wrappers share their shape: a `native: Box<dyn Native…>` handle, a mirrored
//! `caption: String` and a set of [`Callback`](tabby::event::Callback) slots.
//! These macros implement the repetitive parts of that shape.

/// Invoke the handler in slot `self.$slot`, if any
///
/// The payload defaults to `()`.
macro_rules! fire {
    ($self:ident . $slot:ident) => {
        fire!($self.$slot, ())
    };
    ($self:ident . $slot:ident, $arg:expr) => {
        if let Some(f) = $self.$slot.get() {
            f($self, $arg);
        }
    };
}

/// Implement `native` / `native_mut` accessors for field `native: Box<$native>`
macro_rules! impl_native {
    ($ty:ty: $native:ty) => {
        impl $ty {
            /// Access the native control
            #[inline]
            pub fn native(&self) -> &$native {
                &*self.native
            }

            /// Access the native control mutably
            ///
            /// Changes made through this bypass the wrapper: the caption
            /// mirror is not updated and no handler fires.
            #[inline]
            pub fn native_mut(&mut self) -> &mut $native {
                &mut *self.native
            }

            /// Try to take keyboard focus
            #[inline]
            pub fn take_focus(&mut self, cx: &mut tabby::event::EventCx) -> bool {
                self.native.take_focus(cx)
            }
        }
    };
}

/// Implement `HasLabel` over fields `native` and `caption`
macro_rules! impl_label {
    ($ty:ty) => {
        impl tabby::class::HasLabel for $ty {
            #[inline]
            fn label(&self) -> &str {
                &self.caption
            }

            fn set_label(&mut self, text: &str) {
                self.native.set_label(text);
                self.caption = text.to_string();
            }
        }
    };
}

/// Implement `HasLabelStyle` over field `native`
///
/// Setters request a redraw of the parent container.
macro_rules! impl_label_style {
    ($ty:ty) => {
        impl tabby::class::HasLabelStyle for $ty {
            fn align(&self) -> tabby::draw::Align {
                self.native.align()
            }

            fn set_align(&mut self, align: tabby::draw::Align) {
                self.native.set_align(align);
                self.native.redraw_parent();
            }

            fn label_size(&self) -> i32 {
                self.native.label_size()
            }

            fn set_label_size(&mut self, size: i32) {
                self.native.set_label_size(size);
                self.native.redraw_parent();
            }

            fn label_color(&self) -> tabby::draw::Rgb8 {
                self.native.label_color()
            }

            fn set_label_color(&mut self, color: tabby::draw::Rgb8) {
                self.native.set_label_color(color);
                self.native.redraw_parent();
            }

            fn label_font(&self) -> tabby::draw::Font {
                self.native.label_font()
            }

            fn set_label_font(&mut self, font: tabby::draw::Font) {
                self.native.set_label_font(font);
                self.native.redraw_parent();
            }
        }
    };
}

/// Implement `on_enter` / `on_leave` over slots of the same name
macro_rules! impl_hover {
    ($ty:ty) => {
        impl $ty {
            /// Set the handler called when the pointer enters
            pub fn on_enter(&mut self, f: impl Fn(&mut Self) + 'static) {
                self.on_enter.set(move |w, ()| f(w));
            }

            /// Set the handler called when the pointer leaves
            pub fn on_leave(&mut self, f: impl Fn(&mut Self) + 'static) {
                self.on_leave.set(move |w, ()| f(w));
            }
        }
    };
}

/// Implement `Widget` for a wrapper with field `native` and method
/// `handle_event`
macro_rules! impl_widget {
    ($ty:ty) => {
        impl tabby::Widget for $ty {
            #[inline]
            fn id(&self) -> tabby::WidgetId {
                self.native.id()
            }

            #[inline]
            fn rect(&self) -> tabby::geom::Rect {
                self.native.rect()
            }

            fn handle(
                &mut self,
                cx: &mut tabby::event::EventCx,
                event: tabby::event::Event,
            ) -> tabby::event::Response {
                self.handle_event(cx, event)
            }
        }
    };
}

/// Implement child access over fields `native` (a group) and `children`
macro_rules! impl_children {
    ($ty:ty) => {
        impl $ty {
            /// Add a child widget, returning its index
            pub fn add<W: tabby::Widget>(&mut self, widget: W) -> usize {
                self.native.add_child(tabby::Widget::id(&widget));
                self.children.push(Box::new(widget))
            }

            /// Access the children
            #[inline]
            pub fn children(&self) -> &$crate::Children {
                &self.children
            }

            /// Access child `index` as a `W`
            #[inline]
            pub fn child<W: tabby::Widget>(&self, index: usize) -> Option<&W> {
                self.children.child(index)
            }

            /// Access child `index` as a `W`, mutably
            #[inline]
            pub fn child_mut<W: tabby::Widget>(&mut self, index: usize) -> Option<&mut W> {
                self.children.child_mut(index)
            }
        }
    };
}
