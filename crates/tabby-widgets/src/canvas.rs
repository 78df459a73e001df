// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! OpenGL drawing surface

use crate::Children;
use tabby::cast::Conv;
use tabby::draw::{BlendFactor, Capability, ClearMask, Gl, Painter, Rgba};
use tabby::event::{Callback, Event, EventCx, Response, When};
use tabby::geom::{Coord, Rect, Size, Vec2};
use tabby::toolkit::{NativeControl, NativeGroup, NativeSurface, NativeWindow, Toolkit};
use tabby::{Widget, WidgetId};

/// Diameter of rasterized points
const POINT_SIZE: f32 = 7.0;

/// Scene drawing for a [`Canvas`]
///
/// Called once per frame with a cleared, prepared context: white background,
/// alpha blending, smoothed points of size 7 and black as the current colour.
pub trait Render {
    /// Draw the scene
    fn render(&mut self, gl: &mut dyn Gl);
}

impl<F: FnMut(&mut dyn Gl)> Render for F {
    #[inline]
    fn render(&mut self, gl: &mut dyn Gl) {
        self(gl)
    }
}

/// Map a pointer position on a surface of `size` to normalized coordinates
///
/// The surface spans `[-1, 1]` on both axes with `y` pointing up: the
/// top-left corner maps to `(-1, 1)` and the bottom-right to `(1, -1)`.
pub fn normalize(coord: Coord, size: Size) -> Vec2 {
    let p = Vec2::conv(coord);
    let s = Vec2::conv(size);
    Vec2(2.0 * (p.0 / s.0) - 1.0, 1.0 - 2.0 * (p.1 / s.1))
}

/// An OpenGL surface reporting pointer input in normalized coordinates
///
/// The canvas is a native sub-window: pointer positions it receives are
/// relative to its top-left corner. Pointer handlers receive the
/// [normalized](normalize) position; they do not fire while the pointer lies
/// over a child widget, or outside the surface.
///
/// A press on the surface is always claimed (even without a handler), so
/// the subsequent drag and release events are delivered here.
pub struct Canvas<R: Render> {
    native: Box<dyn NativeSurface>,
    caption: String,
    renderer: R,
    children: Children,
    armed: bool,
    on_show: Callback<Canvas<R>>,
    on_hide: Callback<Canvas<R>>,
    will_hide: Callback<Canvas<R>>,
    on_mouse_down: Callback<Canvas<R>, Vec2>,
    on_drag: Callback<Canvas<R>, Vec2>,
    on_mouse_up: Callback<Canvas<R>, Vec2>,
}

impl<R: Render + 'static> Canvas<R> {
    /// Construct with the given geometry, caption and scene
    pub fn new(tk: &dyn Toolkit, rect: Rect, label: &str, renderer: R) -> Self {
        Canvas {
            native: tk.gl_surface(rect, label),
            caption: label.to_string(),
            renderer,
            children: Children::new(),
            armed: false,
            on_show: Callback::new(),
            on_hide: Callback::new(),
            will_hide: Callback::new(),
            on_mouse_down: Callback::new(),
            on_drag: Callback::new(),
            on_mouse_up: Callback::new(),
        }
    }

    /// Access the native surface
    #[inline]
    pub fn native(&self) -> &dyn NativeSurface {
        &*self.native
    }

    /// Access the native surface mutably
    #[inline]
    pub fn native_mut(&mut self) -> &mut dyn NativeSurface {
        &mut *self.native
    }

    /// Access the scene
    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Access the scene mutably
    #[inline]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Access the children
    #[inline]
    pub fn children(&self) -> &Children {
        &self.children
    }

    /// Add a child widget, returning its index
    pub fn add<W: Widget>(&mut self, widget: W) -> usize {
        self.native.add_child(widget.id());
        self.children.push(Box::new(widget))
    }

    /// Access child `index` as a `W`
    #[inline]
    pub fn child<W: Widget>(&self, index: usize) -> Option<&W> {
        self.children.child(index)
    }

    /// Access child `index` as a `W`, mutably
    #[inline]
    pub fn child_mut<W: Widget>(&mut self, index: usize) -> Option<&mut W> {
        self.children.child_mut(index)
    }

    /// Set the handler called when the canvas is shown
    pub fn on_show(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.on_show.set(move |w, ()| f(w));
    }

    /// Set the handler called when the canvas is hidden
    pub fn on_hide(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.on_hide.set(move |w, ()| f(w));
    }

    /// Set the handler called when the user asks to close the canvas
    ///
    /// The handler replaces the native close behaviour: the canvas stays
    /// visible unless the handler hides it.
    pub fn will_hide(&mut self, f: impl Fn(&mut Self) + 'static) {
        self.will_hide.set(move |w, ()| f(w));
        if !self.armed {
            self.native.arm_callback(When::Release);
            self.armed = true;
        }
    }

    /// Set the handler called on a press, with the normalized position
    pub fn on_mouse_down(&mut self, f: impl Fn(&mut Self, Vec2) + 'static) {
        self.on_mouse_down.set(f);
    }

    /// Set the handler called on a drag, with the normalized position
    pub fn on_drag(&mut self, f: impl Fn(&mut Self, Vec2) + 'static) {
        self.on_drag.set(f);
    }

    /// Set the handler called on a release, with the normalized position
    pub fn on_mouse_up(&mut self, f: impl Fn(&mut Self, Vec2) + 'static) {
        self.on_mouse_up.set(f);
    }

    /// Show, blocking until the surface is mapped and drawn
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

    /// Draw a frame and present it
    pub fn redraw(&mut self) {
        let gl = self.native.gl();
        gl.clear_color(Rgba::WHITE);
        gl.clear(ClearMask::COLOR | ClearMask::DEPTH);
        gl.enable(Capability::Blend);
        gl.blend_func(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
        gl.enable(Capability::PointSmooth);
        gl.point_size(POINT_SIZE);
        gl.color(Rgba::BLACK);
        self.renderer.render(gl);
        self.native.swap_buffers();
    }

    fn handle_event(&mut self, cx: &mut EventCx, event: Event) -> Response {
        let response = self.native.handle(cx, event) | self.children.handle(cx, event);
        if self.native.take_activation() {
            fire!(self.will_hide);
        }
        match event {
            Event::Show => fire!(self.on_show),
            Event::Hide => fire!(self.on_hide),
            _ => (),
        }

        if self.children.occludes(cx.coord()) {
            return Response::Unused;
        }

        let pos = normalize(cx.coord(), self.native.rect().size);
        if pos.within(-1.0, 1.0) {
            match event {
                Event::Release => fire!(self.on_mouse_up, pos),
                Event::Push => {
                    fire!(self.on_mouse_down, pos);
                    return Response::Used;
                }
                Event::Drag => fire!(self.on_drag, pos),
                _ => (),
            }
        }
        response
    }
}

impl<R: Render + 'static> tabby::class::HasLabel for Canvas<R> {
    #[inline]
    fn label(&self) -> &str {
        &self.caption
    }

    fn set_label(&mut self, text: &str) {
        self.native.set_label(text);
        self.caption = text.to_string();
    }
}

impl<R: Render + 'static> Widget for Canvas<R> {
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
        self.redraw();
        self.children.draw(painter);
    }

    #[inline]
    fn is_surface(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Button;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use tabby::draw::Primitive;
    use tabby_headless::{GlCommand, Headless};

    type Points = Rc<RefCell<Vec<Vec2>>>;

    fn dots(points: Points) -> impl FnMut(&mut dyn Gl) {
        move |gl: &mut dyn Gl| gl.primitive(Primitive::Points, &points.borrow())
    }

    #[test]
    fn normalized_corners() {
        let size = Size(200, 100);
        assert_eq!(normalize(Coord(0, 0), size), Vec2(-1.0, 1.0));
        assert_eq!(normalize(Coord(200, 100), size), Vec2(1.0, -1.0));
        assert_eq!(normalize(Coord(100, 50), size), Vec2(0.0, 0.0));
        assert!(!normalize(Coord(201, 50), size).within(-1.0, 1.0));
    }

    #[test]
    fn pointer_handlers() {
        let tk = Headless::new();
        let mut canvas = Canvas::new(&tk, Rect::xywh(0, 0, 200, 100), "", |_: &mut dyn Gl| ());
        let log = Rc::new(RefCell::new(vec![]));
        let l = log.clone();
        canvas.on_mouse_down(move |_, p| l.borrow_mut().push(("down", p)));
        let l = log.clone();
        canvas.on_drag(move |_, p| l.borrow_mut().push(("drag", p)));
        let l = log.clone();
        canvas.on_mouse_up(move |_, p| l.borrow_mut().push(("up", p)));

        let mut cx = EventCx::at((100, 50));
        assert_eq!(canvas.handle(&mut cx, Event::Push), Response::Used);
        cx.set_coord((200, 0));
        let _ = canvas.handle(&mut cx, Event::Drag);
        // outside the surface
        cx.set_coord((300, 0));
        let _ = canvas.handle(&mut cx, Event::Release);

        assert_eq!(*log.borrow(), [
            ("down", Vec2(0.0, 0.0)),
            ("drag", Vec2(1.0, 1.0)),
        ]);
    }

    #[test]
    fn children_occlude() {
        let tk = Headless::new();
        let mut canvas = Canvas::new(&tk, Rect::xywh(0, 0, 200, 100), "", |_: &mut dyn Gl| ());
        canvas.add(Button::new(&tk, Rect::xywh(10, 10, 50, 20), "Clear"));
        let downs = Rc::new(Cell::new(0));
        let d = downs.clone();
        canvas.on_mouse_down(move |_, _| d.set(d.get() + 1));

        // the button claims the press
        let mut cx = EventCx::at((20, 15));
        assert_eq!(canvas.handle(&mut cx, Event::Push), Response::Unused);
        assert_eq!(downs.get(), 0);

        cx.set_coord((150, 80));
        assert_eq!(canvas.handle(&mut cx, Event::Push), Response::Used);
        assert_eq!(downs.get(), 1);
    }

    #[test]
    fn frame_sequence() {
        let tk = Headless::new();
        let points: Points = Rc::default();
        let mut canvas = Canvas::new(&tk, Rect::xywh(0, 0, 200, 100), "", dots(points.clone()));
        points.borrow_mut().push(Vec2(0.5, -0.5));
        canvas.redraw();

        let frames = tk.frames(canvas.id());
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0][..7], [
            GlCommand::ClearColor(Rgba::WHITE),
            GlCommand::Clear(ClearMask::COLOR | ClearMask::DEPTH),
            GlCommand::Enable(Capability::Blend),
            GlCommand::BlendFunc(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha),
            GlCommand::Enable(Capability::PointSmooth),
            GlCommand::PointSize(7.0),
            GlCommand::Color(Rgba::BLACK),
        ]);
        assert_eq!(frames[0][7..], [
            GlCommand::Begin(Primitive::Points),
            GlCommand::Vertex(Vec2(0.5, -0.5)),
            GlCommand::End,
        ]);
    }

    #[test]
    fn show_is_synchronous() {
        let tk = Headless::new();
        let mut canvas = Canvas::new(&tk, Rect::xywh(0, 0, 200, 100), "", |_: &mut dyn Gl| ());
        let shown = Rc::new(Cell::new(false));
        let s = shown.clone();
        canvas.on_show(move |_| s.set(true));
        canvas.show();
        assert!(shown.get());
        assert!(tk.exposed(canvas.id()));
        assert_eq!(tk.flushes(canvas.id()), 1);
        assert!(canvas.native().visible());
    }

    #[test]
    fn will_hide_replaces_close() {
        let tk = Headless::new();
        let mut canvas = Canvas::new(&tk, Rect::xywh(0, 0, 200, 100), "", |_: &mut dyn Gl| ());
        canvas.show();
        let asked = Rc::new(Cell::new(0));
        let a = asked.clone();
        canvas.will_hide(move |_| a.set(a.get() + 1));
        let _ = canvas.handle(&mut EventCx::new(), Event::Close);
        assert_eq!(asked.get(), 1);
        assert!(canvas.native().visible());
    }
}
