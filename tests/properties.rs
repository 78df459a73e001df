//! Behaviour of the widget layer as seen by an application

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tabby::config::Config;
use tabby::draw::{Gl, Primitive};
use tabby::headless::{GlCommand, Headless};
use tabby::prelude::*;
use tabby::toolkit::NativeInput;
use tabby::widgets::*;

fn init() -> (Headless, Application<Headless>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let tk = Headless::new();
    let app = Application::new(tk.clone(), Config::default());
    (tk, app)
}

fn counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
    let c = Rc::new(Cell::new(0));
    (c.clone(), c)
}

fn label_round_trip(w: &mut impl HasLabel) {
    for text in ["", "Hello", "ünïcödé / text"] {
        w.set_label(text);
        assert_eq!(w.label(), text);
    }
}

/// Draws one point per recorded pointer position
struct Dots(Rc<RefCell<Vec<Vec2>>>);

impl Render for Dots {
    fn render(&mut self, gl: &mut dyn Gl) {
        gl.primitive(Primitive::Points, &self.0.borrow());
    }
}

#[test]
fn labels_are_mirrored() {
    let (tk, app) = init();
    let rect = Rect::xywh(0, 0, 100, 25);
    label_round_trip(&mut CheckBox::new(&tk, rect, "a"));
    label_round_trip(&mut ListBox::new(&tk, rect, "b"));
    label_round_trip(&mut IntInput::new(&tk, rect, "c"));
    label_round_trip(&mut TextBox::new(&tk, rect, "d"));
    label_round_trip(&mut app.window(rect, "e"));
    label_round_trip(&mut MenuItem::new("File/Open"));
}

#[test]
fn second_subscription_wins() {
    let (tk, _) = init();
    let mut button = HexagonButton::new(&tk, Rect::xywh(0, 0, 60, 60), "H");
    let (first, f) = counter();
    button.on_click(move |_| f.set(f.get() + 1));
    let (second, s) = counter();
    button.on_click(move |_| s.set(s.get() + 1));

    let mut cx = EventCx::at((30, 30));
    let _ = button.handle(&mut cx, Event::Push);
    let _ = button.handle(&mut cx, Event::Release);
    assert_eq!((first.get(), second.get()), (0, 1));
}

#[test]
fn canvas_in_window() {
    let (tk, mut app) = init();
    let mut window = app.window(Rect::xywh(0, 0, 400, 300), "Paint");

    let points = Rc::new(RefCell::new(vec![]));
    let mut canvas = Canvas::new(&tk, Rect::xywh(100, 100, 200, 100), "", Dots(points.clone()));
    canvas.add(Button::new(&tk, Rect::xywh(0, 0, 40, 20), "Clear"));
    let p = points.clone();
    canvas.on_mouse_down(move |_, pos| p.borrow_mut().push(pos));
    let p = points.clone();
    canvas.on_drag(move |_, pos| p.borrow_mut().push(pos));
    let index = window.add(canvas);
    window.show();
    let id = app.add(window);

    // The canvas centre, in window coordinates
    tk.push_event(id, EventCx::at((200, 150)), Event::Push);
    tk.push_event(id, EventCx::at((300, 100)), Event::Drag);
    tk.push_event(id, EventCx::at((300, 100)), Event::Release);
    // Over the canvas's button
    tk.push_event(id, EventCx::at((110, 110)), Event::Push);
    tk.push_event(id, EventCx::at((110, 110)), Event::Release);
    tk.push_draw(id);
    assert!(app.run().is_ok());

    assert_eq!(*points.borrow(), [Vec2(0.0, 0.0), Vec2(1.0, 1.0)]);

    let canvas = app.windows().get(id).and_then(|w| w.child::<Canvas<Dots>>(index));
    let frames = canvas.map(|c| tk.frames(c.id())).unwrap_or_default();
    assert_eq!(frames.len(), 1);
    let vertices: Vec<_> = frames[0]
        .iter()
        .filter(|cmd| matches!(cmd, GlCommand::Vertex(_)))
        .collect();
    assert_eq!(vertices.len(), 2);
}

#[test]
fn menu_dispatches_by_index() {
    let (tk, mut app) = init();
    let mut window = app.window(Rect::xywh(0, 0, 400, 300), "Menu");
    let mut menu = Menu::new(&tk, 400);
    let (opened, o) = counter();
    let mut open = MenuItem::new("File/Open");
    open.on_click(move |_| o.set(o.get() + 1));
    menu.add_item(open);
    let (quits, q) = counter();
    let mut quit = MenuItem::new("File/Quit");
    quit.on_click(move |_| q.set(q.get() + 1));
    let quit = menu.add_item_with_divider(quit);
    window.add(menu);
    window.show();
    let id = app.add(window);

    tk.push_popup(Some(quit));
    tk.push_event(id, EventCx::at((10, 10)), Event::Push);
    // A submenu header
    tk.push_popup(Some(0));
    tk.push_event(id, EventCx::at((10, 10)), Event::Push);
    assert!(app.run().is_ok());
    assert_eq!((opened.get(), quits.get()), (0, 1));
}

#[test]
fn numeric_inputs() {
    let (tk, _) = init();
    let rect = Rect::xywh(0, 0, 100, 25);

    let mut float = FloatInput::new(&tk, rect, "");
    float.set_value(3.5);
    assert_eq!(float.value(), Ok(3.5));
    float.set_value(-0.25);
    assert_eq!(float.value(), Ok(-0.25));

    let mut int = IntInput::new(&tk, rect, "");
    int.set_value(0);
    assert_eq!(int.value(), Ok(0));

    let _ = int.native_mut().set_value("twelve");
    assert!(int.value().is_err());
    let _ = float.native_mut().set_value("");
    assert!(float.value().is_err());
}

#[test]
fn typing_into_a_window() {
    let (tk, mut app) = init();
    let mut window = app.window(Rect::xywh(0, 0, 400, 300), "Form");
    let (changes, c) = counter();
    let mut input = Input::new(&tk, Rect::xywh(10, 10, 200, 25), "Name");
    input.on_change(move |_| c.set(c.get() + 1));
    let index = window.add(input);
    window.show();
    let id = app.add(window);

    tk.push_event(id, EventCx::at((20, 20)), Event::Push);
    tk.push_event(id, EventCx::new().with_text("Ada"), Event::KeyDown);
    assert!(app.run().is_ok());

    let text = app
        .windows()
        .get(id)
        .and_then(|w| w.child::<Input>(index))
        .map(|input| input.value());
    assert_eq!(text.as_deref(), Some("Ada"));
    assert_eq!(changes.get(), 1);
}
