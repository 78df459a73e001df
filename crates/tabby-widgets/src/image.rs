// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Image display

use crate::TextBox;
use log::warn;
use std::path::{Path, PathBuf};
use tabby::class::{HasLabel, HasLabelStyle};
use tabby::draw::{Align, Font, Rgb8};
use tabby::event::{Event, EventCx, Response};
use tabby::geom::{Coord, Rect, Size};
use tabby::toolkit::{NativeControl, NativeImage, Toolkit};
use tabby::{Widget, WidgetId};

/// Size of an image of `image` pixels fitted to `bounds`
///
/// The wider dimension of the image fills the box; the other is scaled to
/// preserve the aspect ratio. Empty images fit to nothing.
fn fit(image: Size, bounds: Size) -> Size {
    if image.is_empty() {
        Size::ZERO
    } else if image.0 > image.1 {
        Size(bounds.0, bounds.1 * image.1 / image.0)
    } else {
        Size(bounds.0 * image.0 / image.1, bounds.1)
    }
}

/// A box displaying a PNG image, scaled to fit
///
/// This is a [`TextBox`] (accessible through [`Image::base`]) with an image
/// attached. The original decoded image is kept so that resizing resamples
/// from the source rather than from a previous copy.
pub struct Image {
    base: TextBox,
    path: PathBuf,
    original: Box<dyn NativeImage>,
    scaled: Box<dyn NativeImage>,
}

impl Image {
    /// Construct, loading the PNG at `path`
    ///
    /// A failed load is logged; the box then displays only its label.
    pub fn new(tk: &dyn Toolkit, rect: Rect, path: impl AsRef<Path>, label: &str) -> Self {
        let path = path.as_ref().to_path_buf();
        let original = load(tk, &path);
        let scaled = original.scaled(fit(original.size(), rect.size));
        let mut base = TextBox::new(tk, rect, label);
        base.native_mut().set_align(Align::IMAGE_MASK);
        let mut image = Image {
            base,
            path,
            original,
            scaled,
        };
        image.attach();
        image
    }

    /// Access the underlying text box
    #[inline]
    pub fn base(&self) -> &TextBox {
        &self.base
    }

    /// Access the underlying text box mutably
    ///
    /// Click, enter and leave handlers are set here.
    #[inline]
    pub fn base_mut(&mut self) -> &mut TextBox {
        &mut self.base
    }

    /// Path of the loaded image
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// False if the image failed to load
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.original.is_valid()
    }

    /// Size of the displayed (scaled) image
    #[inline]
    pub fn image_size(&self) -> Size {
        self.scaled.size()
    }

    fn attach(&mut self) {
        let image = Some(&*self.scaled).filter(|img| img.is_valid());
        self.base.native_mut().set_image(image);
    }

    fn refit(&mut self) {
        let bounds = self.base.native().rect().size;
        self.scaled = self.original.scaled(fit(self.original.size(), bounds));
        self.attach();
    }

    fn resize(&mut self, n: i32) {
        let native = self.base.native_mut();
        native.hide();
        let rect = native.rect();
        native.set_rect(Rect::new(rect.pos, rect.size.grow(n)));
        self.refit();
        self.base.native_mut().show();
    }

    fn shift(&mut self, dx: i32) {
        let native = self.base.native_mut();
        native.hide();
        let rect = native.rect();
        native.set_rect(rect.translate(Coord(dx, 0)));
        native.show();
    }

    /// Grow the box by `n` pixels in each dimension, refitting the image
    pub fn increase(&mut self, n: i32) {
        self.resize(n);
    }

    /// Shrink the box by `n` pixels in each dimension, refitting the image
    pub fn decrease(&mut self, n: i32) {
        self.resize(-n);
    }

    /// Move the box left by `n` pixels
    pub fn move_left(&mut self, n: i32) {
        self.shift(-n);
    }

    /// Move the box right by `n` pixels
    pub fn move_right(&mut self, n: i32) {
        self.shift(n);
    }

    /// Replace the image with the PNG at `path`
    pub fn set_image(&mut self, tk: &dyn Toolkit, path: impl AsRef<Path>) {
        self.path = path.as_ref().to_path_buf();
        self.original = load(tk, &self.path);
        self.refit();
        let native = self.base.native_mut();
        native.hide();
        native.redraw();
        native.show();
    }
}

fn load(tk: &dyn Toolkit, path: &Path) -> Box<dyn NativeImage> {
    let image = tk.load_png(path);
    if !image.is_valid() {
        warn!("Image: failed to load {}", path.display());
    }
    image
}

impl HasLabel for Image {
    #[inline]
    fn label(&self) -> &str {
        self.base.label()
    }

    fn set_label(&mut self, text: &str) {
        self.base.set_label(text);
    }
}

impl HasLabelStyle for Image {
    fn align(&self) -> Align {
        self.base.native().align()
    }

    fn set_align(&mut self, align: Align) {
        let native = self.base.native_mut();
        native.set_align(align);
        native.redraw_parent();
    }

    fn label_size(&self) -> i32 {
        self.base.native().label_size()
    }

    fn set_label_size(&mut self, size: i32) {
        let native = self.base.native_mut();
        native.set_label_size(size);
        native.redraw_parent();
    }

    fn label_color(&self) -> Rgb8 {
        self.base.native().label_color()
    }

    fn set_label_color(&mut self, color: Rgb8) {
        let native = self.base.native_mut();
        native.set_label_color(color);
        native.redraw_parent();
    }

    fn label_font(&self) -> Font {
        self.base.native().label_font()
    }

    fn set_label_font(&mut self, font: Font) {
        let native = self.base.native_mut();
        native.set_label_font(font);
        native.redraw_parent();
    }
}

impl Widget for Image {
    #[inline]
    fn id(&self) -> WidgetId {
        self.base.id()
    }

    #[inline]
    fn rect(&self) -> Rect {
        self.base.rect()
    }

    fn handle(&mut self, cx: &mut EventCx, event: Event) -> Response {
        self.base.handle(cx, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabby_headless::Headless;

    #[test]
    fn fit_preserves_aspect() {
        let bounds = Size(100, 100);
        assert_eq!(fit(Size(200, 100), bounds), Size(100, 50));
        assert_eq!(fit(Size(100, 400), bounds), Size(25, 100));
        assert_eq!(fit(Size(64, 64), bounds), Size(100, 100));
        assert_eq!(fit(Size::ZERO, bounds), Size::ZERO);
    }

    #[test]
    fn resize_and_move() {
        let tk = Headless::new();
        tk.add_image("cat.png", Size(400, 200));
        let mut image = Image::new(&tk, Rect::xywh(10, 10, 100, 100), "cat.png", "");
        assert!(image.is_valid());
        assert_eq!(image.align(), Align::IMAGE_MASK);
        assert_eq!(image.image_size(), Size(100, 50));

        image.increase(20);
        assert_eq!(image.rect(), Rect::xywh(10, 10, 120, 120));
        assert_eq!(image.image_size(), Size(120, 60));
        assert!(image.base().native().visible());

        image.decrease(40);
        assert_eq!(image.image_size(), Size(80, 40));

        image.move_left(5);
        image.move_right(15);
        assert_eq!(image.rect().pos, Coord(20, 10));
    }

    #[test]
    fn failed_load() {
        let tk = Headless::new();
        let mut image = Image::new(&tk, Rect::xywh(0, 0, 50, 50), "missing.png", "alt");
        assert!(!image.is_valid());
        assert_eq!(image.image_size(), Size::ZERO);
        assert_eq!(image.label(), "alt");

        tk.add_image("dog.png", Size(10, 30));
        image.set_image(&tk, "dog.png");
        assert!(image.is_valid());
        assert_eq!(image.path(), Path::new("dog.png"));
        assert_eq!(image.image_size(), Size(16, 50));
    }
}
