// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Image stubs

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tabby::cast::Conv;
use tabby::geom::Size;
use tabby::toolkit::NativeImage;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Read the pixel size from the header of the PNG file at `path`
///
/// Only the signature and `IHDR` chunk are read; pixel data is not decoded.
pub(crate) fn png_size(path: &Path) -> Option<Size> {
    let mut header = [0u8; 24];
    File::open(path).ok()?.read_exact(&mut header).ok()?;
    if header[..8] != PNG_SIGNATURE || &header[12..16] != b"IHDR" {
        return None;
    }
    let dim = |i: usize| {
        let bytes = [header[i], header[i + 1], header[i + 2], header[i + 3]];
        i32::try_conv(u32::from_be_bytes(bytes)).ok()
    };
    Some(Size(dim(16)?, dim(20)?))
}

/// An image stub with a size and a validity flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Image {
    valid: bool,
    size: Size,
}

impl Image {
    /// A valid image of the given size
    pub fn new(size: Size) -> Self {
        Image { valid: true, size }
    }

    /// A failed load
    pub fn invalid() -> Self {
        Image {
            valid: false,
            size: Size::ZERO,
        }
    }
}

impl NativeImage for Image {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn size(&self) -> Size {
        self.size
    }

    fn scaled(&self, size: Size) -> Box<dyn NativeImage> {
        if self.valid {
            Box::new(Image::new(size))
        } else {
            Box::new(Image::invalid())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn png_header() {
        let path = std::env::temp_dir().join("tabby-headless-png-header.png");
        let mut bytes = PNG_SIGNATURE.to_vec();
        bytes.extend([0, 0, 0, 13]);
        bytes.extend(b"IHDR");
        bytes.extend(640u32.to_be_bytes());
        bytes.extend(480u32.to_be_bytes());
        File::create(&path).unwrap().write_all(&bytes).unwrap();

        assert_eq!(png_size(&path), Some(Size(640, 480)));
        assert_eq!(png_size(Path::new("/nonexistent/icon.png")), None);
    }
}
