// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Tabby prelude
//!
//! This module allows convenient importation of common unabiguous items:
//! ```
//! use tabby::prelude::*;
//! ```

#[doc(no_inline)]
pub use tabby_core::prelude::*;
#[doc(no_inline)]
pub use tabby_widgets::{Application, Render};
