//! HTML Fragments
//!
//! A response on `/api` is a sequence of independent top-level elements,
//! each carrying a stable `id`. The page script swaps every element it
//! receives into the page element with the same `id`.
//!
//! - [`Fragment`]: anything that can render itself into a byte sink.
//! - [`fragments`]: the concrete page regions (item list, counter, ...).
//! - [`writer::FragmentWriter`]: writes a sequence of fragments in order and
//!   stops at the first failure.

pub mod fragments;
pub mod writer;

use std::borrow::Cow;
use std::io::Write;

use crate::errors::RenderError;

pub use fragments::{Counter, CreationForm, ErrorMessage, ItemList, Page, ViewStateField};
pub use writer::FragmentWriter;

/// A renderable piece of a response body.
pub trait Fragment {
    fn render(&self, out: &mut dyn Write) -> Result<(), RenderError>;
}

/// Owned, type-erased fragment as passed between pipeline stages.
pub type BoxFragment = Box<dyn Fragment + Send>;

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests;
