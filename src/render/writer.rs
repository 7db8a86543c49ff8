use std::io::Write;

use crate::errors::RenderError;
use crate::render::{BoxFragment, Fragment};

/// Writes fragments to a sink one after another.
///
/// The first failure ends the sequence: the sink is assumed broken, so
/// nothing after the failing fragment is attempted.
pub struct FragmentWriter<W> {
    out: W,
}

impl<W: Write> FragmentWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write(&mut self, fragment: &dyn Fragment) -> Result<(), RenderError> {
        fragment.render(&mut self.out)
    }

    /// Write every fragment in order, then flush.
    pub fn write_all(&mut self, fragments: &[BoxFragment]) -> Result<(), RenderError> {
        for fragment in fragments {
            self.write(fragment.as_ref())?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
