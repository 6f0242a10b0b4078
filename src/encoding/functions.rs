//! Lambda and projection encoders.

use super::encoder::Encoder;
use super::error::EncodeResult;
use crate::tags;
use crate::types::{Lambda, Projection};

impl Encoder {
    /// Writes a lambda: tag, an empty evaluation context byte, then the
    /// expression text as a string (single-char collapsing included, so a
    /// one-character expression becomes a char atom under default options).
    pub(crate) fn write_lambda(&mut self, lambda: &Lambda) -> EncodeResult<()> {
        self.buf.put_tag(tags::LAMBDA);
        self.buf.put_u8(0);
        self.write_string(&lambda.expression)
    }

    /// Writes a projection: tag and parameter count (no attributes byte,
    /// unlike list headers), then each bound parameter dispatched in order.
    pub(crate) fn write_projection(&mut self, projection: &Projection) -> EncodeResult<()> {
        self.buf.put_tag(tags::PROJECTION);
        self.buf.put_i32(projection.parameters.len() as i32);
        for parameter in &projection.parameters {
            self.write_value(parameter)?;
        }
        Ok(())
    }
}
