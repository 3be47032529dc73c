use std::io::Write;

use crate::canvas::CanvasDocument;
use crate::core::Result;

use super::CanvasWriter;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> CanvasWriter for JsonWriter<W> {
    fn write_canvas(&mut self, canvas: &CanvasDocument) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, canvas)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Pretty-printed JSON with two-space indentation and struct field order.
pub fn export_to_json(canvas: &CanvasDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(canvas)?)
}

pub fn parse_canvas_json(json: &str) -> Result<CanvasDocument> {
    Ok(serde_json::from_str(json)?)
}
