use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Creates or truncates `output` and writes `document` to it.
///
/// The buffer is flushed explicitly so a failed write is reported here
/// instead of being dropped with the writer.
pub fn write_svg_document(output: &Path, document: &str) -> std::io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(document.as_bytes())?;
    writer.flush()?;
    Ok(())
}
