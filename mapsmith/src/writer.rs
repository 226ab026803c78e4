use std::path::Path;

use crate::Error;

/// Write the rendered document, overwriting any existing file at the path.
/// There is no atomic-write or backup behavior; an unwritable path is fatal.
pub(crate) fn write(html: &str, path: &Path) -> Result<(), Error> {
    std::fs::write(path, html)?;
    log::info!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}
