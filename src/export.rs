use std::fs;
use std::path::Path;

use chrono::Local;
use tracing::info;

use crate::error::MazeError;
use crate::generator::Generator;
use crate::render::{render, Style};

/// Metadata header written above an exported maze.
pub fn metadata(generator: &Generator) -> String {
    let grid = generator.grid();
    format!(
        "# antidfs export\n# Generated: {}\n# Dimensions: {} × {}\n# Grid Size: {} × {}\n",
        Local::now().to_rfc3339(),
        generator.width(),
        generator.height(),
        grid.cols(),
        grid.rows()
    )
}

/// Writes the rendered maze to `path`, optionally preceded by a metadata
/// header and a blank line.
pub fn export_text(
    generator: &Generator,
    path: &Path,
    style: Style,
    include_metadata: bool,
) -> Result<(), MazeError> {
    let mut content = String::new();
    if include_metadata {
        content.push_str(&metadata(generator));
        content.push('\n');
    }
    content.push_str(&render(generator, style));
    fs::write(path, content)?;
    info!(path = %path.display(), "maze exported");
    Ok(())
}
