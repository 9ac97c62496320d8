//! Artifact export: PNG rasterization and file output.
//!
//! The SVG is parsed with `usvg` (system fonts loaded for the header text),
//! drawn by `resvg` into a `tiny-skia` pixmap, then encoded with `png`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;
use tiny_skia::{Pixmap, Transform};
use tracing::{debug, info};

use super::RenderedBadge;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("SVG parse failed: {0}")]
    Parse(#[from] usvg::Error),

    #[error("Unable to allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("PNG encode failed: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Writing {path} failed: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub fn rasterize_png(badge: &RenderedBadge) -> Result<Vec<u8>, ExportError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    debug!(faces = options.fontdb.len(), "loaded system fonts");

    let tree = usvg::Tree::from_str(&badge.markup, &options)?;

    let mut pixmap = Pixmap::new(badge.width, badge.height).ok_or(ExportError::Pixmap {
        width: badge.width,
        height: badge.height,
    })?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

    encode_png(&pixmap)
}

fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, ExportError> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.write_header()?.write_image_data(&rgba)?;
    }

    Ok(buffer)
}

/// Write `bytes` to `path`, creating missing parent directories.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let io_err = |source: io::Error| ExportError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let mut file = fs::File::create(path).map_err(io_err)?;
    file.write_all(bytes).map_err(io_err)?;

    info!(path = %path.display(), bytes = bytes.len(), "wrote artifact");
    Ok(())
}
