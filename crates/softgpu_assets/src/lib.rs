//! Asset helpers around the pipeline: image-backed textures, PNG export of
//! frames and mesh buffers.

use std::path::Path;

use softgpu_core::{Frame, Texture, TextureError};
use thiserror::Error;

pub mod mesh;

pub use mesh::{MeshData, Vertex};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to write image {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Texture(#[from] TextureError),
    #[error("frame {width}x{height} does not fit an image buffer")]
    FrameSize { width: u32, height: u32 },
}

/// Decodes an image file into an RGBA8 texture.
pub fn load_texture(path: impl AsRef<Path>) -> Result<Texture, AssetError> {
    let path = path.as_ref();
    log::info!("loading texture {}", path.display());

    let img = image::open(path)
        .map_err(|source| AssetError::Decode {
            path: path.display().to_string(),
            source,
        })?
        .to_rgba8();

    let (width, height) = img.dimensions();
    Ok(Texture::new(img.into_raw(), width, height, 4)?)
}

/// Writes the color attachment of `frame` as a PNG.
///
/// Row 0 of the frame is the bottom of the image (y grows upwards in window space).
pub fn save_frame_png(frame: &Frame, path: impl AsRef<Path>) -> Result<(), AssetError> {
    let path = path.as_ref();
    let (width, height) = (frame.width(), frame.height());

    let row_bytes = width as usize * 4;
    let mut flipped = Vec::with_capacity(frame.color().len());
    for row in frame.color().chunks_exact(row_bytes.max(1)).rev() {
        flipped.extend_from_slice(row);
    }

    let img = image::RgbaImage::from_raw(width, height, flipped).ok_or(AssetError::FrameSize { width, height })?;
    img.save(path).map_err(|source| AssetError::Encode {
        path: path.display().to_string(),
        source,
    })?;

    log::info!("wrote {}x{} frame to {}", width, height, path.display());
    Ok(())
}
