use glam::{Vec2, Vec4};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextureError {
    #[error("texture must have 1 to 4 channels, got {0}")]
    Channels(u32),
    #[error("expected {expected} bytes for a {width}x{height} texture, got {actual}")]
    Size {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("texture unit {unit} out of range, {max} units available")]
    Unit { unit: usize, max: usize },
}

/// Row-major 8-bit texture with 1 to 4 channels per pixel.
#[derive(Clone, Debug, Default)]
pub struct Texture {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    channels: u32,
}

impl Texture {
    /// A texture without backing data. Sampling it yields transparent black.
    pub const EMPTY: Texture = Texture {
        pixels: Vec::new(),
        width: 0,
        height: 0,
        channels: 0,
    };

    pub fn new(pixels: Vec<u8>, width: u32, height: u32, channels: u32) -> Result<Self, TextureError> {
        if !(1..=4).contains(&channels) {
            return Err(TextureError::Channels(channels));
        }
        let expected = width as usize * height as usize * channels as usize;
        if pixels.len() != expected {
            return Err(TextureError::Size {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
            channels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u32 {
        self.channels
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Nearest-texel lookup with repeat addressing.
///
/// Missing channels read as 0, except alpha which reads as 1.
pub fn read_texture(texture: &Texture, uv: Vec2) -> Vec4 {
    if texture.is_empty() {
        return Vec4::ZERO;
    }

    let wrapped = uv - uv.floor();
    let texel = wrapped * Vec2::new((texture.width - 1) as f32, (texture.height - 1) as f32) + 0.5;
    let (x, y) = (texel.x as usize, texel.y as usize);

    let channels = texture.channels as usize;
    let base = (y * texture.width as usize + x) * channels;

    let mut color = Vec4::new(0.0, 0.0, 0.0, 1.0);
    for c in 0..channels {
        color[c] = texture.pixels[base + c] as f32 / 255.0;
    }
    color
}
