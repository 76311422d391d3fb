use rayon::prelude::*;
use thiserror::Error;

/// Depth written by a clear. Anything drawn afterwards is nearer.
pub const FAR_DEPTH: f32 = 10e10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("color buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    ColorSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("depth buffer holds {actual} values, expected {expected} for {width}x{height}")]
    DepthSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Color (RGBA8) and depth (f32) attachments of a render target.
///
/// Buffer lengths always match `width * height`; they cannot be resized.
#[derive(Clone, Debug)]
pub struct Frame {
    width: u32,
    height: u32,
    color: Vec<u8>,
    depth: Vec<f32>,
}

impl Frame {
    /// Allocates a frame with black color and far depth.
    pub fn new(width: u32, height: u32) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            color: vec![0; pixels * 4],
            depth: vec![FAR_DEPTH; pixels],
        }
    }

    /// Wraps caller-provided buffers after checking their lengths.
    pub fn from_buffers(width: u32, height: u32, color: Vec<u8>, depth: Vec<f32>) -> Result<Self, FrameError> {
        let pixels = width as usize * height as usize;
        if color.len() != pixels * 4 {
            return Err(FrameError::ColorSize {
                width,
                height,
                expected: pixels * 4,
                actual: color.len(),
            });
        }
        if depth.len() != pixels {
            return Err(FrameError::DepthSize {
                width,
                height,
                expected: pixels,
                actual: depth.len(),
            });
        }
        Ok(Self {
            width,
            height,
            color,
            depth,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color(&self) -> &[u8] {
        &self.color
    }

    pub fn depth(&self) -> &[f32] {
        &self.depth
    }

    pub fn into_buffers(self) -> (Vec<u8>, Vec<f32>) {
        (self.color, self.depth)
    }

    /// RGBA of pixel (`x`, `y`).
    ///
    /// # Panics
    ///
    /// If the pixel lies outside the frame. The same holds for
    /// [`Frame::depth_at`] and [`Frame::depth_test`].
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y) * 4;
        [self.color[i], self.color[i + 1], self.color[i + 2], self.color[i + 3]]
    }

    pub fn depth_at(&self, x: u32, y: u32) -> f32 {
        self.depth[self.index(x, y)]
    }

    /// Fills every pixel with `color` and every depth with [`FAR_DEPTH`].
    pub fn clear(&mut self, color: [u8; 4]) {
        self.depth.fill(FAR_DEPTH);
        for px in self.color.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Overwrites the pixel if `depth` is nearer than the stored one.
    ///
    /// Returns whether the fragment was written.
    pub fn depth_test(&mut self, x: u32, y: u32, depth: f32, color: [u8; 4]) -> bool {
        let i = self.index(x, y);
        composite(&mut self.color[i * 4..i * 4 + 4], &mut self.depth[i], depth, color)
    }

    /// Rows in top-to-bottom order.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = FrameRow<'_>> {
        let width = self.width as usize;
        self.color
            .chunks_exact_mut((width * 4).max(1))
            .zip(self.depth.chunks_exact_mut(width.max(1)))
            .enumerate()
            .map(|(y, (color, depth))| FrameRow {
                y: y as u32,
                color,
                depth,
            })
    }

    /// Parallel version of [`Frame::rows_mut`]; every row goes to exactly one worker.
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = FrameRow<'_>> {
        let width = self.width as usize;
        self.color
            .par_chunks_exact_mut((width * 4).max(1))
            .zip(self.depth.par_chunks_exact_mut(width.max(1)))
            .enumerate()
            .map(|(y, (color, depth))| FrameRow {
                y: y as u32,
                color,
                depth,
            })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} frame",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

/// Mutable view of a single frame row.
pub struct FrameRow<'a> {
    pub y: u32,
    color: &'a mut [u8],
    depth: &'a mut [f32],
}

impl FrameRow<'_> {
    pub fn depth_test(&mut self, x: u32, depth: f32, color: [u8; 4]) -> bool {
        let x = x as usize;
        composite(&mut self.color[x * 4..x * 4 + 4], &mut self.depth[x], depth, color)
    }
}

// Strictly nearer wins, so on equal depth the first writer stays.
fn composite(stored_color: &mut [u8], stored_depth: &mut f32, depth: f32, color: [u8; 4]) -> bool {
    if *stored_depth > depth {
        stored_color.copy_from_slice(&color);
        *stored_depth = depth;
        true
    } else {
        false
    }
}
