//! Raster surface boundary - window reads and writes against the host
//! pixel buffer
//!
//! Pixels are 4 bytes each (R, G, B, A), row-major. Windows may straddle
//! the buffer edges; the surface clips, never errors, for out-of-range
//! coordinates. Reads fill out-of-bounds pixels with transparent black and
//! writes skip them, which keeps window indices aligned with mask indices.

use crate::core::errors::CoreError;

pub const BYTES_PER_PIXEL: usize = 4;

/// A rectangular region of the buffer, fetched before blending and
/// written back after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelWindow {
    /// Buffer-relative top-left corner; may be negative near the edges
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Flat RGBA bytes, `width * height * 4`
    pub data: Vec<u8>,
}

impl PixelWindow {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    /// The RGBA bytes of the pixel at window-relative `(row, col)`.
    pub fn pixel(&self, row: usize, col: usize) -> &[u8] {
        let offset = (row * self.width as usize + col) * BYTES_PER_PIXEL;
        &self.data[offset..offset + BYTES_PER_PIXEL]
    }

    pub fn pixel_mut(&mut self, row: usize, col: usize) -> &mut [u8] {
        let offset = (row * self.width as usize + col) * BYTES_PER_PIXEL;
        &mut self.data[offset..offset + BYTES_PER_PIXEL]
    }
}

/// The external pixel buffer the compositor reads from and writes to.
///
/// Implementations must clip windows that straddle the buffer edges
/// rather than fail. `Err` is reserved for genuine surface failures
/// (e.g. a detached host buffer), which abort the active gesture.
pub trait RasterSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fetch a window of pixels. Out-of-bounds pixels read as
    /// transparent black.
    fn read_window(&self, x: i32, y: i32, width: u32, height: u32)
        -> Result<PixelWindow, CoreError>;

    /// Write a window back. Out-of-bounds pixels are dropped.
    fn write_window(&mut self, window: &PixelWindow) -> Result<(), CoreError>;
}

/// In-memory RGBA surface, used by tests, benches, and hosts without
/// their own display buffer.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a transparent-black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    /// Create a buffer filled with one opaque RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut buffer = Self::new(width, height);
        for pixel in buffer.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&rgba);
        }
        buffer
    }

    /// The RGBA bytes of the pixel at `(x, y)`, `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        Some(&self.data[offset..offset + BYTES_PER_PIXEL])
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Rows of `window` that overlap this buffer, as (window_row, buffer_y,
    /// window_col_start, buffer_x_start, span) tuples.
    fn overlapping_rows(&self, window: &PixelWindow) -> Vec<(usize, usize, usize, usize, usize)> {
        let left = window.x.max(0);
        let top = window.y.max(0);
        let right = (window.x + window.width as i32).min(self.width as i32);
        let bottom = (window.y + window.height as i32).min(self.height as i32);

        if left >= right || top >= bottom {
            return Vec::new();
        }

        let col_start = (left - window.x) as usize;
        let span = (right - left) as usize;

        (top..bottom)
            .map(|y| {
                let row = (y - window.y) as usize;
                (row, y as usize, col_start, left as usize, span)
            })
            .collect()
    }
}

impl RasterSurface for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn read_window(
        &self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) -> Result<PixelWindow, CoreError> {
        let mut window = PixelWindow::new(x, y, width, height);

        for (row, buffer_y, col_start, buffer_x, span) in self.overlapping_rows(&window) {
            let src_offset = (buffer_y * self.width as usize + buffer_x) * BYTES_PER_PIXEL;
            let dst_offset = (row * width as usize + col_start) * BYTES_PER_PIXEL;
            let bytes = span * BYTES_PER_PIXEL;
            window.data[dst_offset..dst_offset + bytes]
                .copy_from_slice(&self.data[src_offset..src_offset + bytes]);
        }

        Ok(window)
    }

    fn write_window(&mut self, window: &PixelWindow) -> Result<(), CoreError> {
        for (row, buffer_y, col_start, buffer_x, span) in self.overlapping_rows(window) {
            let src_offset = (row * window.width as usize + col_start) * BYTES_PER_PIXEL;
            let dst_offset = (buffer_y * self.width as usize + buffer_x) * BYTES_PER_PIXEL;
            let bytes = span * BYTES_PER_PIXEL;
            self.data[dst_offset..dst_offset + bytes]
                .copy_from_slice(&window.data[src_offset..src_offset + bytes]);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_round_trip() {
        let mut buffer = PixelBuffer::new(64, 64);

        let mut window = PixelWindow::new(10, 20, 4, 4);
        for (i, byte) in window.data.iter_mut().enumerate() {
            *byte = i as u8;
        }

        buffer.write_window(&window).unwrap();
        let read_back = buffer.read_window(10, 20, 4, 4).unwrap();

        assert_eq!(read_back, window);
    }

    #[test]
    fn test_read_straddling_top_left_is_zero_filled() {
        let buffer = PixelBuffer::filled(64, 64, [9, 9, 9, 255]);
        let window = buffer.read_window(-2, -2, 4, 4).unwrap();

        // Out-of-bounds corner reads as transparent black
        assert_eq!(window.pixel(0, 0), &[0, 0, 0, 0]);
        // In-bounds corner reads the buffer contents
        assert_eq!(window.pixel(2, 2), &[9, 9, 9, 255]);
    }

    #[test]
    fn test_write_straddling_edges_clips() {
        let mut buffer = PixelBuffer::new(8, 8);

        let mut window = PixelWindow::new(6, 6, 4, 4);
        window.data.fill(255);
        buffer.write_window(&window).unwrap();

        assert_eq!(buffer.pixel(7, 7), Some([255u8; 4].as_slice()));
        assert_eq!(buffer.pixel(5, 5), Some([0u8; 4].as_slice()));
    }

    #[test]
    fn test_fully_out_of_range_window_is_a_no_op() {
        let mut buffer = PixelBuffer::filled(8, 8, [1, 2, 3, 255]);
        let before = buffer.data().to_vec();

        let mut window = PixelWindow::new(100, 100, 4, 4);
        window.data.fill(255);
        buffer.write_window(&window).unwrap();
        assert_eq!(buffer.data(), before.as_slice());

        let read = buffer.read_window(-100, -100, 4, 4).unwrap();
        assert!(read.data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_filled_buffer_pixels() {
        let buffer = PixelBuffer::filled(4, 4, [255, 255, 255, 255]);
        assert_eq!(buffer.pixel(0, 0), Some([255u8; 4].as_slice()));
        assert_eq!(buffer.pixel(4, 0), None);
    }
}
