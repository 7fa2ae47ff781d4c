//! Write-only RGB destination canvas.

/// Bytes per destination pixel.
pub const RGB_CHANNELS: usize = 3;

/// An 8-bit RGB image allocated at full size before it is filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl DestinationImage {
    /// Allocates a black `width` x `height` canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * RGB_CHANNELS],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Length in bytes of one row.
    pub fn row_len(&self) -> usize {
        self.width as usize * RGB_CHANNELS
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the whole buffer, for row-partitioned fills.
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * RGB_CHANNELS;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}
