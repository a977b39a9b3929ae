/// Square matrix of dark/light bits packed 8 per byte, the finished symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    size: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create an all-light matrix with side length `size`
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![0; (size * size).div_ceil(8)],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    fn locate(&self, x: usize, y: usize) -> Option<(usize, u8)> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let index = y * self.size + x;
        Some((index / 8, 1 << (index % 8)))
    }

    /// True if (x, y) is dark. Out-of-range coordinates read as light.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.locate(x, y)
            .is_some_and(|(byte, bit)| self.data[byte] & bit != 0)
    }

    /// Set (x, y) dark or light. Out-of-range writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        if let Some((byte, bit)) = self.locate(x, y) {
            if dark {
                self.data[byte] |= bit;
            } else {
                self.data[byte] &= !bit;
            }
        }
    }

    /// Number of dark modules
    pub fn count_dark(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Packed row-major bits, least significant bit first within each byte
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
