//! Growable binary buffer writer.

/// A byte buffer with a write cursor that grows on demand.
///
/// Bytes between the last flush position `x0` and the cursor `x` form the
/// pending output returned by [`Writer::flush`].
///
/// # Example
///
/// ```
/// use anypack_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0xcd);
/// writer.u16(0x0203);
/// assert_eq!(writer.flush(), [0xcd, 0x02, 0x03]);
/// ```
pub struct Writer {
    /// Backing storage.
    pub uint8: Vec<u8>,
    /// Position of the last flush.
    pub x0: usize,
    /// Write cursor.
    pub x: usize,
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a writer that allocates in 64 KiB chunks.
    pub fn new() -> Self {
        Self::with_alloc_size(64 * 1024)
    }

    /// Creates a writer with a custom allocation chunk size.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        let alloc_size = alloc_size.max(1);
        Self {
            uint8: vec![0u8; alloc_size],
            x0: 0,
            x: 0,
            alloc_size,
        }
    }

    /// Number of bytes written since the last flush.
    pub fn len(&self) -> usize {
        self.x - self.x0
    }

    pub fn is_empty(&self) -> bool {
        self.x == self.x0
    }

    /// Makes room for at least `capacity` more bytes past the cursor.
    ///
    /// Flushed bytes are dropped when the buffer is reallocated.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.uint8.len() - self.x;
        if remaining >= capacity {
            return;
        }
        let pending = self.x - self.x0;
        let required = pending + capacity;
        let new_size = if required <= self.alloc_size {
            self.alloc_size
        } else {
            required * 2
        };
        let mut grown = vec![0u8; new_size];
        grown[..pending].copy_from_slice(&self.uint8[self.x0..self.x]);
        self.uint8 = grown;
        self.x = pending;
        self.x0 = 0;
    }

    /// Drops pending bytes by moving the flush position to the cursor.
    pub fn reset(&mut self) {
        self.x0 = self.x;
    }

    /// Returns the pending bytes and advances the flush position.
    pub fn flush(&mut self) -> Vec<u8> {
        let out = self.uint8[self.x0..self.x].to_vec();
        self.x0 = self.x;
        out
    }

    #[inline]
    fn put<const N: usize>(&mut self, bytes: [u8; N]) {
        self.ensure_capacity(N);
        self.uint8[self.x..self.x + N].copy_from_slice(&bytes);
        self.x += N;
    }

    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.put([val]);
    }

    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.put(val.to_be_bytes());
    }

    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.put(val.to_be_bytes());
    }

    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.put(val.to_be_bytes());
    }

    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.put(val.to_be_bytes());
    }

    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.put(val.to_be_bytes());
    }

    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.put(val.to_be_bytes());
    }

    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.put(val.to_be_bytes());
    }

    #[inline]
    pub fn f32(&mut self, val: f32) {
        self.put(val.to_be_bytes());
    }

    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.put(val.to_be_bytes());
    }

    /// Writes a tag byte followed by a `u8`.
    pub fn u8u8(&mut self, tag: u8, val: u8) {
        self.put([tag, val]);
    }

    /// Writes a tag byte followed by a big-endian `u16`.
    pub fn u8u16(&mut self, tag: u8, val: u16) {
        self.ensure_capacity(3);
        self.u8(tag);
        self.u16(val);
    }

    /// Writes a tag byte followed by a big-endian `u32`.
    pub fn u8u32(&mut self, tag: u8, val: u32) {
        self.ensure_capacity(5);
        self.u8(tag);
        self.u32(val);
    }

    /// Writes a tag byte followed by a big-endian `u64`.
    pub fn u8u64(&mut self, tag: u8, val: u64) {
        self.ensure_capacity(9);
        self.u8(tag);
        self.u64(val);
    }

    pub fn u8i8(&mut self, tag: u8, val: i8) {
        self.put([tag, val as u8]);
    }

    pub fn u8i16(&mut self, tag: u8, val: i16) {
        self.ensure_capacity(3);
        self.u8(tag);
        self.i16(val);
    }

    pub fn u8i32(&mut self, tag: u8, val: i32) {
        self.ensure_capacity(5);
        self.u8(tag);
        self.i32(val);
    }

    pub fn u8i64(&mut self, tag: u8, val: i64) {
        self.ensure_capacity(9);
        self.u8(tag);
        self.i64(val);
    }

    pub fn u8f32(&mut self, tag: u8, val: f32) {
        self.ensure_capacity(5);
        self.u8(tag);
        self.f32(val);
    }

    pub fn u8f64(&mut self, tag: u8, val: f64) {
        self.ensure_capacity(9);
        self.u8(tag);
        self.f64(val);
    }

    /// Writes raw bytes.
    pub fn buf(&mut self, buf: &[u8]) {
        let length = buf.len();
        self.ensure_capacity(length);
        self.uint8[self.x..self.x + length].copy_from_slice(buf);
        self.x += length;
    }

    /// Writes the UTF-8 bytes of `s`. Returns the number of bytes written.
    pub fn utf8(&mut self, s: &str) -> usize {
        self.buf(s.as_bytes());
        s.len()
    }
}
