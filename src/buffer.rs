//! Fixed-capacity text buffer and the two marshaling primitives.

use crate::error::SetupError;

/// Fixed-capacity, NUL-terminated byte buffer handed to the raw `InputText`
/// call.
///
/// Allocated once at setup and reused for every slot of every frame. The
/// widget is only ever told [`writable_len`](Self::writable_len) bytes are
/// available, so the final terminator byte cannot be overwritten.
#[derive(Debug)]
pub struct FixedTextBuffer {
    bytes: Box<[u8]>,
}

impl FixedTextBuffer {
    /// Allocates a buffer of `visible + 1` bytes and copies `initial` into it.
    ///
    /// Fails fast with [`SetupError::BufferOverflow`] if `initial` does not
    /// fit; silent truncation at setup would invalidate every measurement
    /// that follows.
    pub fn new(visible: usize, initial: &str) -> Result<Self, SetupError> {
        if initial.len() > visible {
            return Err(SetupError::BufferOverflow {
                len: initial.len(),
                writable: visible,
                capacity: visible + 1,
            });
        }
        let mut bytes = vec![0u8; visible + 1].into_boxed_slice();
        bytes[..initial.len()].copy_from_slice(initial.as_bytes());
        Ok(Self { bytes })
    }

    /// Number of bytes the widget may write. Excludes the reserved terminator.
    pub fn writable_len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Total allocation size, terminator included.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Raw pointer for the FFI call. Valid for `capacity()` bytes until the
    /// buffer is dropped; the allocation never moves.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.bytes.as_mut_ptr()
    }

    /// Copy-in primitive: encode `src` into the buffer, NUL-terminated.
    ///
    /// The harness guarantees `src` fits (checked at setup); anything longer
    /// is truncated to the writable length.
    pub fn encode(&mut self, src: &str) {
        let n = src.len().min(self.writable_len());
        self.bytes[..n].copy_from_slice(&src.as_bytes()[..n]);
        self.bytes[n] = 0;
    }

    /// Copy-out primitive: decode the buffer contents up to the first NUL.
    pub fn decode(&self) -> String {
        String::from_utf8_lossy(&self.bytes[..self.strlen()]).into_owned()
    }

    fn strlen(&self) -> usize {
        self.bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.bytes.len())
    }
}
