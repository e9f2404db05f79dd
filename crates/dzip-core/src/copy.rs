//! Buffered byte copy shared by packing and extraction.
//!
//! One [`CopyBuffer`] is allocated per operation and reused for every
//! entry, instead of letting `std::io::copy` allocate per call.

use std::io::Read;
use std::io::Write;
use std::io::{self};

/// Buffer size for I/O operations (64KB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Reusable buffer for copying entry content.
///
/// # Examples
///
/// ```
/// use dzip_core::copy::CopyBuffer;
/// use dzip_core::copy::copy_with_buffer;
/// use std::io::Cursor;
///
/// let mut buffer = CopyBuffer::new();
/// let mut input = Cursor::new(b"hello".to_vec());
/// let mut output = Vec::new();
///
/// let copied = copy_with_buffer(&mut input, &mut output, &mut buffer)?;
/// assert_eq!(copied, 5);
/// assert_eq!(output, b"hello");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Box<[u8]>,
}

impl CopyBuffer {
    /// Creates a new zeroed copy buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE].into_boxed_slice(),
        }
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies everything from `reader` into `writer` through `buffer`.
///
/// Interrupted reads are retried; any other read or write error is returned
/// as is. Returns the number of bytes copied.
///
/// # Errors
///
/// Returns the first read or write error, or an error if the byte count
/// would overflow `u64`.
pub fn copy_with_buffer<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> io::Result<u64> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        writer.write_all(&buffer.buf[..bytes_read])?;

        total = total
            .checked_add(bytes_read as u64)
            .ok_or_else(|| io::Error::other("copied byte count overflowed"))?;
    }

    Ok(total)
}
