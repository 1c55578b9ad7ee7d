//! Input readers that stop when a benchmark is cancelled

use std::io::{self, Read};
use weissbench_types::{CancelFlag, Cancellable};

/// Reader that fails with an I/O error once the cancel flag is raised
///
/// Every byte a variant reads from the input passes through this wrapper, so
/// an interrupt stops a long compression at the next read instead of after
/// the whole input has been consumed.
#[derive(Debug)]
pub struct CancellableReader<R> {
    inner: R,
    cancel: CancelFlag,
}

impl<R: Read> CancellableReader<R> {
    /// Wrap `inner`, polling `cancel` before every read
    pub fn new(inner: R, cancel: CancelFlag) -> Self {
        Self { inner, cancel }
    }
}

impl<R: Read> Read for CancellableReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.cancel.is_cancelled() {
            return Err(cancelled_io_error());
        }
        self.inner.read(buf)
    }
}

/// The I/O error surfaced by a cancelled read
pub(crate) fn cancelled_io_error() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "benchmark cancelled")
}
