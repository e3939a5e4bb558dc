//! This module supports the creation of tests and benchmarks.

use std::{
    fmt::Debug,
    io::{self, Write},
    sync::{Arc, Mutex},
};

/// In-memory writer that can be cloned and handed to code expecting an owned `Write + Send`,
/// while the test keeps a handle to read back what was written.
#[derive(Clone, Default)]
pub struct SharedBuf {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Returns the written lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self.bytes.lock().unwrap_or_else(|e| e.into_inner());
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Debug for SharedBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SharedBuf({:?})", self.contents())
    }
}

/// Prints `msg`, `left`, `right`, and then
/// asserts equality of `left` and `right` with`msg` as the assert message.
pub fn assert_eq_and_println<T: PartialEq + Debug>(left: T, right: T, msg: &str) {
    println!("{msg} - left={left:?}; right={right:?}");
    assert_eq!(left, right, "{msg}");
}
