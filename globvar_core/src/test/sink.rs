//! Output sinks for testing.

use crate::results::{IoErr, IoErrKind, IoResult};

use std::io::Write;

/// Collect written bytes, then split them into lines.
#[derive(Debug, Default)]
pub struct LineSink {
  buf: Vec<u8>,
}

impl LineSink {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn lines(&self) -> Vec<String> {
    String::from_utf8(self.buf.clone())
      .unwrap()
      .lines()
      .map(|l| l.to_string())
      .collect()
  }

  pub fn raw(&self) -> &[u8] {
    &self.buf
  }
}

impl Write for LineSink {
  fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
    self.buf.extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> IoResult<()> {
    Ok(())
  }
}

/// Always fails, like a closed pipe.
#[derive(Debug, Default)]
pub struct BrokenSink;

impl Write for BrokenSink {
  fn write(&mut self, _buf: &[u8]) -> IoResult<usize> {
    Err(IoErr::new(IoErrKind::BrokenPipe, "broken pipe"))
  }

  fn flush(&mut self) -> IoResult<()> {
    Err(IoErr::new(IoErrKind::BrokenPipe, "broken pipe"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lines1() {
    let mut out = LineSink::new();
    out.write_all(b"Hello\nworld\n").unwrap();
    assert_eq!(out.lines(), vec!["Hello", "world"]);
  }

  #[test]
  #[should_panic]
  fn lines_invalid_utf81() {
    let mut out = LineSink::new();
    out.write_all(&[0xff, 0xfe, b'\n']).unwrap();
    out.lines();
  }
}
