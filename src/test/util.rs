use std::io::{self, Write};

use crate::report;

pub fn render() -> String {
    let mut buf = Vec::new();
    report::write_report(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

/// Accepts `limit` bytes and then fails every write.
pub struct FailingWriter {
    pub limit: usize,
    pub written: Vec<u8>,
}

impl FailingWriter {
    pub fn new(limit: usize) -> Self {
        FailingWriter {
            limit,
            written: Vec::new(),
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.limit - self.written.len();
        if room == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        }
        let n = room.min(buf.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
