//! Password output: zeroizing buffered writer and clipboard.

use std::io::{self, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use log::info;
use zeroize::Zeroize;

use super::Password;
use crate::error::{Error, Result};

const BUF_CAPACITY: usize = 8 * 1024;

/// Buffered writer that wipes its buffer whenever it is flushed or dropped.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let res = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        res
    }

    #[cfg(test)]
    fn buffered(&self) -> &[u8] {
        &self.buf
    }

    #[cfg(test)]
    fn get_ref(&self) -> &W {
        &self.inner
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Write each password on its own line.
pub fn write_lines<W: Write>(out: W, passwords: &[Password]) -> io::Result<()> {
    let mut out = SecureBufWriter::new(out);
    for pass in passwords {
        out.write_all(pass.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Put the passwords on the system clipboard, one per line.
pub fn copy_to_clipboard(passwords: &[Password]) -> Result<()> {
    let mut ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;

    let mut contents = passwords
        .iter()
        .map(Password::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    let res = ctx
        .set_contents(contents.clone())
        .map_err(|e| Error::Clipboard(e.to_string()));
    contents.zeroize();

    // Read back so the provider's copy of the handoff buffer can be wiped.
    if res.is_ok()
        && let Ok(mut retrieved) = ctx.get_contents()
    {
        retrieved.zeroize();
    }

    if res.is_ok() {
        info!("copied {} password(s) to clipboard", passwords.len());
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CharacterClasses, PasswordLength, generate_with};
    use crate::rand::Rand;

    #[test]
    fn buffer_is_wiped_after_flush() {
        let mut w = SecureBufWriter::new(Vec::new());
        w.write_all(b"hunter2\n").unwrap();
        assert_eq!(w.buffered(), b"hunter2\n");
        w.flush().unwrap();
        assert!(w.buffered().is_empty());
        assert_eq!(w.get_ref().as_slice(), b"hunter2\n");
    }

    #[test]
    fn large_writes_pass_through() {
        let data = vec![b'x'; BUF_CAPACITY * 2];
        let mut w = SecureBufWriter::new(Vec::new());
        w.write_all(b"a").unwrap();
        w.write_all(&data).unwrap();
        w.flush().unwrap();
        assert_eq!(w.get_ref().len(), data.len() + 1);
        assert_eq!(w.get_ref()[0], b'a');
    }

    #[test]
    fn one_password_per_line() {
        let mut rng = Rand::seeded(11);
        let classes = CharacterClasses::new(true, false, false, false);
        let passwords: Vec<Password> = (0..3)
            .map(|_| generate_with(PasswordLength::new(8), &classes, &mut rng).unwrap())
            .collect();

        let mut out = Vec::new();
        write_lines(&mut out, &passwords).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for (line, pass) in lines.iter().zip(&passwords) {
            assert_eq!(*line, pass.as_str());
        }
    }
}
