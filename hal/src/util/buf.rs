use core::fmt;

/// `fmt::Write` sink over a fixed stack buffer.
///
/// Writing past the capacity fails with `fmt::Error` and keeps what fit.
pub struct FmtBuf<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> FmtBuf<N> {
    pub const fn new() -> Self {
        Self { buf: [0; N], len: 0 }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn as_str(&self) -> &str {
        // only whole `&str`s are ever copied in
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }
}

impl<const N: usize> fmt::Write for FmtBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let end = self.len + bytes.len();
        if end > N {
            return Err(fmt::Error);
        }
        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::FmtBuf;

    #[test]
    fn collects_pieces() {
        let mut buf = FmtBuf::<16>::new();
        write!(buf, "{}-{}", 12, "ab").unwrap();
        assert_eq!(buf.as_str(), "12-ab");
    }

    #[test]
    fn overflow_keeps_prefix() {
        let mut buf = FmtBuf::<4>::new();
        buf.write_str("abc").unwrap();
        assert!(buf.write_str("de").is_err());
        assert_eq!(buf.as_bytes(), b"abc");
    }
}
