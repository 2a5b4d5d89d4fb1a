//! console over the hosted C library's file descriptors

use core::fmt;

pub(super) struct Fd(libc::c_int);

impl Fd {
    pub(super) const fn stdout() -> Self {
        Fd(libc::STDOUT_FILENO)
    }

    pub(super) const fn stderr() -> Self {
        Fd(libc::STDERR_FILENO)
    }

    /// `write(2)` until every byte is out, retrying on `EINTR`.
    pub(super) fn write_all(&mut self, mut bytes: &[u8]) -> Result<(), ()> {
        while !bytes.is_empty() {
            let n = unsafe { libc::write(self.0, bytes.as_ptr().cast(), bytes.len()) };
            if n < 0 {
                if interrupted() {
                    continue;
                }
                return Err(());
            }
            if n == 0 {
                return Err(());
            }
            bytes = &bytes[n as usize..];
        }
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn interrupted() -> bool {
    unsafe { *libc::__errno_location() == libc::EINTR }
}

#[cfg(not(target_os = "linux"))]
fn interrupted() -> bool {
    false
}

impl fmt::Write for Fd {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}
