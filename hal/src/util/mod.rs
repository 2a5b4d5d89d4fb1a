mod buf;
mod general;

pub use buf::FmtBuf;
pub use general::General;
