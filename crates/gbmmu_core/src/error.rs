use thiserror::Error;

/// How the bus reacts when an access fails.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Severity {
    /// The access cannot happen on real hardware. The session is terminated.
    Fatal,
    /// Logged as a warning; reads yield 0 and writes are dropped.
    Tolerated,
}

/// Failure of a construction step or of a single bus access.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum MmuError {
    #[error("unsupported bank controller type {0:#04X}")]
    UnsupportedBankController(u8),
    #[error("unsupported external RAM size code {0:#04X}")]
    UnsupportedRamSize(u8),
    #[error("external RAM access at {addr:#06X} but the cartridge has none")]
    NoExternalRam { addr: u16 },
    #[error("external RAM access at {addr:#06X} (offset {offset:#06X}) outside {size} bytes")]
    ExternalRamOutOfRange { addr: u16, offset: usize, size: usize },
    #[error("I/O register {addr:#06X} is not implemented")]
    UnimplementedIo { addr: u16 },
}

impl MmuError {
    pub fn severity(&self) -> Severity {
        match self {
            MmuError::UnimplementedIo { .. } => Severity::Tolerated,
            _ => Severity::Fatal,
        }
    }

    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

/// Terminate the session after a hardware-impossible access.
///
/// Infallible bus operations (`read_byte`, `write_byte` and the word
/// variants) funnel every fatal [`MmuError`] through here. The error is
/// logged and the emulation loop is unwound with a panic carrying the
/// error message; no partial state is rolled back.
#[cold]
#[track_caller]
pub(crate) fn fatal(err: &MmuError) -> ! {
    log::error!("fatal memory access: {err}");
    panic!("fatal memory access: {err}");
}
