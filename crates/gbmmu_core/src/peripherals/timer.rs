/// Timer registers as seen from the I/O page (0xFF04–0xFF07).
///
/// The owning timer advances these on its own clock; the bus only reads
/// them and applies CPU writes.
pub trait TimerPort {
    /// DIV (0xFF04).
    fn divider(&self) -> u8;
    /// Any CPU write to DIV clears it, whatever the value.
    fn reset_divider(&mut self);
    /// TIMA (0xFF05).
    fn counter(&self) -> u8;
    fn set_counter(&mut self, value: u8);
    /// TMA (0xFF06).
    fn modulo(&self) -> u8;
    fn set_modulo(&mut self, value: u8);
    /// TAC (0xFF07). The bus masks writes to the lower 3 bits.
    fn control(&self) -> u8;
    fn set_control(&mut self, value: u8);
}

/// Plain timer register block.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TimerRegisters {
    pub divider: u8,
    pub counter: u8,
    pub modulo: u8,
    pub control: u8,
}

impl TimerRegisters {
    /// Timer enable bit of TAC.
    #[inline]
    pub fn enabled(&self) -> bool {
        (self.control & 0x04) != 0
    }
}

impl TimerPort for TimerRegisters {
    fn divider(&self) -> u8 {
        self.divider
    }

    fn reset_divider(&mut self) {
        self.divider = 0;
    }

    fn counter(&self) -> u8 {
        self.counter
    }

    fn set_counter(&mut self, value: u8) {
        self.counter = value;
    }

    fn modulo(&self) -> u8 {
        self.modulo
    }

    fn set_modulo(&mut self, value: u8) {
        self.modulo = value;
    }

    fn control(&self) -> u8 {
        self.control
    }

    fn set_control(&mut self, value: u8) {
        self.control = value;
    }
}
