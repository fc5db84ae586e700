use bitflags::bitflags;

bitflags! {
    /// Interrupt sources, in IF/IE bit order.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Interrupt: u8 {
        const VBLANK = 0b0000_0001;
        const LCD_STAT = 0b0000_0010;
        const TIMER = 0b0000_0100;
        const SERIAL = 0b0000_1000;
        const JOYPAD = 0b0001_0000;
    }
}

/// IF (0xFF0F) and IE (0xFFFF) as seen from the bus.
pub trait InterruptPort {
    fn flags(&self) -> u8;
    fn set_flags(&mut self, value: u8);
    fn enable(&self) -> u8;
    fn set_enable(&mut self, value: u8);
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InterruptRegisters {
    pub flags: u8,
    pub enable: u8,
}

impl InterruptRegisters {
    pub fn request(&mut self, interrupt: Interrupt) {
        self.flags |= interrupt.bits();
    }

    pub fn acknowledge(&mut self, interrupt: Interrupt) {
        self.flags &= !interrupt.bits();
    }

    /// Sources that are both requested and enabled.
    pub fn pending(&self) -> Interrupt {
        Interrupt::from_bits_truncate(self.flags & self.enable)
    }
}

impl InterruptPort for InterruptRegisters {
    fn flags(&self) -> u8 {
        self.flags
    }

    fn set_flags(&mut self, value: u8) {
        self.flags = value;
    }

    fn enable(&self) -> u8 {
        self.enable
    }

    fn set_enable(&mut self, value: u8) {
        self.enable = value;
    }
}
