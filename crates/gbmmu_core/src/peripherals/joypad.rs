/// P1/JOYP (0xFF00) as seen from the bus.
pub trait JoypadPort {
    /// Low nibble of the selected column; a pressed key reads as 0.
    fn read_joypad(&self) -> u8;
    /// Column selection written by the CPU.
    fn write_joypad(&mut self, value: u8);
}

/// Selection bit that leaves the button column (A/B/Select/Start) active.
const BUTTON_COLUMN: u8 = 0x10;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum JoypadButton {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl JoypadButton {
    /// Bit of the button inside its column.
    fn bit(self) -> u8 {
        match self {
            JoypadButton::Right | JoypadButton::A => 0,
            JoypadButton::Left | JoypadButton::B => 1,
            JoypadButton::Up | JoypadButton::Select => 2,
            JoypadButton::Down | JoypadButton::Start => 3,
        }
    }

    fn is_direction(self) -> bool {
        matches!(
            self,
            JoypadButton::Right | JoypadButton::Left | JoypadButton::Up | JoypadButton::Down
        )
    }
}

/// Joypad column latch plus the pressed state of both columns.
///
/// `buttons` and `directions` use bit=1 for "pressed"; they are inverted
/// into the active-low nibble on read.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct JoypadRegisters {
    pub select: u8,
    pub buttons: u8,
    pub directions: u8,
}

impl JoypadRegisters {
    pub fn set_pressed(&mut self, button: JoypadButton, pressed: bool) {
        let mask = 1u8 << button.bit();
        let column = if button.is_direction() {
            &mut self.directions
        } else {
            &mut self.buttons
        };
        if pressed {
            *column |= mask;
        } else {
            *column &= !mask;
        }
    }
}

impl JoypadPort for JoypadRegisters {
    fn read_joypad(&self) -> u8 {
        let pressed = if (self.select & BUTTON_COLUMN) != 0 {
            self.buttons
        } else {
            self.directions
        };
        !pressed & 0x0F
    }

    fn write_joypad(&mut self, value: u8) {
        self.select = value;
    }
}
