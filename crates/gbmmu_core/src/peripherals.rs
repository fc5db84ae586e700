//! Register blocks the bus borrows from sibling subsystems.
//!
//! The bus never owns the display, timer, interrupt controller or joypad.
//! It holds shared handles typed by the narrow port each subsystem exposes,
//! so a bus access can only touch the registers mapped into the I/O page.

mod display;
mod interrupts;
mod joypad;
mod timer;

use std::{cell::RefCell, rc::Rc};

use typed_builder::TypedBuilder;

pub use display::{DisplayPort, DisplayRegisters, LcdRegister};
pub use interrupts::{Interrupt, InterruptPort, InterruptRegisters};
pub use joypad::{JoypadButton, JoypadPort, JoypadRegisters};
pub use timer::{TimerPort, TimerRegisters};

pub type DisplayHandle = Rc<RefCell<dyn DisplayPort>>;
pub type TimerHandle = Rc<RefCell<dyn TimerPort>>;
pub type InterruptHandle = Rc<RefCell<dyn InterruptPort>>;
pub type JoypadHandle = Rc<RefCell<dyn JoypadPort>>;

/// Wrap a subsystem so it can be shared with the bus.
pub fn shared<T>(value: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(value))
}

/// Every collaborator the bus needs before its first access.
///
/// All four handles are required by the builder, so an unwired bus cannot
/// be constructed.
#[derive(TypedBuilder)]
pub struct Peripherals {
    pub display: DisplayHandle,
    pub timer: TimerHandle,
    pub interrupts: InterruptHandle,
    pub joypad: JoypadHandle,
}
