use crate::{OAM_SIZE, VIDEO_RAM_SIZE};

/// LCD registers routed through the I/O page.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LcdRegister {
    /// LCDC (0xFF40).
    Control,
    /// STAT (0xFF41).
    Status,
    /// SCY (0xFF42).
    ScrollY,
    /// SCX (0xFF43).
    ScrollX,
    /// LY (0xFF44), maintained by the display's own timing.
    Scanline,
    /// LYC (0xFF45).
    ScanlineCompare,
    /// BGP (0xFF47).
    BackgroundPalette,
    /// OBP0 (0xFF48).
    ObjectPalette0,
    /// OBP1 (0xFF49).
    ObjectPalette1,
}

/// What the bus may touch inside the display subsystem: video RAM,
/// sprite attribute memory and the LCD register block.
pub trait DisplayPort {
    fn vram(&self) -> &[u8; VIDEO_RAM_SIZE];
    fn vram_mut(&mut self) -> &mut [u8; VIDEO_RAM_SIZE];
    fn oam(&self) -> &[u8; OAM_SIZE];
    fn oam_mut(&mut self) -> &mut [u8; OAM_SIZE];
    fn read_register(&self, register: LcdRegister) -> u8;
    fn write_register(&mut self, register: LcdRegister, value: u8);
}

/// Display memory and registers without any rendering attached.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DisplayRegisters {
    pub vram: Box<[u8; VIDEO_RAM_SIZE]>,
    pub oam: [u8; OAM_SIZE],
    pub control: u8,
    pub status: u8,
    pub scroll_y: u8,
    pub scroll_x: u8,
    pub scanline: u8,
    pub scanline_compare: u8,
    pub background_palette: u8,
    pub object_palette0: u8,
    pub object_palette1: u8,
}

impl Default for DisplayRegisters {
    fn default() -> Self {
        Self {
            vram: Box::new([0; VIDEO_RAM_SIZE]),
            oam: [0; OAM_SIZE],
            control: 0,
            status: 0,
            scroll_y: 0,
            scroll_x: 0,
            scanline: 0,
            scanline_compare: 0,
            background_palette: 0,
            object_palette0: 0,
            object_palette1: 0,
        }
    }
}

impl DisplayPort for DisplayRegisters {
    fn vram(&self) -> &[u8; VIDEO_RAM_SIZE] {
        &self.vram
    }

    fn vram_mut(&mut self) -> &mut [u8; VIDEO_RAM_SIZE] {
        &mut self.vram
    }

    fn oam(&self) -> &[u8; OAM_SIZE] {
        &self.oam
    }

    fn oam_mut(&mut self) -> &mut [u8; OAM_SIZE] {
        &mut self.oam
    }

    fn read_register(&self, register: LcdRegister) -> u8 {
        match register {
            LcdRegister::Control => self.control,
            LcdRegister::Status => self.status,
            LcdRegister::ScrollY => self.scroll_y,
            LcdRegister::ScrollX => self.scroll_x,
            LcdRegister::Scanline => self.scanline,
            LcdRegister::ScanlineCompare => self.scanline_compare,
            LcdRegister::BackgroundPalette => self.background_palette,
            LcdRegister::ObjectPalette0 => self.object_palette0,
            LcdRegister::ObjectPalette1 => self.object_palette1,
        }
    }

    fn write_register(&mut self, register: LcdRegister, value: u8) {
        match register {
            LcdRegister::Control => self.control = value,
            LcdRegister::Status => self.status = value,
            LcdRegister::ScrollY => self.scroll_y = value,
            LcdRegister::ScrollX => self.scroll_x = value,
            LcdRegister::Scanline => self.scanline = value,
            LcdRegister::ScanlineCompare => self.scanline_compare = value,
            LcdRegister::BackgroundPalette => self.background_palette = value,
            LcdRegister::ObjectPalette0 => self.object_palette0 = value,
            LcdRegister::ObjectPalette1 => self.object_palette1 = value,
        }
    }
}
