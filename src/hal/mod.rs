/*!
## Board capabilities

The interpreter never touches hardware. It talks to the board through these
traits, bundled in a [`Board`]. The `sim` module provides implementations
that run on a desktop and record what a script asked the hardware to do.

*/

use crate::lang::Error;

pub mod sim;

type Result<T> = std::result::Result<T, Error>;

/// Heap buffer handle. Zero is never issued.
pub type Handle = u32;

/// Calendar and clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    /// Days since Sunday.
    pub week: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub micros: u32,
}

pub trait Clock {
    fn set_calendar(&mut self, year: i32, month: u32, day: u32);
    fn set_clock(&mut self, hour: u32, minute: u32, second: u32, micros: u32);
    fn now(&mut self) -> Timestamp;
    /// Monotonic microseconds, used for `sleep`.
    fn micros(&mut self) -> u64;
}

/// I2C EEPROM chips addressed by chip select.
pub trait Eeprom {
    fn write(&mut self, chip: u8, address: usize, bytes: &[u8]) -> Result<()>;
    fn read(&mut self, chip: u8, address: usize, len: usize) -> Result<Vec<u8>>;
}

/// GPIO pattern sequencer.
pub trait Gpio {
    fn set(&mut self, pattern: &[u32], repeat: u32);
    fn clear(&mut self, mask: u32, stay: bool);
    fn input(&mut self, pin: u32) -> bool;
    /// Timer tick; advances the pattern by one frame.
    fn service(&mut self) {}
}

/// Sound sequencer.
pub trait Sound {
    fn set(&mut self, music: &[u32], repeat: u32);
    /// Plays `music` ahead of whatever is playing, then resumes it.
    fn interrupt(&mut self, music: &[u32], repeat: u32);
    fn clear(&mut self);
    fn beat(&mut self, bpm: u32);
    fn service(&mut self) {}
}

/// Word-addressed heap.
pub trait Heap {
    fn alloc(&mut self, words: usize) -> Result<Handle>;
    fn free(&mut self, handle: Handle);
    fn fill(&mut self, handle: Handle, word: u32) -> Result<()>;
    fn count(&self, handle: Handle) -> Result<usize>;
    fn store(&mut self, handle: Handle, offset: usize, words: &[u32]) -> Result<()>;
    fn load(&self, handle: Handle, offset: usize, len: usize) -> Result<Vec<u32>>;
}

pub struct Board {
    pub clock: Box<dyn Clock>,
    pub eeprom: Box<dyn Eeprom>,
    pub gpio: Box<dyn Gpio>,
    pub sound: Box<dyn Sound>,
    pub heap: Box<dyn Heap>,
}

impl Default for Board {
    fn default() -> Board {
        Board::simulated()
    }
}

impl Board {
    pub fn simulated() -> Board {
        Board {
            clock: Box::new(sim::SoftClock::new()),
            eeprom: Box::new(sim::SimEeprom::new()),
            gpio: Box::new(sim::SimGpio::new()),
            sound: Box::new(sim::SimSound::new()),
            heap: Box::new(sim::SimHeap::new()),
        }
    }

    pub fn with_clock<T: Clock + 'static>(mut self, clock: T) -> Board {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_eeprom<T: Eeprom + 'static>(mut self, eeprom: T) -> Board {
        self.eeprom = Box::new(eeprom);
        self
    }

    pub fn with_gpio<T: Gpio + 'static>(mut self, gpio: T) -> Board {
        self.gpio = Box::new(gpio);
        self
    }

    pub fn with_sound<T: Sound + 'static>(mut self, sound: T) -> Board {
        self.sound = Box::new(sound);
        self
    }

    pub fn with_heap<T: Heap + 'static>(mut self, heap: T) -> Board {
        self.heap = Box::new(heap);
        self
    }

    /// The timer-service routine: one frame for every sequencer.
    pub fn service(&mut self) {
        self.gpio.service();
        self.sound.service();
    }
}
