/*!
## Simulated board

Desktop stand-ins for the board peripherals. The GPIO, sound, EEPROM and heap
simulators share their state through `Rc<RefCell<_>>`, so a clone kept by the
host (or a test) observes what the script did after the original has been
boxed into a [`Board`](super::Board).

*/

use super::{Clock, Eeprom, Gpio, Handle, Heap, Sound, Timestamp};
use crate::error;
use crate::lang::Error;
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Instant;

type Result<T> = std::result::Result<T, Error>;

enum Source {
    Real(Instant),
    Stepped { now: u64, step: u64 },
}

/// Calendar clock kept as an offset from a monotonic source.
pub struct SoftClock {
    base: NaiveDateTime,
    origin: u64,
    source: Source,
}

impl Default for SoftClock {
    fn default() -> SoftClock {
        SoftClock::new()
    }
}

impl SoftClock {
    /// Wall-clock time, starting at the local date and time.
    pub fn new() -> SoftClock {
        SoftClock {
            base: Local::now().naive_local(),
            origin: 0,
            source: Source::Real(Instant::now()),
        }
    }

    /// Deterministic time: every reading advances by `step` microseconds.
    pub fn stepped(step: u64) -> SoftClock {
        let epoch = NaiveDate::from_ymd_opt(2000, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .unwrap_or_else(|| Local::now().naive_local());
        SoftClock {
            base: epoch,
            origin: 0,
            source: Source::Stepped { now: 0, step },
        }
    }

    fn elapsed(&mut self) -> u64 {
        match &mut self.source {
            Source::Real(start) => start.elapsed().as_micros() as u64,
            Source::Stepped { now, step } => {
                *now += *step;
                *now
            }
        }
    }

    fn current(&mut self) -> NaiveDateTime {
        let delta = self.elapsed().saturating_sub(self.origin);
        self.base
            .checked_add_signed(Duration::microseconds(delta as i64))
            .unwrap_or(self.base)
    }

    fn rebase(&mut self, base: NaiveDateTime) {
        self.base = base;
        self.origin = self.elapsed();
    }
}

impl Clock for SoftClock {
    fn set_calendar(&mut self, year: i32, month: u32, day: u32) {
        let current = self.current();
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => self.rebase(date.and_time(current.time())),
            None => tracing::warn!(year, month, day, "invalid calendar date ignored"),
        }
    }

    fn set_clock(&mut self, hour: u32, minute: u32, second: u32, micros: u32) {
        let current = self.current();
        match NaiveTime::from_hms_micro_opt(hour, minute, second, micros) {
            Some(time) => self.rebase(current.date().and_time(time)),
            None => tracing::warn!(hour, minute, second, "invalid clock time ignored"),
        }
    }

    fn now(&mut self) -> Timestamp {
        let now = self.current();
        Timestamp {
            year: now.year(),
            month: now.month(),
            week: now.weekday().num_days_from_sunday(),
            day: now.day(),
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
            micros: now.nanosecond() / 1000 % 1_000_000,
        }
    }

    fn micros(&mut self) -> u64 {
        self.elapsed()
    }
}

pub const EEPROM_CHIPS: usize = 8;
pub const EEPROM_SIZE: usize = 32768;

struct EepromState {
    chips: Vec<Vec<u8>>,
    image: Option<PathBuf>,
    budget: Option<usize>,
}

/// Eight 32 KiB chips, optionally persisted to an image file.
///
/// The image is the chips back to back followed by a little-endian CRC-32
/// of everything before it. A missing or corrupt image starts blank.
#[derive(Clone)]
pub struct SimEeprom {
    state: Rc<RefCell<EepromState>>,
}

impl Default for SimEeprom {
    fn default() -> SimEeprom {
        SimEeprom::new()
    }
}

impl SimEeprom {
    pub fn new() -> SimEeprom {
        SimEeprom {
            state: Rc::new(RefCell::new(EepromState {
                chips: vec![vec![0; EEPROM_SIZE]; EEPROM_CHIPS],
                image: None,
                budget: None,
            })),
        }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> SimEeprom {
        let eeprom = SimEeprom::new();
        let path = path.as_ref().to_path_buf();
        match std::fs::read(&path) {
            Ok(bytes) => match SimEeprom::decode(&bytes) {
                Some(chips) => eeprom.state.borrow_mut().chips = chips,
                None => tracing::warn!(path = %path.display(), "EEPROM image rejected"),
            },
            Err(e) => tracing::debug!(path = %path.display(), error = %e, "no EEPROM image"),
        }
        eeprom.state.borrow_mut().image = Some(path);
        eeprom
    }

    /// After `transfers` more successful reads or writes, every access fails.
    pub fn fail_after(&self, transfers: usize) {
        self.state.borrow_mut().budget = Some(transfers);
    }

    pub fn peek(&self, chip: usize, address: usize, len: usize) -> Vec<u8> {
        let state = self.state.borrow();
        state
            .chips
            .get(chip)
            .and_then(|c| c.get(address..address + len))
            .map(|b| b.to_vec())
            .unwrap_or_default()
    }

    fn decode(bytes: &[u8]) -> Option<Vec<Vec<u8>>> {
        if bytes.len() != EEPROM_CHIPS * EEPROM_SIZE + 4 {
            return None;
        }
        let (data, tail) = bytes.split_at(EEPROM_CHIPS * EEPROM_SIZE);
        let stored = u32::from_le_bytes([tail[0], tail[1], tail[2], tail[3]]);
        if crc::crc32::checksum_ieee(data) != stored {
            return None;
        }
        Some(data.chunks(EEPROM_SIZE).map(|c| c.to_vec()).collect())
    }

    fn persist(state: &EepromState) -> Result<()> {
        let path = match &state.image {
            Some(path) => path,
            None => return Ok(()),
        };
        let mut bytes: Vec<u8> = state.chips.concat();
        let crc = crc::crc32::checksum_ieee(&bytes);
        bytes.extend_from_slice(&crc.to_le_bytes());
        std::fs::write(path, bytes).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "EEPROM image not saved");
            error!(DeviceError; "IMAGE NOT SAVED")
        })
    }

    fn access(state: &mut EepromState, chip: u8, address: usize, len: usize) -> Result<()> {
        if chip as usize >= EEPROM_CHIPS {
            return Err(error!(DeviceError; "NO ACKNOWLEDGE"));
        }
        if address + len > EEPROM_SIZE {
            return Err(error!(OutOfRange; "EEPROM ADDRESS"));
        }
        match state.budget {
            Some(0) => Err(error!(DeviceError; "NO ACKNOWLEDGE")),
            Some(n) => {
                state.budget = Some(n - 1);
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl Eeprom for SimEeprom {
    fn write(&mut self, chip: u8, address: usize, bytes: &[u8]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        SimEeprom::access(&mut state, chip, address, bytes.len())?;
        state.chips[chip as usize][address..address + bytes.len()].copy_from_slice(bytes);
        tracing::debug!(chip, address, len = bytes.len(), "eeprom write");
        SimEeprom::persist(&state)
    }

    fn read(&mut self, chip: u8, address: usize, len: usize) -> Result<Vec<u8>> {
        let mut state = self.state.borrow_mut();
        SimEeprom::access(&mut state, chip, address, len)?;
        tracing::debug!(chip, address, len, "eeprom read");
        Ok(state.chips[chip as usize][address..address + len].to_vec())
    }
}

#[derive(Default)]
struct Sequence {
    frames: Vec<u32>,
    repeat: u32,
    frame: usize,
}

impl Sequence {
    fn new(frames: &[u32], repeat: u32) -> Sequence {
        Sequence {
            frames: frames.to_vec(),
            repeat,
            frame: 0,
        }
    }

    fn is_done(&self) -> bool {
        self.frames.is_empty()
    }

    /// Next frame; a repeat of zero loops forever.
    fn advance(&mut self) -> Option<u32> {
        let word = *self.frames.get(self.frame)?;
        self.frame += 1;
        if self.frame == self.frames.len() {
            self.frame = 0;
            match self.repeat {
                0 => {}
                1 => self.frames.clear(),
                _ => self.repeat -= 1,
            }
        }
        Some(word)
    }
}

#[derive(Default)]
struct GpioState {
    sequence: Sequence,
    output: u32,
    inputs: u32,
}

/// GPIO sequencer: one pattern word is driven onto the port per tick.
#[derive(Clone, Default)]
pub struct SimGpio {
    state: Rc<RefCell<GpioState>>,
}

impl SimGpio {
    pub fn new() -> SimGpio {
        SimGpio::default()
    }

    pub fn output(&self) -> u32 {
        self.state.borrow().output
    }

    pub fn pattern(&self) -> Vec<u32> {
        self.state.borrow().sequence.frames.clone()
    }

    pub fn is_playing(&self) -> bool {
        !self.state.borrow().sequence.is_done()
    }

    pub fn set_input(&self, pin: u32, high: bool) {
        let mut state = self.state.borrow_mut();
        let bit = 1u32.checked_shl(pin).unwrap_or(0);
        if high {
            state.inputs |= bit;
        } else {
            state.inputs &= !bit;
        }
    }
}

impl Gpio for SimGpio {
    fn set(&mut self, pattern: &[u32], repeat: u32) {
        tracing::debug!(frames = pattern.len(), repeat, "gpio pattern");
        self.state.borrow_mut().sequence = Sequence::new(pattern, repeat);
    }

    fn clear(&mut self, mask: u32, stay: bool) {
        let mut state = self.state.borrow_mut();
        state.output &= !mask;
        if !stay {
            state.sequence = Sequence::default();
        }
    }

    fn input(&mut self, pin: u32) -> bool {
        let inputs = self.state.borrow().inputs;
        inputs.checked_shr(pin).map(|b| b & 1 == 1).unwrap_or(false)
    }

    fn service(&mut self) {
        let mut state = self.state.borrow_mut();
        if let Some(word) = state.sequence.advance() {
            state.output = word;
        }
    }
}

#[derive(Default)]
struct SoundState {
    music: Sequence,
    interrupt: Sequence,
    bpm: u32,
    note: u32,
}

/// Sound sequencer. Each tick plays one note word, interrupt music first.
#[derive(Clone, Default)]
pub struct SimSound {
    state: Rc<RefCell<SoundState>>,
}

impl SimSound {
    pub fn new() -> SimSound {
        SimSound::default()
    }

    pub fn bpm(&self) -> u32 {
        self.state.borrow().bpm
    }

    pub fn note(&self) -> u32 {
        self.state.borrow().note
    }

    pub fn music(&self) -> Vec<u32> {
        self.state.borrow().music.frames.clone()
    }

    pub fn interrupt_music(&self) -> Vec<u32> {
        self.state.borrow().interrupt.frames.clone()
    }

    pub fn is_playing(&self) -> bool {
        let state = self.state.borrow();
        !state.music.is_done() || !state.interrupt.is_done()
    }
}

impl Sound for SimSound {
    fn set(&mut self, music: &[u32], repeat: u32) {
        tracing::debug!(notes = music.len(), repeat, "sound set");
        self.state.borrow_mut().music = Sequence::new(music, repeat);
    }

    fn interrupt(&mut self, music: &[u32], repeat: u32) {
        tracing::debug!(notes = music.len(), repeat, "sound interrupt");
        self.state.borrow_mut().interrupt = Sequence::new(music, repeat);
    }

    fn clear(&mut self) {
        let mut state = self.state.borrow_mut();
        state.music = Sequence::default();
        state.interrupt = Sequence::default();
        state.note = 0;
    }

    fn beat(&mut self, bpm: u32) {
        self.state.borrow_mut().bpm = bpm;
    }

    fn service(&mut self) {
        let mut state = self.state.borrow_mut();
        let note = match state.interrupt.advance() {
            Some(note) => Some(note),
            None => state.music.advance(),
        };
        state.note = note.unwrap_or(0);
    }
}

pub const HEAP_WORDS: usize = 16384;

#[derive(Default)]
struct HeapState {
    blocks: HashMap<Handle, Vec<u32>>,
    next: Handle,
    used: usize,
}

/// Word heap with a fixed budget. Handle 0 is never issued.
#[derive(Clone, Default)]
pub struct SimHeap {
    state: Rc<RefCell<HeapState>>,
}

impl SimHeap {
    pub fn new() -> SimHeap {
        SimHeap::default()
    }

    pub fn live(&self) -> usize {
        self.state.borrow().blocks.len()
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.state.borrow().blocks.contains_key(&handle)
    }

    pub fn used(&self) -> usize {
        self.state.borrow().used
    }
}

fn span(block: &[u32], offset: usize, len: usize) -> Result<std::ops::Range<usize>> {
    let end = offset.checked_add(len).ok_or_else(|| error!(OutOfRange))?;
    if end > block.len() {
        return Err(error!(OutOfRange; "HEAP"));
    }
    Ok(offset..end)
}

impl Heap for SimHeap {
    fn alloc(&mut self, words: usize) -> Result<Handle> {
        let mut state = self.state.borrow_mut();
        if state.used + words > HEAP_WORDS {
            return Err(error!(OutOfMemory));
        }
        state.next = state.next.wrapping_add(1).max(1);
        let handle = state.next;
        state.blocks.insert(handle, vec![0; words]);
        state.used += words;
        tracing::trace!(handle, words, "heap alloc");
        Ok(handle)
    }

    fn free(&mut self, handle: Handle) {
        let mut state = self.state.borrow_mut();
        if let Some(block) = state.blocks.remove(&handle) {
            state.used -= block.len();
            tracing::trace!(handle, "heap free");
        }
    }

    fn fill(&mut self, handle: Handle, word: u32) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let block = state
            .blocks
            .get_mut(&handle)
            .ok_or_else(|| error!(InternalError; "BAD HANDLE"))?;
        block.iter_mut().for_each(|w| *w = word);
        Ok(())
    }

    fn count(&self, handle: Handle) -> Result<usize> {
        self.state
            .borrow()
            .blocks
            .get(&handle)
            .map(|b| b.len())
            .ok_or_else(|| error!(InternalError; "BAD HANDLE"))
    }

    fn store(&mut self, handle: Handle, offset: usize, words: &[u32]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        let block = state
            .blocks
            .get_mut(&handle)
            .ok_or_else(|| error!(InternalError; "BAD HANDLE"))?;
        let range = span(block, offset, words.len())?;
        block[range].copy_from_slice(words);
        Ok(())
    }

    fn load(&self, handle: Handle, offset: usize, len: usize) -> Result<Vec<u32>> {
        let state = self.state.borrow();
        let block = state
            .blocks
            .get(&handle)
            .ok_or_else(|| error!(InternalError; "BAD HANDLE"))?;
        let range = span(block, offset, len)?;
        Ok(block[range].to_vec())
    }
}
