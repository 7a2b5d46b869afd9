use crate::error;
use crate::hal::{Handle, Heap};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// One `arr` slot. A zero handle marks the slot empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawArray {
    pub handle: Handle,
    pub width: u8,
    pub len: usize,
}

/// ## Raw-data array table
///
/// Integer arrays of 1, 2 or 4 byte elements packed little-endian into heap
/// words. The sequencers and `pict` read them back element by element.

#[derive(Debug)]
pub struct RawTable {
    entries: Vec<RawArray>,
}

impl RawTable {
    pub fn new(capacity: usize) -> RawTable {
        RawTable {
            entries: vec![RawArray::default(); capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    pub fn in_use(&self) -> usize {
        self.entries.iter().filter(|e| e.handle != 0).count()
    }

    pub fn get(&self, id: usize) -> Option<&RawArray> {
        self.entries.get(id).filter(|e| e.handle != 0)
    }

    /// Replaces slot `id` with a fresh array holding `values`.
    pub fn create(&mut self, id: usize, values: &[u32], width: u8, heap: &mut dyn Heap) -> Result<()> {
        if id >= self.entries.len() {
            return Err(error!(OutOfRange; "ARRAY ID"));
        }
        if !matches!(width, 1 | 2 | 4) {
            return Err(error!(SyntaxError; "ARRAY WIDTH"));
        }
        self.free(id, heap);
        let words = pack(values, width);
        let handle = heap.alloc(words.len().max(1))?;
        if let Err(e) = heap.fill(handle, 0).and_then(|_| heap.store(handle, 0, &words)) {
            heap.free(handle);
            return Err(e);
        }
        self.entries[id] = RawArray {
            handle,
            width,
            len: values.len(),
        };
        tracing::debug!(id, handle, width, len = values.len(), "array created");
        Ok(())
    }

    /// Returns false when the slot was already empty.
    pub fn free(&mut self, id: usize, heap: &mut dyn Heap) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) if entry.handle != 0 => {
                heap.free(entry.handle);
                *entry = RawArray::default();
                true
            }
            _ => false,
        }
    }

    pub fn free_all(&mut self, heap: &mut dyn Heap) {
        for id in 0..self.entries.len() {
            self.free(id, heap);
        }
    }

    pub fn elements(&self, id: usize, heap: &dyn Heap) -> Result<Vec<u32>> {
        let entry = self.get(id).ok_or_else(|| error!(OutOfRange; "ARRAY ID"))?;
        let per_word = 4 / entry.width as usize;
        let needed = (entry.len + per_word - 1) / per_word;
        if heap.count(entry.handle)? < needed {
            return Err(error!(InternalError; "ARRAY SIZE"));
        }
        let words = heap.load(entry.handle, 0, needed)?;
        Ok(unpack(&words, entry.width, entry.len))
    }
}

fn mask(width: u8) -> u32 {
    if width >= 4 {
        u32::max_value()
    } else {
        (1u32 << (width as u32 * 8)) - 1
    }
}

fn pack(values: &[u32], width: u8) -> Vec<u32> {
    let per_word = 4 / width as usize;
    let bits = width as usize * 8;
    values
        .chunks(per_word)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u32, |word, (i, v)| word | (v & mask(width)) << (i * bits) as u32)
        })
        .collect()
}

fn unpack(words: &[u32], width: u8, len: usize) -> Vec<u32> {
    let per_word = 4 / width as usize;
    let bits = width as usize * 8;
    (0..len)
        .map(|i| {
            let word = words.get(i / per_word).copied().unwrap_or(0);
            (word >> ((i % per_word) * bits) as u32) & mask(width)
        })
        .collect()
}
