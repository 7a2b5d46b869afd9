use super::Error;
use crate::error;
use std::ops::Range;

type Result<T> = std::result::Result<T, Error>;

/// Marks a line as carrying a label.
pub const LABEL_MARKER: u8 = b'.';

/// ## Fixed-capacity store of fixed-width text lines
///
/// The store is both the program and its memory. Every slot holds up to
/// `row - 1` bytes of text followed by a NUL; everything after the content
/// is zero ("line-clean") after any write. Slot 0 is reserved and the last
/// slot is the input buffer.

#[derive(Clone, PartialEq)]
pub struct LineStore {
    row: usize,
    bytes: Vec<u8>,
}

/// What `skip_leading` found at the front of a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Leading {
    /// Byte offset of the first token after spaces and an optional label.
    pub offset: usize,
    /// Span of the label name, marker excluded.
    pub label: Option<Range<usize>>,
}

impl std::fmt::Debug for LineStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_map();
        for index in 0..self.len() {
            let text = self.read(index).unwrap_or_default();
            if !text.is_empty() {
                list.entry(&index, &text);
            }
        }
        list.finish()
    }
}

impl LineStore {
    pub fn new(lines: usize, row: usize) -> LineStore {
        LineStore {
            row,
            bytes: vec![0; lines * row],
        }
    }

    pub fn len(&self) -> usize {
        if self.row == 0 {
            0
        } else {
            self.bytes.len() / self.row
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Slot width including the terminating NUL.
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn input_slot(&self) -> usize {
        self.len().saturating_sub(1)
    }

    fn slot(&self, index: usize) -> Result<&[u8]> {
        if index >= self.len() {
            return Err(error!(OutOfRange, index));
        }
        Ok(&self.bytes[index * self.row..(index + 1) * self.row])
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut [u8]> {
        if index >= self.len() {
            return Err(error!(OutOfRange, index));
        }
        let row = self.row;
        Ok(&mut self.bytes[index * row..(index + 1) * row])
    }

    /// Raw slot bytes, content plus zero fill.
    pub fn raw(&self, index: usize) -> Result<&[u8]> {
        self.slot(index)
    }

    pub fn read(&self, index: usize) -> Result<&str> {
        let slot = self.slot(index)?;
        let end = slot.iter().position(|&b| b == 0).unwrap_or(slot.len());
        match std::str::from_utf8(&slot[..end]) {
            Ok(s) => Ok(s),
            Err(e) => Ok(std::str::from_utf8(&slot[..e.valid_up_to()]).unwrap_or_default()),
        }
    }

    pub fn is_blank(&self, index: usize) -> bool {
        match self.slot(index) {
            Ok(slot) => slot[0] == 0,
            Err(_) => true,
        }
    }

    pub fn write(&mut self, index: usize, text: &str) -> Result<()> {
        let row = self.row;
        let slot = self.slot_mut(index)?;
        let text = match text.find('\0') {
            Some(nul) => &text[..nul],
            None => text,
        };
        let mut len = text.len().min(row.saturating_sub(1));
        while !text.is_char_boundary(len) {
            len -= 1;
        }
        slot[..len].copy_from_slice(&text.as_bytes()[..len]);
        for b in slot[len..].iter_mut() {
            *b = 0;
        }
        Ok(())
    }

    /// Writes bytes that did not come from a `&str`, such as an EEPROM record.
    pub fn write_bytes(&mut self, index: usize, bytes: &[u8]) -> Result<()> {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let text = String::from_utf8_lossy(&bytes[..end]);
        self.write(index, &text)
    }

    pub fn clear_line(&mut self, index: usize) -> Result<()> {
        self.write(index, "")
    }

    pub fn clear(&mut self) {
        for b in self.bytes.iter_mut() {
            *b = 0;
        }
    }

    /// Strips leading spaces and an optional label. An unterminated label
    /// gets a trailing space so scans for the next space always stop.
    pub fn skip_leading(&mut self, index: usize) -> Result<Leading> {
        let row = self.row;
        let slot = self.slot_mut(index)?;
        let content = slot.iter().position(|&b| b == 0).unwrap_or(row);
        let mut offset = slot[..content].iter().take_while(|&&b| b == b' ').count();
        if offset >= content || slot[offset] != LABEL_MARKER {
            return Ok(Leading {
                offset,
                label: None,
            });
        }
        let start = offset + 1;
        let mut end = start;
        while end < content && slot[end] != b' ' {
            end += 1;
        }
        if end == content {
            if content + 1 < row {
                slot[content] = b' ';
            } else if content > start {
                end -= 1;
                while end > start && slot[end] & 0xC0 == 0x80 {
                    end -= 1;
                }
                slot[end] = b' ';
                for b in slot[end + 1..content].iter_mut() {
                    *b = 0;
                }
            }
        }
        let label = start..end;
        offset = end;
        let content = slot.iter().position(|&b| b == 0).unwrap_or(row);
        while offset < content && slot[offset] == b' ' {
            offset += 1;
        }
        Ok(Leading {
            offset,
            label: Some(label),
        })
    }

    /// Shifts `index..last` down one slot; the text in `last` is lost.
    pub fn insert(&mut self, index: usize, last: usize) -> Result<()> {
        if index > last || last >= self.len() {
            return Err(error!(OutOfRange, index));
        }
        let row = self.row;
        self.bytes
            .copy_within(index * row..last * row, (index + 1) * row);
        self.clear_line(index)
    }

    /// Shifts `index + 1..=last` up one slot and clears `last`.
    pub fn remove(&mut self, index: usize, last: usize) -> Result<()> {
        if index > last || last >= self.len() {
            return Err(error!(OutOfRange, index));
        }
        let row = self.row;
        self.bytes
            .copy_within((index + 1) * row..(last + 1) * row, index * row);
        self.clear_line(last)
    }
}
