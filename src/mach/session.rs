use super::config::Config;
use super::flow::Flow;
use super::raw::RawTable;
use super::stack::LinkStack;
use crate::hal::Heap;
use crate::lang::{LabelTable, LineStore};

/// ## State of one `run`
///
/// Everything a script can change besides the lines themselves. Created once
/// per runtime and reset when a run ends.

#[derive(Debug)]
pub struct Session {
    pub flow: Flow,
    pub link: LinkStack,
    pub labels: LabelTable,
    pub arrays: RawTable,
    stack_offset: usize,
    floor: usize,
}

impl Session {
    pub fn new(config: &Config) -> Session {
        Session {
            flow: Flow::default(),
            link: LinkStack::new(config.link_depth),
            labels: LabelTable::new(config.labels, config.label_len),
            arrays: RawTable::new(config.arrays),
            stack_offset: config.stack_floor(),
            floor: config.stack_floor(),
        }
    }

    pub fn reset(&mut self, heap: &mut dyn Heap) {
        self.flow.reset();
        self.link.clear();
        self.labels.clear();
        self.arrays.free_all(heap);
        self.stack_offset = self.floor;
    }

    pub fn stack_offset(&self) -> usize {
        self.stack_offset
    }

    /// Pushes `text` onto the scratch stack below the input slot.
    pub fn push_scratch(&mut self, lines: &mut LineStore, text: &str) {
        if self.stack_offset > 1 {
            self.stack_offset -= 1;
        } else {
            tracing::warn!("scratch stack full, slot 1 overwritten");
        }
        if let Err(e) = lines.write(self.stack_offset, text) {
            tracing::warn!(error = %e, "scratch push dropped");
        }
    }

    /// `None` when the scratch stack is empty.
    pub fn pop_scratch(&mut self, lines: &mut LineStore) -> Option<String> {
        if self.stack_offset >= self.floor {
            return None;
        }
        let text = lines.read(self.stack_offset).ok()?.to_string();
        if let Err(e) = lines.clear_line(self.stack_offset) {
            tracing::debug!(error = %e, "scratch slot not cleared");
        }
        self.stack_offset += 1;
        Some(text)
    }
}
