use super::{Error, LineStore};

type Result<T> = std::result::Result<T, Error>;

/// ## Label name to line number bindings
///
/// Parallel name/number arrays with a fixed capacity. Names are truncated
/// to `name_len` bytes. Lookup is first match, so a later duplicate is
/// unreachable.

#[derive(Debug, Clone, PartialEq)]
pub struct LabelTable {
    capacity: usize,
    name_len: usize,
    names: Vec<String>,
    numbers: Vec<usize>,
}

fn truncate(name: &str, len: usize) -> &str {
    let mut len = len.min(name.len());
    while !name.is_char_boundary(len) {
        len -= 1;
    }
    &name[..len]
}

impl LabelTable {
    pub fn new(capacity: usize, name_len: usize) -> LabelTable {
        LabelTable {
            capacity,
            name_len,
            names: Vec::with_capacity(capacity),
            numbers: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear(&mut self) {
        self.names.clear();
        self.numbers.clear();
    }

    /// Scans `start..` for label lines. Labels past capacity are dropped.
    pub fn rebuild(&mut self, lines: &mut LineStore, start: usize) -> Result<()> {
        self.clear();
        for index in start..lines.len() {
            if self.names.len() >= self.capacity {
                tracing::warn!(line = index, "label table full");
                break;
            }
            let leading = lines.skip_leading(index)?;
            if let Some(span) = leading.label {
                let text = lines.read(index)?;
                let name = text.get(span).unwrap_or_default();
                let name = truncate(name, self.name_len).to_string();
                self.names.push(name);
                self.numbers.push(index);
            }
        }
        tracing::debug!(labels = self.names.len(), start, "label table rebuilt");
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<usize> {
        let name = truncate(name, self.name_len);
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.numbers[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.names
            .iter()
            .map(|s| s.as_str())
            .zip(self.numbers.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(text: &[&str]) -> LineStore {
        let mut lines = LineStore::new(16, 32);
        for (i, t) in text.iter().enumerate() {
            lines.write(i + 1, t).unwrap();
        }
        lines
    }

    #[test]
    fn test_rebuild_and_lookup() {
        let mut lines = store(&["int @9 @9 + 1", ".top print 'x", "  .bottom", "jmp .top"]);
        let mut labels = LabelTable::new(8, 8);
        labels.rebuild(&mut lines, 1).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.lookup("top"), Some(2));
        assert_eq!(labels.lookup("bottom"), Some(3));
        assert_eq!(labels.lookup("middle"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let mut lines = store(&[".dup", ".dup", ".other"]);
        let mut labels = LabelTable::new(8, 8);
        labels.rebuild(&mut lines, 1).unwrap();
        assert_eq!(labels.lookup("dup"), Some(1));
    }

    #[test]
    fn test_names_truncated() {
        let mut lines = store(&[".abcdefghij"]);
        let mut labels = LabelTable::new(8, 4);
        labels.rebuild(&mut lines, 1).unwrap();
        assert_eq!(labels.lookup("abcd"), Some(1));
        assert_eq!(labels.lookup("abcdXYZ"), Some(1));
    }

    #[test]
    fn test_capacity_drops_extra() {
        let mut lines = store(&[".a", ".b", ".c"]);
        let mut labels = LabelTable::new(2, 8);
        labels.rebuild(&mut lines, 1).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.lookup("c"), None);
    }

    #[test]
    fn test_rebuild_from_start_line() {
        let mut lines = store(&[".a", ".b"]);
        let mut labels = LabelTable::new(8, 8);
        labels.rebuild(&mut lines, 2).unwrap();
        assert_eq!(labels.lookup("a"), None);
        assert_eq!(labels.lookup("b"), Some(2));
    }

    #[test]
    fn test_rebuild_idempotent() {
        let mut lines = store(&[".a", "print 'x", ".b jmp .a"]);
        let mut labels = LabelTable::new(8, 8);
        labels.rebuild(&mut lines, 1).unwrap();
        let first = labels.clone();
        let snapshot = lines.clone();
        labels.rebuild(&mut lines, 1).unwrap();
        assert_eq!(labels, first);
        assert_eq!(lines, snapshot);
    }

    #[test]
    fn test_rebuild_full_slot_multibyte_label() {
        let mut lines = LineStore::new(4, 16);
        lines.write(1, ".abcdefghijklé").unwrap();
        let mut labels = LabelTable::new(4, 32);
        labels.rebuild(&mut lines, 1).unwrap();
        assert_eq!(labels.lookup("abcdefghijkl"), Some(1));
        assert_eq!(lines.read(1).unwrap(), ".abcdefghijkl ");
    }
}
