use crate::lang::LineStore;

/// The editor view: every non-empty line with its number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    lines: Vec<(usize, String)>,
}

impl Listing {
    /// Snapshot of `store`, without the input slot.
    pub fn new(store: &LineStore) -> Listing {
        let lines = (0..store.input_slot())
            .filter_map(|index| match store.read(index) {
                Ok(text) if !text.is_empty() => Some((index, text.to_string())),
                _ => None,
            })
            .collect();
        Listing { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, number: usize) -> Option<&str> {
        self.lines
            .iter()
            .find(|(n, _)| *n == number)
            .map(|(_, text)| text.as_str())
    }

    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines.iter().map(|(n, text)| (*n, text.as_str()))
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (number, text) in &self.lines {
            writeln!(f, "{:>3} {}", number, text)?;
        }
        Ok(())
    }
}
