/// ## Bounded LIFO of line numbers
///
/// Shared by `call`/`ret` and every loop back-edge. A push on a full stack
/// overwrites the top slot instead of failing. Popping an empty stack gives
/// `None` and changes nothing.

pub struct LinkStack {
    capacity: usize,
    vec: Vec<usize>,
}

impl std::fmt::Debug for LinkStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl LinkStack {
    pub fn new(capacity: usize) -> LinkStack {
        LinkStack {
            capacity,
            vec: Vec::with_capacity(capacity),
        }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.capacity
    }
    pub fn last(&self) -> Option<&usize> {
        self.vec.last()
    }
    pub fn push_saturating(&mut self, line: usize) {
        if self.is_full() {
            tracing::warn!(line, "link stack full, top slot overwritten");
            if let Some(top) = self.vec.last_mut() {
                *top = line;
            }
        } else {
            self.vec.push(line);
        }
    }
    pub fn pop(&mut self) -> Option<usize> {
        self.vec.pop()
    }
    pub fn as_slice(&self) -> &[usize] {
        &self.vec
    }
}
