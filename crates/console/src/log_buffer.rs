//! Fixed-capacity console text that keeps the newest output and prefers to
//! drop whole lines when it has to make room.

pub const DEFAULT_LOG_CAPACITY: usize = 512;

/// What an append did to the existing content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Empty input; nothing changed.
    Unchanged,
    Appended,
    /// Oldest content was dropped to fit. `at_line_boundary` is false when no
    /// suitable line break existed and the cut fell mid-line.
    Evicted {
        evicted: usize,
        at_line_boundary: bool,
    },
    /// Input alone exceeded capacity: all previous content and the head of the
    /// input were discarded.
    Overwritten { discarded: usize },
}

#[derive(Debug, Clone)]
pub struct LogBuffer {
    text: String,
    capacity: usize,
    revision: u64,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

impl LogBuffer {
    /// Capacity is in bytes and fixed for the lifetime of the buffer; the
    /// backing allocation is made once here and never grows.
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            capacity,
            revision: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Bumped on every change so observers can tell whether a redraw is due.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn append(&mut self, incoming: &str) -> AppendOutcome {
        if incoming.is_empty() {
            return AppendOutcome::Unchanged;
        }
        self.revision = self.revision.wrapping_add(1);

        if incoming.len() > self.capacity {
            let start = ceil_char_boundary(incoming, incoming.len() - self.capacity);
            let discarded = self.text.len() + start;
            self.text.clear();
            self.text.push_str(&incoming[start..]);
            return AppendOutcome::Overwritten { discarded };
        }

        let outcome = if self.text.len() + incoming.len() > self.capacity {
            let (cut, at_line_boundary) = match self.line_cut(incoming.len()) {
                Some(cut) if cut < self.text.len() => (cut, true),
                _ => {
                    let overflow = self.text.len() + incoming.len() - self.capacity;
                    (ceil_char_boundary(&self.text, overflow), false)
                }
            };
            self.text.drain(..cut);
            AppendOutcome::Evicted {
                evicted: cut,
                at_line_boundary,
            }
        } else {
            AppendOutcome::Appended
        };

        self.text.push_str(incoming);
        outcome
    }

    /// End of the first run of line terminators whose leading `\n` sits at or
    /// after `min_offset`. Cutting there always frees at least `min_offset + 1`
    /// bytes, which covers any input that fits the capacity on its own. A cut
    /// that reaches the end would empty the log, so callers truncate instead.
    fn line_cut(&self, min_offset: usize) -> Option<usize> {
        let bytes = self.text.as_bytes();
        let newline = bytes
            .iter()
            .skip(min_offset)
            .position(|&byte| byte == b'\n')?
            + min_offset;

        let mut cut = newline;
        while cut < bytes.len() && matches!(bytes[cut], b'\n' | b'\r') {
            cut += 1;
        }
        Some(cut)
    }
}

fn ceil_char_boundary(text: &str, mut index: usize) -> usize {
    while index < text.len() && !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

#[cfg(test)]
#[path = "tests/log_buffer_tests.rs"]
mod tests;
