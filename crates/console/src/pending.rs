/// Operator text typed on the keypad, waiting for `OK`.
#[derive(Debug, Clone)]
pub struct PendingInput {
    text: String,
    max_len: usize,
}

pub const DEFAULT_KEYPAD_MAX_LEN: usize = 32;

impl Default for PendingInput {
    fn default() -> Self {
        Self::new(DEFAULT_KEYPAD_MAX_LEN)
    }
}

impl PendingInput {
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::with_capacity(max_len),
            max_len,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns false and leaves the text untouched when the key would push it
    /// past `max_len`.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.text.len() + key.len() > self.max_len {
            return false;
        }
        self.text.push_str(key);
        true
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_keys_past_the_length_limit() {
        let mut pending = PendingInput::new(4);
        assert!(pending.insert("G0"));
        assert!(pending.insert("X1"));
        assert!(!pending.insert("0"));
        assert_eq!(pending.as_str(), "G0X1");
    }

    #[test]
    fn backspace_and_clear_edit_in_place() {
        let mut pending = PendingInput::default();
        pending.insert("G");
        pending.insert("1");
        pending.backspace();
        assert_eq!(pending.as_str(), "G");
        pending.clear();
        assert!(pending.is_empty());
        pending.backspace();
        assert!(pending.is_empty());
    }
}
