pub const TYPEWRITER_TICK_MS: u64 = 100;

/// Reveals a title one character per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    pub fn displayed(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= self.chars.len()
    }

    /// Returns false once there is nothing left to reveal.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.shown += 1;
        true
    }
}
