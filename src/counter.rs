//! Count-up animation for the about section stats.
//!
//! A stat value such as `"50+"` is split into a target (`50`) and a suffix (`"+"`). The
//! counter then climbs from zero to the target in fixed ticks and stops exactly on it.

pub const COUNTER_DURATION_MS: u64 = 2000;
pub const COUNTER_TICK_MS: u64 = 16;
pub const TOTAL_TICKS: u64 = COUNTER_DURATION_MS / COUNTER_TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatValue {
    raw: String,
    target: Option<u64>,
    suffix: String,
}

impl StatValue {
    /// Splits off the leading run of ASCII digits. Values without one (or with one too
    /// large for a `u64`) are kept as static text.
    pub fn parse(value: &str) -> Self {
        let digits = value
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(value.len());
        let target = if digits == 0 {
            None
        } else {
            value[..digits].parse::<u64>().ok()
        };
        let suffix = match target {
            Some(_) => value[digits..].to_string(),
            None => String::new(),
        };
        Self {
            raw: value.to_string(),
            target,
            suffix,
        }
    }

    pub fn target(&self) -> Option<u64> {
        self.target
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn is_animated(&self) -> bool {
        self.target.is_some()
    }

    /// Text to show for the given count. Static values ignore the count.
    pub fn display(&self, count: u64) -> String {
        match self.target {
            Some(_) => format!("{count}{}", self.suffix),
            None => self.raw.clone(),
        }
    }
}

/// Tick-driven counter from zero to `target`.
///
/// After tick `k` the value is `floor(target * k / TOTAL_TICKS)`, so it never decreases,
/// never exceeds the target, and lands on it at the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    ticks: u64,
    current: u64,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            ticks: 0,
            current: 0,
        }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// A zero target is finished before the first tick.
    pub fn is_finished(&self) -> bool {
        self.current >= self.target
    }

    pub fn tick(&mut self) -> u64 {
        if self.is_finished() {
            return self.current;
        }
        self.ticks += 1;
        let value = (self.target as u128 * self.ticks as u128 / TOTAL_TICKS as u128) as u64;
        self.current = if self.ticks >= TOTAL_TICKS {
            self.target
        } else {
            value.min(self.target)
        };
        self.current
    }
}

impl Iterator for CountUp {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.is_finished() {
            None
        } else {
            Some(self.tick())
        }
    }
}
