use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub typing: Duration,
    pub deleting: Duration,
    /// Pause once a role is fully typed.
    pub hold: Duration,
    /// Pause once a role is fully erased, before the next one starts.
    pub advance: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(100),
            deleting: Duration::from_millis(50),
            hold: Duration::from_millis(2000),
            advance: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
}

/// Types each role out one character at a time, erases it, and moves on to
/// the next, forever. Each frame is the text to show and how long to wait
/// before asking for the next one.
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<String>,
    timing: TypewriterTiming,
    role: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(roles: Vec<String>, timing: TypewriterTiming) -> Self {
        Self {
            roles,
            timing,
            role: 0,
            chars: 0,
            deleting: false,
        }
    }

    pub fn current_role(&self) -> Option<&str> {
        self.roles.get(self.role).map(String::as_str)
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}

fn prefix(s: &str, chars: usize) -> String {
    s.chars().take(chars).collect()
}

impl Iterator for Typewriter {
    type Item = Frame;

    /// Only ends if there are no roles at all.
    fn next(&mut self) -> Option<Frame> {
        let role = self.roles.get(self.role)?;
        let len = role.chars().count();

        let mut delay = if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            self.timing.deleting
        } else {
            self.chars += 1;
            self.timing.typing
        };
        let text = prefix(role, self.chars);

        if !self.deleting && self.chars >= len {
            self.chars = len;
            self.deleting = true;
            delay = self.timing.hold;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.role = (self.role + 1) % self.roles.len();
            delay = self.timing.advance;
        }

        Some(Frame { text, delay })
    }
}
