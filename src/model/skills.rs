#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Next,
    Prev,
    Selected(usize),
}

/// Which skill category tab is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillTabs {
    active: usize,
    len: usize,
}

impl SkillTabs {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether the active tab changed.
    pub fn update(&mut self, message: Message) -> bool {
        if self.len == 0 {
            return false;
        }
        let before = self.active;
        self.active = match message {
            Message::Next => (self.active + 1) % self.len,
            Message::Prev => (self.active + self.len - 1) % self.len,
            Message::Selected(index) if index < self.len => index,
            Message::Selected(_) => self.active,
        };
        before != self.active
    }
}
