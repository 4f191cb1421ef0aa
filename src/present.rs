//! Present-mode navigation.
//!
//! A session only exists while presenting; leaving it drops all state, so the
//! next entry starts again at the first slide with notes hidden.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentCommand {
    Next,
    Prev,
    ToggleNotes,
    Exit,
}

impl PresentCommand {
    /// Keyboard binding: arrows and space navigate, `n` toggles notes,
    /// Escape leaves.
    pub fn from_key(key: &str) -> Option<PresentCommand> {
        match key {
            "ArrowRight" | " " => Some(PresentCommand::Next),
            "ArrowLeft" => Some(PresentCommand::Prev),
            "Escape" => Some(PresentCommand::Exit),
            "n" | "N" => Some(PresentCommand::ToggleNotes),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentSession {
    index: usize,
    slide_count: usize,
    show_notes: bool,
}

/// Result of feeding a command to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Stay(PresentSession),
    Exited,
}

impl PresentSession {
    /// Start presenting. Returns `None` when there is nothing to present.
    pub fn enter(slide_count: usize) -> Option<Self> {
        (slide_count > 0).then_some(Self {
            index: 0,
            slide_count,
            show_notes: false,
        })
    }

    /// Rebuild a session from request state, clamping the index.
    pub fn restore(slide_count: usize, index: usize, show_notes: bool) -> Option<Self> {
        let mut session = Self::enter(slide_count)?;
        session.index = index.min(slide_count - 1);
        session.show_notes = show_notes;
        Some(session)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn show_notes(&self) -> bool {
        self.show_notes
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.slide_count
    }

    pub fn next(&mut self) {
        if !self.is_last() {
            self.index += 1;
        }
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn toggle_notes(&mut self) {
        self.show_notes = !self.show_notes;
    }

    pub fn exit(self) -> Step {
        Step::Exited
    }

    pub fn apply(mut self, command: PresentCommand) -> Step {
        match command {
            PresentCommand::Next => self.next(),
            PresentCommand::Prev => self.prev(),
            PresentCommand::ToggleNotes => self.toggle_notes(),
            PresentCommand::Exit => return self.exit(),
        }
        Step::Stay(self)
    }

    /// "3 / 10"
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.slide_count)
    }
}
