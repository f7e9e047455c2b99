/// What a typed character did to the entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryAction {
    Submit,
    Edited,
    Ignored,
}

/// The text box: holds what the user is typing, starting from the displayed identifier.
#[derive(Clone, Debug)]
pub struct Entry {
    text: String,
    max_length: usize,
}

impl Entry {
    pub fn new(max_length: usize) -> Self {
        Self {
            text: String::new(),
            max_length,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn reset(&mut self, current: Option<&str>) {
        self.text.clear();
        self.text.push_str(current.unwrap_or_default());
    }

    pub fn push(&mut self, c: char) -> EntryAction {
        match c {
            '\r' | '\n' => EntryAction::Submit,
            // backspace
            '\u{8}' => match self.text.pop() {
                Some(_) => EntryAction::Edited,
                None => EntryAction::Ignored,
            },
            // delete
            '\u{7f}' => {
                self.text.clear();
                EntryAction::Edited
            }
            c if c.is_control() => EntryAction::Ignored,
            _ if self.text.chars().count() >= self.max_length => EntryAction::Ignored,
            c => {
                self.text.push(c);
                EntryAction::Edited
            }
        }
    }
}
