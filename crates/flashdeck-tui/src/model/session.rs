use flashdeck_core::Concept;

/// All mutable page state: link text, loading flag, concept list.
///
/// Everything here starts empty and dies with the process; nothing is
/// persisted. Mutation happens only through the methods below, driven by the
/// app's update loop.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Current link text.
    pub link: String,
    /// Byte offset of the edit cursor into `link`.
    pub cursor: usize,
    /// True exactly while an analyze request is in flight.
    pub loading: bool,
    /// Ordered concept list; replaced wholesale on a response.
    pub concepts: Vec<Concept>,
    /// Index of the card highlighted for discard.
    pub selected: usize,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Link editing ────────────────────────────────────────────────

    pub fn insert_char(&mut self, ch: char) {
        self.link.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Delete the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.link[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.link.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.link[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.link.len() {
            self.cursor += self.link[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.link.len();
    }

    // ── Concept list ────────────────────────────────────────────────

    /// Replace the whole list with a fresh response.
    pub fn replace_concepts(&mut self, concepts: Vec<Concept>) {
        self.concepts = concepts;
        self.selected = 0;
    }

    /// Empty the list (failure path).
    pub fn clear_concepts(&mut self) {
        self.concepts.clear();
        self.selected = 0;
    }

    /// Remove the element currently at `index`, keeping relative order of the
    /// rest. Filter-by-index semantics: an out-of-range index is a no-op.
    pub fn discard(&mut self, index: usize) {
        let mut i = 0;
        self.concepts.retain(|_| {
            let keep = i != index;
            i += 1;
            keep
        });
        self.clamp_selected();
    }

    /// Keep the selection cursor inside the list after mutations.
    pub fn clamp_selected(&mut self) {
        self.selected = self.selected.min(self.concepts.len().saturating_sub(1));
    }
}
