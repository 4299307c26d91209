/// User-intent actions produced by the input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Tick,
    Resize(u16, u16),

    // Link editing
    StartEditing,
    InputChar(char),
    Backspace,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Submission
    Submit,

    // Card list
    MoveUp,
    MoveDown,
    GoTop,
    GoBottom,
    Discard,

    ToggleHelp,
    /// Esc: leave editing mode / dismiss the active overlay.
    Cancel,
    None,
}
