//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effects requested by `update`, executed by the runtime
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// The list's data source or contents changed and must be re-rendered
    Redraw,
    /// Ask the host list to scroll so the item at `index` starts at `offset`
    ScrollToOffset { index: usize, offset: f32 },
    /// Report the chosen emoji to the embedder
    EmojiSelected(String),
    /// Report a tap on the dismiss area to the embedder
    PressOutside,
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            // The host re-renders on scroll and reports visibility afterwards
            Cmd::ScrollToOffset { .. } => false,
            // Callbacks belong to the embedder
            Cmd::EmojiSelected(_) => false,
            Cmd::PressOutside => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }
}
