/// Which of the two seats a piece belongs to. This is what the board
/// stores; the matching [`Player`] identity lives in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Index into per-side arrays (players, scores)
    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }
}

/// A player's identity: display name and display color. Immutable after
/// creation; shared read-only between the engine and the presentation
/// layer via `Arc<Player>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: String,
}

impl Player {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display color as a CSS-style string, e.g. `#e63946` or `red`
    pub fn color(&self) -> &str {
        &self.color
    }
}
