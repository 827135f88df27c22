//! Identifiers of transposable elements and the contents of single genome positions.

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// The identifier of a transposable element.
/// Identifiers are handed out in strictly increasing order starting from one, and are never reused.
pub struct TeId(usize);

impl TeId {
    /// Returns the identifier given to the first transposable element of a genome.
    pub fn first() -> Self {
        Self(1)
    }

    // We don't wanna have TeId: Into<usize>, to make it hard to accidentally use an identifier as a position.
    /// Get this identifier as `usize`.
    pub fn as_usize(self) -> usize {
        self.0
    }

    /// Returns the identifier handed out after this one.
    pub(crate) fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<usize> for TeId {
    fn from(source: usize) -> Self {
        Self(source)
    }
}

impl std::fmt::Debug for TeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for TeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The content of a single position of a genome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// The position is not part of any transposable element.
    Empty,
    /// The position belongs to the given active transposable element.
    ActiveTe(TeId),
    /// The position belongs to the given transposable element, which was disabled.
    DisabledTe(TeId),
}

impl Position {
    /// Returns the transposable element this position belongs to, if any.
    pub fn te(self) -> Option<TeId> {
        match self {
            Position::Empty => None,
            Position::ActiveTe(te) | Position::DisabledTe(te) => Some(te),
        }
    }

    /// Returns true if this position belongs to an active transposable element.
    pub fn is_active(self) -> bool {
        matches!(self, Position::ActiveTe(_))
    }

    /// Returns the character representing this position in a rendered genome:
    /// `-` if empty, `A` for active and `x` for disabled transposable elements.
    pub fn as_char(self) -> char {
        match self {
            Position::Empty => '-',
            Position::ActiveTe(_) => 'A',
            Position::DisabledTe(_) => 'x',
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::{Position, TeId};

    #[test]
    fn test_te_id_order() {
        let first = TeId::first();
        assert_eq!(first.as_usize(), 1);
        assert_eq!(first.successor(), TeId::from(2));
        assert!(first < first.successor());
        assert_eq!(format!("{:?}", first), "1");
    }

    #[test]
    fn test_position_characters() {
        let te = TeId::from(7);
        assert_eq!(Position::Empty.as_char(), '-');
        assert_eq!(Position::ActiveTe(te).as_char(), 'A');
        assert_eq!(Position::DisabledTe(te).to_string(), "x");
        assert_eq!(Position::Empty.te(), None);
        assert_eq!(Position::DisabledTe(te).te(), Some(te));
        assert!(Position::ActiveTe(te).is_active());
        assert!(!Position::DisabledTe(te).is_active());
    }
}
