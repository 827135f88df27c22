//! Strongly typed handles into node arenas.

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// A node index that can be `None`.
/// This is a hack to get a small sized `Option<NodeIndex>` by storing the `None` variant as `usize::MAX`.
pub struct OptionalNodeIndex(usize);
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
/// A valid node index.
pub struct NodeIndex(usize);

impl NodeIndex {
    // We don't wanna have NodeIndex: Into<usize>, to make this type strong, i.e. make it hard to accidentally convert it to a position.
    /// Get this index as `usize`.
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl OptionalNodeIndex {
    /// Get this index as `usize`, but return `None` if this index is marked as invalid.
    pub fn as_usize(self) -> Option<usize> {
        if self.0 != usize::MAX {
            Some(self.0)
        } else {
            None
        }
    }

    /// Returns a new `OptionalNodeIndex` that is marked as invalid.
    pub fn new_none() -> Self {
        Self(usize::MAX)
    }

    /// Returns `true` if the index is `None`.
    pub fn is_none(self) -> bool {
        self.as_usize().is_none()
    }

    /// Returns `true` if the index is `Some`.
    pub fn is_some(self) -> bool {
        self.as_usize().is_some()
    }

    /// Returns the node index stored in this optional node index, or `None` if it is marked as invalid.
    pub fn into_option(self) -> Option<NodeIndex> {
        self.into()
    }
}

impl Default for OptionalNodeIndex {
    fn default() -> Self {
        Self::new_none()
    }
}

impl From<usize> for NodeIndex {
    fn from(source: usize) -> Self {
        debug_assert!(source != usize::MAX);
        Self(source)
    }
}

impl From<NodeIndex> for OptionalNodeIndex {
    fn from(source: NodeIndex) -> Self {
        Self(source.0)
    }
}

impl From<Option<NodeIndex>> for OptionalNodeIndex {
    fn from(source: Option<NodeIndex>) -> Self {
        source.map(Self::from).unwrap_or_default()
    }
}

impl From<OptionalNodeIndex> for Option<NodeIndex> {
    fn from(source: OptionalNodeIndex) -> Self {
        source.as_usize().map(NodeIndex)
    }
}

impl std::ops::Add<usize> for NodeIndex {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self::from(self.0 + rhs)
    }
}

impl std::fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Debug for OptionalNodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(value) = self.as_usize() {
            write!(f, "{}", value)
        } else {
            write!(f, "None")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeIndex, OptionalNodeIndex};

    #[test]
    fn test_optional_node_index() {
        let none = OptionalNodeIndex::default();
        assert!(none.is_none());
        assert_eq!(none.into_option(), None);
        assert_eq!(format!("{:?}", none), "None");

        let some = OptionalNodeIndex::from(NodeIndex::from(3));
        assert!(some.is_some());
        assert_eq!(some.as_usize(), Some(3));
        assert_eq!(some.into_option(), Some(NodeIndex::from(3)));
        assert_eq!(OptionalNodeIndex::from(None), none);
    }

    #[test]
    fn test_node_index_add() {
        assert_eq!(NodeIndex::from(3) + 2, NodeIndex::from(5));
        assert_eq!(format!("{:?}", NodeIndex::from(4)), "4");
    }
}
