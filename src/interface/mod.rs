//! The traits providing the abstractions of this crate.

pub mod position;

pub use position::{Position, TeId};

/// A circular genome whose positions can be occupied by transposable elements (TEs).
///
/// Positions are indexed from `0` to `len() - 1`, and the last position is adjacent to the first.
/// Any position or offset given to a method is therefore taken modulo the length of the genome,
/// so no argument is ever out of range.
///
/// The genome only ever grows: inserting a TE adds positions, and disabling a TE relabels its positions
/// instead of removing them.
///
/// ```rust
/// use transposon_genome::implementation::vector_genome::VectorGenome;
/// use transposon_genome::interface::{Genome, TeId};
///
/// let mut genome = VectorGenome::new(10);
/// let te = genome.insert_te(2, 3);
/// assert_eq!(te, TeId::first());
/// assert_eq!(genome.render(), "--AAA--------");
///
/// // Inserting on top of an active TE disables it.
/// genome.insert_te(2, 2);
/// assert_eq!(genome.render(), "--AAxxx--------");
/// assert_eq!(genome.active_tes(), vec![TeId::from(2)]);
/// ```
pub trait Genome: std::fmt::Display {
    /// Creates a genome with `len` empty positions.
    fn new(len: usize) -> Self
    where
        Self: Sized;

    /// Inserts a new active TE with `length` positions at position `pos` and returns its identifier.
    ///
    /// The new TE occupies the positions `[pos, pos + length)` after the insertion,
    /// and everything that was at or after `pos` before is shifted by `length`.
    /// If the position `pos` belonged to an active TE before the insertion, then that TE gets disabled.
    ///
    /// An insertion of length zero consumes an identifier, but changes nothing else.
    /// In particular, the returned TE never becomes active.
    fn insert_te(&mut self, pos: isize, length: usize) -> TeId;

    /// Copies the active TE `te` to `offset` positions away from its current start.
    /// The offset may be negative, and wraps around the ends of the genome.
    ///
    /// The copy is inserted exactly like [insert_te](Genome::insert_te) does,
    /// so if it lands inside `te` itself, then `te` gets disabled.
    ///
    /// Returns `None` without changing anything if `te` is not active.
    fn copy_te(&mut self, te: TeId, offset: isize) -> Option<TeId>;

    /// Disables `te`, if it is active.
    /// Disabling a TE that is already disabled or that does not exist does nothing.
    fn disable_te(&mut self, te: TeId);

    /// Returns the identifiers of all active TEs in ascending order.
    fn active_tes(&self) -> Vec<TeId>;

    /// Returns the number of positions of the genome.
    fn len(&self) -> usize;

    /// Returns the length of `te`, or `None` if it is not active.
    fn te_len(&self, te: TeId) -> Option<usize>;

    /// Returns the current start position of `te`, or `None` if it is not active.
    fn te_start(&self, te: TeId) -> Option<usize>;

    /// Returns the content of position `pos`, or `None` if the genome has no positions.
    fn position(&self, pos: isize) -> Option<Position>;

    /// Returns an iterator over all positions, starting from position zero.
    fn positions(&self) -> Box<dyn '_ + Iterator<Item = Position>>;

    /// Returns true if the genome has no positions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `te` is active.
    fn is_active(&self, te: TeId) -> bool {
        self.te_len(te).is_some()
    }

    /// Returns the genome as string of one character per position, starting from position zero.
    /// Empty positions are represented by `-`, active TEs by `A` and disabled TEs by `x`.
    fn render(&self) -> String {
        self.positions().map(Position::as_char).collect()
    }
}

/// Maps `pos` into the range `[0, len)`, wrapping around in both directions.
/// Returns zero if `len` is zero.
pub fn circular_position(pos: isize, len: usize) -> usize {
    circular_offset(0, pos, len)
}

/// Returns the position `offset` positions away from `start`, wrapping around in both directions.
/// Returns zero if `len` is zero.
pub fn circular_offset(start: usize, offset: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    // i128 holds any sum of a usize and an isize.
    (start as i128 + offset as i128).rem_euclid(len as i128) as usize
}
