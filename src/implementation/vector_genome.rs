//! A representation of a genome as `Vec` of positions.

use crate::interface::{circular_offset, circular_position, Genome, Position, TeId};
use log::{debug, trace};
use std::collections::BTreeMap;

/// The stored content of a single position.
/// Whether a TE is active is not stored per position, but looked up in the active elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Nucleotide {
    Empty,
    Element(TeId),
}

/// A genome stored as vector of positions.
///
/// Positions can be accessed in constant time, but inserting a TE shifts all later positions.
/// Disabling a TE only removes it from the active elements and never touches the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorGenome {
    nucleotides: Vec<Nucleotide>,
    /// Maps the active TEs to their lengths.
    active_elements: BTreeMap<TeId, usize>,
    next_te_id: TeId,
}

impl VectorGenome {
    fn allocate_te_id(&mut self) -> TeId {
        let te = self.next_te_id;
        self.next_te_id = te.successor();
        te
    }

    fn resolve(&self, nucleotide: Nucleotide) -> Position {
        match nucleotide {
            Nucleotide::Empty => Position::Empty,
            Nucleotide::Element(te) if self.active_elements.contains_key(&te) => {
                Position::ActiveTe(te)
            }
            Nucleotide::Element(te) => Position::DisabledTe(te),
        }
    }

    /// Inserts a new TE before the nucleotide at `pos`, which must be a valid index or zero.
    fn insert_element(&mut self, pos: usize, length: usize) -> TeId {
        let te = self.allocate_te_id();
        if length == 0 {
            debug!("Inserted TE {} without positions", te);
            return te;
        }

        if let Some(Nucleotide::Element(hit)) = self.nucleotides.get(pos).copied() {
            if self.active_elements.remove(&hit).is_some() {
                trace!("TE {} at position {} disables TE {}", te, pos, hit);
            }
        }

        self.nucleotides.splice(
            pos..pos,
            std::iter::repeat(Nucleotide::Element(te)).take(length),
        );
        self.active_elements.insert(te, length);
        debug!(
            "Inserted TE {} of length {} at position {}, genome length is now {}",
            te,
            length,
            pos,
            self.nucleotides.len()
        );
        te
    }
}

impl Genome for VectorGenome {
    fn new(len: usize) -> Self {
        Self {
            nucleotides: vec![Nucleotide::Empty; len],
            active_elements: Default::default(),
            next_te_id: TeId::first(),
        }
    }

    fn insert_te(&mut self, pos: isize, length: usize) -> TeId {
        let pos = circular_position(pos, self.len());
        self.insert_element(pos, length)
    }

    fn copy_te(&mut self, te: TeId, offset: isize) -> Option<TeId> {
        let length = self.te_len(te)?;
        let start = self.te_start(te)?;
        let destination = circular_offset(start, offset, self.len());
        debug!(
            "Copying TE {} from position {} to position {}",
            te, start, destination
        );
        Some(self.insert_element(destination, length))
    }

    fn disable_te(&mut self, te: TeId) {
        if self.active_elements.remove(&te).is_some() {
            debug!("Disabled TE {}", te);
        }
    }

    fn active_tes(&self) -> Vec<TeId> {
        self.active_elements.keys().copied().collect()
    }

    fn len(&self) -> usize {
        self.nucleotides.len()
    }

    fn te_len(&self, te: TeId) -> Option<usize> {
        self.active_elements.get(&te).copied()
    }

    fn te_start(&self, te: TeId) -> Option<usize> {
        if !self.active_elements.contains_key(&te) {
            return None;
        }

        // Active TEs are never split, so their first nucleotide is their start.
        self.nucleotides
            .iter()
            .position(|&nucleotide| nucleotide == Nucleotide::Element(te))
    }

    fn position(&self, pos: isize) -> Option<Position> {
        let pos = circular_position(pos, self.len());
        self.nucleotides
            .get(pos)
            .map(|&nucleotide| self.resolve(nucleotide))
    }

    fn positions(&self) -> Box<dyn '_ + Iterator<Item = Position>> {
        Box::new(
            self.nucleotides
                .iter()
                .map(move |&nucleotide| self.resolve(nucleotide)),
        )
    }
}

impl std::fmt::Display for VectorGenome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for position in self.positions() {
            write!(f, "{}", position.as_char())?;
        }

        Ok(())
    }
}
