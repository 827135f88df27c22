//! A representation of a genome as circular singly linked list.

use crate::index::{NodeIndex, OptionalNodeIndex};
use crate::interface::{circular_offset, circular_position, Genome, Position, TeId};
use log::{debug, trace};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    position: Position,
    next: NodeIndex,
}

/// The location of an active TE in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveElement {
    /// The first node of the TE.
    anchor: NodeIndex,
    len: usize,
}

/// A genome stored as circular singly linked list of positions.
///
/// The nodes live in an arena and are addressed by [NodeIndex].
/// Nodes are never removed, so the arena contains exactly the positions of the genome, though not in genome order.
/// The first node of every active TE is known, so active TEs can be disabled and copied without walking from the head.
/// Accessing a position by its number however requires walking the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedGenome {
    nodes: Vec<Node>,
    /// The node at position zero.
    head: OptionalNodeIndex,
    /// The node at the last position, whose successor is the head.
    tail: OptionalNodeIndex,
    active_elements: BTreeMap<TeId, ActiveElement>,
    next_te_id: TeId,
}

/// An iterator over the positions of a [LinkedGenome], starting from the head.
pub struct LinkedGenomeIterator<'a> {
    genome: &'a LinkedGenome,
    current: OptionalNodeIndex,
    remaining: usize,
}

impl LinkedGenome {
    fn allocate_te_id(&mut self) -> TeId {
        let te = self.next_te_id;
        self.next_te_id = te.successor();
        te
    }

    fn node(&self, node: NodeIndex) -> &Node {
        &self.nodes[node.as_usize()]
    }

    fn node_mut(&mut self, node: NodeIndex) -> &mut Node {
        &mut self.nodes[node.as_usize()]
    }

    /// Returns the node reached by following `steps` successor links from `node`.
    fn walk(&self, mut node: NodeIndex, steps: usize) -> NodeIndex {
        for _ in 0..steps {
            node = self.node(node).next;
        }
        node
    }

    /// Returns the node at position `pos`, which must be smaller than the length of the genome.
    fn node_at(&self, pos: usize) -> Option<NodeIndex> {
        let head = self.head.into_option()?;
        Some(self.walk(head, pos))
    }

    /// Returns an iterator over the positions of this genome.
    pub fn iter(&self) -> LinkedGenomeIterator<'_> {
        LinkedGenomeIterator {
            genome: self,
            current: self.head,
            remaining: self.nodes.len(),
        }
    }

    /// Appends `length` new nodes belonging to `te` to the arena, linking the last one to `next`.
    /// The new nodes are not reachable from the list yet.
    /// Returns the first and the last new node.
    fn create_run(
        &mut self,
        te: TeId,
        length: usize,
        next: OptionalNodeIndex,
    ) -> (NodeIndex, NodeIndex) {
        debug_assert!(length > 0);
        let first = NodeIndex::from(self.nodes.len());
        let last = first + (length - 1);
        for offset in 1..length {
            self.nodes.push(Node {
                position: Position::ActiveTe(te),
                next: first + offset,
            });
        }
        self.nodes.push(Node {
            position: Position::ActiveTe(te),
            // A run without successor is its own cycle.
            next: next.into_option().unwrap_or(first),
        });
        (first, last)
    }

    /// Inserts a new TE after `predecessor`, or as the only content if the genome is empty.
    fn insert_element(&mut self, predecessor: Option<NodeIndex>, length: usize) -> TeId {
        let te = self.allocate_te_id();
        if length == 0 {
            debug!("Inserted TE {} without positions", te);
            return te;
        }

        let anchor = if let Some(predecessor) = predecessor {
            debug_assert!(self.head.is_some() && self.tail.is_some());
            let destination = self.node(predecessor).next;
            if let Position::ActiveTe(hit) = self.node(destination).position {
                trace!("TE {} at node {:?} disables TE {}", te, destination, hit);
                self.disable_te(hit);
            }

            let (first, _) = self.create_run(te, length, destination.into());
            self.node_mut(predecessor).next = first;
            if self.head == OptionalNodeIndex::from(destination) {
                self.head = first.into();
            }
            first
        } else {
            debug_assert!(self.head.is_none() && self.tail.is_none());
            let (first, last) = self.create_run(te, length, OptionalNodeIndex::new_none());
            self.head = first.into();
            self.tail = last.into();
            first
        };

        self.active_elements
            .insert(te, ActiveElement { anchor, len: length });
        debug!(
            "Inserted TE {} of length {} at node {:?}, genome length is now {}",
            te,
            length,
            anchor,
            self.nodes.len()
        );
        te
    }
}

impl Genome for LinkedGenome {
    fn new(len: usize) -> Self {
        let nodes: Vec<_> = (0..len)
            .map(|index| Node {
                position: Position::Empty,
                next: NodeIndex::from(if index + 1 == len { 0 } else { index + 1 }),
            })
            .collect();
        let (head, tail) = if len == 0 {
            (None, None)
        } else {
            (Some(NodeIndex::from(0)), Some(NodeIndex::from(len - 1)))
        };

        Self {
            nodes,
            head: head.into(),
            tail: tail.into(),
            active_elements: Default::default(),
            next_te_id: TeId::first(),
        }
    }

    fn insert_te(&mut self, pos: isize, length: usize) -> TeId {
        let pos = circular_position(pos, self.len());
        // The tail is the predecessor of position zero.
        let predecessor = self
            .tail
            .into_option()
            .map(|tail| self.walk(tail, pos));
        self.insert_element(predecessor, length)
    }

    fn copy_te(&mut self, te: TeId, offset: isize) -> Option<TeId> {
        let element = *self.active_elements.get(&te)?;
        // Walk to the predecessor of the destination, which is at `offset - 1` from the anchor.
        let steps = circular_offset(self.len() - 1, offset, self.len());
        let predecessor = self.walk(element.anchor, steps);
        debug!(
            "Copying TE {} to {} positions after its start",
            te,
            circular_offset(0, offset, self.len())
        );
        Some(self.insert_element(Some(predecessor), element.len))
    }

    fn disable_te(&mut self, te: TeId) {
        if let Some(element) = self.active_elements.remove(&te) {
            let mut node = element.anchor;
            for _ in 0..element.len {
                let current = self.node_mut(node);
                current.position = Position::DisabledTe(te);
                node = current.next;
            }
            debug!("Disabled TE {}", te);
        }
    }

    fn active_tes(&self) -> Vec<TeId> {
        self.active_elements.keys().copied().collect()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn te_len(&self, te: TeId) -> Option<usize> {
        self.active_elements.get(&te).map(|element| element.len)
    }

    fn te_start(&self, te: TeId) -> Option<usize> {
        let anchor = self.active_elements.get(&te)?.anchor;
        let mut node = self.head.into_option()?;
        for pos in 0..self.nodes.len() {
            if node == anchor {
                return Some(pos);
            }
            node = self.node(node).next;
        }

        None
    }

    fn position(&self, pos: isize) -> Option<Position> {
        let pos = circular_position(pos, self.len());
        self.node_at(pos).map(|node| self.node(node).position)
    }

    fn positions(&self) -> Box<dyn '_ + Iterator<Item = Position>> {
        Box::new(self.iter())
    }
}

impl<'a> Iterator for LinkedGenomeIterator<'a> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.genome.node(self.current.into_option()?);
        self.current = node.next.into();
        self.remaining -= 1;
        Some(node.position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl std::fmt::Display for LinkedGenome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for position in self.iter() {
            write!(f, "{}", position)?;
        }

        Ok(())
    }
}
