//! This crate models a circular genome that acquires, copies and loses transposable elements (TEs).
//! The [Genome](interface::Genome) trait abstracts over the representation of the genome,
//! with a contiguous and a linked implementation that behave identically but differ in their costs.
#![warn(missing_docs)]


/// Different implementations of the genome representation.
pub mod implementation;
pub mod index;
pub mod interface;
