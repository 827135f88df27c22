pub mod linked_genome;
pub mod vector_genome;

/// The default genome type.
/// Copying and disabling TEs does not require walking the whole genome, which is what simulations mostly do.
///
/// ```rust
/// use transposon_genome::implementation::DefaultGenome;
/// use transposon_genome::interface::Genome;
///
/// let mut genome = DefaultGenome::new(6);
/// let te = genome.insert_te(1, 2);
/// // The copy lands on the second position of its source, which disables the source.
/// let copy = genome.copy_te(te, 1).unwrap();
/// assert_eq!(genome.to_string(), "-xAAx-----");
/// assert_eq!(genome.active_tes(), vec![copy]);
/// ```
pub type DefaultGenome = linked_genome::LinkedGenome;
