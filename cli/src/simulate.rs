use crate::util::{log_summary, print_genome};
use crate::{CliOptions, Error, ErrorKind};
use clap::Parser;
use log::{debug, error, info};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use transposon_genome::implementation::linked_genome::LinkedGenome;
use transposon_genome::implementation::vector_genome::VectorGenome;
use transposon_genome::interface::{Genome, TeId};

#[derive(Parser)]
pub struct SimulateCommand {
    #[clap(
        long,
        default_value = "100",
        help = "The number of empty positions of the initial genome"
    )]
    pub initial_length: usize,

    #[clap(long, default_value = "1000", help = "The number of operations to apply")]
    pub steps: usize,

    #[clap(
        long,
        help = "The seed of the random generator. If not given, a random seed is chosen and logged"
    )]
    pub seed: Option<u64>,

    #[clap(
        long,
        default_value = "10",
        help = "The maximum length of newly inserted TEs"
    )]
    pub max_te_length: usize,

    #[clap(long, default_value = "1", help = "The relative frequency of insertions")]
    pub insert_weight: u32,

    #[clap(long, default_value = "3", help = "The relative frequency of copies")]
    pub copy_weight: u32,

    #[clap(long, default_value = "1", help = "The relative frequency of disablings")]
    pub disable_weight: u32,

    #[clap(long, help = "Print the final genome to stdout")]
    pub print: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Insert { pos: isize, length: usize },
    Copy { te: TeId, offset: isize },
    Disable(TeId),
}

impl Operation {
    fn apply<G: Genome>(self, genome: &mut G) -> Option<TeId> {
        match self {
            Operation::Insert { pos, length } => Some(genome.insert_te(pos, length)),
            Operation::Copy { te, offset } => genome.copy_te(te, offset),
            Operation::Disable(te) => {
                genome.disable_te(te);
                None
            }
        }
    }
}

struct OperationGenerator {
    kinds: WeightedIndex<u32>,
    max_te_length: usize,
}

impl OperationGenerator {
    fn new(subcommand: &SimulateCommand) -> crate::Result<Self> {
        if subcommand.max_te_length == 0 {
            error!("The maximum TE length must be positive");
            return Err(Error::from(ErrorKind::Parameter));
        }

        let kinds = WeightedIndex::new([
            subcommand.insert_weight,
            subcommand.copy_weight,
            subcommand.disable_weight,
        ])
        .map_err(|e| {
            error!("Illegal operation weights: {}", e);
            Error::from(ErrorKind::Parameter)
        })?;

        Ok(Self {
            kinds,
            max_te_length: subcommand.max_te_length,
        })
    }

    /// Draws a random operation. Copies and disablings are only drawn while there are active TEs.
    fn generate<G: Genome>(&self, genome: &G, random: &mut impl Rng) -> Operation {
        let len = genome.len() as isize;
        let active_tes = genome.active_tes();

        match (self.kinds.sample(random), active_tes.choose(random)) {
            (1, Some(&te)) => Operation::Copy {
                te,
                offset: random.gen_range(-len..=len),
            },
            (2, Some(&te)) => Operation::Disable(te),
            _ => Operation::Insert {
                pos: random.gen_range(0..=len),
                length: random.gen_range(1..=self.max_te_length),
            },
        }
    }
}

fn ensure_agreement(
    step: usize,
    vector: &VectorGenome,
    linked: &LinkedGenome,
) -> crate::Result<()> {
    if vector.len() != linked.len()
        || vector.active_tes() != linked.active_tes()
        || vector.render() != linked.render()
    {
        error!("Vector genome: {}", vector);
        error!("Linked genome: {}", linked);
        return Err(ErrorKind::RealisationsDiverged(step).into());
    }

    Ok(())
}

/// Runs the simulation on both genome representations and returns them in their final state.
fn run_simulation(
    subcommand: &SimulateCommand,
    random: &mut StdRng,
) -> crate::Result<(VectorGenome, LinkedGenome)> {
    let generator = OperationGenerator::new(subcommand)?;
    let mut vector = VectorGenome::new(subcommand.initial_length);
    let mut linked = LinkedGenome::new(subcommand.initial_length);

    for step in 0..subcommand.steps {
        let operation = generator.generate(&vector, random);
        let vector_result = operation.apply(&mut vector);
        let linked_result = operation.apply(&mut linked);
        debug!("Step {}: {:?} -> {:?}", step, operation, vector_result);

        if vector_result != linked_result {
            error!(
                "{:?} returned {:?} for the vector genome, but {:?} for the linked genome",
                operation, vector_result, linked_result
            );
            return Err(ErrorKind::RealisationsDiverged(step).into());
        }
        ensure_agreement(step, &vector, &linked)?;
    }

    Ok((vector, linked))
}

pub(crate) fn simulate(_options: &CliOptions, subcommand: &SimulateCommand) -> crate::Result<()> {
    let seed = subcommand.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(
        "Simulating {} steps on a genome of initial length {} with seed {}",
        subcommand.steps, subcommand.initial_length, seed
    );

    let mut random = StdRng::seed_from_u64(seed);
    let (vector, _) = run_simulation(subcommand, &mut random)?;
    info!("All genome representations agree");
    log_summary(&vector);

    if subcommand.print {
        print_genome(&vector)?;
    }

    Ok(())
}
