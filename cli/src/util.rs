use colored::Colorize;
use itertools::Itertools;
use log::info;
use std::io::Write;
use transposon_genome::interface::Genome;

/// Colours the runs of active and disabled positions of a rendered genome.
pub fn colourise(rendered: &str) -> String {
    let mut result = String::with_capacity(rendered.len());
    for (character, run) in &rendered.chars().group_by(|&character| character) {
        let run: String = run.collect();
        match character {
            'A' => result.push_str(&run.green().to_string()),
            'x' => result.push_str(&run.red().to_string()),
            _ => result.push_str(&run),
        }
    }
    result
}

pub fn print_genome<G: Genome>(genome: &G) -> crate::Result<()> {
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    writeln!(stdout, "{}", colourise(&genome.render()))?;
    Ok(())
}

pub fn log_summary<G: Genome>(genome: &G) {
    let disabled_positions = genome
        .positions()
        .filter(|position| position.te().is_some() && !position.is_active())
        .count();
    let active_tes = genome.active_tes();

    info!("Genome length: {}", genome.len());
    info!("Disabled positions: {}", disabled_positions);
    info!(
        "Active TEs ({}): {}",
        active_tes.len(),
        active_tes.iter().join(", ")
    );
}

#[cfg(test)]
mod tests {
    use super::colourise;

    #[test]
    fn test_colourise_without_colours() {
        colored::control::set_override(false);
        assert_eq!(colourise("--AAxx-A"), "--AAxx-A");
        assert_eq!(colourise(""), "");
    }
}
