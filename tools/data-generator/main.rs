use clap::Parser;
use flowstage::prelude::*;
use rand::Rng;

/// A CLI tool to generate a random workflow library for manual testing of the
/// editor and the flowstage-cli inspector.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory to write the generated library into
    #[arg(short, long, default_value = "./library")]
    output: String,

    /// Number of workflows to generate
    #[arg(long, default_value_t = 3)]
    workflows: usize,

    /// Minimum number of stages per workflow
    #[arg(long, default_value_t = 2)]
    min_stages: usize,

    /// Maximum number of stages per workflow
    #[arg(long, default_value_t = 6)]
    max_stages: usize,
}

const SIDES: [AnchorSide; 4] = [
    AnchorSide::Top,
    AnchorSide::Right,
    AnchorSide::Bottom,
    AnchorSide::Left,
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.min_stages > cli.max_stages {
        eprintln!(
            "Error: --min-stages ({}) cannot be greater than --max-stages ({})",
            cli.min_stages, cli.max_stages
        );
        std::process::exit(1);
    }

    let mut rng = rand::rng();
    let mut library = WorkflowLibrary::new(FileStore::open(&cli.output)?);

    println!(
        "Generating {} workflows ({} to {} stages each)...",
        cli.workflows, cli.min_stages, cli.max_stages
    );

    for index in 0..cli.workflows {
        let mut workflow = Workflow::new(format!("Generated workflow {}", index + 1));
        let stage_count = rng.random_range(cli.min_stages..=cli.max_stages);
        let stage_ids: Vec<String> = (0..stage_count).map(|_| workflow.add_stage()).collect();

        // Chain consecutive stages; self-loops cannot happen since the ids
        // in each window differ.
        for pair in stage_ids.windows(2) {
            let from_side = SIDES[rng.random_range(0..SIDES.len())];
            let to_side = SIDES[rng.random_range(0..SIDES.len())];
            let kind = match rng.random_range(0..3) {
                0 => ConnectionKind::Sequential,
                1 => ConnectionKind::Conditional,
                _ => ConnectionKind::Parallel,
            };
            workflow.connect(&pair[0], &pair[1], from_side, to_side, kind);
        }

        library.save(&mut workflow)?;
        println!(
            "  -> '{}' ({} stages, {} connections)",
            workflow.name,
            workflow.blocks.len(),
            workflow.connections.len()
        );
    }

    println!("Library written to '{}'", cli.output);
    Ok(())
}
