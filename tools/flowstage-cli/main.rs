use clap::Parser;
use flowstage::prelude::*;

/// Inspect a saved workflow library: list every workflow, or print one
/// workflow's stages and routed connections in detail.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the workflow library
    #[arg(short, long, default_value = "./library")]
    dir: String,

    /// Id of a single workflow to inspect in detail
    #[arg(long)]
    id: Option<String>,

    /// Also print the rounded SVG path for each connection
    #[arg(long)]
    svg: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let library = WorkflowLibrary::new(FileStore::open(&cli.dir)?);

    match &cli.id {
        Some(id) => {
            let workflow = library.load(id)?;
            inspect(&workflow, cli.svg);
        }
        None => {
            let workflows = library.load_all()?;
            if workflows.is_empty() {
                println!("Library at '{}' is empty", cli.dir);
                return Ok(());
            }
            println!("Workflows in '{}':", cli.dir);
            for workflow in &workflows {
                println!(
                    "  {}  '{}'  ({} stages, {} connections{})",
                    workflow.id,
                    workflow.name,
                    workflow.blocks.len(),
                    workflow.connections.len(),
                    if workflow.is_locked { ", locked" } else { "" }
                );
            }
        }
    }
    Ok(())
}

fn inspect(workflow: &Workflow, svg: bool) {
    println!("Workflow '{}' ({})", workflow.name, workflow.id);
    println!("  created: {}", workflow.created_at);
    println!("  updated: {}", workflow.updated_at);
    println!("  locked:  {}", workflow.is_locked);

    println!("\nStages:");
    for block in &workflow.blocks {
        println!(
            "  {}  at ({}, {})  {}",
            block.id,
            block.position.x,
            block.position.y,
            if block.is_configured {
                "configured"
            } else {
                "unconfigured"
            }
        );
    }

    println!("\nConnections:");
    for connection in &workflow.connections {
        println!(
            "  {}  {} ({:?}) -> {} ({:?})  [{:?}]",
            connection.id,
            connection.from,
            connection.from_node,
            connection.to,
            connection.to_node,
            connection.kind
        );
        match route_connection(workflow, connection) {
            Some(waypoints) => {
                let trail: Vec<String> = waypoints
                    .iter()
                    .map(|p| format!("({}, {})", p.x, p.y))
                    .collect();
                println!("      route: {}", trail.join(" -> "));
                if svg {
                    println!(
                        "      svg:   {}",
                        rounded_svg_path(&waypoints, flowstage::routing::CORNER_RADIUS)
                    );
                }
            }
            None => println!("      route: <dangling endpoint>"),
        }
    }
}
