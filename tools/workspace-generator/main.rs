use clap::Parser;
use genba::catalog::Catalog;
use genba::document::{DEFAULT_STEM, write_documents};
use genba::editor::Editor;
use genba::graph::{Position, View};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

/// A CLI tool to generate random, valid Genba workspaces for demos and load testing
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory to write the generated documents into
    #[arg(short, long, default_value = "generated_workspace")]
    output: PathBuf,

    /// File stem shared by the three documents
    #[arg(short, long, default_value = DEFAULT_STEM)]
    stem: String,

    /// Number of flow nodes to chain together
    #[arg(short, long, default_value_t = 8)]
    nodes: usize,

    /// The minimum number of physical nodes assigned to each flow node
    #[arg(long, default_value_t = 0)]
    min: usize,

    /// The maximum number of physical nodes assigned to each flow node
    #[arg(long, default_value_t = 3)]
    max: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Optional catalog JSON file; the built-in logistics catalog is used otherwise
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Add validation to ensure min is not greater than max
    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::logistics(),
    };
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);

    println!(
        "Generating workspace with {} flow node(s), {} to {} assignment(s) each (seed {})...",
        cli.nodes, cli.min, cli.max, seed
    );

    let mut editor = Editor::builder()
        .with_catalog(catalog)
        .with_seed(seed)
        .build()?;

    let flow_ids = generate_flow_chain(&mut editor, &mut rng, cli.nodes)?;
    println!("-> Generated {} flow node(s).", flow_ids.len());

    let mut assigned = 0;
    for flow_node_id in &flow_ids {
        assigned += generate_assignments(&mut editor, &mut rng, flow_node_id, cli.min, cli.max)?;
    }
    println!(
        "-> Generated {} physical node(s) across {} relation(s).",
        assigned,
        editor.relations().len()
    );

    let written = write_documents(&editor, &cli.output, &cli.stem)?;
    println!(
        "Successfully generated and saved workspace to '{}', '{}' and '{}'",
        written.flow.display(),
        written.physical.display(),
        written.relation.display()
    );

    Ok(())
}

/// Adds `count` flow nodes of random kinds, left to right, each connected to the previous one.
fn generate_flow_chain(
    editor: &mut Editor,
    rng: &mut StdRng,
    count: usize,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let kind_ids: Vec<String> = editor
        .catalog()
        .kinds(View::Flow)
        .iter()
        .map(|k| k.id.clone())
        .collect();
    if kind_ids.is_empty() {
        return Err("the catalog defines no flow kinds".into());
    }

    let mut ids: Vec<String> = Vec::with_capacity(count);
    for index in 0..count {
        let Some(kind_id) = kind_ids.choose(rng) else {
            break;
        };
        let position = Position::new(100.0 + 200.0 * index as f64, rng.random_range(50.0..150.0));
        let id = editor.add_node(View::Flow, kind_id, position)?;
        if let Some(previous) = ids.last() {
            editor.connect(View::Flow, previous, &id)?;
        }
        ids.push(id);
    }
    Ok(ids)
}

/// Assigns a random number of allowed physical kinds to one flow node.
fn generate_assignments(
    editor: &mut Editor,
    rng: &mut StdRng,
    flow_node_id: &str,
    min: usize,
    max: usize,
) -> Result<usize, Box<dyn std::error::Error>> {
    let allowed: Vec<String> = editor
        .flow()
        .node(flow_node_id)
        .map(|node| {
            editor
                .catalog()
                .allowed_physical_kinds(&node.kind_id)
                .into_iter()
                .map(|k| k.id.clone())
                .collect()
        })
        .unwrap_or_default();
    if allowed.is_empty() {
        return Ok(0);
    }

    let count = rng.random_range(min..=max);
    for _ in 0..count {
        if let Some(kind_id) = allowed.choose(rng) {
            editor.assign(flow_node_id, kind_id)?;
        }
    }
    Ok(count)
}
