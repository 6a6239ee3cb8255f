use clap::{Parser, Subcommand, ValueEnum};
use genba::catalog::Catalog;
use genba::document::{DEFAULT_STEM, DocumentKind, ImportBundle, write_documents};
use genba::editor::Editor;
use genba::graph::{GraphStore, View};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewCli {
    Flow,
    Physical,
}

impl From<ViewCli> for View {
    fn from(view: ViewCli) -> Self {
        match view {
            ViewCli::Flow => View::Flow,
            ViewCli::Physical => View::Physical,
        }
    }
}

/// Inspect and edit a Genba workspace (<stem>.flow, <stem>.physical, <stem>.relation)
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the workspace documents
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// File stem shared by the three documents
    #[arg(short, long, default_value = DEFAULT_STEM)]
    stem: String,

    /// Optional catalog JSON file; the built-in logistics catalog is used otherwise
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Seed for the placement of newly assigned physical nodes
    #[arg(long)]
    seed: Option<u64>,

    /// Log every state mutation
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a new workspace
    Init {
        /// Start from the sample layout instead of empty graphs
        #[arg(long)]
        sample: bool,
        /// Overwrite existing documents
        #[arg(long)]
        force: bool,
    },
    /// List the node kinds of the catalog
    Catalog {
        /// Print the catalog as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
    /// Print both graphs and the relation table
    Inspect,
    /// Create a physical node of a kind and bind it to a flow node
    ///
    /// The label serial continues after the highest serial still present in the saved
    /// physical document; serials of nodes deleted in earlier runs may be reused.
    Assign {
        flow_node_id: String,
        physical_kind_id: String,
    },
    /// Remove a flow -> physical association
    Unassign {
        flow_node_id: String,
        physical_node_id: String,
    },
    /// Show the highlight/dim flags produced by hovering a node
    Highlight {
        #[arg(value_enum)]
        view: ViewCli,
        node_id: String,
    },
    /// Connect two nodes of the same view
    Connect {
        #[arg(value_enum)]
        view: ViewCli,
        source: String,
        target: String,
    },
    /// Delete a node, cascading into edges and relations
    Delete {
        #[arg(value_enum)]
        view: ViewCli,
        node_id: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e))),
        None => Catalog::logistics(),
    };

    match cli.command {
        Command::Init { sample, force } => {
            run_init(&cli.dir, &cli.stem, catalog, cli.seed, sample, force)
        }
        Command::Catalog { json } => print_catalog(&catalog, json),
        Command::Inspect => {
            let editor = load_workspace(&cli.dir, &cli.stem, catalog, cli.seed);
            print_workspace(&editor);
        }
        Command::Assign {
            flow_node_id,
            physical_kind_id,
        } => {
            let mut editor = load_workspace(&cli.dir, &cli.stem, catalog, cli.seed);
            let physical_node_id = editor
                .assign(&flow_node_id, &physical_kind_id)
                .unwrap_or_else(|e| exit_with_error(&format!("Assignment failed: {}", e)));
            let label = editor
                .physical()
                .node(&physical_node_id)
                .map(|n| n.label().to_string())
                .unwrap_or_default();
            save_workspace(&editor, &cli.dir, &cli.stem);
            println!("Assigned {} ({}) to {}", physical_node_id, label, flow_node_id);
        }
        Command::Unassign {
            flow_node_id,
            physical_node_id,
        } => {
            let mut editor = load_workspace(&cli.dir, &cli.stem, catalog, cli.seed);
            if editor.unassign(&flow_node_id, &physical_node_id) {
                save_workspace(&editor, &cli.dir, &cli.stem);
                println!("Removed {} from {}", physical_node_id, flow_node_id);
            } else {
                println!(
                    "{} is not assigned to {}; nothing changed",
                    physical_node_id, flow_node_id
                );
            }
        }
        Command::Highlight { view, node_id } => {
            let mut editor = load_workspace(&cli.dir, &cli.stem, catalog, cli.seed);
            let view = View::from(view);
            if !editor.graph(view).contains(&node_id) {
                exit_with_error(&format!("Node '{}' not found in the {} view", node_id, view));
            }
            editor.hover(view, &node_id);
            print_emphasis(editor.flow());
            print_emphasis(editor.physical());
        }
        Command::Connect {
            view,
            source,
            target,
        } => {
            let mut editor = load_workspace(&cli.dir, &cli.stem, catalog, cli.seed);
            let edge_id = editor
                .connect(view.into(), &source, &target)
                .unwrap_or_else(|e| exit_with_error(&format!("Connect failed: {}", e)));
            save_workspace(&editor, &cli.dir, &cli.stem);
            println!("Edge {}", edge_id);
        }
        Command::Delete { view, node_id } => {
            let mut editor = load_workspace(&cli.dir, &cli.stem, catalog, cli.seed);
            if !editor.delete_node(view.into(), &node_id) {
                exit_with_error(&format!("Node '{}' not found", node_id));
            }
            save_workspace(&editor, &cli.dir, &cli.stem);
            println!("Deleted {}", node_id);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info,genba=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn build_editor(catalog: Catalog, seed: Option<u64>, sample: bool) -> Editor {
    let mut builder = Editor::builder().with_catalog(catalog);
    if let Some(seed) = seed {
        builder = builder.with_seed(seed);
    }
    if sample {
        builder = builder.with_sample_layout();
    }
    builder
        .build()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build editor: {}", e)))
}

fn run_init(dir: &Path, stem: &str, catalog: Catalog, seed: Option<u64>, sample: bool, force: bool) {
    let existing: Vec<_> = DocumentKind::ALL
        .into_iter()
        .map(|kind| kind.path_in(dir, stem))
        .filter(|path| path.exists())
        .collect();
    if !existing.is_empty() && !force {
        exit_with_error(&format!(
            "'{}' already exists; pass --force to overwrite",
            existing[0].display()
        ));
    }

    let editor = build_editor(catalog, seed, sample);
    save_workspace(&editor, dir, stem);
    println!(
        "Initialized workspace '{}' in {} ({} flow nodes, {} physical nodes)",
        stem,
        dir.display(),
        editor.flow().len(),
        editor.physical().len()
    );
}

fn load_workspace(dir: &Path, stem: &str, catalog: Catalog, seed: Option<u64>) -> Editor {
    let bundle = ImportBundle::from_dir(dir, stem)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read workspace: {}", e)));
    if bundle.is_empty() {
        exit_with_error(&format!(
            "No '{}' documents found in {}; run `init` first",
            stem,
            dir.display()
        ));
    }

    let mut editor = build_editor(catalog, seed, false);
    let summary = editor
        .import(bundle)
        .unwrap_or_else(|e| exit_with_error(&format!("Import failed: {}", e)));
    if summary.pruned_references > 0 {
        println!(
            "Note: dropped {} relation reference(s) to missing nodes",
            summary.pruned_references
        );
    }
    editor
}

fn save_workspace(editor: &Editor, dir: &Path, stem: &str) {
    write_documents(editor, dir, stem)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to save workspace: {}", e)));
}

fn print_catalog(catalog: &Catalog, json: bool) {
    if json {
        let json = catalog
            .to_json()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize catalog: {}", e)));
        println!("{}", json);
        return;
    }

    for view in [View::Flow, View::Physical] {
        println!("--- {} kinds ---", view);
        for category in catalog.categories(view) {
            println!("{}:", category);
            for kind in catalog.kinds_in_category(view, category) {
                let allowed: Vec<&str> = kind
                    .allowed_physical_kinds
                    .iter()
                    .map(String::as_str)
                    .collect();
                if allowed.is_empty() {
                    println!("  {:<14} {}", kind.id, kind.label);
                } else {
                    println!("  {:<14} {} -> {}", kind.id, kind.label, allowed.join(", "));
                }
            }
        }
        println!();
    }
}

fn print_workspace(editor: &Editor) {
    for store in [editor.flow(), editor.physical()] {
        println!("--- {} view: {} nodes, {} edges ---", store.view(), store.len(), store.edges().len());
        for node in store.nodes() {
            println!(
                "  {:<6} {:<14} {:<20} ({:.0}, {:.0})",
                node.id,
                node.kind_id,
                node.label(),
                node.position.x,
                node.position.y
            );
        }
        for edge in store.edges() {
            println!("  {} : {} -> {}", edge.id, edge.source, edge.target);
        }
    }

    println!("--- relations: {} ---", editor.relations().len());
    for relation in editor.relations().entries() {
        println!("  {} -> {}", relation.flow_node_id, relation.physical_node_ids.join(", "));
    }
}

fn print_emphasis(store: &GraphStore) {
    println!("--- {} view ---", store.view());
    for node in store.nodes() {
        let state = if node.is_highlighted() {
            "highlighted"
        } else if node.is_dimmed() {
            "dimmed"
        } else {
            "normal"
        };
        println!("  {:<6} {:<20} {}", node.id, node.label(), state);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
