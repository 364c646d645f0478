use clap::{Parser, Subcommand};

use ontoview_core::{Config, OntologyIndex, QueryService};

mod serve;

#[derive(Parser)]
#[command(name = "ontoview")]
#[command(about = "Ontology tree visualizer backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Path to the obographs JSON document (overrides config)
        #[arg(long)]
        data: Option<String>,
        /// Listen port (overrides config)
        #[arg(long)]
        port: Option<u16>,
        /// Listen address (overrides config)
        #[arg(long)]
        host: Option<String>,
    },
    /// Load the ontology and print node/edge counts
    Stats {
        /// Path to the obographs JSON document (overrides config)
        #[arg(long)]
        data: Option<String>,
    },
    /// Load the ontology and print ranked matches for a query
    Search {
        /// Search query (min. two characters)
        query: String,
        /// Path to the obographs JSON document (overrides config)
        #[arg(long)]
        data: Option<String>,
        /// Maximum number of matches to print
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match cli.command {
        Commands::Serve { data, port, host } => {
            serve::start_server(serve::ServeConfig {
                host: host.unwrap_or(config.server.host),
                port: port.unwrap_or(config.server.port),
                data_path: data.unwrap_or(config.ontology.data_path),
                root_id: config.ontology.root_id,
            })
            .await
        }
        Commands::Stats { data } => {
            let index = load_index(data, &config)?;
            let stats = index.stats();
            println!("Nodes: {}", stats.total_nodes);
            println!("Edges: {}", stats.total_edges);
            println!("Root:  {}", stats.root_id);
            Ok(())
        }
        Commands::Search { query, data, limit } => {
            let index = load_index(data, &config)?;
            let service = QueryService::new(std::sync::Arc::new(index));
            let page = service.search(&query, Some(1), Some(limit));

            println!("{} match(es) for '{}':", page.total, query);
            for term in &page.nodes {
                println!("  {}  {}", term.short_id, term.label);
            }
            Ok(())
        }
    }
}

fn load_index(
    data: Option<String>,
    config: &Config,
) -> Result<OntologyIndex, Box<dyn std::error::Error>> {
    let path = data.unwrap_or_else(|| config.ontology.data_path.clone());
    Ok(OntologyIndex::from_file(path, &config.ontology.root_id)?)
}
