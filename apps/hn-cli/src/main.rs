use clap::{Parser, Subcommand};
use hn_core::{Real, is_no_flow};
use hn_project::{NetworkDef, ProjectError};
use hn_sim::SimulationObserver;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hn-cli")]
#[command(about = "HydroNet CLI - Hydraulic network simulation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a network definition file
    Validate {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Print the layout of the network, one tree per source
    Layout {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Run a flow simulation
    Simulate {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Report components whose input exceeds their max flow
        #[arg(long)]
        check_max_flow: bool,
    },
    /// Delete a component and re-wire its neighbours
    Delete {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Name of the component to delete
        name: String,
        /// Write the edited network to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Network(#[from] hn_network::NetworkError),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Layout { network_path } => cmd_layout(&network_path),
        Commands::Simulate {
            network_path,
            check_max_flow,
        } => cmd_simulate(&network_path, check_max_flow),
        Commands::Delete {
            network_path,
            name,
            output,
        } => cmd_delete(&network_path, &name, output.as_deref()),
    }
}

fn cmd_validate(network_path: &Path) -> CliResult<()> {
    println!("Validating network: {}", network_path.display());
    let def = hn_project::load(network_path)?;
    let net = hn_project::build_network(&def)?;
    println!(
        "✓ Network '{}' is valid ({} components, {} sources)",
        def.name,
        net.len(),
        net.sources().count()
    );
    Ok(())
}

fn cmd_layout(network_path: &Path) -> CliResult<()> {
    tracing::debug!(path = %network_path.display(), "layout");
    let def = hn_project::load(network_path)?;
    let net = hn_project::build_network(&def)?;
    print!("{}", hn_layout::layout(&net));
    Ok(())
}

fn cmd_simulate(network_path: &Path, check_max_flow: bool) -> CliResult<()> {
    tracing::debug!(path = %network_path.display(), check_max_flow, "simulate");
    let def = hn_project::load(network_path)?;
    let net = hn_project::build_network(&def)?;

    println!("Simulating network: {}", def.name);
    let mut printer = PrintObserver;
    let summary = hn_sim::simulate(&net, &mut printer, check_max_flow);
    if summary.violations > 0 {
        tracing::info!(violations = summary.violations, "max flow exceeded");
    }

    println!(
        "✓ Simulation completed: {} sources, {} components",
        summary.sources, summary.visited
    );
    if check_max_flow {
        println!("  Max flow violations: {}", summary.violations);
    }
    Ok(())
}

fn cmd_delete(network_path: &Path, name: &str, output: Option<&Path>) -> CliResult<()> {
    let def = hn_project::load(network_path)?;
    let mut net = hn_project::build_network(&def)?;

    tracing::debug!(path = %network_path.display(), name, "delete");
    let removed = net.delete(name)?;
    println!("✓ Deleted {} '{}'", removed.type_name(), removed.name());
    print!("{}", hn_layout::layout(&net));

    if let Some(path) = output {
        let edited = NetworkDef::from_network(def.name, &net);
        hn_project::save(path, &edited)?;
        tracing::info!(path = %path.display(), "edited network saved");
        println!("✓ Saved edited network to {}", path.display());
    }
    Ok(())
}

/// Prints one line per notification.
struct PrintObserver;

impl SimulationObserver for PrintObserver {
    fn notify_flow(&mut self, kind: &str, name: &str, in_flow: Real, out_flows: &[Real]) {
        let outs: Vec<String> = out_flows.iter().map(|&f| fmt_flow(f)).collect();
        println!(
            "  {:<10} {:<16} in={:>10}  out=[{}]",
            kind,
            name,
            fmt_flow(in_flow),
            outs.join(", ")
        );
    }

    fn notify_flow_error(&mut self, kind: &str, name: &str, in_flow: Real, max_flow: Real) {
        println!(
            "  ! {} '{}' receives {:.3}, above its max flow {:.3}",
            kind, name, in_flow, max_flow
        );
    }
}

fn fmt_flow(v: Real) -> String {
    if is_no_flow(v) {
        "-".to_string()
    } else {
        format!("{v:.3}")
    }
}
