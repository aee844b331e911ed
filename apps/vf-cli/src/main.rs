use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use vf_engine::{EngineResult, analyze, load_circuit};
use vf_results::AnalysisReport;
use vf_topology::Topology;

#[derive(Parser)]
#[command(name = "vf-cli")]
#[command(about = "VoltFlow CLI - DC circuit analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate circuit file syntax and component values
    Validate {
        /// Path to the circuit JSON file
        circuit_path: PathBuf,
    },
    /// Analyze a circuit and print the report
    Analyze {
        /// Path to the circuit JSON file
        circuit_path: PathBuf,
        /// Emit the report as JSON instead of a human summary
        #[arg(long)]
        json: bool,
    },
}

fn main() -> EngineResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { circuit_path } => cmd_validate(&circuit_path),
        Commands::Analyze { circuit_path, json } => cmd_analyze(&circuit_path, json),
    }
}

fn cmd_validate(circuit_path: &Path) -> EngineResult<()> {
    println!("Validating circuit: {}", circuit_path.display());
    let (components, topology) = load_circuit(circuit_path)?;
    println!("✓ Circuit is valid");
    println!("  Topology: {}", topology);
    println!("  Components:");
    for comp in &components {
        println!(
            "    {} - {} ({} {})",
            comp.id(),
            comp.kind(),
            comp.value(),
            comp.unit()
        );
    }
    Ok(())
}

fn cmd_analyze(circuit_path: &Path, json: bool) -> EngineResult<()> {
    let (components, topology) = load_circuit(circuit_path)?;
    let report = analyze(&components, topology)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    println!("✓ Analysis completed ({})", report.topology);
    println!("  Total resistance: {} Ω", report.total_resistance_ohm);

    match report.topology {
        Topology::Series => {
            if let Some(i) = report.current_a {
                println!("  Current: {} A", i);
            }
            if let Some(drops) = &report.voltage_drops {
                println!("\nVoltage drops:");
                for d in drops {
                    println!("  {} - {} V at {} A", d.component_id, d.voltage_v, d.current_a);
                }
            }
        }
        Topology::Parallel => {
            if let Some(i) = report.total_current_a {
                println!("  Total current: {} A", i);
            }
            if let Some(branches) = &report.branch_currents {
                println!("\nBranch currents:");
                for b in branches {
                    println!("  {} - {} A at {} V", b.component_id, b.current_a, b.voltage_v);
                }
            }
        }
    }

    println!("\nPower consumption:");
    for p in &report.power_consumption {
        println!("  {} - {} W", p.component_id, p.power_w);
    }
    println!(
        "  Total: {} W (source '{}' delivers {} W)",
        report.total_power_w, report.source_id, report.source_power_w
    );
}
