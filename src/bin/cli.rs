//! DataShow CLI
//!
//! Offline inspection of the route table:
//! - List routes and chart kinds
//! - Resolve a browser location
//! - Build hrefs for named routes
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use datashow::config::generate_default_config;
use datashow::{AppContext, ChartKind, ResolvedRoute, RouteDescriptor};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "datashow-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the DataShow route table")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// URL prefix the application is mounted under
    #[arg(long, default_value = "/", env = "DATASHOW_BASE_URL", global = true)]
    pub base: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all routes in declaration order
    Routes,

    /// List chart kinds
    Charts,

    /// Resolve a browser location (base included) to a route
    Resolve {
        /// Location, e.g. /pie-chart?theme=dark
        location: String,
    },

    /// Print the href of a named route
    Href {
        /// Route name, e.g. PieChart
        name: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli.base);
    let json = cli.format == "json";

    match cli.command {
        Commands::Routes => {
            let routes: Vec<&RouteDescriptor> = ctx.routes().iter().collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&routes)?);
            } else {
                println!("{:<16} {:<16} {:<10} {}", "Path", "Name", "View", "Href");
                println!("{}", "-".repeat(60));
                for route in routes {
                    let view = match route.view.chart_kind() {
                        Some(kind) => format!("{}({})", route.view.component_name(), kind),
                        None => route.view.component_name().to_string(),
                    };
                    println!(
                        "{:<16} {:<16} {:<10} {}",
                        route.path,
                        route.name,
                        view,
                        ctx.navigation().href_for_path(route.path)
                    );
                }
            }
        }

        Commands::Charts => {
            if json {
                println!("{}", serde_json::to_string_pretty(&ChartKind::ALL)?);
            } else {
                for kind in ChartKind::ALL {
                    println!("{:<10} {:<16} {}", kind.slug(), kind.title(), kind.description());
                }
            }
        }

        Commands::Resolve { location } => match ctx.navigation().resolve(&location) {
            Some(resolved) => print_resolved(&resolved, json)?,
            None => {
                eprintln!("No route matches {} (base {})", location, ctx.base());
                std::process::exit(1);
            }
        },

        Commands::Href { name } => {
            let href = ctx.navigation().href(&name)?;
            println!("{}", href);
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_resolved(resolved: &ResolvedRoute<'_>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(resolved)?);
        return Ok(());
    }

    println!("Name:      {}", resolved.name());
    println!("Path:      {}", resolved.route.path);
    println!("Component: {}", resolved.view().component_name());
    if let Some(kind) = resolved.view().chart_kind() {
        println!("Chart:     {} ({})", kind.title(), kind.slug());
    }
    println!("Href:      {}", resolved.href);
    Ok(())
}
