use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod demos;
mod error;
mod plan;

use autogoal_agent::Agent;
use autogoal_core::{AgentConfig, AgentConfigBuilder, ConfigFile, SystemConfig, ToolParams};
use autogoal_tools::{AggregatorTool, StringTool};
use demos::{DemoScenario, run_demo};
use error::CliError;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "autogoal", version)]
#[command(about = "autogoal CLI - goal-driven agent core")]
struct Cli {
    /// TOML configuration file with [agent] and [system] tables
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Human-readable logs and pretty-printed JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a demo scenario
    Demo {
        #[arg(value_enum)]
        scenario: DemoScenario,
    },
    /// Execute a JSON goal plan and print the run summary
    Run {
        /// Path to a JSON array of goals
        #[arg(long)]
        plan: PathBuf,
        /// Stop after this many root goals
        #[arg(long)]
        max_iterations: Option<usize>,
    },
    /// Execute a single tool and print its result
    Tool {
        name: String,
        /// Tool parameters as a JSON object
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available tools
    Tools,
}

#[derive(Serialize)]
struct RunReport {
    summary: autogoal_agent::RunSummary,
    status: autogoal_agent::AgentStatus,
}

fn main() {
    let cli = Cli::parse();

    let file = match load_config_file(cli.config.as_deref()) {
        Ok(file) => file,
        Err(e) => {
            init_tracing(&SystemConfig::default(), cli.pretty);
            tracing::error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };
    let system = match file.system.clone().with_env() {
        Ok(system) => system,
        Err(e) => {
            init_tracing(&SystemConfig::default(), cli.pretty);
            tracing::error!(error = %e, "Invalid system configuration");
            std::process::exit(1);
        }
    };
    init_tracing(&system, cli.pretty);

    if let Err(e) = dispatch(cli.command, file.agent, cli.pretty) {
        tracing::error!(error = %e, "Command failed");
        std::process::exit(1);
    }
}

fn dispatch(command: Commands, agent: AgentConfig, pretty: bool) -> Result<(), CliError> {
    match command {
        Commands::Demo { scenario } => {
            run_demo(scenario, agent_config(agent, None)?);
            Ok(())
        }
        Commands::Run {
            plan,
            max_iterations,
        } => {
            let goals = plan::load_plan(&plan)?;
            let mut agent = Agent::new(agent_config(agent, max_iterations)?);
            for goal in goals {
                agent.add_goal(goal);
            }
            let summary = agent.run_default();
            let report = RunReport {
                summary,
                status: agent.get_status(),
            };
            print_json(&report, pretty)
        }
        Commands::Tool { name, params } => {
            let params = ToolParams::from_json(&params).map_err(CliError::Params)?;
            let mut agent = full_agent(agent_config(agent, None)?);
            if !agent.tools().contains(&name) {
                return Err(CliError::UnknownTool(name));
            }
            let result = agent.execute_tool(&name, &params);
            print_json(&result, pretty)
        }
        Commands::Tools => {
            let agent = full_agent(agent_config(agent, None)?);
            for (name, tool) in agent.tools().get_all_tools() {
                println!("{name}: {}", tool.description());
            }
            Ok(())
        }
    }
}

/// Defaults, then the file's `[agent]` table, then `AUTOGOAL_*` variables,
/// then command-line flags.
fn agent_config(
    from_file: AgentConfig,
    max_iterations: Option<usize>,
) -> Result<AgentConfig, CliError> {
    let builder = AgentConfigBuilder::from_config(from_file).with_env()?;
    apply_flags(builder, max_iterations)
}

fn apply_flags(
    mut builder: AgentConfigBuilder,
    max_iterations: Option<usize>,
) -> Result<AgentConfig, CliError> {
    if let Some(max) = max_iterations {
        builder = builder.max_iterations(max);
    }
    Ok(builder.build()?)
}

fn load_config_file(path: Option<&Path>) -> Result<ConfigFile, CliError> {
    match path {
        Some(path) => Ok(ConfigFile::from_path(path)?),
        None => Ok(ConfigFile::default()),
    }
}

fn full_agent(config: AgentConfig) -> Agent {
    Agent::builder()
        .config(config)
        .tool(Arc::new(StringTool))
        .tool(Arc::new(AggregatorTool))
        .build()
}

fn print_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(CliError::Output)?;
    println!("{text}");
    Ok(())
}

fn init_tracing(system: &SystemConfig, pretty: bool) {
    // RUST_LOG wins over the configured level.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(system.normalized_log_level()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if pretty || !system.json_logs {
        let _ = builder.try_init();
    } else {
        let _ = builder.json().try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_run_with_global_flags() {
        let cli = Cli::try_parse_from([
            "autogoal",
            "run",
            "--plan",
            "plan.json",
            "--config",
            "autogoal.toml",
            "--max-iterations",
            "3",
            "--pretty",
        ])
        .unwrap();

        assert!(cli.pretty);
        assert_eq!(cli.config.as_deref(), Some(Path::new("autogoal.toml")));
        match cli.command {
            Commands::Run {
                plan,
                max_iterations,
            } => {
                assert_eq!(plan, PathBuf::from("plan.json"));
                assert_eq!(max_iterations, Some(3));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cli_parses_demo_scenario() {
        let cli = Cli::try_parse_from(["autogoal", "demo", "hierarchical"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Demo {
                scenario: DemoScenario::Hierarchical
            }
        ));
        assert!(Cli::try_parse_from(["autogoal", "demo", "unknown"]).is_err());
    }

    #[test]
    fn tool_params_default_to_empty_object() {
        let cli = Cli::try_parse_from(["autogoal", "tool", "echo"]).unwrap();
        match cli.command {
            Commands::Tool { name, params } => {
                assert_eq!(name, "echo");
                assert_eq!(params, "{}");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn flags_override_file_config() {
        let from_file = AgentConfigBuilder::new().max_iterations(9);
        let config = apply_flags(from_file.clone(), Some(2)).unwrap();
        assert_eq!(config.max_iterations, Some(2));

        let untouched = apply_flags(from_file, None).unwrap();
        assert_eq!(untouched.max_iterations, Some(9));

        assert!(apply_flags(AgentConfigBuilder::new(), Some(0)).is_err());
    }

    #[test]
    fn full_agent_has_every_standard_tool() {
        let agent = full_agent(AgentConfig::default());
        assert_eq!(
            agent.tools().list_tools(),
            ["echo", "calculator", "string_tool", "aggregator"]
        );
    }
}
