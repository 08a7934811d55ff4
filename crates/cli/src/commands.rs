//! Implementations of the non-server subcommands.

use crate::cli::{BuildArgs, DescribeArgs, InitArgs, OutputArgs};
use af_core::agents::{Agent, AgentFactory};
use af_core::config::load_config;
use af_core::init::{generate_agent_forge_structure, InitOptions};
use af_protocol::AgentSummary;
use color_eyre::Result;
use colored::Colorize;
use serde_json::{json, Value};
use std::path::Path;

/// Factory over the project's layered configuration source.
pub fn load_factory(root: &Path) -> Result<AgentFactory> {
    let config = load_config(root)?;
    Ok(AgentFactory::new(config.config_source()?))
}

pub fn list(root: &Path, args: &OutputArgs) -> Result<()> {
    let factory = load_factory(root)?;
    let summaries = factory
        .list_available_agents()?
        .iter()
        .map(|agent_id| factory.describe(agent_id))
        .collect::<Result<Vec<_>, _>>()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("{}", "No agents configured.".yellow());
        return Ok(());
    }

    for summary in &summaries {
        let tools = if summary.has_tools { " [tools]" } else { "" };
        println!(
            "{} {} ({}){}",
            summary.agent_id.bold(),
            summary.name.cyan(),
            summary.model_type,
            tools.green()
        );
        println!("    {}", summary.description.dimmed());
    }
    Ok(())
}

pub fn describe(root: &Path, args: &DescribeArgs) -> Result<()> {
    let summary = load_factory(root)?.describe(&args.agent_id)?;

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &AgentSummary) {
    println!("{}", summary.agent_id.bold());
    println!("  {:<12} {}", "name:", summary.name);
    println!("  {:<12} {}", "description:", summary.description);
    println!("  {:<12} {}", "model:", summary.model_type);
    println!("  {:<12} {}", "tools:", if summary.has_tools { "yes" } else { "no" });
    println!("  {:<12} {}", "prompt:", summary.system_prompt_preview.dimmed());
}

pub fn build(root: &Path, args: &BuildArgs) -> Result<()> {
    let agent = load_factory(root)?.create_agent_from_config(&args.agent_id, Vec::new())?;
    let report = build_report(&args.agent_id, &agent);

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", "Built".green().bold(), args.agent_id.bold());
    println!("  {:<12} {}", "name:", agent.name());
    println!("  {:<12} {}", "agent_id:", agent.agent_id());
    println!("  {:<12} {} ({})", "model:", agent.model().kind().tag(), agent.model().model_id());
    let tools = agent.tool_names();
    if tools.is_empty() {
        println!("  {:<12} {}", "tools:", "none".dimmed());
    } else {
        println!("  {:<12} {}", "tools:", tools.join(", "));
    }
    Ok(())
}

/// JSON description of a built agent.
pub fn build_report(config_id: &str, agent: &Agent) -> Value {
    json!({
        "config_id": config_id,
        "agent_id": agent.agent_id(),
        "name": agent.name(),
        "description": agent.description(),
        "system_prompt": agent.system_prompt(),
        "record_direct_tool_call": agent.record_direct_tool_call(),
        "model": {
            "type": agent.model().kind().tag(),
            "settings": agent.model().settings(),
        },
        "tools": agent.tool_names(),
    })
}

pub async fn init(root: &Path, args: &InitArgs) -> Result<()> {
    let written = generate_agent_forge_structure(InitOptions {
        target_dir: root.to_path_buf(),
        force: args.force,
        minimal: args.minimal,
    })
    .await?;

    for path in &written {
        println!("  {} {}", "created".green(), path.display());
    }
    println!("{}", "Agent Forge project initialized.".bold());
    Ok(())
}
