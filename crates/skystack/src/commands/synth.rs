use colored::Colorize;
use skystack_core::{Plan, StackComposer};

pub fn handle(json: bool) -> anyhow::Result<()> {
    let config = super::load_config();
    let composer = StackComposer::new(config);
    let graph = composer.compose()?;
    tracing::debug!("composed graph with {} declarations", graph.len());

    if json {
        println!("{}", graph.to_json()?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Synthesizing stack for".blue(),
        composer.service_domain().cyan().bold()
    );
    println!();

    let plan = Plan::from_graph(&graph)?;
    for action in &plan.actions {
        println!(
            "  {} {} {}",
            "+".green().bold(),
            action.kind,
            action.name.cyan()
        );
    }
    println!();
    println!("Plan: {}", plan.summary());

    let outputs = graph.outputs();
    if !outputs.is_empty() {
        println!();
        println!("Outputs:");
        for (name, output) in outputs {
            println!("  {} = {}", name.cyan(), output.value);
        }
    }

    Ok(())
}
