use colored::Colorize;
use ebflow_stack::OptionDefaults;
use std::path::PathBuf;

pub fn handle(config: Option<PathBuf>, out: Option<PathBuf>, pretty: bool) -> anyhow::Result<()> {
    let config_path = super::locate_config(config)?;
    let settings = ebflow_core::load_settings(&config_path)?;
    let stack_config = settings.resolve()?;

    let graph = ebflow_stack::synthesize(&stack_config, &OptionDefaults::default())?;

    let json = if pretty {
        serde_json::to_string_pretty(&graph)?
    } else {
        serde_json::to_string(&graph)?
    };

    match out {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!(
                "{} {} ({})",
                "✓ Wrote".green().bold(),
                path.display().to_string().cyan(),
                graph.summary()
            );
        }
        None => println!("{json}"),
    }

    // surfaced for operator consumption; actual values resolve at apply time
    for output in &graph.outputs {
        eprintln!("{}: {}", output.name.cyan(), output.value);
    }

    Ok(())
}
