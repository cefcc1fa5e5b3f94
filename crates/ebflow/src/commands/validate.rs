use colored::Colorize;
use ebflow_stack::OptionDefaults;
use std::path::PathBuf;

pub fn handle(config: Option<PathBuf>) -> anyhow::Result<()> {
    println!("{}", "Validating settings...".blue());

    let config_path = super::locate_config(config)?;
    println!("Settings file: {}", config_path.display().to_string().cyan());

    let settings = ebflow_core::load_settings(&config_path)?;
    let stack_config = settings.resolve()?;

    let graph = ebflow_stack::synthesize(&stack_config, &OptionDefaults::default())?;

    println!("{}", "✓ Settings are valid!".green().bold());
    println!();
    println!("Summary:");
    println!(
        "  Environment: {} ({})",
        stack_config.env_name.cyan(),
        stack_config.environment_type
    );
    println!("  Application: {}", stack_config.app_name.cyan());

    let pipeline = graph
        .get("codepipeline")
        .ok_or_else(|| anyhow::anyhow!("synthesis produced no pipeline resource"))?;
    let stage_names: Vec<String> = pipeline.properties["stages"]
        .as_array()
        .map(|stages| {
            stages
                .iter()
                .filter_map(|s| s["name"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default();
    println!(
        "  Pipeline: {} [{}]",
        stack_config.pipeline_name.cyan(),
        stage_names.join(" → ")
    );

    let tls = if stack_config.ssl_certificate_arn.is_some() {
        "enabled"
    } else {
        "disabled"
    };
    println!("  TLS listener: {tls}");

    match graph.get("dns-alias-record") {
        Some(record) => println!(
            "  DNS alias: {}",
            record.properties["record_name"]
                .as_str()
                .unwrap_or_default()
                .cyan()
        ),
        None => println!("  DNS alias: (not configured)"),
    }

    println!("  Resources: {}", graph.resources.len());

    Ok(())
}
