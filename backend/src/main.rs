use anyhow::{Context, Result};
use fiscal_picker::script::parse_action;
use fiscal_picker::{PickerConfig, PickerController};
use log::{info, warn};
use std::path::PathBuf;

/// Print the render snapshot of a picker session as JSON
///
/// Usage: `fiscal-picker [CONFIG.yaml] [COMMAND...]`
fn main() -> Result<()> {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let has_config = args
        .first()
        .is_some_and(|first| first.ends_with(".yaml") || first.ends_with(".yml"));
    let config_path = if has_config {
        Some(PathBuf::from(args.remove(0)))
    } else {
        None
    };

    let config = PickerConfig::load_or_default(config_path.as_deref())
        .with_context(|| format!("Failed to load picker config {:?}", config_path))?;
    let today = chrono::Local::now().date_naive();
    let mut picker = PickerController::from_config(&config, today)?;
    info!("Starting fiscal picker in {} mode", picker.mode().label());

    for command in &args {
        let action = parse_action(command).with_context(|| format!("Bad command {:?}", command))?;
        if !picker.handle(action) {
            warn!("Command {:?} does nothing in {:?} mode", command, picker.mode());
        }
    }

    let snapshot = picker.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
