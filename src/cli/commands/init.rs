//! Write a starter configuration file

use crate::cli::Output;
use crate::config::CONFIG_FILE_NAMES;
use anyhow::{Context, Result, bail};

/// Starter configuration mirroring the built-in defaults, with every knob
/// spelled out for editing.
const CONFIG_TEMPLATE: &str = r#"# commitguard configuration
# Each check has `enabled` (run at all) and `enforce` (block vs. warn).

[gitignore]
enabled = true
enforce = true

[lowercase]
enabled = true
enforce = false

[build]
enabled = true
enforce = true

[build.settings]
# Staged paths under these prefixes trigger builds of every buildable package.
sharedPaths = ["packages/shared", "shared", "common", "libs"]

[gitReminder]
enabled = true
enforce = false

[gitReminder.settings]
hoursThreshold = 4
"#;

/// Execute the init command.
pub async fn execute(force: bool, output: &Output) -> Result<()> {
    output.header("Initializing commitguard");

    let path = std::path::Path::new(CONFIG_FILE_NAMES[0]);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    std::fs::write(path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    output.success(&format!("Wrote {}", path.display()));
    output.info("Run 'commitguard install' to install the git hooks");

    Ok(())
}
