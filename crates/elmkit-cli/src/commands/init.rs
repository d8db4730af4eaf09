use std::path::Path;

use console::style;
use miette::Result;

use elmkit_scaffold::Scaffold;
use elmkit_util::errors::ElmkitError;

/// File name of the generated configuration.
const CONFIG_FILE: &str = "elm-tooling.json";

pub async fn exec() -> Result<()> {
    let cwd = std::env::current_dir().map_err(ElmkitError::Io)?;
    let config_path = cwd.join(CONFIG_FILE);

    if config_path.exists() {
        return Err(ElmkitError::Generic {
            message: format!("{} already exists", config_path.display()),
        }
        .into());
    }

    let scaffold = elmkit_scaffold::build(&cwd).await;
    write_scaffold(&config_path, &scaffold)?;

    println!("{}", style(config_path.display()).bold());
    println!("Created! Open it in a text editor and have a look!");
    println!("To install the listed tools, run the installer against this file.");
    Ok(())
}

fn write_scaffold(path: &Path, scaffold: &Scaffold) -> Result<()> {
    let mut json = serde_json::to_string_pretty(scaffold).map_err(|e| ElmkitError::Generic {
        message: format!("Failed to serialize {CONFIG_FILE}: {e}"),
    })?;
    json.push('\n');
    std::fs::write(path, json).map_err(ElmkitError::Io)?;
    Ok(())
}
