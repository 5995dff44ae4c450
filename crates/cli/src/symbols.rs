use autodoc_core::project::scanner::Scanner;
use autodoc_go::GoPlugin;
use std::path::PathBuf;
use tracing::info;

pub fn run(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let plugin = GoPlugin::new()?;
    let unit = Scanner::process_file(&path, &plugin)?;

    info!(
        "Collected {} functions, {} constants, {} variables from {}",
        unit.symbols.functions.len(),
        unit.symbols.constants.len(),
        unit.symbols.variables.len(),
        path.display()
    );

    println!("{}", serde_json::to_string_pretty(&unit.symbols)?);
    Ok(())
}
