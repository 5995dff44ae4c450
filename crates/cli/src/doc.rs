use autodoc_api::PackageDoc;
use autodoc_core::plugin::LanguagePlugin;
use autodoc_core::project::scanner::Scanner;
use autodoc_core::render::DocRenderer;
use autodoc_core::writer::write_doc;
use autodoc_go::GoPlugin;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

pub fn run(
    path: PathBuf,
    out: Option<PathBuf>,
    stdout: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let plugin = GoPlugin::new()?;
    let renderer = DocRenderer::new(plugin.markdown_style());

    info!("Documenting {}...", path.display());
    let docs = Scanner::scan(&path, &plugin)?;
    if docs.is_empty() {
        warn!("No Go sources found under {}", path.display());
        return Ok(());
    }

    let out = match out {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    if stdout {
        print_docs(&mut io::stdout().lock(), &renderer, &docs)?;
    } else {
        for doc in &docs {
            let content = renderer.render_package(doc);
            let written = write_doc(&out, &doc.package, &content)?;
            info!("Wrote {}", written.display());
        }
    }

    info!("Documented {} packages", docs.len());
    Ok(())
}

/// Writes each rendered package exactly as it would land in its doc file.
fn print_docs(w: &mut impl Write, renderer: &DocRenderer, docs: &[PackageDoc]) -> io::Result<()> {
    for doc in docs {
        w.write_all(renderer.render_package(doc).as_bytes())?;
    }
    w.flush()
}
