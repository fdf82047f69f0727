//! Generate static files

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Folio;

/// Generate the static site: one full load pass, one full render pass
pub fn run(folio: &Folio) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = ContentLoader::new(folio);
    let records = loader.load_posts()?;
    let pages = loader.load_pages()?;

    tracing::info!("Loaded {} posts and {} pages", records.len(), pages.len());

    let generator = Generator::new(folio)?;
    generator.generate(&records, &pages)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch for file changes and regenerate
pub async fn watch(folio: &Folio) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    if folio.content_dir.exists() {
        watcher.watch(&folio.content_dir, notify::RecursiveMode::Recursive)?;
    }
    if folio.static_dir.exists() {
        watcher.watch(&folio.static_dir, notify::RecursiveMode::Recursive)?;
    }

    let config_path = folio.base_dir.join("_config.yml");
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    // Debounce rapid event bursts from editors
    let mut last_rebuild = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, regenerating...");
                    if let Err(e) = run(folio) {
                        tracing::error!("Generation failed: {:#}", e);
                    }
                    last_rebuild = std::time::Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    Ok(())
}
