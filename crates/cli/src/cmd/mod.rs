pub mod delete;
pub mod doctor;
pub mod exists;
pub mod list;
pub mod new;
pub mod next_id;
pub mod output;
pub mod search;
pub mod show;
pub mod update;

use std::path::Path;

use mdstore_core::config::loader::ConfigLoader;
use mdstore_core::config::types::ResolvedConfig;
use mdstore_core::{Entry, FileStore, StoreError};

/// Load configuration and start logging, exiting on failure.
pub fn load_config(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = crate::logging::init(&rc) {
        let path = rc.logging.file.as_deref().unwrap_or(Path::new(""));
        eprintln!("Error: cannot open log file {}: {e}", path.display());
        exit(1);
    }
    rc
}

/// Open the store for a category, exiting on failure.
pub fn open_store(rc: &ResolvedConfig, category: &str) -> FileStore<Entry> {
    let dir = match rc.category_dir(category) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {e}");
            exit(1);
        }
    };

    match FileStore::new(dir, category) {
        Ok(store) => store,
        Err(e) => fail(&e),
    }
}

/// Print a store error with its recovery hint and exit.
pub fn fail(e: &StoreError) -> ! {
    eprintln!("Error: {e}");
    if let Some(hint) = e.hint() {
        eprintln!("Hint: {hint}");
    }
    exit(1);
}

/// Flush logs and exit with `code`.
pub fn exit(code: i32) -> ! {
    crate::logging::shutdown();
    std::process::exit(code);
}
