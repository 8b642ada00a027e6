use mdstore_core::config::loader::{ConfigLoader, default_config_path};
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            if let Err(e) = crate::logging::init(&rc) {
                println!("FAIL mds doctor");
                println!("cannot open log file: {e}");
                super::exit(1);
            }

            println!("OK   mds doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("data_root: {}", rc.data_root.display());
            if rc.categories.is_empty() {
                println!("categories: (any)");
            }
            for category in &rc.categories {
                match rc.category_dir(category) {
                    Ok(dir) => println!("category.{}: {}", category, dir.display()),
                    Err(e) => println!("category.{}: {}", category, e),
                }
            }
            println!("logging.level: {}", rc.logging.level);
            if let Some(file) = &rc.logging.file {
                println!("logging.file: {}", file.display());
            }
        }
        Err(e) => {
            println!("FAIL mds doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            super::exit(1);
        }
    }
}
