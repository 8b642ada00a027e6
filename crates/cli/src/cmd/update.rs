//! Update command implementation.

use std::path::Path;

use chrono::Local;

use super::{fail, load_config, open_store};
use crate::UpdateArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: UpdateArgs) {
    let rc = load_config(config, profile);
    let store = open_store(&rc, &args.category);

    let mut entry = match store.get_by_id_with_body(&args.id) {
        Ok(entry) => entry,
        Err(e) => fail(&e),
    };

    if let Some(title) = args.title {
        entry.title = title;
    }
    if args.clear_tags {
        entry.tags.clear();
    } else if !args.tags.is_empty() {
        entry.tags = args.tags;
    }
    if let Some(body) = args.body {
        entry.body = body;
    }
    entry.set("updated", Local::now().format("%Y-%m-%d").to_string());

    let path = match store.update(&entry) {
        Ok(path) => path,
        Err(e) => fail(&e),
    };

    println!("OK   mds update");
    println!("id: {}", entry.id);
    println!("path: {}", path.display());
}
