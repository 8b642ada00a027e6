//! New command implementation.

use std::path::Path;

use chrono::Local;
use mdstore_core::Entry;
use mdstore_core::ids::parse_sequential_id;
use tracing::warn;

use super::{fail, load_config, open_store};
use crate::NewArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: NewArgs) {
    let rc = load_config(config, profile);
    let store = open_store(&rc, &args.category);

    let id = match args.id {
        Some(id) => {
            if let Some((owner, _)) = parse_sequential_id(&id) {
                if owner != args.category {
                    warn!(id = %id, category = %args.category, "id is numbered for category '{owner}'");
                }
            }
            id
        }
        None => match store.next_id() {
            Ok(id) => id,
            Err(e) => fail(&e),
        },
    };

    let mut entry = Entry::new(id, args.title)
        .with_tags(args.tags)
        .with_body(args.body.unwrap_or_default());
    entry.set("created", Local::now().format("%Y-%m-%d").to_string());

    let path = match store.create(&entry) {
        Ok(path) => path,
        Err(e) => fail(&e),
    };

    println!("OK   mds new");
    println!("id: {}", entry.id);
    println!("path: {}", path.display());
}
