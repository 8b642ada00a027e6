//! Show command implementation.

use std::path::Path;

use mdstore_core::frontmatter::serialize;

use super::output::EntryOutput;
use super::{fail, load_config, open_store};
use crate::ShowArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: ShowArgs) {
    let rc = load_config(config, profile);
    let store = open_store(&rc, &args.category);

    let entry = match store.get_by_id_with_body(&args.id) {
        Ok(entry) => entry,
        Err(e) => fail(&e),
    };

    if args.json {
        let output = EntryOutput::from(&entry);
        println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        return;
    }

    match serialize(&entry, &entry.body) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => {
            eprintln!("Error: failed to render {}: {e}", args.id);
            super::exit(1);
        }
    }
}
