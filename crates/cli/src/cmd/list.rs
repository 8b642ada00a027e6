//! List command implementation.

use std::path::Path;

use super::output::{print_entries, resolve_format};
use super::{fail, load_config, open_store};
use crate::ListArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: ListArgs) {
    let rc = load_config(config, profile);
    let store = open_store(&rc, &args.category);

    let listing = match store.get_all_with_report() {
        Ok(listing) => listing,
        Err(e) => fail(&e),
    };

    let format = resolve_format(args.output, args.json, args.quiet);
    print_entries(&listing.records, format);

    if listing.skipped_count() > 0 {
        eprintln!("Warning: skipped {} unreadable file(s):", listing.skipped_count());
        for skipped in &listing.skipped {
            eprintln!("  {}: {}", skipped.path.display(), skipped.reason);
        }
    }
}
