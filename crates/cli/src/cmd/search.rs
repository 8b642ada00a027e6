//! Search command implementation.

use std::path::Path;

use super::output::{print_entries, resolve_format};
use super::{fail, load_config, open_store};
use crate::SearchArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: SearchArgs) {
    let rc = load_config(config, profile);
    let store = open_store(&rc, &args.category);

    let results = match store.search(&args.query) {
        Ok(results) => results,
        Err(e) => fail(&e),
    };

    let format = resolve_format(args.output, args.json, args.quiet);
    print_entries(&results, format);
}
