use std::path::Path;

use super::{fail, load_config, open_store};
use crate::CategoryArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: CategoryArgs) {
    let rc = load_config(config, profile);
    let store = open_store(&rc, &args.category);

    match store.next_id() {
        Ok(id) => println!("{id}"),
        Err(e) => fail(&e),
    }
}
