use std::path::Path;

use super::{fail, load_config, open_store};
use crate::IdArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: IdArgs) {
    let rc = load_config(config, profile);
    let store = open_store(&rc, &args.category);

    if let Err(e) = store.delete(&args.id) {
        fail(&e);
    }

    println!("OK   mds delete");
    println!("id: {}", args.id);
}
