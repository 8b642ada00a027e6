use std::path::Path;

use super::{fail, load_config, open_store};
use crate::IdArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: IdArgs) {
    let rc = load_config(config, profile);
    let store = open_store(&rc, &args.category);

    match store.exists(&args.id) {
        Ok(true) => println!("{}: exists", args.id),
        Ok(false) => {
            println!("{}: not found", args.id);
            super::exit(1);
        }
        Err(e) => fail(&e),
    }
}
