use solid_common::config::Config;
use solid_core::lesson::Principle;

use crate::mprint;
use crate::terminal::{format, print};

pub fn list(_cfg: &Config) -> anyhow::Result<()> {
    for (idx, principle) in Principle::ALL.iter().enumerate() {
        print::tree_head(idx, &principle.to_string());
        print::as_tree_one_level(format::principle_details(principle));

        if idx + 1 != Principle::ALL.len() {
            mprint!();
        }
    }
    print::end_of_program();
    Ok(())
}
