use colored::*;
use solid_core::lesson::Principle;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn principle_details(principle: &Principle) -> Vec<Detail> {
    vec![
        (
            String::from("Domain"),
            principle.domain().color(colors::ACCENT),
        ),
        (
            String::from("Rule"),
            principle.summary().color(colors::TEXT_DEFAULT),
        ),
        (
            String::from("Module"),
            module_path(principle).color(colors::SEPARATOR),
        ),
    ]
}

fn module_path(principle: &Principle) -> String {
    format!("solid_core::{}", principle.acronym().to_ascii_lowercase())
}
