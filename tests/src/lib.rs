//! Cross-crate checks of the properties every compliant version must keep.

mod extension;
mod injection;
mod segregation;
mod substitution;
