//! Readers for on-disk star catalogs.

pub mod tycho;
