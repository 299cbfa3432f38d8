//! End-to-end checks of the Verkle commitment engine against fixed vectors.
#[cfg(test)]
#[macro_use]
extern crate serde_derive;
