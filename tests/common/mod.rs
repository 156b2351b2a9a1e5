#![allow(dead_code)]

pub mod mocks;

pub use mocks::{MockDecoder, MockEncoder, MockFile};

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
