#![allow(dead_code)]

pub mod fixtures;
pub mod sentiboard_env;
