#![allow(dead_code)]

use structconfig::StructConfig;

#[derive(StructConfig)]
struct Config {
    #[env(name = "A", from_file)]
    value: String,
}

fn main() {}
