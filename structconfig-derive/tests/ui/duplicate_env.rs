#![allow(dead_code)]

use structconfig::StructConfig;

#[derive(StructConfig)]
struct Config {
    #[env = "A"]
    #[env(name = "B")]
    value: String,
}

fn main() {}
