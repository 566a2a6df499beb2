#![allow(dead_code)]

use structconfig::StructConfig;

#[derive(StructConfig)]
struct Config(String, u16);

fn main() {}
