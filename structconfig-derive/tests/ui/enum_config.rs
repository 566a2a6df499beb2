#![allow(dead_code)]

use structconfig::StructConfig;

#[derive(StructConfig)]
enum Config { A, B }

fn main() {}
