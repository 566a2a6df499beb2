//! The three export views and weak typing in action

use structconfig::{StructConfig, Value};

#[derive(Debug, StructConfig)]
struct Config {
    #[env = "WORKERS"]
    pub workers: i16,

    #[env = "SAMPLE_RATE"]
    pub sample_rate: f32,

    #[env = "VERBOSE"]
    pub verbose: bool,

    // Untagged: exported, never bound
    pub version: String,
}

fn main() -> anyhow::Result<()> {
    let mut config = Config {
        workers: 4,
        sample_rate: 1.0,
        verbose: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    // 100000 does not fit an i16 and wraps; "maybe" is not a boolean and is ignored
    let report = structconfig::bind(
        &mut config,
        ["WORKERS=100000", "SAMPLE_RATE=0.25", "VERBOSE=maybe"],
    );
    for (field, err) in report.malformed() {
        println!("ignored {field}: {err}");
    }

    for entry in structconfig::slice(&config, false) {
        println!("{:<12} {:<12} {}", entry.name, entry.tag, entry.value.to_json());
    }

    let map = structconfig::map(&config, false);
    let workers = i16::try_from(map["workers"].clone())?;
    println!("workers as i16: {workers}");
    assert!(matches!(map["sample_rate"], Value::F32(_)));

    println!("{}", structconfig::string(&config, false));

    Ok(())
}
