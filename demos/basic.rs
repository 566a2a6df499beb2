//! Basic usage example

use structconfig::StructConfig;

#[derive(Debug, StructConfig)]
struct Config {
    // Loaded from DATABASE_URL
    #[env = "DATABASE_URL"]
    pub database_url: String,

    #[env = "SERVER_ADDR"]
    pub server_addr: String,

    // Numeric type
    #[env = "MAX_CONNECTIONS"]
    pub max_connections: u32,

    // Boolean type: DEBUG_MODE= (empty) turns it on
    #[env = "DEBUG_MODE"]
    pub debug_mode: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Defaults live in the value itself
    let mut config = Config {
        database_url: "postgres://localhost/mydb".to_string(),
        server_addr: "127.0.0.1:8080".to_string(),
        max_connections: 10,
        debug_mode: false,
    };

    // Entries as a host would collect them from the process environment
    let environ = ["SERVER_ADDR=0.0.0.0:3000", "MAX_CONNECTIONS=64", "DEBUG_MODE="];
    structconfig::from_environ(&mut config, environ);

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);

    // Anything in the real environment wins over the demo entries
    structconfig::from_environ(&mut config, structconfig::process_environ());
    println!("After process environment: {}", structconfig::string(&config, true));

    Ok(())
}
