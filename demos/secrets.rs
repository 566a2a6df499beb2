//! Secret fields: bound from the environment, hidden from exports

use structconfig::StructConfig;

#[derive(Debug, StructConfig)]
#[structconfig(prefix = "APP_")]
struct Config {
    #[env(name = "NAME")]
    pub name: String, // APP_NAME

    #[env(name = "API_KEY", secret)]
    pub api_key: String, // APP_API_KEY, never logged

    #[env = "OAUTH_TOKEN,secret"]
    pub oauth_token: String, // APP_OAUTH_TOKEN, raw tag form
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut config = Config {
        name: "my-application".to_string(),
        api_key: String::new(),
        oauth_token: String::new(),
    };

    structconfig::from_environ(
        &mut config,
        ["APP_API_KEY=super-secret-key", "APP_OAUTH_TOKEN=abc123"],
    );

    // Safe to log: secrets are omitted
    println!("config: {}", structconfig::string(&config, false));

    // Bound all the same
    println!("api key is {} bytes", config.api_key.len());

    Ok(())
}
