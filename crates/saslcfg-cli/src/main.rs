//! Command-line surface for the resolve-and-assemble core.
//!
//! Parses the input parameters, performs one resolution against Secret
//! Manager, and prints the assembled properties. The composed SASL entry
//! is redacted on output; only the broker client should ever see it.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use saslcfg_core::{assemble, GcpSecretStore, SourceOptions, SASL_JAAS_CONFIG};

#[derive(Parser, Debug)]
#[command(name = "saslcfg", version, about = "Build Kafka SASL client properties from Secret Manager credentials")]
struct Args {
    /// Secret Manager project the secrets live in
    #[arg(long)]
    project_id: String,

    /// Kafka bootstrap address handed to the client unmodified
    #[arg(long)]
    bootstrap_servers: String,

    /// Secret id holding the SASL username
    #[arg(long)]
    username_secret_id: String,

    /// Version of the username secret
    #[arg(long, default_value = "latest")]
    username_version_id: String,

    /// Secret id holding the SASL password
    #[arg(long)]
    password_secret_id: String,

    /// Version of the password secret
    #[arg(long, default_value = "latest")]
    password_version_id: String,
}

impl From<Args> for SourceOptions {
    fn from(args: Args) -> Self {
        SourceOptions {
            project_id: args.project_id,
            bootstrap_servers: args.bootstrap_servers,
            username_secret_id: args.username_secret_id,
            username_version_id: args.username_version_id,
            password_secret_id: args.password_secret_id,
            password_version_id: args.password_version_id,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options: SourceOptions = Args::parse().into();

    let store = GcpSecretStore::connect().await?;
    let properties = assemble(&store, &options).await?;

    for (key, value) in properties.iter() {
        if key == SASL_JAAS_CONFIG {
            println!("{key}=<redacted>");
        } else {
            println!("{key}={value}");
        }
    }

    Ok(())
}
