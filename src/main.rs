use anyhow::{Error, Result};
use plantillas::{cli, config::Config, utils::init_tracing};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::load()?;
    init_tracing(&config);

    cli::run(config).await
}
