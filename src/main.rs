//! themesmith
use {
    clap::Parser,
    color_eyre::eyre::Result,
    themesmith::{
        app::{cli::Cli, logging},
        config::options::Settings,
    },
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let settings = Settings::load()?;
    logging::setup(&settings)?;

    cli.run(&settings).await
}
