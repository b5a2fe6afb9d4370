use {clap::Parser, huewheel::app::{HueApp, cli::Cli}};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let app = HueApp::init(&cli)?;
    app.run(cli.command).await?;

    Ok(())
}
