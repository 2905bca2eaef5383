use clap::Parser;
use color_eyre::eyre::Result;

use folio::{
    app::App,
    cli::Cli,
    config::Config,
    theme::ThemeStore,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;

    let theme = ThemeStore::load_or(config.data_dir().join("theme"), config.theme());
    if let Some(override_theme) = args.theme {
        theme.set(override_theme);
    }

    let mut app = App::new(config, theme, args.tick_rate, args.frame_rate);
    app.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
