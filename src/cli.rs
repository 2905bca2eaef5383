use clap::Parser;

use crate::{theme::Theme, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        long,
        value_enum,
        value_name = "THEME",
        help = "Start in the given theme instead of the saved preference"
    )]
    pub theme: Option<Theme>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["folio"]);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert_eq!(cli.theme, None);
    }

    #[test]
    fn test_theme_override() {
        let cli = Cli::parse_from(["folio", "--theme", "light"]);
        assert_eq!(cli.theme, Some(Theme::Light));
    }
}
