use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "boxup")]
#[command(about = "Draw a decorative box around text read from stdin", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Box style: 1-3 are builtin border sets, 4 uses --glyph
    #[arg(short = 'n', long = "style", default_value_t = 1)]
    pub style: u8,

    /// Single character used for every border glyph (style 4 only)
    #[arg(short, long)]
    pub glyph: Option<String>,

    /// Title embedded in the top border
    #[arg(short, long)]
    pub title: Option<String>,

    /// Center the text instead of left-aligning it
    #[arg(short, long)]
    pub center: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["boxup"]).unwrap();
        assert_eq!(cli.style, 1);
        assert!(cli.glyph.is_none());
        assert!(cli.title.is_none());
        assert!(!cli.center);
    }

    #[test]
    fn parses_all_flags() {
        let cli =
            Cli::try_parse_from(["boxup", "-n", "4", "--glyph", "#", "-t", "log", "-c"]).unwrap();
        assert_eq!(cli.style, 4);
        assert_eq!(cli.glyph.as_deref(), Some("#"));
        assert_eq!(cli.title.as_deref(), Some("log"));
        assert!(cli.center);
    }
}
