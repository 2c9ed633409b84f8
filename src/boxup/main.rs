use std::io::{self, BufRead};

use boxup::error::Result;
use boxup::layout::{self, Alignment};
use boxup::style;
use clap::Parser;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Validate before consuming stdin so failures produce no output at all.
    let style = style::resolve(cli.style, cli.glyph.as_deref())?;
    let alignment = if cli.center {
        Alignment::Center
    } else {
        Alignment::Left
    };

    let lines: Vec<String> = io::stdin().lock().lines().collect::<io::Result<_>>()?;

    for row in layout::render(&lines, &style, cli.title.as_deref(), alignment) {
        println!("{}", row);
    }
    Ok(())
}
