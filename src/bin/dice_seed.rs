#[macro_use] extern crate log;

use anyhow::{Context, Result};
use clap::Parser;
use dice_seed::bip39::WordList;
use dice_seed::collector::{self, CollectionSession};
use dice_seed::config::{Config, Overrides};
use dice_seed::terminal::TerminalSurface;
use std::path::PathBuf;
use std::process;

/// Turn dice rolls into a 24-word BIP-39 mnemonic.
///
/// Type one roll per keypress. The mnemonic preview updates after every roll and the final
/// phrase is printed once all rolls are in. Ctrl-C or Esc aborts.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Faces on the die: 6 or 8.
    #[arg(short, long)]
    digits: Option<u32>,

    /// Word list file, one word per line.
    #[arg(short = 'L', long)]
    language_file: Option<PathBuf>,

    /// TOML file with default settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the rolls on the line before the mnemonic.
    #[arg(long)]
    show_rolls: bool,
}

fn load_config(cli: Cli) -> Result<Config> {
    let config = match cli.config {
        Some(ref path) => Config::from_file(path)?,
        None => Config::default(),
    };

    Ok(config.apply(Overrides {
        digits: cli.digits,
        language_file: cli.language_file,
        show_rolls: cli.show_rolls,
    }))
}

fn run(cli: Cli) -> Result<String> {
    // Everything that can be checked up front is, before the terminal changes mode.
    let config = load_config(cli)?;
    let alphabet = config.alphabet()?;
    let wordlist = WordList::from_file(&config.language_file)
        .context("Please specify a valid language file")?;
    info!("Collecting base {} rolls with {} words", alphabet.base(), wordlist.len());

    let session = CollectionSession::new(alphabet, &wordlist);

    let result = {
        let mut surface = TerminalSurface::acquire().context("can't set up the terminal")?;
        collector::run_prompt(&mut surface, session)
    }?;
    info!("Collected {} rolls", result.rolls.chars().count());

    Ok(result.render(config.show_rolls))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        },
    }
}
