//! Command-line host for the surround engine.
//!
//! Loads a file, puts the cursor where asked, runs one command and writes the
//! result:
//!
//! ```sh
//! surround --cursor 3:9 src/lib.rs ChSurrounding '['
//! surround -i --cursor 1:4 notes.txt SurroundWord '`'
//! ```
//!
//! A command that cannot be applied is reported on stderr and leaves the text
//! as it was; that is not a process failure.

mod config;
mod logging;

use std::{
  fs::File,
  io::{
    self,
    BufReader,
    BufWriter,
    Write,
  },
  num::NonZeroUsize,
  path::{
    Path,
    PathBuf,
  },
};

use clap::{
  CommandFactory,
  FromArgMatches,
  Parser,
};
use eyre::{
  Result,
  WrapErr,
  bail,
};
use ropey::Rope;
use surround_lib::{
  buffer::TextBuffer,
  command::{
    self,
    Command,
  },
  messages::Message,
  pair::Pair,
  position::Cursor,
};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "surround")]
#[command(about = "Remove, change, or insert delimiter pairs around the cursor")]
struct Cli {
  /// Config file to use instead of the default one
  #[arg(long)]
  config: Option<PathBuf>,

  /// Cursor position as ROW:COL, both 1-based
  #[arg(long, default_value = "1:1", value_parser = parse_cursor)]
  cursor: Cursor,

  /// Rewrite FILE instead of printing the result
  #[arg(short, long)]
  in_place: bool,

  /// Report failures as JSON lines
  #[arg(long)]
  json_messages: bool,

  /// File to edit, `-` for stdin
  file: PathBuf,

  /// Command and its delimiter argument, e.g. `ChSurrounding <`
  #[arg(required = true, num_args = 1..)]
  command: Vec<String>,
}

fn parse_cursor(arg: &str) -> Result<Cursor, String> {
  let (row, col) = arg
    .split_once(':')
    .ok_or_else(|| format!("expected ROW:COL, got '{arg}'"))?;
  let row = row
    .parse::<NonZeroUsize>()
    .map_err(|err| format!("invalid row '{row}': {err}"))?;
  let col = col
    .parse::<NonZeroUsize>()
    .map_err(|err| format!("invalid column '{col}': {err}"))?;
  Ok(Cursor::new(row, col.get()))
}

fn is_stdin(path: &Path) -> bool {
  path.as_os_str() == "-"
}

fn read_text(path: &Path) -> Result<Rope> {
  if is_stdin(path) {
    return Rope::from_reader(io::stdin().lock()).wrap_err("failed to read stdin");
  }
  let file =
    File::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))?;
  Rope::from_reader(BufReader::new(file))
    .wrap_err_with(|| format!("failed to read {}", path.display()))
}

fn write_text(text: &Rope, path: &Path) -> Result<()> {
  let file =
    File::create(path).wrap_err_with(|| format!("failed to create {}", path.display()))?;
  let mut writer = BufWriter::new(file);
  text
    .write_to(&mut writer)
    .and_then(|()| writer.flush())
    .wrap_err_with(|| format!("failed to write {}", path.display()))
}

fn report(message: &Message, json: bool) -> Result<()> {
  let mut stderr = io::stderr().lock();
  if json {
    serde_json::to_writer(&mut stderr, message)?;
    writeln!(stderr)?;
  } else {
    let source = message.source.as_deref().unwrap_or("surround");
    writeln!(stderr, "{source}: {}", message.text)?;
  }
  Ok(())
}

/// Applies the command line to its file and returns the failure message,
/// if any.
fn execute(cli: &Cli) -> Result<Option<Message>> {
  if cli.in_place && is_stdin(&cli.file) {
    bail!("--in-place needs a file, not stdin");
  }

  let command: Command = cli
    .command
    .join(" ")
    .parse()
    .wrap_err("invalid command")?;

  let mut buffer = TextBuffer::new(read_text(&cli.file)?).with_cursor(cli.cursor);
  let failure = command::run(&mut buffer, command);

  if cli.in_place {
    if failure.is_none() {
      write_text(buffer.text(), &cli.file)?;
    }
  } else {
    let mut stdout = io::stdout().lock();
    buffer.text().write_to(&mut stdout)?;
    stdout.flush()?;
  }

  Ok(failure)
}

/// The supported delimiters, listed under `--help`.
fn pairs_help() -> String {
  let pairs: Vec<String> = Pair::all()
    .iter()
    .map(|pair| format!("{}{}", pair.open, pair.close))
    .collect();
  format!("Delimiters (given by their opening character): {}", pairs.join(" "))
}

fn main() -> Result<()> {
  let matches = Cli::command().after_help(pairs_help()).get_matches();
  let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());
  let config = Config::load(cli.config.as_deref())?;
  logging::init(&config.log)?;

  if let Some(message) = execute(&cli)? {
    report(&message, cli.json_messages)?;
  }
  Ok(())
}
