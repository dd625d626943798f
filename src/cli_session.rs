//! Maintenance CLI for the durable session marker store.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use garage_console::session::{FileSessionStore, SessionMarker, SessionStore};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the session marker file.
    #[clap(value_parser = parse_path)]
    pub session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shows the stored session marker, if any.
    Show,

    /// Writes a session marker for the given user handle.
    Set { user_handle: String },

    /// Removes the stored session marker.
    Clear,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    let store = FileSessionStore::initialize(cli_args.session_file);

    match cli_args.command {
        Command::Show => match store.read() {
            Some(marker) => {
                println!("user_handle: {}", marker.user_handle);
                println!("created_at:  {}", marker.created_at);
            }
            None => println!("No session marker"),
        },
        Command::Set { user_handle } => {
            store.write(SessionMarker::new(user_handle))?;
            println!("Session marker written");
        }
        Command::Clear => {
            store.clear()?;
            println!("Session marker cleared");
        }
    }

    Ok(())
}
