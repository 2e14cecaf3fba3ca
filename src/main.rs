use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing::debug;

use rbenc::bencode::{decode, Value};
use rbenc::metainfo::Metainfo;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a bencoded string and print it as JSON
    Decode {
        /// The bencoded value, e.g. "d3:cow3:mooe"
        input: String,
    },
    /// Print metadata from a torrent file
    Info {
        /// Path to the .torrent file
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .init();

    match cli.cmd {
        Commands::Decode { input } => {
            let value = decode(input.as_bytes()).context("failed to decode bencoded input")?;
            debug!("decoded one top-level value");
            println!("{}", to_json(&value));
        }
        Commands::Info { path } => {
            let metainfo = Metainfo::from_file(&path)
                .with_context(|| format!("failed to parse {}", path.display()))?;

            if let Some(announce) = &metainfo.announce {
                println!("Tracker: {}", announce);
            }
            println!("Length: {}", metainfo.info.total_length);
            println!("Name: {}", metainfo.info.name);
            println!("Info Hash: {}", metainfo.info_hash);
            println!("Piece Length: {}", metainfo.info.piece_length);
            println!("Pieces: {}", metainfo.info.piece_count());
        }
    }

    Ok(())
}

/// Renders a decoded bencode value as JSON for display.
///
/// Byte strings are rendered as lossy UTF-8; torrent fields that carry raw
/// hashes will show replacement characters, which is acceptable for a
/// human-readable dump.
fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Integer(i) => serde_json::Value::from(*i),
        Value::Bytes(b) => serde_json::Value::String(String::from_utf8_lossy(b).into_owned()),
        Value::List(l) => serde_json::Value::Array(l.iter().map(to_json).collect()),
        Value::Dict(d) => serde_json::Value::Object(
            d.iter()
                .map(|(k, v)| (String::from_utf8_lossy(k).into_owned(), to_json(v)))
                .collect(),
        ),
    }
}
