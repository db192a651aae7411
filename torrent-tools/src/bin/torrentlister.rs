use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use torrent_meta::parse_torrent_file;
use torrent_tools::error::TorrentToolsResult;

/// List all files in a torrent.
#[derive(Parser)]
#[command(name = "torrentlister")]
struct Args {
    /// Path to the .torrent file
    torrent_file: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> TorrentToolsResult<()> {
    let metadata = parse_torrent_file(&args.torrent_file)?;
    debug!(
        "torrent {} declares {} files",
        metadata.name(),
        metadata.files().len()
    );

    let mut files: Vec<PathBuf> = metadata
        .files()
        .iter()
        .map(|f| PathBuf::from(metadata.name()).join(f))
        .collect();
    files.sort();

    for f in &files {
        println!("{}", f.display());
    }
    Ok(())
}
