use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use log::debug;
use torrent_meta::parse_torrent_file;
use torrent_tools::error::TorrentToolsResult;
use torrent_tools::{diff, prompt, scan};

/// Delete all files in a directory that are not listed in a torrent.
#[derive(Parser)]
#[command(name = "torrentcleaner")]
struct Args {
    /// Path to the .torrent file
    torrent_file: PathBuf,
    /// Directory the torrent's content was downloaded into
    content_dir: PathBuf,
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

    let root = args.content_dir.join(metadata.name());
    let in_torrent: HashSet<PathBuf> = metadata.files().iter().map(|f| root.join(f)).collect();
    let on_disk = scan::scan_files(&args.content_dir)?;
    let report = diff::symmetric_diff(&in_torrent, &on_disk);

    if !report.only_in_torrent.is_empty() {
        println!("The following files are only in the torrent, but not in the directory:");
        list_files(&report.only_in_torrent);
        println!("----------------------------------------------");
    }

    if !report.only_on_disk.is_empty() {
        println!("The following files are only in the directory, but not in the torrent:");
        list_files(&report.only_on_disk);
        if prompt::ask_delete()? {
            for path in &report.only_on_disk {
                let res = match fs::remove_file(path) {
                    Ok(()) => "ok".green(),
                    Err(e) => {
                        debug!("removing {} failed: {}", path.display(), e);
                        "FAILED".red()
                    }
                };
                println!("Deleting {}: {}", path.display(), res);
            }
        }
    }
    Ok(())
}

fn list_files(files: &[PathBuf]) {
    for f in files {
        println!("  {}", f.display());
    }
}
