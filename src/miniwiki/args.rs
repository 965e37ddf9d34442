use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "miniwiki")]
#[command(about = "A small file-backed wiki served over HTTP", long_about = None)]
pub struct Cli {
    /// Directory holding the wiki entries (defaults to the platform data dir)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,
}
