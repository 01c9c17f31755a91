//! CLI argument parsing

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "snifferx")]
#[command(version, about = "Passive network packet dissector", long_about = None)]
pub struct Cli {
    /// Network interface to sniff (default: first up, non-loopback)
    #[arg(short = 'I', long)]
    pub interface: Option<String>,

    /// Stop after this many frames (0 = run until interrupted)
    #[arg(short = 'c', long, default_value = "0")]
    pub count: u64,

    /// Maximum bytes captured per frame
    #[arg(long, default_value = "65535")]
    pub snaplen: i32,

    /// Do not put the interface into promiscuous mode
    #[arg(long)]
    pub no_promiscuous: bool,

    /// Verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available network interfaces
    Interfaces,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
