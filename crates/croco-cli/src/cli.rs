use clap::Parser;
use std::path::PathBuf;

use croco_core::Variant;

#[derive(Parser, Debug)]
#[command(name = "croco", version, about = "croco - full-stack monorepo project generator")]
pub struct Cli {
    /// Project name (prompted when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Install dependencies without asking
    #[arg(long, conflicts_with = "no_install")]
    pub install: bool,

    /// Skip dependency installation without asking
    #[arg(long)]
    pub no_install: bool,

    /// Skeleton to generate (minimal, full)
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Directory to create the project in (defaults to the current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Configuration file (defaults to ./croco.yaml)
    #[arg(short, long, env = "CROCO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The install answer given on the command line, if any.
    pub fn install_flag(&self) -> Option<bool> {
        match (self.install, self.no_install) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
