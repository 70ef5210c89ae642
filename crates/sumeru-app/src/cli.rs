use clap::Parser;

/// Sumeru — a GPU-accelerated workspace shell with resizable panels.
#[derive(Parser, Debug)]
#[command(name = "sumeru", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. debug, sumeru=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start with the right panel hidden.
    #[arg(long)]
    pub no_right_panel: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub dump_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
