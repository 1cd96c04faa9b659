use clap::Parser;

/// Classroom hall-pass kiosk server.
#[derive(Parser, Debug)]
#[command(name = "hallpass", version, about)]
pub struct Cli {
    /// Path of the SQLite database (overrides HALLPASS_DB)
    #[arg(long)]
    pub db: Option<String>,

    /// Listen port (overrides HALLPASS_PORT)
    #[arg(long)]
    pub port: Option<u16>,
}
