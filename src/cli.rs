use clap::Parser;

#[derive(Parser)]
#[command(name = "installer-mock")]
#[command(author, version, about = "Mock installer backend for frontend development", long_about = None)]
pub struct Cli {
    /// Simulation mode tokens: maintenance, launcher, exists, dark,
    /// config-error, error, recovery. Unrecognized tokens are ignored.
    #[arg(value_name = "MODE")]
    pub modes: Vec<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
