use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "shelter-cli")]
#[command(about = "A console-driven record manager for a small animal shelter")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
