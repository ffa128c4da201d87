use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "railarea-cli",
    version,
    about = "Query rail platform areas from the command line",
    long_about = "railarea-cli loads station, line and platform area data, indexes the platform areas per world\nand answers LOCATE / MOVE / NEXT style queries either once or interactively."
)]
pub struct CliArgs {
    /// Config file path
    #[arg(short, long, default_value = "railarea.toml")]
    pub config: String,

    /// Rails data file (overrides config file)
    #[arg(long)]
    pub rails: Option<String>,

    /// Write a default config file and exit
    #[arg(long)]
    pub generate_config: bool,

    /// Log level (overrides config file)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enter interactive mode
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Command to execute (if not in interactive mode)
    #[arg(trailing_var_arg = true)]
    pub command: Vec<String>,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.interactive && !self.command.is_empty() {
            return Err("Cannot combine -i with a command.".to_string());
        }
        if let Some(rails) = &self.rails {
            if rails.trim().is_empty() {
                return Err("Rails file path must not be empty".to_string());
            }
        }
        Ok(())
    }

    pub fn should_run_interactive(&self) -> bool {
        self.interactive || self.command.is_empty()
    }
}
