use clap::Parser;
use df_macros::cli::{self, Cli, Commands};
use df_macros::config::Settings;
use df_macros::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    let printer = Printer::new();
    let config_path = cli.config_path();

    match cli.command {
        Commands::Generate(args) => {
            let settings = Settings::load_optional(config_path.as_deref())?;
            cli::generate::run(args, &settings, &printer)?
        }
        Commands::Verify(args) => cli::verify::run(args, &printer)?,
        Commands::Config(args) => cli::config::run(args, config_path.as_deref(), &printer)?,
        Commands::Completions(args) => cli::completions::run(args)?,
    }

    Ok(())
}
