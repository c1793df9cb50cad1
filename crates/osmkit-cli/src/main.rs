//! CLI entry point.

use clap::Parser;

use osmkit_cli::{Cli, Commands, bootstrap, handlers};

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    bootstrap::init_tracing(cli.verbose);

    tracing::debug!(build = osmkit_build_info::BUILD_ID, "Starting");

    match cli.command {
        // No command runs the full batch, same as `download` with no names
        None => {
            let config = bootstrap::load_config(cli.config.as_deref())?;
            handlers::download::execute(config, &[])?;
        }
        Some(Commands::Download { regions }) => {
            let config = bootstrap::load_config(cli.config.as_deref())?;
            handlers::download::execute(config, &regions)?;
        }
        Some(Commands::Regions) => {
            let config = bootstrap::load_config(cli.config.as_deref())?;
            handlers::regions::execute(&config);
        }
        Some(Commands::Zip { input, output }) => {
            handlers::codec::execute_zip(input.as_deref(), output.as_deref())?;
        }
        Some(Commands::Unzip {
            input,
            output,
            lenient,
        }) => {
            handlers::codec::execute_unzip(input.as_deref(), output.as_deref(), lenient)?;
        }
    }

    Ok(())
}
