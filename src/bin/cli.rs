use allocine_reviews::cli::{self, Command};
use allocine_reviews::pipeline::Step;
use color_eyre::eyre::{eyre, Result};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cmd = cli::parse_args(std::env::args().skip(1))
        .map_err(|e| eyre!("{e}\n\n{}", cli::usage()))?;

    match cmd {
        Command::Help => println!("{}", cli::usage()),
        Command::Pipeline => {
            if let Err(e) = cli::run_pipeline() {
                eprintln!("Error during pipeline: {e}");
                std::process::exit(e.exit_code());
            }
        }
        Command::Step(Step::Extract) => {
            cli::run_extract().map_err(|e| eyre!("extract: {e}"))?;
        }
        Command::Step(Step::Normalize) => {
            cli::run_normalize().map_err(|e| eyre!("normalize: {e}"))?;
        }
    }
    Ok(())
}
