use clap::{Parser, Subcommand};
use scene_pad::{config, output, process};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scene-pad")]
#[command(about = "Resize storybook scenes to a uniform, padded size")]
#[command(long_about = "\
Resize storybook scenes to a uniform, padded size

Looks for scene-01.png through scene-10.png in the scene directory. Each one
found is scaled to fit the target size (aspect ratio preserved, never
cropped), centered on a solid background, and saved back in place.
Missing scenes are reported and skipped.

Defaults: 1180x800 on (253, 242, 245). Override them with a config.toml in
the scene directory; run 'scene-pad gen-config' for a documented template.")]
#[command(version)]
struct Cli {
    /// Scene directory [default: the directory containing this executable]
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Log computed layouts and encode sizes to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Resize every scene in place (the default)
    Resize,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Command::Resize) {
        Command::Resize => {
            let source = match cli.source {
                Some(dir) => dir,
                None => config::executable_dir()?,
            };
            let pad_config = config::load_config(&source)?;
            tracing::debug!("scene directory: {}", source.display());

            output::print_header(pad_config.target_dimensions(), pad_config.background);
            let report = process::process(&source, &pad_config, output::print_scene_event)?;
            output::print_footer();
            tracing::info!(
                "{} scenes resized, {} missing",
                report.resized.len(),
                report.missing.len()
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber.
///
/// `--verbose` forces DEBUG; otherwise `RUST_LOG` applies, defaulting to `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
