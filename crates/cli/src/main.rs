mod cmd;
mod completions;
mod logging;
mod prompt;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::CompleteEnv;
use clap_complete::engine::ArgValueCompleter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "spad",
    version,
    about = "Fill in, preview and save parameterized shell script templates"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths and roots
    Doctor,

    /// List templates found in templates_dir
    ListTemplates {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List directories rendered scripts may be saved under
    Roots {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the placeholders a template expects
    Fields(FieldsArgs),

    /// Render a template to stdout
    Render(RenderArgs),

    /// Render a template and save it under an allowed root
    Save(SaveArgs),
}

#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Template file name (e.g. "slurm_job.sh")
    #[arg(add = ArgValueCompleter::new(completions::complete_templates))]
    pub template: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template file name (e.g. "slurm_job.sh")
    #[arg(add = ArgValueCompleter::new(completions::complete_templates))]
    pub template: String,

    /// Placeholder value, repeatable
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = prompt::parse_var)]
    pub vars: Vec<(String, String)>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Template file name (e.g. "slurm_job.sh")
    #[arg(add = ArgValueCompleter::new(completions::complete_templates))]
    pub template: String,

    /// Placeholder value, repeatable
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = prompt::parse_var)]
    pub vars: Vec<(String, String)>,

    /// Directory to write into (must be under an allowed root)
    #[arg(long)]
    pub dir: PathBuf,

    /// File name to write
    #[arg(long)]
    pub name: String,

    /// Never prompt; missing values fall back to defaults
    #[arg(long)]
    pub batch: bool,

    /// Save even if required placeholders have no value
    #[arg(long)]
    pub allow_unresolved: bool,
}

fn main() {
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::ListTemplates { json } => cmd::list_templates::run(config, profile, json),
        Commands::Roots { json } => cmd::roots::run(config, profile, json),
        Commands::Fields(args) => cmd::fields::run(config, profile, &args),
        Commands::Render(args) => cmd::render::run(config, profile, &args),
        Commands::Save(args) => cmd::save::run(config, profile, &args),
    }
}
