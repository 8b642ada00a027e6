mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mds", version, about = "Typed records in plain markdown files")]
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
    /// Validate configuration and print resolved paths
    Doctor,

    /// List every record in a category
    List(ListArgs),

    /// Show one record, including its body
    Show(ShowArgs),

    /// Find records whose title or tags contain a query
    Search(SearchArgs),

    /// Create a new record
    New(NewArgs),

    /// Change the title, tags or body of a record
    Update(UpdateArgs),

    /// Delete a record
    Delete(IdArgs),

    /// Print the next free sequential id of a category
    NextId(CategoryArgs),

    /// Exit successfully if a record exists
    Exists(IdArgs),
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Quiet,
}

#[derive(Debug, Args)]
pub struct CategoryArgs {
    /// Record category (e.g. "skill")
    pub category: String,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Record category (e.g. "skill")
    pub category: String,

    /// Record id (e.g. "skill-001")
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Record category (e.g. "skill")
    pub category: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long)]
    pub json: bool,

    /// Shorthand for --output quiet (ids only)
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Record category (e.g. "skill")
    pub category: String,

    /// Record id (e.g. "skill-001")
    pub id: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Record category (e.g. "skill")
    pub category: String,

    /// Case-insensitive text matched against titles and tags
    #[arg(default_value = "")]
    pub query: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long)]
    pub json: bool,

    /// Shorthand for --output quiet (ids only)
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Record category (e.g. "skill")
    pub category: String,

    #[arg(long)]
    pub title: String,

    /// Tag to attach (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    #[arg(long)]
    pub body: Option<String>,

    /// Explicit id; defaults to the next sequential id
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Record category (e.g. "skill")
    pub category: String,

    /// Record id (e.g. "skill-001")
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    /// Replace tags (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Remove all tags
    #[arg(long, conflicts_with = "tags")]
    pub clear_tags: bool,

    #[arg(long)]
    pub body: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::List(args) => cmd::list::run(config, profile, args),
        Commands::Show(args) => cmd::show::run(config, profile, args),
        Commands::Search(args) => cmd::search::run(config, profile, args),
        Commands::New(args) => cmd::new::run(config, profile, args),
        Commands::Update(args) => cmd::update::run(config, profile, args),
        Commands::Delete(args) => cmd::delete::run(config, profile, args),
        Commands::NextId(args) => cmd::next_id::run(config, profile, args),
        Commands::Exists(args) => cmd::exists::run(config, profile, args),
    }

    logging::shutdown();
}
