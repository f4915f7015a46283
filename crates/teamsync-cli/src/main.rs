#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use output::OutputMode;
use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "teamsync: sheet-backed task tracker",
    long_about = None
)]
struct Cli {
    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Connect to a sheet bridge endpoint",
        long_about = "Persist the bridge endpoint URL used by every other command.",
        after_help = "EXAMPLES:\n    tsy connect https://script.example.com/macros/s/.../exec"
    )]
    Connect(cmd::connect::ConnectArgs),

    #[command(
        about = "Pull the remote snapshot",
        long_about = "Fetch the full sheet snapshot and rebuild the entity model.",
        after_help = "EXAMPLES:\n    tsy pull\n    tsy pull --json"
    )]
    Pull(cmd::pull::PullArgs),

    #[command(
        about = "List tasks",
        long_about = "List tasks with optional filters, freshly pulled from the bridge.",
        after_help = "EXAMPLES:\n    tsy list\n    tsy list --status \"In Progress\" --assignee \"Alice Johnson\"\n    tsy list --search login --json"
    )]
    List(cmd::list::ListArgs),

    #[command(
        about = "Show one task in full",
        after_help = "EXAMPLES:\n    tsy show t1\n    tsy show t1 --json"
    )]
    Show(cmd::show::ShowArgs),

    #[command(
        about = "Create a task",
        long_about = "Create a task locally and push it to the Tasks sheet.",
        after_help = "EXAMPLES:\n    tsy add --title \"Fix login timeout\"\n    tsy add --title \"Ship v2\" --project Launch --due 2025-03-01"
    )]
    Add(cmd::add::AddArgs),

    #[command(
        about = "Edit task fields",
        long_about = "Apply field edits to a task and push the result.",
        after_help = "EXAMPLES:\n    tsy update t1 --status Done\n    tsy update t1 --assignee \"Bob Smith\" --due 2025-03-08"
    )]
    Update(cmd::update::UpdateArgs),

    #[command(
        about = "Append an activity-log entry",
        after_help = "EXAMPLES:\n    tsy comment t1 \"Kickoff call done\""
    )]
    Comment(cmd::comment::CommentArgs),

    #[command(
        about = "Delete a task",
        long_about = "Remove a task locally and push a delete to the Tasks sheet.",
        after_help = "EXAMPLES:\n    tsy delete t1"
    )]
    Delete(cmd::delete::DeleteArgs),

    #[command(about = "Manage projects")]
    Project {
        #[command(subcommand)]
        command: cmd::project::ProjectCommand,
    },

    #[command(about = "Manage team members")]
    Member {
        #[command(subcommand)]
        command: cmd::member::MemberCommand,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TEAMSYNC_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "teamsync=debug,info"
        } else {
            "teamsync=info,warn"
        })
    });

    let format = env::var("TEAMSYNC_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    if format == "json" {
        registry.with(fmt::layer().json().with_ansi(false)).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = cli.output_mode();

    match cli.command {
        Commands::Connect(args) => cmd::connect::run_connect(&args, output),
        Commands::Pull(args) => cmd::pull::run_pull(&args, output),
        Commands::List(args) => cmd::list::run_list(&args, output),
        Commands::Show(args) => cmd::show::run_show(&args, output),
        Commands::Add(args) => cmd::add::run_add(&args, output),
        Commands::Update(args) => cmd::update::run_update(&args, output),
        Commands::Comment(args) => cmd::comment::run_comment(&args, output),
        Commands::Delete(args) => cmd::delete::run_delete(&args, output),
        Commands::Project { command } => cmd::project::run_project(&command, output),
        Commands::Member { command } => cmd::member::run_member(&command, output),
    }
}
