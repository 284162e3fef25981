mod commands;
mod context;
mod examples;
mod output;
mod theme;
mod views;

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{
    ColorChoice, Command, CommandFactory, FromArgMatches, Parser, Subcommand,
    builder::{Styles, styling::AnsiColor},
};
use colored::{Color as ThemeColor, Colorize, control::ShouldColorize};
use flatsocial::RepoError;

use commands::{
    feed::{handle_feed, handle_profile},
    friends::{FriendsCommands, handle_friends_commands},
    posts::{PostsCommands, handle_posts_commands},
    users::{UsersCommands, handle_login, handle_users_commands},
};
use context::AppContext;
use examples::{ExampleGroup, command_examples};
use output::{GlobalOptions, OutputFormat, OutputManager};
use theme::{ICONS, THEME};

const ENVIRONMENT_VARIABLES: &[(&str, &str)] = &[
    ("FLATSOCIAL_CONFIG", "Path to a flatsocial.toml configuration file"),
    ("FLATSOCIAL_DATA_DIR", "Directory holding the JSON collections"),
    ("FLATSOCIAL_ENV", "Set to 'production' to use /app/shared/data"),
    ("RUST_LOG", "Log filter, e.g. flatsocial=debug"),
];

#[derive(Parser)]
#[command(name = "flatsocial")]
#[command(version)]
#[command(
    about = "Social network data stored as flat JSON files",
    long_about = r#"Manage a small social network whose data lives in plain JSON files:

• users.json, friendships.json, posts.json and post_likes.json
• News feeds built from a user's own posts and their friends' posts
• Likes, comments and friendships with per-collection write locking

Commands:
  users     Register, list, inspect and edit accounts
  login     Check credentials and report where the user lands
  friends   List, add and remove friendships
  feed      Show a user's news feed
  posts     Publish, like and comment
  profile   Show a user's profile
"#
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Configuration file (defaults to ./flatsocial.toml when present)
    #[arg(long, global = true, env = "FLATSOCIAL_CONFIG")]
    config: Option<PathBuf>,

    /// Data directory, overriding configuration and environment
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    /// Suppress output (only errors will be shown)
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse with themed help plus per-command examples. Exits on parse errors.
    fn parse_with_styles() -> Self {
        let matches = build_cli_command().styles(help_styles()).get_matches();
        Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
    }
}

fn build_cli_command() -> Command {
    let use_color = ShouldColorize::from_env().should_colorize();
    let mut command = Cli::command()
        .color(if use_color { ColorChoice::Auto } else { ColorChoice::Never })
        .after_long_help(render_top_level_appendix(use_color));
    for example in command_examples() {
        if let Some(subcommand) = command.find_subcommand_mut(example.name) {
            *subcommand = subcommand.clone().after_long_help(render_examples(example.groups, use_color));
        }
    }
    command
}

fn render_examples(groups: &[ExampleGroup], use_color: bool) -> String {
    let mut buffer = format!("{}\n", stylize("Examples:", THEME.highlight, true, use_color));
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            buffer.push('\n');
        }
        let _ = writeln!(buffer, "  {}", stylize(group.title, THEME.primary, true, use_color));
        for command in group.commands {
            let arrow = stylize(ICONS.arrow, THEME.secondary, false, use_color);
            let _ = writeln!(buffer, "    {arrow} {}", stylize(command, THEME.secondary, false, use_color));
        }
    }
    buffer
}

fn render_top_level_appendix(use_color: bool) -> String {
    let mut buffer = format!("{}\n", stylize("Environment Variables:", THEME.highlight, true, use_color));
    for (key, description) in ENVIRONMENT_VARIABLES {
        let _ = writeln!(
            buffer,
            "  {}  {}",
            stylize(key, THEME.key, true, use_color),
            stylize(description, THEME.value, false, use_color)
        );
    }
    let _ = writeln!(
        buffer,
        "\n{} {}",
        stylize("Tip:", THEME.highlight, true, use_color),
        stylize("Use 'flatsocial <command> --help' to view examples for each command.", THEME.secondary, false, use_color)
    );
    buffer
}

fn stylize(text: &str, color: ThemeColor, bold: bool, use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }
    let styled = text.color(color);
    if bold { styled.bold().to_string() } else { styled.to_string() }
}

/// clap help colors, kept in step with [`THEME`].
fn help_styles() -> Styles {
    Styles::styled()
        .usage(AnsiColor::BrightBlue.on_default().bold())
        .header(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Magenta.on_default())
        .placeholder(AnsiColor::BrightBlack.on_default())
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().bold())
}

#[derive(Subcommand)]
enum Commands {
    /// Register, list, inspect and edit accounts
    #[command(subcommand)]
    Users(UsersCommands),

    /// Check credentials
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Friends and friend suggestions
    #[command(subcommand)]
    Friends(FriendsCommands),

    /// A user's news feed
    Feed {
        /// Viewer's user id
        viewer: String,
    },

    /// Publish, like and comment on posts
    #[command(subcommand)]
    Posts(PostsCommands),

    /// A user's profile and friends
    Profile {
        /// User id
        user: String,
    },
}

/// Message for a failed command, led by the stable error code when there is one.
fn describe_failure(err: &anyhow::Error) -> String {
    match err.downcast_ref::<RepoError>() {
        Some(repo_err) => format!("[{}] {repo_err}", repo_err.code()),
        None => format!("{err:#}"),
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse_with_styles();
    if cli.no_color {
        colored::control::set_override(false);
    }
    let output = OutputManager::new(GlobalOptions {
        output_format: cli.output.clone(),
        quiet: cli.quiet,
        no_color: cli.no_color,
    });
    let ctx = AppContext {
        config_path: cli.config.clone(),
        data_dir: cli.data_dir.clone(),
    };

    if output.is_table() {
        println!();
    }
    if let Err(err) = execute(cli.command, &ctx, &output).await {
        output.error(&describe_failure(&err));
        std::process::exit(1);
    }
    if output.is_table() {
        println!();
    }
}

async fn execute(command: Commands, ctx: &AppContext, output: &OutputManager) -> Result<()> {
    match command {
        Commands::Users(users_cmd) => handle_users_commands(users_cmd, ctx, output).await?,
        Commands::Login { email, password } => handle_login(&email, &password, ctx, output).await?,
        Commands::Friends(friends_cmd) => handle_friends_commands(friends_cmd, ctx, output).await?,
        Commands::Feed { viewer } => handle_feed(&viewer, ctx, output).await?,
        Commands::Posts(posts_cmd) => handle_posts_commands(posts_cmd, ctx, output).await?,
        Commands::Profile { user } => handle_profile(&user, ctx, output).await?,
    }

    Ok(())
}
