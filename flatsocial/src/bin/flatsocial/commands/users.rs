use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use flatsocial::{Role, Status, UserUpdate};

use crate::context::AppContext;
use crate::examples::ExampleGroup;
use crate::output::OutputManager;

pub const EXAMPLES: &[ExampleGroup] = &[
    ExampleGroup {
        title: "Directory",
        commands: &[
            "flatsocial users list                  # All accounts",
            "flatsocial users show 3                # One account in detail",
        ],
    },
    ExampleGroup {
        title: "Accounts",
        commands: &[
            "flatsocial users register --name Ann --email ann@example.com --password secret1",
            "flatsocial users update 3 --status blocked",
            "flatsocial users update 3 --role admin --birth-date 1990-05-01",
        ],
    },
];

pub const LOGIN_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Login",
    commands: &["flatsocial login ann@example.com --password secret1"],
}];

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RoleArg {
    User,
    Admin,
    Moderator,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::User => Role::User,
            RoleArg::Admin => Role::Admin,
            RoleArg::Moderator => Role::Moderator,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusArg {
    Active,
    Blocked,
    Pending,
}

impl From<StatusArg> for Status {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Active => Status::Active,
            StatusArg::Blocked => Status::Blocked,
            StatusArg::Pending => Status::Pending,
        }
    }
}

#[derive(Subcommand)]
pub enum UsersCommands {
    /// List every account
    #[command(name = "list")]
    List,

    /// Show one account
    #[command(name = "show")]
    Show {
        /// User id
        id: u64,
    },

    /// Create a new account
    #[command(name = "register")]
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Edit an account (admin)
    #[command(name = "update")]
    Update(UpdateArgs),
}

#[derive(Args)]
pub struct UpdateArgs {
    /// User id
    pub id: u64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long, value_enum)]
    pub role: Option<RoleArg>,

    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Birth date, kept unchanged when omitted
    #[arg(long)]
    pub birth_date: Option<String>,
}

impl From<UpdateArgs> for UserUpdate {
    fn from(args: UpdateArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            role: args.role.map(Role::from),
            status: args.status.map(Status::from),
            birth_date: args.birth_date,
        }
    }
}

pub async fn handle_users_commands(command: UsersCommands, ctx: &AppContext, output: &OutputManager) -> Result<()> {
    let client = ctx.client()?;

    match command {
        UsersCommands::List => {
            let users = client.list_users().await;
            output.heading(&format!("Users ({})", users.len()));
            if users.is_empty() {
                output.info("No users registered yet");
            }
            output.display(users.as_slice())?;
        }
        UsersCommands::Show { id } => {
            let user = client.get_user(id).await?;
            output.display(&user)?;
        }
        UsersCommands::Register { name, email, password } => {
            let user = client.register(&name, &email, &password).await?;
            output.success(&format!("Registered {} with id {}", user.name, user.id));
            output.display(&user)?;
        }
        UsersCommands::Update(args) => {
            let id = args.id;
            let user = client.update_user(id, args.into()).await?;
            output.success(&format!("Updated user {id}"));
            output.display(&user)?;
        }
    }

    Ok(())
}

pub async fn handle_login(email: &str, password: &str, ctx: &AppContext, output: &OutputManager) -> Result<()> {
    let client = ctx.client()?;
    let outcome = client.login(email, password).await?;
    output.success(&format!("Welcome back, {}", outcome.user.name));
    output.display(&outcome)?;
    Ok(())
}
