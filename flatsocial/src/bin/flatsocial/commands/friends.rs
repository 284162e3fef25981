use anyhow::Result;
use clap::Subcommand;
use flatsocial::{FriendshipChange, GatePolicy, Unfriend};

use crate::context::AppContext;
use crate::examples::ExampleGroup;
use crate::output::OutputManager;

pub const EXAMPLES: &[ExampleGroup] = &[
    ExampleGroup {
        title: "Browse",
        commands: &["flatsocial friends list 1              # Friends and suggestions for user 1"],
    },
    ExampleGroup {
        title: "Edit",
        commands: &[
            "flatsocial friends add 1 2             # User 1 follows user 2",
            "flatsocial friends remove 1 2          # Drop only the 1 -> 2 edge",
            "flatsocial friends remove 1 2 --mutual # Drop both directions",
        ],
    },
];

#[derive(Subcommand)]
pub enum FriendsCommands {
    /// Show a user's friends and people they may know
    #[command(name = "list")]
    List {
        /// Acting user id
        user: String,
    },

    /// Add a friend
    #[command(name = "add")]
    Add {
        /// Acting user id
        user: String,
        /// Friend's user id
        friend: u64,
    },

    /// Remove a friend
    #[command(name = "remove")]
    Remove {
        /// Acting user id
        user: String,
        /// Friend's user id
        friend: u64,
        /// Also remove the friend's edge back to the user
        #[arg(long)]
        mutual: bool,
    },
}

pub async fn handle_friends_commands(
    command: FriendsCommands,
    ctx: &AppContext,
    output: &OutputManager,
) -> Result<()> {
    let client = ctx.client()?;

    match command {
        FriendsCommands::List { user } => {
            let actor = client.authorize(&user, GatePolicy::Members).await?;
            let page = client.friends_page(actor.id).await?;
            output.heading(&format!(
                "{}: {} friends, {} suggestions",
                page.user.name,
                page.friends.len(),
                page.potential_friends.len()
            ));
            output.display(&page)?;
        }
        FriendsCommands::Add { user, friend } => {
            let actor = client.authorize(&user, GatePolicy::Members).await?;
            let target = client.get_user(friend).await?;
            match client.add_friend(actor.id, target.id).await? {
                FriendshipChange::Added(_) => output.success(&format!("{} is now a friend of {}", target.name, actor.name)),
                FriendshipChange::AlreadyFriends => {
                    output.info(&format!("{} already counts {} as a friend", actor.name, target.name))
                }
            }
        }
        FriendsCommands::Remove { user, friend, mutual } => {
            let actor = client.authorize(&user, GatePolicy::Members).await?;
            let mode = if mutual { Unfriend::Mutual } else { Unfriend::Directed };
            let removed = client.remove_friend(actor.id, friend, mode).await?;
            if removed == 0 {
                output.warning(&format!("User {} had no friendship with {friend}", actor.id));
            } else {
                output.success(&format!("Removed {removed} friendship edge(s)"));
            }
        }
    }

    Ok(())
}
