use anyhow::Result;
use clap::Subcommand;
use flatsocial::{ActorRef, GatePolicy};

use crate::context::AppContext;
use crate::examples::ExampleGroup;
use crate::output::OutputManager;

pub const EXAMPLES: &[ExampleGroup] = &[
    ExampleGroup {
        title: "Publish",
        commands: &["flatsocial posts create 1 \"Hello, world\""],
    },
    ExampleGroup {
        title: "Engage",
        commands: &[
            "flatsocial posts like 7 --user 2       # Toggle user 2's like on post 7",
            "flatsocial posts comment 7 --user 2 \"Nice!\"",
        ],
    },
];

#[derive(Subcommand)]
pub enum PostsCommands {
    /// Publish a post
    #[command(name = "create")]
    Create {
        /// Author's user id
        user: String,
        content: String,
    },

    /// Like a post, or unlike it if already liked
    #[command(name = "like")]
    Like {
        /// Post id
        post: u64,
        /// Acting user id
        #[arg(long)]
        user: String,
    },

    /// Comment on a post
    #[command(name = "comment")]
    Comment {
        /// Post id
        post: u64,
        /// Acting user id
        #[arg(long)]
        user: String,
        content: String,
    },
}

pub async fn handle_posts_commands(command: PostsCommands, ctx: &AppContext, output: &OutputManager) -> Result<()> {
    let client = ctx.client()?;

    match command {
        PostsCommands::Create { user, content } => {
            let actor = client.authorize(&user, GatePolicy::Members).await?;
            let post = client.create_post(actor.id, &content).await?;
            output.success(&format!("Published post {}", post.post.id));
            output.display(&post)?;
        }
        PostsCommands::Like { post, user } => {
            let actor = client.authorize(&user, GatePolicy::Members).await?;
            let toggle = client.toggle_like(post, ActorRef::user(actor.id)).await?;
            let verb = if toggle.liked { "Liked" } else { "Unliked" };
            output.success(&format!("{verb} post {post}"));
            output.display(&toggle)?;
        }
        PostsCommands::Comment { post, user, content } => {
            let actor = client.authorize(&user, GatePolicy::Members).await?;
            let comment = client.add_comment(post, actor.id, &content).await?;
            output.success(&format!("Comment {} added to post {post}", comment.id));
            output.display(&comment)?;
        }
    }

    Ok(())
}
