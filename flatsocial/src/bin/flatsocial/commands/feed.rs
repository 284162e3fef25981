use anyhow::Result;
use flatsocial::GatePolicy;

use crate::context::AppContext;
use crate::examples::ExampleGroup;
use crate::output::OutputManager;

pub const FEED_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "News",
    commands: &[
        "flatsocial feed 1                      # Posts by user 1 and their friends",
        "flatsocial --output json feed 1        # Same, as JSON",
    ],
}];

pub const PROFILE_EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Profile",
    commands: &["flatsocial profile 1"],
}];

pub async fn handle_feed(viewer: &str, ctx: &AppContext, output: &OutputManager) -> Result<()> {
    let client = ctx.client()?;
    let actor = client.authorize(viewer, GatePolicy::Members).await?;
    let page = client.news_page(actor.id).await?;

    output.heading(&format!("News for {}", page.user.name));
    output.key_value("Friends", &page.friends_count.to_string());
    output.key_value("Posts", &page.posts.len().to_string());
    if page.posts.is_empty() {
        output.info("Nothing to show yet. Add friends or publish a post.");
        return Ok(());
    }
    output.display(&page)?;
    Ok(())
}

pub async fn handle_profile(user: &str, ctx: &AppContext, output: &OutputManager) -> Result<()> {
    let client = ctx.client()?;
    let actor = client.authorize(user, GatePolicy::Members).await?;
    let profile = client.profile(actor.id).await?;

    output.heading(&format!("Profile of {}", profile.user.name));
    output.display(&profile)?;
    for friend in &profile.friends {
        output.bullet(&format!("{} ({})", friend.name, friend.id));
    }
    Ok(())
}
