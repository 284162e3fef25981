//! Table and compact renderings of library results.

use comfy_table::{Cell, Table};
use flatsocial::{
    Comment, EnrichedPost, FriendsPage, LikeToggle, LoginOutcome, NewsPage, Profile, User,
};

use crate::{
    output::{GlobalOptions, TableDisplay, new_table},
    theme::ICONS,
};

const PREVIEW_CHARS: usize = 48;

fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() { format!("{head}...") } else { head }
}

fn user_row(user: &User) -> Vec<Cell> {
    vec![
        Cell::new(user.id),
        Cell::new(&user.name),
        Cell::new(&user.email),
        Cell::new(user.role.as_str()),
        Cell::new(user.status.as_str()),
        Cell::new(user.created_at),
    ]
}

fn user_compact(user: &User) -> String {
    format!("{} {} <{}> {}/{}", user.id, user.name, user.email, user.role.as_str(), user.status.as_str())
}

fn field_table(options: &GlobalOptions, rows: Vec<(&str, String)>) -> Table {
    let mut table = new_table(options, &["Field", "Value"]);
    for (field, value) in rows {
        table.add_row(vec![Cell::new(field), Cell::new(value)]);
    }
    table
}

impl TableDisplay for User {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        field_table(
            options,
            vec![
                ("ID", self.id.to_string()),
                ("Name", self.name.clone()),
                ("Email", self.email.clone()),
                ("Role", self.role.as_str().to_string()),
                ("Status", self.status.as_str().to_string()),
                ("Birth date", self.birth_date.clone().unwrap_or_default()),
                ("Avatar", self.avatar.clone()),
                ("Created", self.created_at.to_string()),
                ("Updated", self.updated_at.to_string()),
            ],
        )
    }

    fn to_compact(&self) -> String {
        user_compact(self)
    }
}

impl TableDisplay for [User] {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = new_table(options, &["ID", "Name", "Email", "Role", "Status", "Created"]);
        for user in self {
            table.add_row(user_row(user));
        }
        table
    }

    fn to_compact(&self) -> String {
        self.iter().map(user_compact).collect::<Vec<_>>().join("\n")
    }
}

fn post_row(entry: &EnrichedPost) -> Vec<Cell> {
    let author = entry
        .author
        .as_ref()
        .map_or_else(|| format!("#{}", entry.post.user_id), |author| author.name.clone());
    let likes = if entry.liked {
        format!("{} {}", entry.post.likes, ICONS.heart)
    } else {
        entry.post.likes.to_string()
    };
    vec![
        Cell::new(entry.post.id),
        Cell::new(author),
        Cell::new(preview(&entry.post.content)),
        Cell::new(likes),
        Cell::new(entry.post.comments.len()),
        Cell::new(entry.post.created_at),
    ]
}

fn post_compact(entry: &EnrichedPost) -> String {
    format!(
        "{} by {} likes={} comments={} liked={}",
        entry.post.id,
        entry.post.user_id,
        entry.post.likes,
        entry.post.comments.len(),
        entry.liked
    )
}

const POST_HEADERS: [&str; 6] = ["ID", "Author", "Content", "Likes", "Comments", "Created"];

impl TableDisplay for EnrichedPost {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = new_table(options, &POST_HEADERS);
        table.add_row(post_row(self));
        table
    }

    fn to_compact(&self) -> String {
        post_compact(self)
    }
}

impl TableDisplay for NewsPage {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = new_table(options, &POST_HEADERS);
        for entry in &self.posts {
            table.add_row(post_row(entry));
        }
        table
    }

    fn to_compact(&self) -> String {
        self.posts.iter().map(post_compact).collect::<Vec<_>>().join("\n")
    }
}

impl TableDisplay for Profile {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let friends = self.friends.iter().map(|friend| friend.name.as_str()).collect::<Vec<_>>();
        field_table(
            options,
            vec![
                ("ID", self.user.id.to_string()),
                ("Name", self.user.name.clone()),
                ("Email", self.user.email.clone()),
                ("Birth date", self.user.birth_date.clone().unwrap_or_default()),
                ("Friends", self.friends_count.to_string()),
                ("Friend names", friends.join(", ")),
            ],
        )
    }

    fn to_compact(&self) -> String {
        format!("{} friends={}", user_compact(&self.user), self.friends_count)
    }
}

impl TableDisplay for FriendsPage {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = new_table(options, &["Relation", "ID", "Name", "Email"]);
        let rows = self
            .friends
            .iter()
            .map(|user| ("friend", user))
            .chain(self.potential_friends.iter().map(|user| ("suggested", user)));
        for (relation, user) in rows {
            table.add_row(vec![
                Cell::new(relation),
                Cell::new(user.id),
                Cell::new(&user.name),
                Cell::new(&user.email),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        let ids = |users: &[User]| users.iter().map(|user| user.id.to_string()).collect::<Vec<_>>().join(",");
        format!(
            "{} friends=[{}] suggested=[{}]",
            self.user.id,
            ids(&self.friends),
            ids(&self.potential_friends)
        )
    }
}

impl TableDisplay for LikeToggle {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        field_table(
            options,
            vec![("Liked", self.liked.to_string()), ("Likes", self.likes.to_string())],
        )
    }

    fn to_compact(&self) -> String {
        format!("liked={} likes={}", self.liked, self.likes)
    }
}

impl TableDisplay for Comment {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let author = self.author.as_ref().map(|author| author.name.clone()).unwrap_or_default();
        field_table(
            options,
            vec![
                ("ID", self.id.to_string()),
                ("Author", author),
                ("Content", self.content.clone()),
                ("Created", self.created_at.to_string()),
            ],
        )
    }

    fn to_compact(&self) -> String {
        format!("{} by {}: {}", self.id, self.user_id, preview(&self.content))
    }
}

impl TableDisplay for LoginOutcome {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        field_table(
            options,
            vec![
                ("User", format!("{} ({})", self.user.name, self.user.id)),
                ("Role", self.user.role.as_str().to_string()),
                ("Destination", self.destination.as_str().to_string()),
            ],
        )
    }

    fn to_compact(&self) -> String {
        format!("{} {}", self.user.id, self.destination.as_str())
    }
}
