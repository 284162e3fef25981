use crate::commands::{feed, friends, posts, users};

#[derive(Clone, Copy)]
pub struct ExampleGroup {
    pub title: &'static str,
    pub commands: &'static [&'static str],
}

#[derive(Clone, Copy)]
pub struct CommandExample {
    pub name: &'static str,
    pub groups: &'static [ExampleGroup],
}

pub fn command_examples() -> &'static [CommandExample] {
    &[
        CommandExample {
            name: "users",
            groups: users::EXAMPLES,
        },
        CommandExample {
            name: "login",
            groups: users::LOGIN_EXAMPLES,
        },
        CommandExample {
            name: "friends",
            groups: friends::EXAMPLES,
        },
        CommandExample {
            name: "feed",
            groups: feed::FEED_EXAMPLES,
        },
        CommandExample {
            name: "posts",
            groups: posts::EXAMPLES,
        },
        CommandExample {
            name: "profile",
            groups: feed::PROFILE_EXAMPLES,
        },
    ]
}
