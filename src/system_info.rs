use git_version::git_version;

// include -modified if the working tree has uncommitted changes
const COMMIT: &str = git_version!(
    args = ["--abbrev=10", "--always", "--dirty=-modified"],
    fallback = "unknown"
);

fn version_label() -> String {
    let latest = option_env!("LATEST_TAG").unwrap_or("");
    let ahead = option_env!("COMMITS_AHEAD").unwrap_or("");
    match option_env!("RELEASE_VERSION") {
        Some(tag) if !tag.is_empty() => format!("release {tag}"),
        _ if !latest.is_empty() && !ahead.is_empty() => {
            format!("development branch {ahead} commits ahead of {latest}")
        }
        _ if !latest.is_empty() => format!("development branch ahead of {latest}"),
        _ => "development".to_string(),
    }
}

/// Build details plus a short summary of what the bot is serving.
pub fn get_system_info(menu_items: usize, currency: &str, sessions: usize) -> String {
    let profile = if cfg!(debug_assertions) {
        "Dev"
    } else {
        "Release"
    };

    format!(
        "{} - {}\nCommit: {}\n{} build\nMenu: {} items priced in {}\nActive sessions: {}",
        env!("CARGO_PKG_NAME"),
        version_label(),
        COMMIT,
        profile,
        menu_items,
        currency,
        sessions
    )
}
