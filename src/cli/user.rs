use hubrelay::core::RelayResult;
use hubrelay::di::GitHubProvider;
use hubrelay::github::{RepoSummary, UserProfile};

/// A user's profile together with their most recently updated repositories
pub struct UserOverview {
    pub profile: UserProfile,
    pub repos: Vec<RepoSummary>,
}

pub async fn run(github: &dyn GitHubProvider, username: &str) -> RelayResult<()> {
    let overview = fetch(github, username).await?;
    print!("{}", render(&overview));
    Ok(())
}

/// Fetch the profile, then the repositories.
///
/// The repository listing is only requested once the profile lookup has
/// succeeded.
pub async fn fetch(github: &dyn GitHubProvider, username: &str) -> RelayResult<UserOverview> {
    let what = format!("user '{}'", username);

    let profile: UserProfile = github
        .get_user(username)
        .await?
        .into_success(&what)?
        .parse()?;

    let repos: Vec<RepoSummary> = github
        .list_user_repos(username)
        .await?
        .into_success(&format!("repositories of {}", what))?
        .parse()?;

    Ok(UserOverview { profile, repos })
}

pub fn render(overview: &UserOverview) -> String {
    let profile = &overview.profile;
    let mut out = String::new();

    match profile.name {
        Some(ref name) => out.push_str(&format!("{} (@{})\n", name, profile.login)),
        None => out.push_str(&format!("@{}\n", profile.login)),
    }
    if let Some(ref bio) = profile.bio {
        out.push_str(&format!("  {}\n", bio));
    }
    out.push_str(&format!(
        "  {} repos · {} followers · {} following\n",
        profile.public_repos, profile.followers, profile.following
    ));
    out.push_str(&format!("  {}\n", profile.html_url));

    out.push('\n');
    if overview.repos.is_empty() {
        out.push_str("No public repositories\n");
        return out;
    }

    out.push_str("Repositories:\n");
    for repo in &overview.repos {
        out.push_str(&format!(
            "  {:<32} ★ {:<6} {}\n",
            repo.name,
            repo.stargazers_count,
            repo.language.as_deref().unwrap_or("-")
        ));
        out.push_str(&format!(
            "    {}\n",
            repo.description
                .as_deref()
                .unwrap_or("No description available")
        ));
    }
    out
}
