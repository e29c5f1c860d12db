use hubrelay::core::RelayResult;
use hubrelay::di::GitHubProvider;
use hubrelay::github::{CommitEntry, RepoDetail};

/// A repository together with its latest commits
pub struct RepoOverview {
    pub detail: RepoDetail,
    pub commits: Vec<CommitEntry>,
}

pub async fn run(github: &dyn GitHubProvider, owner: &str, repo: &str) -> RelayResult<()> {
    let overview = fetch(github, owner, repo).await?;
    print!("{}", render(&overview));
    Ok(())
}

/// Fetch the repository, then its commits; a failed lookup skips the commits
pub async fn fetch(
    github: &dyn GitHubProvider,
    owner: &str,
    repo: &str,
) -> RelayResult<RepoOverview> {
    let what = format!("repository '{}/{}'", owner, repo);

    let detail: RepoDetail = github
        .get_repo(owner, repo)
        .await?
        .into_success(&what)?
        .parse()?;

    let commits: Vec<CommitEntry> = github
        .list_repo_commits(owner, repo)
        .await?
        .into_success(&format!("commits of {}", what))?
        .parse()?;

    Ok(RepoOverview { detail, commits })
}

/// Calendar date of an ISO-8601 timestamp
fn date_of(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

pub fn render(overview: &RepoOverview) -> String {
    let detail = &overview.detail;
    let mut out = format!("{}\n", detail.full_name);

    out.push_str(&format!(
        "  {}\n",
        detail
            .description
            .as_deref()
            .unwrap_or("No description available")
    ));
    out.push_str(&format!(
        "  ★ {} · forks {} · {}\n",
        detail.stargazers_count,
        detail.forks_count,
        detail.language.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!("  Created: {}", date_of(&detail.created_at)));
    if let Some(ref updated) = detail.updated_at {
        out.push_str(&format!(" · Last updated: {}", date_of(updated)));
    }
    out.push('\n');
    out.push_str(&format!("  {}\n", detail.html_url));

    out.push('\n');
    if overview.commits.is_empty() {
        out.push_str("No commits\n");
        return out;
    }

    out.push_str("Recent commits:\n");
    for commit in &overview.commits {
        out.push_str(&format!(
            "  {} {} ({})\n",
            commit.short_sha(),
            commit.headline(),
            commit.author_name()
        ));
    }
    out
}
