use hubrelay::core::{RelayError, RelayResult};
use hubrelay::di::GitHubProvider;
use hubrelay::github::SearchResults;

pub async fn run(github: &dyn GitHubProvider, query: &str) -> RelayResult<()> {
    let results = search(github, query).await?;
    print!("{}", render(query, &results));
    Ok(())
}

pub async fn search(github: &dyn GitHubProvider, query: &str) -> RelayResult<SearchResults> {
    if query.is_empty() {
        return Err(RelayError::InvalidInput(
            "Search query is required".to_string(),
        ));
    }

    github
        .search_users(query)
        .await?
        .into_success(&format!("search '{}'", query))?
        .parse()
}

pub fn render(query: &str, results: &SearchResults) -> String {
    if results.items.is_empty() {
        return format!("No users found for '{}'\n", query);
    }

    let mut out = format!(
        "Users matching '{}' ({} shown of {}):\n",
        query,
        results.items.len(),
        results.total_count
    );
    for user in &results.items {
        out.push_str(&format!("  {:<24} {}\n", user.login, user.html_url));
    }
    out
}
