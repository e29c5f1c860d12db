//! Upstream endpoint paths, relative to the configured API base URL.

use urlencoding::encode;

/// Number of users returned by a search
pub const SEARCH_PAGE_SIZE: u32 = 5;
/// Number of repositories listed for a user
pub const USER_REPOS_PAGE_SIZE: u32 = 30;
/// Number of commits listed for a repository
pub const COMMITS_PAGE_SIZE: u32 = 5;

pub fn search_users_path(query: &str) -> String {
    format!(
        "/search/users?q={}&per_page={}",
        encode(query),
        SEARCH_PAGE_SIZE
    )
}

pub fn user_path(username: &str) -> String {
    format!("/users/{}", encode(username))
}

/// Most recently updated repositories first
pub fn user_repos_path(username: &str) -> String {
    format!(
        "/users/{}/repos?sort=updated&per_page={}",
        encode(username),
        USER_REPOS_PAGE_SIZE
    )
}

pub fn repo_path(owner: &str, repo: &str) -> String {
    format!("/repos/{}/{}", encode(owner), encode(repo))
}

pub fn repo_commits_path(owner: &str, repo: &str) -> String {
    format!(
        "/repos/{}/{}/commits?per_page={}",
        encode(owner),
        encode(repo),
        COMMITS_PAGE_SIZE
    )
}
