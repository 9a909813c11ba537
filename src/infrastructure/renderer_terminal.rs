use std::io::{Stdout, Write};

use anyhow::Context;
use tokio::sync::Mutex;

use crate::{PageMarker, PaginationState, SearchRenderer, SearchState, StdResult, format_count};

const DISABLED_ARROW: &str = "·";

fn format_u64_count(count: u64) -> String {
    format_count(i64::try_from(count).unwrap_or(i64::MAX))
}

fn pagination_line(pagination: &PaginationState) -> String {
    let previous = if pagination.has_previous() {
        "<"
    } else {
        DISABLED_ARROW
    };
    let next = if pagination.has_next() { ">" } else { DISABLED_ARROW };
    let markers = pagination
        .markers()
        .iter()
        .map(PageMarker::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    format!("{previous} {markers} {next}")
}

/// Lays out the lines displayed for a search state.
pub fn render_lines(state: &SearchState) -> Vec<String> {
    if state.is_idle() {
        return vec!["Start with searching a GitHub user".to_string()];
    }
    let searching = format!("Searching {}...", state.query());
    let Some(user) = state.user() else {
        if state.is_fetching() {
            return vec![searching];
        }
        return vec![format!("No results for {}", state.query())];
    };

    let mut lines = vec![
        user.display_name().unwrap_or(user.login().as_str()).to_string(),
        format!("@{}", user.login()),
        user.avatar_url().to_string(),
        format!(
            "{} Followers · {} Following",
            format_u64_count(user.follower_count()),
            format_u64_count(user.following_count())
        ),
    ];
    if let Some(repositories) = state.repositories() {
        lines.push(String::new());
        lines.push(format!("Repositories({})", user.public_repo_count()));
        for repository in repositories {
            lines.push(format!("  {}", repository.name()));
            if let Some(description) = repository.description() {
                lines.push(format!("    {description}"));
            }
            lines.push(format!("    {}", repository.html_url()));
        }
        lines.push(pagination_line(state.pagination()));
    }
    if state.is_fetching() {
        lines.push(searching);
    }

    lines
}

/// A renderer writing the search state as plain text.
pub struct TerminalRenderer<W: Write + Send> {
    output: Mutex<W>,
}

impl<W: Write + Send> TerminalRenderer<W> {
    /// Creates a new `TerminalRenderer` writing to the given output.
    pub fn new(output: W) -> Self {
        Self {
            output: Mutex::new(output),
        }
    }

    /// Consumes the renderer, returning its output.
    pub fn into_inner(self) -> W {
        self.output.into_inner()
    }
}

impl TerminalRenderer<Stdout> {
    /// Creates a new `TerminalRenderer` writing to the standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

#[async_trait::async_trait]
impl<W: Write + Send> SearchRenderer for TerminalRenderer<W> {
    async fn render(&self, state: &SearchState) -> StdResult<()> {
        let mut output = self.output.lock().await;
        writeln!(output).with_context(|| "Failed to write search results")?;
        for line in render_lines(state) {
            writeln!(output, "{line}").with_context(|| "Failed to write search results")?;
        }
        output
            .flush()
            .with_context(|| "Failed to flush search results")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{RepositorySummary, UserProfile};

    use super::*;

    fn searched_state() -> SearchState {
        SearchState {
            query: "octocat".to_string(),
            pagination: PaginationState::new(1, 10),
            user: Some(UserProfile::new(
                "octocat",
                "https://avatars.githubusercontent.com/u/583231?v=4",
                Some("The Octocat"),
                17_004,
                9,
                38,
            )),
            repositories: Some(vec![
                RepositorySummary::new(
                    1,
                    "Hello-World",
                    Some("My first repository on GitHub!"),
                    "https://github.com/octocat/Hello-World",
                ),
                RepositorySummary::new(
                    2,
                    "Spoon-Knife",
                    None,
                    "https://github.com/octocat/Spoon-Knife",
                ),
            ]),
            is_fetching: false,
        }
    }

    #[test]
    fn render_idle_state() {
        assert_eq!(
            vec!["Start with searching a GitHub user".to_string()],
            render_lines(&SearchState::default())
        );
    }

    #[test]
    fn render_fetching_state_keeps_current_results() {
        let state = SearchState {
            is_fetching: true,
            ..searched_state()
        };

        let lines = render_lines(&state);

        assert_eq!(
            [render_lines(&searched_state()), vec!["Searching octocat...".to_string()]].concat(),
            lines
        );
    }

    #[test]
    fn render_fetching_state_without_user() {
        let state = SearchState {
            query: "octocat".to_string(),
            is_fetching: true,
            ..SearchState::default()
        };

        assert_eq!(vec!["Searching octocat...".to_string()], render_lines(&state));
    }

    #[test]
    fn render_no_results() {
        let state = SearchState {
            query: "nobody".to_string(),
            ..SearchState::default()
        };

        assert_eq!(vec!["No results for nobody".to_string()], render_lines(&state));
    }

    #[test]
    fn render_user_and_repositories() {
        assert_eq!(
            vec![
                "The Octocat",
                "@octocat",
                "https://avatars.githubusercontent.com/u/583231?v=4",
                "17.0k Followers · 9 Following",
                "",
                "Repositories(38)",
                "  Hello-World",
                "    My first repository on GitHub!",
                "    https://github.com/octocat/Hello-World",
                "  Spoon-Knife",
                "    https://github.com/octocat/Spoon-Knife",
                "· [1] 2 3 ... 10 >",
            ],
            render_lines(&searched_state())
        );
    }

    #[test]
    fn render_user_without_repositories() {
        let state = SearchState {
            repositories: None,
            ..searched_state()
        };

        let lines = render_lines(&state);

        assert_eq!(4, lines.len());
        assert!(!lines.iter().any(|line| line.starts_with("Repositories")));
    }

    #[test]
    fn render_last_page_disables_next_arrow() {
        assert_eq!("< 1 ... 8 9 [10] ·", pagination_line(&PaginationState::new(10, 10)));
        assert_eq!("· [1] ·", pagination_line(&PaginationState::new(1, 1)));
    }

    #[tokio::test]
    async fn render_writes_to_output() {
        let renderer = TerminalRenderer::new(Vec::new());

        renderer.render(&SearchState::default()).await.unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!("\nStart with searching a GitHub user\n", output);
    }
}
