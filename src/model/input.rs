use anyhow::{Context, anyhow};

use super::StdResult;

/// An event read from the user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A new text for the user name search field.
    Query(String),

    /// Jump to a page.
    Page(u32),

    /// Move to the next page.
    NextPage,

    /// Move to the previous page.
    PreviousPage,

    /// Stop searching.
    Quit,
}

impl InputEvent {
    /// Parses a line of input. Lines starting with `:` are commands, anything else is a query.
    pub fn parse(line: &str) -> StdResult<Self> {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            return Ok(Self::Query(trimmed.to_string()));
        };
        let mut words = command.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("quit" | "q"), None, None) => Ok(Self::Quit),
            (Some("next" | "n"), None, None) => Ok(Self::NextPage),
            (Some("prev" | "p"), None, None) => Ok(Self::PreviousPage),
            (Some("page"), Some(page), None) => {
                let page = page
                    .parse::<u32>()
                    .with_context(|| format!("Invalid page number: {page}"))?;
                if page == 0 {
                    return Err(anyhow!("Pages start at 1"));
                }

                Ok(Self::Page(page))
            }
            _ => Err(anyhow!("Unknown command: {trimmed}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_query() {
        assert_eq!(
            InputEvent::Query("octocat".to_string()),
            InputEvent::parse("  octocat \n").unwrap()
        );
        assert_eq!(
            InputEvent::Query(String::new()),
            InputEvent::parse("").unwrap()
        );
    }

    #[test]
    fn parse_commands() {
        assert_eq!(InputEvent::Quit, InputEvent::parse(":quit").unwrap());
        assert_eq!(InputEvent::NextPage, InputEvent::parse(":next").unwrap());
        assert_eq!(InputEvent::PreviousPage, InputEvent::parse(":p").unwrap());
        assert_eq!(InputEvent::Page(3), InputEvent::parse(":page 3").unwrap());
    }

    #[test]
    fn parse_invalid_commands() {
        InputEvent::parse(":page").expect_err("Missing page number should fail");
        InputEvent::parse(":page 0").expect_err("Page zero should fail");
        InputEvent::parse(":page two").expect_err("Non numeric page should fail");
        InputEvent::parse(":jump 2").expect_err("Unknown command should fail");
    }
}
