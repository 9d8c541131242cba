/// Core error type for the news tools.
///
/// Each variant displays as its bare message, since that text is embedded
/// verbatim in the error result returned to the tool host.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Tool arguments did not match the declared input schema.
    #[error("{0}")]
    Validation(String),

    /// The upstream API answered, but not with the data we asked for.
    #[error("{0}")]
    Upstream(String),

    /// The HTTP request failed or the body could not be decoded.
    #[error("{0}")]
    Transport(String),
}

impl Error {
    /// The message to show the caller, with a fallback for faults that carry
    /// no description.
    #[must_use]
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            "Unknown error".to_string()
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_message() {
        let err = Error::Upstream("Article not found".to_string());
        assert_eq!(err.to_string(), "Article not found");
    }

    #[test]
    fn empty_message_falls_back() {
        assert_eq!(Error::Transport(String::new()).message(), "Unknown error");
        assert_eq!(Error::Transport("timed out".into()).message(), "timed out");
    }
}
