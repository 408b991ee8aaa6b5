//! Commit draft and push request

use serde::Serialize;

/// Commit metadata collected by the commit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitDraft {
    pub message: String,
    pub author_name: String,
    pub author_email: String,
}

impl CommitDraft {
    /// True when every field has at least one character
    ///
    /// Whitespace counts; the email is not checked for shape.
    pub fn can_submit(&self) -> bool {
        !self.message.is_empty() && !self.author_name.is_empty() && !self.author_email.is_empty()
    }

    /// Body of `POST /blob/...` for this draft and file content
    pub fn to_request(&self, content: impl Into<String>) -> CommitRequest {
        CommitRequest {
            message: self.message.clone(),
            name: self.author_name.clone(),
            email: self.author_email.clone(),
            content: content.into(),
        }
    }
}

/// JSON body sent to the backend to commit a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRequest {
    pub message: String,
    pub name: String,
    pub email: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(message: &str, name: &str, email: &str) -> CommitDraft {
        CommitDraft {
            message: message.to_string(),
            author_name: name.to_string(),
            author_email: email.to_string(),
        }
    }

    #[test]
    fn test_can_submit_complete() {
        assert!(draft("fix", "A", "a@b.c").can_submit());
    }

    #[test]
    fn test_can_submit_any_empty_field() {
        assert!(!draft("", "A", "a@b.c").can_submit());
        assert!(!draft("fix", "", "a@b.c").can_submit());
        assert!(!draft("fix", "A", "").can_submit());
        assert!(!CommitDraft::default().can_submit());
    }

    #[test]
    fn test_can_submit_whitespace_counts() {
        assert!(draft(" ", " ", " ").can_submit());
    }

    #[test]
    fn test_request_json_shape() {
        let request = draft("fix", "A", "a@b.c").to_request("body");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "fix",
                "name": "A",
                "email": "a@b.c",
                "content": "body",
            })
        );
    }
}
