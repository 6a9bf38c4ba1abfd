//! # Repository Types
//!
//! The bookmarked repository summary and its stored string form.

use serde::{Deserialize, Deserializer, Serialize};

/// Owner of a repository as returned by the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Account login (display name).
    pub login: String,
    /// Avatar image URL.
    pub avatar_url: String,
}

/// A bookmarked repository.
///
/// Field names follow the GitHub payload so the API response can be
/// deserialized directly and the stored list keeps the same shape.
/// Extra fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// `owner/name`, used as display key and navigation target.
    pub full_name: String,
    /// Repository description, empty when the repository has none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Repository owner.
    pub owner: Owner,
}

impl RepositorySummary {
    /// Splits `full_name` into `(owner, name)`.
    ///
    /// Returns `None` when the full name has no `/` separator.
    #[must_use]
    pub fn owner_and_name(&self) -> Option<(&str, &str)> {
        self.full_name.split_once('/')
    }
}

/// GitHub sends `null` for repositories without a description.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serializes a repository list into its stored string form.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_repositories(repositories: &[RepositorySummary]) -> serde_json::Result<String> {
    serde_json::to_string(repositories)
}

/// Parses a stored string back into a repository list.
///
/// Every entry is validated against the [`RepositorySummary`] schema;
/// any missing required field rejects the whole value.
///
/// # Errors
///
/// Returns an error if the value is not a JSON array of repository summaries.
pub fn decode_repositories(value: &str) -> serde_json::Result<Vec<RepositorySummary>> {
    serde_json::from_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_github_payload_ignores_extra_fields() {
        let payload = serde_json::json!({
            "id": 10270250,
            "full_name": "facebook/react",
            "description": "A JS library",
            "stargazers_count": 200000,
            "owner": {
                "login": "facebook",
                "id": 69631,
                "avatar_url": "http://x/a.png"
            }
        });

        let repo: RepositorySummary = serde_json::from_value(payload).unwrap();

        assert_eq!(repo.full_name, "facebook/react");
        assert_eq!(repo.description, "A JS library");
        assert_eq!(repo.owner.login, "facebook");
        assert_eq!(repo.owner.avatar_url, "http://x/a.png");
    }

    #[test]
    fn test_null_description_reads_as_empty() {
        let payload = serde_json::json!({
            "full_name": "octocat/empty",
            "description": null,
            "owner": { "login": "octocat", "avatar_url": "http://x/o.png" }
        });

        let repo: RepositorySummary = serde_json::from_value(payload).unwrap();
        assert_eq!(repo.description, "");
    }

    #[test]
    fn test_decode_rejects_entry_missing_owner() {
        let stored = r#"[{"full_name":"a/b","description":""}]"#;
        assert!(decode_repositories(stored).is_err());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(decode_repositories(r#"{"full_name":"a/b"}"#).is_err());
        assert!(decode_repositories("not json").is_err());
    }

    #[test]
    fn test_encode_uses_github_field_names() {
        let repo = RepositorySummary {
            full_name: "rust-lang/rust".to_string(),
            description: String::new(),
            owner: Owner {
                login: "rust-lang".to_string(),
                avatar_url: "http://x/r.png".to_string(),
            },
        };

        let encoded = encode_repositories(&[repo]).unwrap();
        assert!(encoded.contains("\"full_name\":\"rust-lang/rust\""));
        assert!(encoded.contains("\"avatar_url\":\"http://x/r.png\""));
    }

    #[test]
    fn test_owner_and_name() {
        let repo = RepositorySummary {
            full_name: "facebook/react".to_string(),
            description: String::new(),
            owner: Owner {
                login: "facebook".to_string(),
                avatar_url: String::new(),
            },
        };
        assert_eq!(repo.owner_and_name(), Some(("facebook", "react")));
    }
}
