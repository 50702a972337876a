//! Credential record.
//!
//! One named secret with the identity fields a provider login needs. The
//! serde field names match the original store format (`type`, `username`,
//! `password`, `extra`) so existing store files stay readable.

use serde::{Deserialize, Serialize};

/// What kind of account a credential unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Cloud access key pair (access key ID + secret access key + region).
    Aws,
    /// Version-control account (username + password/token).
    Git,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Aws => "aws",
            Kind::Git => "git",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single stored credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(rename = "type")]
    pub kind: Kind,
    /// Unique display name, e.g. "aws-project1" or "github-self".
    pub name: String,
    /// Access key ID for aws, username for git.
    #[serde(rename = "username")]
    pub principal: String,
    /// Secret access key for aws, password/token for git. Never shown back
    /// to the user after entry.
    #[serde(rename = "password")]
    pub secret: String,
    /// Region for aws; unused for git. Empty means absent.
    #[serde(rename = "extra", default)]
    pub auxiliary: String,
}

impl Credential {
    /// One-line label for menus and list output, e.g. `aws-project1 (aws)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
