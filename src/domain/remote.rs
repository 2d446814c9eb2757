use std::fmt;

use crate::error::{PrComposeError, Result};

/// Web base URL of a hosted repository, always `https://<host>/<org>/<repo>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoUrl {
    pub host: String,
    pub path: String,
}

impl RepoUrl {
    /// Normalise a remote URL into its web form.
    ///
    /// Supports:
    /// - `git@host:org/repo.git`
    /// - `ssh://[user@]host[:port]/org/repo.git`
    /// - `https://[user@]host/org/repo.git` (and `http://`)
    ///
    /// The trailing `.git` and `/` are optional.
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();
        let unrecognized = || PrComposeError::remote(format!("Unrecognized remote URL: {}", url));

        let (host, path) = if let Some(rest) = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .or_else(|| url.strip_prefix("ssh://"))
        {
            let (authority, path) = rest.split_once('/').ok_or_else(unrecognized)?;
            let host = authority.rsplit('@').next().unwrap_or(authority);
            // ssh://host:2222/ carries a port, https://host:8443/ too
            let host = host.split(':').next().unwrap_or(host);
            (host, path)
        } else if url.contains("://") {
            // git://, file:// and friends have no web counterpart
            return Err(unrecognized());
        } else if let Some((user_host, path)) = url.split_once(':') {
            // scp-like syntax: [user@]host:org/repo
            if user_host.contains('/') {
                return Err(unrecognized());
            }
            let host = user_host.rsplit('@').next().unwrap_or(user_host);
            (host, path)
        } else {
            return Err(unrecognized());
        };

        let path = path.trim_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path).trim_end_matches('/');

        let segments: Vec<&str> = path.split('/').collect();
        if host.is_empty() || segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
            return Err(unrecognized());
        }

        Ok(RepoUrl {
            host: host.to_string(),
            path: path.to_string(),
        })
    }

    /// Link to a single commit.
    pub fn commit_url(&self, hash: &str) -> String {
        format!("{}/commit/{}", self, hash)
    }
}

impl fmt::Display for RepoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "https://{}/{}", self.host, self.path)
    }
}
