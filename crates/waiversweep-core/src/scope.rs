//! Governance scope resolution for the deletion endpoint.

use serde::{Deserialize, Serialize};

/// Governance scope kinds found in waiver exports.
///
/// The deletion endpoint addresses waivers by an owner-type path
/// segment; [`ScopeKind::path_token`] yields that segment. The root
/// organization has no dedicated path shape on the server and collapses
/// onto `organization`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScopeKind {
    RootOrganization,
    Organization,
    Application,
    Repository,
    RepositoryContainer,
}

impl ScopeKind {
    /// Parse the export's scope vocabulary.
    ///
    /// Unknown kinds are `None`; callers treat that as a per-record
    /// deletion outcome, never a fatal condition. Every new scope kind
    /// the server grows must be mapped here before it can be deleted.
    pub fn parse(raw: &str) -> Option<ScopeKind> {
        match raw {
            "root_organization" => Some(ScopeKind::RootOrganization),
            "organization" => Some(ScopeKind::Organization),
            "application" => Some(ScopeKind::Application),
            "repository" => Some(ScopeKind::Repository),
            "repository_container" => Some(ScopeKind::RepositoryContainer),
            _ => None,
        }
    }

    /// Owner-type segment used in the deletion endpoint path.
    pub fn path_token(&self) -> &'static str {
        match self {
            ScopeKind::RootOrganization | ScopeKind::Organization => "organization",
            ScopeKind::Application => "application",
            ScopeKind::Repository => "repository",
            ScopeKind::RepositoryContainer => "repository_container",
        }
    }
}
