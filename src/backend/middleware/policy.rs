//! Access Policy
//!
//! A table of `(path pattern, access)` rules evaluated top to bottom; the
//! first matching rule decides, and a path no rule matches gets the policy's
//! fallback.
//!
//! # Patterns
//!
//! - `/login` - exactly this path
//! - `/static/**` - `/static` and everything below it
//! - `/**` - every path
//!
//! # Standard Policy
//!
//! | pattern     | access        |
//! |-------------|---------------|
//! | `/`         | PermitAll     |
//! | `/register` | PermitAll     |
//! | `/login`    | PermitAll     |
//! | `/logout`   | PermitAll     |
//! | anything    | Authenticated |

/// What a request needs in order to proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone may proceed
    PermitAll,
    /// Only requests with a valid session may proceed
    Authenticated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    Exact(String),
    Prefix(String),
    Any,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        if pattern == "/**" {
            Self::Any
        } else if let Some(prefix) = pattern.strip_suffix("/**") {
            Self::Prefix(prefix.to_string())
        } else {
            Self::Exact(pattern.to_string())
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => path == expected,
            Self::Prefix(prefix) => match path.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            },
            Self::Any => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRule {
    pub pattern: PathPattern,
    pub access: Access,
}

#[derive(Debug, Clone)]
pub struct AccessPolicy {
    rules: Vec<AccessRule>,
    fallback: Access,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl AccessPolicy {
    /// Empty policy; every path gets `fallback`
    pub fn new(fallback: Access) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Registration, login, logout and the welcome page are public; the
    /// rest needs a session
    pub fn standard() -> Self {
        Self::new(Access::Authenticated)
            .permit_all(&["/", "/register", "/login", "/logout"])
    }

    /// Append a rule
    pub fn rule(mut self, pattern: &str, access: Access) -> Self {
        self.rules.push(AccessRule {
            pattern: PathPattern::parse(pattern),
            access,
        });
        self
    }

    /// Append a `PermitAll` rule for each pattern
    pub fn permit_all(self, patterns: &[&str]) -> Self {
        patterns
            .iter()
            .fold(self, |policy, pattern| policy.rule(pattern, Access::PermitAll))
    }

    /// Append an `Authenticated` rule for each pattern
    pub fn authenticated(self, patterns: &[&str]) -> Self {
        patterns
            .iter()
            .fold(self, |policy, pattern| policy.rule(pattern, Access::Authenticated))
    }

    pub fn rules(&self) -> &[AccessRule] {
        &self.rules
    }

    /// Access required for `path`
    pub fn access_for(&self, path: &str) -> Access {
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(path))
            .map(|rule| rule.access)
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_parse() {
        assert_eq!(PathPattern::parse("/login"), PathPattern::Exact("/login".into()));
        assert_eq!(PathPattern::parse("/static/**"), PathPattern::Prefix("/static".into()));
        assert_eq!(PathPattern::parse("/**"), PathPattern::Any);
    }

    #[test]
    fn test_prefix_respects_segments() {
        let pattern = PathPattern::parse("/static/**");
        assert!(pattern.matches("/static"));
        assert!(pattern.matches("/static/app.css"));
        assert!(!pattern.matches("/staticfiles"));
        assert!(!pattern.matches("/"));
    }

    #[test]
    fn test_standard_policy() {
        let policy = AccessPolicy::standard();
        assert_eq!(policy.access_for("/"), Access::PermitAll);
        assert_eq!(policy.access_for("/register"), Access::PermitAll);
        assert_eq!(policy.access_for("/login"), Access::PermitAll);
        assert_eq!(policy.access_for("/logout"), Access::PermitAll);
        assert_eq!(policy.access_for("/me"), Access::Authenticated);
        assert_eq!(policy.access_for("/register/extra"), Access::Authenticated);
        assert_eq!(policy.access_for("/anything/else"), Access::Authenticated);
    }

    #[test]
    fn test_first_match_wins() {
        let policy = AccessPolicy::new(Access::PermitAll)
            .authenticated(&["/admin/public"])
            .permit_all(&["/admin/**"])
            .authenticated(&["/admin/**"]);
        assert_eq!(policy.access_for("/admin/public"), Access::Authenticated);
        assert_eq!(policy.access_for("/admin/other"), Access::PermitAll);
        assert_eq!(policy.access_for("/elsewhere"), Access::PermitAll);
    }

    #[test]
    fn test_catch_all_rule() {
        let policy = AccessPolicy::new(Access::Authenticated).permit_all(&["/**"]);
        assert_eq!(policy.access_for("/deep/path"), Access::PermitAll);
        assert_eq!(policy.rules().len(), 1);
    }
}
