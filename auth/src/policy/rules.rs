use std::cmp::Reverse;

use http::Method;

use super::pattern::path_segments;
use super::pattern::PatternError;
use super::pattern::RoutePattern;
use crate::principal::Role;

/// What a caller needs to reach a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exposure {
    /// No token required
    Public,
    /// Any valid token
    Authenticated,
    /// A valid token holding at least one of these roles
    Roles(Vec<Role>),
}

/// One entry of the access table.
#[derive(Debug, Clone)]
pub struct RouteRule {
    pattern: RoutePattern,
    methods: Option<Vec<Method>>,
    exposure: Exposure,
}

impl RouteRule {
    pub fn new(pattern: &str, exposure: Exposure) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            methods: None,
            exposure,
        })
    }

    pub fn public(pattern: &str) -> Result<Self, PatternError> {
        Self::new(pattern, Exposure::Public)
    }

    pub fn authenticated(pattern: &str) -> Result<Self, PatternError> {
        Self::new(pattern, Exposure::Authenticated)
    }

    pub fn roles(pattern: &str, roles: &[Role]) -> Result<Self, PatternError> {
        Self::new(pattern, Exposure::Roles(roles.to_vec()))
    }

    /// Restrict the rule to the given methods. `GET` also covers `HEAD`.
    pub fn with_methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods = Some(methods.into_iter().collect());
        self
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn exposure(&self) -> &Exposure {
        &self.exposure
    }

    fn applies_to(&self, method: &Method, segments: &[&str]) -> bool {
        let method_matches = match &self.methods {
            None => true,
            Some(methods) => methods
                .iter()
                .any(|m| m == method || (*m == Method::GET && *method == Method::HEAD)),
        };

        method_matches && self.pattern.matches_segments(segments)
    }

    fn specificity(&self) -> (usize, bool, bool) {
        (
            self.pattern.literal_count(),
            !self.pattern.has_remainder(),
            self.methods.is_some(),
        )
    }
}

/// Static route table mapping `(method, path)` to an exposure level.
///
/// Rules are ordered once at construction, most specific first, so lookup is
/// a first-match scan. Unmatched routes require authentication.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    rules: Vec<RouteRule>,
    fallback: Exposure,
}

impl AccessPolicy {
    pub fn new(mut rules: Vec<RouteRule>) -> Self {
        // Stable sort keeps declaration order among equally specific rules
        rules.sort_by_key(|rule| Reverse(rule.specificity()));

        Self {
            rules,
            fallback: Exposure::Authenticated,
        }
    }

    /// Resolve the exposure for a request.
    ///
    /// Paths with `.` or `..` segments skip the table and get the fallback.
    pub fn exposure(&self, method: &Method, path: &str) -> &Exposure {
        let segments: Vec<&str> = path_segments(path).collect();

        if segments.iter().any(|s| *s == "." || *s == "..") {
            return &self.fallback;
        }

        self.rules
            .iter()
            .find(|rule| rule.applies_to(method, &segments))
            .map(RouteRule::exposure)
            .unwrap_or(&self.fallback)
    }

    pub fn is_public(&self, method: &Method, path: &str) -> bool {
        *self.exposure(method, path) == Exposure::Public
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }
}
