pub mod pattern;
pub mod rules;

pub use pattern::PatternError;
pub use pattern::RoutePattern;
pub use rules::AccessPolicy;
pub use rules::Exposure;
pub use rules::RouteRule;
