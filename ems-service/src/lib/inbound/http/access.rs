use auth::AccessPolicy;
use auth::PatternError;
use auth::Role;
use auth::RouteRule;
use http::Method;

const STAFF: &[Role] = &[Role::Admin, Role::Hr];

/// Built-in route table.
///
/// Employee and department data is readable by anyone; changing it needs an
/// `ADMIN` or `HR` token. HR records are readable with any token and
/// writable by `ADMIN` only. The leave, attendance and recruitment desks
/// under `/api/hrs` are staff-only for every method.
pub fn default_rules() -> Result<Vec<RouteRule>, PatternError> {
    Ok(vec![
        RouteRule::public("/api/auth/login")?.with_methods([Method::POST]),
        RouteRule::public("/api/auth/register")?.with_methods([Method::POST]),
        RouteRule::public("/api/employees/**")?.with_methods([Method::GET]),
        RouteRule::public("/api/departments/**")?.with_methods([Method::GET]),
        RouteRule::roles("/api/employees/**", STAFF)?,
        RouteRule::roles("/api/departments/**", STAFF)?,
        RouteRule::roles("/api/hrs/leaves/**", STAFF)?,
        RouteRule::roles("/api/hrs/attendance/**", STAFF)?,
        RouteRule::roles("/api/hrs/recruitments/**", STAFF)?,
        RouteRule::authenticated("/api/hrs/**")?.with_methods([Method::GET]),
        RouteRule::roles("/api/hrs/**", &[Role::Admin])?,
        RouteRule::roles("/api/admins/**", &[Role::Admin])?,
        RouteRule::public("/health")?.with_methods([Method::GET]),
    ])
}

pub fn default_access_policy() -> Result<AccessPolicy, PatternError> {
    default_rules().map(AccessPolicy::new)
}

#[cfg(test)]
mod tests {
    use auth::Exposure;

    use super::*;

    fn policy() -> AccessPolicy {
        default_access_policy().expect("Default rules must parse")
    }

    #[test]
    fn test_login_and_register_are_public_for_post_only() {
        let policy = policy();

        assert!(policy.is_public(&Method::POST, "/api/auth/login"));
        assert!(policy.is_public(&Method::POST, "/api/auth/register"));
        assert_eq!(
            policy.exposure(&Method::GET, "/api/auth/login"),
            &Exposure::Authenticated
        );
    }

    #[test]
    fn test_employee_reads_are_public() {
        let policy = policy();

        assert!(policy.is_public(&Method::GET, "/api/employees"));
        assert!(policy.is_public(&Method::GET, "/api/employees/12"));
        assert!(policy.is_public(&Method::GET, "/api/employees/recent"));
        assert!(policy.is_public(&Method::HEAD, "/api/departments/"));
    }

    #[test]
    fn test_employee_writes_need_staff_role() {
        let policy = policy();
        let staff = Exposure::Roles(vec![Role::Admin, Role::Hr]);

        assert_eq!(policy.exposure(&Method::POST, "/api/employees"), &staff);
        assert_eq!(policy.exposure(&Method::DELETE, "/api/employees/3"), &staff);
        assert_eq!(policy.exposure(&Method::PUT, "/api/departments/3"), &staff);
    }

    #[test]
    fn test_hr_routes() {
        let policy = policy();

        assert_eq!(
            policy.exposure(&Method::GET, "/api/hrs"),
            &Exposure::Authenticated
        );
        assert_eq!(
            policy.exposure(&Method::GET, "/api/hrs/employees"),
            &Exposure::Authenticated
        );
        assert_eq!(
            policy.exposure(&Method::POST, "/api/hrs"),
            &Exposure::Roles(vec![Role::Admin])
        );
    }

    #[test]
    fn test_hr_desks_need_staff_role_for_every_method() {
        let policy = policy();
        let staff = Exposure::Roles(vec![Role::Admin, Role::Hr]);

        assert_eq!(policy.exposure(&Method::GET, "/api/hrs/leaves"), &staff);
        assert_eq!(
            policy.exposure(&Method::PUT, "/api/hrs/leaves/4/status"),
            &staff
        );
        assert_eq!(policy.exposure(&Method::GET, "/api/hrs/attendance"), &staff);
        assert_eq!(
            policy.exposure(&Method::POST, "/api/hrs/attendance/9"),
            &staff
        );
        assert_eq!(
            policy.exposure(&Method::PUT, "/api/hrs/recruitments/2/status"),
            &staff
        );
    }

    #[test]
    fn test_admin_routes_and_fallback() {
        let policy = policy();

        assert_eq!(
            policy.exposure(&Method::GET, "/api/admins/me"),
            &Exposure::Roles(vec![Role::Admin])
        );
        assert_eq!(
            policy.exposure(&Method::GET, "/api/unknown"),
            &Exposure::Authenticated
        );
        assert_eq!(
            policy.exposure(&Method::GET, "/api/employees/../hrs"),
            &Exposure::Authenticated
        );
    }
}
