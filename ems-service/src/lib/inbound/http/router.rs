use std::sync::Arc;
use std::time::Duration;

use auth::AccessPolicy;
use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::admins::get_current_admin;
use super::handlers::attendance::list_attendance;
use super::handlers::attendance::mark_attendance;
use super::handlers::authentication::login;
use super::handlers::authentication::register;
use super::handlers::departments::create_department;
use super::handlers::departments::delete_department;
use super::handlers::departments::get_department;
use super::handlers::departments::list_departments;
use super::handlers::departments::update_department;
use super::handlers::employees::create_employee;
use super::handlers::employees::delete_employee;
use super::handlers::employees::department_count;
use super::handlers::employees::get_employee;
use super::handlers::employees::list_employees;
use super::handlers::employees::position_count;
use super::handlers::employees::recent_hires;
use super::handlers::employees::salary_by_department;
use super::handlers::employees::salary_by_position;
use super::handlers::employees::update_employee;
use super::handlers::health::health;
use super::handlers::hrs::create_hr;
use super::handlers::hrs::delete_hr;
use super::handlers::hrs::get_hr;
use super::handlers::hrs::list_hr_employees;
use super::handlers::hrs::list_hrs;
use super::handlers::hrs::update_hr;
use super::handlers::leaves::list_leaves;
use super::handlers::leaves::request_leave;
use super::handlers::leaves::update_leave_status;
use super::handlers::recruitments::create_applicant;
use super::handlers::recruitments::list_applicants;
use super::handlers::recruitments::update_applicant_status;
use super::middleware::authenticate;
use super::middleware::stateless_session;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::account::service::AccountService;
use crate::domain::attendance::ports::AttendanceRepository;
use crate::domain::attendance::ports::AttendanceServicePort;
use crate::domain::attendance::service::AttendanceService;
use crate::domain::department::ports::DepartmentRepository;
use crate::domain::department::ports::DepartmentServicePort;
use crate::domain::department::service::DepartmentService;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::employee::service::EmployeeService;
use crate::domain::hr::ports::HrRepository;
use crate::domain::hr::ports::HrServicePort;
use crate::domain::hr::service::HrService;
use crate::domain::leave::ports::LeaveRepository;
use crate::domain::leave::ports::LeaveServicePort;
use crate::domain::leave::service::LeaveService;
use crate::domain::recruitment::ports::ApplicantRepository;
use crate::domain::recruitment::ports::RecruitmentServicePort;
use crate::domain::recruitment::service::RecruitmentService;

/// Immutable security configuration shared by every request.
#[derive(Clone)]
pub struct SecurityState {
    pub authenticator: Arc<Authenticator>,
    pub access_policy: Arc<AccessPolicy>,
}

/// One backend's worth of repositories, shared by the services built on top.
pub struct Repositories<AR, DR, ER, HR, LR, TR, RR> {
    pub accounts: Arc<AR>,
    pub departments: Arc<DR>,
    pub employees: Arc<ER>,
    pub hrs: Arc<HR>,
    pub leaves: Arc<LR>,
    pub attendance: Arc<TR>,
    pub applicants: Arc<RR>,
}

/// Application state for HTTP handlers.
///
/// Services are held behind their ports so the same router serves both the
/// PostgreSQL and the in-memory backends.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServicePort>,
    pub department_service: Arc<dyn DepartmentServicePort>,
    pub employee_service: Arc<dyn EmployeeServicePort>,
    pub hr_service: Arc<dyn HrServicePort>,
    pub leave_service: Arc<dyn LeaveServicePort>,
    pub attendance_service: Arc<dyn AttendanceServicePort>,
    pub recruitment_service: Arc<dyn RecruitmentServicePort>,
    pub security: SecurityState,
}

impl AppState {
    /// Wire the domain services on top of one set of repositories.
    pub fn from_repositories<AR, DR, ER, HR, LR, TR, RR>(
        repositories: Repositories<AR, DR, ER, HR, LR, TR, RR>,
        security: SecurityState,
    ) -> Self
    where
        AR: AccountRepository,
        DR: DepartmentRepository,
        ER: EmployeeRepository,
        HR: HrRepository,
        LR: LeaveRepository,
        TR: AttendanceRepository,
        RR: ApplicantRepository,
    {
        let Repositories {
            accounts,
            departments,
            employees,
            hrs,
            leaves,
            attendance,
            applicants,
        } = repositories;
        let authenticator = Arc::clone(&security.authenticator);

        Self {
            account_service: Arc::new(AccountService::new(
                Arc::clone(&accounts),
                Arc::clone(&authenticator),
            )),
            department_service: Arc::new(DepartmentService::new(Arc::clone(&departments))),
            employee_service: Arc::new(EmployeeService::new(
                Arc::clone(&employees),
                departments,
            )),
            hr_service: Arc::new(HrService::new(hrs, accounts, authenticator)),
            leave_service: Arc::new(LeaveService::new(leaves, Arc::clone(&employees))),
            attendance_service: Arc::new(AttendanceService::new(attendance, employees)),
            recruitment_service: Arc::new(RecruitmentService::new(applicants)),
            security,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register));

    let admin_routes = Router::new().route("/api/admins/me", get(get_current_admin));

    let department_routes = Router::new()
        .route(
            "/api/departments",
            get(list_departments).post(create_department),
        )
        .route(
            "/api/departments/:department_id",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        );

    let employee_routes = Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route("/api/employees/recent", get(recent_hires))
        .route("/api/employees/department-count", get(department_count))
        .route("/api/employees/position-count", get(position_count))
        .route("/api/employees/salary-department", get(salary_by_department))
        .route("/api/employees/salary-position", get(salary_by_position))
        .route(
            "/api/employees/:employee_id",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        );

    let hr_routes = Router::new()
        .route("/api/hrs", get(list_hrs).post(create_hr))
        .route("/api/hrs/employees", get(list_hr_employees))
        .route("/api/hrs/leaves", get(list_leaves).post(request_leave))
        .route("/api/hrs/leaves/:leave_id/status", put(update_leave_status))
        .route("/api/hrs/attendance", get(list_attendance))
        .route("/api/hrs/attendance/:employee_id", post(mark_attendance))
        .route(
            "/api/hrs/recruitments",
            get(list_applicants).post(create_applicant),
        )
        .route(
            "/api/hrs/recruitments/:applicant_id/status",
            put(update_applicant_status),
        )
        .route(
            "/api/hrs/:hr_id",
            get(get_hr).put(update_hr).delete(delete_hr),
        );

    // Headers are left out of the span so bearer tokens never reach the logs
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/health", get(health))
        .merge(auth_routes)
        .merge(admin_routes)
        .merge(department_routes)
        .merge(employee_routes)
        .merge(hr_routes)
        .layer(middleware::from_fn_with_state(
            state.security.clone(),
            authenticate,
        ))
        .layer(middleware::from_fn(stateless_session))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
