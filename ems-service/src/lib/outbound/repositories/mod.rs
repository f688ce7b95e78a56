pub mod account;
pub mod applicant;
pub mod attendance;
pub mod department;
pub mod employee;
pub mod hr;
pub mod leave;
pub mod memory;

pub use account::PostgresAccountRepository;
pub use applicant::PostgresApplicantRepository;
pub use attendance::PostgresAttendanceRepository;
pub use department::PostgresDepartmentRepository;
pub use employee::PostgresEmployeeRepository;
pub use hr::PostgresHrRepository;
pub use leave::PostgresLeaveRepository;
pub use memory::InMemoryAccountRepository;
pub use memory::InMemoryApplicantRepository;
pub use memory::InMemoryAttendanceRepository;
pub use memory::InMemoryDepartmentRepository;
pub use memory::InMemoryEmployeeRepository;
pub use memory::InMemoryHrRepository;
pub use memory::InMemoryLeaveRepository;
