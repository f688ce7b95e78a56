pub mod account;
pub mod attendance;
pub mod department;
pub mod employee;
pub mod hr;
pub mod leave;
pub mod recruitment;
pub mod shared;
