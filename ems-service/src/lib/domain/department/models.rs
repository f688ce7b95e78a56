use std::fmt;

use crate::domain::shared::PersonName;

/// Department entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: DepartmentId,
    pub name: PersonName,
}

/// Department unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DepartmentId(pub i64);

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create or rename a department
#[derive(Debug, Clone)]
pub struct DepartmentCommand {
    pub name: PersonName,
}
