//! Headcount and salary aggregates over the employee list.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::domain::department::models::Department;
use crate::domain::department::models::DepartmentId;
use crate::domain::employee::models::Employee;

pub const RECENT_HIRES_LIMIT: usize = 5;
pub const UNASSIGNED_DEPARTMENT: &str = "Unassigned";
pub const UNSPECIFIED_POSITION: &str = "Unspecified";

/// Most recent hires first; employees without a hire date come last.
pub fn recent_hires(mut employees: Vec<Employee>, limit: usize) -> Vec<Employee> {
    employees.sort_by_key(|employee| Reverse((employee.hire_date, employee.id)));
    employees.truncate(limit);
    employees
}

/// Resolves department ids to names for grouping.
pub struct DepartmentNames(HashMap<DepartmentId, String>);

impl DepartmentNames {
    pub fn new(departments: &[Department]) -> Self {
        Self(
            departments
                .iter()
                .map(|d| (d.id, d.name.as_str().to_string()))
                .collect(),
        )
    }

    /// Unknown or missing departments group under `Unassigned`.
    pub fn label(&self, employee: &Employee) -> String {
        employee
            .department_id
            .and_then(|id| self.0.get(&id).cloned())
            .unwrap_or_else(|| UNASSIGNED_DEPARTMENT.to_string())
    }
}

pub fn position_label(employee: &Employee) -> String {
    employee
        .position
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(UNSPECIFIED_POSITION)
        .to_string()
}

pub fn count_by<F>(employees: &[Employee], key: F) -> BTreeMap<String, u64>
where
    F: Fn(&Employee) -> String,
{
    let mut counts = BTreeMap::new();
    for employee in employees {
        *counts.entry(key(employee)).or_insert(0) += 1;
    }
    counts
}

/// Average salary per group. Employees without a salary are left out, and a
/// group with no salaries at all does not appear.
pub fn average_salary_by<F>(employees: &[Employee], key: F) -> BTreeMap<String, f64>
where
    F: Fn(&Employee) -> String,
{
    let mut totals: BTreeMap<String, (f64, u64)> = BTreeMap::new();
    for employee in employees {
        if let Some(salary) = employee.salary {
            let entry = totals.entry(key(employee)).or_insert((0.0, 0));
            entry.0 += salary;
            entry.1 += 1;
        }
    }

    totals
        .into_iter()
        .map(|(group, (total, count))| (group, total / count as f64))
        .collect()
}
