use std::fmt;

use crate::domain::account::models::AccountId;
use crate::domain::account::models::Password;
use crate::domain::shared::EmailAddress;
use crate::domain::shared::PersonName;

/// HR staff member.
///
/// Every record owns an `HR` login account whose username is the email.
#[derive(Debug, Clone, PartialEq)]
pub struct Hr {
    pub id: HrId,
    pub name: PersonName,
    pub email: EmailAddress,
    pub account_id: AccountId,
}

/// HR unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HrId(pub i64);

impl fmt::Display for HrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// HR record as handed to the repository before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewHr {
    pub name: PersonName,
    pub email: EmailAddress,
    pub account_id: AccountId,
}

#[derive(Debug)]
pub struct CreateHrCommand {
    pub name: PersonName,
    pub email: EmailAddress,
    pub password: Password,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Default)]
pub struct UpdateHrCommand {
    pub name: Option<PersonName>,
    pub email: Option<EmailAddress>,
    pub password: Option<Password>,
}
