use crate::domain::{User, UserCreate};
use crate::error::UserError;

/// In-memory store of user records.
///
/// Owns the ordered collection and the id counter exclusively; records enter
/// only through [`create`](Registry::create) and leave only when the process
/// exits. The registry itself is synchronous — serialization of concurrent
/// access is the job of the service actor that wraps it, which keeps this
/// type directly testable.
#[derive(Debug)]
pub struct Registry {
    users: Vec<User>,
    next_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns a copy of all records in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.users.clone()
    }

    /// Number of stored records.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Validates and stores a new user, returning the stored record.
    ///
    /// Validation order matches the wire contract: email presence, name
    /// presence, then email uniqueness (exact, case-sensitive match). A
    /// rejected create leaves the collection untouched.
    pub fn create(&mut self, params: UserCreate) -> Result<User, UserError> {
        if params.email.is_empty() {
            return Err(UserError::validation("email is required"));
        }
        if params.name.is_empty() {
            return Err(UserError::validation("name is required"));
        }
        if self.users.iter().any(|user| user.email == params.email) {
            return Err(UserError::validation("email already exists"));
        }

        let user = User {
            id: self.next_id,
            name: params.name,
            email: params.email,
        };
        self.next_id += 1;
        self.users.push(user.clone());
        Ok(user)
    }
}
