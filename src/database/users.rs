//! Registered users and credential matching.

use parking_lot::RwLock;

use crate::config::CredentialScan;
use crate::database::models::User;

pub trait UserRepository: Send + Sync {
    /// Append a user. Duplicate emails are allowed.
    fn add(&self, user: User);

    /// Whether some registered user has exactly this email and password.
    fn matches(&self, email: &str, password: &str) -> bool;
}

/// Ordered, append-only user list
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: RwLock<Vec<User>>,
    scan: CredentialScan,
}

impl UserDirectory {
    pub fn new(scan: CredentialScan) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            scan,
        }
    }
}

impl UserRepository for UserDirectory {
    fn add(&self, user: User) {
        self.users.write().push(user);
    }

    fn matches(&self, email: &str, password: &str) -> bool {
        let users = self.users.read();
        let is_match = |u: &User| u.email == email && u.password == password;

        match self.scan {
            CredentialScan::Full => users.iter().any(is_match),
            // Stops at the first record whether or not it matched.
            CredentialScan::FirstRecordOnly => users.first().is_some_and(is_match),
        }
    }
}
