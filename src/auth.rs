use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Credential provider
// ---------------------------------------------------------------------------

/// Access role attached to a credential. The dashboard is restricted to
/// leadership, so the set is closed and checked at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Lider,
}

/// Verifies a username/password pair. Abstracted behind a trait so the
/// static table can later be swapped for a real identity service without
/// touching the dashboard.
pub trait CredentialProvider {
    /// `Some(role)` iff the username exists and the password matches exactly
    /// (case-sensitive). Unknown user and wrong password are indistinguishable.
    fn verify(&self, username: &str, password: &str) -> Option<Role>;

    /// Boolean convenience over [`verify`](Self::verify).
    fn authenticate(&self, username: &str, password: &str) -> bool {
        self.verify(username, password).is_some()
    }
}

#[derive(Debug, Clone)]
struct Credential {
    password: String,
    role: Role,
}

/// The built-in credential table.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    users: BTreeMap<String, Credential>,
}

impl Default for StaticCredentials {
    fn default() -> Self {
        let users = [
            "vitor.baqueiro",
            "marco.silveira",
            "viviane.fabbri",
            "bruna.yendo",
            "rafael.bonfim",
            "carlos.corvelloni",
        ]
        .into_iter()
        .map(|u| {
            (
                u.to_string(),
                Credential {
                    password: "Nobelpartnership2025".to_string(),
                    role: Role::Lider,
                },
            )
        })
        .collect();
        Self { users }
    }
}

impl StaticCredentials {
    /// Usernames in the table, for the login page hint list.
    pub fn usernames(&self) -> Vec<String> {
        self.users.keys().cloned().collect()
    }
}

impl CredentialProvider for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<Role> {
        let cred = self.users.get(username)?;
        if cred.password == password {
            Some(cred.role)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveUser {
    username: String,
    role: Role,
}

/// Per-user session state with an explicit lifecycle: starts logged out,
/// activated by [`login`](Session::login), cleared by [`logout`](Session::logout).
#[derive(Debug, Clone, Default)]
pub struct Session {
    active: Option<ActiveUser>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.active.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.active.as_ref().map(|u| u.username.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.active.as_ref().map(|u| u.role)
    }

    pub fn login(&mut self, username: &str, role: Role) {
        self.active = Some(ActiveUser {
            username: username.to_string(),
            role,
        });
    }

    pub fn logout(&mut self) {
        self.active = None;
    }
}
