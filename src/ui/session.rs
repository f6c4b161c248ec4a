pub const ANONYMOUS_AUTHOR: &str = "anonymous";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    /// Placeholder identity used by the local login toggle.
    pub fn demo() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        }
    }
}

/// Client-side identity. Nothing here is verified or sent to the API; it only
/// decides which author string the UI displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn login(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn author(&self) -> &str {
        self.user
            .as_ref()
            .map_or(ANONYMOUS_AUTHOR, |user| user.email.as_str())
    }
}
