/// The signed-in user as far as routing is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    /// `None` when the auth provider does not report verification at all.
    pub is_verified: Option<bool>,
}

impl User {
    #[must_use]
    pub fn new(email: impl Into<String>, is_verified: Option<bool>) -> Self {
        Self {
            email: email.into(),
            is_verified,
        }
    }
}

/// Snapshot of the external auth provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub user: Option<User>,
}

impl AuthState {
    /// Auth check still in flight.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self {
            is_authenticated: true,
            is_loading: false,
            user: Some(user),
        }
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.email.as_str())
    }
}
