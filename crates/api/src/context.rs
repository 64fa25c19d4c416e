/// Verified identity context for a request.
///
/// Inserted into request extensions by the auth middleware after token
/// verification; must be present for all protected routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    email: String,
}

impl UserContext {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
