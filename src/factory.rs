use crate::{
    error::{LibraryError, Result},
    user::{Role, User, UserId},
};

/// Builds users and hands out their ids.
///
/// The counter starts at 1 and only advances when a user is actually created,
/// so a rejected selector never burns an id.
#[derive(Debug, Clone)]
pub struct UserFactory {
    /// Id the next created user receives
    next_id: u32,
}

impl Default for UserFactory {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl UserFactory {
    /// Create a factory whose first user gets id 1
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a user of the role named by `selector`
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::InvalidArgument` when the selector is not 1 or 2,
    /// or `LibraryError::IdsExhausted` once the counter cannot advance.
    pub fn create_user(&mut self, selector: i64, name: impl Into<String>) -> Result<User> {
        let role = Role::from_selector(selector)?;
        let following = self.next_id.checked_add(1).ok_or(LibraryError::IdsExhausted)?;
        let id = UserId(self.next_id);
        self.next_id = following;
        Ok(User::new(id, name, role))
    }

    /// The id the next successful `create_user` call will assign
    #[must_use]
    pub fn peek_next_id(&self) -> UserId {
        UserId(self.next_id)
    }
}
