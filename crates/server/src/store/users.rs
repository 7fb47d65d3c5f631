//! User directory, session, and profile operations.

use serde_json::{Map, Value};

use pizza_stub_core::{Email, ListQuery, Page, Role, User, UserId, UserRole, paginate};

use super::{FixtureStore, StoreError};

impl FixtureStore {
    /// Look up a user by email.
    #[must_use]
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email.as_str() == email)
    }

    /// The currently logged-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        let email = self.session.as_ref()?;
        self.user_by_email(email.as_str()).cloned()
    }

    /// Log in with an email and password.
    ///
    /// Succeeds iff the user exists and the password matches exactly
    /// (case-sensitive). The session is set only on success.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BadCredentials`] on an unknown email or a
    /// password mismatch.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, StoreError> {
        let user = self
            .user_by_email(email)
            .filter(|u| u.password == password)
            .cloned()
            .ok_or(StoreError::BadCredentials)?;

        self.session = Some(user.email.clone());
        Ok(user)
    }

    /// Register a new diner and make it the active session.
    ///
    /// The new user gets the next directory sequence number as its id and a
    /// single `diner` role.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmailTaken`] if the email is already in the
    /// directory (the existing record is untouched), or
    /// [`StoreError::InvalidField`] if the email does not parse.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, StoreError> {
        if self.user_by_email(email).is_some() {
            return Err(StoreError::EmailTaken);
        }

        let email =
            Email::parse(email).map_err(|e| StoreError::InvalidField(e.to_string()))?;

        let user = User {
            id: UserId::from_sequence(self.users.len() + 1),
            name: name.to_owned(),
            email: email.clone(),
            password: password.to_owned(),
            roles: vec![UserRole::of(Role::Diner)],
        };

        self.users.push(user.clone());
        self.session = Some(email);
        Ok(user)
    }

    /// Clear the session unconditionally.
    pub fn logout(&mut self) {
        self.session = None;
    }

    /// List the directory, filtered by name and paginated.
    #[must_use]
    pub fn list_users(&self, query: &ListQuery) -> Page<User> {
        let pattern = query.pattern();
        let filtered: Vec<User> = self
            .users
            .iter()
            .filter(|u| pattern.matches(&u.name))
            .cloned()
            .collect();
        paginate(filtered, query.page, query.limit)
    }

    /// Remove the user with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UserNotFound`] if no user has that id.
    pub fn delete_user(&mut self, id: &UserId) -> Result<(), StoreError> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == *id)
            .ok_or_else(|| StoreError::UserNotFound(id.clone()))?;

        let removed = self.users.remove(index);
        // A dangling session would resolve to no user; drop it explicitly.
        if self.session.as_ref() == Some(&removed.email) {
            self.session = None;
        }
        Ok(())
    }

    /// Merge a JSON patch into the logged-in user's record.
    ///
    /// The patch is merged field-by-field over the current record, so it can
    /// rename the user, change the password, or re-key the record under a
    /// new email.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotLoggedIn`] with no active session
    /// - [`StoreError::PatchDroppedEmail`] if the merged record no longer
    ///   carries a non-empty email string
    /// - [`StoreError::InvalidPatch`] if the merged record is not a valid
    ///   user
    /// - [`StoreError::EmailTaken`] if the new email collides with another
    ///   user
    pub fn update_user(&mut self, patch: &Map<String, Value>) -> Result<User, StoreError> {
        let current = self.current_user().ok_or(StoreError::NotLoggedIn)?;
        let old_email = current.email.clone();

        let mut merged = match serde_json::to_value(&current) {
            Ok(Value::Object(map)) => map,
            _ => return Err(StoreError::InvalidPatch("user record".to_owned())),
        };
        for (key, value) in patch {
            merged.insert(key.clone(), value.clone());
        }

        match merged.get("email") {
            Some(Value::String(s)) if !s.is_empty() => {}
            _ => return Err(StoreError::PatchDroppedEmail),
        }

        let updated: User = serde_json::from_value(Value::Object(merged))
            .map_err(|e| StoreError::InvalidPatch(e.to_string()))?;

        if updated.email != old_email
            && self.user_by_email(updated.email.as_str()).is_some()
        {
            return Err(StoreError::EmailTaken);
        }

        let index = self
            .users
            .iter()
            .position(|u| u.email == old_email)
            .ok_or(StoreError::NotLoggedIn)?;
        if let Some(slot) = self.users.get_mut(index) {
            *slot = updated.clone();
        }
        self.session = Some(updated.email.clone());
        Ok(updated)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn store_with_diner() -> FixtureStore {
        let mut store = FixtureStore::new();
        store.add_user(User {
            id: UserId::from("3"),
            name: "Kai Chen".to_owned(),
            email: Email::parse("d@jwt.com").unwrap(),
            password: "a".to_owned(),
            roles: vec![UserRole::of(Role::Diner)],
        });
        store
    }

    #[test]
    fn test_login_success_sets_session() {
        let mut store = store_with_diner();
        let user = store.login("d@jwt.com", "a").unwrap();
        assert_eq!(user.name, "Kai Chen");
        assert_eq!(store.current_user().unwrap().id, UserId::from("3"));
    }

    #[test]
    fn test_login_wrong_password_leaves_no_session() {
        let mut store = store_with_diner();
        assert!(matches!(
            store.login("d@jwt.com", "A"),
            Err(StoreError::BadCredentials)
        ));
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_login_unknown_email() {
        let mut store = store_with_diner();
        assert!(matches!(
            store.login("nobody@jwt.com", "a"),
            Err(StoreError::BadCredentials)
        ));
    }

    #[test]
    fn test_register_assigns_sequence_id_and_diner_role() {
        let mut store = store_with_diner();
        let user = store.register("Julia Jones", "e@jwt.com", "b").unwrap();
        assert_eq!(user.id, UserId::from("2"));
        assert_eq!(user.roles, vec![UserRole::of(Role::Diner)]);
        assert_eq!(store.current_user().unwrap().email.as_str(), "e@jwt.com");
    }

    #[test]
    fn test_register_duplicate_email_leaves_record_untouched() {
        let mut store = store_with_diner();
        let err = store.register("Impostor", "d@jwt.com", "zzz").unwrap_err();
        assert!(matches!(err, StoreError::EmailTaken));

        let existing = store.user_by_email("d@jwt.com").unwrap();
        assert_eq!(existing.name, "Kai Chen");
        assert_eq!(existing.password, "a");
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_register_invalid_email() {
        let mut store = FixtureStore::new();
        assert!(matches!(
            store.register("No At", "not-an-email", "pw"),
            Err(StoreError::InvalidField(_))
        ));
    }

    #[test]
    fn test_logout_clears_session() {
        let mut store = store_with_diner();
        store.login("d@jwt.com", "a").unwrap();
        store.logout();
        assert!(store.current_user().is_none());
        // Logging out twice is fine.
        store.logout();
    }

    #[test]
    fn test_delete_user_removes_from_listing() {
        let mut store = store_with_diner();
        store.delete_user(&UserId::from("3")).unwrap();
        let page = store.list_users(&ListQuery::default());
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_delete_unknown_user() {
        let mut store = store_with_diner();
        assert!(matches!(
            store.delete_user(&UserId::from("99")),
            Err(StoreError::UserNotFound(_))
        ));
    }

    #[test]
    fn test_delete_logged_in_user_drops_session() {
        let mut store = store_with_diner();
        store.login("d@jwt.com", "a").unwrap();
        store.delete_user(&UserId::from("3")).unwrap();
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_update_requires_session() {
        let mut store = store_with_diner();
        let patch = Map::new();
        assert!(matches!(
            store.update_user(&patch),
            Err(StoreError::NotLoggedIn)
        ));
    }

    #[test]
    fn test_update_survives_relogin() {
        let mut store = FixtureStore::new();
        store.register("pizza diner", "user123@jwt.com", "diner").unwrap();

        let mut patch = Map::new();
        patch.insert("name".to_owned(), json!("pizza dinerx"));
        let updated = store.update_user(&patch).unwrap();
        assert_eq!(updated.name, "pizza dinerx");

        store.logout();
        let user = store.login("user123@jwt.com", "diner").unwrap();
        assert_eq!(user.name, "pizza dinerx");
    }

    #[test]
    fn test_update_rekeys_directory_under_new_email() {
        let mut store = store_with_diner();
        store.login("d@jwt.com", "a").unwrap();

        let mut patch = Map::new();
        patch.insert("email".to_owned(), json!("kai@jwt.com"));
        store.update_user(&patch).unwrap();

        assert!(store.user_by_email("d@jwt.com").is_none());
        assert!(store.user_by_email("kai@jwt.com").is_some());
        assert_eq!(
            store.current_user().unwrap().email.as_str(),
            "kai@jwt.com"
        );
    }

    #[test]
    fn test_update_dropping_email_is_rejected() {
        let mut store = store_with_diner();
        store.login("d@jwt.com", "a").unwrap();

        let mut patch = Map::new();
        patch.insert("email".to_owned(), Value::Null);
        assert!(matches!(
            store.update_user(&patch),
            Err(StoreError::PatchDroppedEmail)
        ));

        // The record is untouched after the failed update.
        assert!(store.user_by_email("d@jwt.com").is_some());
    }

    #[test]
    fn test_update_to_colliding_email_is_rejected() {
        let mut store = store_with_diner();
        store.register("Julia Jones", "e@jwt.com", "b").unwrap();

        let mut patch = Map::new();
        patch.insert("email".to_owned(), json!("d@jwt.com"));
        assert!(matches!(
            store.update_user(&patch),
            Err(StoreError::EmailTaken)
        ));
    }

    #[test]
    fn test_list_users_filters_by_name() {
        let mut store = store_with_diner();
        store.register("Julia Jones", "e@jwt.com", "b").unwrap();

        let query = ListQuery {
            name: Some("*jul*".to_owned()),
            ..ListQuery::default()
        };
        let page = store.list_users(&query);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items.first().unwrap().name, "Julia Jones");
        assert_eq!(page.total, 1);
    }
}
