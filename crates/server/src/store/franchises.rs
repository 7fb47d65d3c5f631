//! Franchise and store fixture operations.

use pizza_stub_core::{
    Email, Franchise, FranchiseAdmin, FranchiseId, ListQuery, Page, Store, StoreId, UserId,
    paginate,
};

use super::{FixtureStore, StoreError};

impl FixtureStore {
    /// List the franchise fixtures, filtered by name and paginated.
    #[must_use]
    pub fn list_franchises(&self, query: &ListQuery) -> Page<Franchise> {
        let pattern = query.pattern();
        let filtered: Vec<Franchise> = self
            .franchises
            .iter()
            .filter(|f| pattern.matches(&f.name))
            .cloned()
            .collect();
        paginate(filtered, query.page, query.limit)
    }

    /// Create a franchise with a fresh id and an empty store list.
    ///
    /// Admin emails are resolved against the user directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UserEmailNotFound`] if an admin email is not in
    /// the directory.
    pub fn create_franchise(
        &mut self,
        name: &str,
        admin_emails: &[Email],
    ) -> Result<Franchise, StoreError> {
        let mut admins = Vec::with_capacity(admin_emails.len());
        for email in admin_emails {
            let user = self
                .user_by_email(email.as_str())
                .ok_or_else(|| StoreError::UserEmailNotFound(email.clone()))?;
            admins.push(FranchiseAdmin {
                id: user.id.clone(),
                name: user.name.clone(),
                email: user.email.clone(),
            });
        }

        let franchise = Franchise {
            id: self.next_franchise_id(),
            name: name.to_owned(),
            admins: (!admins.is_empty()).then_some(admins),
            stores: Vec::new(),
        };
        self.franchises.push(franchise.clone());
        Ok(franchise)
    }

    /// Remove the franchise with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FranchiseNotFound`] if no franchise has that id.
    pub fn delete_franchise(&mut self, id: FranchiseId) -> Result<(), StoreError> {
        let index = self
            .franchises
            .iter()
            .position(|f| f.id == id)
            .ok_or(StoreError::FranchiseNotFound(id))?;
        self.franchises.remove(index);
        Ok(())
    }

    /// Franchises administered by the given user.
    ///
    /// Unknown user ids yield an empty list - the original surface treats
    /// this as "no franchises", not an error.
    #[must_use]
    pub fn franchises_for_user(&self, user_id: &UserId) -> Vec<Franchise> {
        let email = self
            .users
            .iter()
            .find(|u| u.id == *user_id)
            .map(|u| u.email.clone());

        self.franchises
            .iter()
            .filter(|f| {
                email
                    .as_ref()
                    .is_some_and(|e| f.is_administered_by(user_id, e))
            })
            .cloned()
            .collect()
    }

    /// Create a store with a fresh id under the given franchise.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FranchiseNotFound`] if no franchise has that id.
    pub fn create_store(
        &mut self,
        franchise_id: FranchiseId,
        name: &str,
    ) -> Result<Store, StoreError> {
        let store_id = self.next_store_id();
        let franchise = self
            .franchises
            .iter_mut()
            .find(|f| f.id == franchise_id)
            .ok_or(StoreError::FranchiseNotFound(franchise_id))?;

        let store = Store {
            id: store_id,
            name: name.to_owned(),
            total_revenue: None,
        };
        franchise.stores.push(store.clone());
        Ok(store)
    }

    /// Remove a store from the given franchise.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::FranchiseNotFound`] or
    /// [`StoreError::StoreNotFound`] when either id is unknown.
    pub fn delete_store(
        &mut self,
        franchise_id: FranchiseId,
        store_id: StoreId,
    ) -> Result<(), StoreError> {
        let franchise = self
            .franchises
            .iter_mut()
            .find(|f| f.id == franchise_id)
            .ok_or(StoreError::FranchiseNotFound(franchise_id))?;

        let index = franchise
            .stores
            .iter()
            .position(|s| s.id == store_id)
            .ok_or(StoreError::StoreNotFound {
                franchise: franchise_id,
                store: store_id,
            })?;
        franchise.stores.remove(index);
        Ok(())
    }
}
