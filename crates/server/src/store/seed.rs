//! The standard fixture set.
//!
//! One coherent roster covering every surface the UI tests exercise: diner,
//! franchisee, and admin logins, a directory large enough to paginate, and
//! franchises with and without admins, stores, and revenue figures.

use rust_decimal::Decimal;

use pizza_stub_core::{
    Email, Franchise, FranchiseAdmin, FranchiseId, MenuId, MenuItem, Role, Store, StoreId, User,
    UserId, UserRole,
};

use super::FixtureStore;

impl FixtureStore {
    /// A store preloaded with the standard fixtures.
    #[must_use]
    pub fn standard() -> Self {
        let mut store = Self::new();

        for (id, name, email, password, role) in ROSTER {
            store.add_user(user(id, name, email, password, *role));
        }

        store.add_franchise(franchise(1, "LotaPizza", None, vec![
            plain_store(1, "Lehi"),
            plain_store(2, "Springville"),
            plain_store(3, "American Fork"),
        ]));
        store.add_franchise(franchise(
            2,
            "PizzaCorp",
            Some(admin_entry("4", "Oscar George", "f@jwt.com")),
            vec![plain_store(4, "Spanish Fork")],
        ));
        store.add_franchise(franchise(3, "topSpot", None, vec![]));
        store.add_franchise(franchise(
            4,
            "pizzaPocket",
            Some(admin_entry("4", "Oscar George", "f@jwt.com")),
            vec![revenue_store(5, "SLC", 0)],
        ));
        store.add_franchise(franchise(5, "CheesyBites", None, vec![revenue_store(6, "NYC", 1000)]));
        store.add_franchise(franchise(6, "SliceMasters", None, vec![revenue_store(7, "LA", 500)]));
        store.add_franchise(franchise(7, "DoughNation", None, vec![revenue_store(8, "Chicago", 300)]));
        store.add_franchise(franchise(8, "PepperoniKing", None, vec![revenue_store(9, "Boston", 700)]));

        store.set_menu(vec![
            MenuItem {
                id: MenuId::new(1),
                title: "Veggie".to_owned(),
                image: "pizza1.png".to_owned(),
                price: Decimal::new(38, 4),
                description: "A garden of delight".to_owned(),
            },
            MenuItem {
                id: MenuId::new(2),
                title: "Pepperoni".to_owned(),
                image: "pizza2.png".to_owned(),
                price: Decimal::new(42, 4),
                description: "Spicy treat".to_owned(),
            },
        ]);

        store
    }
}

/// (id, name, email, password, role) for every seeded user.
const ROSTER: &[(&str, &str, &str, &str, Role)] = &[
    ("1", "Alex Marin", "a@jwt.com", "admin", Role::Admin),
    ("2", "Bella Cruz", "bella@jwt.com", "diner", Role::Diner),
    ("3", "Kai Chen", "d@jwt.com", "a", Role::Diner),
    ("4", "Oscar George", "f@jwt.com", "a", Role::Franchisee),
    ("5", "Alice Smith", "admin@jwt.com", "a", Role::Admin),
    ("6", "Chase Nguyen", "chase@jwt.com", "diner", Role::Diner),
    ("7", "Dina Patel", "dina@jwt.com", "diner", Role::Diner),
    ("8", "Eli Romero", "eli@jwt.com", "diner", Role::Diner),
    ("9", "Fiona Brooks", "fiona@jwt.com", "diner", Role::Diner),
    ("10", "George Li", "george@jwt.com", "diner", Role::Diner),
    ("11", "Harper Singh", "harper@jwt.com", "diner", Role::Diner),
    ("12", "Isaac Turner", "isaac@jwt.com", "diner", Role::Diner),
    ("13", "Julia Vega", "julia@jwt.com", "diner", Role::Diner),
    ("14", "Kai Morgan", "kai@jwt.com", "diner", Role::Diner),
    ("15", "Leah Park", "leah@jwt.com", "diner", Role::Diner),
    ("16", "Mason Patel", "mason@jwt.com", "diner", Role::Diner),
    ("17", "Nora Diaz", "nora@jwt.com", "diner", Role::Diner),
    ("18", "Oliver Zhao", "oliver@jwt.com", "admin", Role::Admin),
];

fn user(id: &str, name: &str, email: &str, password: &str, role: Role) -> User {
    User {
        id: UserId::from(id),
        name: name.to_owned(),
        email: Email::parse(email).expect("fixture email is valid"),
        password: password.to_owned(),
        roles: vec![UserRole::of(role)],
    }
}

fn franchise(
    id: i64,
    name: &str,
    admins: Option<Vec<FranchiseAdmin>>,
    stores: Vec<Store>,
) -> Franchise {
    Franchise {
        id: FranchiseId::new(id),
        name: name.to_owned(),
        admins,
        stores,
    }
}

fn admin_entry(id: &str, name: &str, email: &str) -> Vec<FranchiseAdmin> {
    vec![FranchiseAdmin {
        id: UserId::from(id),
        name: name.to_owned(),
        email: Email::parse(email).expect("fixture email is valid"),
    }]
}

fn plain_store(id: i64, name: &str) -> Store {
    Store {
        id: StoreId::new(id),
        name: name.to_owned(),
        total_revenue: None,
    }
}

fn revenue_store(id: i64, name: &str, revenue: i64) -> Store {
    Store {
        id: StoreId::new(id),
        name: name.to_owned(),
        total_revenue: Some(Decimal::new(revenue, 0)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pizza_stub_core::ListQuery;

    use super::*;

    #[test]
    fn test_standard_roster_logins() {
        let mut store = FixtureStore::standard();
        assert!(store.login("d@jwt.com", "a").is_ok());
        assert!(store.login("a@jwt.com", "admin").is_ok());
        assert!(store.login("f@jwt.com", "a").is_ok());
    }

    #[test]
    fn test_standard_directory_paginates() {
        let store = FixtureStore::standard();
        let page = store.list_users(&ListQuery::default());
        assert_eq!(page.items.len(), 10);
        assert!(page.more);
        assert_eq!(page.total, 18);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let store = FixtureStore::standard();
        let page = store.list_users(&ListQuery {
            limit: 100,
            ..ListQuery::default()
        });
        let mut ids: Vec<&str> = page.items.iter().map(|u| u.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 18);
    }

    #[test]
    fn test_new_franchise_ids_continue_past_seed() {
        let mut store = FixtureStore::standard();
        let franchise = store.create_franchise("Fresh", &[]).unwrap();
        assert_eq!(franchise.id.as_i64(), 9);
    }
}
