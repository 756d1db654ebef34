//! Shared handles for the store and auth clients.
//!
//! Screens receive these through props instead of reaching for a global
//! client. Equality is handle identity, which keeps them usable inside
//! `Properties` without forcing comparisons of the clients themselves.
use std::ops::Deref;
use std::rc::Rc;

use majlis_core::auth::AuthClient;
use majlis_core::store::CommunityStore;

#[derive(Clone)]
pub struct StoreHandle(pub Rc<dyn CommunityStore>);

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for StoreHandle {
    type Target = dyn CommunityStore;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

#[derive(Clone)]
pub struct AuthHandle(pub Rc<dyn AuthClient>);

impl PartialEq for AuthHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for AuthHandle {
    type Target = dyn AuthClient;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use majlis_core::memory::{MemoryAuth, MemoryStore};

    #[test]
    fn handle_equality_is_identity_not_contents() {
        let store = Rc::new(MemoryStore::default());
        let a = StoreHandle(store.clone());
        let b = a.clone();
        let c = StoreHandle(Rc::new(MemoryStore::default()));
        assert!(a == b);
        assert!(a != c);

        let auth = AuthHandle(Rc::new(MemoryAuth::new(store)));
        assert!(auth.clone() == auth);
    }
}
