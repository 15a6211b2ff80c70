//! Login marker kept in the key-value store.
//!
//! There is no authentication here: a shopper counts as logged in while the
//! `user` key holds a truthy JSON value.

use crate::{Cache, CacheError};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Key holding the logged-in user record.
pub const USER_KEY: &str = "user";

/// JavaScript-style truthiness of a stored JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// View of the login marker in a cache.
#[derive(Debug, Clone, Copy)]
pub struct Session<'a> {
    cache: &'a Cache,
}

impl<'a> Session<'a> {
    pub fn new(cache: &'a Cache) -> Self {
        Self { cache }
    }

    /// Whether the `user` key is present and truthy.
    pub fn is_logged_in(&self) -> Result<bool, CacheError> {
        Ok(self
            .cache
            .get_json(USER_KEY)?
            .as_ref()
            .is_some_and(is_truthy))
    }

    /// The stored user record, if any.
    pub fn user<T: DeserializeOwned>(&self) -> Result<Option<T>, CacheError> {
        self.cache.get(USER_KEY)
    }

    /// Record a user as logged in.
    pub fn login<T: Serialize>(&self, user: &T) -> Result<(), CacheError> {
        self.cache.set(USER_KEY, user)?;
        tracing::debug!("login marker stored");
        Ok(())
    }

    /// Remove the login marker.
    pub fn logout(&self) -> Result<(), CacheError> {
        self.cache.delete(USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("lan")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn test_login_and_logout() {
        let cache = Cache::in_memory();
        let session = Session::new(&cache);
        assert!(!session.is_logged_in().unwrap());

        session.login(&json!({"name": "Lan"})).unwrap();
        assert!(session.is_logged_in().unwrap());
        let user: Value = session.user().unwrap().unwrap();
        assert_eq!(user["name"], "Lan");

        session.logout().unwrap();
        assert!(!session.is_logged_in().unwrap());
    }

    #[test]
    fn test_falsy_marker_is_logged_out() {
        let cache = Cache::in_memory();
        cache.set(USER_KEY, &json!(null)).unwrap();
        assert!(!Session::new(&cache).is_logged_in().unwrap());
    }
}
