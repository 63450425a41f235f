/// Builds the link a reviewer follows to discard a plan and release its lock.
pub trait LockUrlBuilder {
    fn lock_url(&self, lock_key: &str) -> String;
}

impl<F> LockUrlBuilder for F
where
    F: Fn(&str) -> String,
{
    fn lock_url(&self, lock_key: &str) -> String {
        self(lock_key)
    }
}

/// Points at the lock page of the server holding the plan locks:
/// `{base_url}/lock?id={lock_key}` with the key query-encoded.
#[derive(Debug, Clone)]
pub struct ServerLockUrlBuilder {
    base_url: String,
}

impl ServerLockUrlBuilder {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl LockUrlBuilder for ServerLockUrlBuilder {
    fn lock_url(&self, lock_key: &str) -> String {
        format!("{}/lock?id={}", self.base_url, urlencoding::encode(lock_key))
    }
}
