use async_trait::async_trait;

/// Source of the single email address allowed into the dashboard.
#[async_trait]
pub trait AdminAllowlist: Send + Sync {
    /// Empty when unset or unreadable; an empty allowlist admits nobody.
    async fn allowed_email(&self) -> String;
}
