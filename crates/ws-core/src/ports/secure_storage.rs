use thiserror::Error;

/// Secure storage errors.
///
/// 安全存储错误类型。
#[derive(Debug, Error)]
pub enum SecureStorageError {
    /// Secure storage is unavailable on this platform.
    ///
    /// 平台不支持或不可用。
    #[error("secure storage unavailable: {0}")]
    Unavailable(String),

    /// Access was denied by the platform (permissions/ACL).
    ///
    /// 平台权限或 ACL 拒绝访问。
    #[error("secure storage access denied: {0}")]
    PermissionDenied(String),

    /// Other storage failures.
    ///
    /// 其它存储失败。
    #[error("secure storage failed: {0}")]
    Other(String),
}

/// Secure storage port for identification secrets.
///
/// 安全存储端口：用于存取敏感字节数据。
pub trait SecureStoragePort: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SecureStorageError>;

    fn set(&self, key: &str, value: &[u8]) -> Result<(), SecureStorageError>;

    fn delete(&self, key: &str) -> Result<(), SecureStorageError>;
}
