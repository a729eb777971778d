//! 定义了库中所有可能的错误类型。
//! Defines all possible error types in the library.

use thiserror::Error;

/// The primary error type for the countdown registry library.
/// 倒计时注册表库的主要错误类型。
///
/// Nothing in a tick or a swap notification ever returns one of these; they
/// only surface from explicit calls such as [`crate::countdown::parse_expiry`]
/// or the async methods of [`crate::registry::RegistryHandle`].
#[derive(Debug, Error)]
pub enum Error {
    /// An expiry attribute could not be parsed as a point in time.
    /// 过期属性无法解析为时间点。
    #[error("invalid expiry timestamp {value:?}: {source}")]
    InvalidExpiry {
        value: String,
        #[source]
        source: time::error::Parse,
    },

    /// The internal command channel to the registry actor was closed.
    /// 通往注册表actor的内部命令通道已关闭。
    #[error("Internal channel is broken")]
    ChannelClosed,

    /// The registry actor has shut down and can no longer answer requests.
    /// 注册表actor已关闭，无法再响应请求。
    #[error("Registry has been shut down")]
    RegistryShutdown,
}

/// A specialized `Result` type for this library.
/// 本库专用的 `Result` 类型。
pub type Result<T> = std::result::Result<T, Error>;
