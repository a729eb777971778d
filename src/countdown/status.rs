//! 调用方提供的资源状态
//! Caller-supplied resource status

use std::fmt;

/// Status carried by a countdown target.
///
/// Only `provisioning` has a meaning to the registry: such a resource has no
/// meaningful expiry yet, so it never gets a countdown.
///
/// 倒计时目标携带的状态。只有 `provisioning` 对注册表有意义：
/// 正在开通的资源还没有有效的过期时间，因此不会启动倒计时。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerStatus {
    Provisioning,
    Other(String),
}

impl TimerStatus {
    pub const PROVISIONING: &'static str = "provisioning";

    pub fn is_provisioning(&self) -> bool {
        matches!(self, Self::Provisioning)
    }
}

impl From<&str> for TimerStatus {
    fn from(value: &str) -> Self {
        if value == Self::PROVISIONING {
            Self::Provisioning
        } else {
            Self::Other(value.to_string())
        }
    }
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provisioning => f.write_str(Self::PROVISIONING),
            Self::Other(status) => f.write_str(status),
        }
    }
}
