//! 定义了倒计时注册表的可配置参数。
//! Defines configurable parameters for the countdown registry.

use std::time::Duration;

/// A structure containing all configurable parameters for a registry.
///
/// 包含注册表所有可配置参数的结构体。
#[derive(Debug, Clone)]
pub struct Config {
    /// The cadence at which every live countdown re-renders itself.
    /// 每个活跃倒计时重新渲染的节奏。
    pub tick_interval: Duration,

    /// The terminal text written once a countdown reaches zero.
    /// 倒计时归零后写入的终止文本。
    pub expired_text: String,

    /// Capacity of the registry actor's command channel. Swap notifications
    /// that arrive while the channel is full are dropped with a warning.
    ///
    /// 注册表actor命令通道的容量。通道满时到达的替换通知会被丢弃并记录警告。
    pub command_buffer_size: usize,

    /// How countdown targets are recognised inside a replaced fragment.
    /// 如何在被替换的片段中识别倒计时目标。
    pub scan: ScanConfig,
}

/// Metadata contract for countdown targets.
///
/// 倒计时目标的元数据约定。
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Identifier prefix that marks an element as a countdown target.
    /// 标记元素为倒计时目标的标识符前缀。
    pub id_prefix: String,
    /// Attribute carrying the expiry timestamp.
    /// 携带过期时间戳的属性。
    pub expiry_attribute: String,
    /// Attribute carrying the status string.
    /// 携带状态字符串的属性。
    pub status_attribute: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            expired_text: "Expired".to_string(),
            command_buffer_size: 256,
            scan: ScanConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            id_prefix: "countdown-".to_string(),
            expiry_attribute: "data-expires-at".to_string(),
            status_attribute: "data-status".to_string(),
        }
    }
}
