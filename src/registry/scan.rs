//! 在被替换的片段中查找倒计时目标
//! Finding countdown targets inside a replaced fragment

use crate::config::ScanConfig;
use crate::fragment::Element;
use tracing::debug;

/// A fully specified countdown target found by [`scan_targets`].
/// [`scan_targets`] 找到的完整倒计时目标。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTarget<'a> {
    pub element_id: &'a str,
    pub expiry: &'a str,
    pub status: &'a str,
}

/// Targets in document order plus the number of prefixed nodes skipped for
/// missing metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult<'a> {
    pub targets: Vec<CountdownTarget<'a>>,
    pub skipped: usize,
}

/// Scans every descendant of `root` (not `root` itself) whose identifier
/// starts with the configured prefix.
///
/// A node lacking either the expiry or the status attribute is not a countdown
/// target and is skipped.
///
/// 扫描 `root` 的所有后代（不包括 `root` 本身）中标识符以配置前缀开头的节点。
/// 缺少过期属性或状态属性的节点不是倒计时目标，会被跳过。
pub fn scan_targets<'a>(root: &'a Element, config: &ScanConfig) -> ScanResult<'a> {
    let mut result = ScanResult::default();

    for node in root.descendants() {
        let Some(element_id) = node.id().filter(|id| id.starts_with(&config.id_prefix)) else {
            continue;
        };

        match (
            node.attribute(&config.expiry_attribute),
            node.attribute(&config.status_attribute),
        ) {
            (Some(expiry), Some(status)) => result.targets.push(CountdownTarget {
                element_id,
                expiry,
                status,
            }),
            _ => {
                debug!(element_id, "Skipping countdown node without expiry or status");
                result.skipped += 1;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countdown(id: &str, expiry: &str, status: &str) -> Element {
        Element::with_id(id)
            .attr("data-expires-at", expiry)
            .attr("data-status", status)
    }

    #[test]
    fn test_scan_finds_prefixed_descendants_in_order() {
        let root = Element::with_id("server-list")
            .child(
                Element::with_id("card-1")
                    .child(countdown("countdown-1", "2030-01-01T00:00:00Z", "active")),
            )
            .child(Element::with_id("uptime-2").attr("data-status", "active"))
            .child(countdown("countdown-2", "2030-01-02T00:00:00Z", "stopped"));

        let result = scan_targets(&root, &ScanConfig::default());

        let ids: Vec<_> = result.targets.iter().map(|t| t.element_id).collect();
        assert_eq!(ids, vec!["countdown-1", "countdown-2"]);
        assert_eq!(result.targets[1].status, "stopped");
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_scan_skips_incomplete_nodes() {
        let root = Element::new()
            .child(Element::with_id("countdown-1").attr("data-status", "active"))
            .child(Element::with_id("countdown-2").attr("data-expires-at", "2030-01-01"))
            .child(countdown("countdown-3", "2030-01-01", ""));

        let result = scan_targets(&root, &ScanConfig::default());

        assert!(result.targets.is_empty());
        assert_eq!(result.skipped, 3);
    }

    #[test]
    fn test_scan_excludes_root() {
        let root = countdown("countdown-root", "2030-01-01", "active");
        let result = scan_targets(&root, &ScanConfig::default());
        assert!(result.targets.is_empty());
    }

    #[test]
    fn test_scan_honours_custom_attributes() {
        let config = ScanConfig {
            id_prefix: "timer-".into(),
            expiry_attribute: "data-ends".into(),
            status_attribute: "data-state".into(),
        };
        let root = Element::new().child(
            Element::with_id("timer-7")
                .attr("data-ends", "2030-01-01")
                .attr("data-state", "active"),
        );

        let result = scan_targets(&root, &config);
        assert_eq!(result.targets.len(), 1);
        assert_eq!(result.targets[0].element_id, "timer-7");
    }
}
