//! 显示表面抽象
//! Display surface abstraction
//!
//! 注册表通过 [`DisplaySurface`] 查找节点并写入文本，不依赖任何具体的
//! 渲染引擎。[`MemorySurface`] 是一个基于 `DashMap` 的内存实现，
//! 记录每个节点的写入历史。
//!
//! The registry looks nodes up and writes text through [`DisplaySurface`]
//! without depending on any concrete rendering engine. [`MemorySurface`] is a
//! `DashMap`-backed in-memory implementation that records every node's write
//! history.

use crate::fragment::Element;
use dashmap::DashMap;
use std::sync::Arc;

/// A key-value text sink addressed by identifier.
///
/// 按标识符寻址的键值文本输出。
pub trait DisplaySurface: Send + Sync + 'static {
    /// A resolved reference to a node on the surface.
    type Node: Send;

    /// Looks a node up by identifier. `None` if the node does not exist.
    /// 按标识符查找节点。节点不存在时返回 `None`。
    fn node(&self, id: &str) -> Option<Self::Node>;

    /// Replaces the text content of a node.
    /// 替换节点的文本内容。
    fn set_text(&self, node: &Self::Node, text: &str);
}

impl<S: DisplaySurface> DisplaySurface for Arc<S> {
    type Node = S::Node;

    fn node(&self, id: &str) -> Option<Self::Node> {
        (**self).node(id)
    }

    fn set_text(&self, node: &Self::Node, text: &str) {
        (**self).set_text(node, text)
    }
}

/// Handle to a node of a [`MemorySurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryNode {
    id: String,
}

impl MemoryNode {
    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Default)]
struct NodeState {
    text: String,
    writes: Vec<String>,
}

/// In-memory display surface.
///
/// 内存显示表面。
#[derive(Debug, Default)]
pub struct MemorySurface {
    nodes: DashMap<String, NodeState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty node. Re-inserting an existing id clears its history.
    /// 添加一个空节点。重复插入已有标识符会清空其历史。
    pub fn insert(&self, id: impl Into<String>) {
        self.nodes.insert(id.into(), NodeState::default());
    }

    /// Adds every identified node of `fragment` (root included), the way a host
    /// would after swapping the fragment in. Nodes that already exist keep
    /// their text and write history.
    ///
    /// 添加 `fragment` 中所有带标识符的节点（包括根节点），
    /// 模拟宿主替换片段后的状态。已存在的节点保留其文本和写入历史。
    pub fn mount(&self, fragment: &Element) {
        std::iter::once(fragment)
            .chain(fragment.descendants())
            .filter_map(Element::id)
            .for_each(|id| {
                self.nodes.entry(id.to_string()).or_default();
            });
    }

    pub fn remove(&self, id: &str) -> bool {
        self.nodes.remove(id).is_some()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Current text of a node.
    pub fn text(&self, id: &str) -> Option<String> {
        self.nodes.get(id).map(|state| state.text.clone())
    }

    /// Every text written to a node since it was inserted, oldest first.
    /// 自插入以来写入节点的所有文本，按时间先后排列。
    pub fn writes(&self, id: &str) -> Vec<String> {
        self.nodes
            .get(id)
            .map(|state| state.writes.clone())
            .unwrap_or_default()
    }
}

impl DisplaySurface for MemorySurface {
    type Node = MemoryNode;

    fn node(&self, id: &str) -> Option<MemoryNode> {
        self.nodes
            .contains_key(id)
            .then(|| MemoryNode { id: id.to_string() })
    }

    fn set_text(&self, node: &MemoryNode, text: &str) {
        // 节点可能已在解析后被移除
        // The node may have been removed after it was resolved
        if let Some(mut state) = self.nodes.get_mut(&node.id) {
            state.text = text.to_string();
            state.writes.push(text.to_string());
        }
    }
}
