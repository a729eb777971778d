//! 被替换的显示片段模型
//! Model of a replaced display fragment
//!
//! 内容替换通知携带一棵 [`Element`] 树：每个节点有可选的标识符、
//! 字符串属性和子节点。注册表只读取这棵树，从不修改它。
//!
//! A content-replaced notification carries a tree of [`Element`]s: every node
//! has an optional identifier, string attributes and children. The registry
//! only reads this tree and never mutates it.

use std::collections::BTreeMap;

/// A node of a replaced fragment.
/// 被替换片段中的一个节点。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    id: Option<String>,
    attributes: BTreeMap<String, String>,
    children: Vec<Element>,
}

impl Element {
    /// 创建一个没有标识符的空节点
    /// Create an empty node without identifier
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带标识符的节点
    /// Create a node with an identifier
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Reads a string attribute. Empty values count as absent.
    /// 读取字符串属性。空值视为不存在。
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Iterates over every descendant in document order, excluding `self`.
    ///
    /// 按文档顺序遍历所有后代节点（不包括自身）。
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

/// Pre-order iterator returned by [`Element::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descendants_in_document_order() {
        let root = Element::with_id("root")
            .child(
                Element::with_id("a")
                    .child(Element::with_id("a1"))
                    .child(Element::with_id("a2")),
            )
            .child(Element::with_id("b"));

        let ids: Vec<_> = root.descendants().filter_map(Element::id).collect();
        assert_eq!(ids, vec!["a", "a1", "a2", "b"]);
    }

    #[test]
    fn test_empty_attribute_is_absent() {
        let node = Element::new().attr("data-status", "").attr("data-x", "1");
        assert_eq!(node.attribute("data-status"), None);
        assert_eq!(node.attribute("data-x"), Some("1"));
        assert_eq!(node.attribute("missing"), None);
    }
}
