//! 展示树：值到树的投影，以及选中子树回推 JSON 的启发式重建

use serde_json::{Map, Value};

/// 树节点类型（与 UI 展示解耦）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Object,
    Array,
    Scalar,
}

/// 节点携带的数据：容器节点存原始值（重建捷径），标量节点存键值对
#[derive(Debug, Clone, PartialEq)]
pub enum NodePayload {
    Container(Value),
    Scalar { key: Option<String>, value: Value },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// 节点类型，构造后不再变化
    pub kind: NodeKind,
    /// 展示标签：对象子节点为键名，数组子节点为 "[i]"，根节点无标签
    pub label: Option<String>,
    pub payload: NodePayload,
    /// 子节点，顺序与对象插入顺序 / 数组下标一致
    pub children: Vec<TreeNode>,
    /// 容器节点默认展开
    pub expanded: bool,
}

impl TreeNode {
    /// 按子节点下标路径定位节点（空路径即自身）
    pub fn node_at(&self, path: &[usize]) -> Option<&TreeNode> {
        let mut node = self;
        for &idx in path {
            node = node.children.get(idx)?;
        }
        Some(node)
    }

    /// 行展示文本：标量为 "键: 值"（无键则只有值），容器为标签
    pub fn display_text(&self) -> String {
        match &self.payload {
            NodePayload::Scalar { key: Some(k), value } => format!("{}: {}", k, preview_of(value)),
            NodePayload::Scalar { key: None, value } => preview_of(value),
            NodePayload::Container(_) => self.label.clone().unwrap_or_default(),
        }
    }
}

/// 标量的轻量预览（长字符串截断）
fn preview_of(value: &Value) -> String {
    match value {
        Value::String(s) => {
            if s.chars().count() > 32 {
                let truncated: String = s.chars().take(32).collect();
                format!("{}...", truncated)
            } else {
                s.clone()
            }
        }
        other => other.to_string(),
    }
}

/// 将（已展开的）值投影为展示树，每个值对应一个节点
pub fn project(value: &Value) -> TreeNode {
    project_labeled(value, None)
}

fn project_labeled(value: &Value, label: Option<String>) -> TreeNode {
    match value {
        Value::Object(map) => TreeNode {
            kind: NodeKind::Object,
            payload: NodePayload::Container(value.clone()),
            children: map
                .iter()
                .map(|(k, v)| project_labeled(v, Some(k.clone())))
                .collect(),
            expanded: true,
            label,
        },
        Value::Array(arr) => TreeNode {
            kind: NodeKind::Array,
            payload: NodePayload::Container(value.clone()),
            children: arr
                .iter()
                .enumerate()
                .map(|(i, v)| project_labeled(v, Some(format!("[{}]", i))))
                .collect(),
            expanded: true,
            label,
        },
        scalar => TreeNode {
            kind: NodeKind::Scalar,
            payload: NodePayload::Scalar {
                key: label.clone(),
                value: scalar.clone(),
            },
            children: Vec::new(),
            expanded: false,
            label,
        },
    }
}

/// 从选中节点回推 JSON 值
///
/// 数组/对象的区分只看子节点标签是否全部以 "[" 开头，是启发式而非
/// 投影的精确逆：键名本身以 "[" 开头的对象会被判成数组，行为保持原样。
pub fn reconstruct(node: &TreeNode) -> Value {
    if node.children.is_empty() {
        return match &node.payload {
            NodePayload::Scalar { key: Some(k), value } => {
                let mut map = Map::new();
                map.insert(k.clone(), value.clone());
                Value::Object(map)
            }
            NodePayload::Scalar { key: None, value } => value.clone(),
            // 空对象/空数组：直接取构造时存下的原值
            NodePayload::Container(v) => v.clone(),
        };
    }

    let is_array = node
        .children
        .iter()
        .all(|c| c.label.as_deref().map_or(false, |l| l.starts_with('[')));

    if is_array {
        // 重建数组时忽略下标标签，标量元素取裸值而非 {"[i]": v} 包装
        Value::Array(
            node.children
                .iter()
                .map(|c| match &c.payload {
                    NodePayload::Scalar { value, .. } if c.children.is_empty() => value.clone(),
                    _ => reconstruct(c),
                })
                .collect(),
        )
    } else {
        let mut map = Map::new();
        for child in &node.children {
            let label = child.label.as_deref().unwrap_or_default();
            let key = match label.split_once(':') {
                Some((head, _)) => head,
                None => label,
            };
            let value = match reconstruct(child) {
                // 叶子重建出的 {key: value} 在父对象里再包一层会重复，拆开
                Value::Object(mut inner) if inner.len() == 1 && inner.contains_key(key) => {
                    inner.remove(key).unwrap_or_default()
                }
                other => other,
            };
            map.insert(key.to_string(), value);
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_object_structure() {
        let v = json!({"a": 1, "b": [true, null]});
        let tree = project(&v);

        assert_eq!(tree.kind, NodeKind::Object);
        assert_eq!(tree.label, None, "根节点不带标签");
        assert!(tree.expanded, "容器节点默认展开");
        assert_eq!(tree.children.len(), 2);

        let a = &tree.children[0];
        assert_eq!(a.kind, NodeKind::Scalar);
        assert_eq!(a.label.as_deref(), Some("a"));
        assert!(a.children.is_empty(), "标量节点不应有子节点");

        let b = &tree.children[1];
        assert_eq!(b.kind, NodeKind::Array);
        assert_eq!(b.label.as_deref(), Some("b"));
        let labels: Vec<_> = b.children.iter().map(|c| c.label.clone().unwrap()).collect();
        assert_eq!(labels, vec!["[0]", "[1]"], "数组子节点标签应为下标形式");
    }

    #[test]
    fn test_project_scalar_payload() {
        let v = json!({"name": "张三"});
        let tree = project(&v);
        match &tree.children[0].payload {
            NodePayload::Scalar { key, value } => {
                assert_eq!(key.as_deref(), Some("name"));
                assert_eq!(value, &json!("张三"));
            }
            other => panic!("标量节点的载荷类型不对: {:?}", other),
        }
    }

    #[test]
    fn test_reconstruct_inverts_projection() {
        let v = json!({
            "user": {"name": "李四", "age": 30, "tags": ["a", "b"]},
            "items": [1, {"id": 2}, [3, 4]],
            "empty_obj": {},
            "empty_arr": [],
            "flag": true,
            "nothing": null
        });
        assert_eq!(reconstruct(&project(&v)), v, "无特殊键名时重建应还原原值");
    }

    #[test]
    fn test_reconstruct_bare_scalar_root() {
        assert_eq!(reconstruct(&project(&json!(42))), json!(42));
        assert_eq!(reconstruct(&project(&json!("文本"))), json!("文本"));
    }

    #[test]
    fn test_reconstruct_keyed_leaf_wraps() {
        let tree = project(&json!({"a": 1}));
        // 单独选中叶子节点时，带键的叶子包成单键对象
        assert_eq!(reconstruct(&tree.children[0]), json!({"a": 1}));
    }

    #[test]
    fn test_reconstruct_array_element_selection() {
        let tree = project(&json!([10, 20]));
        // 数组元素的标签 "[0]" 当作键名包装，与点击行为一致
        assert_eq!(reconstruct(&tree.children[0]), json!({"[0]": 10}));
    }

    #[test]
    fn test_bracket_prefixed_key_reconstructs_as_array() {
        // 已知局限：键名全部以 "[" 开头的对象会被判成数组，键名随之丢失
        let v = json!({"[x]": 1});
        assert_eq!(reconstruct(&project(&v)), json!([1]));
    }

    #[test]
    fn test_bracket_prefixed_key_with_sibling_stays_object() {
        // 只要有一个键不以 "[" 开头，整体仍按对象重建
        let v = json!({"[x]": 1, "y": 2});
        assert_eq!(reconstruct(&project(&v)), v);
    }

    #[test]
    fn test_colon_in_key_truncates_derived_key() {
        // 键名含冒号时，派生键取冒号前的部分，保持既有行为
        let v = json!({"a:b": 1});
        assert_eq!(reconstruct(&project(&v)), json!({"a": {"a:b": 1}}));
    }

    #[test]
    fn test_node_at_paths() {
        let v = json!({"a": {"b": [1, 2]}});
        let tree = project(&v);

        assert_eq!(tree.node_at(&[]).map(|n| n.kind), Some(NodeKind::Object));
        let b = tree.node_at(&[0, 0]).expect("路径 [0,0] 应命中 b 数组");
        assert_eq!(b.label.as_deref(), Some("b"));
        assert_eq!(tree.node_at(&[0, 0, 1]).map(|n| n.kind), Some(NodeKind::Scalar));
        assert!(tree.node_at(&[5]).is_none(), "越界路径应返回 None");
    }

    #[test]
    fn test_display_text() {
        let tree = project(&json!({"n": 7, "s": "x", "obj": {}}));
        assert_eq!(tree.children[0].display_text(), "n: 7");
        assert_eq!(tree.children[1].display_text(), "s: x");
        assert_eq!(tree.children[2].display_text(), "obj");

        let long = "很".repeat(40);
        let tree = project(&json!({ "t": long }));
        assert!(tree.children[0].display_text().ends_with("..."), "长字符串预览应截断");
    }
}
