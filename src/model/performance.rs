//! 性能基准测试模块
//!
//! 用于测试大文本解析、嵌套展开、树投影与搜索重建的性能
//! 所有操作都在事件处理线程同步执行，耗时直接决定界面手感

use std::time::Instant;

use serde_json::{json, Value};

use crate::model::display_tree::project;
use crate::model::json_value::{expand, parse, serialize, FormatMode};
use crate::model::search::search;

/// 性能测试结果
#[derive(Debug)]
pub struct PerformanceResult {
    pub operation: String,
    pub duration_ms: u128,
    pub success: bool,
    pub details: String,
}

impl PerformanceResult {
    pub fn new(operation: &str, duration_ms: u128, success: bool, details: &str) -> Self {
        Self {
            operation: operation.to_string(),
            duration_ms,
            success,
            details: details.to_string(),
        }
    }
}

/// 生成大型测试JSON数据，约四分之一的字符串叶子本身是 JSON 文本
pub fn generate_large_json(depth: usize, width: usize) -> Value {
    fn create_nested_object(current_depth: usize, max_depth: usize, width: usize) -> Value {
        if current_depth >= max_depth {
            return json!("叶子节点值");
        }

        let mut obj = serde_json::Map::new();
        for i in 0..width {
            let key = format!("field_{}", i);
            let value = match i % 5 {
                0 => json!(format!("字符串值_{}", i)),
                // 嵌套 JSON 字符串，展开基准需要真实工作量
                1 => json!(format!("{{\"inner\":{}}}", i)),
                2 => json!(i % 2 == 0),
                3 => json!([1, 2, 3, i]),
                4 => create_nested_object(current_depth + 1, max_depth, width / 2),
                _ => json!(null),
            };
            obj.insert(key, value);
        }
        Value::Object(obj)
    }

    let mut root = serde_json::Map::new();
    root.insert(
        "metadata".to_string(),
        json!({
            "depth": depth,
            "width": width,
            "description": "性能测试用大型JSON文档"
        }),
    );
    root.insert("data".to_string(), create_nested_object(0, depth, width));

    let large_array: Vec<Value> = (0..width * 10)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("项目_{}", i),
                "payload": format!("[{},{}]", i, i + 1),
            })
        })
        .collect();
    root.insert("items".to_string(), json!(large_array));

    Value::Object(root)
}

/// 测试JSON解析性能
pub fn benchmark_parse(json_str: &str) -> PerformanceResult {
    let start = Instant::now();
    let parse_result = parse(json_str);
    let duration = start.elapsed();

    match parse_result {
        Ok(_) => PerformanceResult::new(
            "JSON解析",
            duration.as_millis(),
            true,
            &format!("解析了 {} 字节的JSON", json_str.len()),
        ),
        Err(e) => PerformanceResult::new(
            "JSON解析",
            duration.as_millis(),
            false,
            &format!("解析失败: {}", e),
        ),
    }
}

/// 测试嵌套字符串展开性能
pub fn benchmark_expand(value: &Value) -> PerformanceResult {
    let start = Instant::now();
    let expanded = expand(value.clone());
    let duration = start.elapsed();

    let changed = &expanded != value;
    PerformanceResult::new(
        "嵌套展开",
        duration.as_millis(),
        true,
        &format!("对全部字符串叶子尝试了再解析，有变化: {}", changed),
    )
}

/// 测试展示树投影性能
pub fn benchmark_project(value: &Value) -> PerformanceResult {
    fn count_nodes(node: &crate::model::display_tree::TreeNode) -> usize {
        1 + node.children.iter().map(count_nodes).sum::<usize>()
    }

    let start = Instant::now();
    let tree = project(value);
    let duration = start.elapsed();

    let total = count_nodes(&tree);
    PerformanceResult::new(
        "展示树投影",
        duration.as_millis(),
        total > 0,
        &format!("构建了 {} 个节点", total),
    )
}

/// 测试搜索会话重建性能（每次按键都会整体重建）
pub fn benchmark_search(text: &str, pattern: &str) -> PerformanceResult {
    let start = Instant::now();
    let session = search(text, pattern);
    let duration = start.elapsed();

    PerformanceResult::new(
        &format!("搜索重建: {}", pattern),
        duration.as_millis(),
        true,
        &format!("在 {} 字节中命中 {} 次", text.len(), session.matches.len()),
    )
}

/// 运行综合性能测试
pub fn run_performance_suite() -> Vec<PerformanceResult> {
    let mut results = Vec::new();

    let test_cases = [
        (3, 10), // 小型：深度3，宽度10
        (4, 20), // 中型：深度4，宽度20
        (5, 30), // 大型：深度5，宽度30
    ];

    for (depth, width) in test_cases {
        println!("测试规模：深度{}，宽度{}", depth, width);

        let start = Instant::now();
        let json_data = generate_large_json(depth, width);
        let generation_time = start.elapsed();
        results.push(PerformanceResult::new(
            &format!("数据生成({}x{})", depth, width),
            generation_time.as_millis(),
            true,
            &format!("生成了深度{}宽度{}的JSON", depth, width),
        ));

        let start = Instant::now();
        let json_str = serialize(&json_data, FormatMode::Pretty);
        let serialization_time = start.elapsed();
        results.push(PerformanceResult::new(
            &format!("格式化输出({}x{})", depth, width),
            serialization_time.as_millis(),
            true,
            &format!("输出了 {} 字节", json_str.len()),
        ));

        results.push(benchmark_parse(&json_str));
        results.push(benchmark_expand(&json_data));
        results.push(benchmark_project(&expand(json_data)));
        results.push(benchmark_search(&json_str, "项目_"));
    }

    results
}
