//! 性能基准驱动：跑完整套核心操作基准并打印结果

use json_geshihua::model::performance::run_performance_suite;

fn main() {
    let results = run_performance_suite();

    println!("\n==== 性能测试结果 ====");
    for r in &results {
        let flag = if r.success { "通过" } else { "失败" };
        println!("[{}] {} - {}ms - {}", flag, r.operation, r.duration_ms, r.details);
    }

    let failed = results.iter().filter(|r| !r.success).count();
    println!("共 {} 项，失败 {} 项", results.len(), failed);
}
