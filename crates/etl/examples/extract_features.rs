//! 特征提取示例
//!
//! 展示 过滤 → 情感标注 → 特征/标签提取 的完整流程

use etl::{LabelMode, PipelineBuilder, Platform};
use serde_json::{json, Value};

fn main() {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== 特征提取示例 ===\n");

    // 1. 创建提取管道
    println!("1. 创建提取管道 (logistic 标签模式)...");
    let pipeline = PipelineBuilder::new()
        .with_label_mode(LabelMode::Logistic)
        .build();
    println!("   ✓ 管道创建完成\n");

    // 2. 构造演示记录
    println!("2. 构造演示记录...");
    let twitter_records = vec![
        json!({
            "tweet": {
                "orig_retweet_count": 200.0,
                "orig_video_length_ms": 30000.0,
                "orig_favorite_count": 10.0,
                "orig_text": "this is amazing, best clip ever",
                "orig_created_at": "2021-01-01T00:00:00.000000",
                "rt_history": [
                    { "rt_created_at": "2021-01-01T01:00:00.000000" },
                ],
            },
        }),
        // 缺少必需字段，提取阶段会被排除并计数
        json!({ "tweet": { "orig_text": "empty shell" } }),
    ];

    let facebook_records = vec![json!({
        "total_likes": 120.0,
        "length": 95.0,
        "total_comments": 14.0,
        "description": "boring video, waste of time",
        "created_time": "2021-03-01T00:00:00.000000",
        "history": [
            { "timestamp": "2021-03-01T06:00:00.000000" },
        ],
    })];

    let youtube_records = vec![
        json!({
            "items": [{
                "statistics": { "viewCount": "81000", "favoriteCount": "230" },
                "contentDetails": { "duration": "412" },
                "snippet": {
                    "publishedAt": "2021-06-01T00:00:00.000000",
                    "description": "wonderful performance, loved it",
                },
                "stats_history": [
                    { "timestamp": "2021-06-02T00:00:00.000000" },
                ],
            }],
        }),
        // items 为空，会被预过滤拒绝
        json!({ "items": [] }),
    ];
    println!("   ✓ 三个平台共 5 条记录\n");

    // 3. 逐平台提取并合并
    println!("3. 提取标注样本...");
    let batches: [(Platform, &[Value]); 3] = [
        (Platform::Twitter, &twitter_records),
        (Platform::Facebook, &facebook_records),
        (Platform::YouTube, &youtube_records),
    ];

    let mut total = 0;
    for (platform, records) in batches {
        let (examples, report) = pipeline.extract_records(records, platform);

        println!(
            "   {}: {} 条样本（跳过 {}，预过滤 {}）",
            platform, report.extracted, report.skipped, report.filtered
        );
        for example in &examples {
            println!(
                "      label={:.1} features=[时长 {:.1}s, 次要互动 {:.0}, 增长率 {:.2}/h, 情感 {:.3}]",
                example.label,
                example.features[0],
                example.features[1],
                example.features[2],
                example.features[3]
            );
        }
        total += examples.len();
    }

    println!("\n=== 完成：共 {} 条标注样本 ===", total);
    println!("\n提示:");
    println!("  - 样本可交给 ml crate 做 80/20 划分与逻辑回归训练");
    println!("  - 真实数据用 PipelineBuilder 指定 JSON Lines 文件路径后调用 run()");
}
