//! 流行度预测端到端示例
//!
//! 生成三个平台的模拟互动记录，经过提取、划分、标准化后
//! 训练逻辑回归分类器并报告训练/测试错误率。

use etl::{LabelMode, LabeledExample, PipelineBuilder, Platform};
use ml::{
    to_design_matrix, train_test_split, EngineConfig, Evaluator, LabeledPoint,
    LogisticRegression, Model, Scaler,
};
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== 流行度预测示例 ===\n");

    let config = EngineConfig::default();

    // 1. 生成模拟记录
    println!("1. 生成模拟互动记录...");
    let twitter = mock_twitter_records(60);
    let facebook = mock_facebook_records(60);
    let youtube = mock_youtube_records(60);
    println!("   每个平台 60 条\n");

    // 2. 提取标注样本
    println!("2. 提取标注样本...");
    let pipeline = PipelineBuilder::new()
        .with_label_mode(LabelMode::Logistic)
        .build();

    let batches: [(Platform, &[Value]); 3] = [
        (Platform::Twitter, &twitter),
        (Platform::Facebook, &facebook),
        (Platform::YouTube, &youtube),
    ];

    let mut examples: Vec<LabeledExample> = Vec::new();
    for (platform, records) in batches {
        let (extracted, report) = pipeline.extract_records(records, platform);
        println!(
            "   {}: {} 条样本（跳过 {}，预过滤 {}）",
            platform, report.extracted, report.skipped, report.filtered
        );
        examples.extend(extracted);
    }

    let positives = examples.iter().filter(|e| e.label == 1.0).count();
    println!(
        "   合计 {} 条样本，其中正类 {} 条\n",
        examples.len(),
        positives
    );

    // 3. 划分训练/测试集
    println!(
        "3. 划分训练/测试集 ({}% / {}%, seed={})...",
        (config.train_ratio * 100.0) as u32,
        ((1.0 - config.train_ratio) * 100.0) as u32,
        config.random_seed
    );
    let points: Vec<LabeledPoint> = examples
        .iter()
        .map(|e| LabeledPoint::new(e.label, e.features.to_vec()))
        .collect();
    let (train, test) = train_test_split(&points, config.train_ratio, config.random_seed)?;
    println!("   训练集 {} 条，测试集 {} 条\n", train.len(), test.len());

    // 4. 标准化并训练
    println!("4. 训练逻辑回归模型...");
    let (x_train, y_train) = to_design_matrix(&train)?;
    let (x_test, y_test) = to_design_matrix(&test)?;

    let (scaler, x_train) = Scaler::fit_transform(&x_train)?;
    let x_test = scaler.transform(&x_test)?;

    let mut model = LogisticRegression::default();
    model.train(&x_train, &y_train).await?;
    println!("   ✓ 训练完成\n");

    // 5. 评估
    println!("5. 评估:");
    let train_preds = model.predict_labels(&x_train)?;
    let test_preds = model.predict_labels(&x_test)?;

    println!(
        "   Train Error = {:.4}",
        Evaluator::error_rate(&y_train, &train_preds)
    );
    println!(
        "   Test Error = {:.4}",
        Evaluator::error_rate(&y_test, &test_preds)
    );

    let metrics = Evaluator::classification_report(&y_test, &test_preds);
    println!("   测试集准确率: {:.4}", metrics.accuracy);
    println!("   精确率: {:.4}  召回率: {:.4}  F1: {:.4}", metrics.precision, metrics.recall, metrics.f1);

    println!("\n=== 示例完成 ===");
    Ok(())
}

/// 历史快照落在创建后 1 ~ 20 小时之间
fn history_timestamp(index: usize) -> String {
    format!("2021-01-01T{:02}:30:00.000000", 1 + index % 20)
}

fn mock_twitter_records(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            // 转发数横跨 158 的阈值，约一半正类
            let retweets = 20.0 + (i as f64) * 5.0;
            let text = if i % 2 == 0 {
                "this clip is amazing, love it"
            } else {
                "boring repost, waste of my feed"
            };

            json!({
                "tweet": {
                    "orig_retweet_count": retweets,
                    "orig_video_length_ms": 5000.0 + (i as f64) * 1000.0,
                    "orig_favorite_count": retweets * 1.8,
                    "orig_text": text,
                    "orig_created_at": "2021-01-01T00:00:00.000000",
                    "rt_history": [
                        { "rt_created_at": history_timestamp(i) },
                    ],
                },
            })
        })
        .collect()
}

fn mock_facebook_records(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let likes = 100.0 + (i as f64) * 15.0;
            let text = if i % 3 == 0 {
                "wonderful moment with the best people"
            } else {
                "disappointing stream, broken audio"
            };

            json!({
                "total_likes": likes,
                "length": 40.0 + (i as f64) * 3.0,
                "total_comments": likes / 12.0,
                "description": text,
                "created_time": "2021-01-01T00:00:00.000000",
                "history": [
                    { "timestamp": history_timestamp(i) },
                ],
            })
        })
        .collect()
}

fn mock_youtube_records(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            let views = 10_000.0 + (i as f64) * 1_500.0;
            let text = if i % 2 == 0 {
                "incredible video, instant favorite"
            } else {
                "terrible editing, really annoying"
            };

            json!({
                "items": [{
                    "statistics": {
                        // YouTube 的统计字段以字符串返回
                        "viewCount": format!("{}", views as u64),
                        "favoriteCount": format!("{}", (views / 90.0) as u64),
                    },
                    "contentDetails": { "duration": format!("{}", 120 + i * 7) },
                    "snippet": {
                        "publishedAt": "2021-01-01T00:00:00.000000",
                        "description": text,
                    },
                    "stats_history": [
                        { "timestamp": history_timestamp(i) },
                    ],
                }],
            })
        })
        .collect()
}
