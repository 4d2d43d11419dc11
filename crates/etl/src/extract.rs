//! 特征与标签提取模块

use crate::time::{hours_between, parse_timestamp};
use crate::types::{EtlError, EtlResult, LabelMode, LabeledExample, Platform};
use chrono::NaiveDateTime;
use serde_json::Value;

/// 情感分数在标注记录上的 JSON Pointer 路径
const SENTIMENT_POINTER: &str = "/sentiment";

/// 单个平台的字段映射（JSON Pointer 形式）
struct FieldMap {
    /// 主互动计数（决定流行度标签）
    primary: &'static str,
    /// 内容时长
    duration: &'static str,
    /// 时长换算系数（Twitter 为毫秒 → 秒）
    duration_scale: f64,
    /// 次要互动计数
    secondary: &'static str,
    /// 历史快照序列
    history: &'static str,
    /// 快照条目内的时间戳字段名
    history_timestamp: &'static str,
    /// 内容创建时间
    created_at: &'static str,
}

impl Platform {
    fn field_map(&self) -> FieldMap {
        match self {
            Platform::Twitter => FieldMap {
                primary: "/tweet/orig_retweet_count",
                duration: "/tweet/orig_video_length_ms",
                duration_scale: 1.0 / 1000.0,
                secondary: "/tweet/orig_favorite_count",
                history: "/tweet/rt_history",
                history_timestamp: "rt_created_at",
                created_at: "/tweet/orig_created_at",
            },
            Platform::Facebook => FieldMap {
                primary: "/total_likes",
                duration: "/length",
                duration_scale: 1.0,
                secondary: "/total_comments",
                history: "/history",
                history_timestamp: "timestamp",
                created_at: "/created_time",
            },
            Platform::YouTube => FieldMap {
                primary: "/items/0/statistics/viewCount",
                duration: "/items/0/contentDetails/duration",
                duration_scale: 1.0,
                secondary: "/items/0/statistics/favoriteCount",
                history: "/items/0/stats_history",
                history_timestamp: "timestamp",
                created_at: "/items/0/snippet/publishedAt",
            },
        }
    }
}

/// 过滤缺少必需字段的 YouTube 记录
///
/// items 为空、首个条目缺少 contentDetails、或 contentDetails
/// 缺少 duration 时拒绝。Twitter / Facebook 没有对应的预过滤，
/// 字段缺失在提取时报 `MissingField`。
pub fn is_valid_youtube_record(record: &Value) -> bool {
    let first = match record.pointer("/items/0") {
        Some(item) => item,
        None => return false,
    };

    match first.get("contentDetails") {
        Some(details) => details.get("duration").is_some(),
        None => false,
    }
}

fn missing(path: &str) -> EtlError {
    EtlError::MissingField {
        path: path.to_string(),
    }
}

/// 读取数值字段
///
/// 接受 JSON 数字或数字字符串（YouTube 的统计字段以字符串返回）。
fn field_f64(record: &Value, path: &str) -> EtlResult<f64> {
    let value = record.pointer(path).ok_or_else(|| missing(path))?;
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| missing(path)),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| missing(path)),
        _ => Err(missing(path)),
    }
}

fn field_str<'a>(record: &'a Value, path: &str) -> EtlResult<&'a str> {
    record
        .pointer(path)
        .and_then(Value::as_str)
        .ok_or_else(|| missing(path))
}

/// 取出时间上最新的历史快照时间戳
///
/// 按解析后的时刻取最大值；输入按时间有序时等价于取末元素，
/// 时刻相同时保留靠后的条目。
fn latest_history_timestamp(record: &Value, map: &FieldMap) -> EtlResult<String> {
    let entries = record
        .pointer(map.history)
        .and_then(Value::as_array)
        .ok_or_else(|| missing(map.history))?;

    let timestamp_path = format!("{}/{}", map.history, map.history_timestamp);
    let mut latest: Option<(NaiveDateTime, &str)> = None;

    for entry in entries {
        let raw = entry
            .get(map.history_timestamp)
            .and_then(Value::as_str)
            .ok_or_else(|| missing(&timestamp_path))?;
        let instant = parse_timestamp(raw)?;

        if latest.map_or(true, |(best, _)| instant >= best) {
            latest = Some((instant, raw));
        }
    }

    let (_, raw) = latest.ok_or_else(|| EtlError::EmptyHistory {
        path: map.history.to_string(),
    })?;
    Ok(raw.to_string())
}

/// 从标注记录导出标注样本
///
/// 纯函数，对平台标签做多态分发；同一条记录总是得到同一个结果。
/// 特征顺序固定为 `[时长(秒), 次要互动数, 增长率, 情感分数]`。
pub fn extract_example(
    record: &Value,
    platform: Platform,
    mode: LabelMode,
) -> EtlResult<LabeledExample> {
    let map = platform.field_map();

    let primary = field_f64(record, map.primary)?;
    let label = match mode {
        LabelMode::Linear => primary,
        LabelMode::Logistic => {
            if primary >= platform.threshold() {
                1.0
            } else {
                0.0
            }
        }
    };

    let duration = field_f64(record, map.duration)? * map.duration_scale;
    let secondary = field_f64(record, map.secondary)?;
    let sentiment = field_f64(record, SENTIMENT_POINTER)?;

    let latest = latest_history_timestamp(record, &map)?;
    let created = field_str(record, map.created_at)?;
    let elapsed_hours = hours_between(&latest, created)?;
    if elapsed_hours == 0.0 {
        return Err(EtlError::ZeroElapsed);
    }
    let growth_rate = primary / elapsed_hours;

    Ok(LabeledExample {
        label,
        features: [duration, secondary, growth_rate, sentiment],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn twitter_record(retweets: f64) -> Value {
        json!({
            "tweet": {
                "orig_retweet_count": retweets,
                "orig_video_length_ms": 30000.0,
                "orig_favorite_count": 10.0,
                "orig_created_at": "2021-01-01T00:00:00.000000",
                "rt_history": [
                    { "rt_created_at": "2021-01-01T01:00:00.000000" },
                ],
            },
            "sentiment": 0.5,
        })
    }

    #[test]
    fn test_twitter_end_to_end_scenario() {
        let record = twitter_record(200.0);
        let example = extract_example(&record, Platform::Twitter, LabelMode::Logistic).unwrap();

        // growth = 200 / 1.0, 时长 30000ms → 30s
        assert_eq!(example.features, [30.0, 10.0, 200.0, 0.5]);
        assert_eq!(example.label, 1.0);
    }

    #[test]
    fn test_logistic_threshold_is_inclusive() {
        let at_threshold =
            extract_example(&twitter_record(158.0), Platform::Twitter, LabelMode::Logistic)
                .unwrap();
        assert_eq!(at_threshold.label, 1.0);

        let below =
            extract_example(&twitter_record(157.999), Platform::Twitter, LabelMode::Logistic)
                .unwrap();
        assert_eq!(below.label, 0.0);
    }

    #[test]
    fn test_linear_mode_keeps_continuous_label() {
        let example =
            extract_example(&twitter_record(200.0), Platform::Twitter, LabelMode::Linear).unwrap();
        assert_eq!(example.label, 200.0);
    }

    #[test]
    fn test_facebook_extraction() {
        let record = json!({
            "total_likes": 500.0,
            "length": 120.0,
            "total_comments": 7.0,
            "created_time": "2021-03-01T00:00:00.000000",
            "history": [
                { "timestamp": "2021-03-01T01:00:00.000000" },
                { "timestamp": "2021-03-01T02:00:00.000000" },
            ],
            "sentiment": -0.25,
        });

        let example = extract_example(&record, Platform::Facebook, LabelMode::Logistic).unwrap();
        // Facebook 时长已经是秒；500 likes / 2h = 250
        assert_eq!(example.features, [120.0, 7.0, 250.0, -0.25]);
        assert_eq!(example.label, 1.0); // 500 >= 496
    }

    #[test]
    fn test_youtube_extraction_with_string_counts() {
        let record = json!({
            "items": [{
                "statistics": { "viewCount": "60000", "favoriteCount": "42" },
                "contentDetails": { "duration": "300" },
                "snippet": { "publishedAt": "2021-06-01T00:00:00.000000" },
                "stats_history": [
                    { "timestamp": "2021-06-01T10:00:00.000000" },
                ],
            }],
            "sentiment": 0.1,
        });

        let example = extract_example(&record, Platform::YouTube, LabelMode::Logistic).unwrap();
        assert_eq!(example.features, [300.0, 42.0, 6000.0, 0.1]);
        assert_eq!(example.label, 1.0); // 60000 >= 50790
    }

    #[test]
    fn test_feature_order_is_fixed_across_platforms() {
        let twitter =
            extract_example(&twitter_record(200.0), Platform::Twitter, LabelMode::Logistic)
                .unwrap();
        // [时长, 次要互动数, 增长率, 情感分数]
        assert_eq!(twitter.features[0], 30.0);
        assert_eq!(twitter.features[1], 10.0);
        assert_eq!(twitter.features[2], 200.0);
        assert_eq!(twitter.features[3], 0.5);
    }

    #[test]
    fn test_latest_history_entry_wins_even_unordered() {
        let record = json!({
            "tweet": {
                "orig_retweet_count": 100.0,
                "orig_video_length_ms": 10000.0,
                "orig_favorite_count": 1.0,
                "orig_created_at": "2021-01-01T00:00:00.000000",
                "rt_history": [
                    { "rt_created_at": "2021-01-01T04:00:00.000000" },
                    { "rt_created_at": "2021-01-01T02:00:00.000000" },
                ],
            },
            "sentiment": 0.0,
        });

        let example = extract_example(&record, Platform::Twitter, LabelMode::Linear).unwrap();
        // 最新快照是 4 小时处的那条
        assert_eq!(example.features[2], 25.0);
    }

    #[test]
    fn test_zero_elapsed_time_is_an_error() {
        let record = json!({
            "tweet": {
                "orig_retweet_count": 100.0,
                "orig_video_length_ms": 10000.0,
                "orig_favorite_count": 1.0,
                "orig_created_at": "2021-01-01T00:00:00.000000",
                "rt_history": [
                    { "rt_created_at": "2021-01-01T00:00:00.000000" },
                ],
            },
            "sentiment": 0.0,
        });

        let err = extract_example(&record, Platform::Twitter, LabelMode::Linear).unwrap_err();
        assert!(matches!(err, EtlError::ZeroElapsed));
    }

    #[test]
    fn test_missing_field_names_the_path() {
        let record = json!({ "tweet": { "orig_video_length_ms": 1000.0 } });
        let err = extract_example(&record, Platform::Twitter, LabelMode::Logistic).unwrap_err();
        assert!(matches!(
            err,
            EtlError::MissingField { ref path } if path == "/tweet/orig_retweet_count"
        ));
    }

    #[test]
    fn test_empty_history_is_an_error() {
        let record = json!({
            "tweet": {
                "orig_retweet_count": 100.0,
                "orig_video_length_ms": 10000.0,
                "orig_favorite_count": 1.0,
                "orig_created_at": "2021-01-01T00:00:00.000000",
                "rt_history": [],
            },
            "sentiment": 0.0,
        });

        let err = extract_example(&record, Platform::Twitter, LabelMode::Linear).unwrap_err();
        assert!(matches!(err, EtlError::EmptyHistory { .. }));
    }

    #[test]
    fn test_youtube_filter() {
        assert!(!is_valid_youtube_record(&json!({ "items": [] })));
        assert!(!is_valid_youtube_record(&json!({
            "items": [{ "statistics": {} }]
        })));
        assert!(!is_valid_youtube_record(&json!({
            "items": [{ "contentDetails": {} }]
        })));
        assert!(is_valid_youtube_record(&json!({
            "items": [{ "contentDetails": { "duration": "300" } }]
        })));
    }
}
