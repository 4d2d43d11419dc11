//! 时间戳差值工具

use crate::types::{EtlError, EtlResult};
use chrono::NaiveDateTime;

/// 秒级精度格式（带 `+` 偏移标记的时间戳截掉偏移后使用）
const SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
/// 微秒级精度格式
const MICROS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// 解析三种容忍格式之一的时间戳
///
/// 按顺序匹配第一条适用规则：
/// 1. 含 `+` 偏移标记 → 取 `+` 之前的部分按秒级格式解析；
/// 2. 含 `Z` UTC 标记 → 取 `Z` 之前的部分按微秒级格式解析；
/// 3. 其余 → 整串按微秒级格式解析。
pub fn parse_timestamp(value: &str) -> EtlResult<NaiveDateTime> {
    let parsed = if let Some((head, _)) = value.split_once('+') {
        NaiveDateTime::parse_from_str(head, SECONDS_FORMAT)
    } else if let Some((head, _)) = value.split_once('Z') {
        NaiveDateTime::parse_from_str(head, MICROS_FORMAT)
    } else {
        NaiveDateTime::parse_from_str(value, MICROS_FORMAT)
    };

    parsed.map_err(|_| EtlError::Timestamp {
        value: value.to_string(),
    })
}

/// 计算两个时间戳的绝对差值（小时）
///
/// 结果为 天数×24 + 秒数/3600，亚秒部分不参与。
/// 相同输入返回恰好 0.0，调用方在作除数前必须自行防护。
pub fn hours_between(a: &str, b: &str) -> EtlResult<f64> {
    let first = parse_timestamp(a)?;
    let second = parse_timestamp(b)?;
    let seconds = (first - second).num_seconds().abs();
    Ok(seconds as f64 / 3600.0)
}
