//! JSON Lines 记录加载模块

use crate::types::EtlResult;
use serde_json::Value;
use std::path::Path;

/// 单个文件的加载结果
#[derive(Debug, Default)]
pub struct Loaded {
    /// 成功解析的原始记录
    pub records: Vec<Value>,
    /// 无法解析而被丢弃的行数
    pub malformed: usize,
}

/// 从 JSON Lines 文件加载原始记录
///
/// 空行跳过；解析失败的行计数后丢弃，不中断整个文件。
/// 文件本身不可读仍然报错。
pub async fn load_jsonl(path: impl AsRef<Path>) -> EtlResult<Loaded> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path).await?;

    let mut loaded = Loaded::default();
    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(record) => loaded.records.push(record),
            Err(e) => {
                tracing::warn!(
                    "Skipping malformed line {} in {}: {}",
                    number + 1,
                    path.display(),
                    e
                );
                loaded.malformed += 1;
            }
        }
    }

    tracing::info!(
        "Loaded {} records from {} ({} malformed lines)",
        loaded.records.len(),
        path.display(),
        loaded.malformed
    );
    Ok(loaded)
}
