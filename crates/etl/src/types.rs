//! 核心类型定义

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type EtlResult<T> = Result<T, EtlError>;

#[derive(Debug, Error)]
pub enum EtlError {
    #[error("无法解析时间戳: {value}")]
    Timestamp { value: String },

    #[error("缺少字段: {path}")]
    MissingField { path: String },

    #[error("历史快照序列为空: {path}")]
    EmptyHistory { path: String },

    #[error("创建时间与最新快照之间的间隔为 0，无法计算增长率")]
    ZeroElapsed,

    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 记录来源平台
///
/// 三个平台的记录没有共同的 schema，只能通过此标签区分；
/// 每个变体携带自己的字段映射（见 `extract` 模块）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Twitter,
    Facebook,
    YouTube,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Twitter, Platform::Facebook, Platform::YouTube];

    /// logistic 模式下的流行度阈值（高侧取闭区间）
    ///
    /// 阈值为各平台手工调出的常数：Twitter 按转发数、
    /// Facebook 按总点赞数、YouTube 按播放量。
    pub fn threshold(&self) -> f64 {
        match self {
            Platform::Twitter => 158.0,
            Platform::Facebook => 496.0,
            Platform::YouTube => 50790.0,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Twitter => write!(f, "Twitter"),
            Platform::Facebook => write!(f, "Facebook"),
            Platform::YouTube => write!(f, "YouTube"),
        }
    }
}

/// 标签模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelMode {
    /// 保留连续的流行度计数
    Linear,
    /// 按平台阈值二值化为 0.0 / 1.0
    Logistic,
}

/// 特征向量维数
pub const FEATURE_COUNT: usize = 4;

/// 标注样本
///
/// 特征顺序固定且有意义，是下游模型的按位输入：
/// `[时长(秒), 次要互动数, 增长率, 情感分数]`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledExample {
    pub label: f64,
    pub features: [f64; FEATURE_COUNT],
}

/// 管道配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Twitter 记录文件（JSON Lines）
    pub twitter_path: String,
    /// Facebook 记录文件（JSON Lines）
    pub facebook_path: String,
    /// YouTube 记录文件（JSON Lines）
    pub youtube_path: String,
    /// 标签模式
    pub label_mode: LabelMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            twitter_path: "data/twitter.jsonl".to_string(),
            facebook_path: "data/facebook.jsonl".to_string(),
            youtube_path: "data/youtube.jsonl".to_string(),
            label_mode: LabelMode::Logistic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Platform::Twitter.threshold(), 158.0);
        assert_eq!(Platform::Facebook.threshold(), 496.0);
        assert_eq!(Platform::YouTube.threshold(), 50790.0);
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::YouTube.to_string(), "YouTube");
        assert_eq!(Platform::ALL.len(), 3);
    }

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.label_mode, LabelMode::Logistic);
        assert!(config.twitter_path.ends_with(".jsonl"));
    }
}
