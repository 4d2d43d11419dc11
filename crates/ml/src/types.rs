//! 核心类型定义

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type MlResult<T> = Result<T, MlError>;

#[derive(Debug, Error)]
pub enum MlError {
    #[error("数据预处理错误: {0}")]
    Preprocessing(String),

    #[error("模型训练错误: {0}")]
    Training(String),

    #[error("模型预测错误: {0}")]
    Prediction(String),

    #[error("数据维度不匹配: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("无效的配置: {0}")]
    InvalidConfig(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serialization(String),
}

/// 二分类评估指标
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    /// 错误率（预测与标签不一致的比例）
    pub error_rate: f64,
    /// 准确率
    pub accuracy: f64,
    /// 精确率
    pub precision: f64,
    /// 召回率
    pub recall: f64,
    /// F1 分数
    pub f1: f64,
}

impl Metrics {
    pub fn new(error_rate: f64, accuracy: f64, precision: f64, recall: f64, f1: f64) -> Self {
        Self {
            error_rate,
            accuracy,
            precision,
            recall,
            f1,
        }
    }
}
