//! # ML - 流行度分类器训练引擎
//!
//! 消费 (标签, 特征向量) 样本对，训练并评估二分类流行度模型。
//! 上游的特征提取由 etl crate 负责，本 crate 只依赖样本对的
//! 向量布局。
//!
//! ## 主要模块
//!
//! - `data`: 样本对、确定性训练/测试集划分、设计矩阵转换
//! - `preprocessing`: 特征标准化
//! - `models`: 训练器接口与梯度下降实现
//! - `evaluation`: 分类与回归评估指标

pub mod data;
pub mod evaluation;
pub mod models;
pub mod preprocessing;
pub mod types;

pub use data::{to_design_matrix, train_test_split, LabeledPoint};
pub use evaluation::Evaluator;
pub use models::{LinearRegression, LogisticRegression, Model};
pub use preprocessing::Scaler;
pub use types::{Metrics, MlError, MlResult};

/// 训练引擎配置
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct EngineConfig {
    /// 训练集比例
    pub train_ratio: f64,
    /// 划分用的随机种子
    pub random_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            train_ratio: 0.8,
            random_seed: 0,
        }
    }
}
