//! 模型接口与实现

pub mod linear;

pub use linear::{LinearRegression, LogisticRegression};

use crate::types::MlResult;
use async_trait::async_trait;
use ndarray::{Array1, Array2};

/// 训练器接口
///
/// 消费 (标签, 特征向量) 样本对；`predict` 对每行返回一个分数，
/// 分数的含义由具体模型决定（概率或连续预测值）。
#[async_trait]
pub trait Model: Send + Sync {
    /// 训练模型
    async fn train(&mut self, x_train: &Array2<f64>, y_train: &Array1<f64>) -> MlResult<()>;

    /// 预测
    async fn predict(&self, x: &Array2<f64>) -> MlResult<Array1<f64>>;

    /// 保存模型
    async fn save(&self, path: &str) -> MlResult<()>;

    /// 加载模型
    async fn load(path: &str) -> MlResult<Self>
    where
        Self: Sized;
}
