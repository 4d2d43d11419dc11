//! 梯度下降线性模型

use crate::models::Model;
use crate::types::{MlError, MlResult};
use async_trait::async_trait;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn check_training_input(x: &Array2<f64>, y: &Array1<f64>) -> MlResult<()> {
    if x.nrows() == 0 {
        return Err(MlError::Training("训练数据为空".to_string()));
    }
    if x.nrows() != y.len() {
        return Err(MlError::DimensionMismatch {
            expected: x.nrows(),
            actual: y.len(),
        });
    }
    Ok(())
}

/// 逻辑回归二分类模型（批量梯度下降）
///
/// 标签取 0.0 / 1.0；`predict` 返回正类概率。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    learning_rate: f64,
    max_iterations: usize,
    tolerance: f64,
    weights: Option<Array1<f64>>,
    bias: f64,
}

impl LogisticRegression {
    pub fn new(learning_rate: f64, max_iterations: usize) -> Self {
        Self {
            learning_rate,
            max_iterations,
            tolerance: 1e-6,
            weights: None,
            bias: 0.0,
        }
    }

    /// 将预测概率按 0.5 阈值二值化为 0.0 / 1.0
    pub fn predict_labels(&self, x: &Array2<f64>) -> MlResult<Array1<f64>> {
        let probabilities = self.decision(x)?;
        Ok(probabilities.mapv(|p| if p >= 0.5 { 1.0 } else { 0.0 }))
    }

    fn decision(&self, x: &Array2<f64>) -> MlResult<Array1<f64>> {
        let weights = self
            .weights
            .as_ref()
            .ok_or_else(|| MlError::Prediction("模型未训练".to_string()))?;

        if x.ncols() != weights.len() {
            return Err(MlError::DimensionMismatch {
                expected: weights.len(),
                actual: x.ncols(),
            });
        }

        Ok((x.dot(weights) + self.bias).mapv(sigmoid))
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(0.1, 1000)
    }
}

#[async_trait]
impl Model for LogisticRegression {
    async fn train(&mut self, x_train: &Array2<f64>, y_train: &Array1<f64>) -> MlResult<()> {
        check_training_input(x_train, y_train)?;

        let n_samples = x_train.nrows() as f64;
        let mut weights = Array1::<f64>::zeros(x_train.ncols());
        let mut bias = 0.0;

        for iteration in 0..self.max_iterations {
            let predictions = (x_train.dot(&weights) + bias).mapv(sigmoid);
            let residual = &predictions - y_train;

            let grad_w = x_train.t().dot(&residual) / n_samples;
            let grad_b = residual.sum() / n_samples;

            weights = weights - &grad_w * self.learning_rate;
            bias -= grad_b * self.learning_rate;

            let grad_norm = grad_w.mapv(|g| g * g).sum().sqrt();
            if grad_norm < self.tolerance {
                tracing::debug!("Logistic regression converged after {} iterations", iteration + 1);
                break;
            }
        }

        self.weights = Some(weights);
        self.bias = bias;
        Ok(())
    }

    async fn predict(&self, x: &Array2<f64>) -> MlResult<Array1<f64>> {
        self.decision(x)
    }

    async fn save(&self, path: &str) -> MlResult<()> {
        let serialized =
            bincode::serialize(self).map_err(|e| MlError::Serialization(e.to_string()))?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    async fn load(path: &str) -> MlResult<Self> {
        let data = std::fs::read(path)?;
        bincode::deserialize(&data).map_err(|e| MlError::Serialization(e.to_string()))
    }
}

/// 线性回归模型（批量梯度下降，用于连续流行度标签）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    learning_rate: f64,
    max_iterations: usize,
    tolerance: f64,
    weights: Option<Array1<f64>>,
    bias: f64,
}

impl LinearRegression {
    pub fn new(learning_rate: f64, max_iterations: usize) -> Self {
        Self {
            learning_rate,
            max_iterations,
            tolerance: 1e-8,
            weights: None,
            bias: 0.0,
        }
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new(0.01, 5000)
    }
}

#[async_trait]
impl Model for LinearRegression {
    async fn train(&mut self, x_train: &Array2<f64>, y_train: &Array1<f64>) -> MlResult<()> {
        check_training_input(x_train, y_train)?;

        let n_samples = x_train.nrows() as f64;
        let mut weights = Array1::<f64>::zeros(x_train.ncols());
        let mut bias = 0.0;

        for iteration in 0..self.max_iterations {
            let predictions = x_train.dot(&weights) + bias;
            let residual = &predictions - y_train;

            let grad_w = x_train.t().dot(&residual) * (2.0 / n_samples);
            let grad_b = residual.sum() * 2.0 / n_samples;

            weights = weights - &grad_w * self.learning_rate;
            bias -= grad_b * self.learning_rate;

            let grad_norm = grad_w.mapv(|g| g * g).sum().sqrt();
            if grad_norm < self.tolerance {
                tracing::debug!("Linear regression converged after {} iterations", iteration + 1);
                break;
            }
        }

        self.weights = Some(weights);
        self.bias = bias;
        Ok(())
    }

    async fn predict(&self, x: &Array2<f64>) -> MlResult<Array1<f64>> {
        let weights = self
            .weights
            .as_ref()
            .ok_or_else(|| MlError::Prediction("模型未训练".to_string()))?;

        if x.ncols() != weights.len() {
            return Err(MlError::DimensionMismatch {
                expected: weights.len(),
                actual: x.ncols(),
            });
        }

        Ok(x.dot(weights) + self.bias)
    }

    async fn save(&self, path: &str) -> MlResult<()> {
        let serialized =
            bincode::serialize(self).map_err(|e| MlError::Serialization(e.to_string()))?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    async fn load(path: &str) -> MlResult<Self> {
        let data = std::fs::read(path)?;
        bincode::deserialize(&data).map_err(|e| MlError::Serialization(e.to_string()))
    }
}
