//! 特征标准化模块

use crate::types::{MlError, MlResult};
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

/// z-score 特征缩放器
///
/// 按训练集的列均值与标准差标准化；增长率与情感分数的量级
/// 相差很大，训练前需要拉到同一尺度。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    mean: Array1<f64>,
    std: Array1<f64>,
}

impl Scaler {
    /// 从训练数据拟合缩放器
    pub fn fit(data: &Array2<f64>) -> MlResult<Self> {
        if data.nrows() == 0 {
            return Err(MlError::Preprocessing("数据为空".to_string()));
        }

        let mean = data
            .mean_axis(Axis(0))
            .ok_or_else(|| MlError::Preprocessing("无法计算均值".to_string()))?;

        // 方差为 0 的列除数取 1.0，避免除零
        let std = data
            .std_axis(Axis(0), 0.0)
            .mapv(|s| if s.abs() < 1e-10 { 1.0 } else { s });

        Ok(Self { mean, std })
    }

    fn check_dims(&self, data: &Array2<f64>) -> MlResult<()> {
        if data.ncols() != self.mean.len() {
            return Err(MlError::DimensionMismatch {
                expected: self.mean.len(),
                actual: data.ncols(),
            });
        }
        Ok(())
    }

    /// 标准化数据
    pub fn transform(&self, data: &Array2<f64>) -> MlResult<Array2<f64>> {
        self.check_dims(data)?;
        Ok((data - &self.mean) / &self.std)
    }

    /// 拟合并标准化
    pub fn fit_transform(data: &Array2<f64>) -> MlResult<(Self, Array2<f64>)> {
        let scaler = Self::fit(data)?;
        let transformed = scaler.transform(data)?;
        Ok((scaler, transformed))
    }

    /// 反标准化
    pub fn inverse_transform(&self, data: &Array2<f64>) -> MlResult<Array2<f64>> {
        self.check_dims(data)?;
        Ok(data * &self.std + &self.mean)
    }
}
