//! 样本对与数据集划分

use crate::types::{MlError, MlResult};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// (标签, 特征向量) 样本对，训练器的输入单元
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub label: f64,
    pub features: Vec<f64>,
}

impl LabeledPoint {
    pub fn new(label: f64, features: Vec<f64>) -> Self {
        Self { label, features }
    }
}

/// 按固定种子随机划分训练/测试集
///
/// 同一种子下结果确定；两个子集不相交且合并后覆盖全部输入。
/// `train_ratio` 必须落在开区间 (0, 1)。
pub fn train_test_split<T: Clone>(
    items: &[T],
    train_ratio: f64,
    seed: u64,
) -> MlResult<(Vec<T>, Vec<T>)> {
    if train_ratio <= 0.0 || train_ratio >= 1.0 {
        return Err(MlError::InvalidConfig(format!(
            "train_ratio 必须在 (0, 1) 之间: {}",
            train_ratio
        )));
    }

    let mut indices: Vec<usize> = (0..items.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let cut = (items.len() as f64 * train_ratio).round() as usize;
    let train = indices[..cut].iter().map(|&i| items[i].clone()).collect();
    let test = indices[cut..].iter().map(|&i| items[i].clone()).collect();
    Ok((train, test))
}

/// 将样本对转换为设计矩阵与标签向量
///
/// 所有样本必须有相同的特征维数。
pub fn to_design_matrix(points: &[LabeledPoint]) -> MlResult<(Array2<f64>, Array1<f64>)> {
    let first = points
        .first()
        .ok_or_else(|| MlError::Preprocessing("样本集为空".to_string()))?;
    let n_features = first.features.len();

    let mut x = Array2::<f64>::zeros((points.len(), n_features));
    let mut y = Array1::<f64>::zeros(points.len());

    for (i, point) in points.iter().enumerate() {
        if point.features.len() != n_features {
            return Err(MlError::DimensionMismatch {
                expected: n_features,
                actual: point.features.len(),
            });
        }
        for (j, &value) in point.features.iter().enumerate() {
            x[[i, j]] = value;
        }
        y[i] = point.label;
    }

    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_is_deterministic_for_a_fixed_seed() {
        let items: Vec<u32> = (0..100).collect();

        let (train_a, test_a) = train_test_split(&items, 0.8, 0).unwrap();
        let (train_b, test_b) = train_test_split(&items, 0.8, 0).unwrap();

        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
    }

    #[test]
    fn test_split_is_disjoint_and_exhaustive() {
        let items: Vec<u32> = (0..100).collect();
        let (train, test) = train_test_split(&items, 0.8, 7).unwrap();

        assert_eq!(train.len(), 80);
        assert_eq!(test.len(), 20);

        let mut all: Vec<u32> = train.iter().chain(test.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, items);
    }

    #[test]
    fn test_different_seeds_give_different_shuffles() {
        let items: Vec<u32> = (0..100).collect();
        let (train_a, _) = train_test_split(&items, 0.8, 0).unwrap();
        let (train_b, _) = train_test_split(&items, 0.8, 1).unwrap();
        assert_ne!(train_a, train_b);
    }

    #[test]
    fn test_invalid_ratio_is_rejected() {
        let items = vec![1, 2, 3];
        assert!(train_test_split(&items, 0.0, 0).is_err());
        assert!(train_test_split(&items, 1.0, 0).is_err());
        assert!(train_test_split(&items, 1.5, 0).is_err());
    }

    #[test]
    fn test_design_matrix_shapes() {
        let points = vec![
            LabeledPoint::new(1.0, vec![30.0, 10.0, 200.0, 0.5]),
            LabeledPoint::new(0.0, vec![12.0, 3.0, 4.0, -0.1]),
        ];

        let (x, y) = to_design_matrix(&points).unwrap();
        assert_eq!(x.dim(), (2, 4));
        assert_eq!(y.len(), 2);
        assert_eq!(x[[0, 2]], 200.0);
        assert_eq!(y[1], 0.0);
    }

    #[test]
    fn test_ragged_features_are_rejected() {
        let points = vec![
            LabeledPoint::new(1.0, vec![1.0, 2.0]),
            LabeledPoint::new(0.0, vec![1.0]),
        ];

        let err = to_design_matrix(&points).unwrap_err();
        assert!(matches!(
            err,
            MlError::DimensionMismatch { expected: 2, actual: 1 }
        ));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let points: Vec<LabeledPoint> = Vec::new();
        assert!(to_design_matrix(&points).is_err());
    }
}
