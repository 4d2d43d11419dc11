//! 模型评估模块

use crate::types::Metrics;
use ndarray::Array1;

/// 模型评估器
pub struct Evaluator;

impl Evaluator {
    /// 错误率（预测标签与真实标签不一致的比例）
    pub fn error_rate(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        let n = y_true.len();
        if n == 0 {
            return 0.0;
        }

        let mismatches = y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|(t, p)| t != p)
            .count();
        mismatches as f64 / n as f64
    }

    /// 准确率
    pub fn accuracy(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        1.0 - Self::error_rate(y_true, y_pred)
    }

    /// 混淆计数 (tp, fp, fn)，正类为 1.0
    fn confusion(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> (f64, f64, f64) {
        let mut tp = 0.0;
        let mut fp = 0.0;
        let mut fn_ = 0.0;

        for (&truth, &predicted) in y_true.iter().zip(y_pred.iter()) {
            match (truth == 1.0, predicted == 1.0) {
                (true, true) => tp += 1.0,
                (false, true) => fp += 1.0,
                (true, false) => fn_ += 1.0,
                (false, false) => {}
            }
        }

        (tp, fp, fn_)
    }

    /// 精确率
    pub fn precision(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        let (tp, fp, _) = Self::confusion(y_true, y_pred);
        if tp + fp == 0.0 {
            return 0.0;
        }
        tp / (tp + fp)
    }

    /// 召回率
    pub fn recall(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        let (tp, _, fn_) = Self::confusion(y_true, y_pred);
        if tp + fn_ == 0.0 {
            return 0.0;
        }
        tp / (tp + fn_)
    }

    /// F1 分数
    pub fn f1(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        let precision = Self::precision(y_true, y_pred);
        let recall = Self::recall(y_true, y_pred);
        if precision + recall == 0.0 {
            return 0.0;
        }
        2.0 * precision * recall / (precision + recall)
    }

    /// 均方误差（线性模式的连续标签）
    pub fn mean_squared_error(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        if y_true.is_empty() {
            return 0.0;
        }
        let diff = y_true - y_pred;
        diff.mapv(|d| d * d).mean().unwrap_or(0.0)
    }

    /// 汇总二分类指标
    pub fn classification_report(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Metrics {
        Metrics::new(
            Self::error_rate(y_true, y_pred),
            Self::accuracy(y_true, y_pred),
            Self::precision(y_true, y_pred),
            Self::recall(y_true, y_pred),
            Self::f1(y_true, y_pred),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_error_rate_counts_mismatches() {
        let y_true = array![1.0, 0.0, 1.0, 0.0];
        let y_pred = array![1.0, 0.0, 0.0, 0.0]; // 一个错

        assert!((Evaluator::error_rate(&y_true, &y_pred) - 0.25).abs() < 1e-12);
        assert!((Evaluator::accuracy(&y_true, &y_pred) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_precision_recall_f1() {
        // tp=2, fp=1, fn=1
        let y_true = array![1.0, 1.0, 0.0, 1.0, 0.0];
        let y_pred = array![1.0, 1.0, 1.0, 0.0, 0.0];

        assert!((Evaluator::precision(&y_true, &y_pred) - 2.0 / 3.0).abs() < 1e-12);
        assert!((Evaluator::recall(&y_true, &y_pred) - 2.0 / 3.0).abs() < 1e-12);
        assert!((Evaluator::f1(&y_true, &y_pred) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs() {
        let empty = Array1::<f64>::zeros(0);
        assert_eq!(Evaluator::error_rate(&empty, &empty), 0.0);

        // 没有任何正类预测时精确率为 0 而不是 NaN
        let y_true = array![0.0, 0.0];
        let y_pred = array![0.0, 0.0];
        assert_eq!(Evaluator::precision(&y_true, &y_pred), 0.0);
        assert_eq!(Evaluator::recall(&y_true, &y_pred), 0.0);
        assert_eq!(Evaluator::f1(&y_true, &y_pred), 0.0);
    }

    #[test]
    fn test_mean_squared_error() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![1.1, 2.1, 2.9];

        let mse = Evaluator::mean_squared_error(&y_true, &y_pred);
        assert!((mse - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_classification_report_is_consistent() {
        let y_true = array![1.0, 0.0, 1.0, 0.0];
        let y_pred = array![1.0, 0.0, 0.0, 0.0];

        let metrics = Evaluator::classification_report(&y_true, &y_pred);
        assert!((metrics.error_rate + metrics.accuracy - 1.0).abs() < 1e-12);
        assert!((metrics.recall - 0.5).abs() < 1e-12);
        assert!((metrics.precision - 1.0).abs() < 1e-12);
    }
}
