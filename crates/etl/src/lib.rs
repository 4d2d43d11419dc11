//! # ETL - 社交媒体互动数据特征提取
//!
//! 把 Twitter / Facebook / YouTube 三种互不兼容的互动记录
//! 转换为统一的带标签训练样本。
//!
//! ## 功能
//!
//! - 按平台加载 JSON Lines 记录
//! - 词典情感分析并以 set-if-absent 方式标注
//! - 按平台字段映射提取固定 4 维特征向量与流行度标签
//! - 单条记录失败隔离与计数

pub mod extract;
pub mod loader;
pub mod pipeline;
pub mod sentiment;
pub mod time;
pub mod types;

pub use pipeline::{ExtractionPipeline, ExtractionReport, PipelineBuilder, PlatformReport};
pub use sentiment::{SentimentAnalyzer, SentimentScore, SENTIMENT_KEY};
pub use types::{
    EtlError, EtlResult, LabelMode, LabeledExample, PipelineConfig, Platform, FEATURE_COUNT,
};
