//! 特征提取管道

use crate::extract::{extract_example, is_valid_youtube_record};
use crate::loader::load_jsonl;
use crate::sentiment::SentimentAnalyzer;
use crate::types::{EtlResult, LabelMode, LabeledExample, PipelineConfig, Platform};
use serde_json::Value;

/// 单个平台的提取计数
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformReport {
    /// 成功提取的样本数
    pub extracted: usize,
    /// 提取失败而被排除的记录数
    pub skipped: usize,
    /// 预过滤拒绝的记录数（仅 YouTube）
    pub filtered: usize,
}

/// 整次运行的提取报告
///
/// 单条记录的失败只排除该记录并计入 `skipped`，
/// 不会让整个批次失败。
#[derive(Debug, Default)]
pub struct ExtractionReport {
    /// 三个平台合并后的标注样本（无序）
    pub examples: Vec<LabeledExample>,
    /// 提取失败而被排除的记录总数
    pub skipped: usize,
    /// 预过滤拒绝的记录总数
    pub filtered: usize,
    /// 加载阶段丢弃的非法行总数
    pub malformed_lines: usize,
}

/// 特征提取管道
///
/// 记录 → 过滤（仅 YouTube）→ 情感标注 → 特征/标签提取。
/// 每条记录独立映射为一个样本，记录之间没有顺序依赖。
pub struct ExtractionPipeline {
    config: PipelineConfig,
    analyzer: SentimentAnalyzer,
}

impl ExtractionPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            analyzer: SentimentAnalyzer::new(),
        }
    }

    /// 完整流程：并发加载三个平台的记录文件，逐平台提取并合并
    pub async fn run(&self) -> EtlResult<ExtractionReport> {
        let sources = [
            (Platform::Twitter, self.config.twitter_path.as_str()),
            (Platform::Facebook, self.config.facebook_path.as_str()),
            (Platform::YouTube, self.config.youtube_path.as_str()),
        ];

        // 并发加载三个平台的数据文件
        let futures: Vec<_> = sources
            .iter()
            .map(|&(platform, path)| async move { (platform, load_jsonl(path).await) })
            .collect();
        let results = futures::future::join_all(futures).await;

        let mut report = ExtractionReport::default();
        for (platform, loaded) in results {
            let loaded = loaded?;
            report.malformed_lines += loaded.malformed;

            let (examples, platform_report) = self.extract_records(&loaded.records, platform);
            report.examples.extend(examples);
            report.skipped += platform_report.skipped;
            report.filtered += platform_report.filtered;
        }

        tracing::info!(
            "Pipeline complete: {} labeled examples ({} skipped, {} filtered, {} malformed lines)",
            report.examples.len(),
            report.skipped,
            report.filtered,
            report.malformed_lines
        );
        Ok(report)
    }

    /// 对内存中的一批记录执行 过滤 → 标注 → 提取
    ///
    /// 失败的记录记入计数并告警，继续处理其余记录。
    pub fn extract_records(
        &self,
        records: &[Value],
        platform: Platform,
    ) -> (Vec<LabeledExample>, PlatformReport) {
        let mut examples = Vec::with_capacity(records.len());
        let mut report = PlatformReport::default();

        for record in records {
            if platform == Platform::YouTube && !is_valid_youtube_record(record) {
                report.filtered += 1;
                continue;
            }

            let annotated = self.analyzer.annotate(record, platform);
            match extract_example(&annotated, platform, self.config.label_mode) {
                Ok(example) => {
                    examples.push(example);
                    report.extracted += 1;
                }
                Err(e) => {
                    tracing::warn!("Skipping {} record: {}", platform, e);
                    report.skipped += 1;
                }
            }
        }

        tracing::info!(
            "{}: extracted {} examples ({} skipped, {} filtered)",
            platform,
            report.extracted,
            report.skipped,
            report.filtered
        );
        (examples, report)
    }

    /// 当前标签模式
    pub fn label_mode(&self) -> LabelMode {
        self.config.label_mode
    }
}

/// 管道构建器
pub struct PipelineBuilder {
    config: PipelineConfig,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }

    pub fn with_twitter_path(mut self, path: impl Into<String>) -> Self {
        self.config.twitter_path = path.into();
        self
    }

    pub fn with_facebook_path(mut self, path: impl Into<String>) -> Self {
        self.config.facebook_path = path.into();
        self
    }

    pub fn with_youtube_path(mut self, path: impl Into<String>) -> Self {
        self.config.youtube_path = path.into();
        self
    }

    pub fn with_label_mode(mut self, mode: LabelMode) -> Self {
        self.config.label_mode = mode;
        self
    }

    pub fn build(self) -> ExtractionPipeline {
        ExtractionPipeline::new(self.config)
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
