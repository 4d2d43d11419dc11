//! 情感标注模块

use crate::types::Platform;
use serde_json::Value;
use std::collections::HashMap;

/// 情感分数附加到记录上使用的字段名
pub const SENTIMENT_KEY: &str = "sentiment";

/// 情感评分结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    /// 综合极性分数，范围 [-1.0, 1.0]
    pub compound: f64,
}

/// 基于词典的情感分析器
///
/// 对描述文本打出一个 [-1.0, 1.0] 的综合分数。实现可替换，
/// 管道只依赖 `analyze` 的输入输出契约。
pub struct SentimentAnalyzer {
    positive_words: HashMap<String, f64>,
    negative_words: HashMap<String, f64>,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        let mut analyzer = Self {
            positive_words: HashMap::new(),
            negative_words: HashMap::new(),
        };

        analyzer.initialize_lexicon();
        analyzer
    }

    fn initialize_lexicon(&mut self) {
        // 正面词汇（社交媒体语境）
        let positive_words = vec![
            ("love", 2.0),
            ("loved", 2.0),
            ("amazing", 2.5),
            ("awesome", 2.5),
            ("great", 1.5),
            ("good", 1.0),
            ("best", 2.0),
            ("beautiful", 1.5),
            ("fun", 1.5),
            ("funny", 1.5),
            ("happy", 1.5),
            ("excellent", 2.0),
            ("wonderful", 2.0),
            ("perfect", 2.0),
            ("cool", 1.0),
            ("nice", 1.0),
            ("incredible", 2.0),
            ("favorite", 1.5),
            ("epic", 2.0),
            ("hilarious", 2.0),
            ("win", 1.5),
            ("viral", 1.0),
        ];

        // 负面词汇
        let negative_words = vec![
            ("hate", -2.0),
            ("hated", -2.0),
            ("terrible", -2.0),
            ("awful", -2.0),
            ("worst", -2.5),
            ("bad", -1.0),
            ("boring", -1.5),
            ("sad", -1.0),
            ("angry", -1.5),
            ("disappointing", -2.0),
            ("disappointed", -1.5),
            ("ugly", -1.5),
            ("stupid", -1.5),
            ("fail", -1.5),
            ("horrible", -2.0),
            ("annoying", -1.5),
            ("lame", -1.0),
            ("waste", -1.5),
            ("broken", -1.0),
            ("scam", -2.5),
            ("cringe", -1.5),
            ("fake", -1.5),
        ];

        for (word, score) in positive_words {
            self.positive_words.insert(word.to_string(), score);
        }

        for (word, score) in negative_words {
            self.negative_words.insert(word.to_string(), score);
        }
    }

    /// 分析文本，返回综合情感分数
    ///
    /// 空白文本返回 0.0。
    pub fn analyze(&self, text: &str) -> SentimentScore {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SentimentScore { compound: 0.0 };
        }

        let mut valence = 0.0;
        for word in trimmed.to_lowercase().split_whitespace() {
            let cleaned = word.trim_matches(|c: char| !c.is_alphanumeric());

            if let Some(&weight) = self.positive_words.get(cleaned) {
                valence += weight;
            }

            if let Some(&weight) = self.negative_words.get(cleaned) {
                valence += weight;
            }
        }

        // 归一化到 (-1, 1)
        let compound = valence / (valence * valence + 15.0).sqrt();

        SentimentScore { compound }
    }

    /// 按平台固定路径取出描述文本
    ///
    /// 缺失或非字符串的字段按空字符串处理（YouTube 的 items
    /// 为空时同样返回空字符串）；结果去除首尾空白。
    pub fn description_text(record: &Value, platform: Platform) -> String {
        let field = match platform {
            Platform::Twitter => record.pointer("/tweet/orig_text"),
            Platform::Facebook => record.pointer("/description"),
            Platform::YouTube => record.pointer("/items/0/snippet/description"),
        };

        field
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string()
    }

    /// 返回附加了情感分数的新记录
    ///
    /// set-if-absent 语义：已有 `sentiment` 字段的记录原样保留，
    /// 输入记录本身不被修改。
    pub fn annotate(&self, record: &Value, platform: Platform) -> Value {
        let mut annotated = record.clone();

        if let Value::Object(map) = &mut annotated {
            if !map.contains_key(SENTIMENT_KEY) {
                let text = Self::description_text(record, platform);
                let score = self.analyze(&text);
                map.insert(SENTIMENT_KEY.to_string(), Value::from(score.compound));
            }
        }

        annotated
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
