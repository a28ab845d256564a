//! 解析結果の型定義
//!
//! ブラウザ(WASM)とCLIで共有される型:
//! - AnalysisResult: `/analyze` のレスポンス
//! - Recommendation: おすすめコーデ1件
//! - StylePreference: フォームで選択するスタイル
//!
//! サーバーのJSONは欠損やnullが多いため、デシリアライズは寛容にしている。
//! 型が合わない値は「無し」として扱い、レスポンス全体を失敗させない。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// shape / category が無いときの表示
pub const UNKNOWN_LABEL: &str = "Unknown";

/// `/analyze` の解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// 配列以外の値が来た場合は None
    #[serde(default, deserialize_with = "lenient_recommendations", skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,
}

impl AnalysisResult {
    pub fn display_shape(&self) -> &str {
        label_or_unknown(self.shape.as_deref())
    }

    pub fn display_category(&self) -> &str {
        label_or_unknown(self.category.as_deref())
    }

    /// おすすめ一覧（無い場合は空スライス）
    pub fn recommendations(&self) -> &[Recommendation] {
        self.recommendations.as_deref().unwrap_or(&[])
    }
}

fn label_or_unknown(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => UNKNOWN_LABEL,
    }
}

/// おすすめコーデ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// サイトルートからの画像パス
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// 1ヤードあたりの価格
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, deserialize_with = "lenient_strings")]
    pub fabrics: Vec<String>,

    #[serde(default, deserialize_with = "lenient_strings")]
    pub price_breakdown: Vec<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// 報酬モデルによるスコア（学習済みの場合のみ）
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Recommendation {
    /// フィードバック用の識別子: name → image → 空文字
    pub fn identifier(&self) -> &str {
        [self.name.as_deref(), self.image.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }
}

/// スタイル選択
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreference {
    /// 体型から自動で決める
    #[default]
    Auto,
    Traditional,
    Casual,
    Office,
}

impl StylePreference {
    pub const ALL: [StylePreference; 4] = [
        StylePreference::Auto,
        StylePreference::Traditional,
        StylePreference::Casual,
        StylePreference::Office,
    ];

    /// フォームで送る値（Autoは空文字）
    pub fn value(&self) -> &'static str {
        match self {
            StylePreference::Auto => "",
            StylePreference::Traditional => "traditional",
            StylePreference::Casual => "casual",
            StylePreference::Office => "office",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StylePreference::Auto => "Let my shape decide",
            StylePreference::Traditional => "Traditional / Occasion",
            StylePreference::Casual => "Casual",
            StylePreference::Office => "Office / Corporate",
        }
    }
}

impl FromStr for StylePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(StylePreference::Auto),
            "traditional" => Ok(StylePreference::Traditional),
            "casual" => Ok(StylePreference::Casual),
            "office" => Ok(StylePreference::Office),
            other => Err(format!(
                "unknown style '{}' (expected auto, traditional, casual or office)",
                other
            )),
        }
    }
}

impl fmt::Display for StylePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StylePreference::Auto => f.write_str("auto"),
            other => f.write_str(other.value()),
        }
    }
}

// =============================================
// 寛容なデシリアライザ
// =============================================

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_recommendations<'de, D>(deserializer: D) -> Result<Option<Vec<Recommendation>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}
