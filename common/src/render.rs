//! 表示モデル
//!
//! 解析結果（状態）からカード表示用のモデルを作る純粋関数群。
//! DOMや端末への描画はここでは行わない。

use serde::{Deserialize, Serialize};

use crate::api::NO_RECOMMENDATIONS_MESSAGE;
use crate::types::{AnalysisResult, Recommendation};

/// 価格の通貨記号（ナイラ）
pub const CURRENCY_SYMBOL: &str = "₦";
pub const PRICE_NOT_AVAILABLE: &str = "N/A";

/// カードの識別子
///
/// 描画世代と位置の組。世代が変われば同じ位置でも別のカードになる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardKey {
    pub generation: u64,
    pub index: usize,
}

impl CardKey {
    /// DOM要素のid等に使う文字列
    pub fn dom_id(&self) -> String {
        format!("note-{}-{}", self.generation, self.index)
    }
}

/// カード1枚分の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub key: CardKey,
    pub image_src: Option<String>,
    pub price_line: String,
    pub fabrics_line: String,
    pub breakdown: Vec<String>,
    pub score: Option<f64>,
    pub recommendation: Recommendation,
}

impl CardView {
    pub fn new(key: CardKey, recommendation: &Recommendation) -> Self {
        Self {
            key,
            image_src: recommendation.image.as_deref().map(normalize_image_src),
            price_line: price_line(recommendation.price),
            fabrics_line: fabrics_line(&recommendation.fabrics),
            breakdown: recommendation.price_breakdown.clone(),
            score: recommendation.score,
            recommendation: recommendation.clone(),
        }
    }

    /// 内訳を区切り文字で連結
    pub fn breakdown_joined(&self, separator: &str) -> String {
        self.breakdown.join(separator)
    }
}

/// おすすめ一覧の表示
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationsView {
    /// おすすめが無い（欠損・配列以外・空）
    Placeholder(&'static str),
    Cards { header: String, cards: Vec<CardView> },
}

impl RecommendationsView {
    pub fn card_count(&self) -> usize {
        match self {
            RecommendationsView::Placeholder(_) => 0,
            RecommendationsView::Cards { cards, .. } => cards.len(),
        }
    }

    pub fn cards(&self) -> &[CardView] {
        match self {
            RecommendationsView::Placeholder(_) => &[],
            RecommendationsView::Cards { cards, .. } => cards,
        }
    }
}

/// UI状態 {shape, category, recommendations}
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub generation: u64,
    pub shape: String,
    pub category: String,
    pub recommendations: RecommendationsView,
}

impl AnalysisView {
    pub fn from_result(result: &AnalysisResult, generation: u64) -> Self {
        let shape = result.display_shape().to_string();
        let recommendations = match result.recommendations.as_deref() {
            Some(recs) if !recs.is_empty() => RecommendationsView::Cards {
                header: results_header(recs.len(), &shape),
                cards: recs
                    .iter()
                    .enumerate()
                    .map(|(index, rec)| CardView::new(CardKey { generation, index }, rec))
                    .collect(),
            },
            _ => RecommendationsView::Placeholder(NO_RECOMMENDATIONS_MESSAGE),
        };

        Self {
            generation,
            shape,
            category: result.display_category().to_string(),
            recommendations,
        }
    }

    pub fn card(&self, key: CardKey) -> Option<&CardView> {
        if key.generation != self.generation {
            return None;
        }
        self.recommendations.cards().get(key.index)
    }
}

/// 先頭のスラッシュを1つに正規化（サイトルート相対）
pub fn normalize_image_src(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// 価格を表示用に整形（整数値は小数点なし）
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.is_finite() && p.fract() == 0.0 => format!("{:.0}", p),
        Some(p) if p.is_finite() => format!("{}", p),
        _ => PRICE_NOT_AVAILABLE.to_string(),
    }
}

pub fn price_line(price: Option<f64>) -> String {
    format!("Cost per yard: {}{}", CURRENCY_SYMBOL, format_price(price))
}

pub fn fabrics_line(fabrics: &[String]) -> String {
    fabrics.join(", ")
}

/// 件数と体型の見出し（outfit / outfits）
pub fn results_header(count: usize, shape: &str) -> String {
    let noun = if count == 1 { "outfit" } else { "outfits" };
    format!("{} {} recommended for your {} shape", count, noun, shape)
}
