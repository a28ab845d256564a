//! 端末向けの表示
//!
//! ブラウザ版と同じ表示モデル(AnalysisView)をテキストにする。

use style_advisor_common::{AnalysisView, CardView, RecommendationsView};

/// カードの見出し（名前が無ければ番号）
pub fn card_title(card: &CardView) -> String {
    match card.recommendation.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Outfit {}", card.key.index + 1),
    }
}

fn card_lines(card: &CardView) -> Vec<String> {
    let mut lines = vec![format!("[{}] {}", card.key.index + 1, card_title(card))];
    if let Some(src) = &card.image_src {
        lines.push(format!("    Image: {}", src));
    }
    lines.push(format!("    {}", card.price_line));
    lines.push(format!("    Fabrics: {}", card.fabrics_line));
    lines.push("    Breakdown:".to_string());
    lines.extend(card.breakdown.iter().map(|line| format!("      {}", line)));
    if let Some(score) = card.score {
        lines.push(format!("    Score: {:.3}", score));
    }
    lines
}

pub fn render_card(card: &CardView) -> String {
    let mut out = card_lines(card).join("\n");
    out.push('\n');
    out
}

pub fn render_text(view: &AnalysisView) -> String {
    let mut lines = vec![
        format!("Body shape: {}", view.shape),
        format!("Style category: {}", view.category),
        String::new(),
    ];

    match &view.recommendations {
        RecommendationsView::Placeholder(message) => lines.push(message.to_string()),
        RecommendationsView::Cards { header, cards } => {
            lines.push(header.clone());
            for card in cards {
                lines.push(String::new());
                lines.extend(card_lines(card));
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
