//! 対話式フィードバック
//!
//! 表示したカードを1枚ずつ評価して `/feedback` に送る。

use crate::client::AdvisorClient;
use crate::error::{AdvisorError, Result};
use crate::terminal::card_title;
use dialoguer::Select;
use style_advisor_common::{CardKey, CardView, FeedbackStatus, Rating, Session};

/// カードごとの評価の入力元
pub trait RatingPrompt {
    /// None はスキップ
    fn ask(&mut self, card: &CardView) -> Result<Option<Rating>>;
}

/// dialoguerで端末から入力
pub struct TerminalPrompt;

impl RatingPrompt for TerminalPrompt {
    fn ask(&mut self, card: &CardView) -> Result<Option<Rating>> {
        let items = [
            format!("{} Helpful", Rating::Up.icon()),
            format!("{} Not helpful", Rating::Down.icon()),
            "Skip".to_string(),
        ];
        let choice = Select::new()
            .with_prompt(format!("Rate \"{}\"", card_title(card)))
            .items(&items)
            .default(2)
            .interact()
            .map_err(|e| AdvisorError::Prompt(e.to_string()))?;

        Ok(match choice {
            0 => Some(Rating::Up),
            1 => Some(Rating::Down),
            _ => None,
        })
    }
}

/// 現在の表示の全カードについて評価を聞き、送信結果を返す
pub async fn rate_cards<P: RatingPrompt>(
    client: &AdvisorClient,
    session: &Session,
    prompt: &mut P,
) -> Result<Vec<(CardKey, FeedbackStatus)>> {
    let Some(view) = session.view() else {
        return Ok(Vec::new());
    };

    let mut statuses = Vec::new();
    for card in view.recommendations.cards() {
        let Some(rating) = prompt.ask(card)? else {
            continue;
        };
        let Some(event) = session.feedback_for(card.key, rating) else {
            continue;
        };

        let status = client.send_feedback(&event).await;
        println!("    {}", status.note());
        statuses.push((card.key, status));
    }
    Ok(statuses)
}
