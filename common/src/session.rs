//! 送信状態の管理
//!
//! フォームは Idle / Submitting の2状態。Submitting中の再送信は拒否する。
//! 解析が成功するたびに描画世代を進め、カードは (世代, 位置) で識別する。
//! 古い世代のカードに対するフィードバックは解決できない。

use crate::error::{Error, Result};
use crate::feedback::{FeedbackEvent, Rating};
use crate::render::{AnalysisView, CardKey};
use crate::types::AnalysisResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
}

/// 送信1回分の引換券
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
}

impl SubmitTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    state: FormState,
    last_generation: u64,
    pending: Option<u64>,
    view: Option<AnalysisView>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// 現在の表示（まだ一度も成功していなければ None）
    pub fn view(&self) -> Option<&AnalysisView> {
        self.view.as_ref()
    }

    /// Idle → Submitting
    pub fn begin_submit(&mut self) -> Result<SubmitTicket> {
        if self.is_submitting() {
            return Err(Error::Busy);
        }
        self.last_generation += 1;
        self.pending = Some(self.last_generation);
        self.state = FormState::Submitting;
        Ok(SubmitTicket {
            generation: self.last_generation,
        })
    }

    /// 送信完了。成否に関わらず Idle に戻る。
    ///
    /// 成功時は表示を丸ごと置き換え、失敗時は以前の表示を残してエラーを返す。
    /// 対応しない引換券は無視する。
    pub fn complete(&mut self, ticket: SubmitTicket, outcome: Result<AnalysisResult>) -> Result<()> {
        if self.pending != Some(ticket.generation) {
            return Ok(());
        }
        self.pending = None;
        self.state = FormState::Idle;

        let result = outcome?;
        self.view = Some(AnalysisView::from_result(&result, ticket.generation));
        Ok(())
    }

    /// カードへの評価をフィードバックに変換（現在の世代のカードのみ）
    pub fn feedback_for(&self, key: CardKey, rating: Rating) -> Option<FeedbackEvent> {
        let view = self.view.as_ref()?;
        let card = view.card(key)?;
        Some(FeedbackEvent::new(
            view.shape.clone(),
            view.category.clone(),
            &card.recommendation,
            rating,
        ))
    }
}
