//! おすすめ一覧コンポーネント
//!
//! 描画のたびに一覧を丸ごと置き換える（差分更新はしない）。

use std::collections::HashMap;

use leptos::prelude::*;
use style_advisor_common::{AnalysisView, CardKey, FeedbackStatus, Rating, RecommendationsView};
use crate::components::recommendation_card::RecommendationCard;

#[component]
pub fn RecommendationList<F>(
    analysis: Signal<Option<AnalysisView>>,
    notes: RwSignal<HashMap<CardKey, FeedbackStatus>>,
    on_feedback: F,
) -> impl IntoView
where
    F: Fn(CardKey, Rating) + 'static + Clone + Send + Sync,
{
    view! {
        <div id="recommendations">
            {move || {
                let on_feedback = on_feedback.clone();
                analysis.get().map(|analysis| match analysis.recommendations {
                    RecommendationsView::Placeholder(message) => {
                        view! { <p class="placeholder">{message}</p> }.into_any()
                    }
                    RecommendationsView::Cards { header, cards } => {
                        let cards = cards
                            .into_iter()
                            .map(|card| {
                                let key = card.key;
                                let note = Signal::derive(move || notes.with(|n| n.get(&key).copied()));
                                view! {
                                    <RecommendationCard card=card note=note on_feedback=on_feedback.clone() />
                                }
                            })
                            .collect_view();
                        view! {
                            <div class="recommendation-group">
                                <h3 class="results-header">{header}</h3>
                                <div class="cards">{cards}</div>
                            </div>
                        }
                        .into_any()
                    }
                })
            }}
        </div>
    }
}
