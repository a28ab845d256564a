//! おすすめカードコンポーネント

use leptos::prelude::*;
use style_advisor_common::{CardKey, CardView, FeedbackStatus, Rating};

const CARD_STYLE: &str = "margin-bottom: 20px; display: inline-block; text-align: left; \
    border: 1px solid #ddd; padding: 10px; border-radius: 8px; width: 300px; \
    box-shadow: 0 2px 6px rgba(0,0,0,0.08); margin-right: 12px;";
const IMAGE_STYLE: &str = "border-radius: 6px; display: block; margin-bottom: 8px;";

#[component]
pub fn RecommendationCard<F>(
    card: CardView,
    note: Signal<Option<FeedbackStatus>>,
    on_feedback: F,
) -> impl IntoView
where
    F: Fn(CardKey, Rating) + 'static + Clone + Send + Sync,
{
    let key = card.key;
    let alt = card.recommendation.identifier().to_string();

    let image = card.image_src.clone().map(|src| {
        view! { <img src=src alt=alt width="260" style=IMAGE_STYLE /> }
    });

    // 内訳は行ごとに<br>で区切る
    let breakdown = card
        .breakdown
        .iter()
        .enumerate()
        .map(|(i, line)| {
            view! {
                {(i > 0).then(|| view! { <br /> })}
                <span class="breakdown-line">{line.clone()}</span>
            }
        })
        .collect_view();

    view! {
        <div class="recommendation-card" data-index=key.index.to_string() style=CARD_STYLE>
            {image}
            <div class="price-title">{card.price_line.clone()}</div>
            <div class="fabrics" style="margin-bottom: 6px;">
                <strong>"Fabrics:"</strong>
                " "
                {card.fabrics_line.clone()}
            </div>
            <div class="breakdown">
                <strong>"Breakdown:"</strong>
                <br />
                {breakdown}
            </div>
            <div class="feedback">
                <button
                    class="btn-feedback"
                    title="Helpful"
                    on:click={
                        let on_feedback = on_feedback.clone();
                        move |_| on_feedback(key, Rating::Up)
                    }
                >
                    {Rating::Up.icon()}
                </button>
                <button
                    class="btn-feedback"
                    title="Not helpful"
                    on:click={
                        let on_feedback = on_feedback.clone();
                        move |_| on_feedback(key, Rating::Down)
                    }
                >
                    {Rating::Down.icon()}
                </button>
                <span class="feedback-note" id=key.dom_id()>
                    {move || note.get().map(|status| status.note())}
                </span>
            </div>
        </div>
    }
}
