//! Review Card Component

use leptos::prelude::*;

use crate::models::{star_row, Review};

#[component]
pub fn ReviewCard(review: &'static Review) -> impl IntoView {
    view! {
        <div class="card review-card">
            <div class="review-head">
                <div class="review-author">
                    <div class="avatar-initial">{review.initial()}</div>
                    <div>
                        <div class="review-name">{review.author.as_str()}</div>
                        <div class="stars">{star_row(review.rating)}</div>
                    </div>
                </div>
                <span class="review-when">{review.when.as_str()}</span>
            </div>
            <p class="review-body">{format!("\u{201C}{}\u{201D}", review.body)}</p>
        </div>
    }
}
