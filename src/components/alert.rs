use leptos::prelude::*;

use crate::models::{Feedback, FeedbackKind};

/// Dismissible inline alert driven by a [`Feedback`] signal.
#[component]
pub fn AlertFeedback(feedback: RwSignal<Feedback>) -> impl IntoView {
    move || {
        let current = feedback.get();
        if !current.open {
            return ().into_any();
        }
        let class = match current.kind {
            Some(FeedbackKind::Success) => "alert alert-success",
            _ => "alert alert-error",
        };
        view! {
            <div class=class role="alert">
                <span>{current.message}</span>
                <button
                    type="button"
                    class="alert-dismiss"
                    aria-label="Dismiss"
                    on:click=move |_| feedback.update(|f| f.dismiss())
                >
                    "\u{00d7}"
                </button>
            </div>
        }
        .into_any()
    }
}
