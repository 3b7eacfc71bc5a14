use leptos::prelude::*;
use leptos_router::components::A;

/// Generic error page, reached when a request fails outright.
#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Something went wrong"</h1>
                <p>"We couldn't complete your request. Please try again in a moment."</p>
                <div class="cta-buttons">
                    <A href="/login" attr:class="btn btn-primary">"Back to Sign In"</A>
                    <A href="/" attr:class="btn btn-secondary">"Go Home"</A>
                </div>
            </div>
        </div>
    }
}
