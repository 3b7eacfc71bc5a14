use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Brightclass"</h1>
                <p class="subtitle">"Your classes, live and on demand"</p>
                <p class="description">
                    "Join live lessons, catch up on recordings and keep track of "
                    "your coursework in one place."
                </p>
                <div class="cta-buttons">
                    <A href="/login" attr:class="btn btn-primary">"Get Started"</A>
                    <A href="/register" attr:class="btn btn-secondary">"Create Account"</A>
                </div>
            </section>
        </div>
    }
}
