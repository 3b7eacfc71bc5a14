use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
#[cfg(feature = "hydrate")]
use leptos::web_sys;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::AlertFeedback;
use crate::models::{next_step, Feedback, IdentifierMode, LoginForm, SubmitStep};
use crate::server_fns::{establish_session, login};

/// Sign-in page. One request in flight at a time: the submit control is
/// disabled while a submission is outstanding, and re-enabled only when the
/// flow reaches a terminal state.
#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let feedback = RwSignal::new(Feedback::default());
    let (is_loading, set_is_loading) = signal(false);
    let (button_status, set_button_status) = signal("Please wait...".to_string());
    let (show_password, set_show_password) = signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        set_is_loading.set(true);
        set_button_status.set("Logging you in...".into());
        feedback.update(|f| f.dismiss());

        let submitted = form.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = login(
                submitted.email.clone(),
                submitted.phone.clone(),
                submitted.password.clone(),
            )
            .await;
            form.update(|f| f.clear());

            let outcome = match result {
                Ok(outcome) => outcome,
                Err(_) => {
                    // Transport failure: inline message plus the error page
                    set_is_loading.set(false);
                    feedback.set(Feedback::error("An error occurred... please try again"));
                    navigate("/error", Default::default());
                    return;
                }
            };

            match next_step(&outcome) {
                SubmitStep::ShowError(message) => {
                    set_is_loading.set(false);
                    feedback.set(Feedback::error(message));
                }
                SubmitStep::VerifyAccount(token) => {
                    navigate(&format!("/verify/{token}"), Default::default());
                }
                SubmitStep::EstablishSession { email, message } => {
                    feedback.set(Feedback::success(message));
                    set_button_status.set("Redirecting...".into());
                    match establish_session(email, submitted.password.clone()).await {
                        Ok(_) => {
                            set_is_loading.set(false);
                            // Full navigation so the session cookie is picked up
                            #[cfg(feature = "hydrate")]
                            {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().set_href("/classroom");
                                }
                            }
                        }
                        Err(_) => {
                            set_is_loading.set(false);
                            feedback
                                .set(Feedback::error("An error occurred... please try again"));
                            navigate("/error", Default::default());
                        }
                    }
                }
            }
        });
    };

    view! {
        <Title text="Brightclass | Login"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <p class="auth-subtitle">
                    {move || match form.get().mode {
                        IdentifierMode::Email => "Sign in with email",
                        IdentifierMode::Phone => "Sign in with phone number",
                    }}
                </p>

                <AlertFeedback feedback=feedback/>

                <div class="mode-toggle">
                    <label class="mode-option">
                        <input
                            type="radio"
                            name="login-by"
                            prop:checked=move || form.get().mode == IdentifierMode::Email
                            on:click=move |_| form.update(|f| f.set_mode(IdentifierMode::Email))
                        />
                        " Email"
                    </label>
                    <label class="mode-option">
                        <input
                            type="radio"
                            name="login-by"
                            prop:checked=move || form.get().mode == IdentifierMode::Phone
                            on:click=move |_| form.update(|f| f.set_mode(IdentifierMode::Phone))
                        />
                        " Phone number"
                    </label>
                </div>

                <form on:submit=on_submit>
                    <Show
                        when=move || form.get().mode == IdentifierMode::Email
                        fallback=move || view! {
                            <div class="form-group">
                                <label for="phone">"Phone number"</label>
                                <input
                                    type="tel"
                                    id="phone"
                                    name="phone"
                                    required
                                    placeholder="Phone number"
                                    prop:value=move || form.get().phone
                                    on:input=move |ev| {
                                        form.update(|f| f.set_phone(event_target_value(&ev)))
                                    }
                                />
                            </div>
                        }
                    >
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                required
                                placeholder="your@email.com"
                                prop:value=move || form.get().email
                                on:input=move |ev| {
                                    form.update(|f| f.set_email(event_target_value(&ev)))
                                }
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            id="password"
                            name="password"
                            required
                            placeholder="••••••••"
                            prop:value=move || form.get().password
                            on:input=move |ev| {
                                form.update(|f| f.set_password(event_target_value(&ev)))
                            }
                        />
                        <button
                            type="button"
                            class="toggle-password"
                            on:click=move |_| set_show_password.update(|s| *s = !*s)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>

                    <div class="form-links">
                        <A href="/password-recovery">"Forgot password?"</A>
                    </div>

                    <button type="submit" class="btn btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { button_status.get() } else { "Login".into() }}
                    </button>
                </form>

                <div class="auth-links">
                    <span>"New to Brightclass? "</span>
                    <A href="/register">"Create a new account"</A>
                </div>
            </div>
        </div>
    }
}
