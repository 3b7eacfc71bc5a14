use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::server_fns::verify_account;

/// Verification page, keyed by the token in the path. The token is consumed
/// as soon as the page loads.
#[component]
pub fn VerifyPage() -> impl IntoView {
    let params = use_params_map();
    let token = move || params.read().get("token").unwrap_or_default();

    let verify_result = Resource::new(token, |t| async move {
        if t.is_empty() {
            return Err("No verification token provided".to_string());
        }
        verify_account(t).await.map_err(|e| e.to_string())
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Account Verification"</h1>

                <Suspense fallback=|| view! { <p>"Verifying your account..."</p> }>
                    {move || {
                        verify_result.get().map(|result| {
                            match result {
                                Ok(_) => view! {
                                    <div class="success-message">
                                        <h2>"Account Verified!"</h2>
                                        <p>"Your account has been verified successfully."</p>
                                        <A href="/login" attr:class="btn btn-primary">"Sign In"</A>
                                    </div>
                                }.into_any(),
                                Err(e) => view! {
                                    <div class="error-message">
                                        <h2>"Verification Failed"</h2>
                                        <p>{e}</p>
                                        <p>"The link may have expired or already been used."</p>
                                        <A href="/login" attr:class="btn btn-secondary">"Back to Sign In"</A>
                                    </div>
                                }.into_any(),
                            }
                        })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
