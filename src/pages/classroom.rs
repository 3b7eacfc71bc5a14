use leptos::prelude::*;

use crate::components::AuthGuard;
use crate::server_fns::get_current_user;

/// Main page of the application, reached after a completed login.
#[component]
pub fn ClassroomPage() -> impl IntoView {
    let user = Resource::new(|| (), |_| get_current_user());

    view! {
        <AuthGuard>
            <div class="classroom-page">
                <h1>"Classroom"</h1>
                <Suspense fallback=|| view! { <p>"Loading..."</p> }>
                    {move || {
                        user.get().map(|result| {
                            match result {
                                Ok(Some(u)) => view! {
                                    <p class="welcome">"Signed in as " {u.email}</p>
                                }.into_any(),
                                _ => ().into_any(),
                            }
                        })
                    }}
                </Suspense>
                <p>"Your upcoming lessons will appear here."</p>
            </div>
        </AuthGuard>
    }
}
