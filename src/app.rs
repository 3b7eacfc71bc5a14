use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Nav;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/brightclass.css"/>
        <Title text="Brightclass"/>
        <Meta name="description" content="Brightclass - your classes, live and on demand"/>

        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/classroom") view=ClassroomPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route path=path!("/verify/:token") view=VerifyPage/>
                    <Route path=path!("/password-recovery") view=PasswordRecoveryPage/>
                    <Route path=path!("/reset-password") view=ResetPasswordPage/>
                    <Route path=path!("/error") view=ErrorPage/>
                </Routes>
            </main>
        </Router>
    }
}
