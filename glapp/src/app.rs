use glcore::navigation::{
    DASHBOARD_PATH,
    LOGIN_PATH,
};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{
        ParentRoute,
        Route,
        Router,
        Routes,
        A,
    },
    StaticSegment,
    WildcardSegment,
};

use crate::{
    component::Avatar,
    conf,
    session::{
        provide_session_context,
        SessionCtx,
        SessionGuard,
        SessionStatus,
    },
};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_session_context();

    view! {
        <Title text="GitLight"/>
        <Router>
            <main>
                // every path goes through the guard, including unknown ones
                <Routes fallback=|| view! { <NotFound/> }>
                    <ParentRoute path=StaticSegment("") view=SessionGuard>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=WildcardSegment("any") view=NotFound/>
                    </ParentRoute>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="main">
            <h1>"GitLight"</h1>
            <p>"GitHub notifications, without the noise."</p>
            <A href=LOGIN_PATH>"Sign in"</A>
        </div>
    }
}

#[component]
fn LoginPage() -> impl IntoView {
    view! {
        <div class="main">
            <h1>"Sign in"</h1>
            <p>"Sign in with your GitHub account to see your notifications."</p>
            <a class="button" href=conf::login_url()>"Sign in with GitHub"</a>
        </div>
    }
}

#[component]
fn DashboardPage() -> impl IntoView {
    let session_ctx = expect_context::<SessionCtx>();
    let profile_view = move || {
        session_ctx.session.get()
            .map(|session| {
                let user = session.user;
                let display_name = user.name.clone()
                    .unwrap_or_else(|| user.login.clone());
                view! {
                    <Avatar src=user.avatar login=user.login.clone()/>
                    <h1>{display_name}</h1>
                    <p>"@"{user.login}</p>
                }
            })
    };

    view! {
        <Title text="Dashboard - GitLight"/>
        <header>
            <SessionStatus/>
        </header>
        <div class="main">{profile_view}</div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <h1>"404 Not Found"</h1>
        <A href=DASHBOARD_PATH>"Back to the dashboard"</A>
    }
}
