use glcore::{
    navigation::{
        Navigation,
        LOGIN_PATH,
    },
    session::Session,
};
use glsession::{
    github::GithubClient,
    resolver::{
        Builder as ResolverBuilder,
        Outcome,
    },
    Resolver,
};
use leptos::prelude::*;
use leptos_router::{
    hooks::{
        use_location,
        use_navigate,
    },
    nested_router::Outlet,
};

use crate::{
    browser::{
        execution_context,
        BrowserNavigator,
        LocalStore,
    },
    component::{
        Avatar,
        Redirect,
    },
    conf,
    error::AppError,
};

#[derive(Clone)]
pub struct SessionCtx {
    // Set by the guard upon every resolution; pages under the guard only
    // ever read it.
    pub session: ArcRwSignal<Option<Session>>,
}

pub fn provide_session_context() {
    provide_context(SessionCtx {
        session: ArcRwSignal::new(None),
    });
}

pub fn browser_resolver() -> Result<Resolver, glsession::error::Error> {
    ResolverBuilder::new()
        .store(LocalStore)
        .identity(GithubClient::new(&conf::config()))
        .navigator(BrowserNavigator)
        .context(execution_context())
        .build()
}

/// Resolves the session whenever the location changes, and either
/// redirects or renders the matched route.
#[component]
pub fn SessionGuard() -> impl IntoView {
    let location = use_location();
    let outcome = LocalResource::new(move || {
        let path = location.pathname.get();
        let search = location.search.get();
        async move {
            let navigation = Navigation::new(path, &search);
            let outcome = browser_resolver()?
                .resolve(&navigation)
                .await?;
            Ok::<_, AppError>(outcome)
        }
    });

    let session_ctx = expect_context::<SessionCtx>();
    let guard_view = move || {
        let session = session_ctx.session.clone();
        Suspend::new(async move {
            match outcome.await {
                Ok(Outcome::Redirect(redirect)) => {
                    log::debug!("session guard: {redirect}");
                    view! { <Redirect path=redirect.location.to_string()/> }.into_any()
                }
                Ok(outcome) => {
                    session.set(outcome.session().cloned());
                    view! { <Outlet/> }.into_any()
                }
                Err(e) => view! {
                    <h1>{e.status_code().to_string()}</h1>
                    <p class="standard error">{e.to_string()}</p>
                }.into_any(),
            }
        })
    };

    view! {
        <Suspense fallback=|| view! { <p>"Loading..."</p> }>{guard_view}</Suspense>
    }
}

#[component]
pub fn SessionStatus() -> impl IntoView {
    let session_ctx = expect_context::<SessionCtx>();
    let navigate = use_navigate();
    let session = session_ctx.session.clone();
    let sign_out = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = browser_resolver().and_then(|resolver| resolver.sign_out()) {
            log::error!("failed to sign out: {e}");
        }
        session.set(None);
        navigate(LOGIN_PATH, Default::default());
    };

    let session_status_view = move || {
        session_ctx.session.get()
            .map(|session| {
                let login = session.user.login;
                view! {
                    <Avatar src=session.user.avatar login=login.clone()/>
                    <span>"Signed in as "{login}</span>
                }
            })
    };

    view! {
        <div id="session-status">
            {session_status_view}
            <button type="button" on:click=sign_out>"Sign out"</button>
        </div>
    }
}
