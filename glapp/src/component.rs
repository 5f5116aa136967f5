use leptos::prelude::*;

/// Full page redirect, replacing the current history entry.
#[component]
pub fn Redirect(
    path: String,
    #[prop(optional)] show_link: bool,
) -> impl IntoView {
    log::debug!("redirecting to {path}...");
    if let Err(e) = window().location().replace(&path) {
        log::error!("fail to replace location with {path}: {e:?}");
    }
    show_link.then(|| view! {
        "Redirecting to "<a href=path.clone()>{path.clone()}</a>
    })
}

#[component]
pub fn Avatar(
    src: String,
    login: String,
) -> impl IntoView {
    view! {
        <img class="avatar" src=src alt=format!("{login}'s avatar") width="48" height="48"/>
    }
}
