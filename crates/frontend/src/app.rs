use crate::domain::orders::ui::list::ReadyOrdersList;
use crate::system::auth::session::Session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session credentials are read once from client storage and injected via
    // context; components and API calls never touch the store directly.
    provide_context(Session::from_storage());

    view! {
        <ReadyOrdersList />
    }
}
