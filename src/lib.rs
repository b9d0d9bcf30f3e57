// User Directory UI - JSONPlaceholder users rendered as follow/delete cards
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

pub mod api;
pub mod components;
pub mod pages;
pub mod types;
pub mod utils;

use components::layout::Layout;
use pages::{NotFoundPage, UsersPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/user-directory-ui.css"/>
        <Title text="User Directory"/>
        <Meta name="description" content="JSONPlaceholder users rendered as cards with follow and delete actions"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>

        <Router>
            <Layout>
                <Routes>
                    <Route path="/" view=UsersPage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
