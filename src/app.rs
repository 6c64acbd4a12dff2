//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{comments::CommentsPage, story::StoryPage};
use crate::state::{comments::CommentsState, story::StoryState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the story and comment board state contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Reactive state contexts shared by pages and components.
    let story = RwSignal::new(StoryState::default());
    let comments = RwSignal::new(CommentsState::default());

    provide_context(story);
    provide_context(comments);

    view! {
        <Stylesheet id="leptos" href="/pkg/backstory.css"/>
        <Title text="Backstory"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=StoryPage/>
                <Route path=StaticSegment("comments") view=CommentsPage/>
            </Routes>
        </Router>
    }
}
