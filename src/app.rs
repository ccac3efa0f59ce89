mod about;
mod certifications;
mod contact;
mod footer;
mod hero;
mod icon;
mod navbar;
mod progress;
mod projects;
mod prose;
mod resume;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::nav::MenuState;
use crate::portfolio::{structured_data, OWNER};

use about::About;
use certifications::Certifications;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::NavBar;
use progress::{use_scroll_progress, ScrollProgress};
use projects::Projects;
use resume::Resume;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <script type="application/ld+json" inner_html=structured_data().to_string()></script>
                <MetaTags />
            </head>
            <body class="font-sans bg-navy text-ink">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", OWNER.full_name()) />
        <Meta
            name="description"
            content=format!("{}, {}. Projects, certifications and skills.", OWNER.full_name(), OWNER.role)
        />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole portfolio. Owns the page-level state and hands it to the components that read it.
#[component]
fn HomePage() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let progress = use_scroll_progress();

    view! {
        <Title text="Portfolio" />
        <ScrollProgress progress />
        <NavBar menu />
        <main>
            <Hero />
            <About />
            <Certifications />
            <Skills />
            <Projects />
            <Resume />
            <Contact />
        </main>
        <Footer />
    }
}
