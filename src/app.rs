mod contact;
mod hero;
mod nav;
mod projects;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::site_config;

use contact::ContactSection;
use hero::Hero;
use nav::Navbar;
use projects::ProjectsSection;
use skills::SkillsSection;
use theme::ThemeContext;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Theme is explicit context: loaded from storage once here, saved on
    // every toggle.
    let theme = ThemeContext::provide();
    theme.load();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Rama Lakshmi - {title}") />

        <Router>
            <div class=move || {
                format!(
                    "min-h-screen bg-background text-foreground {}",
                    theme.get().root_class(),
                )
            }>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// The single page, parameterized by `SiteConfig` so the section components
/// stay generic over the site's content.
#[component]
fn HomePage() -> impl IntoView {
    let config = site_config();
    view! {
        <Title text=config.identity.role />
        <Navbar identity=config.identity.clone() />
        <Hero identity=config.identity.clone() />
        <SkillsSection skills=config.skills />
        <ProjectsSection projects=config.projects />
        <ContactSection info=config.contact.clone() />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let config = site_config();
    view! {
        <footer class="py-8 text-center text-sm text-muted">
            <p>{format!("© {} · built {}", config.identity.name, env!("BUILD_TIME"))}</p>
        </footer>
    }
}
