use leptos::prelude::*;

use crate::config::Identity;

use super::theme::ThemeContext;

const SECTION_LINKS: [(&str, &str); 3] = [
    ("#home", "Home"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
];

#[component]
pub fn Navbar(identity: Identity) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="fixed top-0 w-full z-50 bg-background/95 backdrop-blur border-b border-muted/30 shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex justify-between items-center">
                <a href="#home" class="text-2xl font-bold text-foreground">
                    {identity.name}
                </a>
                <div class="hidden md:flex items-center gap-8 font-medium">
                    {SECTION_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=href
                                    class="hover:text-cyan transition-colors duration-200"
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href="#contact"
                        class="bg-blue/20 hover:bg-blue/30 text-blue px-6 py-2 rounded-md font-bold border border-blue/30 transition-all duration-200"
                    >
                        "Contact Me"
                    </a>
                    <ThemeToggle />
                </div>
                <div class="flex md:hidden items-center gap-4">
                    <ThemeToggle />
                    <button
                        aria-label="Toggle menu"
                        class="text-2xl"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            {move || {
                menu_open()
                    .then(|| {
                        view! {
                            <div class="md:hidden flex flex-col px-4 pb-4 gap-3 font-medium">
                                {SECTION_LINKS
                                    .into_iter()
                                    .map(|(href, label)| {
                                        view! {
                                            <a
                                                href=href
                                                on:click=move |_| set_menu_open(false)
                                                class="hover:text-cyan transition-colors duration-200"
                                            >
                                                {label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                                <a
                                    href="#contact"
                                    on:click=move |_| set_menu_open(false)
                                    class="text-blue font-bold"
                                >
                                    "Contact Me"
                                </a>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = ThemeContext::expect();
    view! {
        <button
            aria-label="Toggle color theme"
            class="px-2 py-1 rounded-md border border-muted/40 hover:border-cyan transition-colors duration-200"
            on:click=move |_| theme.toggle()
        >
            {move || if theme.get().is_dark() { "☀" } else { "🌙" }}
        </button>
    }
}
