use leptos::prelude::*;

use crate::config::Identity;
use crate::downloads::DownloadCounter;

#[component]
pub fn Hero(identity: Identity) -> impl IntoView {
    let (downloads, set_downloads) = signal(DownloadCounter::default());
    let track_download = move |_| {
        set_downloads.update(|counter| {
            let total = counter.record();
            log::info!("resume download #{total}");
        });
    };

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center pt-28 px-4 sm:px-6 lg:px-8 section-content"
        >
            <div class="max-w-4xl mx-auto text-center lg:text-left">
                <div class="inline-flex items-center gap-3 mb-8 px-6 py-3 rounded-2xl border border-muted/40 bg-brightBlack/30">
                    <span class="w-2 h-2 rounded-full bg-cyan animate-pulse"></span>
                    <span class="text-cyan font-bold uppercase tracking-widest">
                        {identity.role}
                    </span>
                </div>
                <h1 class="text-4xl sm:text-6xl font-black leading-tight mb-8">
                    "Hi, I'm " <span class="text-purple">{identity.name}</span>
                </h1>
                <p class="text-lg sm:text-2xl text-muted mb-10 leading-relaxed">
                    {identity.tagline}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                    <a
                        href="#contact"
                        class="bg-blue/20 hover:bg-blue/30 text-blue px-8 py-4 rounded-2xl font-bold border border-blue/30 transition-all duration-300"
                    >
                        "Get In Touch"
                    </a>
                    <a
                        href=identity.resume_href
                        download="RamaLakshmiResume.pdf"
                        on:click=track_download
                        class="border border-muted/40 hover:border-cyan px-8 py-4 rounded-2xl font-bold transition-all duration-300"
                    >
                        {move || format!("Resume ({})", downloads.get().count())}
                    </a>
                </div>
                <div class="flex gap-4 mt-10 justify-center lg:justify-start text-2xl">
                    <a
                        href=identity.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-cyan transition-colors duration-200"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href=identity.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-blue hover:text-brightBlue transition-colors duration-200"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                </div>
            </div>
        </section>
    }
}
