use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::config::ContactInfo;
use crate::contact::{
    emailjs::{self, EmailJsConfig},
    ContactForm, Field, SubmissionStatus, SubmitBlocked,
};

#[component]
pub fn ContactSection(info: ContactInfo) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    // Guarded submit: while a dispatch is in flight this is a no-op, so a
    // second click can never start a concurrent delivery. The page stays
    // responsive; only the form waits on the callback.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let outcome = form
            .try_update(|f| f.begin_submit())
            .unwrap_or(Err(SubmitBlocked::InFlight));
        let Ok(snapshot) = outcome else {
            return;
        };
        spawn_local(async move {
            let config = EmailJsConfig::from_build_env();
            let res = emailjs::send(config.as_ref(), &snapshot).await;
            if let Err(err) = &res {
                log::error!("contact form delivery failed: {err}");
            }
            form.update(|f| f.finish_submit(res));
        });
    };

    view! {
        <section id="contact" class="py-24 px-4 sm:px-6 lg:px-8 section-content">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl lg:text-5xl font-black mb-4">"Contact Me"</h2>
                    <p class="text-lg text-muted max-w-2xl mx-auto">
                        "Ready to transform your ideas into reality? Send me a message!"
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <InfoCard info />
                    <div class="bg-brightBlack/30 border border-muted/30 rounded-2xl p-8">
                        <form class="space-y-6" on:submit=on_submit>
                            <FormField
                                form
                                field=Field::SenderName
                                label="Full Name"
                                placeholder="Your name"
                            />
                            <FormField
                                form
                                field=Field::SenderEmail
                                label="Email Address"
                                placeholder="your@email.com"
                            />
                            <FormField
                                form
                                field=Field::Body
                                label="Message"
                                placeholder="Tell me about your project..."
                                textarea=true
                            />
                            <button
                                type="submit"
                                prop:disabled=move || form.with(|f| f.status().is_sending())
                                class="w-full bg-blue/20 hover:bg-blue/30 text-blue py-4 rounded-md font-bold border border-blue/30 transition-all duration-200 disabled:opacity-50"
                            >
                                {move || {
                                    if form.with(|f| f.status().is_sending()) {
                                        "Sending..."
                                    } else {
                                        "Send Message"
                                    }
                                }}
                            </button>
                            <StatusNotice form />
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoCard(info: ContactInfo) -> impl IntoView {
    view! {
        <div class="bg-brightBlack/30 border border-muted/30 rounded-2xl p-8 space-y-6">
            <h3 class="text-2xl font-black">"Get In Touch"</h3>
            <div>
                <p class="text-muted text-sm">"Mobile"</p>
                <a
                    href=format!("tel:{}", info.phone.replace(' ', ""))
                    class="text-lg font-bold hover:text-cyan transition-colors duration-200"
                >
                    {info.phone}
                </a>
            </div>
            <div>
                <p class="text-muted text-sm">"Email"</p>
                <a
                    href=format!("mailto:{}", info.email)
                    class="text-lg font-bold hover:text-cyan transition-colors duration-200 break-all"
                >
                    {info.email}
                </a>
            </div>
            <div>
                <p class="text-muted text-sm">"Location"</p>
                <p class="text-lg font-bold">{info.location}</p>
            </div>
        </div>
    }
}

/// One controlled form field: field-level replace on every input event, with
/// its validation error (if any) rendered inline underneath.
#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] textarea: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.message().get(field).to_string());
    let error = move || form.with(|f| f.errors().get(field));
    let input_class = "w-full px-4 py-3 rounded-md border border-muted/40 bg-background focus:outline-none focus:ring-2 focus:ring-cyan focus:border-cyan text-foreground";

    view! {
        <div>
            <label class="block font-medium mb-2">{label}</label>
            {if textarea {
                Either::Left(
                    view! {
                        <textarea
                            rows="5"
                            placeholder=placeholder
                            class=input_class
                            prop:value=value
                            on:input=move |ev| {
                                form.update(|f| f.update_field(field, event_target_value(&ev)))
                            }
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            type=if field == Field::SenderEmail { "email" } else { "text" }
                            placeholder=placeholder
                            class=input_class
                            prop:value=value
                            on:input=move |ev| {
                                form.update(|f| f.update_field(field, event_target_value(&ev)))
                            }
                        />
                    },
                )
            }}
            {move || {
                error()
                    .map(|err| {
                        view! { <p class="mt-1 text-sm text-red">{err.to_string()}</p> }
                    })
            }}
        </div>
    }
}

/// Transient outcome notice. Stays up until the next submit attempt replaces
/// the status.
#[component]
fn StatusNotice(form: RwSignal<ContactForm>) -> impl IntoView {
    move || match form.with(|f| f.status().clone()) {
        SubmissionStatus::Succeeded => Some(
            view! {
                <div class="p-3 rounded-md bg-green/20 border border-green/40 text-green">
                    "Thank you! Your message has been sent."
                </div>
            }
            .into_any(),
        ),
        SubmissionStatus::Failed(reason) => Some(
            view! {
                <div class="p-3 rounded-md bg-red/20 border border-red/40 text-red">
                    {format!("Something went wrong: {reason}. Please try again.")}
                </div>
            }
            .into_any(),
        ),
        SubmissionStatus::Idle | SubmissionStatus::Sending => None,
    }
}
