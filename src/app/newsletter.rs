use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
};
use leptos_use::use_debounce_fn_with_arg;

use crate::content::{site_content, SiteContent};
use crate::subscribe::{
    SubscribeForm, Ticket, Validation, DEBOUNCE_MS, ERROR_RESPONSE_ID, SUCCESS_RESPONSE_ID,
};
#[cfg(feature = "hydrate")]
use crate::subscribe::{
    ensure_loaded, poll_outcome, DocumentHost, SubscribeOutcome, POLL_INTERVAL_MS,
    VALIDATE_SCRIPT_SRC,
};

/// Renders nothing, and starts no timers, when switched off in the content.
#[component]
pub fn Newsletter() -> impl IntoView {
    let content = match site_content() {
        Ok(content) if content.newsletter_enabled() => Some(content),
        Ok(_) => None,
        Err(e) => {
            log::error!("newsletter hidden: {e}");
            None
        }
    };
    content.map(|content| view! { <SubscribeCard content /> })
}

/// Hands every poll of the page to `on_poll` until the owner is cleaned up.
#[cfg(feature = "hydrate")]
fn watch_completion<F>(on_poll: F)
where
    F: Fn(Option<SubscribeOutcome>) + Clone + 'static,
{
    use leptos_use::use_interval_fn;

    let _ = use_interval_fn(
        move || {
            if let Some(page) = DocumentHost::current() {
                on_poll(poll_outcome(&page));
            }
        },
        POLL_INTERVAL_MS,
    );
}

#[component]
fn SubscribeCard(content: &'static SiteContent) -> impl IntoView {
    let (form, set_form) = signal(SubscribeForm::new());

    // a late firing after unmount hits a disposed signal and does nothing
    let debounced_settle = use_debounce_fn_with_arg(
        move |ticket: Ticket| {
            set_form.try_update(|f| f.settle(ticket));
        },
        DEBOUNCE_MS,
    );

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            if let Some(mut page) = DocumentHost::current() {
                if ensure_loaded(&mut page) {
                    log::debug!("attached {VALIDATE_SCRIPT_SRC}");
                }
            }
        });
        watch_completion(move |observed| {
            // most polls see what was already applied; skip the signal write
            let changed = form
                .try_with_untracked(|f| f.outcome_changed(&observed))
                .unwrap_or(false);
            if !changed {
                return;
            }
            if let Some(Some(outcome)) = set_form.try_update(|f| f.observe(observed)) {
                log::debug!("subscription resolved: {outcome:?}");
            }
        });
    }

    let on_input = move |ev: Event| {
        let value = event_target_value(&ev);
        if let Some(Validation::Deferred(ticket)) = set_form.try_update(|f| f.on_change(value)) {
            debounced_settle(ticket);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        let accepted = set_form
            .try_update(|f| f.on_submit_attempt())
            .is_some_and(|res| res.is_ok());
        if !accepted {
            ev.prevent_default();
        }
        // otherwise the browser posts to the provider
    };

    let newsletter = &content.newsletter;
    let mailchimp = &content.mailchimp;
    let effects = &mailchimp.effects;

    view! {
        <section class="relative overflow-hidden w-full p-8 mb-4 rounded-lg border border-muted/30 bg-brightBlack/20 flex flex-col items-center text-center">
            <div class="absolute inset-0 pointer-events-none" style=effects.mask.style()>
                {effects
                    .layers()
                    .into_iter()
                    .map(|style| view! { <div class="absolute inset-0" style=style></div> })
                    .collect_view()}
            </div>
            <div class="relative max-w-md">
                <h2 class="text-2xl font-bold mb-2">{content.newsletter_title()}</h2>
                <p class="text-lg text-muted mb-6">{newsletter.description.clone()}</p>
            </div>
            <form
                class="relative w-full flex justify-center"
                action=mailchimp.action.clone()
                method="post"
                id="mc-embedded-subscribe-form"
                name="mc-embedded-subscribe-form"
                on:submit=on_submit
            >
                <div id="mc_embed_signup_scroll" class="flex flex-col sm:flex-row gap-2 w-full max-w-md">
                    <div class="flex-grow text-left">
                        <input
                            id="mce-EMAIL"
                            name="EMAIL"
                            type="email"
                            placeholder="Email"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=on_input
                            on:blur=move |_| set_form.update(SubscribeForm::on_blur)
                            aria-invalid=move || form.with(|f| f.error.is_some()).to_string()
                            class="w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan bg-background text-foreground placeholder-muted"
                        />
                        {move || {
                            form.with(|f| f.error_message())
                                .map(|msg| {
                                    view! {
                                        <p class="mt-1 text-sm text-red" role="alert">
                                            {msg}
                                        </p>
                                    }
                                })
                        }}
                    </div>
                    <div id="mce-responses" class="clear foot">
                        <div class="response" id=ERROR_RESPONSE_ID style="display: none"></div>
                        <div class="response" id=SUCCESS_RESPONSE_ID style="display: none"></div>
                    </div>
                    <div aria-hidden="true" style="position: absolute; left: -5000px">
                        <input
                            type="text"
                            readonly
                            name=mailchimp.honeypot_field()
                            tabindex="-1"
                            value=""
                        />
                    </div>
                    <div class="clear">
                        <button
                            id="mc-embedded-subscribe"
                            type="submit"
                            value="Subscribe"
                            disabled=move || form.with(|f| !f.can_submit())
                            aria-busy=move || form.with(|f| f.submitting).to_string()
                            class="w-full h-12 px-6 rounded-md font-medium bg-cyan/20 hover:bg-cyan/30 text-cyan border border-cyan/30 transition-all duration-200 disabled:opacity-50"
                        >
                            {move || form.with(|f| f.button_label())}
                        </button>
                    </div>
                </div>
            </form>
        </section>
    }
}
