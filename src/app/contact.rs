use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
};

use crate::config::SiteConfig;
use crate::contact::{ContactFormState, Field};

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-gray-50 dark:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-indigo-500";
const INPUT_ERROR_CLASS: &str = "w-full px-4 py-2 rounded-lg border bg-gray-50 dark:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-indigo-500 border-red-500 dark:border-red-500";

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let send_delay = config.send_delay();
    let ack_delay = config.acknowledgment_delay();
    let state = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut accepted = false;
        state.update(|s| accepted = s.submit());
        if !accepted {
            return;
        }
        // nothing is sent; the delay stands in for the request
        set_timeout(
            move || {
                state.update(ContactFormState::finish_sending);
                set_timeout(
                    move || state.update(ContactFormState::hide_acknowledgment),
                    ack_delay,
                );
            },
            send_delay,
        );
    };

    view! {
        <form
            id="contact-form"
            novalidate=true
            on:submit=on_submit
            class="scroll-target max-w-xl mx-auto bg-white dark:bg-gray-800 p-8 rounded-lg shadow-lg"
        >
            {Field::ALL.into_iter().map(|field| view! { <FormField field state /> }).collect_view()}
            <button
                type="submit"
                disabled=move || state.with(ContactFormState::is_sending)
                class="w-full bg-indigo-500 hover:bg-indigo-600 disabled:opacity-60 text-white font-bold py-3 px-6 rounded-lg transition-colors duration-300"
            >
                {move || state.with(|s| s.submit_label())}
            </button>
            <div
                id="form-success"
                class=move || {
                    if state.with(ContactFormState::is_acknowledged) {
                        "mt-4 p-4 rounded-lg bg-green-100 dark:bg-green-900 text-green-700 dark:text-green-200 text-center"
                    } else {
                        "mt-4 p-4 rounded-lg bg-green-100 dark:bg-green-900 text-green-700 dark:text-green-200 text-center hidden"
                    }
                }
            >
                "Thank you! Your message has been sent successfully."
            </div>
        </form>
    }
}

#[component]
fn FormField(field: Field, state: RwSignal<ContactFormState>) -> impl IntoView {
    let error = move || state.with(|s| s.error(field));
    let input_class = move || {
        if error().is_some() {
            INPUT_ERROR_CLASS
        } else {
            INPUT_CLASS
        }
    };
    let value = move || state.with(|s| s.form.value(field).to_string());
    let on_input = move |ev: Event| state.update(|s| s.set_field(field, event_target_value(&ev)));

    let control = if field.is_multiline() {
        Either::Left(view! {
            <textarea
                id=field.id()
                name=field.id()
                rows="5"
                class=input_class
                prop:value=value
                on:input=on_input
            ></textarea>
        })
    } else {
        Either::Right(view! {
            <input
                id=field.id()
                name=field.id()
                type=field.input_type()
                class=input_class
                prop:value=value
                on:input=on_input
            />
        })
    };

    view! {
        <div class="mb-4">
            <label for=field.id() class="block mb-2 font-semibold">
                {field.label()}
            </label>
            {control}
            <p
                data-error-for=field.id()
                class=move || {
                    if error().is_some() {
                        "text-red-500 text-sm mt-1"
                    } else {
                        "text-red-500 text-sm mt-1 hidden"
                    }
                }
            >
                {move || error().map(|e| e.to_string()).unwrap_or_default()}
            </p>
        </div>
    }
}
