use leptos::prelude::*;

use crate::contact::{ContactForm, SubmissionOutcome};

/// Failures, including blank fields, come back as `Ok(Failure)` with a 200 so
/// the client can show the reason inline.
#[server]
pub async fn submit_contact(form: ContactForm) -> Result<SubmissionOutcome, ServerFnError> {
    use std::sync::Arc;

    use crate::contact::{submit, LogSink, SharedSink};

    let SharedSink(sink) =
        use_context::<SharedSink>().unwrap_or_else(|| SharedSink(Arc::new(LogSink)));
    let outcome = submit(sink.as_ref(), &form);
    if let SubmissionOutcome::Failure(reason) = &outcome {
        tracing::warn!(%reason, "contact submission rejected");
    }
    Ok(outcome)
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="container">
            <h2 class="mb-8">"Contact"</h2>
            <div class="mx-auto flex flex-col rounded-lg border bg-background pt-0 md:gap-8 md:px-8 md:pb-8">
                <h4 class="p-8 text-center">"Reach out and let's work on a project together!"</h4>
                <div class="grid grid-cols-1 gap-8 md:grid-cols-2">
                    <img
                        src="/images/contact-section.svg"
                        class="pointer-events-none -mb-20 -mt-14 select-none dark:invert sm:-mb-28 sm:-mt-16 md:-mt-10 lg:-mb-20 lg:-mt-14 xl:-mb-28 xl:-mt-24"
                        alt="Illustration"
                    />
                    <div class="p-8 md:p-0">
                        <ContactFormView />
                    </div>
                </div>
            </div>
        </section>
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border bg-background focus:outline-none focus:ring-2";

#[component]
fn ContactFormView() -> impl IntoView {
    let submit = ServerAction::<SubmitContact>::new();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (invalid, set_invalid) = signal(None::<String>);

    Effect::watch(
        move || {
            submit
                .value()
                .with(|v| matches!(v, Some(Ok(SubmissionOutcome::Success))))
        },
        move |sent, _, _| {
            if *sent {
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
            }
        },
        false,
    );

    let feedback = move || {
        if let Some(err) = invalid.get() {
            return Some((true, err));
        }
        submit.value().with(|v| match v {
            Some(Ok(SubmissionOutcome::Success)) => {
                Some((false, "Thanks! Your message has been sent.".to_string()))
            }
            Some(Ok(SubmissionOutcome::Failure(reason))) => Some((true, reason.clone())),
            Some(Err(e)) => Some((true, format!("Couldn't send your message: {e}"))),
            None => None,
        })
    };

    view! {
        <form
            class="flex flex-col gap-4"
            on:submit=move |ev| {
                ev.prevent_default();
                let form = ContactForm {
                    name: name.get_untracked(),
                    email: email.get_untracked(),
                    message: message.get_untracked(),
                };
                match form.validate() {
                    Err(err) => set_invalid.set(Some(err.to_string())),
                    Ok(_) => {
                        set_invalid.set(None);
                        submit.dispatch(SubmitContact { form });
                    }
                }
            }
        >
            <label for="contact_name">"Name"</label>
            <input
                id="contact_name"
                type="text"
                class=INPUT_CLASS
                prop:value=name
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <label for="contact_email">"Email"</label>
            <input
                id="contact_email"
                type="email"
                class=INPUT_CLASS
                prop:value=email
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <label for="contact_message">"Message"</label>
            <textarea
                id="contact_message"
                rows="5"
                class=INPUT_CLASS
                prop:value=message
                on:input=move |ev| set_message.set(event_target_value(&ev))
            ></textarea>
            {move || {
                feedback()
                    .map(|(is_err, text)| {
                        view! {
                            <p
                                role="status"
                                class=if is_err { "text-red-500" } else { "text-green-600" }
                            >
                                {text}
                            </p>
                        }
                    })
            }}
            <button
                type="submit"
                class="self-end px-6 py-2 rounded-md border transition-all duration-200 hover:scale-105 disabled:opacity-50"
                disabled=move || submit.pending().get()
            >
                "Send"
            </button>
        </form>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::contact::{ContactSink, SharedSink, ValidContact};

    #[derive(Default)]
    struct FailingSink {
        calls: Mutex<usize>,
    }

    impl ContactSink for FailingSink {
        fn deliver(&self, _contact: &ValidContact) -> SubmissionOutcome {
            *self.calls.lock().unwrap() += 1;
            SubmissionOutcome::Failure("mailbox full".to_string())
        }
    }

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn with_sink(sink: Arc<FailingSink>) -> Owner {
        let owner = Owner::new();
        owner.set();
        provide_context(SharedSink(sink));
        owner
    }

    #[tokio::test]
    async fn test_sink_failure_is_returned_as_outcome() {
        let sink = Arc::new(FailingSink::default());
        let _owner = with_sink(Arc::clone(&sink));

        let res = submit_contact(form("Ada", "ada@example.com", "Hello")).await;
        assert_eq!(
            res.unwrap(),
            SubmissionOutcome::Failure("mailbox full".to_string())
        );
        assert_eq!(*sink.calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_blank_field_is_returned_as_outcome() {
        let sink = Arc::new(FailingSink::default());
        let _owner = with_sink(Arc::clone(&sink));

        let res = submit_contact(form("  ", "ada@example.com", "Hello")).await;
        assert_eq!(
            res.unwrap(),
            SubmissionOutcome::Failure("Please enter your name".to_string())
        );
        assert_eq!(*sink.calls.lock().unwrap(), 0);
    }
}
