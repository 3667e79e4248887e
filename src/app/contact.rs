use leptos::prelude::*;

use super::{context::use_page, reveal::RevealSection};
use crate::{
    content::Section,
    page::{Field, PageEvent, Reveal},
};

const FIELD_CLASS: &str = "w-full px-6 py-4 bg-gray-800/50 border border-gray-700 rounded-lg focus:border-purple-500 focus:outline-none transition text-white placeholder-gray-500";

#[component]
pub fn Contact() -> impl IntoView {
    let page = use_page();
    let visible = page.is_visible(Section::Contact);
    view! {
        <RevealSection
            section=Section::Contact
            class="py-32 px-6 bg-gradient-to-b from-transparent to-black/50"
        >
            <div class="max-w-4xl mx-auto text-center">
                <h2 class=move || {
                    format!(
                        "text-5xl font-bold mb-6 bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent transition-all duration-1000 delay-200 {}",
                        Reveal::Grow.classes(visible.get()),
                    )
                }>"Get In Touch"</h2>
                <p class=move || {
                    format!(
                        "text-xl text-gray-300 mb-12 transition-all duration-1000 delay-300 {}",
                        Reveal::Fade.classes(visible.get()),
                    )
                }>"Interested in working together? Let's start a conversation!"</p>
                <div class=move || {
                    format!(
                        "bg-gradient-to-br from-gray-900/80 to-purple-900/20 backdrop-blur border border-gray-800 rounded-2xl p-10 max-w-2xl mx-auto shadow-2xl transition-all duration-1000 delay-400 {}",
                        Reveal::Grow.classes(visible.get()),
                    )
                }>
                    <ContactFields />
                </div>
            </div>
        </RevealSection>
    }
}

/// The inputs and the send button. There is no `<form>`, so the browser never
/// validates or submits the fields on its own; only the button sends.
#[component]
fn ContactFields() -> impl IntoView {
    let page = use_page();
    view! {
        <div class="space-y-6">
            <FormInput field=Field::Name />
            <FormInput field=Field::Email />
            <FormInput field=Field::Phone />
            <MessageInput />
            <button
                type="button"
                on:click=move |_| page.dispatch(PageEvent::Submit)
                class="w-full bg-gradient-to-r from-purple-600 to-pink-600 py-4 rounded-lg font-bold hover:scale-105 transition-all shadow-lg shadow-purple-500/50"
            >
                "Start Conversation"
            </button>
        </div>
    }
}

#[component]
fn FormInput(field: Field) -> impl IntoView {
    let page = use_page();
    let value = page.field(field);
    view! {
        <input
            type=field.input_type()
            placeholder=field.placeholder()
            prop:value=move || value.get()
            on:input=move |ev| page.dispatch(PageEvent::FieldChanged(field, event_target_value(&ev)))
            class=FIELD_CLASS
        />
    }
}

#[component]
fn MessageInput() -> impl IntoView {
    let page = use_page();
    let value = page.field(Field::Message);
    view! {
        <textarea
            placeholder=Field::Message.placeholder()
            prop:value=move || value.get()
            on:input=move |ev| {
                page.dispatch(PageEvent::FieldChanged(Field::Message, event_target_value(&ev)))
            }
            rows="4"
            class=FIELD_CLASS
        ></textarea>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::context::PageContext;

    fn render_fields() -> String {
        Owner::new().with(|| {
            PageContext::provide();
            view! { <ContactFields /> }.to_html()
        })
    }

    #[test]
    fn test_fields_are_not_a_browser_form() {
        let html = render_fields();
        // a <form> would let the browser reject a malformed email before we see it
        assert!(!html.contains("<form"));
        assert!(html.contains(r#"type="button""#));
        assert!(!html.contains(r#"type="submit""#));
        assert!(html.contains("Start Conversation"));
    }

    #[test]
    fn test_all_four_fields_render() {
        let html = render_fields();
        for field in [Field::Name, Field::Email, Field::Phone, Field::Message] {
            assert!(html.contains(field.placeholder()), "missing {field:?}");
        }
        assert!(html.contains("<textarea"));
    }
}
