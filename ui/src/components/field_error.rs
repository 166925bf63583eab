use payloads::requests::FieldErrors;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub errors: FieldErrors,
    pub field: AttrValue,
}

/// Inline validation message for one form field.
#[function_component]
pub fn FieldErrorText(props: &Props) -> Html {
    match props.errors.get(&props.field) {
        Some(message) => html! {
            <p class="mt-1 text-sm text-red-700 dark:text-red-400">
                {message}
            </p>
        },
        None => html! {},
    }
}
