use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Invoked with the entered term when the form is submitted.
    pub on_search: Callback<String>,
    #[prop_or(AttrValue::Static("Search..."))]
    pub placeholder: AttrValue,
}

/// Search input that reports its value on submit.
#[function_component]
pub fn SearchBox(props: &Props) -> Html {
    let input_ref = use_node_ref();

    let on_submit = {
        let input_ref = input_ref.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                on_search.emit(input.value());
            }
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex gap-2">
            <input
                ref={input_ref}
                type="search"
                placeholder={props.placeholder.clone()}
                class="flex-1 px-3 py-2 border border-neutral-300 dark:border-neutral-600
                       rounded-md shadow-sm bg-white dark:bg-neutral-700
                       text-neutral-900 dark:text-neutral-100
                       focus:outline-none focus:ring-2 focus:ring-neutral-500"
            />
            <button
                type="submit"
                class="px-4 py-2 rounded-md text-sm font-medium text-white
                       bg-neutral-900 hover:bg-neutral-800
                       dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                       transition-colors duration-200"
            >
                {"Search"}
            </button>
        </form>
    }
}
