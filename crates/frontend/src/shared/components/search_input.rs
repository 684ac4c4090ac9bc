use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(into)]
    placeholder: String,
) -> impl IntoView {
    view! {
        <div class="search-input" style="width: 320px;">
            <Input value=value placeholder=placeholder>
                <InputPrefix slot>{icon("search")}</InputPrefix>
            </Input>
        </div>
    }
}
