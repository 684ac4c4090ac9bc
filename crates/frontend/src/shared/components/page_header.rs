use leptos::prelude::*;

/// Title row of a page with an actions slot on the right
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <p class="page__subtitle">{s}</p>
                })}
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_without_actions_needs_no_children() {
        let props = PageHeaderProps::builder().title("Dashboard").build();
        assert_eq!(props.title, "Dashboard");
        assert!(props.children.is_none());
    }
}
