use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ProgressIndicatorProps {
    pub progress: u8,
}

/// Renders a percentage as a horizontal fill bar. Stateless and pure: any
/// value is displayed as-is, keeping it in [0, 100] is the caller's contract.
#[component]
pub fn ProgressIndicator(props: ProgressIndicatorProps) -> Element {
    let progress = props.progress;

    rsx! {
        div {
            class: "progress-bar-container",
            div {
                class: "progress-bar-background",
                div {
                    class: "progress-bar-fill",
                    style: format!("width: {}%", progress),
                }
            }
            span {
                class: "progress-percentage",
                "{progress}%"
            }
        }
    }
}
