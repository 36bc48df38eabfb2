//! Error boundary component for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let details = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Unknown error".to_string(),
                };
                dioxus::logger::tracing::error!("Render error caught by boundary {}: {}", boundary_name(), details);
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 12px; padding: 24px;",
                        h1 {
                            style: "color: #B91C1C; font-size: 32px; margin: 0;",
                            "화면을 표시하는 중 오류가 발생했습니다"
                        }
                        p {
                            style: "color: #7F1D1D; font-size: 16px; margin: 0;",
                            "Boundary: {boundary_name}"
                        }
                        pre {
                            style: "color: black; border: 1px solid #FCA5A5; padding: 10px; border-radius: 5px; text-wrap: auto; max-height: 400px; overflow-y: auto;",
                            "{details}"
                        }
                        div {
                            style: "display: flex; flex-direction: row; gap: 8px;",
                            button {
                                class: "btn",
                                onclick: move |_| err.clear_errors(),
                                "다시 시도"
                            }
                            a { class: "btn", href: "/", "홈으로" }
                        }
                    }
                }
            },
            children
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn FailingChild() -> Element {
        Err(anyhow::anyhow!("catalog unavailable"))?;
        rsx! { "unreachable" }
    }

    #[component]
    fn BoundaryHarness() -> Element {
        rsx! {
            GlobalErrorBoundary {
                boundary_name: "Products",
                FailingChild {}
            }
        }
    }

    #[test]
    fn test_boundary_shows_name_and_error() {
        let mut dom = VirtualDom::new(BoundaryHarness);
        dom.rebuild_in_place();
        dom.render_immediate_to_vec();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Boundary: Products"));
        assert!(html.contains("catalog unavailable"));
        assert!(!html.contains("unreachable"));
    }
}
