use leptos::prelude::*;
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

use crate::motion::scroll_progress;

/// Page scroll fraction in [0, 1], recomputed on every window scroll and resize.
pub fn use_scroll_progress() -> Signal<f64> {
    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { width, height } = use_window_size();
    let progress = Memo::new(move |_| {
        // a resize reflows the page without necessarily scrolling it
        width.track();
        height.track();
        let offset = scroll_y.get();
        page_extent()
            .map(|(document_height, viewport_height)| {
                scroll_progress(offset, document_height, viewport_height)
            })
            .unwrap_or_default()
    });
    progress.into()
}

/// Document and viewport height. Read on every call since images loading in can grow the page.
#[cfg(feature = "hydrate")]
fn page_extent() -> Option<(f64, f64)> {
    let document_height = document().document_element()?.scroll_height();
    let viewport_height = window().inner_height().ok()?.as_f64()?;
    Some((f64::from(document_height), viewport_height))
}

#[cfg(not(feature = "hydrate"))]
fn page_extent() -> Option<(f64, f64)> {
    None
}

#[component]
pub fn ScrollProgress(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-accent origin-left z-[60]"
            role="progressbar"
            aria-label="Page scroll progress"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", progress.get() * 100.0)
            style=move || format!("transform: scaleX({:.4})", progress.get())
        ></div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_server_render_reports_no_progress() {
        let html = Owner::new().with(|| {
            let progress = use_scroll_progress();
            assert_eq!(progress.get_untracked(), 0.0);
            view! { <ScrollProgress progress /> }.to_html()
        });
        assert!(html.contains("role=\"progressbar\""));
        assert!(html.contains("aria-valuenow=\"0\""));
        assert!(html.contains("transform: scaleX(0.0000)"));
        assert!(!html.contains(";;"));
    }
}
