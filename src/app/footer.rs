use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::portfolio::OWNER;

/// Year the site was built, from the timestamp `build.rs` records.
fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let stamp = build_year()
        .map(|year| year.to_string())
        .unwrap_or_else(|| format!("v{}", env!("CARGO_PKG_VERSION")));
    view! {
        <footer class="py-8 text-center text-sm text-muted bg-navy border-t border-navy-light">
            {format!("© {stamp} {}", OWNER.full_name())}
        </footer>
    }
}
