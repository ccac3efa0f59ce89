use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;

#[cfg(feature = "ssr")]
use crate::prose::get_prose;
use crate::prose::{Prose, GLOBAL_PROSE_CACHE};

#[server(input = GetUrl)]
pub async fn get_prose_server(name: String) -> Result<Prose, ServerFnError> {
    get_prose(&name).map_err(|e| {
        tracing::warn!(error = %e, "couldn't load prose");
        ServerFnError::new(e)
    })
}

/// Loads an embedded markdown document once and hands it to `render`.
#[component]
pub fn ProseLoader<F, V>(#[prop(into)] name: String, render: F) -> impl IntoView
where
    F: Fn(Prose) -> V + Copy + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let prose = Resource::new(
        move || name.clone(),
        move |name| async move {
            let cache = &*GLOBAL_PROSE_CACHE;
            if let Some(p) = cache.get(&name) {
                return Ok((*p).clone());
            }
            let res = get_prose_server(name.clone()).await;
            if let Ok(p) = &res {
                cache.insert(name, p.clone());
            }
            res
        },
    );

    view! {
        <Suspense fallback=move || {
            view! {
                <div class="space-y-3">
                    <div class="loading-skeleton h-5 rounded"></div>
                    <div class="loading-skeleton h-5 rounded w-3/4"></div>
                    <div class="loading-skeleton h-5 rounded w-2/3"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                match prose.await {
                    Ok(p) => render(p).into_any(),
                    Err(_) => {
                        view! { <p class="text-muted">"This section couldn't be loaded."</p> }
                            .into_any()
                    }
                }
            })}
        </Suspense>
    }
}
