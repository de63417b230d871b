use leptos::prelude::*;

use crate::state::ListingState;

/// Previous / numbered / next page buttons. Hidden for a single page.
#[component]
pub fn PaginationBar(listing: RwSignal<ListingState>) -> impl IntoView {
    let page_class = move |n: u32| {
        if listing.with(|l| l.page == n) {
            "px-3 py-1.5 rounded-lg text-sm font-medium bg-blue-600 text-white"
        } else {
            "px-3 py-1.5 rounded-lg text-sm font-medium text-gray-700 bg-white border border-gray-300 hover:bg-gray-50"
        }
    };

    view! {
        <Show when=move || listing.with(ListingState::has_pages)>
            <nav class="flex items-center justify-center gap-2 my-6">
                <button
                    type="button"
                    class="px-3 py-1.5 rounded-lg text-sm border border-gray-300 bg-white disabled:opacity-50"
                    disabled=move || listing.with(|l| l.page <= 1)
                    on:click=move |_| listing.update(|l| l.go_to(l.page.saturating_sub(1)))
                >
                    "Previous"
                </button>
                <For
                    each=move || listing.with(ListingState::page_numbers)
                    key=|n| *n
                    children=move |n: u32| {
                        view! {
                            <button
                                type="button"
                                class=move || page_class(n)
                                on:click=move |_| listing.update(|l| l.go_to(n))
                            >
                                {n}
                            </button>
                        }
                    }
                />
                <button
                    type="button"
                    class="px-3 py-1.5 rounded-lg text-sm border border-gray-300 bg-white disabled:opacity-50"
                    disabled=move || listing.with(|l| l.page >= l.total_pages)
                    on:click=move |_| listing.update(|l| l.go_to(l.page + 1))
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
