use crate::catalog::LOCATIONS;
use leptos::prelude::*;

/// Location picker.
///
/// Only `selected` changes; the turf grid is not filtered by it yet.
#[component]
pub fn LocationModal(open: RwSignal<bool>, selected: RwSignal<String>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let choose = move |location: &'static str| {
        selected.set(location.to_string());
        open.set(false);
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg mb-4">"Select Location"</h3>
                <div class="grid grid-cols-2 gap-2">
                    {LOCATIONS
                        .into_iter()
                        .map(|location| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if selected.with(|s| s == location) {
                                            "btn btn-primary"
                                        } else {
                                            "btn btn-ghost bg-base-200"
                                        }
                                    }
                                    on:click=move |_| choose(location)
                                >
                                    {location}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-xs text-base-content/50 mt-4">
                    "Filtering the turf list by location is not available yet."
                </p>
                <div class="modal-action">
                    <button type="button" class="btn" on:click=move |_| open.set(false)>
                        "Close"
                    </button>
                </div>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
