//! Inline delete prompt for files and projects
//!
//! Folders go through a blocking `window.confirm` because they cascade.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    File,
    Project,
}

impl DeleteTarget {
    fn noun(self) -> &'static str {
        match self {
            DeleteTarget::File => "file",
            DeleteTarget::Project => "project",
        }
    }

    fn prompt(self, name: &str) -> String {
        format!("Delete {} \"{}\"?", self.noun(), name)
    }

    fn button_class(self) -> &'static str {
        match self {
            DeleteTarget::File => "action-btn delete",
            DeleteTarget::Project => "project-delete-btn",
        }
    }
}

/// `×` that turns into `Delete <kind> "<name>"?` with confirm and cancel
///
/// Leaving the control with the pointer disarms it.
#[component]
pub fn ConfirmDelete(
    target: DeleteTarget,
    #[prop(into)] name: Signal<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let noun = target.noun();

    view! {
        <span class="confirm-delete" on:mouseleave=move |_| armed.set(false)>
            {move || if armed.get() {
                view! {
                    <span class="delete-confirm">
                        <span class="delete-confirm-text">
                            {move || target.prompt(&name.get())}
                        </span>
                        <button
                            class="confirm-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                armed.set(false);
                                on_confirm.run(());
                            }
                        >
                            "Delete"
                        </button>
                        <button
                            class="cancel-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                armed.set(false);
                            }
                        >
                            "Cancel"
                        </button>
                    </span>
                }.into_any()
            } else {
                view! {
                    <button
                        class=target.button_class()
                        title=format!("Delete {}", noun)
                        on:click=move |ev| {
                            ev.stop_propagation();
                            armed.set(true);
                        }
                    >
                        "×"
                    </button>
                }.into_any()
            }}
        </span>
    }
}
