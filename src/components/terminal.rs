//! Terminal Pane Component
//!
//! Output of the last run, plus the captured application log.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_ide;
use crate::store::AppStateStoreFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TerminalView {
    Output,
    Logs,
}

#[component]
pub fn TerminalPane() -> impl IntoView {
    let store = use_ide().store;
    let view_mode = RwSignal::new(TerminalView::Output);
    let log_lines = RwSignal::new(Vec::<String>::new());

    let show_logs = move |_| {
        log_lines.set(commands::recent_log_lines());
        view_mode.set(TerminalView::Logs);
    };
    let on_clear = move |_| match view_mode.get_untracked() {
        TerminalView::Output => store.run_result().set(None),
        TerminalView::Logs => log_lines.set(Vec::new()),
    };

    view! {
        <section class="terminal">
            <div class="terminal-header">
                <div class="terminal-tabs">
                    <button
                        class="terminal-tab"
                        class:active=move || view_mode.get() == TerminalView::Output
                        on:click=move |_| view_mode.set(TerminalView::Output)
                    >
                        "Output"
                    </button>
                    <button
                        class="terminal-tab"
                        class:active=move || view_mode.get() == TerminalView::Logs
                        title="Refresh logs"
                        on:click=show_logs
                    >
                        "Logs"
                    </button>
                </div>
                <button class="action-btn" title="Clear" on:click=on_clear>
                    <i class="fas fa-ban"></i>
                </button>
            </div>
            <div class="terminal-body">
                {move || match view_mode.get() {
                    TerminalView::Output => view! {
                        <Show when=move || store.running().get()>
                            <div class="terminal-running">"Running..."</div>
                        </Show>
                        {move || store.run_result().get().map(|result| {
                            let exit_class = if result.is_success() { "exit-line success" } else { "exit-line failure" };
                            view! {
                                <pre class="stdout">{result.stdout}</pre>
                                {(!result.stderr.is_empty()).then(|| view! {
                                    <pre class="stderr">{result.stderr.clone()}</pre>
                                })}
                                <div class=exit_class>
                                    {format!("Process finished with exit code {}", result.exit_code)}
                                </div>
                            }
                        })}
                    }.into_any(),
                    TerminalView::Logs => view! {
                        <For
                            each=move || log_lines.get().into_iter().enumerate()
                            key=|(i, line)| (*i, line.clone())
                            children=|(_, line)| view! { <pre class="log-line">{line}</pre> }
                        />
                    }.into_any(),
                }}
            </div>
        </section>
    }
}
