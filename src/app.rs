//! Cloud IDE Frontend App
//!
//! Main application component: toolbar on top, explorer sidebar on the left,
//! tabs, editor and terminal on the right.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use ide_core::gateway::ExecutionGateway;
use ide_core::repository::MemoryStore;
use ide_core::IdeSession;

use crate::commands::{self, LocalStorageStore};
use crate::components::{EditorHost, Explorer, ProjectSwitcher, SearchPanel, TabBar, TerminalPane, Toolbar};
use crate::context::IdeContext;
use crate::store::{AppState, AppStateStoreFields};

/// Open the session on local storage, falling back to memory when the
/// browser refuses writes
fn open_session(config: ide_core::IdeConfig) -> Result<IdeSession, String> {
    match IdeSession::open(Rc::new(LocalStorageStore), config.clone()) {
        Ok(session) => Ok(session),
        Err(e) => {
            tracing::warn!(error = %e, "local storage unusable, keeping this session in memory");
            IdeSession::open(Rc::new(MemoryStore::new()), config).map_err(|e| e.to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Splitter {
    Sidebar,
    Terminal,
}

fn viewport_px(dimension: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> u32 {
    dimension.ok().and_then(|v| v.as_f64()).unwrap_or_default() as u32
}

#[component]
pub fn App() -> impl IntoView {
    let config = commands::load_config(&LocalStorageStore);
    let autosave_ms = config.autosave_interval_ms();
    let gateway = ExecutionGateway::from_config(&config.execution);
    tracing::info!(backend = gateway.backend_name(), "execution backend selected");

    let session = match open_session(config) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(error = %e, "could not open session");
            return view! { <div class="fatal-error">{format!("Could not start the IDE: {}", e)}</div> }
                .into_any();
        }
    };

    let store = Store::new(AppState::default());
    provide_context(store);
    let ctx = IdeContext::new(session, gateway, store);
    provide_context(ctx);

    // Auto-save on a fixed interval, independent of individual edits
    Interval::new(autosave_ms, move || ctx.autosave()).forget();

    // Splitter drags: the sidebar width is stored on release, the terminal
    // height only lives for the session
    let (resizing, set_resizing) = signal(None::<Splitter>);
    let move_handle = window_event_listener(ev::mousemove, move |ev| {
        let win = window();
        match resizing.get_untracked() {
            Some(Splitter::Sidebar) => {
                let viewport = viewport_px(win.inner_width());
                let requested = ev.client_x().max(0) as u32;
                if let Some(width) = ctx.with(|s| s.clamp_sidebar_drag(requested, viewport)).flatten() {
                    store.sidebar_width().set(width);
                }
            }
            Some(Splitter::Terminal) => {
                let viewport = viewport_px(win.inner_height());
                let pointer = ev.client_y().max(0) as u32;
                if let Some(height) = ctx.with(|s| s.clamp_terminal_drag(pointer, viewport)).flatten() {
                    store.terminal_height().set(height);
                }
            }
            None => {}
        }
    });
    let up_handle = window_event_listener(ev::mouseup, move |_| {
        let Some(splitter) = resizing.get_untracked() else {
            return;
        };
        set_resizing.set(None);
        if splitter == Splitter::Sidebar {
            let width = store.sidebar_width().get_untracked();
            if let Some(Err(e)) = ctx.with(|s| s.save_sidebar_width(width)) {
                tracing::warn!(error = %e, "could not save sidebar width");
            }
        }
    });
    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
    });

    view! {
        <div
            class="ide-layout"
            class:resizing-cols=move || resizing.get() == Some(Splitter::Sidebar)
            class:resizing-rows=move || resizing.get() == Some(Splitter::Terminal)
        >
            <Toolbar />
            <div class="ide-body">
                <aside
                    class="sidebar"
                    style=move || format!("width: {}px;", store.sidebar_width().get())
                >
                    <ProjectSwitcher />
                    <SearchPanel />
                    <Explorer />
                </aside>
                <div class="sidebar-resizer" on:mousedown=move |ev| {
                    ev.prevent_default();
                    set_resizing.set(Some(Splitter::Sidebar));
                } />
                <main class="editor-column">
                    <TabBar />
                    <EditorHost />
                    <div class="terminal-resizer" on:mousedown=move |ev| {
                        ev.prevent_default();
                        set_resizing.set(Some(Splitter::Terminal));
                    } />
                    <div
                        class="terminal-slot"
                        style=move || format!("height: {}px;", store.terminal_height().get())
                    >
                        <TerminalPane />
                    </div>
                </main>
            </div>
        </div>
    }
    .into_any()
}
