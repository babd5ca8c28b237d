use gloo::storage::{LocalStorage, Storage};
use log::warn;
use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use colony::{Colony, Worker};

use crate::header::Header;

/// Key that the app state is stored under.
const KEY: &str = "colony.app.state";

/// Stored state of the app.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AppState {
    /// The worker registry.
    colony: Colony,
}

/// Messages for communicating with App.
pub enum Msg {
    /// Start a new worker named by the current input value.
    StartWorker,
}

#[derive(Default)]
pub struct App {
    state: AppState,
    /// Handle on the new-worker name input.
    input: NodeRef,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let state = LocalStorage::get(KEY).unwrap_or_default();
        Self {
            state,
            ..Default::default()
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StartWorker => {
                let Some(input) = self.input.cast::<HtmlInputElement>() else {
                    warn!("Cannot read the worker name, no HtmlInputElement");
                    return false;
                };
                match self.state.colony.start_worker(&input.value()) {
                    Ok(_) => {
                        input.set_value("");
                        self.save();
                        true
                    }
                    Err(err) => {
                        warn!("Unable to start worker: {}", err);
                        false
                    }
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let start = link.callback(|_: MouseEvent| Msg::StartWorker);
        let start_on_enter =
            link.batch_callback(|e: KeyboardEvent| (e.key() == "Enter").then_some(Msg::StartWorker));
        html! {
            <div class="App">
                <Header />
                <div class="appbody">
                    <div class="worker-entry">
                        <input ref={self.input.clone()} type="text"
                            placeholder="worker name"
                            onkeyup={start_on_enter} />
                        <button onclick={start}>{"start worker"}</button>
                    </div>
                    if self.state.colony.is_empty() {
                        <p class="empty-note">{"no workers yet"}</p>
                    } else {
                        <ul class="worker-list">
                            { for self.state.colony.workers_by_name().map(worker_row) }
                        </ul>
                    }
                </div>
            </div>
        }
    }
}

impl App {
    /// Save the current state to local storage.
    fn save(&self) {
        if let Err(e) = LocalStorage::set(KEY, &self.state) {
            warn!("Unable to save state: {}", e);
        }
    }
}

/// One row of the worker list.
fn worker_row(worker: &Worker) -> Html {
    html! {
        <li class="worker-row" key={worker.id().to_string()}>
            <span class="worker-name">{ worker.name() }</span>
            <span class="worker-links">{ format!("{} links", worker.link_count()) }</span>
        </li>
    }
}
