//! Main egui application — owns the conversation driver and renders it.

use std::rc::Rc;
use std::time::Duration;

use egui::CentralPanel;

use newschat_core::controller::{ConversationController, Phase};
use newschat_core::driver::ConversationDriver;
use newschat_core::event_bus::EventBus;
use newschat_core::ports::ChatApiPort;
use newschat_platform::api::NewsApiClient;
use newschat_types::config::ClientConfig;
use newschat_ui::panels::chat::{self, ChatAction};
use newschat_ui::panels::{loading, toasts};
use newschat_ui::state::UiState;

/// Backend origin, fixed at build time, e.g. `NEWSCHAT_API_URL=https://news.example.com`
const API_URL_ENV: Option<&str> = option_env!("NEWSCHAT_API_URL");

/// Build-time origin if set, otherwise the origin the page was served from.
pub fn load_config() -> ClientConfig {
    let origin = match API_URL_ENV {
        Some(url) => url.to_string(),
        None => web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default(),
    };
    let config = ClientConfig::new(origin);
    match config.validate() {
        Ok(()) => log::info!("API base: {}", config.api_base()),
        Err(e) => log::error!("{}", e),
    }
    config
}

pub struct NewsChatApp {
    ui_state: UiState,
    event_bus: EventBus,
    driver: ConversationDriver,
}

impl NewsChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ClientConfig) -> Self {
        let event_bus = EventBus::new();
        let api: Rc<dyn ChatApiPort> = Rc::new(NewsApiClient::new(config));
        let driver = ConversationDriver::new(ConversationController::new(event_bus.clone()), api);

        let init = driver.clone();
        let ctx = cc.egui_ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            init.initialize().await;
            ctx.request_repaint();
        });

        Self {
            ui_state: UiState::new(),
            event_bus,
            driver,
        }
    }

    /// Run a user action against the driver (async)
    fn dispatch(&self, action: ChatAction, ctx: &egui::Context) {
        let driver = self.driver.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            match action {
                ChatAction::Submit => {
                    driver.submit_draft().await;
                }
                ChatAction::Reset => {
                    driver.reset().await;
                }
                ChatAction::TestConnection => driver.check_health().await,
            }
            ctx.request_repaint();
        });
    }
}

impl eframe::App for NewsChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        let events = self.event_bus.drain();
        if self.ui_state.process_events(events, now) {
            ctx.request_repaint();
        }
        self.ui_state.expire(now);

        let mut action = None;
        CentralPanel::default().show(ctx, |ui| {
            let mut controller = self.driver.controller().borrow_mut();
            if controller.state().phase() == Phase::Initializing {
                loading::initializing_panel(ui);
            } else {
                let (state, draft) = controller.view_mut();
                action = chat::chat_panel(ui, state, draft);
            }
        });

        toasts::toast_overlay(ctx, &mut self.ui_state);

        if let Some(action) = action {
            self.dispatch(action, ctx);
        }

        let busy = self.driver.controller().borrow().state().is_busy();
        if busy || !self.ui_state.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
