//! Async glue between the controller and the API port.
//!
//! Must be spawned via `wasm_bindgen_futures::spawn_local` in the browser.
//! The controller is borrowed only between awaits, so a reset can run
//! while a send is still outstanding.

use std::cell::RefCell;
use std::rc::Rc;

use crate::controller::ConversationController;
use crate::ports::ChatApiPort;

#[derive(Clone)]
pub struct ConversationDriver {
    controller: Rc<RefCell<ConversationController>>,
    api: Rc<dyn ChatApiPort>,
}

impl ConversationDriver {
    pub fn new(controller: ConversationController, api: Rc<dyn ChatApiPort>) -> Self {
        Self {
            controller: Rc::new(RefCell::new(controller)),
            api,
        }
    }

    pub fn controller(&self) -> &Rc<RefCell<ConversationController>> {
        &self.controller
    }

    /// Start the first session. Call once, at mount.
    pub async fn initialize(&self) {
        let result = self.api.start_session().await;
        self.controller.borrow_mut().complete_initialize(result);
    }

    /// Submit `text`. Returns false if the controller refused it.
    pub async fn submit(&self, text: &str) -> bool {
        let ticket = self.controller.borrow_mut().begin_submit(text);
        let Some(ticket) = ticket else {
            return false;
        };
        let result = self
            .api
            .send_message(ticket.session_id(), ticket.text())
            .await;
        self.controller.borrow_mut().complete_submit(ticket, result);
        true
    }

    /// Submit whatever is in the input buffer.
    pub async fn submit_draft(&self) -> bool {
        let text = self.controller.borrow().draft().to_string();
        self.submit(&text).await
    }

    pub async fn reset(&self) -> bool {
        if !self.controller.borrow_mut().begin_reset() {
            return false;
        }
        let result = self.api.start_session().await;
        self.controller.borrow_mut().complete_reset(result);
        true
    }

    pub async fn check_health(&self) {
        let result = self.api.health().await;
        self.controller.borrow().report_health(result);
    }
}
