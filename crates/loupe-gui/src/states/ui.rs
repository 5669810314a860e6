use loupe_core::loader::LoadTicket;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Name of the file (or "clipboard") the current image came from.
    pub source_label: Option<String>,

    /// Most recent load request still in flight.
    pub pending_load: Option<LoadTicket>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Clear the in-flight marker if `ticket` is the one being waited on.
    pub fn settle_load(&mut self, ticket: LoadTicket) {
        if self.pending_load == Some(ticket) {
            self.pending_load = None;
        }
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
