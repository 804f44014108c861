//! Dashboard view state and the values derived from it.
//!
//! [`DashboardState`] is owned by the single dashboard component. It moves
//! `Loading` to `Loaded` or `LoadError` once all three sources settle, and
//! independently tracks the draft modal with its short-lived copy
//! acknowledgement. Everything shown in the panels is derived from the raw
//! source texts so it can be recomputed whenever they change.

use std::future::Future;

use crate::markdown::{render_brief, MarkupRenderer};
use crate::rows::{LeadRow, OutreachDraftRow};
use crate::source::Source;
use crate::table::parse_rows;

pub const QUEUE_DISPLAY_CAP: usize = 25;
pub const LEADS_DISPLAY_CAP: usize = 20;
/// How long a copy acknowledgement stays visible.
pub const COPY_ACK_MS: u32 = 1_200;
pub const LOADING_PLACEHOLDER: &str = "Loading...";
pub const COPY_FAILED: &str = "Copy failed";

pub type SourceResult = Result<String, String>;

/// Per-source results of the initial fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOutcome {
    pub brief: SourceResult,
    pub queue: SourceResult,
    pub leads: SourceResult,
}

impl LoadOutcome {
    /// `source: message` for every failed source, joined by `; `.
    pub fn error_message(&self) -> Option<String> {
        let failures: Vec<String> = [
            (Source::Brief, &self.brief),
            (Source::Queue, &self.queue),
            (Source::Leads, &self.leads),
        ]
        .into_iter()
        .filter_map(|(source, result)| {
            result
                .as_ref()
                .err()
                .map(|err| format!("{}: {err}", source.label()))
        })
        .collect();

        if failures.is_empty() {
            None
        } else {
            Some(failures.join("; "))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Loaded,
    LoadError(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyTarget {
    SubjectAndBody,
    Email,
}

impl CopyTarget {
    /// Exact clipboard text for this target.
    pub fn payload(self, draft: &OutreachDraftRow) -> String {
        match self {
            CopyTarget::SubjectAndBody => {
                format!("Subject: {}\n\n{}", draft.subject(), draft.body())
            }
            CopyTarget::Email => draft.email().to_string(),
        }
    }

    pub fn acknowledgement(self) -> &'static str {
        match self {
            CopyTarget::SubjectAndBody => "Copied subject + body",
            CopyTarget::Email => "Copied email",
        }
    }
}

/// Identifies one acknowledgement so a stale timer cannot clear a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AckTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyAck {
    pub message: String,
    pub ticket: AckTicket,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open {
        draft: OutreachDraftRow,
        ack: Option<CopyAck>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BriefPanel {
    Error(String),
    Html(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    phase: LoadPhase,
    brief_md: String,
    queue_csv: String,
    leads_csv: String,
    modal: Modal,
    next_ticket: u64,
    torn_down: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Loading,
            brief_md: LOADING_PLACEHOLDER.to_string(),
            queue_csv: String::new(),
            leads_csv: String::new(),
            modal: Modal::Closed,
            next_ticket: 0,
            torn_down: false,
        }
    }

    /// Record the settled fetches. Sources that failed keep their defaults.
    ///
    /// Returns `false` and changes nothing once the view has been torn down.
    pub fn apply_load(&mut self, outcome: LoadOutcome) -> bool {
        if self.torn_down {
            return false;
        }
        let error = outcome.error_message();
        if let Ok(text) = outcome.brief {
            self.brief_md = text;
        }
        if let Ok(text) = outcome.queue {
            self.queue_csv = text;
        }
        if let Ok(text) = outcome.leads {
            self.leads_csv = text;
        }
        self.phase = match error {
            Some(message) => LoadPhase::LoadError(message),
            None => LoadPhase::Loaded,
        };
        true
    }

    /// Open the modal on a draft, dropping any previous acknowledgement.
    pub fn open_draft(&mut self, draft: OutreachDraftRow) {
        if self.torn_down {
            return;
        }
        self.modal = Modal::Open { draft, ack: None };
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Show an acknowledgement in the open modal and hand back the ticket the
    /// expiry timer must present. `None` when no modal is open.
    pub fn acknowledge(&mut self, message: impl Into<String>) -> Option<AckTicket> {
        if self.torn_down {
            return None;
        }
        let Modal::Open { ack, .. } = &mut self.modal else {
            return None;
        };
        self.next_ticket += 1;
        let ticket = AckTicket(self.next_ticket);
        *ack = Some(CopyAck {
            message: message.into(),
            ticket,
        });
        Some(ticket)
    }

    /// Clear the acknowledgement if it is still the one `ticket` refers to.
    pub fn expire_ack(&mut self, ticket: AckTicket) -> bool {
        if self.torn_down {
            return false;
        }
        match &mut self.modal {
            Modal::Open { ack, .. } if ack.as_ref().map(|a| a.ticket) == Some(ticket) => {
                *ack = None;
                true
            }
            _ => false,
        }
    }

    /// Mark the owning view gone; later loads and timer expiries are ignored.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.modal = Modal::Closed;
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::LoadError(message) => Some(message),
            _ => None,
        }
    }

    pub fn brief_markdown(&self) -> &str {
        &self.brief_md
    }

    pub fn queue_csv(&self) -> &str {
        &self.queue_csv
    }

    pub fn leads_csv(&self) -> &str {
        &self.leads_csv
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn selected_draft(&self) -> Option<&OutreachDraftRow> {
        match &self.modal {
            Modal::Open { draft, .. } => Some(draft),
            Modal::Closed => None,
        }
    }

    pub fn ack_message(&self) -> Option<&str> {
        match &self.modal {
            Modal::Open { ack: Some(ack), .. } => Some(&ack.message),
            _ => None,
        }
    }

    pub fn brief_panel(&self, renderer: &impl MarkupRenderer) -> BriefPanel {
        brief_panel(self.error(), &self.brief_md, renderer)
    }
}

/// The brief panel shows the load error in place of the rendered brief.
pub fn brief_panel(
    error: Option<&str>,
    markdown: &str,
    renderer: &impl MarkupRenderer,
) -> BriefPanel {
    match error {
        Some(message) => BriefPanel::Error(message.to_string()),
        None => BriefPanel::Html(render_brief(renderer, markdown)),
    }
}

/// Show a copy acknowledgement, wait [`COPY_ACK_MS`] and then expire it.
///
/// `acknowledge` and `expire` reach the live state; `sleep` is the platform
/// timer. Returns `true` only when this acknowledgement was the one cleared.
pub async fn flash_ack<F>(
    message: &str,
    acknowledge: impl FnOnce(&str) -> Option<AckTicket>,
    sleep: impl FnOnce(u32) -> F,
    expire: impl FnOnce(AckTicket) -> bool,
) -> bool
where
    F: Future<Output = ()>,
{
    let Some(ticket) = acknowledge(message) else {
        return false;
    };
    sleep(COPY_ACK_MS).await;
    expire(ticket)
}

/// Rows in source order with a fixed display cap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CappedTable<T> {
    rows: Vec<T>,
    cap: usize,
}

impl<T> CappedTable<T> {
    pub fn new(rows: Vec<T>, cap: usize) -> Self {
        Self { rows, cap }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn all(&self) -> &[T] {
        &self.rows
    }

    pub fn visible(&self) -> &[T] {
        &self.rows[..self.rows.len().min(self.cap)]
    }

    pub fn is_truncated(&self) -> bool {
        self.rows.len() > self.cap
    }

    pub fn overflow_notice(&self) -> Option<String> {
        self.is_truncated()
            .then(|| format!("Showing first {} rows.", self.cap))
    }
}

impl CappedTable<OutreachDraftRow> {
    /// Counted over every row, not just the visible ones.
    pub fn ready_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_ready()).count()
    }

    pub fn title(&self) -> String {
        format!("Queue to send (drafts) — {} ready", self.ready_count())
    }
}

pub fn queue_table(csv: &str) -> CappedTable<OutreachDraftRow> {
    CappedTable::new(parse_rows(csv), QUEUE_DISPLAY_CAP)
}

pub fn lead_table(csv: &str) -> CappedTable<LeadRow> {
    CappedTable::new(parse_rows(csv), LEADS_DISPLAY_CAP)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use futures::future;

    use super::*;
    use crate::markdown::{CommonMarkRenderer, RenderError};

    const HEADER: &str = "business_name,first_name,role,email,subject,body,status\n";

    fn queue_csv(rows: usize, ready_every: usize) -> String {
        let mut csv = HEADER.to_string();
        for i in 0..rows {
            let email = if i % ready_every == 0 {
                format!("owner{i}@shop.test")
            } else {
                format!("owner{i}-at-shop.test")
            };
            csv.push_str(&format!("Shop {i},Pat,Owner,{email},Subject {i},Body {i},draft\n"));
        }
        csv
    }

    fn loaded(queue: &str, leads: &str) -> DashboardState {
        let mut state = DashboardState::new();
        state.apply_load(LoadOutcome {
            brief: Ok("# Brief".into()),
            queue: Ok(queue.into()),
            leads: Ok(leads.into()),
        });
        state
    }

    fn opened_on_first_row() -> DashboardState {
        let mut state = loaded(&queue_csv(3, 1), "");
        let first = queue_table(state.queue_csv()).all()[0].clone();
        state.open_draft(first);
        state
    }

    #[test]
    fn starts_loading_with_placeholder_brief() {
        let state = DashboardState::new();
        assert_eq!(state.phase(), &LoadPhase::Loading);
        assert_eq!(state.brief_markdown(), LOADING_PLACEHOLDER);
        assert_eq!(state.modal(), &Modal::Closed);
        assert!(queue_table(state.queue_csv()).is_empty());
    }

    #[test]
    fn all_sources_ok_is_loaded() {
        let state = loaded(&queue_csv(2, 1), "business_name\nA\n");
        assert_eq!(state.phase(), &LoadPhase::Loaded);
        assert_eq!(state.error(), None);
        assert_eq!(
            state.brief_panel(&CommonMarkRenderer),
            BriefPanel::Html("<h1>Brief</h1>\n".into())
        );
    }

    #[test]
    fn partial_failure_keeps_successful_sources() {
        let mut state = DashboardState::new();
        state.apply_load(LoadOutcome {
            brief: Err("HTTP 500".into()),
            queue: Ok(queue_csv(2, 1)),
            leads: Err("network down".into()),
        });
        assert_eq!(
            state.phase(),
            &LoadPhase::LoadError("brief: HTTP 500; leads: network down".into())
        );
        assert_eq!(queue_table(state.queue_csv()).len(), 2);
        assert!(lead_table(state.leads_csv()).is_empty());
        assert_eq!(
            state.brief_panel(&CommonMarkRenderer),
            BriefPanel::Error("brief: HTTP 500; leads: network down".into())
        );
    }

    #[test]
    fn brief_panel_survives_renderer_failure() {
        struct Failing;
        impl MarkupRenderer for Failing {
            fn render(&self, _: &str) -> Result<String, RenderError> {
                Err(RenderError::Other("boom".into()))
            }
        }
        let state = loaded("", "");
        assert_eq!(
            state.brief_panel(&Failing),
            BriefPanel::Html("<pre># Brief</pre>".into())
        );
    }

    #[test]
    fn thirty_rows_show_twenty_five_with_notice() {
        let table = queue_table(&queue_csv(30, 1));
        assert_eq!(table.len(), 30);
        assert_eq!(table.visible().len(), 25);
        assert_eq!(table.visible()[24].business_name(), "Shop 24");
        assert_eq!(table.overflow_notice().as_deref(), Some("Showing first 25 rows."));
    }

    #[test]
    fn twenty_five_rows_show_no_notice() {
        let table = queue_table(&queue_csv(25, 1));
        assert_eq!(table.visible().len(), 25);
        assert_eq!(table.overflow_notice(), None);
    }

    #[test]
    fn ready_count_uses_full_row_set() {
        // every third row is ready: 0, 3, ..., 27 -> 10, of which 9 are visible
        let table = queue_table(&queue_csv(30, 3));
        assert_eq!(table.ready_count(), 10);
        let visible_ready = table.visible().iter().filter(|r| r.is_ready()).count();
        assert_eq!(visible_ready, 9);
        assert_eq!(table.title(), "Queue to send (drafts) — 10 ready");
    }

    #[test]
    fn lead_count_is_uncapped() {
        let mut csv = "business_name,city\n".to_string();
        for i in 0..42 {
            csv.push_str(&format!("Lead {i},Leeds\n"));
        }
        let table = lead_table(&csv);
        assert_eq!(table.len(), 42);
        assert_eq!(table.visible().len(), 20);
        assert_eq!(table.overflow_notice().as_deref(), Some("Showing first 20 rows."));
    }

    #[test]
    fn modal_shows_the_selected_row() {
        let mut state = loaded(&queue_csv(5, 1), "");
        let table = queue_table(state.queue_csv());
        state.open_draft(table.all()[3].clone());
        let draft = state.selected_draft().expect("modal open");
        assert_eq!(draft.subject(), "Subject 3");
        assert_eq!(draft.body(), "Body 3");
    }

    #[test]
    fn copy_payloads_are_verbatim() {
        let draft = OutreachDraftRow {
            email: Some("sam@acme.test".into()),
            subject: Some("Quick question".into()),
            body: Some("Hi Sam,\nThanks".into()),
            ..Default::default()
        };
        assert_eq!(CopyTarget::Email.payload(&draft), "sam@acme.test");
        assert_eq!(
            CopyTarget::SubjectAndBody.payload(&draft),
            "Subject: Quick question\n\nHi Sam,\nThanks"
        );
    }

    #[test]
    fn acknowledgement_expires_with_its_ticket() {
        let mut state = opened_on_first_row();
        let ticket = state
            .acknowledge(CopyTarget::Email.acknowledgement())
            .expect("modal open");
        assert_eq!(state.ack_message(), Some("Copied email"));
        assert!(state.expire_ack(ticket));
        assert_eq!(state.ack_message(), None);
        assert!(state.selected_draft().is_some());
    }

    #[test]
    fn stale_timer_does_not_clear_newer_acknowledgement() {
        let mut state = opened_on_first_row();
        let first = state.acknowledge("Copied email").expect("open");
        let second = state.acknowledge("Copied subject + body").expect("open");
        assert!(!state.expire_ack(first));
        assert_eq!(state.ack_message(), Some("Copied subject + body"));
        assert!(state.expire_ack(second));
    }

    #[test]
    fn reopening_clears_previous_acknowledgement() {
        let mut state = opened_on_first_row();
        state.acknowledge("Copied email");
        let again = state.selected_draft().cloned().expect("open");
        state.open_draft(again);
        assert_eq!(state.ack_message(), None);
    }

    #[test]
    fn closing_discards_draft_and_acknowledgement() {
        let mut state = opened_on_first_row();
        let ticket = state.acknowledge("Copied email").expect("open");
        state.close_modal();
        assert_eq!(state.modal(), &Modal::Closed);
        assert!(!state.expire_ack(ticket));
        assert_eq!(state.acknowledge("Copied email"), None);
    }

    #[test]
    fn late_results_after_teardown_are_ignored() {
        let mut state = DashboardState::new();
        state.teardown();
        let applied = state.apply_load(LoadOutcome {
            brief: Ok("late".into()),
            queue: Ok(String::new()),
            leads: Ok(String::new()),
        });
        assert!(!applied);
        assert_eq!(state.phase(), &LoadPhase::Loading);
        assert_eq!(state.brief_markdown(), LOADING_PLACEHOLDER);
    }

    fn flash(
        state: &RefCell<DashboardState>,
        message: &str,
        during_sleep: impl FnOnce(&RefCell<DashboardState>, u32),
    ) -> bool {
        block_on(flash_ack(
            message,
            |m| state.borrow_mut().acknowledge(m),
            |ms| {
                during_sleep(state, ms);
                future::ready(())
            },
            |ticket| state.borrow_mut().expire_ack(ticket),
        ))
    }

    #[test]
    fn flashed_acknowledgement_is_visible_for_the_timer_then_cleared() {
        let state = RefCell::new(opened_on_first_row());
        let cleared = flash(&state, "Copied email", |state, ms| {
            assert_eq!(ms, 1_200);
            assert_eq!(state.borrow().ack_message(), Some("Copied email"));
        });
        assert!(cleared);
        assert_eq!(state.borrow().ack_message(), None);
        assert!(state.borrow().selected_draft().is_some());
    }

    #[test]
    fn flash_keeps_a_newer_acknowledgement() {
        let state = RefCell::new(opened_on_first_row());
        let cleared = flash(&state, "Copied email", |state, _| {
            state.borrow_mut().acknowledge(COPY_FAILED);
        });
        assert!(!cleared);
        assert_eq!(state.borrow().ack_message(), Some(COPY_FAILED));
    }

    #[test]
    fn flash_without_open_modal_never_waits() {
        let state = RefCell::new(DashboardState::new());
        let cleared = flash(&state, "Copied email", |_, _| panic!("timer started"));
        assert!(!cleared);
    }

    #[test]
    fn flash_after_teardown_during_wait_changes_nothing() {
        let state = RefCell::new(opened_on_first_row());
        let cleared = flash(&state, "Copied email", |state, _| state.borrow_mut().teardown());
        assert!(!cleared);
        assert_eq!(state.borrow().modal(), &Modal::Closed);
    }
}
