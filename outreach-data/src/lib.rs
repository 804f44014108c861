//! Data model and view state for the outreach dashboard.
//!
//! Shared by the file server and the browser UI; nothing here does I/O.

pub mod dashboard;
pub mod markdown;
pub mod rows;
pub mod source;
pub mod table;

pub use dashboard::{
    brief_panel, flash_ack, lead_table, queue_table, AckTicket, BriefPanel, CappedTable, CopyAck,
    CopyTarget, DashboardState, LoadOutcome, LoadPhase, Modal, SourceResult, COPY_ACK_MS,
    COPY_FAILED, LEADS_DISPLAY_CAP, LOADING_PLACEHOLDER, QUEUE_DISPLAY_CAP,
};
pub use markdown::{is_safe_url, render_brief, CommonMarkRenderer, MarkupRenderer, RenderError};
pub use rows::{LeadRow, OutreachDraftRow};
pub use source::Source;
pub use table::{parse_rows, write_rows, TableError};
