mod brief_card;
mod card;
mod draft_modal;
mod leads_panel;
mod queue_panel;
mod snapshot_panel;

pub use brief_card::BriefCard;
pub use card::Card;
pub use draft_modal::DraftModal;
pub use leads_panel::LeadsPanel;
pub use queue_panel::QueuePanel;
pub use snapshot_panel::SnapshotPanel;
