/// The three files the dashboard reads, as exposed over HTTP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    Brief,
    Queue,
    Leads,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Brief, Source::Queue, Source::Leads];

    pub fn route(self) -> &'static str {
        match self {
            Source::Brief => "/data/ops/daily-brief.md",
            Source::Queue => "/data/leads/queue-to-send.csv",
            Source::Leads => "/data/leads/flooring-leads.csv",
        }
    }

    /// Backing file, relative to the data root.
    pub fn file(self) -> &'static str {
        match self {
            Source::Brief => "ops/daily-brief.md",
            Source::Queue => "leads/queue-to-send.csv",
            Source::Leads => "leads/flooring-leads.csv",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Source::Brief => "text/markdown; charset=utf-8",
            Source::Queue | Source::Leads => "text/csv; charset=utf-8",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Source::Brief => "brief",
            Source::Queue => "queue",
            Source::Leads => "leads",
        }
    }
}
