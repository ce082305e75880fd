pub mod app_state;
pub mod events;
pub mod navigator;
pub mod reveal;
pub mod scroll;
pub mod section_list;
pub mod sequencer;

pub use app_state::AppState;
pub use app_state::AppStateProps;
pub use events::EventsService;
pub use navigator::Navigator;
pub use reveal::Reveal;
pub use reveal::Viewport;
pub use scroll::Scroll;
pub use section_list::RenderedDocument;
pub use section_list::SectionList;
pub use sequencer::Sequencer;
