pub mod command;
pub mod config;
pub mod container;
pub mod context;
pub mod direction;
pub mod event;
pub mod state;
pub mod view;

pub use command::CommandProxy;
pub use config::{KeyboardDismissMode, Orientation, OverscrollMode, PagerConfig};
pub use container::{Lifecycle, PagerBuilder, PagerContainer};
pub use context::PagerContext;
pub use direction::{direction_for_locale, LayoutDirection, ResolvedDirection};
pub use event::{
    EventAdapter, PageScrollEvent, PageScrollStateEvent, PageSelectedEvent, ScrollPhase,
};
pub use state::{PageState, PageStateStore, Subscription};
pub use view::PagerView;
