//! View state and URL synchronization
//!
//! The [`ViewController`] owns the only mutable state in the marketplace:
//! which mode is shown, the search text, the selected category and layout,
//! and the open detail view. Every change is written back to the address
//! bar through a [`Navigator`], and every back/forward navigation is read
//! from it, so any view can be shared as a link.
//!
//! ```text
//!             focus / click / category / text ≥ threshold
//!   Landing ────────────────────────────────────────────► Browse
//!      ▲                                                    │
//!      └──────────────── return_to_landing ─────────────────┘
//! ```

mod codec;
mod controller;
mod navigation;
mod params;
mod state;

pub use codec::UrlCodec;
pub use controller::{ViewController, ViewSnapshot};
pub use navigation::{MemoryNavigator, Navigator};
pub use params::{ParamMap, BROWSE_PARAM, CATEGORY_PARAM, EXTENSION_PARAM, SEARCH_PARAM, VIEW_PARAM};
pub use state::{Layout, Mode, ViewState};
