pub mod duration;
pub mod export;
pub mod line_items;
pub mod narrative;
pub mod preview;
pub mod reducer;
pub mod session;
pub mod totals;

pub use crate::domain::model::{QuoteForm, ReferenceList};
pub use crate::domain::ports::{ConfigProvider, ReferenceSource, Storage};
pub use crate::utils::error::Result;
