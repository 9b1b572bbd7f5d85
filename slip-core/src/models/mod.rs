mod draft;
mod group;
mod item;
mod record;
mod section;

pub use draft::{DraftEntry, EntryField, EntryMode};
pub use group::{SectionGroup, group_by_section};
pub use item::CommittedItem;
pub use record::{CommodityRecord, NewCommodityRecord};
pub use section::{ParseSectionError, Section};
