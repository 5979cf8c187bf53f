//! Entities decoded from, or sent to, the Notion API.

mod database;
mod page;
mod property;

pub use database::{DatabaseObject, DatabaseRecord};
pub use page::{PageObject, PageProperty};
pub use property::{
    FormulaObject, MultiSelectObject, NumberObject, PropertySchema, PropertyValue, RelationObject,
    RollupObject, SelectObject, SelectOption, Toggle,
};
