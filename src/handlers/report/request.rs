//! Report request DTOs

use serde::Deserialize;

use crate::models::SortOrder;

/// `?order=` query shared by the report and driver list pages
#[derive(Debug, Default, Deserialize)]
pub struct OrderQuery {
    pub order: Option<String>,
}

impl OrderQuery {
    /// Requested order; missing or unrecognized values mean ascending
    pub fn sort_order(&self) -> SortOrder {
        SortOrder::from_query(self.order.as_deref())
    }
}
