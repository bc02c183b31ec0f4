//! Logical pages of the portal

use serde::{Deserialize, Serialize};

/// A navigable logical page
///
/// Closed enumeration; routing keys outside this set resolve through
/// [`super::resolver::resolve_key`] to the most restrictive view instead
/// of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Dashboard,
    Leave,
    Documents,
    Tasks,
    Tickets,
    Attendance,
    Invoices,
    Payroll,
}

impl Page {
    /// Parse a routing key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "dashboard" => Some(Page::Dashboard),
            "leave" => Some(Page::Leave),
            "documents" => Some(Page::Documents),
            "tasks" => Some(Page::Tasks),
            "tickets" => Some(Page::Tickets),
            "attendance" => Some(Page::Attendance),
            "invoices" => Some(Page::Invoices),
            "payroll" => Some(Page::Payroll),
            _ => None,
        }
    }
}
