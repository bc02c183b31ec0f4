//! Page-to-variant resolution and per-action authorization
//!
//! A static table per page; no backend calls, so snapshot resolution can
//! be tested without network mocking. Unknown pages and empty
//! classifications take the most restrictive path: under-privileging
//! beats crashing or over-privileging.

use crate::authz::{PrimaryRole, RoleClassification};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::page::Page;

/// The concrete view implementation to mount for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewVariant {
    /// Full management view (HR/admin oversight of all records)
    Management,
    /// Self-service view over the actor's own records
    SelfService,
    /// Support agent's queue view
    SupportDesk,
    /// Vendor-facing view (purchase/order scope)
    VendorPortal,
    /// External customer view
    CustomerPortal,
}

/// An action a view may enable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Respond,
    UpdateStatus,
    Assign,
    Escalate,
    Rate,
    Approve,
}

/// Domain state the resolver needs beyond the classification
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// Status of the ticket being viewed, when on the tickets page
    pub ticket_status: Option<String>,
}

impl PageContext {
    /// Context for a ticket with the given status
    pub fn for_ticket<S: Into<String>>(status: S) -> Self {
        Self {
            ticket_status: Some(status.into()),
        }
    }

    fn ticket_resolved(&self) -> bool {
        self.ticket_status
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("resolved"))
            .unwrap_or(false)
    }
}

/// The resolved view for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewResolution {
    /// Which component variant to mount
    pub variant: ViewVariant,
    /// Actions that variant enables for this actor
    pub actions: HashSet<Action>,
}

impl ViewResolution {
    fn new(variant: ViewVariant, actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            variant,
            actions: actions.into_iter().collect(),
        }
    }

    /// Whether an action is enabled
    pub fn allows(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// The restrictive default: customer view, no privileged actions
    fn restricted() -> Self {
        Self::new(ViewVariant::CustomerPortal, [])
    }
}

/// Resolve a page to its view variant and enabled actions
pub fn resolve(page: Page, roles: &RoleClassification, ctx: &PageContext) -> ViewResolution {
    match page {
        Page::Dashboard => management_or_self_service(roles.is_admin || roles.is_hr, []),
        Page::Leave | Page::Attendance => management_or_self_service(
            roles.is_admin || roles.is_hr,
            [Action::Approve, Action::UpdateStatus],
        ),
        Page::Documents => {
            management_or_self_service(roles.is_admin || roles.is_hr, [Action::UpdateStatus])
        }
        Page::Payroll => {
            management_or_self_service(roles.is_admin || roles.is_hr, [Action::Approve])
        }
        Page::Tasks => {
            if roles.is_admin || roles.is_hr || roles.is_manager {
                ViewResolution::new(
                    ViewVariant::Management,
                    [Action::Assign, Action::UpdateStatus],
                )
            } else {
                // Employees update the status of their own tasks.
                ViewResolution::new(ViewVariant::SelfService, [Action::UpdateStatus])
            }
        }
        Page::Invoices => {
            if roles.is_admin || roles.is_manager {
                ViewResolution::new(ViewVariant::Management, [Action::UpdateStatus])
            } else {
                ViewResolution::new(ViewVariant::SelfService, [])
            }
        }
        Page::Tickets => resolve_tickets(roles, ctx),
    }
}

/// Resolve a raw routing key; unknown keys take the restrictive default
pub fn resolve_key(key: &str, roles: &RoleClassification, ctx: &PageContext) -> ViewResolution {
    match Page::from_key(key) {
        Some(page) => resolve(page, roles, ctx),
        None => ViewResolution::restricted(),
    }
}

fn management_or_self_service(
    management: bool,
    management_actions: impl IntoIterator<Item = Action>,
) -> ViewResolution {
    if management {
        ViewResolution::new(ViewVariant::Management, management_actions)
    } else {
        ViewResolution::new(ViewVariant::SelfService, [])
    }
}

fn resolve_tickets(roles: &RoleClassification, ctx: &PageContext) -> ViewResolution {
    let variant = match roles.primary() {
        PrimaryRole::Admin | PrimaryRole::Hr | PrimaryRole::Manager => ViewVariant::Management,
        PrimaryRole::Support => ViewVariant::SupportDesk,
        PrimaryRole::Vendor => ViewVariant::VendorPortal,
        PrimaryRole::Employee => ViewVariant::SelfService,
        PrimaryRole::Customer => ViewVariant::CustomerPortal,
    };

    let mut actions = HashSet::new();
    if roles.is_support || roles.is_admin || roles.is_vendor || roles.is_employee {
        actions.insert(Action::Respond);
    }
    if roles.is_admin || roles.is_hr || roles.is_manager || roles.is_support {
        actions.insert(Action::UpdateStatus);
    }
    if roles.is_admin || roles.is_support {
        actions.insert(Action::Assign);
    }
    if roles.is_employee || roles.is_customer {
        actions.insert(Action::Escalate);
    }
    if roles.is_customer && ctx.ticket_resolved() {
        actions.insert(Action::Rate);
    }

    ViewResolution { variant, actions }
}
