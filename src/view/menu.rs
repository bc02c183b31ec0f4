//! Menu visibility
//!
//! Menu entries are static descriptors; visibility is decided per render
//! from the current permission set. `admin:manage` passes every check,
//! and a parent with a submenu stays visible while any child is.

use crate::authz::PermissionSet;
use once_cell::sync::Lazy;

/// Permission code that passes every menu requirement
pub const ADMIN_BYPASS: &str = "admin:manage";

/// Permission requirement of one menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Always visible
    None,
    /// One specific code required
    One(String),
    /// Any of the listed codes suffices
    AnyOf(Vec<String>),
}

impl Requirement {
    /// Whether the permission set satisfies this requirement
    ///
    /// Logical OR across `AnyOf`; the admin bypass is handled by the
    /// caller so the requirement itself stays declarative.
    pub fn satisfied_by(&self, permissions: &PermissionSet) -> bool {
        match self {
            Requirement::None => true,
            Requirement::One(code) => permissions.contains(code),
            Requirement::AnyOf(codes) => permissions.contains_any(codes),
        }
    }

    fn one(code: &str) -> Self {
        Requirement::One(code.to_string())
    }

    fn any_of(codes: &[&str]) -> Self {
        Requirement::AnyOf(codes.iter().map(|c| c.to_string()).collect())
    }
}

/// A static descriptor of one navigable page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub icon: String,
    pub label: String,
    pub path: String,
    pub permission: Requirement,
    pub submenu: Vec<MenuEntry>,
}

impl MenuEntry {
    fn new(icon: &str, label: &str, path: &str, permission: Requirement) -> Self {
        Self {
            icon: icon.to_string(),
            label: label.to_string(),
            path: path.to_string(),
            permission,
            submenu: Vec::new(),
        }
    }

    fn with_submenu(mut self, submenu: Vec<MenuEntry>) -> Self {
        self.submenu = submenu;
        self
    }

    /// Whether this entry shows for the given permission set
    pub fn is_visible(&self, permissions: &PermissionSet) -> bool {
        if permissions.contains(ADMIN_BYPASS) {
            return true;
        }
        self.permission.satisfied_by(permissions)
            || self
                .submenu
                .iter()
                .any(|sub| sub.permission.satisfied_by(permissions))
    }
}

/// Filter a menu down to the entries visible for a permission set
pub fn visible_entries<'a>(
    entries: &'a [MenuEntry],
    permissions: &PermissionSet,
) -> Vec<&'a MenuEntry> {
    entries
        .iter()
        .filter(|entry| entry.is_visible(permissions))
        .collect()
}

/// The portal's navigation menu
pub static DEFAULT_MENU: Lazy<Vec<MenuEntry>> = Lazy::new(|| {
    vec![
        MenuEntry::new(
            "chart-pie",
            "Dashboard",
            "/dashboard",
            Requirement::one("dashboard:read"),
        ),
        MenuEntry::new("user", "Users", "/users", Requirement::one("users:manage")).with_submenu(
            vec![
                MenuEntry::new("", "User List", "/users/list", Requirement::one("users:read")),
                MenuEntry::new("", "User Roles", "/users/roles", Requirement::one("roles:read")),
            ],
        ),
        MenuEntry::new("clock", "Attendance", "/hr", Requirement::None).with_submenu(vec![
            MenuEntry::new(
                "",
                "My Attendance",
                "/my-attendance",
                Requirement::one("attendance:read"),
            ),
            MenuEntry::new(
                "",
                "My Leave Requests",
                "/my-leave-requests",
                Requirement::one("attendance:read"),
            ),
        ]),
        MenuEntry::new(
            "users",
            "Customers",
            "/customers",
            Requirement::one("customers:manage"),
        ),
        MenuEntry::new(
            "boxes",
            "Inventory",
            "/inventory",
            Requirement::one("inventory:manage"),
        ),
        MenuEntry::new("user-tie", "HR & Staff", "/hr/staff", Requirement::None).with_submenu(
            vec![
                MenuEntry::new(
                    "",
                    "Mark Attendance",
                    "/attendance",
                    Requirement::any_of(&["attendance:read", "attendance:manage"]),
                ),
                MenuEntry::new("", "Staff Management", "/hr", Requirement::one("hr:manage")),
            ],
        ),
        MenuEntry::new("bell", "Alerts", "/alerts", Requirement::one("alerts:read")),
        MenuEntry::new(
            "tasks",
            "Tasks & Workflow",
            "/tasks",
            Requirement::one("tasks:manage"),
        ),
        MenuEntry::new(
            "chart-bar",
            "Reports",
            "/reports",
            Requirement::one("global_reports:view"),
        ),
    ]
});

/// The default menu as a slice
pub fn default_menu() -> &'static [MenuEntry] {
    &DEFAULT_MENU
}
