//! Role-gated navigation: a static ordered menu filtered by the current
//! role. The caller must already have passed the session gate; no role
//! means no routes.

#[derive(Debug, PartialEq)]
pub struct Route {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub allowed_roles: &'static [&'static str],
}

/// The full menu, in display order. Never re-sorted.
pub const MENU: &[Route] = &[
    Route {
        label: "Dashboard",
        path: "/admin",
        icon: "home",
        allowed_roles: &["Administrator"],
    },
    Route {
        label: "Karyawan",
        path: "/admin/karyawan",
        icon: "users",
        allowed_roles: &["Administrator"],
    },
    Route {
        label: "Employee Self Service",
        path: "/admin/employee-self-service",
        icon: "book",
        allowed_roles: &["User", "Administrator"],
    },
    Route {
        label: "Hiring Tracking",
        path: "/admin/hiring-tracking",
        icon: "trending-up",
        allowed_roles: &["Administrator"],
    },
    Route {
        label: "Performance Review",
        path: "/admin/performance-review",
        icon: "line-chart",
        allowed_roles: &["Superior", "Supersuperior", "Administrator"],
    },
    Route {
        label: "Users",
        path: "/admin/users",
        icon: "circle-user",
        allowed_roles: &["Administrator"],
    },
];

/// Menu entries visible to a role, preserving menu order.
pub fn visible_routes(role: Option<&str>) -> Vec<&'static Route> {
    let Some(role) = role else {
        return Vec::new();
    };
    MENU.iter()
        .filter(|route| route.allowed_roles.contains(&role))
        .collect()
}

/// Where a fresh login lands. Unknown roles get no route, logged only.
pub fn landing_route(role: &str) -> Option<&'static str> {
    match role {
        "Administrator" => Some("/admin"),
        "User" => Some("/admin/employee-self-service"),
        other => {
            tracing::warn!(role = other, "no landing route for role");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn administrator_sees_the_whole_menu() {
        let routes = visible_routes(Some("Administrator"));
        assert_eq!(routes.len(), MENU.len());
        // Order preserved, not re-sorted.
        assert_eq!(routes[0].path, "/admin");
        assert_eq!(routes.last().unwrap().path, "/admin/users");
    }

    #[test]
    fn user_sees_only_self_service() {
        let routes = visible_routes(Some("User"));
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, "/admin/employee-self-service");
    }

    #[test]
    fn no_role_means_no_routes() {
        assert!(visible_routes(None).is_empty());
    }

    #[test]
    fn landing_routes_per_role() {
        assert_eq!(landing_route("Administrator"), Some("/admin"));
        assert_eq!(landing_route("User"), Some("/admin/employee-self-service"));
        assert_eq!(landing_route("Superior"), None);
    }
}
