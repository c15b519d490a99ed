// Route table

/// Path of the login view, the only view an unauthenticated session may reach
pub const LOGIN_PATH: &str = "/login";

/// Path of the default view authenticated users land on
pub const HOME_PATH: &str = "/";

/// One navigable view and its authentication requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

const ROUTES: &[Route] = &[
    Route {
        path: LOGIN_PATH,
        name: "Login",
        requires_auth: false,
    },
    Route {
        path: HOME_PATH,
        name: "Dashboard",
        requires_auth: true,
    },
    Route {
        path: "/tasks",
        name: "TaskList",
        requires_auth: true,
    },
];

/// The full route table
pub fn routes() -> &'static [Route] {
    ROUTES
}

/// Look a route up by exact path
pub fn find_route(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_is_the_only_open_route() {
        let open: Vec<_> = routes().iter().filter(|r| !r.requires_auth).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].path, LOGIN_PATH);
    }

    #[test]
    fn lookup_by_path() {
        assert_eq!(find_route("/tasks").unwrap().name, "TaskList");
        assert!(find_route("/nope").is_none());
    }
}
