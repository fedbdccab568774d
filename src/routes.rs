//! Navigable surface and access gating.
//!
//! The UI layer resolves a path to a [`Route`] and asks [`Access::check`]
//! whether to render it, before any protected content is produced. Admin
//! routes redirect anonymous visitors to the login page and authenticated
//! non-admins back home.

use crate::entities::Principal;

/// One page of the storefront.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    ProductDetail(String),
    Category(String),
    Search(String),
    Cart,
    Login,
    Register,
    AdminDashboard,
    AdminProducts,
    NotFound(String),
}

impl Route {
    /// Resolves a path like `/category/electronics` or `/search?q=tv`.
    /// Unmatched paths map to [`Route::NotFound`].
    #[must_use]
    pub fn parse(path: &str) -> Route {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["product", id] => Route::ProductDetail((*id).to_string()),
            ["category", tag] => Route::Category((*tag).to_string()),
            ["search"] => Route::Search(query_param(query, "q").unwrap_or_default()),
            ["cart"] => Route::Cart,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["admin"] => Route::AdminDashboard,
            ["admin", "products"] => Route::AdminProducts,
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// True for routes behind the admin gate.
    #[must_use]
    pub fn requires_admin(&self) -> bool {
        matches!(self, Route::AdminDashboard | Route::AdminProducts)
    }
}

fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Outcome of the route guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Anonymous visitor on a protected route.
    RedirectToLogin,
    /// Authenticated but not an admin.
    RedirectHome,
}

impl Access {
    /// Decides whether the principal may see the route. Public routes are
    /// always granted; admin routes require an authenticated admin.
    #[must_use]
    pub fn check(route: &Route, principal: Option<&Principal>) -> Access {
        if !route.requires_admin() {
            return Access::Granted;
        }
        match principal {
            None => Access::RedirectToLogin,
            Some(p) if p.is_admin => Access::Granted,
            Some(_) => Access::RedirectHome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{admin_principal, regular_principal};

    #[test]
    fn test_parse_public_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(
            Route::parse("/product/prod_1"),
            Route::ProductDetail("prod_1".to_string())
        );
        assert_eq!(
            Route::parse("/category/best-sellers"),
            Route::Category("best-sellers".to_string())
        );
        assert_eq!(Route::parse("/cart"), Route::Cart);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/register"), Route::Register);
    }

    #[test]
    fn test_parse_search_query() {
        assert_eq!(Route::parse("/search?q=tv"), Route::Search("tv".to_string()));
        assert_eq!(Route::parse("/search"), Route::Search(String::new()));
        assert_eq!(
            Route::parse("/search?page=2&q=shoes"),
            Route::Search("shoes".to_string())
        );
    }

    #[test]
    fn test_parse_admin_and_not_found() {
        assert_eq!(Route::parse("/admin"), Route::AdminDashboard);
        assert_eq!(Route::parse("/admin/products"), Route::AdminProducts);
        assert_eq!(
            Route::parse("/no/such/page"),
            Route::NotFound("/no/such/page".to_string())
        );
    }

    #[test]
    fn test_public_routes_always_granted() {
        assert_eq!(Access::check(&Route::Home, None), Access::Granted);
        assert_eq!(Access::check(&Route::Cart, None), Access::Granted);
        assert_eq!(
            Access::check(&Route::Cart, Some(&regular_principal())),
            Access::Granted
        );
    }

    #[test]
    fn test_admin_routes_gated() {
        for route in [Route::AdminDashboard, Route::AdminProducts] {
            assert_eq!(Access::check(&route, None), Access::RedirectToLogin);
            assert_eq!(
                Access::check(&route, Some(&regular_principal())),
                Access::RedirectHome
            );
            assert_eq!(
                Access::check(&route, Some(&admin_principal())),
                Access::Granted
            );
        }
    }
}
