//! Page addresses and layout breakpoints.

use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProductId {
    ArmoGuardBasic,
    ArmoShieldPro,
    ArmoMaxEnterprise,
}

impl ProductId {
    pub const ALL: [ProductId; 3] = [
        ProductId::ArmoGuardBasic,
        ProductId::ArmoShieldPro,
        ProductId::ArmoMaxEnterprise,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ProductId::ArmoGuardBasic => "armoguard-basic",
            ProductId::ArmoShieldPro => "armoshield-pro",
            ProductId::ArmoMaxEnterprise => "armomax-enterprise",
        }
    }
}

impl FromStr for ProductId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductId::ALL
            .into_iter()
            .find(|p| p.slug() == s)
            .ok_or_else(|| ParseError::unknown("product", s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Products,
    Product(ProductId),
    Contact,
}

impl Route {
    /// Parse a path such as `/products/armoshield-pro/`. Query strings and
    /// fragments are ignored; a trailing slash is fine.
    pub fn parse(path: &str) -> Result<Self, ParseError> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_matches('/');
        let mut parts = trimmed.split('/').filter(|s| !s.is_empty());
        let route = match (parts.next(), parts.next(), parts.next()) {
            (None, _, _) => Route::Home,
            (Some("about"), None, _) => Route::About,
            (Some("products"), None, _) => Route::Products,
            (Some("products"), Some(id), None) => Route::Product(id.parse()?),
            (Some("contact"), None, _) => Route::Contact,
            _ => return Err(ParseError::unknown("route", path)),
        };
        Ok(route)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Products => "/products".to_string(),
            Route::Product(id) => format!("/products/{}", id.slug()),
            Route::Contact => "/contact".to_string(),
        }
    }

    /// Navbar entries, in display order.
    pub fn nav() -> [Route; 4] {
        [Route::Home, Route::About, Route::Products, Route::Contact]
    }

    /// The navbar entry to highlight; product pages sit under Products.
    pub fn nav_entry(self) -> Route {
        match self {
            Route::Product(_) => Route::Products,
            other => other,
        }
    }
}

impl FromStr for Route {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub fn from_width(px: f32) -> Self {
        if px < 640.0 {
            Breakpoint::Sm
        } else if px < 768.0 {
            Breakpoint::Md
        } else if px < 1024.0 {
            Breakpoint::Lg
        } else {
            Breakpoint::Xl
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }
}
