use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fixed set of category keys, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    #[default]
    Authentication,
    Password,
    Member,
    Transactions,
    Charges,
    Recipes,
    Payments,
    ActionsInvestments,
    ActionsMarket,
    Mobile,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 10] = [
        CategoryKey::Authentication,
        CategoryKey::Password,
        CategoryKey::Member,
        CategoryKey::Transactions,
        CategoryKey::Charges,
        CategoryKey::Recipes,
        CategoryKey::Payments,
        CategoryKey::ActionsInvestments,
        CategoryKey::ActionsMarket,
        CategoryKey::Mobile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Authentication => "authentication",
            CategoryKey::Password => "password",
            CategoryKey::Member => "member",
            CategoryKey::Transactions => "transactions",
            CategoryKey::Charges => "charges",
            CategoryKey::Recipes => "recipes",
            CategoryKey::Payments => "payments",
            CategoryKey::ActionsInvestments => "actions_investments",
            CategoryKey::ActionsMarket => "actions_market",
            CategoryKey::Mobile => "mobile",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Lookup failures against the compiled-in catalog
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("unknown category '{0}' (expected one of: {known})", known = known_categories())]
    UnknownCategory(String),

    #[error("unknown endpoint '{0}'")]
    UnknownEndpoint(String),
}

fn known_categories() -> String {
    CategoryKey::ALL
        .iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A navigation group of endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub key: CategoryKey,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One documented response case.
///
/// The payload is kept as an opaque JSON object; the HTTP status and the
/// application-level `customstatus` are read from it so they stay in the
/// position the example defines them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResponseExample {
    pub payload: Value,
}

impl ResponseExample {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }

    /// Primary HTTP status, when the example declares one
    pub fn status(&self) -> Option<u16> {
        self.read_code("status")
    }

    /// Secondary application-level status carried inside the payload
    pub fn custom_status(&self) -> Option<u16> {
        self.read_code("customstatus")
    }

    fn read_code(&self, field: &str) -> Option<u16> {
        self.payload
            .get(field)
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Endpoint {
    pub id: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub description: &'static str,
    pub request_example: &'static str,
    pub responses: Vec<ResponseExample>,
    pub category: CategoryKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Searching,
}

/// Tracks which panel has focus
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelFocus {
    Categories, // Left panel
    Endpoints,  // Middle panel
    Details,    // Right panel
}

impl PanelFocus {
    pub fn next(self) -> Self {
        match self {
            PanelFocus::Categories => PanelFocus::Endpoints,
            PanelFocus::Endpoints => PanelFocus::Details,
            PanelFocus::Details => PanelFocus::Categories,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            PanelFocus::Categories => PanelFocus::Details,
            PanelFocus::Endpoints => PanelFocus::Categories,
            PanelFocus::Details => PanelFocus::Endpoints,
        }
    }
}
