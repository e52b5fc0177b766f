//! Compiled-in endpoint catalog
//!
//! Holds the categories and endpoints of the NKEZEFUU API documentation.
//! Everything here is immutable once built; lookups preserve the order in
//! which the data is declared.

mod data;

use crate::types::{CatalogError, Category, CategoryKey, Endpoint};

#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    endpoints: Vec<Endpoint>,
}

impl Catalog {
    /// Build a catalog from explicit data (kept in declaration order)
    pub fn new(categories: Vec<Category>, endpoints: Vec<Endpoint>) -> Self {
        Self {
            categories,
            endpoints,
        }
    }

    /// The NKEZEFUU API catalog
    pub fn builtin() -> Self {
        Self::new(data::categories(), data::endpoints())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, key: CategoryKey) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// The category a fresh browser starts on
    pub fn first_category(&self) -> CategoryKey {
        self.categories
            .first()
            .map(|c| c.key)
            .unwrap_or_default()
    }

    /// Position of a category in declaration order
    pub fn category_index(&self, key: CategoryKey) -> Option<usize> {
        self.categories.iter().position(|c| c.key == key)
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// All endpoints of one category, in definition order
    pub fn endpoints_in(&self, key: CategoryKey) -> Vec<&Endpoint> {
        self.endpoints.iter().filter(|e| e.category == key).collect()
    }

    pub fn endpoint(&self, id: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.id == id)
    }

    /// Same as [`Catalog::endpoint`] but reports unknown ids as an error
    pub fn require_endpoint(&self, id: &str) -> Result<&Endpoint, CatalogError> {
        self.endpoint(id)
            .ok_or_else(|| CatalogError::UnknownEndpoint(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HttpMethod;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_categories_in_declaration_order() {
        let catalog = Catalog::builtin();
        let keys: Vec<CategoryKey> = catalog.categories().iter().map(|c| c.key).collect();
        assert_eq!(keys, CategoryKey::ALL.to_vec());
        assert_eq!(catalog.first_category(), CategoryKey::Authentication);
    }

    #[test]
    fn test_builtin_endpoint_ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<&str> = catalog.endpoints().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), catalog.endpoints().len());
        assert_eq!(catalog.endpoints().len(), 26);
    }

    #[test]
    fn test_builtin_endpoint_table() {
        use CategoryKey::*;
        use HttpMethod::{Get, Post};

        let expected = [
            ("auth-login", Post, "/api/auth/login", Authentication),
            ("auth-refresh", Post, "/api/auth/refresh", Authentication),
            ("update-password", Post, "/api/auth/update-password", Password),
            ("reset-request", Post, "/api/auth/reset/request", Password),
            ("reset-verify", Post, "/api/auth/reset/verify", Password),
            ("reset-confirm", Post, "/auth/reset/confirm", Password),
            ("member-info", Get, "/api/auth/member-info", Member),
            ("home-member-info", Get, "/api/auth/home-member-info", Member),
            ("member-balances", Get, "/api/auth/member-balances", Member),
            ("transactions-history", Get, "/api/auth/member-transactions-history", Transactions),
            ("member-charges", Get, "/api/auth/member-charges", Charges),
            ("update-payment-mode", Post, "/api/auth/update-line-payment-mode", Charges),
            ("update-all-payment-modes", Post, "/api/auth/update-all-lines-payment-mode", Charges),
            ("member-recipes", Get, "/api/auth/member-recipes", Recipes),
            ("pay-line", Post, "/api/auth/pay-line", Payments),
            ("member-actions", Get, "/api/auth/member-actions", ActionsInvestments),
            ("member-investments", Get, "/api/auth/member-investments", ActionsInvestments),
            ("sell-action", Post, "/api/auth/sell-action", ActionsMarket),
            ("for-sale-list", Get, "/api/auth/for-sale-list", ActionsMarket),
            ("add-qty-to-sell-action", Post, "/api/auth/add-qty-to-sell-action", ActionsMarket),
            ("cancel-selling-action", Post, "/api/auth/cancel-selling-action", ActionsMarket),
            ("reduce-qty-to-sell-action", Post, "/api/auth/reduce-qty-to-sell-action", ActionsMarket),
            ("buy-actions-investments", Post, "/api/auth/buy-actions-investments", ActionsMarket),
            ("mobile-functions", Get, "/api/auth/mobile-functions", Mobile),
            ("mobile-functions-with-roles", Get, "/api/auth/mobile-functions-with-roles", Mobile),
            ("mobile-functions-by-user", Get, "/api/auth/mobile-functions-by-user", Mobile),
        ];

        let actual: Vec<(&str, HttpMethod, &str, CategoryKey)> = Catalog::builtin()
            .endpoints()
            .iter()
            .map(|e| (e.id, e.method, e.path, e.category))
            .collect();

        assert_eq!(actual, expected.to_vec());
    }

    #[test]
    fn test_every_endpoint_has_a_response() {
        let catalog = Catalog::builtin();
        for endpoint in catalog.endpoints() {
            assert!(
                !endpoint.responses.is_empty(),
                "{} has no response example",
                endpoint.id
            );
            for response in &endpoint.responses {
                assert!(response.payload.is_object());
            }
        }
    }

    #[test]
    fn test_endpoints_in_preserves_definition_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog
            .endpoints_in(CategoryKey::Password)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(
            ids,
            vec!["update-password", "reset-request", "reset-verify", "reset-confirm"]
        );

        let ids: Vec<&str> = catalog
            .endpoints_in(CategoryKey::ActionsMarket)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "sell-action",
                "for-sale-list",
                "add-qty-to-sell-action",
                "cancel-selling-action",
                "reduce-qty-to-sell-action",
                "buy-actions-investments",
            ]
        );
    }

    #[test]
    fn test_every_category_has_endpoints() {
        let catalog = Catalog::builtin();
        for category in catalog.categories() {
            assert!(!catalog.endpoints_in(category.key).is_empty());
        }
    }

    #[test]
    fn test_endpoint_lookup() {
        let catalog = Catalog::builtin();
        let login = catalog.endpoint("auth-login").unwrap();
        assert_eq!(login.method, HttpMethod::Post);
        assert_eq!(login.path, "/api/auth/login");
        assert_eq!(login.category, CategoryKey::Authentication);

        let confirm = catalog.endpoint("reset-confirm").unwrap();
        assert_eq!(confirm.path, "/auth/reset/confirm");

        assert!(catalog.endpoint("does-not-exist").is_none());
        assert_eq!(
            catalog.require_endpoint("does-not-exist"),
            Err(CatalogError::UnknownEndpoint("does-not-exist".to_string()))
        );
    }

    #[test]
    fn test_category_lookup() {
        let catalog = Catalog::builtin();
        let mobile = catalog.category(CategoryKey::Mobile).unwrap();
        assert_eq!(mobile.name, "Accès Mobile");
        assert_eq!(catalog.category_index(CategoryKey::Mobile), Some(9));
    }

    #[test]
    fn test_empty_catalog_falls_back_to_default_category() {
        let catalog = Catalog::new(vec![], vec![]);
        assert_eq!(catalog.first_category(), CategoryKey::Authentication);
        assert!(catalog.endpoints_in(CategoryKey::Mobile).is_empty());
    }
}
