//! Display data derived from an endpoint
//!
//! Everything here is a pure function of the catalog entry: the request
//! example is passed through untouched, response payloads are pretty-printed
//! in their definition key order, and each endpoint gets a usage sentence.

use crate::types::{Endpoint, ResponseExample};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResponse {
    /// `Status: 200 (401)`
    pub summary: String,
    /// Pretty-printed payload, 2-space indentation
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEndpoint<'a> {
    pub endpoint: &'a Endpoint,
    pub request: &'a str,
    pub usage: &'a str,
    pub responses: Vec<RenderedResponse>,
}

impl RenderedEndpoint<'_> {
    /// Plain-text version of the detail panel
    pub fn to_plain_text(&self) -> String {
        let mut out = format!(
            "{} {}\n{}\n\nRequête\n{}\n\n{}\n\nRéponses\n",
            self.endpoint.method,
            self.endpoint.path,
            self.endpoint.description,
            self.request,
            self.usage,
        );

        for (index, response) in self.responses.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&response.summary);
            out.push('\n');
            out.push_str(&response.body);
            out.push('\n');
        }

        out
    }
}

pub fn render_endpoint(endpoint: &Endpoint) -> RenderedEndpoint<'_> {
    RenderedEndpoint {
        endpoint,
        request: endpoint.request_example,
        usage: usage_note(endpoint),
        responses: endpoint.responses.iter().map(render_response).collect(),
    }
}

pub fn render_response(response: &ResponseExample) -> RenderedResponse {
    RenderedResponse {
        summary: status_summary(response),
        body: format_payload(&response.payload),
    }
}

/// Pretty-print a payload, falling back to compact output
pub fn format_payload(payload: &Value) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
}

/// HTTP status, followed by the application status in parentheses when set.
/// A payload without a status leaves the value empty.
pub fn status_summary(response: &ResponseExample) -> String {
    let status = response
        .status()
        .map(|code| code.to_string())
        .unwrap_or_default();

    match response.custom_status() {
        Some(custom) => format!("Status: {status} ({custom})"),
        None => format!("Status: {status}"),
    }
}

/// Usage sentence for an endpoint, or its description when none is registered
pub fn usage_note(endpoint: &Endpoint) -> &str {
    usage_sentence(endpoint.id).unwrap_or(endpoint.description)
}

fn usage_sentence(id: &str) -> Option<&'static str> {
    let sentence = match id {
        "auth-login" => "ouvre la session mobile, verifie le compte, puis retourne le token JWT et le role mobile du membre.",
        "auth-refresh" => "renouvelle un token existant en desactivant l'ancien pour prolonger la session utilisateur.",
        "update-password" => "permet a l'utilisateur connecte de changer son mot de passe apres verification de l'ancien.",
        "reset-request" => "demarre la procedure de mot de passe oublie en envoyant un code OTP par email.",
        "reset-verify" => "valide le code OTP recu pour autoriser l'etape finale de reinitialisation.",
        "reset-confirm" => "applique le nouveau mot de passe du compte a partir de l'email et du code valide.",
        "member-info" => "retourne l'identite du membre, son type, son statut et son role mobile.",
        "home-member-info" => "fournit les donnees d'accueil du membre avec son solde actuel.",
        "member-balances" => "donne un resume financier global du membre (solde, charges, recettes, actions, investissements).",
        "transactions-history" => "liste l'historique des ecritures liees au membre pour affichage des mouvements.",
        "member-charges" => "retourne les charges a payer du membre avec indicateurs d'echeance et paiement manuel.",
        "update-payment-mode" => "active ou desactive le mode de paiement manuel pour une charge precise.",
        "update-all-payment-modes" => "bascule le mode de paiement manuel pour toutes les charges eligibles du membre.",
        "member-recipes" => "retourne les recettes/entrees d'argent en attente pour le membre.",
        "pay-line" => "execute le reglement d'une charge, en total ou partiel selon le solde disponible du membre.",
        "member-actions" => "retourne le portefeuille d'actions du membre avec quantites, valeurs et etat de mise en vente.",
        "member-investments" => "retourne les investissements en cours et deja passes avec leurs montants et dates de paiement.",
        "sell-action" => "cree une offre de vente d'actions du membre avec prix unitaire et quantite.",
        "for-sale-list" => "affiche le marche des actions et investissements actuellement en vente.",
        "add-qty-to-sell-action" => "augmente la quantite restante d'une action deja en vente.",
        "cancel-selling-action" => "annule une vente d'actions et retire l'offre du marche.",
        "reduce-qty-to-sell-action" => "diminue la quantite d'actions exposee sur une vente existante.",
        "buy-actions-investments" => "realise l'achat d'une offre du marche (actions ou parts d'investissement).",
        "mobile-functions" => "retourne le catalogue complet des fonctionnalites mobiles disponibles dans le systeme.",
        "mobile-functions-with-roles" => "retourne les fonctionnalites mobiles avec les roles autorises pour chacune.",
        "mobile-functions-by-user" => "retourne le role mobile du membre connecte et les fonctionnalites qu'il peut utiliser.",
        _ => return None,
    };
    Some(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::{CategoryKey, HttpMethod};
    use serde_json::json;

    #[test]
    fn test_status_summary_with_custom_status() {
        let response = ResponseExample::new(json!({
            "status": 200,
            "customstatus": 401,
            "error": "Authentification requise",
        }));
        assert_eq!(status_summary(&response), "Status: 200 (401)");
    }

    #[test]
    fn test_status_summary_without_custom_status() {
        let response = ResponseExample::new(json!({ "status": 429, "remaining": 120 }));
        assert_eq!(status_summary(&response), "Status: 429");
    }

    #[test]
    fn test_status_summary_without_status() {
        let response = ResponseExample::new(json!({ "error": "Invalid token" }));
        assert_eq!(status_summary(&response), "Status: ");
    }

    #[test]
    fn test_refresh_responses_have_empty_status() {
        let catalog = Catalog::builtin();
        let rendered = render_endpoint(catalog.endpoint("auth-refresh").unwrap());
        assert_eq!(rendered.responses.len(), 4);
        for response in &rendered.responses {
            assert_eq!(response.summary, "Status: ");
        }
    }

    #[test]
    fn test_format_payload_keeps_definition_order() {
        let payload = json!({
            "actual_balance": 150000,
            "selling_list": [],
            "status": 200,
            "customstatus": 200,
        });
        assert_eq!(
            format_payload(&payload),
            "{\n  \"actual_balance\": 150000,\n  \"selling_list\": [],\n  \"status\": 200,\n  \"customstatus\": 200\n}"
        );
    }

    #[test]
    fn test_format_payload_nested_indentation() {
        let payload = json!({
            "status": 200,
            "mobile_role": { "id": 2, "code": "manager" },
        });
        assert_eq!(
            format_payload(&payload),
            "{\n  \"status\": 200,\n  \"mobile_role\": {\n    \"id\": 2,\n    \"code\": \"manager\"\n  }\n}"
        );
    }

    #[test]
    fn test_format_payload_keeps_accents_and_floats() {
        let payload = json!({ "error": "Token invalide ou expiré", "actual_balance": 1500.5 });
        let formatted = format_payload(&payload);
        assert!(formatted.contains("\"Token invalide ou expiré\""));
        assert!(formatted.contains("\"actual_balance\": 1500.5"));
    }

    #[test]
    fn test_render_endpoint_from_catalog() {
        let catalog = Catalog::builtin();
        let login = catalog.endpoint("auth-login").unwrap();
        let rendered = render_endpoint(login);

        assert_eq!(rendered.request, login.request_example);
        assert!(rendered.usage.starts_with("ouvre la session mobile"));
        assert_eq!(rendered.responses.len(), 7);
        assert_eq!(rendered.responses[0].summary, "Status: 200");
        assert!(rendered.responses[0]
            .body
            .starts_with("{\n  \"status\": 200,\n  \"token\": \"eyJhbGciOi...\""));
        assert_eq!(rendered.responses[6].summary, "Status: 403");
    }

    #[test]
    fn test_every_builtin_endpoint_has_a_usage_sentence() {
        let catalog = Catalog::builtin();
        for endpoint in catalog.endpoints() {
            assert!(
                usage_sentence(endpoint.id).is_some(),
                "{} has no usage sentence",
                endpoint.id
            );
        }
    }

    #[test]
    fn test_usage_falls_back_to_description() {
        let endpoint = Endpoint {
            id: "unregistered",
            method: HttpMethod::Delete,
            path: "/api/auth/unregistered",
            description: "Point d'accès sans note",
            request_example: "DELETE /api/auth/unregistered",
            responses: vec![],
            category: CategoryKey::Member,
        };
        assert_eq!(usage_note(&endpoint), "Point d'accès sans note");
    }

    #[test]
    fn test_plain_text_contains_all_sections() {
        let catalog = Catalog::builtin();
        let rendered = render_endpoint(catalog.endpoint("reduce-qty-to-sell-action").unwrap());
        let text = rendered.to_plain_text();

        assert!(text.starts_with("POST /api/auth/reduce-qty-to-sell-action\n"));
        assert!(text.contains("Requête\nPOST /api/auth/reduce-qty-to-sell-action\nAuthorization"));
        assert!(text.contains("diminue la quantite d'actions"));
        assert!(text.contains("Status: 200 (403)"));
        assert!(text.contains("Status: 200 (404)"));
        assert!(text.ends_with("}\n"));
    }
}
