//! Literal catalog content
//!
//! Numbers that the published documentation prints as integers (`200.0`
//! prints as `200`) are written as integers here.

use crate::types::{Category, CategoryKey, Endpoint, HttpMethod, ResponseExample};
use serde_json::{json, Value};

pub(super) fn categories() -> Vec<Category> {
    vec![
        Category {
            key: CategoryKey::Authentication,
            name: "Authentification",
            description: "Endpoints pour la gestion des connexions et tokens",
        },
        Category {
            key: CategoryKey::Password,
            name: "Mot de passe",
            description: "Réinitialisation et modification de mot de passe",
        },
        Category {
            key: CategoryKey::Member,
            name: "Informations Membre",
            description: "Données personnelles et solde",
        },
        Category {
            key: CategoryKey::Transactions,
            name: "Transactions",
            description: "Historique des opérations financières",
        },
        Category {
            key: CategoryKey::Charges,
            name: "Charges",
            description: "Charges du membre",
        },
        Category {
            key: CategoryKey::Recipes,
            name: "Recettes",
            description: "Recettes du membre",
        },
        Category {
            key: CategoryKey::Payments,
            name: "Paiements",
            description: "Opérations de paiement",
        },
        Category {
            key: CategoryKey::ActionsInvestments,
            name: "Actions et investissements",
            description: "Actions et investissements du membre/en vente, Vente et achats",
        },
        Category {
            key: CategoryKey::ActionsMarket,
            name: "Marché des actions",
            description: "Mise en vente d'actions, Achat d'actions et d'investissements",
        },
        Category {
            key: CategoryKey::Mobile,
            name: "Accès Mobile",
            description: "Fonctions mobiles et rôles autorisés",
        },
    ]
}

fn endpoint(
    id: &'static str,
    method: HttpMethod,
    path: &'static str,
    description: &'static str,
    request_example: &'static str,
    category: CategoryKey,
    responses: Vec<Value>,
) -> Endpoint {
    Endpoint {
        id,
        method,
        path,
        description,
        request_example,
        responses: responses.into_iter().map(ResponseExample::new).collect(),
        category,
    }
}

/// `{ status, error }`
fn failure(status: u16, error: &str) -> Value {
    json!({
        "status": status,
        "error": error,
    })
}

/// `{ status, customstatus, error }`
fn coded_failure(status: u16, customstatus: u16, error: &str) -> Value {
    json!({
        "status": status,
        "customstatus": customstatus,
        "error": error,
    })
}

fn auth_required() -> Value {
    coded_failure(200, 401, "Authentification requise")
}

fn token_invalid() -> Value {
    coded_failure(200, 401, "Token invalide ou expiré")
}

fn member_not_found() -> Value {
    coded_failure(200, 404, "Membre introuvable")
}

fn invalid_json() -> Value {
    coded_failure(200, 400, "Format JSON invalide")
}

fn server_error() -> Value {
    coded_failure(500, 500, "Erreur serveur")
}

pub(super) fn endpoints() -> Vec<Endpoint> {
    use CategoryKey::*;
    use HttpMethod::*;

    vec![
        // Authentication
        endpoint(
            "auth-login",
            Post,
            "/api/auth/login",
            "Authentifie un utilisateur et retourne un token JWT",
            "POST /api/auth/login\nContent-Type: application/json\n\n{\n  \"login\": \"email@exemple.com\",\n  \"password\": \"votre_mot_de_passe\"\n}",
            Authentication,
            vec![
                json!({
                    "status": 200,
                    "token": "eyJhbGciOi...",
                    "user_id": 1,
                    "expires_in": 900,
                    "mobile_role": {
                        "id": 2,
                        "code": "manager",
                        "description": "Responsable mobile",
                    },
                }),
                failure(400, "Utilisateur introuvable"),
                failure(400, "Membre introuvable"),
                failure(401, "Mot de passe incorrect"),
                failure(500, "Échec de la génération du token"),
                failure(500, "Configuration role mobile indisponible"),
                failure(403, "Role mobile introuvable"),
            ],
        ),
        endpoint(
            "auth-refresh",
            Post,
            "/api/auth/refresh",
            "Rafraîchit un token JWT actif ou expiré",
            "POST /api/auth/refresh\nContent-Type: application/json\n\n{\n  \"token\": \"eyJhbGciOi...\"\n}",
            Authentication,
            vec![
                json!({
                    "token": "nouveau_token...",
                    "user_id": 1,
                    "expires_in": 3600,
                }),
                json!({ "error": "Token missing" }),
                json!({ "error": "Invalid token" }),
                json!({ "error": "Token generation failed" }),
            ],
        ),
        endpoint(
            "update-password",
            Post,
            "/api/auth/update-password",
            "Met à jour le mot de passe de l'utilisateur",
            "POST /api/auth/update-password\nAuthorization: Bearer <token>\nContent-Type: application/json\n\n{\n  \"old_password\": \"ancien_mdp\",\n  \"new_password\": \"nouveau_mdp\"\n}",
            Password,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "message": "Mot de passe mis à jour",
                }),
                auth_required(),
                token_invalid(),
                coded_failure(200, 400, "Les deux mots de passe sont requis"),
                coded_failure(200, 400, "Ancien et nouveau mot de passe identiques"),
                coded_failure(200, 401, "Mot de passe actuel incorrect"),
                coded_failure(200, 404, "Utilisateur introuvable"),
                failure(500, "Erreur serveur"),
            ],
        ),
        // Password reset
        endpoint(
            "reset-request",
            Post,
            "/api/auth/reset/request",
            "Demande de réinitialisation de mot de passe",
            "POST /api/auth/reset/request\nContent-Type: application/json\n\n{\n  \"email\": \"email@exemple.com\"\n}",
            Password,
            vec![
                json!({
                    "status": 200,
                    "email": "email@exemple.com",
                    "username": "Nom Utilisateur",
                    "message": "Code envoyé par email",
                    "remaining": 180,
                }),
                failure(400, "Utilisateur introuvable"),
                json!({
                    "status": 429,
                    "message": "Un code a déjà été envoyé",
                    "remaining": 120,
                    "username": "Nom Utilisateur",
                    "email": "email@exemple.com",
                }),
                failure(500, "Erreur lors de l'envoi du mail"),
            ],
        ),
        endpoint(
            "reset-verify",
            Post,
            "/api/auth/reset/verify",
            "Vérifie le code de réinitialisation",
            "POST /api/auth/reset/verify\nContent-Type: application/json\n\n{\n  \"code\": \"123456\"\n}",
            Password,
            vec![
                json!({
                    "status": 200,
                    "code": "123456",
                    "email": "email@exemple.com",
                    "name": "Nom Utilisateur",
                }),
                failure(400, "Utilisateur introuvable"),
                failure(400, "Code invalide ou expiré"),
                failure(500, "Erreur interne du serveur"),
            ],
        ),
        endpoint(
            "reset-confirm",
            Post,
            "/auth/reset/confirm",
            "Confirme la réinitialisation du mot de passe",
            "POST /auth/reset/confirm\nContent-Type: application/json\n\n{\n  \"email\": \"email@exemple.com\",\n  \"new_password\": \"NouveauMDP123!\",\n  \"code\": \"123456\"\n}",
            Password,
            vec![
                json!({
                    "status": 200,
                    "message": "Mot de passe mis à jour avec succès",
                }),
                failure(400, "Code invalide ou expiré"),
                failure(400, "Utilisateur introuvable"),
                failure(500, "Erreur interne du serveur"),
            ],
        ),
        // Member information
        endpoint(
            "member-info",
            Get,
            "/api/auth/member-info",
            "Récupère les informations de base du membre",
            "GET /api/auth/member-info\nAuthorization: Bearer <token>",
            Member,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "name": "Nom du membre",
                    "email": "email@exemple.com",
                    "member_type": "Type de membre",
                    "member_type_code": "active_member",
                    "member_status": "Statut",
                    "mobile_role": {
                        "id": 2,
                        "code": "manager",
                        "description": "Responsable mobile",
                    },
                    "creation_date": "01/01/2023",
                }),
                auth_required(),
                token_invalid(),
                member_not_found(),
                server_error(),
            ],
        ),
        endpoint(
            "home-member-info",
            Get,
            "/api/auth/home-member-info",
            "Récupère le solde actuel du membre",
            "GET /api/auth/home-member-info\nAuthorization: Bearer <token>",
            Member,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "name": "Nom du membre",
                    "actual_balance": 1500.5,
                }),
                auth_required(),
                token_invalid(),
                member_not_found(),
                server_error(),
            ],
        ),
        endpoint(
            "member-balances",
            Get,
            "/api/auth/member-balances",
            "Récupère les données récentes du membre (solde, charges, recettes,actions, investissements...)",
            "GET /api/auth/member-balances\nAuthorization: Bearer <token>",
            Member,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "actual_balance": 1500.5,
                    "amount_pending_charges": 200,
                    "amount_pending_recipes": 300,
                    "amount_actions": 450,
                    "investment_amounts": {
                        "amount_invested": 1000,
                        "amount_to_receive": 1150,
                    },
                }),
                auth_required(),
                member_not_found(),
                token_invalid(),
                server_error(),
            ],
        ),
        // Transactions
        endpoint(
            "transactions-history",
            Get,
            "/api/auth/member-transactions-history",
            "Historique des transactions du membre",
            "GET /api/auth/member-transactions-history\nAuthorization: Bearer <token>",
            Transactions,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "transaction_lines": [
                        {
                            "formatted_date": "01 Jan 2023",
                            "date": "2023-01-01",
                            "name": "Libellé transaction",
                            "amount": 100.5,
                            "partner_name": "Partenaire",
                            "partner_linked_line_name": "",
                        },
                    ],
                }),
                auth_required(),
                token_invalid(),
                member_not_found(),
                server_error(),
            ],
        ),
        // Charges
        endpoint(
            "member-charges",
            Get,
            "/api/auth/member-charges",
            "Liste des charges en attente",
            "GET /api/auth/member-charges\nAuthorization: Bearer <token>",
            Charges,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "pending_charges": [
                        {
                            "id": 1,
                            "formatted_date": "01 Jan 2023",
                            "date": "2023-01-01",
                            "name": "Facture électricité",
                            "amount": 120.5,
                            "can_be_manually_paid": true,
                            "is_assurance_fees_manual_payment_readonly": false,
                            "manual_payment": true,
                            "is_overdue_payment_before": true,
                            "is_overdue_payment_in_seven_days": false,
                            "is_overdue_payment_after_seven_days": false,
                            "partner_name": "TAMO Bernard",
                            "partner_linked_line_name": "AMANDJA Leslie",
                        },
                    ],
                    "manual_payment": false,
                }),
                auth_required(),
                token_invalid(),
                member_not_found(),
                server_error(),
            ],
        ),
        endpoint(
            "update-payment-mode",
            Post,
            "/api/auth/update-line-payment-mode",
            "Modifie le mode de paiement d'une ligne",
            "POST /api/auth/update-line-payment-mode\nAuthorization: Bearer <token>\nContent-Type: application/json\n\n{\n  \"line_id\": 123\n}",
            Charges,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "message": "Mode de paiement mis à jour",
                }),
                auth_required(),
                token_invalid(),
                member_not_found(),
                coded_failure(200, 404, "Paiement à mettre à jour introuvable"),
                coded_failure(200, 400, "Paiement manuel en lecture seule"),
                invalid_json(),
                coded_failure(
                    200,
                    400,
                    "Une erreur inconnue s'est produite lors de la mise à jour",
                ),
            ],
        ),
        endpoint(
            "update-all-payment-modes",
            Post,
            "/api/auth/update-all-lines-payment-mode",
            "Modifie le mode de paiement pour toutes les lignes",
            "POST /api/auth/update-all-lines-payment-mode\nAuthorization: Bearer <token>\nContent-Type: application/json\n\n{}",
            Charges,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "message": "Mode de paiement mis à jour",
                }),
                auth_required(),
                token_invalid(),
                member_not_found(),
                invalid_json(),
                coded_failure(
                    200,
                    400,
                    "Une erreur inconnue s'est produite lors de la mise à jour",
                ),
            ],
        ),
        // Recipes
        endpoint(
            "member-recipes",
            Get,
            "/api/auth/member-recipes",
            "Liste des recettes en attente",
            "GET /api/auth/member-recipes\nAuthorization: Bearer <token>",
            Recipes,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "pending_recipes": [
                        {
                            "id": 1,
                            "formatted_date": "01 Jan 2023",
                            "date": "2023-01-01",
                            "name": "Remboursement",
                            "amount": 50,
                            "partner_name": "ASSONFACK ELONG Prisca",
                            "partner_linked_line_name": "AMANDJA Leslie",
                        },
                    ],
                }),
                auth_required(),
                token_invalid(),
                member_not_found(),
                server_error(),
            ],
        ),
        // Payments
        endpoint(
            "pay-line",
            Post,
            "/api/auth/pay-line",
            "Effectue le paiement d'une charge(integration du paiement partiel en cours)",
            "POST /api/auth/pay-line\nAuthorization: Bearer <token>\nContent-Type: application/json\n\n{\n  \"line_id\": 123\n}",
            Payments,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "message": "Paiement effectué avec succès",
                }),
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "message": "Paiement partiel effectué avec succès",
                    "paid_amount": 35000,
                    "remaining_amount": 55000,
                }),
                auth_required(),
                token_invalid(),
                member_not_found(),
                invalid_json(),
                coded_failure(200, 404, "Paiement à régler introuvable"),
                coded_failure(200, 400, "Solde negatif ou null"),
                coded_failure(200, 400, "Erreur survenue lors du paiment partiel"),
                coded_failure(
                    200,
                    400,
                    "Une erreur inconnue s'est produite lors du paiement",
                ),
            ],
        ),
        // Actions & investments
        endpoint(
            "member-actions",
            Get,
            "/api/auth/member-actions",
            "Liste des Actions du membre",
            "GET /api/auth/member-actions\nAuthorization: Bearer <token>",
            ActionsInvestments,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "actions": [
                        {
                            "project_name": "Projet d'assurances",
                            "percentage": 0.19,
                            "qty": 10,
                            "amount": 10000,
                            "total_amount": 100000,
                            "for_sale": true,
                            "prices_list": [5000, 8000],
                            "qty_to_sell_max": 60,
                        },
                    ],
                }),
                auth_required(),
                token_invalid(),
                member_not_found(),
                server_error(),
            ],
        ),
        endpoint(
            "member-investments",
            Get,
            "/api/auth/member-investments",
            "Liste des investissements du membre",
            "GET /api/auth/member-investments\nAuthorization: Bearer <token>",
            ActionsInvestments,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "investments": [
                        {
                            "project_name": "Vente des Beignets",
                            "owner_parts": 5,
                            "unit_sale_cost": 10000,
                            "total_buy_price": 50000,
                            "total_benefit": 51000,
                            "payment_date": "2025-10-29",
                        },
                    ],
                    "already_past_investments": [
                        {
                            "project_name": "Vente des Beignets",
                            "owner_parts": 5,
                            "unit_sale_cost": 10000,
                            "total_buy_price": 50000,
                            "total_benefit": 51000,
                            "payment_date": "2025-10-29",
                        },
                    ],
                }),
                auth_required(),
                token_invalid(),
                member_not_found(),
                server_error(),
            ],
        ),
        // Actions market
        endpoint(
            "sell-action",
            Post,
            "/api/auth/sell-action",
            "Mise en vente d'une action par un membre",
            "POST /api/auth/sell-action\nAuthorization: Bearer <token>\nContent-Type: application/json\n\n{\n  \"action_id\": 66,\n  \"unit_sale_price\": 15000,\n  \"qty_to_sell\": 10\n}",
            ActionsMarket,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "message": "Mise en vente d'actions réalisée avec succès",
                    "unit_sale_price": 15000,
                    "qty_to_sell": 10,
                }),
                auth_required(),
                token_invalid(),
                member_not_found(),
                invalid_json(),
                coded_failure(200, 400, "Action à vendre recquis"),
                coded_failure(200, 400, "Quantité à vendre recquise"),
                coded_failure(200, 400, "Quantité à vendre négative ou nulle"),
                coded_failure(200, 400, "Prix unitaire de vente recquis"),
                coded_failure(200, 400, "Prix unitaire négatif ou null"),
                coded_failure(200, 404, "Action à vendre introuvable"),
                coded_failure(200, 400, "Action déjà en vente à ce prix"),
                coded_failure(200, 400, "Quantité maximale à vendre dépassée"),
                coded_failure(
                    200,
                    400,
                    "Une erreur inconnue s'est produite lors de la mise en vente",
                ),
            ],
        ),
        endpoint(
            "for-sale-list",
            Get,
            "/api/auth/for-sale-list",
            "Liste des Actions et investissements en vente",
            "GET /api/auth/for-sale-list\nAuthorization: Bearer <token>",
            ActionsMarket,
            vec![
                json!({
                    "actual_balance": 150000,
                    "selling_list": [
                        {
                            "selling_action_id": 40,
                            "is_selling_type_action": false,
                            "is_member_the_owner": "N/A",
                            "project_name": "Vente de tapioca",
                            "owner_name": "N/A",
                            "benefit_percentage": 3,
                            "investment_duration": 3,
                            "qty_to_sell": 5,
                            "qty_to_sell_max": "N/A",
                            "unit_sale_price": 10000,
                            "total_sale_price": 50000,
                        },
                    ],
                    "status": 200,
                    "customstatus": 200,
                }),
                json!({
                    "actual_balance": 550000,
                    "selling_list": [
                        {
                            "selling_action_id": 52,
                            "is_selling_type_action": true,
                            "is_member_the_owner": true,
                            "project_name": "Projet d'assurances",
                            "owner_name": "YVES PREMIER LOIC",
                            "benefit_percentage": "N/A",
                            "investment_duration": "N/A",
                            "qty_to_sell": 5,
                            "qty_to_sell_max": 20,
                            "unit_sale_price": 10000,
                            "total_sale_price": 50000,
                        },
                    ],
                    "status": 200,
                    "customstatus": 200,
                }),
                auth_required(),
                token_invalid(),
                member_not_found(),
                server_error(),
            ],
        ),
        endpoint(
            "add-qty-to-sell-action",
            Post,
            "/api/auth/add-qty-to-sell-action",
            "Mise à jour de la quantité en vente d'une action par un membre",
            "POST /api/auth/add-qty-to-sell-action\nAuthorization: Bearer <token>\nContent-Type: application/json\n\n{\n  \"selling_action_id\": 66,\n  \"qty_to_add\": 10\n}",
            ActionsMarket,
            vec![
                json!({
                    "message": "Mise à jour de la quantité en vente d'actions réalisée avec succès",
                    "status": 200,
                    "customstatus": 200,
                    "qty_to_sell": 7,
                }),
                auth_required(),
                token_invalid(),
                member_not_found(),
                invalid_json(),
                coded_failure(200, 400, "Action en vente recquis"),
                coded_failure(200, 400, "Quantité à ajouter recquise"),
                coded_failure(200, 400, "Quantité à ajouter négative ou nulle"),
                coded_failure(200, 404, "Action en vente  introuvable"),
                coded_failure(200, 400, "Quantité maximale à vendre dépassée"),
                coded_failure(
                    200,
                    400,
                    "Une erreur inconnue s'est produite lors de la mise en vente",
                ),
            ],
        ),
        endpoint(
            "cancel-selling-action",
            Post,
            "/api/auth/cancel-selling-action",
            "Mise à jour de la quantité en vente d'une action par un membre",
            "POST /api/auth/cancel-selling-action\nAuthorization: Bearer <token>\nContent-Type: application/json\n\n{\n  \"selling_action_id\": 66\n}",
            ActionsMarket,
            vec![
                json!({
                    "message": "Annulation de la vente réalisée avec succès",
                    "status": 200,
                    "customstatus": 200,
                }),
                auth_required(),
                token_invalid(),
                member_not_found(),
                invalid_json(),
                coded_failure(200, 400, "Action en vente recquis"),
                coded_failure(200, 404, "Action en vente  introuvable"),
                coded_failure(
                    200,
                    400,
                    "Une erreur inconnue s'est produite lors de la mise en vente",
                ),
            ],
        ),
        endpoint(
            "reduce-qty-to-sell-action",
            Post,
            "/api/auth/reduce-qty-to-sell-action",
            "Réduit la quantité d'actions actuellement en vente",
            "POST /api/auth/reduce-qty-to-sell-action\nAuthorization: Bearer <token>\nContent-Type: application/json\n\n{\n  \"selling_action_id\": 66,\n  \"qty_to_reduce\": 2\n}",
            ActionsMarket,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "message": "Réduction de la quantité en vente réalisée",
                    "qty_to_sell": 8,
                }),
                coded_failure(200, 403, "Vous n'êtes pas autorisé à modifier cette vente"),
                coded_failure(200, 404, "Action en vente introuvable"),
            ],
        ),
        endpoint(
            "buy-actions-investments",
            Post,
            "/api/auth/buy-actions-investments",
            "Achat d'actions ou de parts d'investissements par un membre",
            "POST /api/auth/buy-actions-investments\nAuthorization: Bearer <token>\nContent-Type: application/json\n\n{ \n      \"selling_action_id\": 40,\n      \"qty_to_buy\": 20}",
            ActionsMarket,
            vec![
                json!({
                    "message": "Achat de part d'actions réalisé avec succès",
                    "status": 200,
                    "customstatus": 200,
                    "project_name": "Vente des Beignets",
                    "qty_to_buy": 5,
                }),
                json!({
                    "message": "Achat de part d'investissements réalisé avec succès",
                    "status": 200,
                    "customstatus": 200,
                    "project_name": "Vente des Beignets",
                    "qty_to_buy": 5,
                }),
                auth_required(),
                token_invalid(),
                member_not_found(),
                invalid_json(),
                coded_failure(200, 400, "Action ou investissement  en vente recquis"),
                coded_failure(200, 400, "Quantité à acheter recquise"),
                coded_failure(200, 404, "Action ou investissement  en vente  introuvable"),
                coded_failure(200, 400, "Quantité à acheter  négative ou nulle"),
                coded_failure(200, 400, "Solde insuffisant"),
                coded_failure(200, 400, "Nombre de parts en vente dépassé"),
                coded_failure(200, 400, "Membre propriétaire de l'action"),
                coded_failure(200, 400, "Nombre d'actions en vente dépassé"),
                coded_failure(
                    200,
                    400,
                    "Une erreur inconnue s'est produite lors de la mise en vente",
                ),
            ],
        ),
        // Mobile access
        endpoint(
            "mobile-functions",
            Get,
            "/api/auth/mobile-functions",
            "Retourne la liste des fonctions mobiles disponibles",
            "GET /api/auth/mobile-functions\nAuthorization: Bearer <token>",
            Mobile,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "mobile_functions": [
                        {
                            "id": 1,
                            "code": "dashboard",
                            "description": "Tableau de bord",
                            "color_code_light": "#4f46e5",
                            "color_code_dark": "#312e81",
                        },
                    ],
                }),
                coded_failure(200, 401, "Token invalide ou expire"),
                coded_failure(200, 404, "Modeles mobile indisponibles"),
                server_error(),
            ],
        ),
        endpoint(
            "mobile-functions-with-roles",
            Get,
            "/api/auth/mobile-functions-with-roles",
            "Retourne les fonctions mobiles avec leurs rôles autorisés",
            "GET /api/auth/mobile-functions-with-roles\nAuthorization: Bearer <token>",
            Mobile,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "mobile_functions": [
                        {
                            "id": 1,
                            "code": "dashboard",
                            "description": "Tableau de bord",
                            "color_code_light": "#4f46e5",
                            "color_code_dark": "#312e81",
                            "allowed_roles": [
                                {
                                    "id": 2,
                                    "code": "manager",
                                    "description": "Responsable mobile",
                                },
                            ],
                        },
                    ],
                }),
                coded_failure(200, 401, "Token invalide ou expire"),
                coded_failure(200, 404, "Modeles mobile indisponibles"),
                server_error(),
            ],
        ),
        endpoint(
            "mobile-functions-by-user",
            Get,
            "/api/auth/mobile-functions-by-user",
            "Retourne les fonctions mobiles du rôle de l'utilisateur connecté",
            "GET /api/auth/mobile-functions-by-user\nAuthorization: Bearer <token>",
            Mobile,
            vec![
                json!({
                    "status": 200,
                    "customstatus": 200,
                    "role": {
                        "id": 2,
                        "code": "manager",
                        "description": "Responsable mobile",
                    },
                    "mobile_functions": [
                        {
                            "id": 1,
                            "code": "dashboard",
                            "description": "Tableau de bord",
                            "color_code_light": "#4f46e5",
                            "color_code_dark": "#312e81",
                        },
                    ],
                }),
                coded_failure(200, 401, "Token invalide ou expire"),
                coded_failure(200, 404, "Modeles mobile indisponibles"),
                member_not_found(),
                coded_failure(200, 500, "Configuration role mobile indisponible"),
                coded_failure(200, 404, "Role mobile introuvable"),
                server_error(),
            ],
        ),
    ]
}
