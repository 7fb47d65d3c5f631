//! The login-and-order scenario.
//!
//! One iteration replays a diner's session as a fixed linear sequence: home
//! page, login, menu, franchise list, profile, order placement, order
//! verification, with think-time sleeps between steps. Login and order
//! placement are checkpoints: on a non-200 the step records a failure and
//! the rest of the iteration short-circuits (the session carries no token,
//! so later steps no-op).

use std::time::Duration;

use goose::prelude::*;
use serde::Deserialize;

/// Diner account used by the scenario. Overridable for targets whose
/// directory differs from the stub's standard fixtures.
fn diner_email() -> String {
    std::env::var("PIZZA_LOADGEN_EMAIL").unwrap_or_else(|_| "d@jwt.com".to_owned())
}

fn diner_password() -> String {
    std::env::var("PIZZA_LOADGEN_PASSWORD").unwrap_or_else(|_| "a".to_owned())
}

/// Per-user state carried across the steps of one iteration.
#[derive(Debug, Default)]
struct OrderSession {
    /// Auth token captured at login.
    token: Option<String>,
    /// Proof-of-purchase token captured at order placement.
    jwt: Option<String>,
}

/// The slice of the auth response the scenario needs.
#[derive(Debug, Deserialize)]
struct AuthPayload {
    token: String,
}

/// The slice of the order receipt the scenario needs.
#[derive(Debug, Deserialize)]
struct ReceiptPayload {
    jwt: String,
}

/// Build the login-and-order scenario with its steps in order.
#[must_use]
pub fn login_and_order() -> Scenario {
    scenario!("LoginAndOrder")
        .register_transaction(transaction!(home_page).set_name("home page").set_sequence(1))
        .register_transaction(transaction!(login).set_name("login").set_sequence(2))
        .register_transaction(transaction!(fetch_menu).set_name("menu").set_sequence(3))
        .register_transaction(
            transaction!(list_franchises)
                .set_name("franchises")
                .set_sequence(4),
        )
        .register_transaction(transaction!(profile).set_name("me").set_sequence(5))
        .register_transaction(
            transaction!(place_order)
                .set_name("purchase")
                .set_sequence(6),
        )
        .register_transaction(
            transaction!(verify_order)
                .set_name("verify")
                .set_sequence(7),
        )
}

/// The token captured at login, if the checkpoint passed.
fn session_token(user: &GooseUser) -> Option<String> {
    user.get_session_data::<OrderSession>()
        .and_then(|s| s.token.clone())
}

/// Issue a GET with the session's bearer token.
async fn authorized_get(user: &mut GooseUser, path: &str, token: &str) -> TransactionResult {
    let request_builder = user
        .get_request_builder(&GooseMethod::Get, path)?
        .bearer_auth(token);
    let goose_request = GooseRequest::builder()
        .method(GooseMethod::Get)
        .path(path)
        .set_request_builder(request_builder)
        .build();
    let _goose = user.request(goose_request).await?;
    Ok(())
}

/// Step 1: home page.
async fn home_page(user: &mut GooseUser) -> TransactionResult {
    let _goose = user.get("/").await?;
    tokio::time::sleep(Duration::from_secs(3)).await;
    Ok(())
}

/// Step 2: login checkpoint. Captures the auth token on 200.
async fn login(user: &mut GooseUser) -> TransactionResult {
    // Fresh session per iteration: a stale token must not mask a failed login.
    user.set_session_data(OrderSession::default());

    let body = serde_json::json!({
        "email": diner_email(),
        "password": diner_password(),
    });
    let request_builder = user
        .get_request_builder(&GooseMethod::Put, "/api/auth")?
        .json(&body);
    let goose_request = GooseRequest::builder()
        .method(GooseMethod::Put)
        .path("/api/auth")
        .set_request_builder(request_builder)
        .build();

    let mut goose = user.request(goose_request).await?;
    match goose.response {
        Ok(response) if response.status() == 200 => match response.json::<AuthPayload>().await {
            Ok(auth) => {
                if let Some(session) = user.get_session_data_mut::<OrderSession>() {
                    session.token = Some(auth.token);
                }
            }
            Err(e) => {
                return user.set_failure(
                    &format!("login response did not parse: {e}"),
                    &mut goose.request,
                    None,
                    None,
                );
            }
        },
        Ok(response) => {
            return user.set_failure(
                &format!("login was not 200: {}", response.status()),
                &mut goose.request,
                None,
                None,
            );
        }
        Err(e) => {
            let reason = e.to_string();
            return user.set_failure(
                &format!("login failed: {reason}"),
                &mut goose.request,
                None,
                None,
            );
        }
    }

    tokio::time::sleep(Duration::from_secs(1)).await;
    Ok(())
}

/// Step 3: fetch the menu.
async fn fetch_menu(user: &mut GooseUser) -> TransactionResult {
    let Some(token) = session_token(user) else {
        return Ok(());
    };
    authorized_get(user, "/api/order/menu", &token).await
}

/// Step 4: list franchises the way the order page does.
async fn list_franchises(user: &mut GooseUser) -> TransactionResult {
    let Some(token) = session_token(user) else {
        return Ok(());
    };
    authorized_get(user, "/api/franchise?page=0&limit=20&name=*", &token).await?;
    tokio::time::sleep(Duration::from_secs(2)).await;
    Ok(())
}

/// Step 5: fetch the session profile.
async fn profile(user: &mut GooseUser) -> TransactionResult {
    let Some(token) = session_token(user) else {
        return Ok(());
    };
    authorized_get(user, "/api/user/me", &token).await?;
    tokio::time::sleep(Duration::from_secs(1)).await;
    Ok(())
}

/// Step 6: purchase checkpoint. Captures the proof-of-purchase token on 200.
async fn place_order(user: &mut GooseUser) -> TransactionResult {
    let Some(token) = session_token(user) else {
        return Ok(());
    };

    let body = serde_json::json!({
        "items": [{"menuId": 1, "description": "Veggie", "price": 0.0038}],
        "storeId": 1,
        "franchiseId": 1,
    });
    let request_builder = user
        .get_request_builder(&GooseMethod::Post, "/api/order")?
        .bearer_auth(&token)
        .json(&body);
    let goose_request = GooseRequest::builder()
        .method(GooseMethod::Post)
        .path("/api/order")
        .set_request_builder(request_builder)
        .build();

    let mut goose = user.request(goose_request).await?;
    match goose.response {
        Ok(response) if response.status() == 200 => {
            match response.json::<ReceiptPayload>().await {
                Ok(receipt) => {
                    if let Some(session) = user.get_session_data_mut::<OrderSession>() {
                        session.jwt = Some(receipt.jwt);
                    }
                }
                Err(e) => {
                    return user.set_failure(
                        &format!("order response did not parse: {e}"),
                        &mut goose.request,
                        None,
                        None,
                    );
                }
            }
        }
        Ok(response) => {
            return user.set_failure(
                &format!("purchase was not 200: {}", response.status()),
                &mut goose.request,
                None,
                None,
            );
        }
        Err(e) => {
            let reason = e.to_string();
            return user.set_failure(
                &format!("purchase failed: {reason}"),
                &mut goose.request,
                None,
                None,
            );
        }
    }

    tokio::time::sleep(Duration::from_secs(1)).await;
    Ok(())
}

/// Step 7: hand the proof of purchase to the verifier.
async fn verify_order(user: &mut GooseUser) -> TransactionResult {
    let (Some(token), Some(jwt)) = (
        session_token(user),
        user.get_session_data::<OrderSession>()
            .and_then(|s| s.jwt.clone()),
    ) else {
        return Ok(());
    };

    let body = serde_json::json!({ "jwt": jwt });
    let request_builder = user
        .get_request_builder(&GooseMethod::Post, "/api/order/verify")?
        .bearer_auth(&token)
        .json(&body);
    let goose_request = GooseRequest::builder()
        .method(GooseMethod::Post)
        .path("/api/order/verify")
        .set_request_builder(request_builder)
        .build();

    let _goose = user.request(goose_request).await?;
    Ok(())
}
