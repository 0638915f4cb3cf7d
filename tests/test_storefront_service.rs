//! End-to-end behaviour of the storefront runtime: catalog loading, timers,
//! delayed checkout reset, the assistant and teardown.

mod common;

use aspire_storefront::domain::catalog::Loadable;
use aspire_storefront::domain::navigation::metadata_for;
use aspire_storefront::infra::error::FetchError;
use aspire_storefront::{LegalSection, StorefrontAction, View};
use common::{
    harness, sample_catalog, sample_portfolio, sample_products, sample_suggestion, settle,
    unreachable_error, wait_for_catalog, Harness, ScriptedCatalog, ScriptedSuggestions,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

fn loaded() -> ScriptedCatalog {
    ScriptedCatalog::new(vec![Ok(sample_catalog())])
}

fn no_suggestions() -> ScriptedSuggestions {
    ScriptedSuggestions::new(Vec::new())
}

#[tokio::test(start_paused = true)]
async fn start_fetches_the_catalog_exactly_once() {
    let h = harness(loaded(), no_suggestions());
    h.service.start();
    h.service.start();
    wait_for_catalog(&h.service).await;
    settle().await;

    assert_eq!(h.catalog.calls(), 1);
    let snap = h.service.snapshot().await;
    assert!(!snap.catalog_loading);
    assert_eq!(snap.product_count, 6);
    assert_eq!(snap.portfolio_count, 7);
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn views_report_loading_until_the_fetch_resolves() {
    let gate = Arc::new(Notify::new());
    let h = harness(
        ScriptedCatalog::gated(vec![Ok(sample_catalog())], gate.clone()),
        no_suggestions(),
    );
    assert!(h.service.read(|s| s.filtered_products().is_loading()).await);

    h.service.start();
    settle().await;
    assert_eq!(h.catalog.calls(), 1);
    assert!(h.service.read(|s| s.home_sections().is_loading()).await);
    assert!(h.service.read(|s| s.filtered_portfolio().is_loading()).await);

    gate.notify_one();
    wait_for_catalog(&h.service).await;

    let products = h.service.read(|s| s.filtered_products()).await;
    assert_eq!(products, Loadable::Ready(sample_products()));
    let portfolio = h.service.read(|s| s.filtered_portfolio()).await;
    assert_eq!(portfolio, Loadable::Ready(sample_portfolio()));
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_leaves_empty_collections() {
    let h = harness(
        ScriptedCatalog::new(vec![Err(unreachable_error())]),
        no_suggestions(),
    );
    h.service.start();
    wait_for_catalog(&h.service).await;

    let snap = h.service.snapshot().await;
    assert!(!snap.catalog_loading);
    assert_eq!(snap.product_count, 0);
    assert_eq!(snap.portfolio_count, 0);
    assert_eq!(
        h.service.read(|s| s.filtered_products()).await,
        Loadable::Ready(Vec::new())
    );
    assert_eq!(h.catalog.calls(), 1, "no automatic retry");
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn reload_recovers_after_a_failure_and_keeps_data_on_later_failures() {
    let h = harness(
        ScriptedCatalog::new(vec![
            Err(unreachable_error()),
            Ok(sample_catalog()),
            Err(FetchError::EmptyResponse),
        ]),
        no_suggestions(),
    );
    h.service.start();
    wait_for_catalog(&h.service).await;
    assert_eq!(h.service.snapshot().await.product_count, 0);

    h.service.reload_catalog().await;
    wait_for_catalog(&h.service).await;
    assert_eq!(h.service.snapshot().await.product_count, 6);

    h.service.reload_catalog().await;
    wait_for_catalog(&h.service).await;
    assert_eq!(h.service.snapshot().await.product_count, 6);
    assert_eq!(h.catalog.calls(), 3);
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn reload_while_loading_does_not_issue_a_second_fetch() {
    let gate = Arc::new(Notify::new());
    let h = harness(
        ScriptedCatalog::gated(vec![Ok(sample_catalog())], gate.clone()),
        no_suggestions(),
    );
    h.service.start();
    settle().await;
    h.service.reload_catalog().await;
    settle().await;
    assert_eq!(h.catalog.calls(), 1);

    gate.notify_one();
    wait_for_catalog(&h.service).await;
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn navigation_writes_metadata_and_scrolls_to_top() {
    let h = harness(loaded(), no_suggestions());
    h.service.start();
    wait_for_catalog(&h.service).await;

    let head = h.document.head();
    assert_eq!(head.title, metadata_for(View::Home).title);
    assert_eq!(head.scroll_resets, 1);

    h.service.navigate(View::Services).await;
    let head = h.document.head();
    assert_eq!(head.title, metadata_for(View::Services).title);
    assert_eq!(head.description, metadata_for(View::Services).description);
    assert_eq!(head.og_title, metadata_for(View::Services).og_title);
    assert_eq!(head.scroll_resets, 2);

    h.service.select_legal_section(LegalSection::Cookies).await;
    let snap = h.service.snapshot().await;
    assert_eq!(snap.view, View::Legal);
    assert_eq!(snap.legal_section, LegalSection::Cookies);
    assert_eq!(h.document.head().title, metadata_for(View::Legal).title);
    assert_eq!(h.document.head().scroll_resets, 3);
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn carousels_advance_on_each_period() {
    let h = harness(loaded(), no_suggestions());
    h.service.start();
    wait_for_catalog(&h.service).await;

    tokio::time::sleep(Duration::from_millis(7_500)).await;
    let snap = h.service.snapshot().await;
    assert_eq!((snap.hero_index, snap.portfolio_hero_index), (1, 1));

    tokio::time::sleep(Duration::from_secs(14)).await;
    let snap = h.service.snapshot().await;
    // three ticks: hero wraps over 3 slides, portfolio over 2
    assert_eq!((snap.hero_index, snap.portfolio_hero_index), (0, 1));
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn manual_slide_choice_is_where_the_next_tick_continues() {
    let h = harness(loaded(), no_suggestions());
    h.service.start();
    wait_for_catalog(&h.service).await;

    h.service.dispatch(StorefrontAction::SelectHeroSlide(2)).await;
    assert_eq!(h.service.snapshot().await.hero_index, 2);

    tokio::time::sleep(Duration::from_millis(7_500)).await;
    assert_eq!(h.service.snapshot().await.hero_index, 0);
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn checkout_clears_the_cart_and_resets_after_the_delay() {
    let h = harness(loaded(), no_suggestions());
    h.service.start();
    wait_for_catalog(&h.service).await;

    let business_cards = h.service.find_product("p1").await.unwrap();
    let logo = h.service.find_product("p2").await.unwrap();
    h.service.add_to_cart(business_cards).await;
    h.service.add_to_cart(logo).await;
    h.service.checkout().await;

    let snap = h.service.snapshot().await;
    assert!(snap.cart_items.is_empty());
    assert_eq!(snap.cart_total, 0);
    assert!(snap.order_success);
    assert!(snap.cart_open);
    let receipt = snap.last_receipt.unwrap();
    assert_eq!(receipt.total, 2500 * 100 + 15000);
    assert_eq!(receipt.line_count, 2);
    assert_eq!(receipt.unit_count, 101);

    tokio::time::sleep(Duration::from_millis(3_900)).await;
    assert!(h.service.snapshot().await.order_success);

    tokio::time::sleep(Duration::from_millis(200)).await;
    let snap = h.service.snapshot().await;
    assert!(!snap.order_success);
    assert!(!snap.cart_open);

    // the reset fires once; reopening the panel afterwards sticks
    h.service.dispatch(StorefrontAction::OpenCart).await;
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(h.service.snapshot().await.cart_open);
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn reset_still_fires_once_when_the_user_moves_on_before_the_delay() {
    let h = harness(loaded(), no_suggestions());
    h.service.start();
    wait_for_catalog(&h.service).await;

    let banner = h.service.find_product("p3").await.unwrap();
    h.service.add_to_cart(banner).await;
    h.service.checkout().await;

    tokio::time::sleep(Duration::from_secs(1)).await;
    h.service.dispatch(StorefrontAction::CloseCart).await;
    h.service.dispatch(StorefrontAction::OpenCart).await;
    h.service.navigate(View::Products).await;

    let snap = h.service.snapshot().await;
    assert!(snap.order_success);
    assert!(snap.cart_open);
    assert_eq!(snap.view, View::Products);

    tokio::time::sleep(Duration::from_millis(3_100)).await;
    let snap = h.service.snapshot().await;
    assert!(!snap.order_success);
    assert!(!snap.cart_open);
    assert_eq!(snap.view, View::Products);

    h.service.dispatch(StorefrontAction::OpenCart).await;
    tokio::time::sleep(Duration::from_secs(10)).await;
    let snap = h.service.snapshot().await;
    assert!(snap.cart_open);
    assert!(!snap.order_success);
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn empty_cart_checkout_still_succeeds() {
    let h = harness(loaded(), no_suggestions());
    h.service.start();
    wait_for_catalog(&h.service).await;

    h.service.checkout().await;
    let snap = h.service.snapshot().await;
    assert!(snap.order_success);
    assert_eq!(snap.last_receipt.map(|r| r.total), Some(0));
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_pending_work_and_ignores_later_actions() {
    let h = harness(loaded(), no_suggestions());
    h.service.start();
    wait_for_catalog(&h.service).await;

    h.service.checkout().await;
    assert!(h.service.pending_tasks() >= 3);

    h.service.shutdown();
    settle().await;
    assert!(h.service.is_torn_down());
    assert_eq!(h.service.pending_tasks(), 0);

    tokio::time::sleep(Duration::from_secs(30)).await;
    let snap = h.service.snapshot().await;
    assert!(snap.order_success, "cancelled reset must not fire");
    assert_eq!(snap.hero_index, 0, "timers stop on shutdown");

    h.service.navigate(View::Contact).await;
    assert_eq!(h.service.snapshot().await.view, View::Home);
}

#[tokio::test(start_paused = true)]
async fn shutdown_abandons_an_in_flight_fetch() {
    let gate = Arc::new(Notify::new());
    let h = harness(
        ScriptedCatalog::gated(vec![Ok(sample_catalog())], gate.clone()),
        no_suggestions(),
    );
    h.service.start();
    settle().await;

    h.service.shutdown();
    gate.notify_one();
    settle().await;

    let snap = h.service.snapshot().await;
    assert!(snap.catalog_loading);
    assert_eq!(snap.product_count, 0);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_service_stops_its_tasks() {
    let Harness { service, catalog, .. } = harness(loaded(), no_suggestions());
    service.start();
    wait_for_catalog(&service).await;
    service.checkout().await;

    let weak = Arc::downgrade(&service);
    drop(service);
    settle().await;
    assert!(weak.upgrade().is_none());

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(catalog.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn public_actions_cannot_settle_a_pending_fetch() {
    let gate = Arc::new(Notify::new());
    let h = harness(
        ScriptedCatalog::gated(vec![Ok(sample_catalog())], gate.clone()),
        no_suggestions(),
    );
    h.service.start();
    settle().await;

    for action in [
        StorefrontAction::ReloadCatalog,
        StorefrontAction::SubmitPrompt,
        StorefrontAction::Checkout,
        StorefrontAction::SelectHeroSlide(1),
        StorefrontAction::Navigate(View::Products),
        StorefrontAction::ReloadCatalog,
    ] {
        h.service.dispatch(action).await;
    }
    settle().await;

    let snap = h.service.snapshot().await;
    assert!(snap.catalog_loading);
    assert_eq!(h.catalog.calls(), 1);
    assert!(snap.assistant.suggestion().is_none());
    assert_eq!(h.suggestions.call_count(), 0);

    gate.notify_one();
    wait_for_catalog(&h.service).await;
    assert_eq!(h.service.snapshot().await.product_count, 6);
    assert_eq!(h.catalog.calls(), 1);
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn blank_prompt_never_reaches_the_service() {
    let h = harness(loaded(), no_suggestions());
    h.service.start();

    h.service.set_prompt("   \t ").await;
    h.service.submit_prompt().await;
    settle().await;

    assert_eq!(h.suggestions.call_count(), 0);
    assert!(!h.service.snapshot().await.assistant.is_loading());
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn suggestion_success_is_kept_and_a_failure_leaves_it_in_place() {
    let h = harness(
        loaded(),
        ScriptedSuggestions::new(vec![
            Ok(sample_suggestion("Verdant")),
            Err(FetchError::EmptyResponse),
        ]),
    );
    h.service.start();

    h.service.set_prompt("  eco-friendly coffee shop  ").await;
    h.service.submit_prompt().await;
    assert!(h.service.snapshot().await.assistant.is_loading());
    settle().await;

    let assistant = h.service.snapshot().await.assistant;
    assert!(!assistant.is_loading());
    assert_eq!(assistant.suggestion().map(|s| s.title.as_str()), Some("Verdant"));
    assert_eq!(
        h.suggestions.prompts.lock().unwrap().clone(),
        vec!["eco-friendly coffee shop".to_string()]
    );

    h.service.submit_prompt().await;
    settle().await;
    let assistant = h.service.snapshot().await.assistant;
    assert!(!assistant.is_loading());
    assert_eq!(assistant.suggestion().map(|s| s.title.as_str()), Some("Verdant"));
    assert_eq!(h.suggestions.call_count(), 2);
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn double_submit_sends_a_single_request() {
    let h = harness(
        loaded(),
        ScriptedSuggestions::new(vec![Ok(sample_suggestion("Once"))]),
    );
    h.service.start();

    h.service.set_prompt("bakery rebrand").await;
    h.service.submit_prompt().await;
    h.service.submit_prompt().await;
    settle().await;

    assert_eq!(h.suggestions.call_count(), 1);
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn start_similar_project_goes_to_contact_without_a_selection() {
    let h = harness(loaded(), no_suggestions());
    h.service.start();
    wait_for_catalog(&h.service).await;

    let item = h.service.find_portfolio_item("w3").await.unwrap();
    h.service.dispatch(StorefrontAction::OpenProject(item)).await;
    assert_eq!(
        h.service.snapshot().await.selected_project.map(|p| p.id),
        Some("w3".to_string())
    );

    h.service.dispatch(StorefrontAction::StartSimilarProject).await;
    let snap = h.service.snapshot().await;
    assert_eq!(snap.view, View::Contact);
    assert!(snap.selected_project.is_none());
    assert_eq!(h.document.head().title, metadata_for(View::Contact).title);
    h.service.shutdown();
}

#[tokio::test(start_paused = true)]
async fn submitting_search_closes_the_overlay_and_shows_products() {
    let h = harness(loaded(), no_suggestions());
    h.service.start();
    wait_for_catalog(&h.service).await;

    h.service.dispatch(StorefrontAction::OpenSearch).await;
    h.service
        .dispatch(StorefrontAction::SetSearchQuery("banner".into()))
        .await;
    assert!(h.service.snapshot().await.search_open);

    h.service.dispatch(StorefrontAction::SubmitSearch).await;
    let snap = h.service.snapshot().await;
    assert!(!snap.search_open);
    assert_eq!(snap.view, View::Products);

    let ids: Vec<String> = match h.service.read(|s| s.filtered_products()).await {
        Loadable::Ready(products) => products.into_iter().map(|p| p.id).collect(),
        Loadable::Loading => panic!("catalog should be loaded"),
    };
    assert_eq!(ids, vec!["p3".to_string()]);
    h.service.shutdown();
}
