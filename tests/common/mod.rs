//! Shared fixtures: a small catalog and stub collaborators.
#![allow(dead_code)]

use aspire_storefront::infra::catalog::CatalogProvider;
use aspire_storefront::infra::document::InMemoryDocument;
use aspire_storefront::infra::error::{FetchError, FetchResult};
use aspire_storefront::infra::gemini::SuggestionService;
use aspire_storefront::{
    CatalogPayload, Category, DesignSuggestion, PortfolioCategory, PortfolioItem, Product,
    StorefrontConfig, StorefrontService,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

pub fn product(
    id: &str,
    name: &str,
    description: &str,
    price: u64,
    category: Category,
    min_quantity: Option<u32>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        image: format!("https://img.example/{}.jpg", id),
        min_quantity,
        delivery_time: "2-3 days".to_string(),
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        product("p1", "Premium Business Cards", "Matte or gloss cards on 400gsm stock", 2500, Category::Print, Some(100)),
        product("p2", "Logo Design Package", "Three logo concepts with brand guide", 15000, Category::Branding, Some(1)),
        product("p3", "Vinyl Banner", "Weatherproof outdoor banner with eyelets", 8000, Category::Signage, None),
        product("p4", "Branded T-Shirts", "Screen printed cotton tees", 1200, Category::Apparel, Some(20)),
        product("p5", "Event Flyers", "A5 full colour FLYERS for promotions", 3000, Category::Print, Some(0)),
        product("p6", "Social Media Kit", "Templates for posts and stories", 9500, Category::CreativeDesign, Some(1)),
    ]
}

pub fn portfolio_item(id: &str, title: &str, category: PortfolioCategory) -> PortfolioItem {
    PortfolioItem {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} summary", title),
        full_description: format!("{} case study", title),
        category,
        image: format!("https://img.example/{}.jpg", id),
        client: "Acme Ltd".to_string(),
        tools: vec!["Illustrator".to_string(), "Figma".to_string()],
    }
}

pub fn sample_portfolio() -> Vec<PortfolioItem> {
    vec![
        portfolio_item("w1", "Coffee House Logo", PortfolioCategory::Logos),
        portfolio_item("w2", "Jazz Night Poster", PortfolioCategory::Posters),
        portfolio_item("w3", "Clinic Flyer", PortfolioCategory::Flyers),
        portfolio_item("w4", "Law Firm Cards", PortfolioCategory::Cards),
        portfolio_item("w5", "Booking Web App", PortfolioCategory::WebApps),
        portfolio_item("w6", "Bakery Identity", PortfolioCategory::Branding),
        portfolio_item("w7", "Gym Logo", PortfolioCategory::Logos),
    ]
}

pub fn sample_catalog() -> CatalogPayload {
    CatalogPayload {
        products: sample_products(),
        portfolio_items: sample_portfolio(),
    }
}

pub fn sample_suggestion(title: &str) -> DesignSuggestion {
    DesignSuggestion {
        title: title.to_string(),
        description: "Earthy and calm".to_string(),
        concept: "Leaves as a recurring motif".to_string(),
        color_palette: vec!["#14532d".to_string(), "#a3e635".to_string()],
        fonts: vec!["Inter".to_string(), "Playfair Display".to_string()],
    }
}

pub fn test_config() -> StorefrontConfig {
    StorefrontConfig::default()
}

/// Serves queued results in order; once the queue is empty, fails.
pub struct ScriptedCatalog {
    pub calls: AtomicUsize,
    results: Mutex<VecDeque<FetchResult<CatalogPayload>>>,
    /// When set, every fetch waits for a permit before answering.
    gate: Option<Arc<Notify>>,
}

impl ScriptedCatalog {
    pub fn new(results: Vec<FetchResult<CatalogPayload>>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            results: Mutex::new(results.into()),
            gate: None,
        }
    }

    pub fn gated(results: Vec<FetchResult<CatalogPayload>>, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(results)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogProvider for ScriptedCatalog {
    async fn fetch(&self) -> FetchResult<CatalogPayload> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let next = self.results.lock().unwrap().pop_front();
        next.unwrap_or(Err(FetchError::EmptyResponse))
    }

    fn describe(&self) -> String {
        "scripted catalog".to_string()
    }
}

pub fn unreachable_error() -> FetchError {
    FetchError::Io(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "catalog host unreachable",
    ))
}

/// Records prompts and answers from a script; an exhausted script fails.
pub struct ScriptedSuggestions {
    pub prompts: Mutex<Vec<String>>,
    results: Mutex<VecDeque<FetchResult<DesignSuggestion>>>,
}

impl ScriptedSuggestions {
    pub fn new(results: Vec<FetchResult<DesignSuggestion>>) -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            results: Mutex::new(results.into()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl SuggestionService for ScriptedSuggestions {
    async fn suggest(&self, prompt: &str) -> FetchResult<DesignSuggestion> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let next = self.results.lock().unwrap().pop_front();
        next.unwrap_or(Err(FetchError::EmptyResponse))
    }
}

pub struct Harness {
    pub service: Arc<StorefrontService>,
    pub catalog: Arc<ScriptedCatalog>,
    pub suggestions: Arc<ScriptedSuggestions>,
    pub document: Arc<InMemoryDocument>,
}

pub fn harness(catalog: ScriptedCatalog, suggestions: ScriptedSuggestions) -> Harness {
    let catalog = Arc::new(catalog);
    let suggestions = Arc::new(suggestions);
    let document = Arc::new(InMemoryDocument::new());
    let service = StorefrontService::new(
        &test_config(),
        catalog.clone(),
        suggestions.clone(),
        document.clone(),
    );
    Harness {
        service,
        catalog,
        suggestions,
        document,
    }
}

/// Lets spawned tasks run to completion (time is paused in most tests, so
/// this also auto-advances the clock only once everything is idle).
pub async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
    tokio::time::sleep(Duration::from_millis(1)).await;
}

pub async fn wait_for_catalog(service: &StorefrontService) {
    for _ in 0..200 {
        if !service.read(|s| s.catalog().is_loading()).await {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("catalog never finished loading");
}
