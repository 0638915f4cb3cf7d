//! The storefront runtime.
//!
//! Wraps [`StorefrontState`] behind a single lock and runs every suspension
//! point as a tokio task owned by the service:
//! 1.  the catalog fetch (once at start, and on explicit reload),
//! 2.  the two carousel timers,
//! 3.  design-suggestion requests,
//! 4.  the delayed checkout reset.
//!
//! Tasks report a completion back into the state. They hold only a weak
//! reference to the service, so dropping it stops them as well.
//! [`StorefrontService::shutdown`] aborts everything still pending, after
//! which no task can touch the state.

use crate::app::reducer::{StorefrontAction, StorefrontEffect, TaskCompletion};
use crate::app::state::{StorefrontSnapshot, StorefrontState};
use crate::domain::model::{PortfolioItem, Product};
use crate::domain::navigation::{metadata_for, LegalSection, View};
use crate::infra::catalog::{provider_for_source, CatalogProvider};
use crate::infra::config::StorefrontConfig;
use crate::infra::document::DocumentSink;
use crate::infra::gemini::{DisabledSuggestionService, GeminiClient, SuggestionService};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError};
use std::time::Duration;
use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

pub struct StorefrontService {
    state: Mutex<StorefrontState>,
    catalog: Arc<dyn CatalogProvider>,
    suggestions: Arc<dyn SuggestionService>,
    document: Arc<dyn DocumentSink>,
    rotation_period: Duration,
    checkout_reset_delay: Duration,
    /// Handles of every task spawned by this service.
    tasks: std::sync::Mutex<Vec<JoinHandle<()>>>,
    started: AtomicBool,
    torn_down: AtomicBool,
    shutdown: Arc<Notify>,
}

impl StorefrontService {
    pub fn new(
        config: &StorefrontConfig,
        catalog: Arc<dyn CatalogProvider>,
        suggestions: Arc<dyn SuggestionService>,
        document: Arc<dyn DocumentSink>,
    ) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(StorefrontState::new()),
            catalog,
            suggestions,
            document,
            rotation_period: config.rotation_period,
            checkout_reset_delay: config.checkout_reset_delay,
            tasks: std::sync::Mutex::new(Vec::new()),
            started: AtomicBool::new(false),
            torn_down: AtomicBool::new(false),
            shutdown: Arc::new(Notify::new()),
        })
    }

    /// Builds the catalog provider and suggestion client described by
    /// `config`. Without an API key the assistant is wired to a service that
    /// always fails.
    pub fn from_config(config: &StorefrontConfig, document: Arc<dyn DocumentSink>) -> Arc<Self> {
        let catalog = provider_for_source(&config.catalog_source);
        let suggestions: Arc<dyn SuggestionService> = match &config.gemini_api_key {
            Some(key) => Arc::new(GeminiClient::new(
                config.gemini_base_url.clone(),
                config.gemini_model.clone(),
                key.clone(),
            )),
            None => {
                warn!("No GEMINI_API_KEY set; design assistant requests will fail");
                Arc::new(DisabledSuggestionService)
            }
        };
        Self::new(config, catalog, suggestions, document)
    }

    /// Issues the catalog fetch, writes the initial page metadata and starts
    /// both carousel timers. Only the first call does anything.
    pub fn start(self: &Arc<Self>) {
        if self.started.swap(true, Ordering::SeqCst) || self.is_torn_down() {
            return;
        }
        info!(source = %self.catalog.describe(), "Starting storefront");
        self.run_effects(vec![
            StorefrontEffect::ScrollToOrigin,
            StorefrontEffect::UpdateMetadata(metadata_for(View::Home)),
            StorefrontEffect::FetchCatalog,
        ]);
        self.spawn_rotation(TaskCompletion::HeroTick);
        self.spawn_rotation(TaskCompletion::PortfolioHeroTick);
    }

    /// Tears the service down: aborts timers, pending checkout resets and any
    /// in-flight fetches. Later dispatches are ignored.
    pub fn shutdown(&self) {
        self.torn_down.store(true, Ordering::SeqCst);
        self.shutdown.notify_waiters();
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        let pending = tasks.len();
        for handle in tasks.drain(..) {
            handle.abort();
        }
        info!(pending, "Storefront shut down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    /// Number of spawned tasks that have not finished yet.
    pub fn pending_tasks(&self) -> usize {
        let tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        tasks.iter().filter(|h| !h.is_finished()).count()
    }

    /// Applies `action` and carries out whatever it asks for.
    pub async fn dispatch(self: &Arc<Self>, action: StorefrontAction) {
        let effects = self.commit(action).await;
        self.run_effects(effects);
    }

    pub async fn snapshot(&self) -> StorefrontSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Runs `f` against the current state.
    pub async fn read<R>(&self, f: impl FnOnce(&StorefrontState) -> R) -> R {
        let state = self.state.lock().await;
        f(&state)
    }

    pub async fn find_product(&self, id: &str) -> Option<Product> {
        self.read(|s| s.catalog().find_product(id).cloned()).await
    }

    pub async fn find_portfolio_item(&self, id: &str) -> Option<PortfolioItem> {
        self.read(|s| s.catalog().find_portfolio_item(id).cloned())
            .await
    }

    pub async fn navigate(self: &Arc<Self>, view: View) {
        self.dispatch(StorefrontAction::Navigate(view)).await
    }

    pub async fn select_legal_section(self: &Arc<Self>, section: LegalSection) {
        self.dispatch(StorefrontAction::SelectLegalSection(section))
            .await
    }

    pub async fn add_to_cart(self: &Arc<Self>, product: Product) {
        self.dispatch(StorefrontAction::AddToCart(product)).await
    }

    pub async fn remove_from_cart(self: &Arc<Self>, id: impl Into<String>) {
        self.dispatch(StorefrontAction::RemoveFromCart(id.into()))
            .await
    }

    pub async fn update_quantity(self: &Arc<Self>, id: impl Into<String>, delta: i64) {
        self.dispatch(StorefrontAction::UpdateQuantity {
            id: id.into(),
            delta,
        })
        .await
    }

    pub async fn checkout(self: &Arc<Self>) {
        self.dispatch(StorefrontAction::Checkout).await
    }

    pub async fn set_prompt(self: &Arc<Self>, prompt: impl Into<String>) {
        self.dispatch(StorefrontAction::SetPrompt(prompt.into()))
            .await
    }

    pub async fn submit_prompt(self: &Arc<Self>) {
        self.dispatch(StorefrontAction::SubmitPrompt).await
    }

    pub async fn reload_catalog(self: &Arc<Self>) {
        self.dispatch(StorefrontAction::ReloadCatalog).await
    }

    async fn commit(&self, action: StorefrontAction) -> Vec<StorefrontEffect> {
        if self.is_torn_down() {
            debug!(?action, "Ignoring action after shutdown");
            return Vec::new();
        }
        let mut state = self.state.lock().await;
        state.apply(action)
    }

    async fn finish(&self, completion: TaskCompletion) {
        if self.is_torn_down() {
            return;
        }
        self.state.lock().await.complete(completion);
    }

    fn run_effects(self: &Arc<Self>, effects: Vec<StorefrontEffect>) {
        for effect in effects {
            match effect {
                StorefrontEffect::ScrollToOrigin => self.document.scroll_to_origin(),
                StorefrontEffect::UpdateMetadata(metadata) => {
                    self.document.apply_metadata(metadata)
                }
                StorefrontEffect::FetchCatalog => self.spawn_catalog_fetch(),
                StorefrontEffect::RequestSuggestion(prompt) => self.spawn_suggestion(prompt),
                StorefrontEffect::ScheduleCheckoutReset => self.spawn_checkout_reset(),
            }
        }
    }

    /// Spawns `task` and records its handle. Nothing is spawned once the
    /// service is torn down.
    fn spawn_scoped<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        if self.is_torn_down() {
            return;
        }
        tasks.retain(|h| !h.is_finished());
        tasks.push(tokio::spawn(task));
    }

    // Tasks only hold a `Weak` to the service; a result arriving after the
    // service is gone is dropped.

    fn spawn_catalog_fetch(self: &Arc<Self>) {
        let svc = Arc::downgrade(self);
        let catalog = Arc::clone(&self.catalog);
        self.spawn_scoped(async move {
            let completion = match catalog.fetch().await {
                Ok(payload) => {
                    info!(
                        products = payload.products.len(),
                        portfolio_items = payload.portfolio_items.len(),
                        "Catalog loaded"
                    );
                    TaskCompletion::CatalogLoaded(payload)
                }
                Err(e) => {
                    error!(source = %catalog.describe(), error = %e, "Error fetching catalog data");
                    TaskCompletion::CatalogFailed
                }
            };
            if let Some(svc) = svc.upgrade() {
                svc.finish(completion).await;
            }
        });
    }

    fn spawn_suggestion(self: &Arc<Self>, prompt: String) {
        let svc = Arc::downgrade(self);
        let suggestions = Arc::clone(&self.suggestions);
        self.spawn_scoped(async move {
            let completion = match suggestions.suggest(&prompt).await {
                Ok(suggestion) => {
                    info!(title = %suggestion.title, "Design suggestion received");
                    TaskCompletion::SuggestionReceived(suggestion)
                }
                Err(e) => {
                    error!(error = %e, "Design suggestion request failed");
                    TaskCompletion::SuggestionFailed
                }
            };
            if let Some(svc) = svc.upgrade() {
                svc.finish(completion).await;
            }
        });
    }

    /// Each checkout gets its own reset. Nothing but shutdown cancels it.
    fn spawn_checkout_reset(self: &Arc<Self>) {
        let svc = Arc::downgrade(self);
        let delay = self.checkout_reset_delay;
        self.spawn_scoped(async move {
            tokio::time::sleep(delay).await;
            if let Some(svc) = svc.upgrade() {
                svc.finish(TaskCompletion::CheckoutResetElapsed).await;
            }
        });
    }

    /// One repeating task per carousel. Every tick is a plain modulo
    /// increment of whatever index is current, so manual selections carry
    /// over.
    fn spawn_rotation(self: &Arc<Self>, tick: TaskCompletion) {
        let svc = Arc::downgrade(self);
        let period = self.rotation_period;
        let shutdown = self.shutdown.clone();
        self.spawn_scoped(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let Some(svc) = svc.upgrade() else { break };
                        svc.finish(tick.clone()).await;
                    }
                    _ = shutdown.notified() => {
                        debug!("Rotation timer stopping");
                        break;
                    }
                }
            }
        });
    }
}

/// Dropping the last handle without `shutdown` still stops every task.
impl Drop for StorefrontService {
    fn drop(&mut self) {
        let tasks = self.tasks.get_mut().unwrap_or_else(PoisonError::into_inner);
        for handle in tasks.drain(..) {
            handle.abort();
        }
    }
}
