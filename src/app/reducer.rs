//! Actions accepted by the state container, and the side effects each
//! transition asks the runtime to carry out.

use crate::app::state::StorefrontState;
use crate::domain::model::{
    CatalogPayload, CategoryFilter, DesignSuggestion, PortfolioFilter, PortfolioItem, Product,
};
use crate::domain::navigation::{EntryAction, LegalSection, PageMetadata, View};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum StorefrontAction {
    Navigate(View),
    /// Also forces the legal view.
    SelectLegalSection(LegalSection),

    SelectCategory(CategoryFilter),
    SetSearchQuery(String),
    SelectPortfolioFilter(PortfolioFilter),
    OpenSearch,
    CloseSearch,
    /// Enter in the search overlay: show the product listing.
    SubmitSearch,

    AddToCart(Product),
    RemoveFromCart(String),
    UpdateQuantity { id: String, delta: i64 },
    OpenCart,
    CloseCart,

    Checkout,

    OpenProject(PortfolioItem),
    CloseProject,
    /// "Start a similar project": go to contact and drop the selection.
    StartSimilarProject,

    SelectHeroSlide(usize),
    SelectPortfolioSlide(usize),

    SetPrompt(String),
    SubmitPrompt,

    ReloadCatalog,
}

/// Outcomes reported by the runtime's own tasks. Only those tasks construct
/// these, so a loading flag or a suggestion can never be set from outside.
#[derive(Debug, Clone)]
pub(crate) enum TaskCompletion {
    CatalogLoaded(CatalogPayload),
    CatalogFailed,
    SuggestionReceived(DesignSuggestion),
    SuggestionFailed,
    CheckoutResetElapsed,
    HeroTick,
    PortfolioHeroTick,
}

/// Work the runtime performs after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorefrontEffect {
    ScrollToOrigin,
    UpdateMetadata(&'static PageMetadata),
    FetchCatalog,
    RequestSuggestion(String),
    ScheduleCheckoutReset,
}

impl From<EntryAction> for StorefrontEffect {
    fn from(action: EntryAction) -> Self {
        match action {
            EntryAction::ScrollToOrigin => StorefrontEffect::ScrollToOrigin,
            EntryAction::UpdateMetadata(meta) => StorefrontEffect::UpdateMetadata(meta),
        }
    }
}

fn entry(actions: Vec<EntryAction>) -> Vec<StorefrontEffect> {
    actions.into_iter().map(StorefrontEffect::from).collect()
}

impl StorefrontState {
    /// Applies one transition. Synchronous and infallible; anything that has
    /// to wait comes back as an effect.
    pub fn apply(&mut self, action: StorefrontAction) -> Vec<StorefrontEffect> {
        debug!(?action, "storefront transition");
        match action {
            StorefrontAction::Navigate(view) => {
                if view == View::Contact {
                    self.selected_project = None;
                }
                entry(self.router.navigate(view))
            }
            StorefrontAction::SelectLegalSection(section) => {
                entry(self.router.select_legal_section(section))
            }

            StorefrontAction::SelectCategory(category) => {
                self.filters.selected_category = category;
                Vec::new()
            }
            StorefrontAction::SetSearchQuery(query) => {
                self.filters.search_query = query;
                Vec::new()
            }
            StorefrontAction::SelectPortfolioFilter(filter) => {
                self.filters.portfolio_filter = filter;
                Vec::new()
            }
            StorefrontAction::OpenSearch => {
                self.search_open = true;
                Vec::new()
            }
            StorefrontAction::CloseSearch => {
                self.search_open = false;
                Vec::new()
            }
            StorefrontAction::SubmitSearch => {
                self.search_open = false;
                entry(self.router.navigate(View::Products))
            }

            StorefrontAction::AddToCart(product) => {
                self.cart.add(&product);
                Vec::new()
            }
            StorefrontAction::RemoveFromCart(id) => {
                self.cart.remove(&id);
                Vec::new()
            }
            StorefrontAction::UpdateQuantity { id, delta } => {
                self.cart.update_quantity(&id, delta);
                Vec::new()
            }
            StorefrontAction::OpenCart => {
                self.cart.open();
                Vec::new()
            }
            StorefrontAction::CloseCart => {
                self.cart.close();
                Vec::new()
            }

            StorefrontAction::Checkout => {
                self.checkout.submit(&mut self.cart);
                vec![StorefrontEffect::ScheduleCheckoutReset]
            }

            StorefrontAction::OpenProject(item) => {
                self.selected_project = Some(item);
                Vec::new()
            }
            StorefrontAction::CloseProject => {
                self.selected_project = None;
                Vec::new()
            }
            StorefrontAction::StartSimilarProject => {
                self.selected_project = None;
                entry(self.router.navigate(View::Contact))
            }

            StorefrontAction::SelectHeroSlide(index) => {
                self.hero.select(index);
                Vec::new()
            }
            StorefrontAction::SelectPortfolioSlide(index) => {
                self.portfolio_hero.select(index);
                Vec::new()
            }

            StorefrontAction::SetPrompt(prompt) => {
                self.assistant.set_prompt(prompt);
                Vec::new()
            }
            StorefrontAction::SubmitPrompt => match self.assistant.begin_submit() {
                Some(prompt) => vec![StorefrontEffect::RequestSuggestion(prompt)],
                None => Vec::new(),
            },

            StorefrontAction::ReloadCatalog => {
                if self.catalog.is_loading() {
                    return Vec::new();
                }
                self.catalog.begin_fetch();
                vec![StorefrontEffect::FetchCatalog]
            }
        }
    }

    /// Applies the result of a runtime task. None of these ask for further
    /// work.
    pub(crate) fn complete(&mut self, completion: TaskCompletion) {
        debug!(?completion, "storefront task completed");
        match completion {
            TaskCompletion::CatalogLoaded(payload) => self.catalog.apply_loaded(payload),
            TaskCompletion::CatalogFailed => self.catalog.apply_failed(),
            TaskCompletion::SuggestionReceived(suggestion) => {
                self.assistant.complete_success(suggestion)
            }
            TaskCompletion::SuggestionFailed => self.assistant.complete_failure(),
            TaskCompletion::CheckoutResetElapsed => self.checkout.reset(&mut self.cart),
            TaskCompletion::HeroTick => {
                self.hero.advance();
            }
            TaskCompletion::PortfolioHeroTick => {
                self.portfolio_hero.advance();
            }
        }
    }
}
