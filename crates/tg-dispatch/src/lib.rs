//! Dispatch composition — catalog and rules behind one front door.
//!
//! `Dispatcher` owns the immutable capability catalog and the ordered rule
//! list and turns an utterance into a [`DispatchPlan`]: which capability,
//! at which path and verb, for what price, with which parameters. It does
//! not perform the call or the payment; that is the caller's job.

use tg_catalog::{Catalog, PricingTier};
use tg_intent::swap::normalize_swap_params;
use tg_intent::RuleSet;
use tg_protocol::{DispatchPlan, ParamMap};

/// The capability that takes wire-normalized swap parameters.
const SWAP_CAPABILITY_ID: &str = "jupiter-swap-order";

/// Immutable dispatch engine; freely shared across threads.
pub struct Dispatcher {
    catalog: Catalog,
    rules: RuleSet,
}

impl Dispatcher {
    pub fn new(catalog: Catalog, rules: RuleSet) -> Self {
        Self { catalog, rules }
    }

    /// Production catalog and rules at the given pricing tier.
    pub fn builtin(tier: PricingTier) -> Self {
        Self::new(Catalog::builtin(tier), RuleSet::builtin())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Route an utterance to a plan. `None` means no rule matched — the
    /// normal outcome for casual conversation.
    pub fn dispatch(&self, text: &str) -> Option<DispatchPlan> {
        let intent = self.rules.match_text(&self.catalog, text)?;
        self.plan(&intent.capability_id, intent.params)
    }

    /// Build a plan for an explicitly chosen capability, e.g. one selected
    /// by an LLM from the selection list. The id may be an alias; unknown
    /// ids yield `None`.
    ///
    /// For the swap capability, raw parameters are fed through the wire
    /// normalizer. A normalization failure keeps the selection and the raw
    /// parameters but surfaces no wire parameters; the caller decides
    /// whether to re-prompt or abort.
    pub fn plan(&self, capability_id: &str, params: Option<ParamMap>) -> Option<DispatchPlan> {
        let id = self.catalog.resolve_alias(capability_id);
        let cap = self.catalog.lookup(id)?;

        let swap_params = if cap.id == SWAP_CAPABILITY_ID {
            params
                .as_ref()
                .and_then(|raw| match normalize_swap_params(raw) {
                    Ok(wire) => Some(wire),
                    Err(err) => {
                        tracing::warn!(%err, "swap params did not normalize; selection stands");
                        None
                    }
                })
        } else {
            None
        };

        Some(DispatchPlan {
            capability_id: cap.id.clone(),
            path: cap.path.clone(),
            verb: cap.verb,
            partner_path: cap.partner_path.clone(),
            price: cap.price,
            display_price: cap.display_price,
            params,
            swap_params,
        })
    }
}
