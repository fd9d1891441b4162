//! Tollgate dry-run CLI — exercise the dispatch engine from a shell.
//!
//! Takes utterances from argv (one plan per argument) or stdin (one per
//! line) and prints each resulting plan as a JSON line. No request is
//! performed and nothing is charged.

use std::io::{self, BufRead};

use tracing_subscriber::EnvFilter;

use tg_catalog::PricingTier;
use tg_dispatch::Dispatcher;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tier = match std::env::var("TOLLGATE_TIER") {
        Ok(raw) => raw
            .parse::<PricingTier>()
            .map_err(|e| anyhow::anyhow!("TOLLGATE_TIER: {e}"))?,
        Err(_) => PricingTier::Local,
    };
    tracing::info!(%tier, "tollgate dry-run starting");

    let dispatcher = Dispatcher::builtin(tier);

    let utterances: Vec<String> = std::env::args().skip(1).collect();
    if utterances.is_empty() {
        for line in io::stdin().lock().lines() {
            print_plan(&dispatcher, &line?);
        }
    } else {
        for utterance in &utterances {
            print_plan(&dispatcher, utterance);
        }
    }

    Ok(())
}

fn print_plan(dispatcher: &Dispatcher, text: &str) {
    match dispatcher.dispatch(text) {
        Some(plan) => {
            println!("{}", serde_json::json!({ "input": text, "plan": plan }));
        }
        None => {
            println!("{}", serde_json::json!({ "input": text, "plan": null }));
        }
    }
}
