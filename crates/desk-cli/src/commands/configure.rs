use desk_api::BackendPlanner;
use desk_config::{ConfiguratorConfig, PlannerKind};
use desk_core::entities::{Configuration, Recommendation};
use desk_core::enums::{Purpose, Style};
use desk_core::responses::{PurchasePlan, ReviewSummary};
use desk_configurator::{
    CancelHandle, FixedDelayPlanner, GenerationError, Planner, PurchaseGate, Review, ReviewError,
    SwapOutcome, Wizard, cancel_pair, proceed_to_purchase,
};
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ConfigureArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ConfigureResponse {
    review: ReviewSummary,
    swaps: Vec<SwapReport>,
    /// Catalog picks from the backend planner.
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendation: Option<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purchase: Option<PurchasePlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purchase_blocked: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct SwapReport {
    id: String,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    replacement: Option<String>,
}

impl SwapReport {
    fn new(requested: &str, outcome: SwapOutcome) -> Self {
        let (outcome, replacement) = match outcome {
            SwapOutcome::Swapped { replacement, .. } => ("swapped", Some(replacement)),
            SwapOutcome::AlreadyCompatible => ("already_compatible", None),
            SwapOutcome::NoSubstitute => ("no_substitute", None),
            SwapOutcome::UnknownId => ("unknown_id", None),
        };
        Self {
            id: requested.to_string(),
            outcome,
            replacement,
        }
    }
}

/// Handle `deskhub configure`.
pub async fn handle(
    args: &ConfigureArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut wizard = fill_wizard(args)?;
    let settings = &ctx.config.configurator;
    let progress = Progress::spinner("Generating your setup");

    let (configuration, recommendation) = match settings.planner {
        PlannerKind::Fixed => {
            let planner = FixedDelayPlanner::new(settings.generation_delay());
            (run_planner(&mut wizard, &planner, settings, &progress).await?, None)
        }
        PlannerKind::Backend => {
            progress.set_message("Asking DeskHub for recommendations");
            let planner = BackendPlanner::new(ctx.client.clone());
            let configuration = run_planner(&mut wizard, &planner, settings, &progress).await?;
            (configuration, planner.take_recommendation())
        }
    };

    let gate = PurchaseGate::new(settings.purchase_min_score);
    let mut response = review(configuration, args, gate);
    response.recommendation = recommendation;
    output(&response, flags.format)
}

/// Cancels generation on Ctrl-C until dropped.
struct CtrlCListener(JoinHandle<()>);

impl CtrlCListener {
    fn spawn(cancel: CancelHandle) -> Self {
        Self(tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }))
    }
}

impl Drop for CtrlCListener {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Generate with `planner`, cancelling on Ctrl-C.
async fn run_planner<P: Planner>(
    wizard: &mut Wizard,
    planner: &P,
    settings: &ConfiguratorConfig,
    progress: &Progress,
) -> anyhow::Result<Configuration> {
    let (cancel, token) = cancel_pair();
    let _listener = CtrlCListener::spawn(cancel);

    match wizard
        .generate(planner, token, settings.generation_timeout())
        .await?
    {
        Ok(configuration) => {
            progress.finish_ok("Setup generated");
            Ok(configuration)
        }
        Err(error) => {
            progress.finish_err("Generation stopped");
            Err(generation_failure(error))
        }
    }
}

/// Apply the command-line answers to a fresh wizard and walk it to the style step.
fn fill_wizard(args: &ConfigureArgs) -> anyhow::Result<Wizard> {
    let mut wizard = Wizard::new();
    if let Some(width) = &args.width {
        wizard.enter_space_width(width);
    }
    if let Some(depth) = &args.depth {
        wizard.enter_space_depth(depth);
    }
    if let Some(budget) = &args.budget {
        wizard.enter_budget(budget);
    }
    wizard.next()?;

    if let Some(purpose) = &args.purpose {
        wizard.set_purpose(parse_enum::<Purpose>(purpose, "purpose")?);
    }
    wizard.next()?;

    if let Some(style) = &args.style {
        wizard.set_style(parse_enum::<Style>(style, "style")?);
    }
    Ok(wizard)
}

fn generation_failure(error: GenerationError) -> anyhow::Error {
    match error {
        GenerationError::Cancelled => anyhow::anyhow!("configuration cancelled"),
        other => anyhow::Error::new(other).context("failed to generate a setup"),
    }
}

fn review(configuration: Configuration, args: &ConfigureArgs, gate: PurchaseGate) -> ConfigureResponse {
    let mut review = Review::new(configuration);

    let mut swaps: Vec<SwapReport> = args
        .swap
        .iter()
        .map(|id| SwapReport::new(id, review.swap(id)))
        .collect();
    if args.swap_all {
        swaps.extend(
            review
                .swap_all()
                .into_iter()
                .map(|(id, outcome)| SwapReport::new(&id, outcome)),
        );
    }

    let summary = review.summary(gate);
    let (purchase, purchase_blocked) = if args.purchase {
        match proceed_to_purchase(review.products(), gate) {
            Ok(plan) => (Some(plan), None),
            Err(error @ ReviewError::PurchaseBlocked { .. }) => {
                tracing::warn!(%error, "purchase blocked");
                (None, Some(error.to_string()))
            }
        }
    } else {
        (None, None)
    };

    ConfigureResponse {
        review: summary,
        swaps,
        recommendation: None,
        purchase,
        purchase_blocked,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use desk_config::ConfiguratorConfig;
    use desk_configurator::{FixedDelayPlanner, PurchaseGate, SwapOutcome, Wizard, cancel_pair};
    use pretty_assertions::assert_eq;

    use super::{CtrlCListener, SwapReport, fill_wizard, review, run_planner};
    use crate::cli::root_commands::ConfigureArgs;
    use crate::progress::Progress;

    fn args() -> ConfigureArgs {
        ConfigureArgs {
            width: None,
            depth: None,
            budget: None,
            purpose: None,
            style: None,
            swap: Vec::new(),
            swap_all: false,
            purchase: false,
        }
    }

    #[test]
    fn swap_report_names_outcome() {
        let report = SwapReport::new(
            "2",
            SwapOutcome::Swapped {
                id: "2".into(),
                replacement: "IKEA MARKUS Office Chair".into(),
            },
        );
        assert_eq!(report.outcome, "swapped");
        assert_eq!(report.replacement.as_deref(), Some("IKEA MARKUS Office Chair"));
        assert_eq!(SwapReport::new("9", SwapOutcome::UnknownId).outcome, "unknown_id");
    }

    #[test]
    fn wizard_takes_coerced_answers() {
        let mut args = args();
        args.width = Some("140".into());
        args.budget = Some("abc".into());
        args.style = Some("warm".into());
        let wizard = fill_wizard(&args).expect("wizard should fill");
        assert_eq!(wizard.draft().space_width, 140.0);
        assert_eq!(wizard.draft().budget, 0.0);
        assert_eq!(wizard.draft().style, desk_core::enums::Style::Warm);
        assert_eq!(wizard.step(), desk_core::enums::WizardStep::Style);
    }

    #[test]
    fn bad_purpose_is_rejected() {
        let mut args = args();
        args.purpose = Some("sleeping".into());
        assert!(fill_wizard(&args).is_err());
    }

    #[test]
    fn default_budget_blocks_purchase() {
        let mut args = args();
        args.purchase = true;
        let wizard = fill_wizard(&args).expect("wizard should fill");
        let response = review(*wizard.draft(), &args, PurchaseGate::default());
        assert_eq!(response.review.score, 83);
        assert!(response.purchase.is_none());
        assert!(response.purchase_blocked.is_some());
    }

    #[test]
    fn swap_all_unlocks_purchase() {
        let mut args = args();
        args.swap_all = true;
        args.purchase = true;
        let wizard = fill_wizard(&args).expect("wizard should fill");
        let response = review(*wizard.draft(), &args, PurchaseGate::default());
        assert_eq!(response.review.score, 100);
        assert_eq!(response.swaps.len(), 1);
        assert_eq!(response.swaps[0].id, "2");
        let plan = response.purchase.expect("purchase should be allowed");
        assert_eq!(plan.item_count, 6);
    }

    #[tokio::test]
    async fn ctrl_c_listener_stops_when_dropped() {
        let (cancel, _token) = cancel_pair();
        let listener = CtrlCListener::spawn(cancel);
        let task = listener.0.abort_handle();
        drop(listener);
        for _ in 0..50 {
            if task.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(task.is_finished());
    }

    #[tokio::test]
    async fn wizard_misuse_is_reported_after_listener_cleanup() {
        let mut wizard = Wizard::new();
        let settings = ConfiguratorConfig::default();
        let planner = FixedDelayPlanner::new(Duration::ZERO);
        let err = run_planner(&mut wizard, &planner, &settings, &Progress::spinner("test"))
            .await
            .expect_err("wizard is not on the style step");
        assert!(err.to_string().contains("generate"));
    }

    #[tokio::test]
    async fn fixed_planner_completes_the_wizard() {
        let mut wizard = fill_wizard(&args()).expect("wizard should fill");
        let settings = ConfiguratorConfig::default();
        let planner = FixedDelayPlanner::new(Duration::from_millis(1));
        let configuration = run_planner(&mut wizard, &planner, &settings, &Progress::spinner("test"))
            .await
            .expect("generation should finish");
        assert_eq!(configuration.budget, 5000.0);
        assert!(wizard.is_complete());
    }
}
