//! Generate Questions use case
//!
//! Fans out N generation requests for one category, fans the outcomes back in
//! in submission order, then fans out one delivery per generated question.
//! Every task ends in a terminal outcome value; nothing a single task does can
//! cancel, block or fail its siblings.

use crate::config::PipelineParams;
use crate::ports::outcome_logger::{NoOutcomeLogger, OutcomeLogger, Severity};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::question_generator::QuestionGenerator;
use crate::ports::question_store::QuestionStore;
use chrono::Utc;
use futures::FutureExt;
use std::collections::BTreeMap;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use trivia_domain::{
    Category, DeliveryOutcome, DeliveryRecord, GenerationOutcome, GenerationRequest, Phase,
    PipelineReport, Question,
};

/// Input for the GenerateQuestions use case
#[derive(Debug, Clone)]
pub struct GenerateQuestionsInput {
    /// Category every request asks for
    pub category: Category,
    /// Number of generation requests to issue
    pub count: usize,
}

impl GenerateQuestionsInput {
    pub fn new(category: Category, count: usize) -> Self {
        Self { category, count }
    }
}

/// Use case for running the generation-and-delivery pipeline
pub struct GenerateQuestionsUseCase<G: QuestionGenerator + 'static, S: QuestionStore + 'static> {
    generator: Arc<G>,
    store: Arc<S>,
    logger: Arc<dyn OutcomeLogger>,
    params: PipelineParams,
}

impl<G: QuestionGenerator + 'static, S: QuestionStore + 'static> GenerateQuestionsUseCase<G, S> {
    pub fn new(generator: Arc<G>, store: Arc<S>) -> Self {
        Self {
            generator,
            store,
            logger: Arc::new(NoOutcomeLogger),
            params: PipelineParams::default(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn OutcomeLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_params(mut self, params: PipelineParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: GenerateQuestionsInput) -> PipelineReport {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Returns once every generation and delivery task is terminal.
    pub async fn execute_with_progress(
        &self,
        input: GenerateQuestionsInput,
        progress: &dyn ProgressNotifier,
    ) -> PipelineReport {
        let started_at = Utc::now();

        info!(
            "Starting generation of {} question(s) for category '{}'",
            input.count, input.category
        );
        self.logger.record(
            Severity::Info,
            &format!(
                "Starting generation of {} question(s) for category '{}'",
                input.count, input.category
            ),
        );

        // Shared by both phases; they never overlap.
        let limiter = self
            .params
            .max_concurrency
            .map(|max| Arc::new(Semaphore::new(max.get())));

        let generation = self
            .phase_generation(&input, limiter.clone(), progress)
            .await;
        let deliveries = self.phase_delivery(&generation, limiter, progress).await;

        let report = PipelineReport {
            category: input.category,
            generation,
            deliveries,
            started_at,
            finished_at: Utc::now(),
        };

        info!(
            "Run finished: {}/{} generated, {}/{} delivered",
            report.generated(),
            report.requested(),
            report.delivered(),
            report.deliveries.len()
        );
        self.logger.record(
            Severity::Info,
            &format!(
                "Finished run for category '{}': {}/{} generated, {}/{} delivered",
                report.category,
                report.generated(),
                report.requested(),
                report.delivered(),
                report.deliveries.len()
            ),
        );

        report
    }

    /// Phase 1: Fetch all questions in parallel
    async fn phase_generation(
        &self,
        input: &GenerateQuestionsInput,
        limiter: Option<Arc<Semaphore>>,
        progress: &dyn ProgressNotifier,
    ) -> Vec<GenerationOutcome> {
        let requests = GenerationRequest::batch(&input.category, input.count);
        if requests.is_empty() {
            debug!("Nothing to generate");
            return Vec::new();
        }

        progress.on_phase_start(Phase::Generation, requests.len());

        let mut join_set = JoinSet::new();

        for request in requests {
            let generator = Arc::clone(&self.generator);
            let limiter = limiter.clone();

            join_set.spawn(async move {
                let _permit = acquire(limiter).await;
                let outcome = guarded(generator.fetch(&request))
                    .await
                    .unwrap_or_else(GenerationOutcome::Aborted);
                (request.sequence_index, outcome)
            });
        }

        // Fan-in by index, not by completion order.
        let mut slots: Vec<Option<GenerationOutcome>> = vec![None; input.count];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, outcome)) => {
                    self.record_generation(index, &input.category, &outcome);
                    progress.on_task_complete(Phase::Generation, index, outcome.is_success());
                    slots[index] = Some(outcome);
                }
                Err(e) => {
                    warn!("Generation task join error: {}", e);
                }
            }
        }

        progress.on_phase_complete(Phase::Generation);

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    let outcome =
                        GenerationOutcome::Aborted("task did not report an outcome".to_string());
                    self.record_generation(index, &input.category, &outcome);
                    outcome
                })
            })
            .collect()
    }

    /// Phase 2: Deliver every generated question in parallel
    async fn phase_delivery(
        &self,
        generation: &[GenerationOutcome],
        limiter: Option<Arc<Semaphore>>,
        progress: &dyn ProgressNotifier,
    ) -> Vec<DeliveryRecord> {
        let pending: Vec<(usize, Question)> = generation
            .iter()
            .enumerate()
            .filter_map(|(index, outcome)| outcome.question().map(|q| (index, q.clone())))
            .collect();

        if pending.is_empty() {
            debug!("No generated questions to deliver");
            return Vec::new();
        }

        progress.on_phase_start(Phase::Delivery, pending.len());

        let mut slots: BTreeMap<usize, Option<DeliveryOutcome>> =
            pending.iter().map(|(index, _)| (*index, None)).collect();

        let mut join_set = JoinSet::new();

        for (index, question) in pending {
            let store = Arc::clone(&self.store);
            let limiter = limiter.clone();

            join_set.spawn(async move {
                let _permit = acquire(limiter).await;
                let outcome = guarded(store.deliver(&question))
                    .await
                    .unwrap_or_else(DeliveryOutcome::Aborted);
                (index, question, outcome)
            });
        }

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, question, outcome)) => {
                    self.record_delivery(index, &question, &outcome);
                    progress.on_task_complete(Phase::Delivery, index, outcome.is_accepted());
                    slots.insert(index, Some(outcome));
                }
                Err(e) => {
                    warn!("Delivery task join error: {}", e);
                }
            }
        }

        progress.on_phase_complete(Phase::Delivery);

        slots
            .into_iter()
            .map(|(index, slot)| {
                let outcome = slot.unwrap_or_else(|| {
                    let outcome =
                        DeliveryOutcome::Aborted("task did not report an outcome".to_string());
                    if let Some(question) = generation[index].question() {
                        self.record_delivery(index, question, &outcome);
                    }
                    outcome
                });
                DeliveryRecord::new(index, outcome)
            })
            .collect()
    }

    fn record_generation(&self, index: usize, category: &Category, outcome: &GenerationOutcome) {
        match outcome {
            GenerationOutcome::Success(question) => {
                debug!("Question {} generated", index);
                self.logger.record(
                    Severity::Info,
                    &format!(
                        "Generated question {} for category '{}': {}",
                        index, category, question
                    ),
                );
            }
            failure => {
                warn!(kind = failure.kind(), "Question {} generation failed: {}", index, failure);
                let severity = match failure {
                    GenerationOutcome::Timeout => Severity::Warning,
                    _ => Severity::Error,
                };
                self.logger.record(
                    severity,
                    &format!(
                        "Question {} generation failed for category '{}': {}",
                        index, category, failure
                    ),
                );
            }
        }
    }

    fn record_delivery(&self, index: usize, question: &Question, outcome: &DeliveryOutcome) {
        if outcome.is_accepted() {
            debug!("Question {} delivered", index);
            self.logger.record(
                Severity::Info,
                &format!("Question {} delivered to storage: {}", index, question),
            );
        } else {
            warn!(kind = outcome.kind(), "Question {} delivery failed: {}", index, outcome);
            self.logger.record(
                Severity::Error,
                &format!(
                    "Question {} delivery failed ({}): {}",
                    index, outcome, question
                ),
            );
        }
    }
}

/// Wait for a slot when the fan-out is bounded
async fn acquire(limiter: Option<Arc<Semaphore>>) -> Option<OwnedSemaphorePermit> {
    match limiter {
        // The semaphore is never closed, so acquisition only fails if that changes.
        Some(limiter) => limiter.acquire_owned().await.ok(),
        None => None,
    }
}

/// Run a task body, turning a panic into a description of it
async fn guarded<T>(task: impl Future<Output = T>) -> Result<T, String> {
    AssertUnwindSafe(task).catch_unwind().await.map_err(|payload| {
        if let Some(message) = payload.downcast_ref::<&str>() {
            format!("task panicked: {}", message)
        } else if let Some(message) = payload.downcast_ref::<String>() {
            format!("task panicked: {}", message)
        } else {
            "task panicked".to_string()
        }
    })
}
