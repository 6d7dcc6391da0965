// order_flow/src/flow/execution.rs

//! `Flow::run()`: drives the steps of a flow against one context.

use crate::core::context_data::FlowContext;
use crate::core::control::{FlowOutcome, StepControl};
use crate::core::step::{StepHandler, StepSpec};
use crate::error::FlowError;
use crate::flow::definition::Flow;
use tracing::{debug_span, event, info_span, instrument, Instrument, Level};

#[derive(Debug, Clone, Copy)]
enum Phase {
  Before,
  On,
  After,
}

impl Phase {
  fn as_str(self) -> &'static str {
    match self {
      Phase::Before => "before",
      Phase::On => "on",
      Phase::After => "after",
    }
  }
}

impl<TData, Err> Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Runs every step in order against `ctx`.
  ///
  /// A required step's error is returned as is. An optional step's error is
  /// logged and the run moves on to the next step.
  #[instrument(
    name = "Flow::run",
    skip_all,
    fields(flow = %self.name, num_steps = self.steps.len()),
    err(Display)
  )]
  pub async fn run(&self, ctx: FlowContext<TData>) -> Result<FlowOutcome, Err> {
    event!(Level::DEBUG, "Flow execution starting.");

    for (step_index, step) in self.steps.iter().enumerate() {
      let step_span = info_span!(
        "flow_step",
        step_name = %step.name,
        step_index,
        optional = step.optional
      );

      match self.run_step(step, &ctx).instrument(step_span).await {
        Ok(StepControl::Continue) => {}
        Ok(StepControl::Stop) => {
          event!(Level::INFO, step_name = %step.name, "Flow stopped by a handler.");
          return Ok(FlowOutcome::Stopped);
        }
        Err(e) if step.optional => {
          event!(Level::WARN, step_name = %step.name, error = %e, "Optional step failed, continuing.");
        }
        Err(e) => return Err(e),
      }
    }

    event!(Level::DEBUG, "Flow execution completed.");
    Ok(FlowOutcome::Completed)
  }

  async fn run_step(&self, step: &StepSpec, ctx: &FlowContext<TData>) -> Result<StepControl, Err> {
    let phases = [
      (Phase::Before, self.before.get(&step.name)),
      (Phase::On, self.on.get(&step.name)),
      (Phase::After, self.after.get(&step.name)),
    ];

    let has_handlers = phases.iter().any(|(_, handlers)| handlers.is_some_and(|h| !h.is_empty()));
    if !has_handlers {
      if step.optional {
        event!(Level::DEBUG, "Optional step has no handlers, skipping.");
        return Ok(StepControl::Continue);
      }
      event!(Level::ERROR, "Required step has no handlers.");
      return Err(Err::from(FlowError::HandlerMissing {
        step_name: step.name.clone(),
      }));
    }

    for (phase, handlers) in phases {
      let Some(handlers) = handlers else { continue };
      if run_phase(phase, handlers, ctx).await? == StepControl::Stop {
        return Ok(StepControl::Stop);
      }
    }

    event!(Level::DEBUG, "Step finished.");
    Ok(StepControl::Continue)
  }
}

async fn run_phase<TData, Err>(
  phase: Phase,
  handlers: &[StepHandler<TData, Err>],
  ctx: &FlowContext<TData>,
) -> Result<StepControl, Err>
where
  TData: 'static + Send + Sync,
  Err: std::fmt::Display,
{
  for (handler_index, handler) in handlers.iter().enumerate() {
    let handler_span = debug_span!("step_handler", phase = phase.as_str(), handler_index);
    match handler(ctx.clone()).instrument(handler_span).await {
      Ok(StepControl::Continue) => {}
      Ok(StepControl::Stop) => {
        event!(Level::DEBUG, phase = phase.as_str(), "Handler requested stop.");
        return Ok(StepControl::Stop);
      }
      Err(e) => {
        event!(Level::DEBUG, phase = phase.as_str(), error = %e, "Handler failed.");
        return Err(e);
      }
    }
  }
  Ok(StepControl::Continue)
}
