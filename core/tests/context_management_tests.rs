// tests/context_management_tests.rs
mod common;

use common::*;
use order_flow::{Flow, FlowContext, StepControl};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn test_context_is_shared_between_steps() {
  setup_tracing();
  let mut flow = Flow::<TestContext, TestError>::new("sharing", &[("write_step", false), ("read_step", false)]);

  flow.on_step("write_step", |ctx: FlowContext<TestContext>| async move {
    let mut guard = ctx.write();
    guard.counter = 10;
    guard.message = "SetByWriter".to_string();
    Ok::<_, TestError>(StepControl::Continue)
  });

  flow.on_step("read_step", |ctx: FlowContext<TestContext>| async move {
    let mut guard = ctx.write();
    assert_eq!(guard.counter, 10);
    assert_eq!(guard.message, "SetByWriter");
    guard.counter += 5;
    guard.message.push_str("_ThenReader");
    Ok::<_, TestError>(StepControl::Continue)
  });

  let ctx = FlowContext::new(TestContext::default());
  flow.run(ctx.clone()).await.unwrap();

  let guard = ctx.read();
  assert_eq!(guard.counter, 15);
  assert_eq!(guard.message, "SetByWriter_ThenReader");
}

#[tokio::test]
#[serial]
async fn test_context_clone_shares_data() {
  setup_tracing();
  let original = FlowContext::new(TestContext {
    counter: 1,
    ..Default::default()
  });
  let cloned = original.clone();

  original.write().counter = 5;
  assert_eq!(cloned.read().counter, 5);

  cloned.write().counter = 10;
  assert_eq!(original.read().counter, 10);
}

// Guards are scoped so none is alive at the await point.
#[tokio::test]
#[serial]
async fn test_context_locks_around_await() {
  setup_tracing();
  let ctx = FlowContext::new(TestContext::default());

  let handler_logic = async {
    let initial_count = ctx.read().counter;

    tokio::time::sleep(std::time::Duration::from_millis(1)).await;

    ctx.write().counter = initial_count + 1;
  };

  handler_logic.await;
  assert_eq!(ctx.read().counter, 1);
}
