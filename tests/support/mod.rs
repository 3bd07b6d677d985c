// ABOUTME: Test support utilities.
// ABOUTME: Fixed clock, predictable IDs, and task/failure fixtures shared across test binaries.

use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use steward::deploy::{Deployment, ManualClock, SequentialIds};
use steward::types::{Failure, Task};

#[allow(dead_code)]
pub const TASK_DEFINITION: &str = "arn:aws:ecs:us-east-1:12345678912:task-definition/web:1";
#[allow(dead_code)]
pub const TASK_ARN: &str =
    "arn:aws:ecs:us-east-1:12345678912:task/c024d145-093b-499a-9b14-5baf273f5835";
#[allow(dead_code)]
pub const INSTANCE_ARN: &str =
    "arn:aws:us-east-1:123456789123:container-instance/4b6d45ea-a4b4-4269-9d04-3af6ddfdc597";
#[allow(dead_code)]
pub const DESIRED_TASK_COUNT: u64 = 5;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("steward=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

#[allow(dead_code)]
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn clock() -> ManualClock {
    ManualClock::new(start_time())
}

/// A pending deployment with ID `dep-1`, started at [`start_time`].
#[allow(dead_code)]
pub fn deployment(clock: &ManualClock) -> Deployment {
    init_tracing();
    Deployment::new(TASK_DEFINITION, &SequentialIds::new("dep"), clock)
        .expect("fixture deployment should be valid")
}

#[allow(dead_code)]
pub fn task_a() -> Task {
    Task::new(TASK_ARN, TASK_DEFINITION)
}

#[allow(dead_code)]
pub fn failure_x() -> Failure {
    Failure::new(INSTANCE_ARN).with_reason("RESOURCE:MEMORY")
}
