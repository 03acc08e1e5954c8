use ecs_stability_gate::adapter::aws::{self, EcsStabilityWaiter, StsCredentialValidator};
use ecs_stability_gate::app;
use ecs_stability_gate::config::CheckRequest;
use ecs_stability_gate::github::{Inputs, Reporter};
use ecs_stability_gate::logging;

// The whole step is a linear pipeline with two cooperative suspension
// points (the identity check and each stability wait), so a single-threaded
// runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();

    let inputs = Inputs::from_env();
    let mut reporter = Reporter::from_env();

    logging::init(inputs.input("verbose").as_deref() == Some("true"));

    let outcome = match CheckRequest::from_inputs(&inputs) {
        Ok(request) => {
            let config = aws::sdk_config(&request.region).await;
            let validator = StsCredentialValidator;
            let waiter = EcsStabilityWaiter::new(&config);
            app::execute(&request, &validator, &waiter).await
        }
        Err(err) => app::config_outcome(err),
    };

    app::report(&outcome, &mut reporter);

    if reporter.failed() {
        std::process::exit(1);
    }
}
