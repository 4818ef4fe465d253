mod auto_scaling_group_client;
mod config;
mod ec2_instance_client;
mod error;
mod event;
#[cfg(test)]
mod fakes;
mod handler;
mod instance;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::{error, info};

use crate::auto_scaling_group_client::AutoScalingGroupClient;
use crate::config::HandlerConfig;
use crate::ec2_instance_client::Ec2InstanceClient;
use crate::event::{CustomResourceEvent, CustomResourceResponse};
use crate::handler::handle_event;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = HandlerConfig::from_env();
    info!(region = ?config.region, max_pages = config.max_pages, "starting asg-info");

    let groups = AutoScalingGroupClient::new(config.region.clone());
    let instances = Ec2InstanceClient::new(config.region.clone());

    run(service_fn(|event: LambdaEvent<CustomResourceEvent>| {
        custom_resource_handler(&groups, &instances, &config, event)
    }))
    .await
}

async fn custom_resource_handler(
    groups: &AutoScalingGroupClient,
    instances: &Ec2InstanceClient,
    config: &HandlerConfig,
    event: LambdaEvent<CustomResourceEvent>,
) -> Result<CustomResourceResponse, Error> {
    info!(request_id = %event.context.request_id, "received invocation");
    let payload = event.payload;

    let result = handle_event(groups, instances, config, &payload).await;
    if let Err(ref error) = result {
        error!(%error, "custom resource request failed");
    }
    Ok(CustomResourceResponse::new(&payload, result))
}
