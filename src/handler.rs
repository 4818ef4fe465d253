use std::convert::TryFrom;

use tracing::{info, warn};

use crate::auto_scaling_group_client::ResolveGroup;
use crate::config::HandlerConfig;
use crate::ec2_instance_client::{enumerate_instances, DescribeInstancePage};
use crate::error::AsgInfoError;
use crate::event::{CustomResourceEvent, RequestType, ResultEnvelope};
use crate::instance::{active_member_ids, project_running};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cleanup {
    Skip,
    RemoveResources,
}

/// Applied to Update and to request types CloudFormation may add later.
pub const FALLBACK_CLEANUP: Cleanup = Cleanup::RemoveResources;

impl RequestType {
    pub fn cleanup(&self) -> Cleanup {
        match self {
            RequestType::Create => Cleanup::Skip,
            RequestType::Delete => Cleanup::RemoveResources,
            RequestType::Update | RequestType::Unknown => FALLBACK_CLEANUP,
        }
    }
}

pub async fn handle_event<G, E>(
    groups: &G,
    instances: &E,
    config: &HandlerConfig,
    event: &CustomResourceEvent,
) -> Result<ResultEnvelope, AsgInfoError>
where
    G: ResolveGroup + Sync,
    E: DescribeInstancePage + Sync,
{
    info!(?event, "handling custom resource event");
    let group_name = event.group_name()?;

    let members = groups.resolve_members(group_name).await?;
    let instance_ids = active_member_ids(&members);
    info!(
        group_name,
        members = members.len(),
        active = instance_ids.len(),
        "resolved group members"
    );

    let described = enumerate_instances(instances, &instance_ids, config.max_pages).await?;
    let addresses = project_running(&described);
    info!(
        described = described.len(),
        running = addresses.len(),
        "resolved running instances"
    );
    if addresses.is_empty() {
        warn!(group_name, "no running instances in group");
    }

    let envelope = ResultEnvelope::try_from(addresses)?;

    match event.request_type.cleanup() {
        Cleanup::Skip => {}
        Cleanup::RemoveResources => remove_resources(event)?,
    }

    info!(
        physical_resource_id = %envelope.physical_resource_id,
        data = ?envelope.data,
        "returning custom resource data"
    );
    Ok(envelope)
}

/// Nothing is created on behalf of the stack, so there is nothing to tear down.
pub fn remove_resources(event: &CustomResourceEvent) -> Result<(), AsgInfoError> {
    info!(
        request_type = ?event.request_type,
        physical_resource_id = ?event.physical_resource_id,
        "removing resources"
    );
    Ok(())
}
