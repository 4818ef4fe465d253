use async_trait::async_trait;
use rusoto_autoscaling::{Autoscaling, AutoscalingClient, AutoScalingGroupNamesType};
use rusoto_core::Region;
use tracing::{info, instrument};

use crate::error::AsgInfoError;
use crate::instance::{GroupMember, LifecycleState};

pub struct AutoScalingGroupClient {
    client: AutoscalingClient,
}

#[async_trait]
pub trait ResolveGroup {
    async fn resolve_members(&self, group_name: &str) -> Result<Vec<GroupMember>, AsgInfoError>;
}

#[async_trait]
impl ResolveGroup for AutoScalingGroupClient {
    #[instrument(skip(self))]
    async fn resolve_members(&self, group_name: &str) -> Result<Vec<GroupMember>, AsgInfoError> {
        let request = AutoScalingGroupNamesType {
            auto_scaling_group_names: Some(vec![group_name.to_string()]),
            ..AutoScalingGroupNamesType::default()
        };

        let result = self
            .client
            .describe_auto_scaling_groups(request)
            .await?;

        info!(groups = result.auto_scaling_groups.len(), "described Auto Scaling groups");

        let mut members = Vec::<GroupMember>::new();
        for group in result.auto_scaling_groups {
            for instance in group.instances.unwrap_or_default() {
                if instance.instance_id.is_empty() {
                    return Err(AsgInfoError::NoneValue);
                }
                members.push(GroupMember {
                    lifecycle_state: LifecycleState::from(instance.lifecycle_state.as_str()),
                    instance_id: instance.instance_id,
                })
            }
        }
        Ok(members)
    }
}

impl AutoScalingGroupClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(AutoscalingClient::new(region))
    }

    pub fn new_with_client(client: AutoscalingClient) -> Self {
        AutoScalingGroupClient { client }
    }
}
