use async_trait::async_trait;
use rusoto_core::Region;
use rusoto_ec2::{DescribeInstancesRequest, Ec2, Ec2Client};
use tracing::{debug, info, instrument};

use crate::error::AsgInfoError;
use crate::instance::{ComputeInstance, InstanceState};

pub struct Ec2InstanceClient {
    client: Ec2Client,
}

/// One `DescribeInstances` page, flattened across reservations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstancePage {
    pub instances: Vec<ComputeInstance>,
    pub next_token: Option<String>,
}

#[async_trait]
pub trait DescribeInstancePage {
    async fn describe_instance_page(
        &self,
        instance_ids: &[String],
        next_token: Option<String>,
    ) -> Result<InstancePage, AsgInfoError>;
}

#[async_trait]
impl DescribeInstancePage for Ec2InstanceClient {
    async fn describe_instance_page(
        &self,
        instance_ids: &[String],
        next_token: Option<String>,
    ) -> Result<InstancePage, AsgInfoError> {
        let request = DescribeInstancesRequest {
            instance_ids: Some(instance_ids.to_vec()),
            next_token,
            ..DescribeInstancesRequest::default()
        };

        let result = self
            .client
            .describe_instances(request)
            .await?;

        let mut instances = Vec::<ComputeInstance>::new();
        for reservation in result.reservations.unwrap_or_default() {
            for instance in reservation.instances.unwrap_or_default() {
                instances.push(ComputeInstance {
                    instance_id: instance.instance_id.ok_or(AsgInfoError::NoneValue)?,
                    state: instance
                        .state
                        .and_then(|state| state.name)
                        .map(|name| InstanceState::from(name.as_str())),
                    public_ip_address: instance.public_ip_address,
                })
            }
        }
        Ok(InstancePage {
            instances,
            next_token: result.next_token,
        })
    }
}

impl Ec2InstanceClient {
    pub fn new(region: Region) -> Self {
        Self::new_with_client(Ec2Client::new(region))
    }

    pub fn new_with_client(client: Ec2Client) -> Self {
        Ec2InstanceClient { client }
    }
}

/// Collects every instance across all pages, or nothing at all if any page fails.
///
/// An empty id list returns immediately: EC2 reads an empty `InstanceIds`
/// filter as every instance in the region.
#[instrument(skip(client))]
pub async fn enumerate_instances<C>(
    client: &C,
    instance_ids: &[String],
    max_pages: usize,
) -> Result<Vec<ComputeInstance>, AsgInfoError>
where
    C: DescribeInstancePage + Sync,
{
    if instance_ids.is_empty() {
        debug!("no instance ids to describe");
        return Ok(Vec::new());
    }

    let mut instances = Vec::<ComputeInstance>::new();
    let mut next_token: Option<String> = None;
    let mut pages = 0;
    loop {
        let page = client
            .describe_instance_page(instance_ids, next_token.take())
            .await?;
        pages += 1;
        debug!(page = pages, instances = page.instances.len(), "described instance page");
        instances.extend(page.instances);

        match page.next_token {
            None => break,
            Some(_) if pages >= max_pages => {
                return Err(AsgInfoError::PaginationLimitExceeded(max_pages))
            }
            token => next_token = token,
        }
    }
    info!(pages, instances = instances.len(), "described instances");
    Ok(instances)
}
