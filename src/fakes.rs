//! Recording stand-ins for the Auto Scaling and EC2 clients.

use std::sync::Mutex;

use async_trait::async_trait;
use rusoto_core::RusotoError;

use crate::auto_scaling_group_client::ResolveGroup;
use crate::ec2_instance_client::{DescribeInstancePage, InstancePage};
use crate::error::AsgInfoError;
use crate::instance::GroupMember;

#[derive(Default)]
pub struct FakeGroups {
    members: Vec<GroupMember>,
    fail: bool,
    requested_groups: Mutex<Vec<String>>,
}

impl FakeGroups {
    pub fn with_members(members: Vec<GroupMember>) -> Self {
        FakeGroups {
            members,
            ..FakeGroups::default()
        }
    }

    pub fn failing() -> Self {
        FakeGroups {
            fail: true,
            ..FakeGroups::default()
        }
    }

    pub fn requested_groups(&self) -> Vec<String> {
        self.requested_groups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResolveGroup for FakeGroups {
    async fn resolve_members(&self, group_name: &str) -> Result<Vec<GroupMember>, AsgInfoError> {
        self.requested_groups
            .lock()
            .unwrap()
            .push(group_name.to_string());
        if self.fail {
            return Err(AsgInfoError::DescribeGroupsError(RusotoError::Validation(
                "error".to_string(),
            )));
        }
        Ok(self.members.clone())
    }
}

#[derive(Default)]
pub struct FakeInstances {
    pages: Vec<InstancePage>,
    failing_page: Option<usize>,
    requested_ids: Mutex<Vec<Vec<String>>>,
    requested_tokens: Mutex<Vec<Option<String>>>,
}

impl FakeInstances {
    pub fn with_pages(pages: Vec<InstancePage>) -> Self {
        FakeInstances {
            pages,
            ..FakeInstances::default()
        }
    }

    pub fn failing_on_page(mut self, page: usize) -> Self {
        self.failing_page = Some(page);
        self
    }

    pub fn requested_ids(&self) -> Vec<Vec<String>> {
        self.requested_ids.lock().unwrap().clone()
    }

    pub fn requested_tokens(&self) -> Vec<Option<String>> {
        self.requested_tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl DescribeInstancePage for FakeInstances {
    async fn describe_instance_page(
        &self,
        instance_ids: &[String],
        next_token: Option<String>,
    ) -> Result<InstancePage, AsgInfoError> {
        self.requested_ids.lock().unwrap().push(instance_ids.to_vec());
        let page = {
            let mut tokens = self.requested_tokens.lock().unwrap();
            tokens.push(next_token);
            tokens.len() - 1
        };
        if self.failing_page == Some(page) {
            return Err(AsgInfoError::DescribeInstancesError(
                RusotoError::Validation("error".to_string()),
            ));
        }
        self.pages.get(page).cloned().ok_or(AsgInfoError::NoneValue)
    }
}
