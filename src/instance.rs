use serde::Serialize;
use tracing::{debug, warn};

/// Membership status of an instance inside an Auto Scaling group.
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleState {
    Pending,
    PendingWait,
    PendingProceed,
    Quarantined,
    InService,
    Terminating,
    TerminatingWait,
    TerminatingProceed,
    Terminated,
    Detaching,
    Detached,
    EnteringStandby,
    Standby,
    Other(String),
}

impl From<&str> for LifecycleState {
    fn from(state: &str) -> Self {
        match state {
            "Pending" => LifecycleState::Pending,
            "Pending:Wait" => LifecycleState::PendingWait,
            "Pending:Proceed" => LifecycleState::PendingProceed,
            "Quarantined" => LifecycleState::Quarantined,
            "InService" => LifecycleState::InService,
            "Terminating" => LifecycleState::Terminating,
            "Terminating:Wait" => LifecycleState::TerminatingWait,
            "Terminating:Proceed" => LifecycleState::TerminatingProceed,
            "Terminated" => LifecycleState::Terminated,
            "Detaching" => LifecycleState::Detaching,
            "Detached" => LifecycleState::Detached,
            "EnteringStandby" => LifecycleState::EnteringStandby,
            "Standby" => LifecycleState::Standby,
            other => LifecycleState::Other(other.to_string()),
        }
    }
}

impl LifecycleState {
    /// Launching or serving members; everything on its way out of the group is excluded.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            LifecycleState::Pending
                | LifecycleState::PendingWait
                | LifecycleState::PendingProceed
                | LifecycleState::InService
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupMember {
    pub instance_id: String,
    pub lifecycle_state: LifecycleState,
}

/// Runtime state reported by EC2 for the instance itself.
#[derive(Debug, Clone, PartialEq)]
pub enum InstanceState {
    Pending,
    Running,
    ShuttingDown,
    Terminated,
    Stopping,
    Stopped,
    Other(String),
}

impl From<&str> for InstanceState {
    fn from(state: &str) -> Self {
        match state {
            "pending" => InstanceState::Pending,
            "running" => InstanceState::Running,
            "shutting-down" => InstanceState::ShuttingDown,
            "terminated" => InstanceState::Terminated,
            "stopping" => InstanceState::Stopping,
            "stopped" => InstanceState::Stopped,
            other => InstanceState::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputeInstance {
    pub instance_id: String,
    pub state: Option<InstanceState>,
    pub public_ip_address: Option<String>,
}

impl ComputeInstance {
    pub fn is_running(&self) -> bool {
        self.state == Some(InstanceState::Running)
    }
}

/// Ids and public addresses of running instances. Both lists only grow
/// through `push`, so they stay the same length and index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InstanceAddresses {
    #[serde(rename = "InstanceIds")]
    instance_ids: Vec<String>,
    #[serde(rename = "PublicIPs")]
    public_ips: Vec<String>,
}

impl InstanceAddresses {
    pub fn push(&mut self, instance_id: String, public_ip: String) {
        self.instance_ids.push(instance_id);
        self.public_ips.push(public_ip);
    }

    pub fn instance_ids(&self) -> &[String] {
        &self.instance_ids
    }

    pub fn public_ips(&self) -> &[String] {
        &self.public_ips
    }

    pub fn first_instance_id(&self) -> Option<&str> {
        self.instance_ids.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.instance_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instance_ids.is_empty()
    }
}

pub fn active_member_ids(members: &[GroupMember]) -> Vec<String> {
    members
        .iter()
        .filter(|member| {
            let active = member.lifecycle_state.is_active();
            debug!(
                instance_id = %member.instance_id,
                lifecycle_state = ?member.lifecycle_state,
                active,
                "group member"
            );
            active
        })
        .map(|member| member.instance_id.clone())
        .collect()
}

pub fn project_running(instances: &[ComputeInstance]) -> InstanceAddresses {
    let mut addresses = InstanceAddresses::default();
    for instance in instances.iter().filter(|instance| instance.is_running()) {
        let public_ip = match instance.public_ip_address {
            Some(ref address) => address.clone(),
            None => {
                warn!(instance_id = %instance.instance_id, "running instance has no public address");
                String::new()
            }
        };
        debug!(instance_id = %instance.instance_id, %public_ip, "running instance");
        addresses.push(instance.instance_id.clone(), public_ip);
    }
    addresses
}
