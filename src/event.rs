use std::convert::TryFrom;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AsgInfoError;
use crate::instance::InstanceAddresses;

pub const ASG_PROPERTY: &str = "ASG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum RequestType {
    Create,
    Update,
    Delete,
    #[serde(other)]
    Unknown,
}

/// CloudFormation custom resource request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceEvent {
    pub request_type: RequestType,
    #[serde(default)]
    pub stack_id: String,
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub logical_resource_id: String,
    #[serde(default)]
    pub physical_resource_id: Option<String>,
    #[serde(default)]
    pub resource_properties: Map<String, Value>,
}

impl CustomResourceEvent {
    pub fn group_name(&self) -> Result<&str, AsgInfoError> {
        match self.resource_properties.get(ASG_PROPERTY) {
            Some(Value::String(name)) if !name.is_empty() => Ok(name.as_str()),
            _ => Err(AsgInfoError::MissingProperty(ASG_PROPERTY)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultEnvelope {
    pub physical_resource_id: String,
    pub data: InstanceAddresses,
}

impl TryFrom<InstanceAddresses> for ResultEnvelope {
    type Error = AsgInfoError;

    fn try_from(data: InstanceAddresses) -> Result<Self, Self::Error> {
        let physical_resource_id = data
            .first_instance_id()
            .ok_or(AsgInfoError::EmptyResult)?
            .to_string();
        Ok(ResultEnvelope {
            physical_resource_id,
            data,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Success,
    Failed,
}

/// Response document CloudFormation expects for a custom resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceResponse {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub physical_resource_id: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InstanceAddresses>,
}

impl CustomResourceResponse {
    pub fn new(event: &CustomResourceEvent, result: Result<ResultEnvelope, AsgInfoError>) -> Self {
        let (status, reason, physical_resource_id, data) = match result {
            Ok(envelope) => (
                ResponseStatus::Success,
                None,
                envelope.physical_resource_id,
                Some(envelope.data),
            ),
            Err(error) => (
                ResponseStatus::Failed,
                Some(error.to_string()),
                event
                    .physical_resource_id
                    .clone()
                    .unwrap_or_else(|| event.request_id.clone()),
                None,
            ),
        };
        CustomResourceResponse {
            status,
            reason,
            physical_resource_id,
            stack_id: event.stack_id.clone(),
            request_id: event.request_id.clone(),
            logical_resource_id: event.logical_resource_id.clone(),
            data,
        }
    }
}
