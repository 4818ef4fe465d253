use std::error::Error;

use rusoto_autoscaling::DescribeAutoScalingGroupsError;
use rusoto_core::RusotoError;
use rusoto_ec2::DescribeInstancesError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum AsgInfoError {
    NoneValue,
    MissingProperty(&'static str),
    EmptyResult,
    PaginationLimitExceeded(usize),
    DescribeGroupsError(RusotoError<DescribeAutoScalingGroupsError>),
    DescribeInstancesError(RusotoError<DescribeInstancesError>),
}

impl Display for AsgInfoError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            AsgInfoError::NoneValue => write!(f, "Value is None"),
            AsgInfoError::MissingProperty(name) => {
                write!(f, "{} property is missing or is not a string", name)
            }
            AsgInfoError::EmptyResult => {
                write!(f, "No running instances found in Auto Scaling group")
            }
            AsgInfoError::PaginationLimitExceeded(pages) => write!(
                f,
                "Instance description did not finish within {} pages",
                pages
            ),
            AsgInfoError::DescribeGroupsError(ref error) => {
                write!(f, "Failed to describe Auto Scaling group: {}", error)
            }
            AsgInfoError::DescribeInstancesError(ref error) => {
                write!(f, "Failed to describe instances: {}", error)
            }
        }
    }
}

impl Error for AsgInfoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            AsgInfoError::DescribeGroupsError(ref error) => Some(error),
            AsgInfoError::DescribeInstancesError(ref error) => Some(error),
            _ => None,
        }
    }
}

impl From<RusotoError<DescribeAutoScalingGroupsError>> for AsgInfoError {
    fn from(e: RusotoError<DescribeAutoScalingGroupsError>) -> AsgInfoError {
        AsgInfoError::DescribeGroupsError(e)
    }
}

impl From<RusotoError<DescribeInstancesError>> for AsgInfoError {
    fn from(e: RusotoError<DescribeInstancesError>) -> AsgInfoError {
        AsgInfoError::DescribeInstancesError(e)
    }
}
