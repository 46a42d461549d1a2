//! ECS infrastructure — implements `ClusterApi` on top of `aws-sdk-ecs`.

use anyhow::Result;
use aws_config::SdkConfig;
use aws_sdk_ecs::Client;
use aws_sdk_ecs::error::DisplayErrorContext;
use aws_sdk_ecs::types::{ContainerInstance, Failure};

use crate::application::ports::{ClusterApi, DescribeFailure, DescribeOutput};
use crate::domain::{ClusterIdentifier, ContainerInstanceRef, InstanceDescriptor};

/// ECS control-plane client for a single region.
pub struct EcsClusterApi {
    client: Client,
}

impl EcsClusterApi {
    /// Create a client from a loaded AWS session.
    #[must_use]
    pub fn new(sdk: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk),
        }
    }
}

impl ClusterApi for EcsClusterApi {
    async fn list_container_instances(
        &self,
        cluster: &ClusterIdentifier,
    ) -> Result<Vec<ContainerInstanceRef>> {
        let out = self
            .client
            .list_container_instances()
            .cluster(cluster.as_str())
            .send()
            .await
            .map_err(sdk_error)?;

        Ok(out
            .container_instance_arns()
            .iter()
            .map(|arn| ContainerInstanceRef::new(arn.as_str()))
            .collect())
    }

    async fn describe_container_instances(
        &self,
        cluster: &ClusterIdentifier,
        instances: &[ContainerInstanceRef],
    ) -> Result<DescribeOutput> {
        let arns = instances.iter().map(|i| i.as_str().to_string()).collect();
        let out = self
            .client
            .describe_container_instances()
            .cluster(cluster.as_str())
            .set_container_instances(Some(arns))
            .send()
            .await
            .map_err(sdk_error)?;

        Ok(DescribeOutput {
            descriptors: out
                .container_instances()
                .iter()
                .filter_map(to_descriptor)
                .collect(),
            failures: out.failures().iter().map(to_failure).collect(),
        })
    }

    async fn update_container_agent(
        &self,
        cluster: &ClusterIdentifier,
        instance: &ContainerInstanceRef,
    ) -> Result<()> {
        self.client
            .update_container_agent()
            .cluster(cluster.as_str())
            .container_instance(instance.as_str())
            .send()
            .await
            .map_err(sdk_error)?;
        Ok(())
    }
}

// Instances without an ARN cannot be matched to the listing and are dropped here.
fn to_descriptor(instance: &ContainerInstance) -> Option<InstanceDescriptor> {
    let arn = instance.container_instance_arn()?;
    let agent_version = instance
        .version_info()
        .and_then(|v| v.agent_version())
        .map(str::to_string);
    Some(InstanceDescriptor::new(
        ContainerInstanceRef::new(arn),
        agent_version,
    ))
}

fn to_failure(failure: &Failure) -> DescribeFailure {
    let reason = match (failure.reason(), failure.detail()) {
        (Some(reason), Some(detail)) => format!("{reason} ({detail})"),
        (Some(reason), None) => reason.to_string(),
        (None, Some(detail)) => detail.to_string(),
        (None, None) => "unknown".to_string(),
    };
    DescribeFailure {
        instance: failure.arn().map(ContainerInstanceRef::new),
        reason,
    }
}

fn sdk_error<E: std::error::Error>(err: E) -> anyhow::Error {
    anyhow::anyhow!("{}", DisplayErrorContext(err))
}
