use async_trait::async_trait;
use aws_sdk_ssm::config::Region;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::operation::get_parameter::GetParameterOutput;
use aws_sdk_ssm::Client as SsmClient;
use tracing::debug;

use crate::config::AwsSettings;
use crate::domain::parameter::ParameterFetcher;
use crate::domain::FetchError;

/// Parameter fetcher backed by AWS Systems Manager Parameter Store
#[derive(Debug, Clone)]
pub struct SsmParameterFetcher {
    client: SsmClient,
}

impl SsmParameterFetcher {
    pub fn new(client: SsmClient) -> Self {
        Self { client }
    }

    /// Builds a client from the AWS shared config chain (env, profile, IMDS)
    pub async fn from_env() -> Self {
        Self::from_settings(&AwsSettings::default()).await
    }

    /// Builds a client from the shared config chain with optional overrides
    pub async fn from_settings(settings: &AwsSettings) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }

        if let Some(endpoint_url) = &settings.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let config = loader.load().await;
        Self::new(SsmClient::new(&config))
    }
}

fn parameter_value(name: &str, output: &GetParameterOutput) -> Result<String, FetchError> {
    output
        .parameter()
        .and_then(|p| p.value())
        .map(|v| v.to_string())
        .ok_or_else(|| FetchError::missing_value(name))
}

#[async_trait]
impl ParameterFetcher for SsmParameterFetcher {
    async fn fetch(&self, name: &str, with_decryption: bool) -> Result<String, FetchError> {
        debug!(name, with_decryption, "Calling SSM GetParameter");

        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_parameter_not_found() {
                    FetchError::not_found(name)
                } else {
                    FetchError::service(format!(
                        "AWS SSM error: {}",
                        DisplayErrorContext(&service_error)
                    ))
                }
            })?;

        parameter_value(name, &output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ssm::types::Parameter;

    #[test]
    fn test_parameter_value_extracts_string() {
        let output = GetParameterOutput::builder()
            .parameter(Parameter::builder().name("testtest").value("sup").build())
            .build();

        assert_eq!(parameter_value("testtest", &output).unwrap(), "sup");
    }

    #[test]
    fn test_parameter_without_value_is_an_error() {
        let output = GetParameterOutput::builder()
            .parameter(Parameter::builder().name("testtest").build())
            .build();

        assert_eq!(
            parameter_value("testtest", &output),
            Err(FetchError::missing_value("testtest"))
        );
    }

    #[test]
    fn test_missing_parameter_block_is_an_error() {
        let output = GetParameterOutput::builder().build();

        assert!(matches!(
            parameter_value("testtest", &output),
            Err(FetchError::MissingValue { .. })
        ));
    }
}
