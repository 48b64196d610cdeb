use crate::error::RegistryError;
use crate::params::QueryPairs;
use crate::registry_client::RegistryClient;
use crate::transport::{RequestBody, RequestContext};
use crate::validation::IdentifierKind;

use models::{Rule, RuleType};

use reqwest::{Method, StatusCode};
use url::Url;

/// Where a rule applies: registry-wide, to one group, or to one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleScope {
    Global,
    Group {
        group_id: String,
    },
    Artifact {
        group_id: String,
        artifact_id: String,
    },
}

impl RuleScope {
    pub fn group(group_id: impl Into<String>) -> Self {
        RuleScope::Group {
            group_id: group_id.into(),
        }
    }

    pub fn artifact(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        RuleScope::Artifact {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    fn segments(&self) -> Vec<&str> {
        match self {
            RuleScope::Global => vec!["admin", "rules"],
            RuleScope::Group { group_id } => vec!["groups", group_id.as_str(), "rules"],
            RuleScope::Artifact {
                group_id,
                artifact_id,
            } => vec![
                "groups",
                group_id.as_str(),
                "artifacts",
                artifact_id.as_str(),
                "rules",
            ],
        }
    }
}

impl RegistryClient {
    fn rules_url(
        &self,
        scope: &RuleScope,
        rule_type: Option<RuleType>,
    ) -> Result<Url, RegistryError> {
        match scope {
            RuleScope::Global => {}
            RuleScope::Group { group_id } => self.check_id(group_id, IdentifierKind::GroupId)?,
            RuleScope::Artifact {
                group_id,
                artifact_id,
            } => {
                self.check_id(group_id, IdentifierKind::GroupId)?;
                self.check_id(artifact_id, IdentifierKind::ArtifactId)?;
            }
        }

        let mut segments = scope.segments();
        if let Some(rule_type) = rule_type {
            segments.push(rule_type.as_str());
        }

        self.endpoint(&segments, &QueryPairs::new())
    }

    /// Rule types configured at `scope`.
    pub async fn list_rules(
        &self,
        ctx: &RequestContext,
        scope: &RuleScope,
    ) -> Result<Vec<RuleType>, RegistryError> {
        let url = self.rules_url(scope, None)?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    pub async fn create_rule(
        &self,
        ctx: &RequestContext,
        scope: &RuleScope,
        rule: &Rule,
    ) -> Result<(), RegistryError> {
        let url = self.rules_url(scope, None)?;
        let body = RequestBody::structured(rule)?;
        self.fetch_empty(ctx, Method::POST, url, body, StatusCode::NO_CONTENT)
            .await
    }

    pub async fn get_rule(
        &self,
        ctx: &RequestContext,
        scope: &RuleScope,
        rule_type: RuleType,
    ) -> Result<Rule, RegistryError> {
        let url = self.rules_url(scope, Some(rule_type))?;
        self.fetch(ctx, Method::GET, url, RequestBody::Empty, StatusCode::OK)
            .await
    }

    /// Change the configured level; returns the stored rule.
    pub async fn update_rule(
        &self,
        ctx: &RequestContext,
        scope: &RuleScope,
        rule: &Rule,
    ) -> Result<Rule, RegistryError> {
        let url = self.rules_url(scope, Some(rule.rule_type))?;
        let body = RequestBody::structured(rule)?;
        self.fetch(ctx, Method::PUT, url, body, StatusCode::OK).await
    }

    pub async fn delete_rule(
        &self,
        ctx: &RequestContext,
        scope: &RuleScope,
        rule_type: RuleType,
    ) -> Result<(), RegistryError> {
        let url = self.rules_url(scope, Some(rule_type))?;
        self.fetch_empty(
            ctx,
            Method::DELETE,
            url,
            RequestBody::Empty,
            StatusCode::NO_CONTENT,
        )
        .await
    }

    pub async fn delete_all_rules(
        &self,
        ctx: &RequestContext,
        scope: &RuleScope,
    ) -> Result<(), RegistryError> {
        let url = self.rules_url(scope, None)?;
        self.fetch_empty(
            ctx,
            Method::DELETE,
            url,
            RequestBody::Empty,
            StatusCode::NO_CONTENT,
        )
        .await
    }
}
